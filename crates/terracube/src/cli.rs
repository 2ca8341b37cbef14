//! Command-line interface for driving the engine headlessly.

use std::num::ParseFloatError;
use std::str::FromStr;

use eyre::{Result, bail};
use rand::{Rng, SeedableRng};
use terracube_core::{DEFAULT_SHUFFLE_LENGTH, Face, Simulation};
use terracube_view::{OrbitPose, render_to_text};
use terramath::cgmath::vec3;
use terramath::{Float, Vec3};

/// Terracube command-line interface.
///
/// Each subcommand constructs a fresh engine, runs a scripted flow, and
/// prints the resulting state dump as one line of JSON.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print the solved-state dump.
    Dump,
    /// Drag a face by a world-space delta, release, settle, and dump.
    Drag {
        /// Face to grab: R, L, U, D, F, or B.
        face: Face,

        /// Drag delta as `x,y,z` in world units, measured from the drag
        /// start.
        #[arg(long, default_value = "0.38,0.03,0")]
        delta: DragDelta,

        /// Seconds of simulated time per settle tick.
        #[arg(long, default_value_t = 0.016)]
        dt: Float,
    },
    /// Scramble the lattice and dump the result.
    Shuffle {
        /// Number of random moves.
        #[arg(short, long, default_value_t = DEFAULT_SHUFFLE_LENGTH)]
        moves: usize,

        /// Seed for a reproducible scramble; OS entropy if omitted.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Run the shuffle-then-reset button flow and verify it ends solved.
    Flow {
        /// Number of random moves before the reset.
        #[arg(short, long, default_value_t = DEFAULT_SHUFFLE_LENGTH)]
        moves: usize,
    },
}

/// Comma-separated world-space drag vector.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragDelta(pub Vec3);

/// Error parsing an `x,y,z` drag vector.
#[derive(Debug, thiserror::Error)]
pub(crate) enum BadDragDelta {
    /// Wrong number of comma-separated parts.
    #[error("expected three comma-separated components, got {0}")]
    ComponentCount(usize),
    /// A part was not a number.
    #[error("bad component: {0}")]
    Component(#[from] ParseFloatError),
}

impl FromStr for DragDelta {
    type Err = BadDragDelta;

    fn from_str(s: &str) -> Result<DragDelta, BadDragDelta> {
        let components = s
            .split(',')
            .map(|part| part.trim().parse::<Float>())
            .collect::<Result<Vec<Float>, _>>()?;
        match components[..] {
            [x, y, z] => Ok(DragDelta(vec3(x, y, z))),
            _ => Err(BadDragDelta::ComponentCount(components.len())),
        }
    }
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    let orbit = OrbitPose::default();

    match subcommand {
        Subcommand::Dump => {
            let sim = Simulation::new();
            print_dump(&sim, &orbit)
        }

        Subcommand::Drag { face, delta, dt } => {
            if dt <= 0.0 {
                bail!("tick duration must be positive");
            }

            let mut sim = Simulation::new();
            sim.start_face_drag(face);
            sim.update_drag_vector(delta.0);
            sim.release_drag();
            while sim.active_move().is_some() {
                sim.tick(dt);
            }
            print_dump(&sim, &orbit)
        }

        Subcommand::Shuffle { moves, seed } => {
            let mut sim = Simulation::new();
            match seed {
                Some(seed) => {
                    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
                    sim.shuffle(moves, || rng.random());
                }
                None => sim.shuffle_random(moves),
            }
            print_dump(&sim, &orbit)
        }

        Subcommand::Flow { moves } => {
            let mut sim = Simulation::new();
            sim.shuffle_random(moves);
            sim.reset();
            if !sim.is_solved() {
                bail!("reset did not restore the solved arrangement");
            }
            print_dump(&sim, &orbit)
        }
    }
}

fn print_dump(sim: &Simulation, orbit: &OrbitPose) -> Result<()> {
    println!("{}", render_to_text(sim, orbit)?);
    Ok(())
}
