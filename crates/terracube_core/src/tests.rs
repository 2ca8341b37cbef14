//! Engine state-machine tests driven with synthetic gestures and time.

use approx::assert_abs_diff_eq;
use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng};
use strum::IntoEnumIterator;
use terramath::cgmath::vec3;
use terramath::{Axis, CELL_SIZE, Float};

use crate::{DEFAULT_SHUFFLE_LENGTH, Face, Piece, Simulation};

/// Ticks the settle animation well past its duration.
fn tick_past_settle(sim: &mut Simulation) {
    for _ in 0..10 {
        sim.tick(0.016);
    }
}

#[test]
fn selects_exactly_nine_pieces_for_every_face() {
    for face in Face::iter() {
        let mut sim = Simulation::new();
        sim.start_face_drag(face);

        let active = sim.active_move().expect("move should be active");
        assert!(active.is_dragging());
        assert_eq!(9, active.selected().len(), "face {face}");
        assert_eq!(None, active.axis());
    }
}

#[test]
fn commits_snapped_translation_along_the_resolved_tangent() {
    let mut sim = Simulation::new();
    sim.start_face_drag(Face::F);
    sim.update_drag_vector(vec3(0.38, 0.03, 0.0));
    sim.release_drag();
    tick_past_settle(&mut sim);

    assert!(sim.active_move().is_none());
    assert!(sim.lattice().is_valid_permutation());
    for cubelet in sim.cubelets() {
        let piece = cubelet.id();
        if cubelet.origin().z.get() == 2 {
            assert_eq!(
                cubelet.origin().x.offset_by(1),
                cubelet.index().x,
                "piece {piece} should have shifted along x",
            );
        } else {
            assert_eq!(cubelet.origin(), cubelet.index());
        }
    }
}

#[test]
fn release_with_no_resolved_axis_discards_the_move() {
    let mut sim = Simulation::new();
    sim.start_face_drag(Face::F);
    sim.update_drag_vector(vec3(0.001, 0.002, 0.0));
    sim.release_drag();

    assert!(sim.active_move().is_none());
    assert!(sim.is_solved());
}

#[test]
fn sub_threshold_drag_springs_back_without_a_lattice_change() {
    let mut sim = Simulation::new();
    sim.start_face_drag(Face::F);
    sim.update_drag_vector(vec3(0.1, 0.0, 0.0));
    sim.release_drag();

    let active = sim.active_move().expect("move should be settling");
    assert!(active.is_settling());
    assert_eq!(Some(0), active.snapped_steps());

    tick_past_settle(&mut sim);
    assert!(sim.active_move().is_none());
    assert!(sim.is_solved());
}

#[test]
fn settle_eases_the_offset_toward_the_snapped_target() {
    let mut sim = Simulation::new();
    sim.start_face_drag(Face::F);
    sim.update_drag_vector(vec3(0.1, 0.0, 0.0));
    sim.release_drag();

    // Half the settle duration at cubic ease-out: 1 - 0.5^3 of the way back.
    sim.tick(0.06);
    let active = sim.active_move().expect("still settling");
    assert_abs_diff_eq!(0.0125, active.offset(), epsilon = 1e-4);
}

#[test]
fn second_start_is_rejected_while_a_move_is_active() {
    let mut sim = Simulation::new();
    sim.start_face_drag(Face::F);
    sim.update_drag_vector(vec3(0.2, 0.0, 0.0));
    let before = *sim.active_move().expect("move should be active");

    sim.start_face_drag(Face::U);

    let after = sim.active_move().expect("first move should survive");
    assert_eq!(before.face(), after.face());
    assert_eq!(before.selected(), after.selected());
    assert_eq!(before.axis(), after.axis());
    assert!(after.is_dragging());
}

#[test]
fn drag_offset_is_zero_for_unselected_pieces_and_idle_engines() {
    let mut sim = Simulation::new();
    for id in 0..27 {
        assert_eq!(0.0, sim.piece_drag_offset(Piece(id)));
    }

    sim.start_face_drag(Face::F);
    // Selection is frozen at gesture start, before any axis resolves.
    assert!(sim.is_piece_in_moving_layer(Piece(2)));
    assert_eq!(0.0, sim.piece_drag_offset(Piece(2)));

    sim.update_drag_vector(vec3(0.2, 0.0, 0.0));
    let selected = sim.active_move().expect("move should be active").selected();
    for id in 0..27 {
        let piece = Piece(id);
        let expected = if selected.contains(piece) { 0.2 } else { 0.0 };
        assert_eq!(expected, sim.piece_drag_offset(piece), "piece {piece}");
    }
}

#[test]
fn drag_offset_clamps_to_one_cell_width() {
    let mut sim = Simulation::new();
    sim.start_face_drag(Face::F);
    sim.update_drag_vector(vec3(2.5, 0.0, 0.0));

    let active = sim.active_move().expect("move should be active");
    assert_abs_diff_eq!(CELL_SIZE, active.offset());
    assert_eq!(Some(Axis::X), active.axis());
}

#[test]
fn axis_classification_is_one_shot() {
    let mut sim = Simulation::new();
    sim.start_face_drag(Face::F);
    sim.update_drag_vector(vec3(0.2, 0.0, 0.0));
    // A later drag crossing the diagonal must not swap axes.
    sim.update_drag_vector(vec3(0.05, 0.3, 0.0));

    let active = sim.active_move().expect("move should be active");
    assert_eq!(Some(Axis::X), active.axis());
    assert_abs_diff_eq!(0.05, active.offset());
}

#[test]
fn cancel_discards_any_phase_without_touching_the_lattice() {
    let mut sim = Simulation::new();
    sim.start_face_drag(Face::R);
    sim.update_drag_vector(vec3(0.0, 0.3, 0.0));
    sim.cancel_active_drag();
    assert!(sim.active_move().is_none());
    assert!(sim.is_solved());

    sim.start_face_drag(Face::R);
    sim.update_drag_vector(vec3(0.0, 0.3, 0.0));
    sim.release_drag();
    sim.tick(0.016);
    sim.cancel_active_drag();
    assert!(sim.active_move().is_none());
    assert!(sim.is_solved());
}

#[test]
fn out_of_phase_calls_are_no_ops() {
    let mut sim = Simulation::new();
    sim.release_drag();
    sim.tick(1.0);
    sim.update_drag_vector(vec3(0.4, 0.0, 0.0));
    assert!(sim.active_move().is_none());
    assert!(sim.is_solved());

    // Ticking while still dragging must not advance anything.
    sim.start_face_drag(Face::F);
    sim.update_drag_vector(vec3(0.2, 0.0, 0.0));
    sim.tick(1.0);
    let active = sim.active_move().expect("move should be active");
    assert!(active.is_dragging());
    assert_abs_diff_eq!(0.2, active.offset());
}

#[test]
fn shuffle_draws_four_values_per_move_and_leaves_a_valid_scramble() {
    let picks: [Float; 16] = [
        0.02, 0.88, 0.15, 0.90, //
        0.45, 0.24, 0.63, 0.10, //
        0.70, 0.55, 0.42, 0.84, //
        0.31, 0.63, 0.91, 0.12,
    ];
    let mut draws = 0;
    let rng = |count: &mut usize| {
        let value = picks[*count % picks.len()];
        *count += 1;
        value
    };

    let mut sim = Simulation::new();
    sim.shuffle(DEFAULT_SHUFFLE_LENGTH, || rng(&mut draws));

    assert_eq!(DEFAULT_SHUFFLE_LENGTH * 4, draws);
    assert!(!sim.is_solved());
    assert!(sim.lattice().is_valid_permutation());
}

#[test]
fn shuffle_is_deterministic_under_a_fixed_seed() {
    let scramble = |seed: u64| {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        let mut sim = Simulation::new();
        sim.shuffle(DEFAULT_SHUFFLE_LENGTH, || rng.random());
        sim
    };

    let a = scramble(7);
    let b = scramble(7);
    assert_eq!(a.lattice(), b.lattice());
    assert!(a.lattice().is_valid_permutation());
}

#[test]
fn shuffle_discards_an_in_flight_move() {
    let mut sim = Simulation::new();
    sim.start_face_drag(Face::F);
    sim.update_drag_vector(vec3(0.3, 0.0, 0.0));

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(3);
    sim.shuffle(5, || rng.random());

    assert!(sim.active_move().is_none());
    assert!(sim.lattice().is_valid_permutation());
}

#[test]
fn reset_is_idempotent_regardless_of_history() {
    let mut sim = Simulation::new();
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(11);
    sim.shuffle(DEFAULT_SHUFFLE_LENGTH, || rng.random());
    sim.start_face_drag(Face::U);

    sim.reset();
    assert!(sim.is_solved());
    assert!(sim.active_move().is_none());

    sim.reset();
    assert!(sim.is_solved());
}

#[test]
fn discrete_move_with_zero_steps_is_a_no_op() {
    let mut sim = Simulation::new();
    sim.apply_discrete_move(Face::U, Axis::Z, 0);
    assert!(sim.is_solved());
}

#[test]
fn lattice_stays_a_bijection_through_arbitrary_gesture_storms() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(20_260_806);
    let mut sim = Simulation::new();

    for _ in 0..500 {
        match rng.random_range(0..6) {
            0 => {
                let face = match rng.random_range(0..6) {
                    0 => Face::R,
                    1 => Face::L,
                    2 => Face::U,
                    3 => Face::D,
                    4 => Face::F,
                    _ => Face::B,
                };
                sim.start_face_drag(face);
            }
            1 => {
                let delta = vec3(
                    rng.random_range(-0.6..0.6),
                    rng.random_range(-0.6..0.6),
                    rng.random_range(-0.6..0.6),
                );
                sim.update_drag_vector(delta);
            }
            2 => sim.release_drag(),
            3 => sim.tick(rng.random_range(0.0..0.05)),
            4 => sim.cancel_active_drag(),
            _ => {
                let count = rng.random_range(1..4);
                let mut unit = rng.clone();
                sim.shuffle(count, || unit.random());
            }
        }
        assert!(sim.lattice().is_valid_permutation());
        if let Some(active) = sim.active_move() {
            assert_eq!(9, active.selected().len());
        }
    }
}
