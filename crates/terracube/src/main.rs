//! Headless host for the Terracube sliding-layer globe puzzle.
//!
//! The interactive frontend (rendering, picking, pointer wiring) lives
//! elsewhere; this binary drives the same engine with scripted gestures and
//! prints state dumps for automated verification.

use clap::Parser;

mod cli;

fn main() -> eyre::Result<()> {
    color_eyre::install().expect("error initializing panic handler");
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args.subcommand)
}
