//! Puzzle state engine for the Terracube sliding-layer globe.
//!
//! The engine owns the authoritative 27-cubelet lattice and the single
//! active-move slot, and translates continuous face drags into discrete
//! layer moves: drag tracking, one-shot tangent-axis classification,
//! snap-to-grid on release, and a self-driven settle animation ticked by an
//! external clock. Rendering, picking, and input wiring live outside; they
//! only read snapshots through the accessors here.

mod face;
mod lattice;
mod piece;
mod sim;
#[cfg(test)]
mod tests;

pub use face::Face;
pub use lattice::{Cubelet, Lattice};
pub use piece::{Piece, PieceSet};
pub use sim::{ActiveMove, Simulation};

use terramath::Float;

/// Number of cubelets in the lattice.
pub const PIECE_COUNT: usize = 27;

/// Number of cubelets in one face layer.
pub const LAYER_PIECE_COUNT: usize = 9;

/// Drag magnitude (world units) below which a gesture has not yet committed
/// to a tangent direction.
pub const DRAG_AXIS_THRESHOLD: Float = 0.006;

/// Duration of the settle animation, in simulated seconds.
pub const SETTLE_DURATION: Float = 0.12;

/// Number of random moves in a default shuffle.
pub const DEFAULT_SHUFFLE_LENGTH: usize = 20;
