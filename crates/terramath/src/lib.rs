//! Grid coordinate, gesture classification, and easing math for the Terracube
//! sliding-layer puzzle.
//!
//! Everything in this crate is a pure function over well-typed numbers: no
//! state, no failure modes. The puzzle engine makes every numeric decision
//! through here.

pub use cgmath;

/// Floating-point type used for world-space geometry.
pub type Float = f32;

/// Vector type for drag deltas and world-space positions.
pub type Vec3 = cgmath::Vector3<Float>;

/// Half-extent of the cube along each axis; the lattice spans
/// `[-CUBE_HALF, CUBE_HALF]` in world space.
pub const CUBE_HALF: Float = 0.5;

/// Width of one lattice cell, a third of the cube's full extent.
pub const CELL_SIZE: Float = 1.0 / 3.0;

/// Radius of the globe carved into the lattice. Consumed by external mesh
/// generation; the engine itself never reads it.
pub const GLOBE_RADIUS: Float = 0.49;

mod axis;
mod ease;
mod grid;
mod snap;

pub use axis::{Axis, Sign, classify_face_tangent_axis};
pub use ease::ease_out_cubic;
pub use grid::{GRID_VALUES, GridCoord, GridIndex, index_to_center, wrap_mod3};
pub use snap::{snap_offset_steps, wrap_unit_cube_coordinate};
