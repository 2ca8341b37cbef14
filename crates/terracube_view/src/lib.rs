//! Read-only boundary between the Terracube engine and its host.
//!
//! Everything here consumes engine snapshots and never mutates them:
//! per-frame piece placements for the render synchronizer (including the
//! wrap-duplicate positions that make a sliding layer reappear at the
//! opposite edge), the orbit-camera pose record, and the flat state dump
//! used for automated verification and screenshotting.

mod camera;
mod dump;
mod placement;

pub use camera::OrbitPose;
pub use dump::{
    CoordinateSystem, CubeletRecord, FaceRecord, MoveRecord, PhaseRecord, StateDump,
    render_to_text,
};
pub use placement::{PiecePlacement, piece_placements};
