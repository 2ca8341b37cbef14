//! Orbit-camera pose record.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};
use terramath::Float;

/// Yaw/pitch/distance pose of the orbiting camera.
///
/// Camera gesture handling lives entirely outside the engine; this record
/// exists so the host can report where the camera sits in state dumps. The
/// defaults match the toy's initial three-quarter view.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct OrbitPose {
    /// Rotation around the world `y` axis, in radians.
    pub yaw: Float,
    /// Elevation angle, in radians.
    pub pitch: Float,
    /// Distance from the cube center.
    pub distance: Float,
}
impl Default for OrbitPose {
    fn default() -> OrbitPose {
        OrbitPose {
            yaw: PI * 0.25,
            pitch: PI * 0.22,
            distance: 2.2,
        }
    }
}
