//! Flat serialization of the whole observable state.
//!
//! The dump is the debug/test hook the host exposes: one JSON record with
//! the coordinate conventions, the camera pose, the active-move summary,
//! and all 27 cubelet positions. Automated verification diffs these
//! records, so continuous values are rounded to four decimals for stable
//! text comparison.

use serde::{Deserialize, Serialize};
use terracube_core::{ActiveMove, Face, Simulation};
use terramath::{Axis, CELL_SIZE, CUBE_HALF, Float, GridIndex};

use crate::OrbitPose;

const COORDINATE_NOTE: &str = "origin at cube center; axes are world-fixed: \
     +x right, +y up, +z toward initial camera direction";

fn round4(value: Float) -> Float {
    (value * 10_000.0).round() / 10_000.0
}

/// World coordinate conventions, pinned for dump consumers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateSystem {
    /// Human-readable convention note.
    pub note: String,
    /// World-space extent of the cube along each axis.
    pub cube_bounds: [Float; 2],
    /// Width of one lattice cell.
    pub cell_size: Float,
}
impl Default for CoordinateSystem {
    fn default() -> CoordinateSystem {
        CoordinateSystem {
            note: COORDINATE_NOTE.to_string(),
            cube_bounds: [-CUBE_HALF, CUBE_HALF],
            cell_size: CELL_SIZE,
        }
    }
}

/// A face reference spelled out as its normal-axis/sign/layer triple.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FaceRecord {
    /// Axis of the outward normal.
    pub normal_axis: Axis,
    /// Sign of the outward normal: `-1` or `+1`.
    pub normal_sign: i8,
    /// Layer the face selects along its normal axis: `0` or `2`.
    pub layer_index: u8,
}
impl From<Face> for FaceRecord {
    fn from(face: Face) -> FaceRecord {
        FaceRecord {
            normal_axis: face.normal_axis(),
            normal_sign: face.normal_sign().int(),
            layer_index: face.layer().get(),
        }
    }
}

/// Phase of the active move.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PhaseRecord {
    /// A pointer is down and the drag is being tracked.
    Dragging,
    /// The layer is animating into place.
    Settling,
}

/// Summary of the move in flight.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    /// Current phase.
    pub phase: PhaseRecord,
    /// Face being moved.
    pub face: FaceRecord,
    /// Resolved tangent axis, if any.
    pub move_axis: Option<Axis>,
    /// Live offset in world units, rounded to four decimals.
    pub raw_offset: Float,
    /// Snapped step count; zero until release decides it.
    pub snapped_steps: i8,
    /// Size of the frozen selection.
    pub selected_count: usize,
}
impl From<&ActiveMove> for MoveRecord {
    fn from(active: &ActiveMove) -> MoveRecord {
        MoveRecord {
            phase: if active.is_dragging() {
                PhaseRecord::Dragging
            } else {
                PhaseRecord::Settling
            },
            face: active.face().into(),
            move_axis: active.axis(),
            raw_offset: round4(active.offset()),
            snapped_steps: active.snapped_steps().unwrap_or(0),
            selected_count: active.selected().len(),
        }
    }
}

/// One cubelet's id and current cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct CubeletRecord {
    /// Stable piece id.
    pub id: u8,
    /// Cell the cubelet currently occupies.
    pub index: GridIndex,
}

/// The whole observable state as one flat record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StateDump {
    /// Coordinate conventions.
    pub coordinate_system: CoordinateSystem,
    /// Camera pose, rounded to four decimals.
    pub camera: OrbitPose,
    /// Active-move summary, or `None` when the engine is idle.
    #[serde(rename = "move")]
    pub active_move: Option<MoveRecord>,
    /// All 27 cubelets in id order.
    pub cubelets: Vec<CubeletRecord>,
}
impl StateDump {
    /// Captures the engine and camera state.
    pub fn capture(sim: &Simulation, orbit: &OrbitPose) -> StateDump {
        StateDump {
            coordinate_system: CoordinateSystem::default(),
            camera: OrbitPose {
                yaw: round4(orbit.yaw),
                pitch: round4(orbit.pitch),
                distance: round4(orbit.distance),
            },
            active_move: sim.active_move().map(MoveRecord::from),
            cubelets: sim
                .cubelets()
                .iter()
                .map(|cubelet| CubeletRecord {
                    id: cubelet.id().0,
                    index: cubelet.index(),
                })
                .collect(),
        }
    }
}

/// Serializes the engine and camera to one line of JSON.
pub fn render_to_text(sim: &Simulation, orbit: &OrbitPose) -> serde_json::Result<String> {
    serde_json::to_string(&StateDump::capture(sim, orbit))
}
