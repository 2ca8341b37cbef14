//! World axes, normal signs, and drag-to-axis classification.

use cgmath::Vector3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{Float, Vec3};

/// World axis.
///
/// Tangent pairs come back in a fixed canonical order: `x → (y, z)`,
/// `y → (x, z)`, `z → (x, y)`. Classification ties are broken in favor of
/// the first axis of the pair, so the order is load-bearing.
#[derive(Debug, Display, EnumIter, EnumString, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// The `x` axis.
    X,
    /// The `y` axis.
    Y,
    /// The `z` axis.
    Z,
}
impl Axis {
    /// All three axes, in canonical order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the two axes orthogonal to this one, in canonical order.
    pub fn other_two(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    /// Returns the component of `v` along this axis.
    pub fn component(self, v: Vec3) -> Float {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Returns the unit vector along this axis.
    pub fn unit_vector(self) -> Vec3 {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }
}

/// Sign of a face normal along its axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Negative direction.
    Neg,
    /// Positive direction.
    Pos,
}
impl Sign {
    /// `-1` or `+1`.
    pub const fn int(self) -> i8 {
        match self {
            Sign::Neg => -1,
            Sign::Pos => 1,
        }
    }

    /// `-1.0` or `+1.0`.
    pub const fn unit(self) -> Float {
        self.int() as Float
    }
}

/// Classifies which tangent axis a face drag selects.
///
/// Returns `None` while both tangent components of `drag_delta` are below
/// `threshold`; the gesture has not yet committed to a direction and the
/// caller should keep waiting for more drag. Otherwise returns the
/// larger-magnitude tangent axis, ties favoring the first of the canonical
/// pair.
///
/// The classification is one-shot: once a caller receives `Some`, it must
/// not re-classify for the remainder of the move, or a drag crossing the
/// diagonal mid-gesture would swap axes.
pub fn classify_face_tangent_axis(
    normal_axis: Axis,
    drag_delta: Vec3,
    threshold: Float,
) -> Option<Axis> {
    let [a, b] = normal_axis.other_two();
    let a_mag = a.component(drag_delta).abs();
    let b_mag = b.component(drag_delta).abs();

    if a_mag.max(b_mag) < threshold {
        return None;
    }

    Some(if a_mag >= b_mag { a } else { b })
}
