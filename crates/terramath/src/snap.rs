//! Offset snapping and unit-cube wrapping.

use crate::{CELL_SIZE, CUBE_HALF, Float};

/// Rounds a continuous world-space offset to a whole number of cells.
///
/// The snap boundary sits at half a cell width (1/6 of the cube extent);
/// exact halves round away from zero.
pub fn snap_offset_steps(offset: Float) -> i8 {
    (offset / CELL_SIZE).round() as i8
}

/// Wraps a world coordinate into the cube's `[-CUBE_HALF, CUBE_HALF]` extent.
///
/// A moving layer slides off one edge and reappears at the opposite edge, so
/// displaced cell centers wrap with the cube's full extent as the period.
pub fn wrap_unit_cube_coordinate(value: Float) -> Float {
    let period = 2.0 * CUBE_HALF;
    let mut wrapped = value;

    while wrapped > CUBE_HALF {
        wrapped -= period;
    }
    while wrapped < -CUBE_HALF {
        wrapped += period;
    }

    wrapped
}
