//! The 3-valued lattice coordinate and the 27-cell grid index.

use std::fmt;

use cgmath::vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Axis, CELL_SIZE, Float, Vec3};

/// Lattice coordinate along one axis: `0`, `1`, or `2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GridCoord(u8);

/// The three valid lattice coordinates, in order.
pub const GRID_VALUES: [GridCoord; 3] = [GridCoord(0), GridCoord(1), GridCoord(2)];

impl GridCoord {
    /// Constructs a coordinate from a raw value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not `0`, `1`, or `2`.
    pub const fn new(value: u8) -> GridCoord {
        assert!(value < 3, "grid coordinate out of range");
        GridCoord(value)
    }

    /// Raw value in `0..3`.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Adds a signed step count, wrapping back into `0..3`.
    pub fn offset_by(self, steps: i8) -> GridCoord {
        wrap_mod3(i32::from(self.0) + i32::from(steps))
    }
}
impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps any integer into the `0..3` coordinate range using true mathematical
/// modulo; the result is never negative.
pub fn wrap_mod3(value: i32) -> GridCoord {
    GridCoord(value.rem_euclid(3) as u8)
}

/// World-space center of the cell at a grid coordinate.
pub fn index_to_center(coord: GridCoord) -> Float {
    (Float::from(coord.0) - 1.0) * CELL_SIZE
}

/// Position of one cubelet in the lattice; three coordinates together address
/// one of the 27 cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridIndex {
    /// Coordinate along `x`.
    pub x: GridCoord,
    /// Coordinate along `y`.
    pub y: GridCoord,
    /// Coordinate along `z`.
    pub z: GridCoord,
}
impl GridIndex {
    /// Constructs a grid index from raw coordinates.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is not `0`, `1`, or `2`.
    pub const fn new(x: u8, y: u8, z: u8) -> GridIndex {
        GridIndex {
            x: GridCoord::new(x),
            y: GridCoord::new(y),
            z: GridCoord::new(z),
        }
    }

    /// Returns the coordinate along `axis`.
    pub fn axis(self, axis: Axis) -> GridCoord {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Replaces the coordinate along `axis`.
    pub fn set_axis(&mut self, axis: Axis, value: GridCoord) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }

    /// World-space center of this cell.
    pub fn center(self) -> Vec3 {
        vec3(
            index_to_center(self.x),
            index_to_center(self.y),
            index_to_center(self.z),
        )
    }
}
impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
