//! The six face references.

use strum::{Display, EnumIter, EnumString};
use terramath::{Axis, GridCoord, Sign};

/// One of the six lattice faces, named conventionally: Right, Left, Up,
/// Down, Front, Back.
///
/// A face is identified by its outward normal (axis plus sign); the layer it
/// selects along that axis (2 for `+`, 0 for `-`) is derived from the sign.
#[derive(Debug, Display, EnumIter, EnumString, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    /// `+x` face.
    R,
    /// `-x` face.
    L,
    /// `+y` face.
    U,
    /// `-y` face.
    D,
    /// `+z` face.
    F,
    /// `-z` face.
    B,
}
impl Face {
    /// Axis of the outward normal.
    pub const fn normal_axis(self) -> Axis {
        match self {
            Face::R | Face::L => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }

    /// Sign of the outward normal.
    pub const fn normal_sign(self) -> Sign {
        match self {
            Face::R | Face::U | Face::F => Sign::Pos,
            Face::L | Face::D | Face::B => Sign::Neg,
        }
    }

    /// Layer the face selects along its normal axis.
    pub const fn layer(self) -> GridCoord {
        match self.normal_sign() {
            Sign::Pos => GridCoord::new(2),
            Sign::Neg => GridCoord::new(0),
        }
    }

    /// Face whose outward normal is `sign` along `axis`.
    pub const fn from_axis_sign(axis: Axis, sign: Sign) -> Face {
        match (axis, sign) {
            (Axis::X, Sign::Pos) => Face::R,
            (Axis::X, Sign::Neg) => Face::L,
            (Axis::Y, Sign::Pos) => Face::U,
            (Axis::Y, Sign::Neg) => Face::D,
            (Axis::Z, Sign::Pos) => Face::F,
            (Axis::Z, Sign::Neg) => Face::B,
        }
    }

    /// The face on the opposite side of the cube.
    pub const fn opposite(self) -> Face {
        match self {
            Face::R => Face::L,
            Face::L => Face::R,
            Face::U => Face::D,
            Face::D => Face::U,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }
}
