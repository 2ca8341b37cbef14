//! The 27-cubelet lattice.

use itertools::iproduct;
use terramath::{Axis, GRID_VALUES, GridIndex};

use crate::{Face, PIECE_COUNT, Piece, PieceSet};

/// One cubelet of the puzzle.
///
/// `origin` is fixed at creation and only serves solved-state comparisons;
/// `index` is the cubelet's current cell and is the only field that ever
/// changes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cubelet {
    id: Piece,
    origin: GridIndex,
    index: GridIndex,
}
impl Cubelet {
    /// Stable identity, `0..27`.
    pub fn id(&self) -> Piece {
        self.id
    }

    /// Cell the cubelet was created at. Never mutated.
    pub fn origin(&self) -> GridIndex {
        self.origin
    }

    /// Cell the cubelet currently occupies.
    pub fn index(&self) -> GridIndex {
        self.index
    }
}

/// The 27-cubelet lattice.
///
/// Exclusively owned and mutated by [`crate::Simulation`]; every external
/// layer reads snapshots through `&`-accessors. At every instant the 27
/// current indices form a bijection onto the 27 cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    cubelets: Vec<Cubelet>,
}
impl Lattice {
    /// Constructs the solved arrangement: ids assigned in x-major,
    /// z-minor creation order, every index at its origin.
    pub fn new_solved() -> Lattice {
        let mut cubelets = Vec::with_capacity(PIECE_COUNT);
        for (id, (x, y, z)) in iproduct!(GRID_VALUES, GRID_VALUES, GRID_VALUES).enumerate() {
            let origin = GridIndex { x, y, z };
            cubelets.push(Cubelet {
                id: Piece(id as u8),
                origin,
                index: origin,
            });
        }
        Lattice { cubelets }
    }

    /// All cubelets, in id order.
    pub fn cubelets(&self) -> &[Cubelet] {
        &self.cubelets
    }

    /// The cubelet with the given id.
    pub fn cubelet(&self, piece: Piece) -> &Cubelet {
        &self.cubelets[piece.idx()]
    }

    /// Ids of the pieces currently in `face`'s layer.
    pub fn pieces_in_layer(&self, face: Face) -> PieceSet {
        self.cubelets
            .iter()
            .filter(|cubelet| cubelet.index.axis(face.normal_axis()) == face.layer())
            .map(|cubelet| cubelet.id)
            .collect()
    }

    /// Translates every piece in `selection` by `steps` cells along `axis`,
    /// wrapping at the lattice edge.
    pub(crate) fn translate_layer(&mut self, selection: PieceSet, axis: Axis, steps: i8) {
        for piece in selection.iter() {
            let cubelet = &mut self.cubelets[piece.idx()];
            let current = cubelet.index.axis(axis);
            cubelet.index.set_axis(axis, current.offset_by(steps));
        }
        debug_assert!(self.is_valid_permutation());
    }

    /// Puts every cubelet back at its origin cell.
    pub(crate) fn reset_to_origin(&mut self) {
        for cubelet in &mut self.cubelets {
            cubelet.index = cubelet.origin;
        }
    }

    /// Whether every cubelet sits at its origin cell.
    pub fn is_solved(&self) -> bool {
        self.cubelets
            .iter()
            .all(|cubelet| cubelet.index == cubelet.origin)
    }

    /// Whether the 27 current indices are pairwise distinct (and therefore
    /// span all 27 cells).
    pub fn is_valid_permutation(&self) -> bool {
        let mut seen = [false; PIECE_COUNT];
        for cubelet in &self.cubelets {
            let index = cubelet.index;
            let cell = index.x.get() as usize * 9 + index.y.get() as usize * 3
                + index.z.get() as usize;
            if seen[cell] {
                return false;
            }
            seen[cell] = true;
        }
        true
    }
}
