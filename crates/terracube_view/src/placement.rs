//! Per-frame world-space placement of every cubelet.

use terracube_core::{Piece, Simulation};
use terramath::{CUBE_HALF, Vec3};

/// Where one cubelet's meshes go this frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PiecePlacement {
    /// Piece the placement belongs to.
    pub piece: Piece,
    /// World-space center of the primary mesh.
    pub center: Vec3,
    /// Centers for the two wrap-duplicate meshes, displaced one full cube
    /// extent to either side along the move axis. Present only while the
    /// piece is in a moving layer with a resolved axis; the host hides the
    /// duplicate meshes otherwise.
    pub wrap_duplicates: Option<[Vec3; 2]>,
}

/// Computes placements for all 27 cubelets from the engine's current state.
///
/// Pieces in the moving layer are displaced along the resolved move axis by
/// the live drag offset and grow two duplicates, one cube extent to either
/// side, so a piece sliding past the edge visually reappears at the
/// opposite edge. Resting pieces sit at their cell centers with no
/// duplicates.
pub fn piece_placements(sim: &Simulation) -> Vec<PiecePlacement> {
    let active_axis = sim.active_move().and_then(|active| active.axis());
    let extent = 2.0 * CUBE_HALF;

    sim.cubelets()
        .iter()
        .map(|cubelet| {
            let piece = cubelet.id();
            let base = cubelet.index().center();

            match active_axis {
                Some(axis) if sim.is_piece_in_moving_layer(piece) => {
                    let shift = axis.unit_vector();
                    let center = base + shift * sim.piece_drag_offset(piece);
                    PiecePlacement {
                        piece,
                        center,
                        wrap_duplicates: Some([center - shift * extent, center + shift * extent]),
                    }
                }
                _ => PiecePlacement {
                    piece,
                    center: base,
                    wrap_duplicates: None,
                },
            }
        })
        .collect()
}
