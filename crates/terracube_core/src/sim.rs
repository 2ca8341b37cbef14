//! The face-drag state machine and move application.

use log::{debug, info, trace};
use rand::Rng;
use terramath::{
    Axis, CELL_SIZE, Float, Sign, Vec3, classify_face_tangent_axis, ease_out_cubic,
    snap_offset_steps,
};

use crate::{
    Cubelet, DRAG_AXIS_THRESHOLD, Face, LAYER_PIECE_COUNT, Lattice, Piece, PieceSet,
    SETTLE_DURATION,
};

/// The one move currently in flight.
///
/// A move is born `Dragging`, dies there on a tap or a cancel, or becomes
/// `Settling` on release; it is destroyed when the settle animation commits.
/// Snap bookkeeping only exists in the `Settling` variant, so it cannot be
/// observed mid-drag.
#[derive(Debug, Copy, Clone)]
pub enum ActiveMove {
    /// A pointer is down on a face and the drag is being tracked.
    Dragging {
        /// Face that was grabbed.
        face: Face,
        /// The nine pieces frozen into this move at gesture start.
        selected: PieceSet,
        /// Tangent axis the drag resolved to; `None` until the gesture
        /// commits to a direction, permanently fixed thereafter.
        axis: Option<Axis>,
        /// Live offset along the resolved axis, in world units, clamped to
        /// one cell width either way.
        offset: Float,
    },
    /// The pointer was released and the layer is animating into place.
    Settling {
        /// Face that was grabbed.
        face: Face,
        /// The nine pieces frozen into this move at gesture start.
        selected: PieceSet,
        /// Tangent axis the drag resolved to.
        axis: Axis,
        /// Whole-cell translation to commit: `-1`, `0`, or `+1`.
        steps: i8,
        /// Live offset along the resolved axis, in world units.
        offset: Float,
        /// Offset at release time.
        from: Float,
        /// Snapped target offset.
        to: Float,
        /// Simulated seconds since release.
        elapsed: Float,
        /// Total settle time, in simulated seconds.
        duration: Float,
    },
}
impl ActiveMove {
    /// Face the move operates on.
    pub fn face(&self) -> Face {
        match *self {
            ActiveMove::Dragging { face, .. } | ActiveMove::Settling { face, .. } => face,
        }
    }

    /// The nine-piece selection frozen at gesture start.
    pub fn selected(&self) -> PieceSet {
        match *self {
            ActiveMove::Dragging { selected, .. } | ActiveMove::Settling { selected, .. } => {
                selected
            }
        }
    }

    /// Resolved tangent axis, if the drag has committed to one.
    pub fn axis(&self) -> Option<Axis> {
        match *self {
            ActiveMove::Dragging { axis, .. } => axis,
            ActiveMove::Settling { axis, .. } => Some(axis),
        }
    }

    /// Live offset along the resolved axis, in world units.
    pub fn offset(&self) -> Float {
        match *self {
            ActiveMove::Dragging { offset, .. } | ActiveMove::Settling { offset, .. } => offset,
        }
    }

    /// Snapped step count, once decided at release.
    pub fn snapped_steps(&self) -> Option<i8> {
        match *self {
            ActiveMove::Dragging { .. } => None,
            ActiveMove::Settling { steps, .. } => Some(steps),
        }
    }

    /// Whether the move is still tracking the pointer.
    pub fn is_dragging(&self) -> bool {
        matches!(self, ActiveMove::Dragging { .. })
    }

    /// Whether the move is animating into place.
    pub fn is_settling(&self) -> bool {
        matches!(self, ActiveMove::Settling { .. })
    }
}

/// The puzzle state engine: the authoritative lattice plus the single
/// active-move slot.
///
/// Single-threaded and tick-driven. All mutation happens synchronously
/// inside whichever method the input layer or the frame clock calls, and
/// starting a second move while one is active is silently rejected, so
/// there is exactly one logical writer at a time. Drag updates must arrive
/// in production order: each one is an absolute measurement from the drag's
/// start point.
#[derive(Debug, Clone)]
pub struct Simulation {
    lattice: Lattice,
    active: Option<ActiveMove>,
}
impl Default for Simulation {
    fn default() -> Simulation {
        Simulation::new()
    }
}
impl Simulation {
    /// Constructs an engine in the solved arrangement.
    pub fn new() -> Simulation {
        Simulation {
            lattice: Lattice::new_solved(),
            active: None,
        }
    }

    /// The lattice, read-only.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// All cubelets in id order.
    pub fn cubelets(&self) -> &[Cubelet] {
        self.lattice.cubelets()
    }

    /// The move in flight, if any.
    pub fn active_move(&self) -> Option<&ActiveMove> {
        self.active.as_ref()
    }

    /// Whether every cubelet is back at its origin cell.
    pub fn is_solved(&self) -> bool {
        self.lattice.is_solved()
    }

    /// Starts tracking a face drag.
    ///
    /// No-op while another move is active; the engine allows at most one
    /// gesture in flight. The nine-piece selection is computed here and
    /// frozen for the whole move, so pieces do not jump between layers
    /// mid-drag.
    pub fn start_face_drag(&mut self, face: Face) {
        if self.active.is_some() {
            return;
        }

        let selected = self.lattice.pieces_in_layer(face);
        assert_eq!(
            LAYER_PIECE_COUNT,
            selected.len(),
            "face {face} layer selection is not 9 pieces; the lattice permutation is corrupt",
        );

        debug!("start drag on face {face}");
        self.active = Some(ActiveMove::Dragging {
            face,
            selected,
            axis: None,
            offset: 0.0,
        });
    }

    /// Feeds the latest drag vector, measured from the drag's start point.
    ///
    /// Each call supplies the absolute delta relative to the gesture start,
    /// not an increment from the previous frame. The first call whose
    /// tangent component clears [`DRAG_AXIS_THRESHOLD`] fixes the move axis
    /// for the rest of the move; until then the move stays pending and this
    /// call does nothing. No-op unless a drag is being tracked.
    pub fn update_drag_vector(&mut self, delta: Vec3) {
        let Some(ActiveMove::Dragging { face, axis, offset, .. }) = &mut self.active else {
            return;
        };

        let resolved = match *axis {
            Some(resolved) => resolved,
            None => {
                match classify_face_tangent_axis(face.normal_axis(), delta, DRAG_AXIS_THRESHOLD) {
                    Some(classified) => {
                        trace!("drag on face {face} resolved to axis {classified}");
                        *axis = Some(classified);
                        classified
                    }
                    None => return,
                }
            }
        };

        *offset = resolved.component(delta).clamp(-CELL_SIZE, CELL_SIZE);
    }

    /// Releases the drag, snapping to the nearest whole-cell move.
    ///
    /// A drag that never resolved an axis is discarded outright: the
    /// gesture was a tap and the cubelets are untouched. Otherwise the move
    /// starts settling toward the snapped offset; a snap of zero is a legal
    /// spring-back. No-op unless a drag is being tracked.
    pub fn release_drag(&mut self) {
        let Some(ActiveMove::Dragging { face, selected, axis, offset }) = self.active else {
            return;
        };

        let Some(axis) = axis else {
            debug!("drag on face {face} released with no axis; discarding");
            self.active = None;
            return;
        };

        let steps = snap_offset_steps(offset);
        debug!("release drag on face {face}: snapping to {steps} step(s) along {axis}");
        self.active = Some(ActiveMove::Settling {
            face,
            selected,
            axis,
            steps,
            offset,
            from: offset,
            to: Float::from(steps) * CELL_SIZE,
            elapsed: 0.0,
            duration: SETTLE_DURATION,
        });
    }

    /// Discards any active move without touching the lattice, regardless of
    /// phase. Used when an input gesture is interrupted, e.g. by a
    /// multi-touch takeover.
    pub fn cancel_active_drag(&mut self) {
        if let Some(active) = self.active.take() {
            let face = active.face();
            trace!("canceling move on face {face}");
        }
    }

    /// Advances the settle animation by `delta_seconds` of simulated time.
    ///
    /// The offset eases from the release value toward the snapped target.
    /// When progress reaches one, the snapped translation is committed to
    /// the lattice in a single step and the move slot clears; observers
    /// never see a partial layer. No-op unless a move is settling.
    pub fn tick(&mut self, delta_seconds: Float) {
        let Some(ActiveMove::Settling {
            face,
            selected,
            axis,
            steps,
            offset: _,
            from,
            to,
            elapsed,
            duration,
        }) = self.active
        else {
            return;
        };

        let elapsed = elapsed + delta_seconds;
        let normalized = if duration <= 0.0 { 1.0 } else { elapsed / duration };
        let eased = ease_out_cubic(normalized);
        let offset = from + (to - from) * eased;

        if normalized >= 1.0 {
            if steps != 0 {
                self.lattice.translate_layer(selected, axis, steps);
            }
            debug!("move on face {face} committed with {steps} step(s)");
            self.active = None;
        } else {
            self.active = Some(ActiveMove::Settling {
                face,
                selected,
                axis,
                steps,
                offset,
                from,
                to,
                elapsed,
                duration,
            });
        }
    }

    /// Applies an instantaneous, non-animated layer move.
    ///
    /// Unlike a drag move, the selection is recomputed fresh from the
    /// current lattice: with no animation window there is nothing for it to
    /// go stale against. `steps == 0` is a no-op.
    pub fn apply_discrete_move(&mut self, face: Face, move_axis: Axis, steps: i8) {
        debug_assert_ne!(
            face.normal_axis(),
            move_axis,
            "layer moves slide tangent to the face",
        );
        if steps == 0 {
            return;
        }

        let selected = self.lattice.pieces_in_layer(face);
        assert_eq!(
            LAYER_PIECE_COUNT,
            selected.len(),
            "face {face} layer selection is not 9 pieces; the lattice permutation is corrupt",
        );
        self.lattice.translate_layer(selected, move_axis, steps);
    }

    /// Scrambles the lattice with `move_count` random discrete moves.
    ///
    /// Any active move is discarded first: shuffling always starts from a
    /// settled state. `unit_rng` must yield uniform values in `[0, 1)`;
    /// exactly four are drawn per move, in order: normal axis, normal sign,
    /// tangent axis, step sign (always ±1, so every move permutes). A fixed
    /// sequence therefore reproduces a fixed scramble.
    pub fn shuffle(&mut self, move_count: usize, mut unit_rng: impl FnMut() -> Float) {
        self.active = None;
        info!("shuffling with {move_count} moves");

        for _ in 0..move_count {
            let normal_axis = Axis::ALL[(unit_rng() * 3.0) as usize];
            let normal_sign = if unit_rng() < 0.5 { Sign::Neg } else { Sign::Pos };
            let face = Face::from_axis_sign(normal_axis, normal_sign);

            let tangents = normal_axis.other_two();
            let move_axis = tangents[(unit_rng() * 2.0) as usize];
            let steps = if unit_rng() < 0.5 { -1 } else { 1 };

            self.apply_discrete_move(face, move_axis, steps);
        }
    }

    /// Scrambles with OS entropy.
    pub fn shuffle_random(&mut self, move_count: usize) {
        let mut rng = rand::rng();
        self.shuffle(move_count, move || rng.random());
    }

    /// Restores the solved arrangement and discards any active move.
    /// Idempotent.
    pub fn reset(&mut self) {
        info!("resetting to solved state");
        self.lattice.reset_to_origin();
        self.active = None;
    }

    /// Live drag offset for one piece, in world units.
    ///
    /// Zero when no move is active, when the piece is not in the moving
    /// layer, or while the drag has not resolved an axis. The render
    /// synchronizer reads this every frame to displace the moving layer and
    /// its wrap duplicates.
    pub fn piece_drag_offset(&self, piece: Piece) -> Float {
        match &self.active {
            Some(active) if active.axis().is_some() && active.selected().contains(piece) => {
                active.offset()
            }
            _ => 0.0,
        }
    }

    /// Whether `piece` is in the currently moving layer.
    pub fn is_piece_in_moving_layer(&self, piece: Piece) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.selected().contains(piece))
    }
}
