#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure movement query that validates player steps against the tile grid.

use iveria_core::{MoveRejection, TileGrid, Vec2};

/// Result of validating a single movement request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The destination is free and the mover should relocate.
    Moved {
        /// Cell occupied before the move.
        from: Vec2,
        /// Cell occupied after the move.
        to: Vec2,
    },
    /// The destination may not be entered; the mover stays in place.
    Rejected {
        /// Cell the mover keeps occupying.
        position: Vec2,
        /// Cell the mover attempted to enter.
        attempted: Vec2,
        /// Why the destination was refused.
        reason: MoveRejection,
    },
}

impl MoveOutcome {
    /// Position held once the outcome is applied.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        match self {
            Self::Moved { to, .. } => *to,
            Self::Rejected { position, .. } => *position,
        }
    }

    /// Reports whether the move was accepted.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Validates moving from `current` by `delta` on `grid`.
///
/// The destination must lie inside the grid and must not hold a colliding
/// tile. Any integer delta is accepted; there is no sliding or partial
/// movement.
#[must_use]
pub fn resolve_step(grid: &TileGrid, current: Vec2, delta: Vec2) -> MoveOutcome {
    let candidate = current + delta;

    let rejection = if !grid.in_bounds(candidate) {
        Some(MoveRejection::OutOfBounds)
    } else if grid.is_blocked(candidate) {
        Some(MoveRejection::Blocked)
    } else {
        None
    };

    match rejection {
        Some(reason) => MoveOutcome::Rejected {
            position: current,
            attempted: candidate,
            reason,
        },
        None => MoveOutcome::Moved {
            from: current,
            to: candidate,
        },
    }
}
