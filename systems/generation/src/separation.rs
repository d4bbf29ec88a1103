use std::collections::HashSet;

use iveria_core::{Direction, Rect, Vec2};
use rand::Rng;

/// Empty border kept between neighbouring rooms.
pub const ROOM_MARGIN: i32 = 1;

/// Terminal state of a separation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeparationOutcome {
    /// A full pass completed without moving any room.
    Converged,
    /// The layout returned to an arrangement seen earlier without any random
    /// tie-break in between, so further passes would only repeat the cycle.
    Oscillating,
    /// The pass limit was reached while rooms were still moving.
    PassLimitReached,
}

/// Summary of a separation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeparationReport {
    outcome: SeparationOutcome,
    passes: u32,
}

impl SeparationReport {
    /// How the run ended.
    #[must_use]
    pub const fn outcome(&self) -> SeparationOutcome {
        self.outcome
    }

    /// Number of passes performed, including the final quiet pass on convergence.
    #[must_use]
    pub const fn passes(&self) -> u32 {
        self.passes
    }

    /// Reports whether the run converged.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.outcome == SeparationOutcome::Converged
    }
}

/// Pushes overlapping rooms apart until no pair collides or `max_passes` is hit.
///
/// Two rooms collide when their bounds, each expanded by [`ROOM_MARGIN`],
/// intersect. Within a pass every ordered pair `(a, b)` is inspected and a
/// colliding `b` steps one unit away from `a`'s center. A room moves at most
/// once per pass. Rooms sharing a center step in a random cardinal direction.
///
/// A pass without random draws is a pure function of the layout, so once a
/// layout repeats under such passes the run stops with
/// [`SeparationOutcome::Oscillating`]. On that outcome and on
/// [`SeparationOutcome::PassLimitReached`] the rooms hold the positions
/// reached so far and may still collide.
pub fn separate_rooms<R>(rooms: &mut [Rect], max_passes: u32, rng: &mut R) -> SeparationReport
where
    R: Rng + ?Sized,
{
    let mut moved = vec![false; rooms.len()];
    let mut seen: HashSet<Vec<Rect>> = HashSet::new();
    let mut passes = 0;

    while passes < max_passes {
        passes += 1;
        moved.fill(false);
        let _ = seen.insert(rooms.to_vec());

        let mut any_moved = false;
        let mut drew_random = false;
        for anchor_index in 0..rooms.len() {
            for index in 0..rooms.len() {
                if index == anchor_index || moved[index] {
                    continue;
                }

                let anchor = rooms[anchor_index];
                let padded_anchor = anchor.expand(ROOM_MARGIN);
                if !padded_anchor.intersects(&rooms[index].expand(ROOM_MARGIN)) {
                    continue;
                }

                moved[index] = true;
                any_moved = true;
                let away = rooms[index].center() - anchor.center();
                let step = match away.normalize() {
                    Some(step) => step,
                    None => {
                        drew_random = true;
                        random_step(rng)
                    }
                };
                rooms[index].translate(step);
            }
        }

        if !any_moved {
            tracing::debug!(passes, rooms = rooms.len(), "room separation converged");
            return SeparationReport {
                outcome: SeparationOutcome::Converged,
                passes,
            };
        }

        if drew_random {
            seen.clear();
        } else if seen.contains(&rooms[..]) {
            tracing::warn!(
                passes,
                rooms = rooms.len(),
                "room separation is cycling, keeping best-effort layout"
            );
            return SeparationReport {
                outcome: SeparationOutcome::Oscillating,
                passes,
            };
        }
    }

    tracing::warn!(
        passes,
        rooms = rooms.len(),
        "room separation hit the pass limit, keeping best-effort layout"
    );
    SeparationReport {
        outcome: SeparationOutcome::PassLimitReached,
        passes,
    }
}

/// Draws one of the four cardinal unit steps uniformly.
pub fn random_step<R>(rng: &mut R) -> Vec2
where
    R: Rng + ?Sized,
{
    Direction::ALL[rng.gen_range(0..Direction::ALL.len())].unit()
}

/// Reports whether any two rooms still collide under the margin test.
#[must_use]
pub fn has_collisions(rooms: &[Rect]) -> bool {
    rooms.iter().enumerate().any(|(anchor_index, anchor)| {
        let padded_anchor = anchor.expand(ROOM_MARGIN);
        rooms
            .iter()
            .enumerate()
            .any(|(index, room)| {
                index != anchor_index && padded_anchor.intersects(&room.expand(ROOM_MARGIN))
            })
    })
}
