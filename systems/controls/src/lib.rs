#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure controls system that turns player intents into world commands.

use iveria_core::{Command, Direction};

const SEED_MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Input snapshot distilled from adapter-provided frame input data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlInput {
    /// Direction the player asked to step in on this frame, if any.
    pub direction: Option<Direction>,
    /// Indicates whether the player requested a fresh map on this frame.
    pub regenerate: bool,
}

impl ControlInput {
    /// Input that only requests a single step.
    #[must_use]
    pub const fn step(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            regenerate: false,
        }
    }

    /// Input that only requests regeneration.
    #[must_use]
    pub const fn regenerate() -> Self {
        Self {
            direction: None,
            regenerate: true,
        }
    }
}

/// Reproducible stream of map seeds.
///
/// The first seed is the base seed itself; later seeds follow a linear
/// congruential step so that regeneration never repeats the previous map
/// while a given base always replays the same sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedSequence {
    next: u64,
    issued: u64,
}

impl SeedSequence {
    /// Creates a sequence starting at `base`.
    #[must_use]
    pub const fn new(base: u64) -> Self {
        Self {
            next: base,
            issued: 0,
        }
    }

    /// Returns the next seed and advances the sequence.
    pub fn advance(&mut self) -> u64 {
        let seed = self.next;
        self.next = next_seed(seed);
        self.issued = self.issued.saturating_add(1);
        seed
    }

    /// Number of seeds handed out so far.
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.issued
    }
}

fn next_seed(state: u64) -> u64 {
    state.wrapping_mul(SEED_MULTIPLIER).wrapping_add(1)
}

/// Pure system that maps player intents onto [`Command`] values.
#[derive(Debug)]
pub struct Controls {
    seeds: SeedSequence,
}

impl Controls {
    /// Creates a controls system whose first map uses `base_seed`.
    #[must_use]
    pub const fn new(base_seed: u64) -> Self {
        Self {
            seeds: SeedSequence::new(base_seed),
        }
    }

    /// Emits the command that generates the initial map.
    pub fn start(&mut self, out: &mut Vec<Command>) {
        out.push(Command::GenerateMap {
            seed: self.seeds.advance(),
        });
    }

    /// Translates one frame of input into commands.
    ///
    /// A step is emitted before a regeneration request from the same frame.
    pub fn handle(&mut self, input: ControlInput, out: &mut Vec<Command>) {
        if let Some(direction) = input.direction {
            out.push(Command::MovePlayer {
                delta: direction.unit(),
            });
        }

        if input.regenerate {
            out.push(Command::GenerateMap {
                seed: self.seeds.advance(),
            });
        }
    }

    /// Seed sequence backing regeneration requests.
    #[must_use]
    pub const fn seeds(&self) -> &SeedSequence {
        &self.seeds
    }
}

#[cfg(test)]
mod tests {
    use super::{next_seed, SeedSequence};

    #[test]
    fn sequence_starts_at_base_seed() {
        let mut seeds = SeedSequence::new(1234);
        assert_eq!(seeds.advance(), 1234);
        assert_eq!(seeds.advance(), next_seed(1234));
        assert_eq!(seeds.issued(), 2);
    }

    #[test]
    fn consecutive_seeds_differ() {
        let mut seeds = SeedSequence::new(0);
        let first = seeds.advance();
        let second = seeds.advance();
        let third = seeds.advance();
        assert_ne!(first, second);
        assert_ne!(second, third);
    }
}
