#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic dungeon generation system.
//!
//! A generation pass seeds a cluster of candidate rooms near the middle of
//! the grid, pushes them apart with [`separate_rooms`] until no two rooms
//! touch or the layout stops making progress, and finally carves them into a
//! wall-filled [`TileGrid`] with [`stamp_rooms`]. Every random draw comes from a ChaCha8 stream seeded by
//! the caller, so identical seeds and configurations yield identical grids.

mod rooms;
mod separation;
mod stamping;

use iveria_core::{ConfigError, GenerationConfig, TileGrid, TileKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use rooms::seed_rooms;
pub use separation::{
    has_collisions, random_step, separate_rooms, SeparationOutcome, SeparationReport, ROOM_MARGIN,
};
pub use stamping::{stamp_room, stamp_rooms};

/// Result of a completed generation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMap {
    grid: TileGrid,
    room_count: u32,
    report: SeparationReport,
}

impl GeneratedMap {
    /// Generated tile grid.
    #[must_use]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Consumes the result, yielding the generated tile grid.
    #[must_use]
    pub fn into_grid(self) -> TileGrid {
        self.grid
    }

    /// Number of rooms carved into the grid.
    #[must_use]
    pub const fn room_count(&self) -> u32 {
        self.room_count
    }

    /// Outcome of the separation stage.
    #[must_use]
    pub const fn report(&self) -> SeparationReport {
        self.report
    }
}

/// Generates a complete map from `seed` using the provided configuration.
///
/// Hitting the separation pass limit is not an error: the best-effort layout
/// is stamped and the returned report records the outcome.
pub fn generate_map(config: &GenerationConfig, seed: u64) -> Result<GeneratedMap, ConfigError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut rooms = seed_rooms(config, &mut rng)?;
    tracing::debug!(seed, rooms = rooms.len(), "seeded candidate rooms");

    let report = separate_rooms(&mut rooms, config.max_separation_passes, &mut rng);

    let mut grid = TileGrid::filled(config.width, config.height, TileKind::Wall);
    stamp_rooms(&mut grid, &rooms);

    Ok(GeneratedMap {
        grid,
        room_count: u32::try_from(rooms.len()).unwrap_or(u32::MAX),
        report,
    })
}
