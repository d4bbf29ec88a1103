#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Iveria engine.
//!
//! This crate defines the geometry, tile catalog and message surface that
//! connect adapters, the authoritative world, and pure systems. Adapters and
//! systems submit [`Command`] values describing desired mutations, the world
//! executes those commands via its `apply` entry point, and then broadcasts
//! [`Event`] values describing what actually happened.

mod config;
mod geometry;
mod tiles;

use serde::{Deserialize, Serialize};

pub use config::{
    ConfigError, GenerationConfig, PlacementBand, DEFAULT_MAX_SEPARATION_PASSES, MAX_EXTENT,
    MAX_ROOM_COUNT, MAX_SEPARATION_PASSES,
};
pub use geometry::{Direction, Rect, Vec2};
pub use tiles::{
    lookup_tile, Rgba, Tile, TileError, TileGrid, TileId, TileKind, DEFAULT_MAP_HEIGHT,
    DEFAULT_MAP_WIDTH, MAX_TILE_ID,
};

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replaces the current map with one generated from the provided seed.
    GenerateMap {
        /// Seed driving every random draw of the generation pass.
        seed: u64,
    },
    /// Requests that the player move by the provided offset.
    MovePlayer {
        /// Offset added to the player's current position.
        delta: Vec2,
    },
    /// Puts the player directly onto a cell, as when a session starts.
    PlacePlayer {
        /// Cell the player should occupy.
        position: Vec2,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Announces that a freshly generated map replaced the previous one.
    MapGenerated {
        /// Seed the map was generated from.
        seed: u64,
        /// Number of rooms stamped into the grid.
        rooms: u32,
        /// Number of separation passes performed.
        passes: u32,
        /// Whether separation finished before the pass limit.
        converged: bool,
    },
    /// Reports that map generation was refused and the previous map kept.
    MapGenerationFailed {
        /// Seed supplied with the rejected request.
        seed: u64,
        /// Reason the configuration could not be used.
        reason: ConfigError,
    },
    /// Confirms that the player moved between two cells.
    PlayerMoved {
        /// Cell the player occupied before moving.
        from: Vec2,
        /// Cell the player occupies after moving.
        to: Vec2,
    },
    /// Confirms that the player was put onto a cell.
    PlayerPlaced {
        /// Cell the player now occupies.
        position: Vec2,
    },
    /// Reports that a movement or placement request was refused.
    PlayerMoveRejected {
        /// Cell the player still occupies.
        position: Vec2,
        /// Cell the player attempted to enter.
        attempted: Vec2,
        /// Specific reason the move failed.
        reason: MoveRejection,
    },
}

/// Reasons a movement request may be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRejection {
    /// The destination lies outside the tile grid.
    OutOfBounds,
    /// The destination holds a colliding tile.
    Blocked,
}
