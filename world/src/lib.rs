#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Iveria.
//!
//! The world owns the current tile grid and the player's position. Both
//! change only through [`apply`]: map generation runs to completion before
//! the new grid replaces the old one, and the player moves only when the
//! movement query accepts the step.

use iveria_core::{
    Command, ConfigError, Event, GenerationConfig, MoveRejection, TileGrid, TileKind, Vec2,
};
use iveria_system_generation::generate_map;
use iveria_system_movement::{resolve_step, MoveOutcome};

/// Represents the authoritative Iveria world state.
#[derive(Clone, Debug)]
pub struct World {
    config: GenerationConfig,
    tile_grid: TileGrid,
    player: Vec2,
    last_generation: Option<GenerationSummary>,
}

impl World {
    /// Creates a world using the default generation configuration.
    ///
    /// The grid starts as solid wall until a [`Command::GenerateMap`] is applied.
    #[must_use]
    pub fn new() -> Self {
        let config = GenerationConfig::default();
        Self {
            tile_grid: TileGrid::filled(config.width, config.height, TileKind::Wall),
            config,
            player: Vec2::ZERO,
            last_generation: None,
        }
    }

    /// Creates a world with a custom configuration and starting position.
    pub fn with_config(config: GenerationConfig, player: Vec2) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            tile_grid: TileGrid::filled(config.width, config.height, TileKind::Wall),
            config,
            player,
            last_generation: None,
        })
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of the generation pass that produced the current grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GenerationSummary {
    seed: u64,
    rooms: u32,
    passes: u32,
    converged: bool,
}

impl GenerationSummary {
    /// Seed the grid was generated from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of rooms carved into the grid.
    #[must_use]
    pub const fn rooms(&self) -> u32 {
        self.rooms
    }

    /// Number of separation passes performed.
    #[must_use]
    pub const fn passes(&self) -> u32 {
        self.passes
    }

    /// Whether separation finished before the pass limit.
    #[must_use]
    pub const fn converged(&self) -> bool {
        self.converged
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::GenerateMap { seed } => match generate_map(&world.config, seed) {
            Ok(map) => {
                let report = map.report();
                let summary = GenerationSummary {
                    seed,
                    rooms: map.room_count(),
                    passes: report.passes(),
                    converged: report.converged(),
                };
                world.tile_grid = map.into_grid();
                world.last_generation = Some(summary);
                tracing::info!(
                    seed,
                    rooms = summary.rooms,
                    passes = summary.passes,
                    converged = summary.converged,
                    "installed generated map"
                );
                out_events.push(Event::MapGenerated {
                    seed,
                    rooms: summary.rooms,
                    passes: summary.passes,
                    converged: summary.converged,
                });
            }
            Err(reason) => {
                tracing::error!(seed, %reason, "map generation rejected");
                out_events.push(Event::MapGenerationFailed { seed, reason });
            }
        },
        Command::MovePlayer { delta } => {
            match resolve_step(&world.tile_grid, world.player, delta) {
                MoveOutcome::Moved { from, to } => {
                    world.player = to;
                    out_events.push(Event::PlayerMoved { from, to });
                }
                MoveOutcome::Rejected {
                    position,
                    attempted,
                    reason,
                } => reject_move(position, attempted, reason, out_events),
            }
        }
        Command::PlacePlayer { position } => {
            let delta = position - world.player;
            match resolve_step(&world.tile_grid, world.player, delta) {
                MoveOutcome::Moved { to, .. } => {
                    world.player = to;
                    tracing::debug!(?to, "player placed");
                    out_events.push(Event::PlayerPlaced { position: to });
                }
                MoveOutcome::Rejected {
                    position,
                    attempted,
                    reason,
                } => reject_move(position, attempted, reason, out_events),
            }
        }
    }
}

fn reject_move(
    position: Vec2,
    attempted: Vec2,
    reason: MoveRejection,
    out_events: &mut Vec<Event>,
) {
    tracing::trace!(?position, ?attempted, ?reason, "player move rejected");
    out_events.push(Event::PlayerMoveRejected {
        position,
        attempted,
        reason,
    });
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use iveria_core::{GenerationConfig, Tile, TileGrid, Vec2};

    use super::{GenerationSummary, World};

    /// Provides read-only access to the world's tile grid.
    #[must_use]
    pub fn tile_grid(world: &World) -> &TileGrid {
        &world.tile_grid
    }

    /// Current player position.
    #[must_use]
    pub fn player(world: &World) -> Vec2 {
        world.player
    }

    /// Descriptor of the tile stored at `cell`, or `None` outside the grid.
    #[must_use]
    pub fn tile_at(world: &World, cell: Vec2) -> Option<Tile> {
        world.tile_grid.get(cell).map(|kind| kind.tile())
    }

    /// Configuration used for every generation pass.
    #[must_use]
    pub fn config(world: &World) -> &GenerationConfig {
        &world.config
    }

    /// Summary of the pass that produced the current grid, if any ran.
    #[must_use]
    pub fn last_generation(world: &World) -> Option<GenerationSummary> {
        world.last_generation
    }
}
