//! Tunable parameters for dungeon generation.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH};

/// Default upper bound on separation passes before the resolver gives up.
pub const DEFAULT_MAX_SEPARATION_PASSES: u32 = 10_000;

/// Largest accepted grid extent, room dimension or width bias.
pub const MAX_EXTENT: u32 = 1 << 16;

/// Largest accepted exclusive upper bound of the room count range.
pub const MAX_ROOM_COUNT: u32 = 4_096;

/// Largest accepted separation pass cap.
///
/// Rooms drift at most one cell per pass, so together with [`MAX_EXTENT`]
/// every coordinate stays far inside `i32`.
pub const MAX_SEPARATION_PASSES: u32 = 1_000_000;

/// Aggregated knobs controlling every adjustable aspect of map generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of tile columns in the generated grid.
    pub width: u32,
    /// Number of tile rows in the generated grid.
    pub height: u32,
    /// Half-open range the room count is drawn from.
    pub room_count: Range<u32>,
    /// Half-open range each room dimension is drawn from before biasing.
    pub room_size: Range<i32>,
    /// Constant added to every room width.
    pub width_bias: i32,
    /// Region of the grid where rooms are initially seeded.
    pub placement: PlacementBand,
    /// Hard cap on separation passes.
    pub max_separation_passes: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
            room_count: 5..45,
            room_size: 3..13,
            width_bias: 5,
            placement: PlacementBand::default(),
            max_separation_passes: DEFAULT_MAX_SEPARATION_PASSES,
        }
    }
}

impl GenerationConfig {
    /// Checks that every range is non-empty, every divisor usable and every
    /// magnitude small enough for room arithmetic to stay in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0
            || self.height == 0
            || self.width > MAX_EXTENT
            || self.height > MAX_EXTENT
        {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.room_count.is_empty() {
            return Err(ConfigError::EmptyRoomCount {
                start: self.room_count.start,
                end: self.room_count.end,
            });
        }
        if self.room_count.end > MAX_ROOM_COUNT {
            return Err(ConfigError::TooManyRooms(self.room_count.end));
        }
        if self.room_size.is_empty() || self.room_size.start < 1 {
            return Err(ConfigError::InvalidRoomSize {
                start: self.room_size.start,
                end: self.room_size.end,
            });
        }
        if self.width_bias < 0 {
            return Err(ConfigError::NegativeWidthBias(self.width_bias));
        }
        if exceeds_extent(self.room_size.end) || exceeds_extent(self.width_bias) {
            return Err(ConfigError::OversizedRooms {
                size_end: self.room_size.end,
                width_bias: self.width_bias,
            });
        }
        if self.placement.origin_divisor == 0 || self.placement.span_divisor == 0 {
            return Err(ConfigError::ZeroPlacementDivisor);
        }
        if self.max_separation_passes == 0 {
            return Err(ConfigError::ZeroPassLimit);
        }
        if self.max_separation_passes > MAX_SEPARATION_PASSES {
            return Err(ConfigError::ExcessivePassLimit(self.max_separation_passes));
        }
        Ok(())
    }
}

fn exceeds_extent(value: i32) -> bool {
    u32::try_from(value).map_or(false, |value| value > MAX_EXTENT)
}

/// Band in which rooms start before separation pushes them apart.
///
/// Along each axis a room is seeded at `extent / origin_divisor` plus a
/// random offset below `max(1, extent / span_divisor)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementBand {
    /// Divides the grid extent to locate the start of the band.
    pub origin_divisor: u32,
    /// Divides the grid extent to obtain the band's span.
    pub span_divisor: u32,
}

impl Default for PlacementBand {
    fn default() -> Self {
        Self {
            origin_divisor: 3,
            span_divisor: 5,
        }
    }
}

impl PlacementBand {
    /// Start offset and span of the band along an axis of length `extent`.
    #[must_use]
    pub fn along(&self, extent: u32) -> (u32, u32) {
        let origin = extent / self.origin_divisor.max(1);
        let span = (extent / self.span_divisor.max(1)).max(1);
        (origin, span)
    }
}

/// Reasons a [`GenerationConfig`] is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Grid dimensions are zero or larger than [`MAX_EXTENT`].
    #[error("grid dimensions {width}x{height} are not usable")]
    InvalidDimensions {
        /// Requested column count.
        width: u32,
        /// Requested row count.
        height: u32,
    },
    /// The room count range contains no values.
    #[error("room count range {start}..{end} is empty")]
    EmptyRoomCount {
        /// Inclusive lower bound.
        start: u32,
        /// Exclusive upper bound.
        end: u32,
    },
    /// The room size range is empty or admits non-positive sizes.
    #[error("room size range {start}..{end} must be non-empty and positive")]
    InvalidRoomSize {
        /// Inclusive lower bound.
        start: i32,
        /// Exclusive upper bound.
        end: i32,
    },
    /// The room count range reaches past [`MAX_ROOM_COUNT`].
    #[error("room count upper bound {0} exceeds {}", MAX_ROOM_COUNT)]
    TooManyRooms(u32),
    /// The width bias would shrink rooms.
    #[error("room width bias {0} must not be negative")]
    NegativeWidthBias(i32),
    /// Room sizes or the width bias exceed [`MAX_EXTENT`].
    #[error(
        "room size bound {size_end} and width bias {width_bias} must not exceed {}",
        MAX_EXTENT
    )]
    OversizedRooms {
        /// Exclusive upper bound of the room size range.
        size_end: i32,
        /// Constant added to room widths.
        width_bias: i32,
    },
    /// A placement band divisor is zero.
    #[error("placement band divisors must be non-zero")]
    ZeroPlacementDivisor,
    /// The separation pass cap is zero.
    #[error("separation pass limit must be at least one")]
    ZeroPassLimit,
    /// The separation pass cap exceeds [`MAX_SEPARATION_PASSES`].
    #[error("separation pass limit {0} exceeds {}", MAX_SEPARATION_PASSES)]
    ExcessivePassLimit(u32),
}
