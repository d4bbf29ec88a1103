//! Tile catalog and the dense tile grid that stores generated maps.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Vec2;

/// Highest identifier reserved by the tile catalog.
pub const MAX_TILE_ID: u8 = 0x12;

/// Default number of tile columns in a generated map.
pub const DEFAULT_MAP_WIDTH: u32 = 80 * 2;

/// Default number of tile rows in a generated map.
pub const DEFAULT_MAP_HEIGHT: u32 = 24 * 2;

/// Numeric identifier of a tile descriptor in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(u8);

impl TileId {
    /// Creates a new tile identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

/// RGBA color attached to a tile for presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 0,
    };

    /// Creates an opaque color from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 0xFF,
        }
    }

    /// Red component of the color.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the color.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the color.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Alpha component of the color.
    #[must_use]
    pub const fn alpha(&self) -> u8 {
        self.alpha
    }
}

// AAP-64 palette entries.
const DARK_GREY: Rgba = Rgba::from_rgb(20, 16, 19);
const PINK: Rgba = Rgba::from_rgb(245, 160, 151);
const GREY: Rgba = Rgba::from_rgb(50, 43, 40);
const MUDDY: Rgba = Rgba::from_rgb(121, 103, 85);

/// Display and collision attributes of a single tile kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Identifier of the tile within the catalog.
    pub id: TileId,
    /// Character drawn for the tile.
    pub glyph: char,
    /// Color used when drawing the glyph.
    pub color: Rgba,
    /// Human-readable name.
    pub name: &'static str,
    /// Whether the tile blocks movement.
    pub collides: bool,
}

impl Tile {
    const fn placeholder(id: TileId) -> Self {
        Self {
            id,
            glyph: '\0',
            color: Rgba::TRANSPARENT,
            name: "",
            collides: false,
        }
    }
}

/// Tile kinds defined by the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Unused space.
    Empty,
    /// Marker drawn at the player's position.
    Player,
    /// Walkable floor carved out of a room.
    Ground,
    /// Solid rock filling everything outside rooms.
    Wall,
}

impl TileKind {
    /// Catalog identifier of the kind.
    #[must_use]
    pub const fn id(self) -> TileId {
        match self {
            Self::Empty => TileId::new(0x00),
            Self::Player => TileId::new(0x01),
            Self::Ground => TileId::new(0x02),
            Self::Wall => TileId::new(0x03),
        }
    }

    /// Full descriptor for the kind.
    #[must_use]
    pub const fn tile(self) -> Tile {
        let id = self.id();
        match self {
            Self::Empty => Tile {
                id,
                glyph: ' ',
                color: DARK_GREY,
                name: "Empty",
                collides: false,
            },
            Self::Player => Tile {
                id,
                glyph: '@',
                color: PINK,
                name: "Player",
                collides: false,
            },
            Self::Ground => Tile {
                id,
                glyph: '-',
                color: MUDDY,
                name: "Ground",
                collides: false,
            },
            Self::Wall => Tile {
                id,
                glyph: '#',
                color: GREY,
                name: "Wall",
                collides: true,
            },
        }
    }

    /// Shorthand for `self.tile().collides`.
    #[must_use]
    pub const fn collides(self) -> bool {
        self.tile().collides
    }
}

impl TryFrom<TileId> for TileKind {
    type Error = TileError;

    fn try_from(id: TileId) -> Result<Self, Self::Error> {
        match id.get() {
            0x00 => Ok(Self::Empty),
            0x01 => Ok(Self::Player),
            0x02 => Ok(Self::Ground),
            0x03 => Ok(Self::Wall),
            value if value <= MAX_TILE_ID => Err(TileError::Reserved(id)),
            _ => Err(TileError::UnknownId(id)),
        }
    }
}

/// Failures raised by the tile catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TileError {
    /// The identifier lies outside the reserved catalog range.
    #[error("tile id {:#04x} is not part of the catalog", .0.get())]
    UnknownId(TileId),
    /// The identifier is reserved but has no tile kind assigned yet.
    #[error("tile id {:#04x} is reserved and has no kind", .0.get())]
    Reserved(TileId),
}

/// Looks up the tile descriptor registered for `id`.
///
/// Reserved identifiers without a kind resolve to a blank, non-colliding
/// placeholder. Identifiers above [`MAX_TILE_ID`] are rejected.
pub fn lookup_tile(id: TileId) -> Result<Tile, TileError> {
    match TileKind::try_from(id) {
        Ok(kind) => Ok(kind.tile()),
        Err(TileError::Reserved(id)) => Ok(Tile::placeholder(id)),
        Err(error) => Err(error),
    }
}

/// Dense row-major grid of tile kinds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileGrid {
    width: u32,
    height: u32,
    cells: Vec<TileKind>,
}

impl TileGrid {
    /// Creates a grid with every cell set to `fill`.
    #[must_use]
    pub fn filled(width: u32, height: u32, fill: TileKind) -> Self {
        let capacity_u64 = u64::from(width) * u64::from(height);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            width,
            height,
            cells: vec![fill; capacity],
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reports whether `cell` lies within `[0, width) × [0, height)`.
    #[must_use]
    pub fn in_bounds(&self, cell: Vec2) -> bool {
        self.index(cell).is_some()
    }

    /// Tile kind stored at `cell`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, cell: Vec2) -> Option<TileKind> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Overwrites the tile at `cell`, returning `false` when outside the grid.
    pub fn set(&mut self, cell: Vec2, kind: TileKind) -> bool {
        match self.index(cell).and_then(|index| self.cells.get_mut(index)) {
            Some(slot) => {
                *slot = kind;
                true
            }
            None => false,
        }
    }

    /// Overwrites every cell with `kind`.
    pub fn fill(&mut self, kind: TileKind) {
        self.cells.fill(kind);
    }

    /// Reports whether `cell` is inside the grid and holds a colliding tile.
    #[must_use]
    pub fn is_blocked(&self, cell: Vec2) -> bool {
        self.get(cell).map_or(false, TileKind::collides)
    }

    /// First cell in row-major order that does not block movement.
    #[must_use]
    pub fn first_open_cell(&self) -> Option<Vec2> {
        let width = usize::try_from(self.width).ok()?.max(1);
        let index = self.cells.iter().position(|kind| !kind.collides())?;
        let column = i32::try_from(index % width).ok()?;
        let row = i32::try_from(index / width).ok()?;
        Some(Vec2::new(column, row))
    }

    /// Row-major view of every cell.
    #[must_use]
    pub fn cells(&self) -> &[TileKind] {
        &self.cells
    }

    /// Iterates over the grid one row at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[TileKind]> {
        let width = usize::try_from(self.width).unwrap_or(0).max(1);
        self.cells.chunks(width)
    }

    fn index(&self, cell: Vec2) -> Option<usize> {
        let column = u32::try_from(cell.x()).ok()?;
        let row = u32::try_from(cell.y()).ok()?;
        if column < self.width && row < self.height {
            let row = usize::try_from(row).ok()?;
            let column = usize::try_from(column).ok()?;
            let width = usize::try_from(self.width).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}
