//! Integer geometry primitives used by map generation and movement.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Two-dimensional vector with signed integer components.
///
/// The x axis grows towards increasing columns and the y axis towards
/// increasing rows, matching the layout of [`crate::TileGrid`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Vec2 {
    x: i32,
    y: i32,
}

impl Vec2 {
    /// Vector with both components set to zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical component.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Reports whether both components are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Euclidean length of the vector.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        let x = f64::from(self.x);
        let y = f64::from(self.y);
        (x * x + y * y).sqrt()
    }

    /// Divides each component by the magnitude and rounds to the nearest integer.
    ///
    /// Rounding is half away from zero, so any non-zero vector collapses onto
    /// one of the eight unit steps around the origin. The zero vector has no
    /// direction and yields `None`.
    #[must_use]
    pub fn normalize(self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        let magnitude = self.magnitude();
        let x = (f64::from(self.x) / magnitude).round() as i32;
        let y = (f64::from(self.y) / magnitude).round() as i32;
        Some(Self::new(x, y))
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl From<Direction> for Vec2 {
    fn from(direction: Direction) -> Self {
        direction.unit()
    }
}

/// Cardinal movement directions on the tile grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// Every cardinal direction in clockwise order starting at north.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit step taken when travelling in this direction.
    #[must_use]
    pub const fn unit(self) -> Vec2 {
        match self {
            Self::North => Vec2::new(0, -1),
            Self::East => Vec2::new(1, 0),
            Self::South => Vec2::new(0, 1),
            Self::West => Vec2::new(-1, 0),
        }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pos: Vec2,
    size: Vec2,
}

impl Rect {
    /// Creates a rectangle from its anchor position and size.
    #[must_use]
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Anchor position of the rectangle.
    #[must_use]
    pub const fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Width and height of the rectangle.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        self.size
    }

    /// Moves the rectangle by the provided offset, keeping its size.
    pub fn translate(&mut self, offset: Vec2) {
        self.pos = self.pos + offset;
    }

    /// Center point, truncated towards zero on odd sizes.
    #[must_use]
    pub const fn center(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + self.size.x / 2,
            self.pos.y + self.size.y / 2,
        )
    }

    /// Top-left corner, identical to the anchor position.
    #[must_use]
    pub const fn top_left(&self) -> Vec2 {
        self.pos
    }

    /// Bottom-right corner, one past the last covered cell on each axis.
    ///
    /// Saturates at the `i32` range.
    #[must_use]
    pub const fn bottom_right(&self) -> Vec2 {
        Vec2::new(
            self.pos.x.saturating_add(self.size.x),
            self.pos.y.saturating_add(self.size.y),
        )
    }

    /// Top-right corner.
    #[must_use]
    pub const fn top_right(&self) -> Vec2 {
        Vec2::new(self.bottom_right().x, self.pos.y)
    }

    /// Bottom-left corner.
    #[must_use]
    pub const fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.bottom_right().y)
    }

    /// The four corners in top-left, top-right, bottom-left, bottom-right order.
    #[must_use]
    pub const fn corners(&self) -> [Vec2; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_left(),
            self.bottom_right(),
        ]
    }

    /// Returns a copy grown by `amount` on every side.
    ///
    /// Width and height grow independently by `2 * amount` each, saturating
    /// at the `i32` range.
    #[must_use]
    pub const fn expand(&self, amount: i32) -> Self {
        let growth = amount.saturating_mul(2);
        Self {
            pos: Vec2::new(
                self.pos.x.saturating_sub(amount),
                self.pos.y.saturating_sub(amount),
            ),
            size: Vec2::new(
                self.size.x.saturating_add(growth),
                self.size.y.saturating_add(growth),
            ),
        }
    }

    /// Reports whether the point lies strictly inside the rectangle.
    ///
    /// Points on an edge are outside.
    #[must_use]
    pub const fn contains(&self, point: Vec2) -> bool {
        let top_left = self.top_left();
        let bottom_right = self.bottom_right();
        point.x > top_left.x
            && point.x < bottom_right.x
            && point.y > top_left.y
            && point.y < bottom_right.y
    }

    /// Reports whether any corner of `other` lies strictly inside `self`.
    ///
    /// The test is not symmetric: callers that need both directions check
    /// each ordering.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        other.corners().into_iter().any(|corner| self.contains(corner))
    }
}
