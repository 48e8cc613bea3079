//! # World Module
//!
//! Grid coordinates, tile classification and the level model.
//!
//! A level is a fixed-size base layer of tile symbols with two sparse
//! overlays on top of it: monsters and items, each keyed by [`Position`].

pub mod level;
pub mod tile;

pub use level::*;
pub use tile::*;

use serde::{Deserialize, Serialize};

/// A tile coordinate on the level grid.
///
/// `x` grows to the right and `y` grows downwards, matching the row order of
/// the base layer.
///
/// # Examples
///
/// ```
/// use rrogue::Position;
///
/// let pos = Position::new(3, 4);
/// assert_eq!(pos.x, 3);
/// assert_eq!(pos.y, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns the neighbouring position one step in `direction`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rrogue::{Direction, Position};
    ///
    /// assert_eq!(Position::new(2, 2).step(Direction::Up), Position::new(2, 1));
    /// ```
    pub fn step(self, direction: Direction) -> Position {
        self + direction.to_delta()
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// The four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Converts a direction to a position delta.
    pub fn to_delta(self) -> Position {
        match self {
            Direction::Up => Position::new(0, -1),
            Direction::Down => Position::new(0, 1),
            Direction::Left => Position::new(-1, 0),
            Direction::Right => Position::new(1, 0),
        }
    }

    /// Returns all four directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}
