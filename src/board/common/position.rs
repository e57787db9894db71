use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// The coordinates of a single tile on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal position of the tile.
    pub x: i32,
    /// Vertical position of the tile.
    pub y: i32,
}

impl Position {
    /// Construct a [`Position`] from the given `x` and `y`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Ord for Position {
    /// Row-major order, so tile sets and figure indexes enumerate
    /// deterministically.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Position {
    /// Construct a [`Position`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    /// Convert the [`Position`] into an `(x, y)` pair.
    fn from(position: Position) -> Self {
        (position.x, position.y)
    }
}
