//! Types that make up the game board.

use std::collections::BTreeSet;

use crate::figures::{Figure, Footprint};

pub use self::{
    bounds::{BoundingBox, Positions},
    common::Position,
    errors::{CannotPlaceReason, DimensionsError, PlaceError},
    index::{PositionMap, Positioned},
};

mod bounds;
pub mod common;
mod errors;
mod index;
mod serial;

/// A tactical game board: the set of valid tiles and the figures placed on
/// them.
///
/// A board starts empty. Tiles declare the legal terrain; figures are then
/// placed, moved, and removed through the board's operations, each of which
/// validates geometric legality before committing. Every position covered by
/// a placed figure is a tile, and no two figures overlap; a failed operation
/// leaves the board exactly as it was.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Board {
    /// The legal terrain, as a set of tile positions.
    tiles: BTreeSet<Position>,
    /// All currently placed figures, keyed by anchor.
    figures: PositionMap<Figure>,
}

impl Board {
    /// Create a board with no tiles and no figures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile at `(x, y)`. Adding a tile that already exists is a no-op.
    pub fn create_empty_tile(&mut self, x: i32, y: i32) {
        self.tiles.insert(Position::new(x, y));
    }

    /// Add a tile at every position in `positions`.
    pub fn create_empty_tiles<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = Position>,
    {
        for position in positions {
            self.create_empty_tile(position.x, position.y);
        }
    }

    /// Whether the board has a tile at `(x, y)`.
    pub fn has_tile(&self, x: i32, y: i32) -> bool {
        self.tiles.contains(&Position::new(x, y))
    }

    /// Get an iterator over the board's tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles.iter().copied()
    }

    /// Get an iterator over all placed figures in row-major anchor order.
    pub fn figures(&self) -> impl Iterator<Item = Positioned<&Figure>> {
        self.figures.iter()
    }

    /// Describe the tile at `position`: no tile, an empty tile, or a tile
    /// covered by a figure. The returned snapshot is decoupled from the live
    /// board.
    pub fn get_tile(&self, position: Position) -> TileInfo {
        if !self.tiles.contains(&position) {
            return TileInfo::None;
        }
        match self.figures.find_covering(position) {
            Some(found) => TileInfo::Occupied(FigureInfo::new(found.position, found.element)),
            None => TileInfo::Empty,
        }
    }

    /// Place `figure` anchored at `(x, y)`.
    ///
    /// Fails without mutating the board if any position covered by the
    /// figure's bounding box is not a tile
    /// ([`CannotPlaceReason::OutOfBounds`]) or is already claimed by another
    /// figure ([`CannotPlaceReason::AlreadyOccupied`]). The rejected figure
    /// can be recovered from the error.
    pub fn add_figure(
        &mut self,
        x: i32,
        y: i32,
        figure: Figure,
    ) -> Result<(), PlaceError<Figure>> {
        let anchor = Position::new(x, y);
        for covered in figure.bounds(anchor).positions() {
            if !self.tiles.contains(&covered) {
                return Err(PlaceError::new(
                    CannotPlaceReason::OutOfBounds,
                    anchor,
                    figure,
                ));
            }
            if self.figures.is_occupied(covered) {
                return Err(PlaceError::new(
                    CannotPlaceReason::AlreadyOccupied,
                    anchor,
                    figure,
                ));
            }
        }
        // Every covered position is a vacant tile.
        self.figures.add(anchor, figure);
        Ok(())
    }

    /// Remove the tile at `position`. A figure whose bounding box covers the
    /// removed position is removed with it, whatever its anchor, so that no
    /// figure is left claiming a position without a tile. Returns whether a
    /// tile was removed.
    pub fn remove_tile(&mut self, position: Position) -> bool {
        if !self.tiles.remove(&position) {
            return false;
        }
        // At most one figure can cover the position, since figures never
        // overlap.
        if let Some(anchor) = self.figures.find_covering(position).map(|found| found.position) {
            self.figures.try_remove(anchor);
        }
        true
    }

    /// Remove and return the figure anchored exactly at `position`. Returns
    /// `None` if no figure is anchored there; a position merely covered by a
    /// figure anchored elsewhere does not match.
    pub fn remove_figure(&mut self, position: Position) -> Option<Figure> {
        self.figures.try_remove(position).map(|placed| placed.element)
    }

    /// Move the figure anchored at `start` so that it is anchored at `end`.
    ///
    /// Atomic from the caller's point of view: if no figure is anchored at
    /// `start`, or the destination box is occupied by another figure or
    /// extends off the board's tiles, the board is restored to its prior
    /// state and `false` is returned. The figure may move onto positions it
    /// currently covers.
    pub fn move_figure(&mut self, start: Position, end: Position) -> bool {
        let moved = match self.figures.try_remove(start) {
            Some(placed) => placed.element,
            None => return false,
        };
        match self.add_figure(end.x, end.y, moved) {
            Ok(()) => true,
            Err(err) => {
                // The prior placement is known valid; reinsert directly.
                self.figures.add(start, err.into_figure());
                false
            }
        }
    }
}

/// Read-only snapshot of a placed figure, as reported by tile queries.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FigureInfo {
    anchor: Position,
    name: String,
    width: i32,
    height: i32,
}

impl FigureInfo {
    fn new(anchor: Position, figure: &Figure) -> Self {
        Self {
            anchor,
            name: figure.name().to_owned(),
            width: figure.width(),
            height: figure.height(),
        }
    }

    /// The anchor the figure is placed at.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// The identity payload of the figure.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Horizontal extent of the figure, in tiles.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Vertical extent of the figure, in tiles.
    pub fn height(&self) -> i32 {
        self.height
    }
}

/// Result of querying a board position with [`Board::get_tile`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TileInfo {
    /// The board has no tile at the queried position.
    None,
    /// The tile exists and no figure covers it.
    Empty,
    /// The tile exists and is covered by a figure.
    Occupied(FigureInfo),
}
