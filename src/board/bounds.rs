//! Axis-aligned bounding boxes derived from a figure's anchor and extent.

use crate::board::{common::Position, errors::DimensionsError};

/// The rectangular set of positions a figure occupies, anchored at its
/// top-left position.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BoundingBox {
    /// Top-left position of the box.
    anchor: Position,
    /// Horizontal extent of the box, in tiles.
    width: i32,
    /// Vertical extent of the box, in tiles.
    height: i32,
}

impl BoundingBox {
    /// Construct a [`BoundingBox`] anchored at `anchor` with the given extent.
    /// Returns a [`DimensionsError`] if `width` or `height` is not positive.
    pub fn new(anchor: Position, width: i32, height: i32) -> Result<Self, DimensionsError> {
        if width < 1 || height < 1 {
            Err(DimensionsError::new(width, height))
        } else {
            Ok(Self {
                anchor,
                width,
                height,
            })
        }
    }

    /// Construct without validating the extent. Callers guarantee positivity;
    /// a degenerate box covers nothing rather than panicking.
    pub(crate) fn new_unchecked(anchor: Position, width: i32, height: i32) -> Self {
        Self {
            anchor,
            width,
            height,
        }
    }

    /// Get the anchor of this box.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Get the horizontal extent of this box.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Get the vertical extent of this box.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check whether `position` falls within this box.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.anchor.x
            && position.x < self.anchor.x + self.width
            && position.y >= self.anchor.y
            && position.y < self.anchor.y + self.height
    }

    /// Get an iterator over every position this box covers, row by row from
    /// the anchor.
    pub fn positions(&self) -> Positions {
        Positions {
            bounds: *self,
            offset: 0,
        }
    }
}

/// Iterator over the positions covered by a [`BoundingBox`], in row-major
/// order starting at the anchor.
#[derive(Debug, Clone)]
pub struct Positions {
    bounds: BoundingBox,
    /// Linear offset of the next position within the box.
    offset: i32,
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.offset >= self.bounds.width * self.bounds.height {
            return None;
        }
        let position = Position::new(
            self.bounds.anchor.x + self.offset % self.bounds.width,
            self.bounds.anchor.y + self.offset / self.bounds.width,
        );
        self.offset += 1;
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nonpositive_extent() {
        assert!(BoundingBox::new(Position::new(0, 0), 0, 2).is_err());
        assert!(BoundingBox::new(Position::new(0, 0), 2, 0).is_err());
        assert!(BoundingBox::new(Position::new(0, 0), -1, 1).is_err());
        assert!(BoundingBox::new(Position::new(0, 0), 1, 1).is_ok());
    }

    #[test]
    fn positions_are_row_major() {
        let bounds = BoundingBox::new(Position::new(1, 2), 2, 2).unwrap();
        let covered: Vec<(i32, i32)> = bounds.positions().map(Into::into).collect();
        assert_eq!(covered, vec![(1, 2), (2, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn positions_restart_from_the_anchor() {
        let bounds = BoundingBox::new(Position::new(0, 0), 3, 1).unwrap();
        let first: Vec<Position> = bounds.positions().collect();
        let second: Vec<Position> = bounds.positions().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn unit_box_covers_exactly_its_anchor() {
        let anchor = Position::new(4, -3);
        let bounds = BoundingBox::new(anchor, 1, 1).unwrap();
        assert_eq!(bounds.positions().collect::<Vec<_>>(), vec![anchor]);
        assert!(bounds.contains(anchor));
        assert!(!bounds.contains(Position::new(5, -3)));
    }

    #[test]
    fn contains_matches_covered_positions() {
        let bounds = BoundingBox::new(Position::new(-1, -1), 2, 3).unwrap();
        for position in bounds.positions() {
            assert!(bounds.contains(position));
        }
        assert!(!bounds.contains(Position::new(1, 0)));
        assert!(!bounds.contains(Position::new(-2, -1)));
        assert!(!bounds.contains(Position::new(-1, 2)));
    }
}
