//! Types used for defining figures and the footprints they occupy.

use crate::board::{BoundingBox, DimensionsError, Position};

/// Trait for types that claim a rectangular footprint of tiles when stored in
/// a position index.
///
/// Implementations must report the same positive extents they validated at
/// construction; a degenerate footprint covers no positions rather than
/// panicking.
pub trait Footprint {
    /// Horizontal extent in tiles.
    fn width(&self) -> i32;

    /// Vertical extent in tiles.
    fn height(&self) -> i32;

    /// Compute the bounding box claimed by this footprint when anchored at
    /// `anchor`.
    fn bounds(&self, anchor: Position) -> BoundingBox {
        BoundingBox::new_unchecked(anchor, self.width(), self.height())
    }
}

/// A placeable unit occupying a rectangular region of tiles, possibly 1x1.
///
/// A figure has no position of its own; a position is assigned only by the
/// board index that stores it, and a figure is owned by at most one index
/// entry at a time.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Figure {
    /// Identity payload of the figure, opaque to the board.
    name: String,
    width: i32,
    height: i32,
}

impl Figure {
    /// Construct a figure with the given identity and extent. Returns a
    /// [`DimensionsError`] if `width` or `height` is not positive.
    pub fn new<N: Into<String>>(name: N, width: i32, height: i32) -> Result<Self, DimensionsError> {
        if width < 1 || height < 1 {
            Err(DimensionsError::new(width, height))
        } else {
            Ok(Self {
                name: name.into(),
                width,
                height,
            })
        }
    }

    /// Get the identity payload of this figure.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Footprint for Figure {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nonpositive_extent() {
        assert!(Figure::new("pawn", 0, 1).is_err());
        assert!(Figure::new("pawn", 1, -2).is_err());
        let err = Figure::new("pawn", 0, -2).unwrap_err();
        assert_eq!((err.width(), err.height()), (0, -2));
    }

    #[test]
    fn footprint_spans_anchor_by_extent() {
        let figure = Figure::new("giant", 2, 3).unwrap();
        let bounds = figure.bounds(Position::new(5, 5));
        assert_eq!(bounds.positions().count(), 6);
        assert!(bounds.contains(Position::new(6, 7)));
        assert!(!bounds.contains(Position::new(7, 5)));
    }
}
