//! Errors used by the `Board` and its figure index.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::common::Position;

/// Error returned when constructing a figure or bounding box with a
/// non-positive extent.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("extent must be positive, got {width}x{height}")]
pub struct DimensionsError {
    /// The rejected width.
    width: i32,
    /// The rejected height.
    height: i32,
}

impl DimensionsError {
    /// Create a [`DimensionsError`] for the given rejected extent.
    pub(crate) fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The width that was rejected.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The height that was rejected.
    pub fn height(&self) -> i32 {
        self.height
    }
}

/// Reason why a figure could not be placed at a given anchor.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more of the covered positions is not a tile on the board.
    #[error("the placement extends beyond the board's tiles")]
    OutOfBounds,
    /// One or more of the covered positions is claimed by another figure.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a figure in an invalid position.
/// Carries the rejected figure so the caller can recover it.
#[derive(Error)]
#[error("could not place figure at {anchor:?}: {reason}")]
pub struct PlaceError<F> {
    #[source]
    reason: CannotPlaceReason,
    anchor: Position,
    figure: F,
}

impl<F> PlaceError<F> {
    /// Construct a placement error from a reason, anchor, and figure.
    pub(crate) fn new(reason: CannotPlaceReason, anchor: Position, figure: F) -> Self {
        Self {
            reason,
            anchor,
            figure,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the anchor where placement was attempted.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Get a reference to the figure that was not placed.
    pub fn figure(&self) -> &F {
        &self.figure
    }

    /// Extract the rejected figure from this error.
    pub fn into_figure(self) -> F {
        self.figure
    }
}

impl<F> Debug for PlaceError<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
