//! The persisted form of a board.
//!
//! A board is persisted as a JSON object with two collections, stable across
//! round-trips:
//!
//! ```json
//! {
//!   "tiles": [{"x": 0, "y": 0}, {"x": 1, "y": 0}],
//!   "figures": [
//!     {"position": {"x": 0, "y": 0},
//!      "figure": {"name": "giant", "width": 2, "height": 1}}
//!   ]
//! }
//! ```
//!
//! Figure placements are a list of position/figure pairs rather than an
//! object, since JSON object keys cannot be coordinates.

use serde::{Deserialize, Serialize};

use crate::{
    board::{common::Position, Board},
    figures::{Figure, Footprint},
};

#[derive(Serialize, Deserialize)]
struct BoardRepr {
    tiles: Vec<Position>,
    figures: Vec<PlacementRepr>,
}

#[derive(Serialize, Deserialize)]
struct PlacementRepr {
    position: Position,
    figure: FigureRepr,
}

#[derive(Serialize, Deserialize)]
struct FigureRepr {
    name: String,
    width: i32,
    height: i32,
}

impl Board {
    /// Encode this board as its persisted JSON form. The encoding is
    /// deterministic: tiles and figure placements are emitted in row-major
    /// order.
    pub fn to_json(&self) -> String {
        let repr = BoardRepr {
            tiles: self.tiles().collect(),
            figures: self
                .figures()
                .map(|placed| PlacementRepr {
                    position: placed.position,
                    figure: FigureRepr {
                        name: placed.element.name().to_owned(),
                        width: placed.element.width(),
                        height: placed.element.height(),
                    },
                })
                .collect(),
        };
        // The wire types hold only plain fields with string keys, which
        // serialize infallibly.
        serde_json::to_string(&repr).unwrap_or_default()
    }

    /// Decode a board from its persisted JSON form.
    ///
    /// Returns `None` if the text is not valid JSON, lacks the required
    /// structure, or describes an invalid board: a figure with a non-positive
    /// extent, placed off the tiles, or overlapping another figure. A board
    /// is never partially constructed; every placement is replayed through
    /// [`Board::add_figure`].
    pub fn try_from_json(json: &str) -> Option<Board> {
        let repr: BoardRepr = serde_json::from_str(json).ok()?;
        let mut board = Board::new();
        board.create_empty_tiles(repr.tiles);
        for placed in repr.figures {
            let figure =
                Figure::new(placed.figure.name, placed.figure.width, placed.figure.height).ok()?;
            board
                .add_figure(placed.position.x, placed.position.y, figure)
                .ok()?;
        }
        Some(board)
    }
}
