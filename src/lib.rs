//! A discrete tactical game board: a finite set of addressable tiles and the
//! multi-cell figures placed on them.
//!
//! A board is built by declaring tiles, then mutated by placing, moving, and
//! removing [`Figure`]s. Every mutation validates geometric legality (the
//! target tiles exist and are unoccupied) before committing, so a failed
//! operation leaves the board exactly as it was. Queries resolve a
//! [`Position`] to a [`TileInfo`]: no tile, an empty tile, or a tile covered
//! by a figure.
//!
//! ```
//! use tactics_board::{Board, Figure, Position, TileInfo};
//!
//! let mut board = Board::new();
//! board.create_empty_tiles((0..4).map(|x| Position::new(x, 0)));
//!
//! let giant = Figure::new("giant", 2, 1).unwrap();
//! board.add_figure(0, 0, giant).unwrap();
//!
//! // The giant covers (0, 0) and (1, 0).
//! assert!(matches!(board.get_tile(Position::new(1, 0)), TileInfo::Occupied(_)));
//!
//! // Moving to (3, 0) would hang off the board; the giant stays put.
//! assert!(!board.move_figure(Position::new(0, 0), Position::new(3, 0)));
//! assert!(board.move_figure(Position::new(0, 0), Position::new(2, 0)));
//! assert_eq!(board.get_tile(Position::new(0, 0)), TileInfo::Empty);
//! ```
//!
//! Boards persist to a stable JSON form via [`Board::to_json`] and
//! [`Board::try_from_json`].
//!
//! The board is a synchronous, value-like structure with no interior
//! mutability; hosts sharing one across threads must serialize access
//! externally.

pub mod board;
pub mod figures;

pub use crate::{
    board::{
        Board, BoundingBox, CannotPlaceReason, DimensionsError, FigureInfo, PlaceError, Position,
        PositionMap, Positioned, TileInfo,
    },
    figures::{Figure, Footprint},
};
