//! Coordinate types shared across the board's modules.

pub use self::position::Position;

mod position;
