//! Board model: squares and the 8x8 grid.

pub mod grid;
pub mod square;

pub use grid::{Board, PIECES_PER_SIDE};
pub use square::Square;
