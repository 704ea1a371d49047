//! Core engine types: coordinates, colors, pieces, moves, errors, RNG.
//!
//! These are the fundamental value types shared by the board, the rules
//! layer, and the environment boundary.

pub mod error;
pub mod moves;
pub mod piece;
pub mod position;
pub mod rng;

pub use error::GameError;
pub use moves::{Move, MoveKind, MoveOutcome, MoveRecord};
pub use piece::{Piece, PlayerColor, SquareColor};
pub use position::{Direction, Position, BOARD_SIZE};
pub use rng::GameRng;
