//! Typed rule errors.
//!
//! Every rejected operation is pure: the game state is left untouched
//! and one of these variants is returned. There are no fatal errors in
//! normal operation.

use thiserror::Error;

use super::piece::PlayerColor;
use super::position::Position;

/// Domain errors for the draughts engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A coordinate outside the 8x8 grid. Also produced when a raw
    /// action id decodes to an off-board square.
    #[error("position ({file}, {rank}) is off the board")]
    OutOfBounds { file: i8, rank: i8 },

    /// Selecting or moving from a square with no piece on it.
    #[error("no piece on {0}")]
    EmptySquareSelected(Position),

    /// Selecting or moving an opponent's piece.
    #[error("piece on {pos} does not belong to {turn}, whose turn it is")]
    WrongSideSelected { pos: Position, turn: PlayerColor },

    /// Destination not in the legal set for the moved piece.
    #[error("illegal destination {to} for the piece on {from}")]
    IllegalDestination { from: Position, to: Position },

    /// A quiet move declared while the side to move has a capture
    /// available somewhere on the board.
    #[error("a capture is available and must be played")]
    MandatoryCapture,

    /// Anything but continuing the capture chain from its last landing
    /// square while the chain is unfinished.
    #[error("the capture chain from {0} must be continued")]
    ChainViolation(Position),

    /// Acting on a game that has already ended.
    #[error("the game is over, {winner} won")]
    GameFinished { winner: PlayerColor },
}

impl GameError {
    /// `OutOfBounds` for the given position.
    #[must_use]
    pub fn out_of_bounds(pos: Position) -> Self {
        GameError::OutOfBounds {
            file: pos.file,
            rank: pos.rank,
        }
    }
}
