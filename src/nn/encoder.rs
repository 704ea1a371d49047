//! Board observation encoding and the action-id bijection.
//!
//! The observation is an 8x8 integer grid indexed `[file][rank]`:
//! 0 for empty, 1 for a Light man, 2 for a Dark man, plus 2 when the
//! piece is a king. An action id in `[0, 4096)` encodes a `(from, to)`
//! pair as `from_index * 64 + to_index` with `index = file * 8 + rank`.
//! The codec is a pure bijection; it never validates move legality.

use crate::board::Board;
use crate::core::{GameError, Move, Piece, PlayerColor, Position, BOARD_SIZE};

/// Side length of the observation grid.
pub const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Size of the discrete action space: 64 origin squares times 64
/// destination squares.
pub const ACTION_SPACE: usize = SQUARE_COUNT * SQUARE_COUNT;

/// Cell value for an empty square.
pub const EMPTY: u8 = 0;

/// The 8x8 observation grid, indexed `[file][rank]`, values `0..=4`.
pub type Observation = [[u8; GRID_SIZE]; GRID_SIZE];

/// Cell value of a piece: 1 for Light, 2 for Dark, +2 for kings.
#[must_use]
pub fn piece_code(piece: Piece) -> u8 {
    let base = match piece.color {
        PlayerColor::Light => 1,
        PlayerColor::Dark => 2,
    };
    if piece.king {
        base + 2
    } else {
        base
    }
}

/// Encode the board as an observation grid. Pure function of the board.
#[must_use]
pub fn encode_board(board: &Board) -> Observation {
    let mut grid = [[EMPTY; GRID_SIZE]; GRID_SIZE];
    for (file, column) in grid.iter_mut().enumerate() {
        for (rank, cell) in column.iter_mut().enumerate() {
            let pos = Position::new(file as i8, rank as i8);
            if let Some(square) = board.get(pos) {
                if let Some(piece) = square.occupant() {
                    *cell = piece_code(piece);
                }
            }
        }
    }
    grid
}

/// Encode a `(from, to)` pair as an action id in `[0, 4096)`.
///
/// Inverse of [`decode_action`] for on-board coordinate pairs.
#[must_use]
pub fn encode_action(mv: Move) -> usize {
    debug_assert!(mv.from.is_on_board() && mv.to.is_on_board());
    mv.from.index() * SQUARE_COUNT + mv.to.index()
}

/// Decode an action id into a `(from, to)` pair.
///
/// Ids at or above [`ACTION_SPACE`] decode to off-board squares and
/// surface as `OutOfBounds`. Legality is not checked here.
pub fn decode_action(action: usize) -> Result<Move, GameError> {
    let from_index = action / SQUARE_COUNT;
    let to_index = action % SQUARE_COUNT;
    if from_index >= SQUARE_COUNT {
        return Err(GameError::OutOfBounds {
            file: i8::try_from(from_index / GRID_SIZE).unwrap_or(i8::MAX),
            rank: (from_index % GRID_SIZE) as i8,
        });
    }
    Ok(Move::new(
        Position::from_index(from_index),
        Position::from_index(to_index),
    ))
}
