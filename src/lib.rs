//! # rust-draughts
//!
//! A checkers (draughts) rules engine packaged for RL training.
//!
//! ## Design Principles
//!
//! 1. **Rules in one place**: all mutation goes through the game
//!    controller's `select`/`commit`; renderers and training code get
//!    read-only queries and snapshots, never the live board.
//!
//! 2. **Typed rejections**: every illegal operation returns a
//!    `GameError` and leaves the game untouched. There are no fatal
//!    errors in normal operation.
//!
//! 3. **Board-wide mandatory capture**: when any piece of the side to
//!    move can capture, quiet moves are illegal everywhere, not just
//!    from squares that individually have a capture.
//!
//! ## Architecture
//!
//! - The engine is single-threaded and synchronous; one `Game` per
//!   concurrent game instance, cloning is cheap for batched rollouts.
//!
//! - The `nn` boundary is a pure bijection: an 8x8 integer grid for
//!   observations and a `[0, 4096)` action-id space. Legality is
//!   checked by the rules layer when an action is applied.
//!
//! ## Modules
//!
//! - `core`: coordinates, colors, pieces, moves, errors, RNG
//! - `board`: the 8x8 grid of squares and piece relocation
//! - `rules`: move generation and the turn/selection state machine
//! - `nn`: observation encoding and the action-id codec
//! - `env`: gym-style environment wrapper with reward shaping
//! - `python`: PyO3 bindings (feature `python`)

pub mod board;
pub mod core;
pub mod env;
pub mod nn;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameError, GameRng, Move, MoveKind, MoveOutcome, MoveRecord, Piece, PlayerColor,
    Position, SquareColor, BOARD_SIZE,
};

pub use crate::board::{Board, Square, PIECES_PER_SIDE};

pub use crate::rules::{has_any_capture, legal_moves, side_can_move, Destinations, Game, Phase};

pub use crate::nn::{
    decode_action, encode_action, encode_board, piece_code, Observation, ACTION_SPACE, GRID_SIZE,
    SQUARE_COUNT,
};

pub use crate::env::{
    CheckersEnv, MoveReport, StepReport, CAPTURE_REWARD, ILLEGAL_MOVE_PENALTY, LOSS_REWARD,
    WIN_REWARD,
};
