//! Numeric boundary for learning-environment collaborators.
//!
//! Translates between the board and the fixed-size representations a
//! training loop consumes: the 8x8 observation grid and the integer
//! action space. Validation of decoded moves happens in the rules
//! layer, never here.

pub mod encoder;

pub use encoder::{
    decode_action, encode_action, encode_board, piece_code, Observation, ACTION_SPACE, EMPTY,
    GRID_SIZE, SQUARE_COUNT,
};
