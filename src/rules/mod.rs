//! Rules layer: move generation and the game controller.

pub mod engine;
pub mod movegen;

pub use engine::{Game, Phase};
pub use movegen::{has_any_capture, legal_moves, side_can_move, Destinations};
