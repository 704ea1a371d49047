//! Moves, their classification, and per-move records.
//!
//! A `Move` is just a `(from, to)` pair; its kind (simple step or
//! capture) is derived from geometry. `MoveOutcome` is what `commit`
//! reports to callers and `MoveRecord` is the history entry kept by
//! the game for replay/debugging and training data.

use serde::{Deserialize, Serialize};

use super::piece::PlayerColor;
use super::position::Position;

/// Classification of a move by its geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// One diagonal step onto an empty square.
    Simple,
    /// Two diagonal steps over an opposing piece.
    Capture,
}

/// A `(from, to)` coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Derived kind, or `None` if the geometry is not a legal shape
    /// (not a one- or two-step diagonal).
    #[must_use]
    pub fn kind(&self) -> Option<MoveKind> {
        let df = (self.to.file - self.from.file).abs();
        let dr = (self.to.rank - self.from.rank).abs();
        match (df, dr) {
            (1, 1) => Some(MoveKind::Simple),
            (2, 2) => Some(MoveKind::Capture),
            _ => None,
        }
    }

    /// The jumped square of a capture (the midpoint), or `None` for
    /// any other geometry.
    #[must_use]
    pub fn jumped(&self) -> Option<Position> {
        match self.kind() {
            Some(MoveKind::Capture) => Some(Position::new(
                (self.from.file + self.to.file) / 2,
                (self.from.rank + self.to.rank) / 2,
            )),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// What a successful `commit` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Simple step or capture.
    pub kind: MoveKind,
    /// True when the capture chain continues and the turn did not switch.
    pub chained: bool,
    /// True when the moved piece was kinged by this move.
    pub promoted: bool,
}

/// A recorded move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub player: PlayerColor,
    /// The move made.
    pub mv: Move,
    /// Round number when the move was made.
    pub round: u32,
    /// The square of the captured piece, if any.
    pub captured: Option<Position>,
    /// Whether the move promoted the piece.
    pub promoted: bool,
}
