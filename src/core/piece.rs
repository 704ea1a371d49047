//! Players, square shading, and pieces.
//!
//! `PlayerColor` identifies a side; `SquareColor` is the fixed
//! checkerboard shading of a cell. The two are deliberately separate
//! enums: a dark square is not the same concept as the dark player,
//! even though pieces only ever sit on dark squares.

use serde::{Deserialize, Serialize};

use super::position::{Position, BOARD_SIZE, Direction};

/// One of the two sides.
///
/// `Light` moves toward rank 0 and promotes there; `Dark` moves toward
/// rank 7. Light moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Light,
    Dark,
}

impl PlayerColor {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerColor::Light => PlayerColor::Dark,
            PlayerColor::Dark => PlayerColor::Light,
        }
    }

    /// The rank on which this side's men are promoted to kings.
    #[must_use]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            PlayerColor::Light => 0,
            PlayerColor::Dark => BOARD_SIZE - 1,
        }
    }

    /// The two forward diagonals for this side's men.
    #[must_use]
    pub const fn forward_directions(self) -> &'static [Direction] {
        match self {
            PlayerColor::Light => &[Direction::NorthWest, Direction::NorthEast],
            PlayerColor::Dark => &[Direction::SouthWest, Direction::SouthEast],
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerColor::Light => write!(f, "light"),
            PlayerColor::Dark => write!(f, "dark"),
        }
    }
}

/// Fixed checkerboard shading of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareColor {
    Light,
    Dark,
}

impl SquareColor {
    /// Shading of the square at `pos`, from coordinate parity.
    ///
    /// Squares with odd `file + rank` are dark; only dark squares ever
    /// hold pieces.
    #[must_use]
    pub const fn of(pos: Position) -> Self {
        if (pos.file + pos.rank) % 2 == 1 {
            SquareColor::Dark
        } else {
            SquareColor::Light
        }
    }
}

/// A piece: its owning side plus a king flag.
///
/// The king flag never reverts once set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: PlayerColor,
    pub king: bool,
}

impl Piece {
    /// A regular (non-king) piece.
    #[must_use]
    pub const fn man(color: PlayerColor) -> Self {
        Self { color, king: false }
    }

    /// A king.
    #[must_use]
    pub const fn king(color: PlayerColor) -> Self {
        Self { color, king: true }
    }

    /// Candidate move directions: both forward diagonals for a man,
    /// all four for a king.
    #[must_use]
    pub const fn directions(self) -> &'static [Direction] {
        if self.king {
            &Direction::ALL
        } else {
            self.color.forward_directions()
        }
    }

    /// Turn this piece into a king.
    pub fn promote(&mut self) {
        self.king = true;
    }
}
