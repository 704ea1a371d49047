//! Board coordinates and diagonal directions.
//!
//! A `Position` is a `(file, rank)` pair. Coordinates are stored as `i8`
//! and are freely constructible so that off-board values can be produced
//! by offset math and by decoding raw action ids; bounds are checked at
//! the `Board` and decode boundaries, where violations surface as
//! `GameError::OutOfBounds`.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: i8 = 8;

/// A square coordinate: `(file, rank)`, each in `0..8` when on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub file: i8,
    pub rank: i8,
}

impl Position {
    /// Create a position. No bounds check; see [`Position::is_on_board`].
    #[must_use]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Whether both coordinates lie in `0..8`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < BOARD_SIZE && self.rank >= 0 && self.rank < BOARD_SIZE
    }

    /// The square one diagonal step away in `dir`. May be off the board.
    #[must_use]
    pub const fn neighbor(self, dir: Direction) -> Self {
        Self {
            file: self.file + dir.file_step(),
            rank: self.rank + dir.rank_step(),
        }
    }

    /// The square two diagonal steps away in `dir` (a capture landing).
    #[must_use]
    pub const fn jump(self, dir: Direction) -> Self {
        Self {
            file: self.file + 2 * dir.file_step(),
            rank: self.rank + 2 * dir.rank_step(),
        }
    }

    /// Whether this square lies on the first or last rank.
    #[must_use]
    pub const fn is_end_rank(self) -> bool {
        self.rank == 0 || self.rank == BOARD_SIZE - 1
    }

    /// Flat index in `0..64`: `file * 8 + rank`.
    ///
    /// Only meaningful for on-board positions; the inverse is
    /// [`Position::from_index`].
    #[must_use]
    pub fn index(self) -> usize {
        debug_assert!(self.is_on_board(), "index() requires an on-board position");
        self.file as usize * BOARD_SIZE as usize + self.rank as usize
    }

    /// Inverse of [`Position::index`]: `(i / 8, i % 8)`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            file: (index / BOARD_SIZE as usize) as i8,
            rank: (index % BOARD_SIZE as usize) as i8,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

/// A diagonal direction. North is toward rank 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// All four diagonals (a king's candidate directions).
    pub const ALL: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// File offset of one step in this direction.
    #[must_use]
    pub const fn file_step(self) -> i8 {
        match self {
            Direction::NorthWest | Direction::SouthWest => -1,
            Direction::NorthEast | Direction::SouthEast => 1,
        }
    }

    /// Rank offset of one step in this direction.
    #[must_use]
    pub const fn rank_step(self) -> i8 {
        match self {
            Direction::NorthWest | Direction::NorthEast => -1,
            Direction::SouthWest | Direction::SouthEast => 1,
        }
    }
}
