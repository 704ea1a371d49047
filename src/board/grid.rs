//! The 8x8 board.
//!
//! The board owns every square and, transitively, every piece; no piece
//! exists outside a square. Mutation methods are total over on-board
//! positions and fail with `OutOfBounds` otherwise; they never silently
//! no-op. Legality of moves is not checked here - that is the rules
//! layer's job - but promotion is a board-level post-condition of
//! relocation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Direction, GameError, Piece, PlayerColor, Position, SquareColor, BOARD_SIZE};

use super::square::Square;

/// Number of pieces each side starts with.
pub const PIECES_PER_SIDE: usize = 12;

/// An 8x8 grid of squares, indexed `[file][rank]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// A board with no pieces on it.
    #[must_use]
    pub fn empty() -> Self {
        let mut squares = [[Square::empty_at(Position::new(0, 0)); 8]; 8];
        for (file, column) in squares.iter_mut().enumerate() {
            for (rank, square) in column.iter_mut().enumerate() {
                *square = Square::empty_at(Position::new(file as i8, rank as i8));
            }
        }
        Self { squares }
    }

    /// A board with the standard starting setup: twelve men per side on
    /// the dark squares of the three ranks nearest each side's edge.
    /// Dark starts on ranks 0..3 and moves toward rank 7; Light starts
    /// on ranks 5..8 and moves toward rank 0.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for file in 0..BOARD_SIZE {
            for rank in 0..BOARD_SIZE {
                let pos = Position::new(file, rank);
                if SquareColor::of(pos) != SquareColor::Dark {
                    continue;
                }
                if rank < 3 {
                    board.squares[file as usize][rank as usize]
                        .set_occupant(Some(Piece::man(PlayerColor::Dark)));
                } else if rank > 4 {
                    board.squares[file as usize][rank as usize]
                        .set_occupant(Some(Piece::man(PlayerColor::Light)));
                }
            }
        }
        board
    }

    /// The square at `pos`, or `None` when `pos` is off the board.
    ///
    /// The infallible sibling of [`Board::square`], for callers that
    /// treat off-board the same as "nothing there" (move generation).
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Square> {
        if pos.is_on_board() {
            Some(&self.squares[pos.file as usize][pos.rank as usize])
        } else {
            None
        }
    }

    /// The square at `pos`, or `OutOfBounds`.
    pub fn square(&self, pos: Position) -> Result<&Square, GameError> {
        self.get(pos).ok_or_else(|| GameError::out_of_bounds(pos))
    }

    /// The piece on `pos`, if any, or `OutOfBounds`.
    pub fn occupant_at(&self, pos: Position) -> Result<Option<Piece>, GameError> {
        Ok(self.square(pos)?.occupant())
    }

    /// The up-to-four on-board diagonal neighbors of `pos`.
    pub fn adjacent_diagonals(&self, pos: Position) -> Result<SmallVec<[Position; 4]>, GameError> {
        if !pos.is_on_board() {
            return Err(GameError::out_of_bounds(pos));
        }
        Ok(Direction::ALL
            .iter()
            .map(|&dir| pos.neighbor(dir))
            .filter(|n| n.is_on_board())
            .collect())
    }

    /// Put `piece` on `pos`, replacing any previous occupant.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Result<(), GameError> {
        let square = self.square_mut(pos)?;
        debug_assert_eq!(
            square.shade(),
            SquareColor::Dark,
            "pieces only ever occupy dark squares"
        );
        square.set_occupant(Some(piece));
        Ok(())
    }

    /// Remove and return the piece on `pos`, if any.
    pub fn remove(&mut self, pos: Position) -> Result<Option<Piece>, GameError> {
        Ok(self.square_mut(pos)?.take_occupant())
    }

    /// Relocate the occupant of `from` to `to`, leaving `from` empty.
    ///
    /// Does not validate move legality, but applies promotion as a
    /// post-condition: a man landing on its far rank is kinged. Returns
    /// whether promotion happened. Moving from an empty square is an
    /// error, never a silent no-op.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<bool, GameError> {
        if !to.is_on_board() {
            return Err(GameError::out_of_bounds(to));
        }
        let mut piece = self
            .square_mut(from)?
            .take_occupant()
            .ok_or(GameError::EmptySquareSelected(from))?;

        let promoted = !piece.king && to.rank == piece.color.promotion_rank();
        if promoted {
            piece.promote();
        }

        let dest = &mut self.squares[to.file as usize][to.rank as usize];
        debug_assert!(dest.is_empty(), "destination of a move must be empty");
        dest.set_occupant(Some(piece));
        Ok(promoted)
    }

    /// Iterate over `(position, piece)` for all pieces of `color`.
    pub fn pieces(&self, color: PlayerColor) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(move |(file, column)| {
            column.iter().enumerate().filter_map(move |(rank, square)| {
                let piece = square.occupant()?;
                (piece.color == color)
                    .then(|| (Position::new(file as i8, rank as i8), piece))
            })
        })
    }

    fn square_mut(&mut self, pos: Position) -> Result<&mut Square, GameError> {
        if pos.is_on_board() {
            Ok(&mut self.squares[pos.file as usize][pos.rank as usize])
        } else {
            Err(GameError::out_of_bounds(pos))
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
