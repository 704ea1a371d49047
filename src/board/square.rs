//! A single board cell: fixed shading plus an occupant slot.

use serde::{Deserialize, Serialize};

use crate::core::{Piece, Position, SquareColor};

/// One cell of the board.
///
/// The shading is fixed at construction; the occupant is the only
/// mutable part. Occupancy is an explicit `Option` so that "no piece"
/// can never be confused with a piece value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    shade: SquareColor,
    occupant: Option<Piece>,
}

impl Square {
    /// An empty square with the shading of `pos`.
    #[must_use]
    pub fn empty_at(pos: Position) -> Self {
        Self {
            shade: SquareColor::of(pos),
            occupant: None,
        }
    }

    /// The fixed shading of this square.
    #[must_use]
    pub fn shade(&self) -> SquareColor {
        self.shade
    }

    /// The piece on this square, if any.
    #[must_use]
    pub fn occupant(&self) -> Option<Piece> {
        self.occupant
    }

    /// Whether this square is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub(crate) fn set_occupant(&mut self, piece: Option<Piece>) {
        self.occupant = piece;
    }

    pub(crate) fn take_occupant(&mut self) -> Option<Piece> {
        self.occupant.take()
    }
}
