//! The game controller: turn and selection state machine.
//!
//! All mutation of a running game goes through [`Game::select`] and
//! [`Game::commit`]. Rejected operations are pure - they return a
//! typed [`GameError`] and leave the game untouched. The turn only
//! switches when a move ends outside an unfinished capture chain, and
//! the endgame check runs after every turn switch: the side to move
//! loses when none of its pieces can move or capture.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameError, Move, MoveKind, MoveOutcome, MoveRecord, PlayerColor, Position};
use crate::nn::{encode_board, Observation};

use super::movegen::{self, Destinations};

/// Selection state of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No piece selected.
    Idle,
    /// A piece of the side to move is selected.
    Selected(Position),
    /// Mid multi-capture: the piece on this square must keep capturing.
    Chaining(Position),
    /// Terminal: the given side won.
    GameOver(PlayerColor),
}

/// A complete game: board, turn, selection phase, and move history.
///
/// Cloning is cheap (the history is a persistent `im` vector), so
/// batched training can fork games freely. One instance must not be
/// shared across concurrent callers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: PlayerColor,
    round: u32,
    phase: Phase,
    history: Vector<MoveRecord>,
}

impl Game {
    /// A fresh game with the standard setup. Light moves first.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new(), PlayerColor::Light)
    }

    /// A game starting from an arbitrary position.
    #[must_use]
    pub fn with_board(board: Board, turn: PlayerColor) -> Self {
        Self {
            board,
            turn,
            round: 1,
            phase: Phase::Idle,
            history: Vector::new(),
        }
    }

    /// Restart in place with the standard setup.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // === Queries ===

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[must_use]
    pub fn current_turn(&self) -> PlayerColor {
        self.turn
    }

    /// Round counter, starting at 1 and incremented at each turn switch.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Current selection phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The winner, if the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerColor> {
        match self.phase {
            Phase::GameOver(winner) => Some(winner),
            _ => None,
        }
    }

    /// The currently selected square, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        match self.phase {
            Phase::Selected(pos) | Phase::Chaining(pos) => Some(pos),
            _ => None,
        }
    }

    /// Move history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Legal destinations for the occupant of `pos` (per-square view;
    /// see [`movegen::legal_moves`]).
    pub fn legal_moves(&self, pos: Position) -> Result<Destinations, GameError> {
        movegen::legal_moves(&self.board, pos, self.is_chaining_from(pos))
    }

    /// Every legal move for the side to move, with the board-wide
    /// mandatory-capture rule applied. Empty when the game is over.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Move> {
        match self.phase {
            Phase::GameOver(_) => Vec::new(),
            Phase::Chaining(pos) => movegen::capture_moves(&self.board, pos)
                .map(|dests| dests.into_iter().map(|to| Move::new(pos, to)).collect())
                .unwrap_or_default(),
            _ => movegen::side_moves(&self.board, self.turn),
        }
    }

    /// Destination squares of the current selection, as a set for a
    /// renderer to highlight. Empty when nothing is selected.
    #[must_use]
    pub fn highlights(&self) -> FxHashSet<Position> {
        self.selected()
            .and_then(|pos| self.legal_moves(pos).ok())
            .map(|dests| dests.into_iter().collect())
            .unwrap_or_default()
    }

    /// The board as the 8x8 integer grid of the encoder contract.
    #[must_use]
    pub fn board_snapshot(&self) -> Observation {
        encode_board(&self.board)
    }

    // === Transitions ===

    /// Select the piece on `pos` for the side to move.
    ///
    /// Allowed from `Idle` and `Selected` (changing one's mind about
    /// which piece to move); rejected mid-chain and after the game has
    /// ended.
    pub fn select(&mut self, pos: Position) -> Result<(), GameError> {
        match self.phase {
            Phase::GameOver(winner) => return Err(GameError::GameFinished { winner }),
            Phase::Chaining(chain) => return Err(GameError::ChainViolation(chain)),
            Phase::Idle | Phase::Selected(_) => {}
        }

        match self.board.occupant_at(pos)? {
            None => Err(GameError::EmptySquareSelected(pos)),
            Some(piece) if piece.color != self.turn => Err(GameError::WrongSideSelected {
                pos,
                turn: self.turn,
            }),
            Some(_) => {
                self.phase = Phase::Selected(pos);
                Ok(())
            }
        }
    }

    /// Apply the move `from -> to` for the side to move.
    ///
    /// Validates bounds, ownership, the legal destination set, chain
    /// continuation, and the board-wide mandatory-capture rule, then
    /// mutates the board: relocates the piece (promoting on the far
    /// rank), removes the jumped piece on a capture, and either
    /// continues the chain or ends the turn. Any rejection leaves the
    /// game unchanged.
    pub fn commit(&mut self, from: Position, to: Position) -> Result<MoveOutcome, GameError> {
        if let Phase::GameOver(winner) = self.phase {
            return Err(GameError::GameFinished { winner });
        }

        let piece = self
            .board
            .occupant_at(from)?
            .ok_or(GameError::EmptySquareSelected(from))?;
        if piece.color != self.turn {
            return Err(GameError::WrongSideSelected {
                pos: from,
                turn: self.turn,
            });
        }
        if !to.is_on_board() {
            return Err(GameError::out_of_bounds(to));
        }

        let in_chain = self.is_chaining_from(from);
        if let Phase::Chaining(chain) = self.phase {
            if !in_chain {
                return Err(GameError::ChainViolation(chain));
            }
        }

        let cands = movegen::candidates(&self.board, from)?;
        let kind = if cands.captures.contains(&to) {
            MoveKind::Capture
        } else if cands.simple.contains(&to) {
            if in_chain {
                return Err(GameError::ChainViolation(from));
            }
            if movegen::has_any_capture(&self.board, self.turn) {
                return Err(GameError::MandatoryCapture);
            }
            MoveKind::Simple
        } else {
            return Err(GameError::IllegalDestination { from, to });
        };

        // Validated: mutate the board.
        let mover = self.turn;
        let round = self.round;
        let mv = Move::new(from, to);

        let promoted = self.board.move_piece(from, to)?;
        let mut captured = None;
        if kind == MoveKind::Capture {
            if let Some(jumped) = mv.jumped() {
                self.board.remove(jumped)?;
                captured = Some(jumped);
            }
        }

        let chained = kind == MoveKind::Capture
            && !movegen::capture_moves(&self.board, to)?.is_empty();
        if chained {
            self.phase = Phase::Chaining(to);
        } else {
            self.end_turn();
        }

        self.history.push_back(MoveRecord {
            player: mover,
            mv,
            round,
            captured,
            promoted,
        });

        Ok(MoveOutcome {
            kind,
            chained,
            promoted,
        })
    }

    fn is_chaining_from(&self, pos: Position) -> bool {
        matches!(self.phase, Phase::Chaining(chain) if chain == pos)
    }

    fn end_turn(&mut self) {
        self.turn = self.turn.opponent();
        self.round += 1;
        self.phase = Phase::Idle;

        if !movegen::side_can_move(&self.board, self.turn) {
            self.phase = Phase::GameOver(self.turn.opponent());
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
