//! Legal move generation.
//!
//! For each candidate direction of a piece we look one step ahead
//! (the blind move): an empty neighbor is a simple-move candidate; an
//! opposing piece with an empty landing square behind it is a capture
//! candidate. If any capture candidate exists from a square, captures
//! are the only legal moves from it. While a capture chain is
//! unfinished, simple candidates are suppressed entirely - a chain can
//! only end, never be redirected into a quiet move.
//!
//! `legal_moves` is a per-square view. The board-wide mandatory-capture
//! rule (a capture anywhere bans quiet moves everywhere) is enforced by
//! the game controller using [`has_any_capture`].

use smallvec::SmallVec;

use crate::board::{Board, Square};
use crate::core::{GameError, Move, Piece, PlayerColor, Position};

/// Destination list for one piece. At most four entries.
pub type Destinations = SmallVec<[Position; 4]>;

/// Candidate moves from one square, split by kind.
#[derive(Clone, Debug, Default)]
pub(crate) struct CandidateMoves {
    pub simple: Destinations,
    pub captures: Destinations,
}

/// Candidates for the occupant of `pos`, or empty candidates when the
/// square is empty. Off-board positions are an error.
pub(crate) fn candidates(board: &Board, pos: Position) -> Result<CandidateMoves, GameError> {
    match board.occupant_at(pos)? {
        Some(piece) => Ok(piece_candidates(board, pos, piece)),
        None => Ok(CandidateMoves::default()),
    }
}

fn piece_candidates(board: &Board, pos: Position, piece: Piece) -> CandidateMoves {
    let mut moves = CandidateMoves::default();

    for &dir in piece.directions() {
        let step = pos.neighbor(dir);
        let Some(square) = board.get(step) else {
            continue;
        };
        match square.occupant() {
            None => moves.simple.push(step),
            Some(other) if other.color != piece.color => {
                let landing = pos.jump(dir);
                if board.get(landing).is_some_and(Square::is_empty) {
                    moves.captures.push(landing);
                }
            }
            Some(_) => {}
        }
    }

    moves
}

/// The exhaustive legal destination set for the occupant of `pos`.
///
/// Applies the per-square mandatory-capture rule and, when `in_chain`
/// is set, the chain suppression of quiet moves. An empty square yields
/// an empty set; an off-board position is an error.
pub fn legal_moves(
    board: &Board,
    pos: Position,
    in_chain: bool,
) -> Result<Destinations, GameError> {
    let moves = candidates(board, pos)?;
    if !moves.captures.is_empty() {
        Ok(moves.captures)
    } else if in_chain {
        Ok(Destinations::new())
    } else {
        Ok(moves.simple)
    }
}

/// The capture destinations for the occupant of `pos`.
pub fn capture_moves(board: &Board, pos: Position) -> Result<Destinations, GameError> {
    Ok(candidates(board, pos)?.captures)
}

/// Whether any piece of `color` has a capture available anywhere.
#[must_use]
pub fn has_any_capture(board: &Board, color: PlayerColor) -> bool {
    board
        .pieces(color)
        .any(|(pos, piece)| !piece_candidates(board, pos, piece).captures.is_empty())
}

/// Whether any piece of `color` can move or capture at all.
#[must_use]
pub fn side_can_move(board: &Board, color: PlayerColor) -> bool {
    board.pieces(color).any(|(pos, piece)| {
        let moves = piece_candidates(board, pos, piece);
        !moves.simple.is_empty() || !moves.captures.is_empty()
    })
}

/// Every legal move for `color`, with the board-wide mandatory-capture
/// rule applied: when any capture exists, only captures are returned.
#[must_use]
pub fn side_moves(board: &Board, color: PlayerColor) -> Vec<Move> {
    let capture_only = has_any_capture(board, color);
    let mut moves = Vec::new();

    for (pos, piece) in board.pieces(color) {
        let cands = piece_candidates(board, pos, piece);
        let dests = if capture_only { &cands.captures } else { &cands.simple };
        moves.extend(dests.iter().map(|&to| Move::new(pos, to)));
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    fn pos(file: i8, rank: i8) -> Position {
        Position::new(file, rank)
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let board = Board::empty();
        assert!(legal_moves(&board, pos(1, 2), false).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_bounds_is_error() {
        let board = Board::empty();
        assert!(legal_moves(&board, pos(8, 0), false).is_err());
        assert!(capture_moves(&board, pos(0, -1)).is_err());
    }

    #[test]
    fn test_man_moves_forward_only() {
        let mut board = Board::empty();
        board.place(pos(3, 4), Piece::man(PlayerColor::Light)).unwrap();

        let mut moves = legal_moves(&board, pos(3, 4), false).unwrap();
        moves.sort();
        assert_eq!(moves.as_slice(), &[pos(2, 3), pos(4, 3)]);
    }

    #[test]
    fn test_dark_man_moves_toward_rank_seven() {
        let mut board = Board::empty();
        board.place(pos(3, 4), Piece::man(PlayerColor::Dark)).unwrap();

        let mut moves = legal_moves(&board, pos(3, 4), false).unwrap();
        moves.sort();
        assert_eq!(moves.as_slice(), &[pos(2, 5), pos(4, 5)]);
    }

    #[test]
    fn test_king_moves_all_four_diagonals() {
        let mut board = Board::empty();
        board.place(pos(3, 4), Piece::king(PlayerColor::Light)).unwrap();

        let moves = legal_moves(&board, pos(3, 4), false).unwrap();
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_edge_moves_stay_on_board() {
        let mut board = Board::empty();
        board.place(pos(0, 5), Piece::man(PlayerColor::Light)).unwrap();

        let moves = legal_moves(&board, pos(0, 5), false).unwrap();
        assert_eq!(moves.as_slice(), &[pos(1, 4)]);
    }

    #[test]
    fn test_same_color_neighbor_blocks() {
        let mut board = Board::empty();
        board.place(pos(2, 5), Piece::man(PlayerColor::Light)).unwrap();
        board.place(pos(1, 4), Piece::man(PlayerColor::Light)).unwrap();

        let moves = legal_moves(&board, pos(2, 5), false).unwrap();
        assert_eq!(moves.as_slice(), &[pos(3, 4)]);
    }

    #[test]
    fn test_capture_is_mandatory_for_the_square() {
        // Light man on (2, 5), opposing piece on (3, 4), empty (4, 3):
        // the capture is the only legal move, the quiet steps to
        // (1, 4) and (3, 4) are excluded.
        let mut board = Board::empty();
        board.place(pos(2, 5), Piece::man(PlayerColor::Light)).unwrap();
        board.place(pos(3, 4), Piece::man(PlayerColor::Dark)).unwrap();

        let moves = legal_moves(&board, pos(2, 5), false).unwrap();
        assert_eq!(moves.as_slice(), &[pos(4, 3)]);
    }

    #[test]
    fn test_capture_blocked_by_occupied_landing() {
        let mut board = Board::empty();
        board.place(pos(2, 5), Piece::man(PlayerColor::Light)).unwrap();
        board.place(pos(3, 4), Piece::man(PlayerColor::Dark)).unwrap();
        board.place(pos(4, 3), Piece::man(PlayerColor::Dark)).unwrap();

        // Landing occupied: no capture, quiet move remains.
        let moves = legal_moves(&board, pos(2, 5), false).unwrap();
        assert_eq!(moves.as_slice(), &[pos(1, 4)]);
    }

    #[test]
    fn test_capture_blocked_by_board_edge() {
        let mut board = Board::empty();
        board.place(pos(1, 2), Piece::man(PlayerColor::Dark)).unwrap();
        board.place(pos(0, 3), Piece::man(PlayerColor::Light)).unwrap();

        // Jumping (0, 3) would land on (-1, 4), off the board.
        let moves = legal_moves(&board, pos(1, 2), false).unwrap();
        assert_eq!(moves.as_slice(), &[pos(2, 3)]);
    }

    #[test]
    fn test_king_captures_backwards() {
        let mut board = Board::empty();
        board.place(pos(2, 3), Piece::king(PlayerColor::Light)).unwrap();
        board.place(pos(3, 4), Piece::man(PlayerColor::Dark)).unwrap();

        let moves = legal_moves(&board, pos(2, 3), false).unwrap();
        assert_eq!(moves.as_slice(), &[pos(4, 5)]);
    }

    #[test]
    fn test_chain_suppresses_quiet_moves() {
        let mut board = Board::empty();
        board.place(pos(4, 3), Piece::man(PlayerColor::Light)).unwrap();

        // No further capture from (4, 3): mid-chain the piece has no
        // legal move at all, even though quiet steps exist.
        assert!(!legal_moves(&board, pos(4, 3), false).unwrap().is_empty());
        assert!(legal_moves(&board, pos(4, 3), true).unwrap().is_empty());
    }

    #[test]
    fn test_chain_keeps_captures() {
        let mut board = Board::empty();
        board.place(pos(4, 3), Piece::man(PlayerColor::Light)).unwrap();
        board.place(pos(5, 2), Piece::man(PlayerColor::Dark)).unwrap();

        let moves = legal_moves(&board, pos(4, 3), true).unwrap();
        assert_eq!(moves.as_slice(), &[pos(6, 1)]);
    }

    #[test]
    fn test_has_any_capture() {
        let mut board = Board::empty();
        board.place(pos(2, 5), Piece::man(PlayerColor::Light)).unwrap();
        board.place(pos(6, 5), Piece::man(PlayerColor::Light)).unwrap();
        assert!(!has_any_capture(&board, PlayerColor::Light));

        board.place(pos(3, 4), Piece::man(PlayerColor::Dark)).unwrap();
        assert!(has_any_capture(&board, PlayerColor::Light));

        // The Dark man could jump (2, 5) in return, but its landing
        // square (1, 6) is occupied.
        board.place(pos(1, 6), Piece::man(PlayerColor::Light)).unwrap();
        assert!(!has_any_capture(&board, PlayerColor::Dark));
    }

    #[test]
    fn test_side_can_move() {
        let board = Board::new();
        assert!(side_can_move(&board, PlayerColor::Light));
        assert!(side_can_move(&board, PlayerColor::Dark));

        let empty = Board::empty();
        assert!(!side_can_move(&empty, PlayerColor::Light));
    }

    #[test]
    fn test_side_moves_capture_only_when_any_capture_exists() {
        let mut board = Board::empty();
        board.place(pos(2, 5), Piece::man(PlayerColor::Light)).unwrap();
        board.place(pos(6, 5), Piece::man(PlayerColor::Light)).unwrap();
        board.place(pos(3, 4), Piece::man(PlayerColor::Dark)).unwrap();

        // (6, 5) has quiet moves, but the board-wide rule drops them.
        let moves = side_moves(&board, PlayerColor::Light);
        assert_eq!(moves, vec![Move::new(pos(2, 5), pos(4, 3))]);
    }

    #[test]
    fn test_initial_board_side_moves() {
        let board = Board::new();
        // Three of the four front-rank Light men have two openings;
        // the man on the edge file has one.
        let moves = side_moves(&board, PlayerColor::Light);
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|m| m.to.rank == 4));
    }
}
