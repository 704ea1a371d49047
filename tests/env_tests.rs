//! Integration tests for the training environment and the nn boundary.

use rust_draughts::{
    encode_action, Board, CheckersEnv, Game, Move, MoveReport, Phase, Piece, PlayerColor,
    Position, ACTION_SPACE, CAPTURE_REWARD, ILLEGAL_MOVE_PENALTY, WIN_REWARD,
};

fn pos(file: i8, rank: i8) -> Position {
    Position::new(file, rank)
}

fn action(from: Position, to: Position) -> usize {
    encode_action(Move::new(from, to))
}

// =============================================================================
// Observation Contract
// =============================================================================

#[test]
fn test_reset_observation() {
    let mut env = CheckersEnv::new(7);
    let obs = env.reset();

    let occupied = obs.iter().flatten().filter(|&&v| v != 0).count();
    assert_eq!(occupied, 24);
    assert!(obs.iter().flatten().all(|&v| v <= 2), "no kings at start");
    // Light on its home ranks, Dark on its own.
    assert_eq!(obs[2][5], 1);
    assert_eq!(obs[1][2], 2);
}

#[test]
fn test_observation_tracks_the_board() {
    let mut env = CheckersEnv::new(7);
    env.reset();
    env.step(action(pos(2, 5), pos(3, 4)));

    let obs = env.observation();
    assert_eq!(obs[2][5], 0);
    assert_eq!(obs[3][4], 1);
}

// =============================================================================
// Step Semantics
// =============================================================================

#[test]
fn test_step_simple_move() {
    let mut env = CheckersEnv::new(7);
    let report = env.step(action(pos(2, 5), pos(3, 4)));

    assert_eq!(report.report, MoveReport::AppliedSimple { promoted: false });
    assert_eq!(report.reward, 0.0);
    assert!(!report.done);
    assert_eq!(report.winner, None);
    assert_eq!(env.game().current_turn(), PlayerColor::Dark);
}

#[test]
fn test_step_rejects_illegal_action() {
    let mut env = CheckersEnv::new(7);
    let before = env.observation();

    // A vertical move has no legal shape.
    let report = env.step(action(pos(2, 5), pos(2, 4)));
    assert_eq!(report.report, MoveReport::RejectedIllegal);
    assert_eq!(report.reward, ILLEGAL_MOVE_PENALTY);
    assert!(!report.done);
    assert_eq!(report.observation, before);
    assert_eq!(env.game().current_turn(), PlayerColor::Light);
}

#[test]
fn test_step_rejects_malformed_action_id() {
    let mut env = CheckersEnv::new(7);
    let report = env.step(ACTION_SPACE + 123);
    assert_eq!(report.report, MoveReport::RejectedIllegal);
    assert_eq!(report.reward, ILLEGAL_MOVE_PENALTY);
}

#[test]
fn test_step_reports_mandatory_capture() {
    let mut board = Board::empty();
    board.place(pos(2, 5), Piece::man(PlayerColor::Light)).unwrap();
    board.place(pos(6, 5), Piece::man(PlayerColor::Light)).unwrap();
    board.place(pos(3, 4), Piece::man(PlayerColor::Dark)).unwrap();
    board.place(pos(1, 0), Piece::man(PlayerColor::Dark)).unwrap();
    let mut env = CheckersEnv::with_game(Game::with_board(board, PlayerColor::Light), 7);

    let report = env.step(action(pos(6, 5), pos(5, 4)));
    assert_eq!(report.report, MoveReport::RejectedMandatoryCapture);
    assert_eq!(report.reward, ILLEGAL_MOVE_PENALTY);
}

#[test]
fn test_step_capture_shaping_reward() {
    let mut board = Board::empty();
    board.place(pos(2, 5), Piece::man(PlayerColor::Light)).unwrap();
    board.place(pos(3, 4), Piece::man(PlayerColor::Dark)).unwrap();
    board.place(pos(1, 0), Piece::man(PlayerColor::Dark)).unwrap();
    let mut env = CheckersEnv::with_game(Game::with_board(board, PlayerColor::Light), 7);

    let report = env.step(action(pos(2, 5), pos(4, 3)));
    assert_eq!(
        report.report,
        MoveReport::AppliedCapture {
            chained: false,
            promoted: false,
        }
    );
    assert_eq!(report.reward, CAPTURE_REWARD);
    assert!(!report.done);
}

#[test]
fn test_step_terminal_capture_wins() {
    // Capturing the opponent's last piece ends the game and the
    // terminal reward overrides the capture shaping.
    let mut board = Board::empty();
    board.place(pos(2, 5), Piece::man(PlayerColor::Light)).unwrap();
    board.place(pos(3, 4), Piece::man(PlayerColor::Dark)).unwrap();
    let mut env = CheckersEnv::with_game(Game::with_board(board, PlayerColor::Light), 7);

    let report = env.step(action(pos(2, 5), pos(4, 3)));
    assert!(report.done);
    assert_eq!(report.winner, Some(PlayerColor::Light));
    assert_eq!(report.reward, WIN_REWARD);
}

#[test]
fn test_step_mid_chain_holds_turn() {
    let mut board = Board::empty();
    board.place(pos(2, 5), Piece::man(PlayerColor::Light)).unwrap();
    board.place(pos(3, 4), Piece::man(PlayerColor::Dark)).unwrap();
    board.place(pos(5, 2), Piece::man(PlayerColor::Dark)).unwrap();
    board.place(pos(1, 0), Piece::man(PlayerColor::Dark)).unwrap();
    let mut env = CheckersEnv::with_game(Game::with_board(board, PlayerColor::Light), 7);

    let report = env.step(action(pos(2, 5), pos(4, 3)));
    assert_eq!(
        report.report,
        MoveReport::AppliedCapture {
            chained: true,
            promoted: false,
        }
    );
    assert_eq!(env.game().current_turn(), PlayerColor::Light);
    assert_eq!(env.game().phase(), Phase::Chaining(pos(4, 3)));
    assert_eq!(env.legal_action_ids(), vec![action(pos(4, 3), pos(6, 1))]);
}

// =============================================================================
// Sampling and Forking
// =============================================================================

#[test]
fn test_sample_action_range_and_determinism() {
    let mut a = CheckersEnv::new(42);
    let mut b = CheckersEnv::new(42);

    for _ in 0..100 {
        let id = a.sample_action();
        assert!(id < ACTION_SPACE);
        assert_eq!(id, b.sample_action());
    }
}

#[test]
fn test_sample_legal_action_is_legal() {
    let mut env = CheckersEnv::new(3);
    for _ in 0..20 {
        let id = env.sample_legal_action().unwrap();
        assert!(env.legal_action_ids().contains(&id));
    }
}

#[test]
fn test_fork_diverges_rng_but_copies_game() {
    let mut env = CheckersEnv::new(9);
    env.step(action(pos(2, 5), pos(3, 4)));
    let mut forked = env.fork();

    assert_eq!(forked.observation(), env.observation());
    assert_eq!(forked.game().current_turn(), env.game().current_turn());

    let parent: Vec<usize> = (0..20).map(|_| env.sample_action()).collect();
    let child: Vec<usize> = (0..20).map(|_| forked.sample_action()).collect();
    assert_ne!(parent, child);
}

// =============================================================================
// Random Playout
// =============================================================================

#[test]
fn test_random_legal_playout_terminates_cleanly() {
    let mut env = CheckersEnv::new(1234);
    env.reset();

    for _ in 0..600 {
        let Some(id) = env.sample_legal_action() else {
            break;
        };
        let report = env.step(id);
        assert!(report.report.applied(), "sampled actions must be legal");
        if report.done {
            assert!(report.winner.is_some());
            assert_eq!(env.game().winner(), report.winner);
            // A finished game rejects further actions.
            let after = env.step(id);
            assert_eq!(after.report, MoveReport::RejectedIllegal);
            assert!(after.done);
            break;
        }
    }
}
