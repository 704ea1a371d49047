//! Gym-style environment wrapper around a game.
//!
//! `CheckersEnv` owns one [`Game`] and a deterministic RNG. `step`
//! accepts a raw action id, attempts the decoded move, and reports the
//! observation, a shaped reward, the terminal flag, and what the engine
//! did with the move. Reward shaping is a policy of this wrapper, not
//! of the rules core; the core only reports typed outcomes.
//!
//! Each concurrent game needs its own env. Cloning a `Game` is cheap
//! and the RNG forks, so batched rollouts fork one master env.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng, Move, MoveKind, PlayerColor};
use crate::nn::{decode_action, encode_action, Observation, ACTION_SPACE};
use crate::rules::Game;

/// Reward for winning, from the acting side's perspective.
pub const WIN_REWARD: f32 = 1.0;
/// Reward for losing, from the acting side's perspective.
pub const LOSS_REWARD: f32 = -1.0;
/// Shaping bonus for a completed capture step.
pub const CAPTURE_REWARD: f32 = 0.1;
/// Shaping penalty for a rejected action.
pub const ILLEGAL_MOVE_PENALTY: f32 = -0.1;

/// What the engine did with an attempted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveReport {
    /// A quiet move was applied.
    AppliedSimple { promoted: bool },
    /// A capture was applied.
    AppliedCapture { chained: bool, promoted: bool },
    /// The action was rejected; the state is unchanged.
    RejectedIllegal,
    /// The action was a quiet move while a capture was available.
    RejectedMandatoryCapture,
}

impl MoveReport {
    /// Whether the action mutated the game.
    #[must_use]
    pub fn applied(self) -> bool {
        matches!(
            self,
            MoveReport::AppliedSimple { .. } | MoveReport::AppliedCapture { .. }
        )
    }

    /// Snake_case tag for logs and foreign callers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MoveReport::AppliedSimple { .. } => "applied_simple",
            MoveReport::AppliedCapture { .. } => "applied_capture",
            MoveReport::RejectedIllegal => "rejected_illegal",
            MoveReport::RejectedMandatoryCapture => "rejected_mandatory_capture",
        }
    }
}

/// Result of one environment step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Post-step observation grid.
    pub observation: Observation,
    /// Shaped reward from the acting side's perspective.
    pub reward: f32,
    /// Whether the game has ended.
    pub done: bool,
    /// The winner when `done`.
    pub winner: Option<PlayerColor>,
    /// What the engine did with the action.
    pub report: MoveReport,
}

/// A self-contained training environment: one game plus its RNG.
#[derive(Clone, Debug)]
pub struct CheckersEnv {
    game: Game,
    rng: GameRng,
}

impl CheckersEnv {
    /// Create an environment with the given RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            game: Game::new(),
            rng: GameRng::new(seed),
        }
    }

    /// An environment resuming an existing game, for scripted
    /// positions in tests and curricula.
    #[must_use]
    pub fn with_game(game: Game, seed: u64) -> Self {
        Self {
            game,
            rng: GameRng::new(seed),
        }
    }

    /// Restart the game and return the initial observation. The RNG
    /// stream is not reset.
    pub fn reset(&mut self) -> Observation {
        self.game.reset();
        self.observation()
    }

    /// The current observation grid.
    #[must_use]
    pub fn observation(&self) -> Observation {
        self.game.board_snapshot()
    }

    /// Read-only view of the wrapped game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Fork this env: an identical game with an independent RNG stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            game: self.game.clone(),
            rng: self.rng.fork(),
        }
    }

    /// Attempt the move encoded by `action` for the side to move.
    ///
    /// Rejected actions (malformed ids included) leave the game
    /// unchanged and carry the shaping penalty; terminal steps override
    /// shaping with the win/loss reward.
    pub fn step(&mut self, action: usize) -> StepReport {
        let mover = self.game.current_turn();

        let attempt = decode_action(action)
            .and_then(|mv| self.game.commit(mv.from, mv.to));
        let (report, shaped) = match attempt {
            Ok(outcome) => match outcome.kind {
                MoveKind::Simple => (
                    MoveReport::AppliedSimple {
                        promoted: outcome.promoted,
                    },
                    0.0,
                ),
                MoveKind::Capture => (
                    MoveReport::AppliedCapture {
                        chained: outcome.chained,
                        promoted: outcome.promoted,
                    },
                    CAPTURE_REWARD,
                ),
            },
            Err(GameError::MandatoryCapture) => {
                (MoveReport::RejectedMandatoryCapture, ILLEGAL_MOVE_PENALTY)
            }
            Err(_) => (MoveReport::RejectedIllegal, ILLEGAL_MOVE_PENALTY),
        };

        let winner = self.game.winner();
        let reward = if report.applied() {
            match winner {
                Some(w) if w == mover => WIN_REWARD,
                Some(_) => LOSS_REWARD,
                None => shaped,
            }
        } else {
            shaped
        };

        StepReport {
            observation: self.observation(),
            reward,
            done: winner.is_some(),
            winner,
            report,
        }
    }

    /// A uniformly random action id from the whole action space. Most
    /// such ids are illegal; see [`CheckersEnv::sample_legal_action`].
    pub fn sample_action(&mut self) -> usize {
        self.rng.gen_below(ACTION_SPACE)
    }

    /// A uniformly random legal action id for the side to move, or
    /// `None` when the game is over.
    pub fn sample_legal_action(&mut self) -> Option<usize> {
        let moves = self.game.legal_actions();
        self.rng.choose(&moves).copied().map(encode_action)
    }

    /// Current legal moves as action ids.
    #[must_use]
    pub fn legal_action_ids(&self) -> Vec<usize> {
        self.game
            .legal_actions()
            .into_iter()
            .map(encode_action)
            .collect()
    }

    /// Decoded legal moves, for callers that want coordinates.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.game.legal_actions()
    }
}
