//! Simulation policies for the MCTS algorithm
//!
//! Simulation policies play a position out to the end of the game to
//! estimate its value for the searching side.

use rand::seq::SliceRandom;

use crate::board::{Board, Mark, Outcome};

/// Rollout result when the searching side wins
pub const WIN_REWARD: f64 = 1.0;
/// Rollout result for a full board
pub const DRAW_REWARD: f64 = 0.0;
/// Rollout result when the opponent wins. Twice the win reward, so the tree
/// steers away from lines that let the opponent win.
pub const LOSS_PENALTY: f64 = -2.0;

/// Trait for policies that simulate games
pub trait SimulationPolicy {
    /// Plays `board` out and scores the result for `owner`
    fn simulate(&self, board: &Board, owner: Mark) -> f64;
}

/// Maps a finished game to a rollout result for `owner`
pub fn score_outcome(outcome: Outcome, owner: Mark) -> f64 {
    match outcome {
        Outcome::Won(winner) if winner == owner => WIN_REWARD,
        Outcome::Won(_) => LOSS_PENALTY,
        Outcome::Draw | Outcome::InProgress => DRAW_REWARD,
    }
}

/// Random simulation policy
///
/// Plays uniformly random empty cells, alternating strictly between the
/// owner and the opponent with the owner first, until someone wins or the
/// board fills up.
#[derive(Debug, Clone)]
pub struct RandomRollout;

impl RandomRollout {
    pub fn new() -> Self {
        RandomRollout
    }
}

impl Default for RandomRollout {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationPolicy for RandomRollout {
    fn simulate(&self, board: &Board, owner: Mark) -> f64 {
        let mut rng = rand::thread_rng();
        let mut rollout = board.clone();
        let mut mover = owner;

        let mut outcome = rollout.outcome(owner);
        while outcome == Outcome::InProgress {
            let moves = rollout.empty_cells();
            let Some(mv) = moves.choose(&mut rng) else {
                break;
            };
            rollout.make_move(mv.row, mv.col, mover);
            mover = mover.opponent();
            outcome = rollout.outcome(owner);
        }

        score_outcome(outcome, owner)
    }
}
