//! Depth-limited minimax with alpha-beta pruning
//!
//! The search mutates a single board in place, placing and removing marks
//! as it recurses, so no position is ever cloned.
//!
//! Scores are restricted to `{-1, 0, +1}`. Only wins for the searching side
//! are detected, and the sign of a detected win depends on the ply that
//! detects it: `+1` on a maximizing ply, `-1` on a minimizing ply. Positions
//! cut off by the depth limit score `0`.
//!
//! # Example
//!
//! ```
//! use kinrow_agent::{AlphaBeta, AlphaBetaConfig, Board, Mark};
//!
//! let mut board = Board::new(3, 3).unwrap();
//! let mut searcher = AlphaBeta::new(AlphaBetaConfig::default());
//! let result = searcher.best_move(&mut board, Mark::X).unwrap();
//! assert!((-1..=1).contains(&result.score));
//! ```

use std::time::Instant;

use log::{debug, trace, warn};

use crate::{
    board::{Board, EndState, Mark, Move},
    config::AlphaBetaConfig,
    stats::SearchStatistics,
    Result,
};

/// Bound outside every reachable score
const INF: i32 = 2;

/// The side whose wins are scored positive at the root
pub const MAXIMIZING_SIDE: Mark = Mark::X;

/// A chosen move together with its evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluated {
    pub mv: Move,
    /// Always one of `-1`, `0`, `+1`
    pub score: i32,
}

/// Alpha-beta searcher
pub struct AlphaBeta {
    config: AlphaBetaConfig,
    statistics: SearchStatistics,
}

impl AlphaBeta {
    /// Creates a searcher without checking `config`; see [`AlphaBeta::try_new`]
    pub fn new(config: AlphaBetaConfig) -> Self {
        AlphaBeta {
            config,
            statistics: SearchStatistics::new(),
        }
    }

    /// Creates a searcher after validating `config`
    pub fn try_new(config: AlphaBetaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &AlphaBetaConfig {
        &self.config
    }

    /// Chooses a move for `player`
    ///
    /// Candidates are tried in center-proximity order. X keeps the highest
    /// score and O the lowest; the first candidate reaching the extreme wins
    /// ties. Returns `None` when the board has no empty cell. The board is
    /// restored before returning.
    pub fn best_move(&mut self, board: &mut Board, player: Mark) -> Option<Evaluated> {
        self.statistics = SearchStatistics::new();
        let start = Instant::now();

        let maximizing = player == MAXIMIZING_SIDE;
        let child_depth = self.config.depth_limit.saturating_sub(1);
        let mut best: Option<Evaluated> = None;

        for mv in board.legal_moves() {
            let placed = board.make_move(mv.row, mv.col, player);
            debug_assert!(placed, "legal move must target an empty cell");

            let score = self.alpha_beta(board, child_depth, -INF, INF, player, maximizing);
            board.undo_move(mv.row, mv.col);
            trace!("candidate ({}, {}) scored {}", mv.row, mv.col, score);

            let improves = match best {
                None => true,
                Some(current) if maximizing => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(Evaluated { mv, score });
            }
        }

        self.statistics.total_time = start.elapsed();
        match best {
            Some(result) => debug!(
                "alpha-beta chose ({}, {}) score {} after {} nodes in {:.3}s",
                result.mv.row,
                result.mv.col,
                result.score,
                self.statistics.nodes_visited,
                self.statistics.total_time.as_secs_f64()
            ),
            None => warn!("alpha-beta found no legal move"),
        }
        best
    }

    /// Recursive minimax evaluation
    ///
    /// `root_player` moves on maximizing plies and its opponent on
    /// minimizing plies. A win for `root_player` already on the board scores
    /// `+1` if this is a maximizing ply and `-1` otherwise.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        root_player: Mark,
        maximizing: bool,
    ) -> i32 {
        self.statistics.nodes_visited += 1;

        match board.check_end(root_player) {
            EndState::Win => return if maximizing { 1 } else { -1 },
            EndState::Draw => return 0,
            EndState::Continue => {}
        }
        if depth == 0 {
            return 0;
        }

        let mover = if maximizing {
            root_player
        } else {
            root_player.opponent()
        };
        let mut best = if maximizing { -INF } else { INF };

        for mv in board.legal_moves() {
            board.make_move(mv.row, mv.col, mover);
            let eval = self.alpha_beta(board, depth - 1, alpha, beta, root_player, !maximizing);
            board.undo_move(mv.row, mv.col);

            if maximizing {
                best = best.max(eval);
                alpha = alpha.max(eval);
            } else {
                best = best.min(eval);
                beta = beta.min(eval);
            }
            if beta <= alpha {
                self.statistics.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Returns the statistics of the last `best_move` call
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new(AlphaBetaConfig::default())
    }
}
