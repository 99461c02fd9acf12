//! # kinrow-agent
//!
//! An autonomous agent for generalized k-in-a-row: tic-tac-toe played on an
//! `n`×`n` board where `k` consecutive marks in a row, column or diagonal win.
//!
//! The crate provides two independent decision engines that pick a legal move
//! from any board position:
//!
//! - [`AlphaBeta`]: depth-limited minimax with alpha-beta pruning
//! - [`Mcts`]: Monte Carlo Tree Search under a wall-clock budget, preceded by
//!   a one-ply win/block check ([`heuristic::smart_move`])
//!
//! Moves are exchanged with an opponent process through a [`TurnChannel`];
//! [`FileChannel`] implements the append-only log protocol and [`Agent`]
//! drives a full game.
//!
//! ## Basic Usage
//!
//! ```
//! use kinrow_agent::{AlphaBeta, AlphaBetaConfig, Board, Mark, Mcts, MctsConfig};
//! use std::time::Duration;
//!
//! fn main() -> Result<(), kinrow_agent::AgentError> {
//!     let mut board = Board::new(3, 3)?;
//!     board.make_move(0, 0, Mark::X);
//!     board.make_move(0, 1, Mark::X);
//!
//!     // Alpha-beta takes the immediate win
//!     let mut searcher = AlphaBeta::new(AlphaBetaConfig::default().with_depth_limit(2));
//!     let result = searcher.best_move(&mut board, Mark::X).expect("board has empty cells");
//!     assert_eq!((result.mv.row, result.mv.col), (0, 2));
//!
//!     // MCTS short-circuits on the same position
//!     let config = MctsConfig::default().with_max_time(Duration::from_millis(50));
//!     let mut mcts = Mcts::new(config);
//!     let mv = mcts.best_move(&board, Mark::X, None).expect("board has empty cells");
//!     assert_eq!((mv.row, mv.col), (0, 2));
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod alphabeta;
pub mod board;
pub mod config;
pub mod exchange;
pub mod heuristic;
pub mod mcts;
pub mod ordering;
pub mod policy;
pub mod stats;
pub mod tree;

pub use agent::{Agent, Engine, GameResult};
pub use alphabeta::{AlphaBeta, Evaluated};
pub use board::{Board, EndState, Mark, Move, Outcome};
pub use config::{AlphaBetaConfig, ExchangeConfig, MctsConfig};
pub use exchange::{FileChannel, PlayedMove, TurnChannel};
pub use mcts::Mcts;
pub use policy::{SelectionPolicy, SimulationPolicy};
pub use stats::SearchStatistics;
pub use tree::{NodePath, SearchNode};

/// Error types for the agent
#[derive(thiserror::Error, Debug)]
pub enum AgentError {
    /// Board dimensions violate `n >= k >= 1`
    #[error("Invalid board: n={n}, k={k} (need n >= k >= 1)")]
    InvalidBoard { n: usize, k: usize },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A move line did not match the `{player}{row}{col}` notation
    #[error("Malformed move line: {0:?}")]
    MalformedMove(String),

    /// An opponent move line carried the wrong player tag
    #[error("Expected a move by {expected}, got one by {found}")]
    WrongPlayer { expected: Mark, found: Mark },

    /// A move targeted a cell that already holds a mark
    #[error("Cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    /// A move targeted a cell outside the board
    #[error("Cell ({row}, {col}) is outside a {n}x{n} board")]
    OutOfBounds { row: usize, col: usize, n: usize },

    /// A move cannot be written in the exchange notation
    #[error("Move ({row}, {col}) cannot be encoded: column letters stop at 'z'")]
    UnencodableMove { row: usize, col: usize },

    /// The opponent did not write the expected move in time
    #[error("Timed out waiting for opponent move in round {0}")]
    OpponentTimeout(usize),

    /// Reading or writing a move log failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;
