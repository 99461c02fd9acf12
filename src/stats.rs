//! Statistics collection for move decisions
//!
//! Both engines fill in the fields that apply to them; the rest stay at
//! their defaults.

use std::time::Duration;

/// Statistics collected during one move decision
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of MCTS iterations performed
    pub iterations: usize,

    /// Total time spent deciding
    pub total_time: Duration,

    /// Total number of nodes in the MCTS tree
    pub tree_size: usize,

    /// Maximum depth reached in the MCTS tree
    pub max_depth: usize,

    /// Positions evaluated by alpha-beta
    pub nodes_visited: u64,

    /// Alpha-beta move loops cut short by pruning
    pub cutoffs: u64,

    /// Whether the one-ply win/block check decided the move
    pub short_circuited: bool,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            iterations: 0,
            total_time: Duration::from_secs(0),
            tree_size: 1, // Start with root node
            max_depth: 0,
            nodes_visited: 0,
            cutoffs: 0,
            short_circuited: false,
        }
    }

    /// Returns the number of iterations per second
    pub fn iterations_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.iterations as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Search Statistics:\n\
             - Iterations: {}\n\
             - Total time: {:.3} seconds\n\
             - Tree size: {} nodes\n\
             - Max depth: {}\n\
             - Alpha-beta nodes: {}\n\
             - Alpha-beta cutoffs: {}\n\
             - Iterations per second: {:.1}\n\
             - Short-circuited: {}",
            self.iterations,
            self.total_time.as_secs_f64(),
            self.tree_size,
            self.max_depth,
            self.nodes_visited,
            self.cutoffs,
            self.iterations_per_second(),
            self.short_circuited
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
