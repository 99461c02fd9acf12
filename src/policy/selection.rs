//! Selection policies for the MCTS algorithm
//!
//! A selection policy picks which child of a node to descend into, and the
//! same rule picks the final move among the root's children.

use crate::{board::Move, ordering, tree::SearchNode};

/// Trait for policies that select children
pub trait SelectionPolicy {
    /// Scores one child of `parent`; higher is better
    fn score(&self, parent: &SearchNode, child: &SearchNode, anchor: Option<Move>) -> f64;

    /// Index of the first child with the highest score, `None` if there are
    /// no children
    fn select_child(&self, node: &SearchNode, anchor: Option<Move>) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, child) in node.children.iter().enumerate() {
            let value = self.score(node, child, anchor);
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((i, value)),
            }
        }
        best.map(|(i, _)| i)
    }
}

/// Win-rate selection with an optional UCB1 exploration term
///
/// ```text
/// score = wins / visits
///       + weight * sqrt(2 * ln(parent_visits) / child_visits)   (weight != 0)
///       - manhattan(child_move, anchor)                          (anchor given)
/// ```
///
/// The default weight of zero selects on win rate alone. The anchor is the
/// last move actually played in the game; it is only supplied when choosing
/// the final move, so that among similar win rates the reply lands near the
/// opponent's last move.
#[derive(Debug, Clone)]
pub struct WinRatePolicy {
    pub exploration_weight: f64,
}

impl WinRatePolicy {
    pub fn new(exploration_weight: f64) -> Self {
        WinRatePolicy { exploration_weight }
    }

    /// The UCB1 exploration bonus
    pub fn exploration_term(&self, parent_visits: u64, child_visits: u64) -> f64 {
        if self.exploration_weight == 0.0 {
            return 0.0;
        }
        if child_visits == 0 {
            return f64::INFINITY; // Always explore nodes that have never been visited
        }
        self.exploration_weight
            * (2.0 * (parent_visits as f64).ln() / child_visits as f64).sqrt()
    }
}

impl Default for WinRatePolicy {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl SelectionPolicy for WinRatePolicy {
    fn score(&self, parent: &SearchNode, child: &SearchNode, anchor: Option<Move>) -> f64 {
        let mut value = child.win_rate() + self.exploration_term(parent.visits, child.visits);

        if let (Some(anchor), Some(mv)) = (anchor, child.mv) {
            value += ordering::proximity_bias(mv, anchor);
        }
        value
    }
}
