//! Monte Carlo Tree Search engine
//!
//! Each decision first runs the one-ply win/block check. Only when that
//! finds nothing is a fresh tree grown from the current position, iterating
//! selection, expansion, simulation and backpropagation until the time
//! budget (or the optional iteration cap) runs out. The tree is dropped once
//! the move is chosen.

use std::time::Instant;

use log::{debug, warn};

use crate::{
    board::{Board, Mark, Move},
    config::MctsConfig,
    heuristic,
    policy::{
        selection::{SelectionPolicy, WinRatePolicy},
        simulation::{RandomRollout, SimulationPolicy},
    },
    stats::SearchStatistics,
    tree::{NodePath, SearchNode},
    Result,
};

/// The MCTS engine
///
/// Holds the configuration and policies; trees only live for the duration
/// of a single [`Mcts::best_move`] call.
pub struct Mcts {
    /// Configuration for the search
    config: MctsConfig,

    /// Statistics gathered during the last decision
    statistics: SearchStatistics,

    /// Policy for choosing children, during selection and for the final move
    selection_policy: Box<dyn SelectionPolicy>,

    /// Policy for playing out positions
    simulation_policy: Box<dyn SimulationPolicy>,
}

impl Mcts {
    /// Creates an engine with a [`WinRatePolicy`] using the configured
    /// exploration weight and [`RandomRollout`] simulations
    ///
    /// `config` is not checked; [`Mcts::try_new`] validates it first.
    pub fn new(config: MctsConfig) -> Self {
        let selection_policy: Box<dyn SelectionPolicy> =
            Box::new(WinRatePolicy::new(config.exploration_weight));
        let simulation_policy: Box<dyn SimulationPolicy> = Box::new(RandomRollout::new());

        Mcts {
            config,
            statistics: SearchStatistics::new(),
            selection_policy,
            simulation_policy,
        }
    }

    /// Creates an engine after validating `config`
    pub fn try_new(config: MctsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Sets the selection policy to use
    pub fn with_selection_policy<P: SelectionPolicy + 'static>(mut self, policy: P) -> Self {
        self.selection_policy = Box::new(policy);
        self
    }

    /// Sets the simulation policy to use
    pub fn with_simulation_policy<P: SimulationPolicy + 'static>(mut self, policy: P) -> Self {
        self.simulation_policy = Box::new(policy);
        self
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Chooses a move for `player`
    ///
    /// `last_move` is the most recent move actually played in the game; when
    /// given, the final choice among the root's children favours moves close
    /// to it. Returns `None` when the board has no empty cell.
    pub fn best_move(
        &mut self,
        board: &Board,
        player: Mark,
        last_move: Option<Move>,
    ) -> Option<Move> {
        self.statistics = SearchStatistics::new();
        let start = Instant::now();

        if board.is_full() {
            warn!("MCTS asked to move on a full board");
            return None;
        }

        let mut scratch = board.clone();
        if let Some(mv) = heuristic::smart_move(&mut scratch, player) {
            self.statistics.short_circuited = true;
            self.statistics.total_time = start.elapsed();
            debug!(
                "short-circuit chose ({}, {}) in {:.3}s",
                mv.row,
                mv.col,
                self.statistics.total_time.as_secs_f64()
            );
            return Some(mv);
        }

        let root = self.build_tree(board, player);
        let chosen = self.final_move(&root, last_move);

        self.statistics.total_time = start.elapsed();
        if let Some(mv) = chosen {
            debug!(
                "MCTS chose ({}, {}) after {} iterations, {} nodes, {:.3}s",
                mv.row,
                mv.col,
                self.statistics.iterations,
                self.statistics.tree_size,
                self.statistics.total_time.as_secs_f64()
            );
        }
        chosen
    }

    /// Grows a fresh tree rooted at `board` until the budget is exhausted
    ///
    /// No short-circuit check is made here. The root's visit count equals
    /// the number of completed iterations.
    pub fn build_tree(&mut self, board: &Board, player: Mark) -> SearchNode {
        self.statistics = SearchStatistics::new();
        let start = Instant::now();
        let mut root = SearchNode::new(board.clone(), player, None, 0);
        let mut iterations = 0;

        loop {
            if start.elapsed() >= self.config.max_time {
                break;
            }
            if let Some(cap) = self.config.max_iterations {
                if iterations >= cap {
                    break;
                }
            }

            self.execute_iteration(&mut root);
            iterations += 1;
        }

        self.statistics.iterations = iterations;
        self.statistics.tree_size = root.subtree_size();
        self.statistics.total_time = start.elapsed();
        root
    }

    /// Picks the move of the root's best child under the selection policy,
    /// anchored to `last_move`
    ///
    /// Falls back to the next untried move when nothing was expanded.
    pub fn final_move(&self, root: &SearchNode, last_move: Option<Move>) -> Option<Move> {
        match self.selection_policy.select_child(root, last_move) {
            Some(index) => root.children[index].mv,
            None => root.untried_moves.last().copied(),
        }
    }

    /// Execute a single iteration of the MCTS algorithm
    fn execute_iteration(&mut self, root: &mut SearchNode) {
        // 1. Selection phase
        let selected = self.selection(root);

        // 2. Expansion phase
        let expanded = self.expansion(root, selected);

        // 3. Simulation phase
        let node = root.descendant(&expanded);
        let result = self.simulation_policy.simulate(&node.board, node.owner);

        // 4. Backpropagation phase
        Self::backpropagation(root, &expanded, result);
    }

    /// Selection phase: descend to a terminal node or one with untried moves
    fn selection(&mut self, root: &SearchNode) -> NodePath {
        let mut path = NodePath::new();
        let mut current = root;

        while !current.is_terminal() && current.is_fully_expanded() {
            let Some(index) = self.selection_policy.select_child(current, None) else {
                break;
            };
            path.push(index);
            current = &current.children[index];
            self.statistics.max_depth = self.statistics.max_depth.max(current.depth);
        }

        path
    }

    /// Expansion phase: attach one new child below the selected node
    ///
    /// Terminal nodes are returned unchanged.
    fn expansion(&mut self, root: &mut SearchNode, mut path: NodePath) -> NodePath {
        let mut node = root;
        for &index in &path.indices {
            node = &mut node.children[index];
        }

        if let Some(child_index) = node.expand() {
            path.push(child_index);
            self.statistics.max_depth = self.statistics.max_depth.max(path.len());
        }
        path
    }

    /// Backpropagation phase: record the result on every node along the path
    fn backpropagation(root: &mut SearchNode, path: &NodePath, result: f64) {
        root.record(result);

        let mut node = root;
        for &index in &path.indices {
            node = &mut node.children[index];
            node.record(result);
        }
    }

    /// Returns the statistics of the last decision
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

impl Default for Mcts {
    fn default() -> Self {
        Self::new(MctsConfig::default())
    }
}
