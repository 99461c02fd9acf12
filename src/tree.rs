//! Tree data structures for Monte Carlo Tree Search
//!
//! Every node owns its children outright. A node never points back at its
//! parent; the ancestors of a node are recovered from the [`NodePath`] that
//! leads to it from the root, which is all backpropagation needs. Dropping
//! the root drops the whole tree.

use crate::board::{Board, Mark, Move, Outcome};

/// Represents a node in the MCTS tree
pub struct SearchNode {
    /// Snapshot of the position at this node, owned exclusively
    pub board: Board,

    /// The move that led here from the parent (None for root)
    pub mv: Option<Move>,

    /// The side the tree searches for. Expansion places this side's mark
    /// and rollouts are scored from its point of view.
    pub owner: Mark,

    /// Number of rollouts backpropagated through this node
    pub visits: u64,

    /// Sum of rollout results backpropagated through this node
    pub wins: f64,

    /// Children nodes, in creation order
    pub children: Vec<SearchNode>,

    /// Legal moves not yet expanded, consumed from the back
    pub untried_moves: Vec<Move>,

    /// Depth of this node in the tree (root = 0)
    pub depth: usize,

    terminal: bool,
}

impl SearchNode {
    /// Creates a node that takes ownership of `board`
    pub fn new(board: Board, owner: Mark, mv: Option<Move>, depth: usize) -> Self {
        let terminal = board.outcome(owner) != Outcome::InProgress;
        let untried_moves = board.legal_moves();

        SearchNode {
            board,
            mv,
            owner,
            visits: 0,
            wins: 0.0,
            children: Vec::new(),
            untried_moves,
            depth,
            terminal,
        }
    }

    /// Whether the game is over at this node (a win for either side or a
    /// full board)
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns true if every legal move has a child
    pub fn is_fully_expanded(&self) -> bool {
        self.untried_moves.is_empty()
    }

    /// Average rollout result, 0 for an unvisited node
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            return 0.0;
        }
        self.wins / self.visits as f64
    }

    /// Records one rollout result
    pub fn record(&mut self, result: f64) {
        self.visits += 1;
        self.wins += result;
    }

    /// Expands the most recently listed untried move
    ///
    /// The child gets its own board copy with the owner's mark applied.
    /// Returns the index of the new child, or `None` for terminal or fully
    /// expanded nodes.
    pub fn expand(&mut self) -> Option<usize> {
        if self.terminal {
            return None;
        }
        let mv = self.untried_moves.pop()?;

        let mut next = self.board.clone();
        next.make_move(mv.row, mv.col, self.owner);

        let child = SearchNode::new(next, self.owner, Some(mv), self.depth + 1);
        self.children.push(child);
        Some(self.children.len() - 1)
    }

    /// Follows `path` from this node
    pub fn descendant(&self, path: &NodePath) -> &SearchNode {
        path.indices
            .iter()
            .fold(self, |node, &index| &node.children[index])
    }

    /// Number of nodes in the subtree rooted here
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(SearchNode::subtree_size).sum::<usize>()
    }
}

/// Represents a path through the MCTS tree
///
/// A path is a sequence of child indices leading from the root to a node.
#[derive(Debug, Clone)]
pub struct NodePath {
    /// Indices of children to follow from the root
    pub indices: Vec<usize>,
}

impl NodePath {
    /// Creates a new empty path (pointing to the root)
    pub fn new() -> Self {
        NodePath {
            indices: Vec::new(),
        }
    }

    /// Extends the path with a new index
    pub fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    /// Returns the length of the path
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the path is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Default for NodePath {
    fn default() -> Self {
        Self::new()
    }
}
