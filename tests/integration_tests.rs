use kinrow_agent::{Board, Mark, Mcts, MctsConfig, Move, SearchNode};
use std::time::Duration;

fn board_from(rows: &[&str], k: usize) -> Board {
    let mut board = Board::new(rows.len(), k).unwrap();
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            if let Some(mark) = Mark::from_char(ch) {
                assert!(board.make_move(r, c, mark));
            }
        }
    }
    board
}

fn iteration_config(iterations: usize) -> MctsConfig {
    MctsConfig::default()
        .with_max_time(Duration::from_secs(60))
        .with_max_iterations(iterations)
}

fn assert_visits_consistent(node: &SearchNode) {
    if node.visits == 0 {
        assert_eq!(node.wins, 0.0, "unvisited node carries a score");
    }
    if !node.children.is_empty() {
        let child_visits: u64 = node.children.iter().map(|c| c.visits).sum();
        assert!(child_visits <= node.visits);
    }
    for child in &node.children {
        assert_visits_consistent(child);
    }
}

#[test]
fn test_root_visits_match_iterations() {
    let board = Board::new(4, 3).unwrap();
    let mut mcts = Mcts::new(iteration_config(500));

    let root = mcts.build_tree(&board, Mark::X);

    assert_eq!(root.visits, 500);
    assert_eq!(mcts.get_statistics().iterations, 500);

    // Every iteration passes through exactly one root child
    let child_visits: u64 = root.children.iter().map(|c| c.visits).sum();
    assert_eq!(child_visits, 500);
    assert_visits_consistent(&root);
    assert_eq!(mcts.get_statistics().tree_size, root.subtree_size());
}

#[test]
fn test_expansion_pops_from_the_back() {
    let board = Board::new(3, 3).unwrap();
    let mut mcts = Mcts::new(iteration_config(1));

    let root = mcts.build_tree(&board, Mark::O);

    assert_eq!(root.children.len(), 1);
    assert_eq!(root.untried_moves.len(), 8);

    let child = &root.children[0];
    assert_eq!(child.mv, Some(Move::new(2, 2)));
    assert_eq!(child.board.get(2, 2), Some(Mark::O));
    assert_eq!(child.depth, 1);
    assert_eq!(child.visits, 1);
    // The root's own board is untouched
    assert_eq!(root.board.get(2, 2), None);
}

#[test]
fn test_node_keeps_the_board_it_is_given() {
    let board = board_from(&["x..", ".o.", "..."], 3);
    let mut node = SearchNode::new(board.clone(), Mark::X, None, 0);
    assert_eq!(node.board, board);
    assert_eq!(node.untried_moves.len(), 7);

    let index = node.expand().unwrap();
    let child = &node.children[index];
    assert_eq!(child.mv, Some(Move::new(2, 2)));
    assert_eq!(child.board.get(2, 2), Some(Mark::X));
    assert_eq!(child.board.empty_cells().len(), 6);
    assert_eq!(child.untried_moves.len(), 6);
    assert_eq!(node.board, board);
}

#[test]
fn test_untried_moves_shrink_then_selection_descends() {
    let board = Board::new(3, 3).unwrap();
    let mut mcts = Mcts::new(iteration_config(20));

    let root = mcts.build_tree(&board, Mark::X);

    assert!(root.is_fully_expanded());
    assert_eq!(root.children.len(), 9);
    assert!(mcts.get_statistics().max_depth >= 2);
    assert_visits_consistent(&root);
}

#[test]
fn test_terminal_root_is_never_expanded() {
    let board = board_from(&["xxx", "oo.", "..."], 3);
    let mut mcts = Mcts::new(iteration_config(10));

    let root = mcts.build_tree(&board, Mark::O);

    assert!(root.is_terminal());
    assert!(root.children.is_empty());
    assert_eq!(root.visits, 10);
    // Every rollout from a position X already won is a loss for O
    assert_eq!(root.wins, -20.0);
}

#[test]
fn test_short_circuit_takes_win() {
    let board = board_from(&["xx.", "...", "..."], 3);
    let mut mcts = Mcts::new(iteration_config(100));

    assert_eq!(mcts.best_move(&board, Mark::X, None), Some(Move::new(0, 2)));
    assert!(mcts.get_statistics().short_circuited);
    assert_eq!(mcts.get_statistics().iterations, 0);
}

#[test]
fn test_short_circuit_blocks() {
    let board = board_from(&["...", "oo.", "..."], 3);
    let mut mcts = Mcts::new(iteration_config(100));

    assert_eq!(mcts.best_move(&board, Mark::X, None), Some(Move::new(1, 2)));
    assert!(mcts.get_statistics().short_circuited);
}

#[test]
fn test_full_board_has_no_move() {
    let board = board_from(&["xox", "xoo", "oxx"], 3);
    let mut mcts = Mcts::new(iteration_config(100));
    assert_eq!(mcts.best_move(&board, Mark::X, None), None);
}

#[test]
fn test_tree_search_returns_legal_move() {
    let board = board_from(&["x...", ".o..", "....", "...."], 4);
    let mut mcts = Mcts::new(iteration_config(300));

    let mv = mcts
        .best_move(&board, Mark::X, Some(Move::new(1, 1)))
        .expect("board has empty cells");

    assert!(board.is_empty(mv.row, mv.col));
    assert!(!mcts.get_statistics().short_circuited);
    assert_eq!(mcts.get_statistics().iterations, 300);
}

#[test]
fn test_zero_iterations_falls_back_to_untried_move() {
    let board = Board::new(3, 3).unwrap();
    let mut mcts = Mcts::new(iteration_config(0));

    let root = mcts.build_tree(&board, Mark::X);
    assert_eq!(root.visits, 0);
    assert_eq!(mcts.final_move(&root, None), Some(Move::new(2, 2)));
}
