//! One-ply win/block check run before any tree search

use log::trace;

use crate::board::{Board, EndState, Mark, Move};

/// First legal move (center order) that completes a line for `mark`
fn completing_move(board: &mut Board, candidates: &[Move], mark: Mark) -> Option<Move> {
    candidates.iter().copied().find(|mv| {
        board.make_move(mv.row, mv.col, mark);
        let wins = board.check_end(mark) == EndState::Win;
        board.undo_move(mv.row, mv.col);
        wins
    })
}

/// Immediate win for `player`, else a forced block of the opponent's
/// immediate win, else `None`
///
/// Every hypothetical mark is removed again, so the board is unchanged on
/// return.
pub fn smart_move(board: &mut Board, player: Mark) -> Option<Move> {
    let candidates = board.legal_moves();

    if let Some(mv) = completing_move(board, &candidates, player) {
        trace!("winning move at ({}, {})", mv.row, mv.col);
        return Some(mv);
    }

    let blocking = completing_move(board, &candidates, player.opponent());
    if let Some(mv) = blocking {
        trace!("blocking move at ({}, {})", mv.row, mv.col);
    }
    blocking
}
