//! Self-play demo
//!
//! Pits the alpha-beta engine (X) against MCTS (O) in a single process,
//! without the file exchange.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example self_play -- 4 3
//! ```

use std::env;
use std::time::Duration;

use kinrow_agent::{
    AlphaBeta, AlphaBetaConfig, Board, Engine, Mark, Mcts, MctsConfig, Move, Outcome,
};

fn main() -> Result<(), kinrow_agent::AgentError> {
    // Initialize logging
    env_logger::init();

    let mut args = env::args().skip(1).filter_map(|a| a.parse::<usize>().ok());
    let n = args.next().unwrap_or(3);
    let k = args.next().unwrap_or(n.min(3));

    println!("Self-play: {}x{} board, {} in a row", n, n, k);
    println!("X: alpha-beta, O: MCTS");
    println!();

    let mut board = Board::new(n, k)?;
    let mut x_engine = Engine::AlphaBeta(AlphaBeta::new(
        AlphaBetaConfig::default().with_depth_limit(4),
    ));
    let mut o_engine = Engine::Mcts(Mcts::new(
        MctsConfig::default().with_max_time(Duration::from_millis(500)),
    ));

    let mut to_move = Mark::X;
    let mut last_move: Option<Move> = None;

    while board.outcome(to_move) == Outcome::InProgress {
        let engine = match to_move {
            Mark::X => &mut x_engine,
            Mark::O => &mut o_engine,
        };
        let Some(mv) = engine.choose(&mut board, to_move, last_move) else {
            break;
        };

        board.make_move(mv.row, mv.col, to_move);
        println!("{} plays ({}, {})", to_move, mv.row, mv.col);
        println!("{}", board);

        last_move = Some(mv);
        to_move = to_move.opponent();
    }

    match board.outcome(Mark::X) {
        Outcome::Won(mark) => println!("Player {} wins!", mark),
        _ => println!("The game is a draw!"),
    }
    Ok(())
}
