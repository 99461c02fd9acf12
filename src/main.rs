//! kinrow - plays one game of k-in-a-row against another process
//!
//! Both processes run in the same directory and exchange moves through
//! `xmoves.txt` and `omoves.txt`:
//!
//! ```bash
//! kinrow 3 3 x &
//! kinrow 3 3 o --engine mcts
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use kinrow_agent::{
    Agent, AlphaBeta, AlphaBetaConfig, Board, Engine, ExchangeConfig, FileChannel, Mark, Mcts,
    MctsConfig,
};
use log::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineKind {
    Alphabeta,
    Mcts,
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "kinrow")]
#[command(version, about = "Plays generalized k-in-a-row against another process", long_about = None)]
struct Args {
    /// Board dimension
    n: usize,

    /// Marks in a row needed to win
    k: usize,

    /// Side to play: x moves first, o second
    side: String,

    /// Search engine
    #[arg(short, long, value_enum, default_value_t = EngineKind::Alphabeta)]
    engine: EngineKind,

    /// Alpha-beta depth limit
    #[arg(short, long, default_value_t = 4)]
    depth: usize,

    /// MCTS time budget per move, in milliseconds
    #[arg(short, long, default_value_t = 5000)]
    time_ms: u64,

    /// MCTS UCB1 exploration weight
    #[arg(long, default_value_t = 0.0)]
    exploration: f64,

    /// Directory holding the move logs
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Give up after waiting this many seconds for an opponent move
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn build_engine(args: &Args) -> Result<Engine> {
    let engine = match args.engine {
        EngineKind::Alphabeta => {
            let config = AlphaBetaConfig::default().with_depth_limit(args.depth);
            Engine::AlphaBeta(AlphaBeta::try_new(config)?)
        }
        EngineKind::Mcts => {
            let config = MctsConfig::default()
                .with_max_time(Duration::from_millis(args.time_ms))
                .with_exploration_weight(args.exploration);
            Engine::Mcts(Mcts::try_new(config)?)
        }
    };
    Ok(engine)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let side = args
        .side
        .chars()
        .next()
        .filter(|_| args.side.len() == 1)
        .and_then(Mark::from_char)
        .ok_or_else(|| anyhow!("side must be 'x' or 'o', got {:?}", args.side))?;

    let board = Board::new(args.n, args.k).context("invalid board dimensions")?;
    let engine = build_engine(&args)?;

    let mut exchange = ExchangeConfig::default().with_directory(&args.dir);
    if let Some(secs) = args.timeout_secs {
        exchange = exchange.with_timeout(Duration::from_secs(secs));
    }
    let channel = FileChannel::new(side, exchange)?;

    info!("starting as {} with {:?}", side, args.engine);
    let mut agent = Agent::new(board, side, engine, channel);
    let result = agent.play()?;

    println!("{}", result);
    println!("{}", agent.board());
    Ok(())
}
