//! Move exchange between two agent processes
//!
//! Each side appends its moves, one per line, to its own log file
//! (`xmoves.txt` or `omoves.txt`) and polls the other side's log for the
//! next round. A line reads `{player}{row}{col}`, with a 1-based decimal
//! row and a column letter (`a` = column 0), e.g. `x2b` for X at row 1,
//! column 1.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use log::{debug, trace};

use crate::{
    board::{Mark, Move},
    config::ExchangeConfig,
    AgentError, Result,
};

/// A move read back from a log, tagged with the side that played it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub player: Mark,
    pub mv: Move,
}

/// The contract between the game loop and whatever carries moves to the
/// opponent
pub trait TurnChannel {
    /// Blocks until the opponent's move for `round` (1-based) is available
    fn read_opponent_move(&mut self, round: usize) -> Result<PlayedMove>;

    /// Publishes this side's move
    fn write_own_move(&mut self, player: Mark, mv: Move) -> Result<()>;
}

/// Encodes a move as a log line, without the trailing newline
pub fn encode_move(player: Mark, mv: Move) -> Result<String> {
    let col = u8::try_from(mv.col)
        .ok()
        .filter(|&c| c < 26)
        .ok_or(AgentError::UnencodableMove {
            row: mv.row,
            col: mv.col,
        })?;
    Ok(format!(
        "{}{}{}",
        player.as_char(),
        mv.row + 1,
        char::from(b'a' + col)
    ))
}

/// Decodes a log line produced by [`encode_move`]
pub fn decode_move(line: &str) -> Result<PlayedMove> {
    let malformed = || AgentError::MalformedMove(line.to_string());
    let line = line.trim();

    let mut chars = line.chars();
    let player = chars.next().and_then(Mark::from_char).ok_or_else(malformed)?;
    let col_char = chars.next_back().filter(char::is_ascii_lowercase).ok_or_else(malformed)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let row: usize = digits.parse().map_err(|_| malformed())?;
    if row == 0 {
        return Err(malformed());
    }
    let col = (col_char as u8 - b'a') as usize;

    Ok(PlayedMove {
        player,
        mv: Move::new(row - 1, col),
    })
}

/// Log file name for a side
pub fn log_file_name(side: Mark) -> &'static str {
    match side {
        Mark::X => "xmoves.txt",
        Mark::O => "omoves.txt",
    }
}

/// File-backed [`TurnChannel`]
#[derive(Debug, Clone)]
pub struct FileChannel {
    own_log: PathBuf,
    opponent_log: PathBuf,
    config: ExchangeConfig,
}

impl FileChannel {
    /// Channel for `side`, with both logs in the configured directory
    pub fn new(side: Mark, config: ExchangeConfig) -> Result<Self> {
        config.validate()?;
        Ok(FileChannel {
            own_log: config.directory.join(log_file_name(side)),
            opponent_log: config.directory.join(log_file_name(side.opponent())),
            config,
        })
    }

    pub fn own_log(&self) -> &Path {
        &self.own_log
    }

    pub fn opponent_log(&self) -> &Path {
        &self.opponent_log
    }

    fn check_deadline(&self, started: Instant, round: usize) -> Result<()> {
        match self.config.timeout {
            Some(timeout) if started.elapsed() >= timeout => {
                Err(AgentError::OpponentTimeout(round))
            }
            _ => Ok(()),
        }
    }
}

impl TurnChannel for FileChannel {
    fn read_opponent_move(&mut self, round: usize) -> Result<PlayedMove> {
        let started = Instant::now();
        debug!(
            "waiting for round {} in {}",
            round,
            self.opponent_log.display()
        );

        loop {
            match fs::read_to_string(&self.opponent_log) {
                Ok(contents) => {
                    if let Some(line) = contents.lines().nth(round.saturating_sub(1)) {
                        let played = decode_move(line)?;
                        trace!("opponent played {:?} in round {}", played, round);
                        return Ok(played);
                    }
                    self.check_deadline(started, round)?;
                    thread::sleep(self.config.poll_interval);
                }
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    self.check_deadline(started, round)?;
                    thread::sleep(self.config.missing_file_interval);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn write_own_move(&mut self, player: Mark, mv: Move) -> Result<()> {
        let line = encode_move(player, mv)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.own_log)?;
        writeln!(file, "{}", line)?;
        trace!("wrote {} to {}", line, self.own_log.display());
        Ok(())
    }
}
