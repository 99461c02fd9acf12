//! The game loop
//!
//! An [`Agent`] owns the board for one game, decides its own moves with an
//! [`Engine`] and trades moves with the opponent through a [`TurnChannel`].
//! X moves first; O starts by waiting for X's first move.

use std::fmt;

use log::{debug, info};

use crate::{
    alphabeta::AlphaBeta,
    board::{Board, Mark, Move, Outcome},
    exchange::TurnChannel,
    mcts::Mcts,
    AgentError, Result,
};

/// Final result from this agent's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Lose,
    Draw,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::Win => "win",
            GameResult::Lose => "lose",
            GameResult::Draw => "draw",
        };
        write!(f, "{}", text)
    }
}

/// The decision engine an agent plays with
pub enum Engine {
    AlphaBeta(AlphaBeta),
    Mcts(Mcts),
}

impl Engine {
    /// Chooses a move for `player`; `None` when the board is full
    ///
    /// `last_move` is the opponent's most recent move, used by MCTS to
    /// break near-ties in its final choice.
    pub fn choose(
        &mut self,
        board: &mut Board,
        player: Mark,
        last_move: Option<Move>,
    ) -> Option<Move> {
        match self {
            Engine::AlphaBeta(searcher) => searcher.best_move(board, player).map(|r| r.mv),
            Engine::Mcts(mcts) => mcts.best_move(board, player, last_move),
        }
    }
}

/// One side of a game
pub struct Agent<C: TurnChannel> {
    board: Board,
    side: Mark,
    engine: Engine,
    channel: C,
    round: usize,
    last_opponent_move: Option<Move>,
}

impl<C: TurnChannel> Agent<C> {
    pub fn new(board: Board, side: Mark, engine: Engine, channel: C) -> Self {
        Agent {
            board,
            side,
            engine,
            channel,
            round: 1,
            last_opponent_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side(&self) -> Mark {
        self.side
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Plays until the game ends
    pub fn play(&mut self) -> Result<GameResult> {
        info!(
            "playing {} on a {}x{} board, {} in a row",
            self.side,
            self.board.size(),
            self.board.size(),
            self.board.win_length()
        );

        if self.side == Mark::O {
            if let Some(result) = self.opponent_turn()? {
                return Ok(result);
            }
        }

        loop {
            if let Some(result) = self.own_turn()? {
                return Ok(result);
            }
            if self.side == Mark::O {
                self.round += 1;
            }
            if let Some(result) = self.opponent_turn()? {
                return Ok(result);
            }
            if self.side == Mark::X {
                self.round += 1;
            }
        }
    }

    /// Decides, applies and publishes one own move
    fn own_turn(&mut self) -> Result<Option<GameResult>> {
        if let Some(mv) = self
            .engine
            .choose(&mut self.board, self.side, self.last_opponent_move)
        {
            if !self.board.make_move(mv.row, mv.col, self.side) {
                return Err(AgentError::OccupiedCell {
                    row: mv.row,
                    col: mv.col,
                });
            }
            info!("round {}: {} plays ({}, {})", self.round, self.side, mv.row, mv.col);
            self.channel.write_own_move(self.side, mv)?;
        }
        Ok(self.result())
    }

    /// Waits for, validates and applies the opponent's move for this round
    fn opponent_turn(&mut self) -> Result<Option<GameResult>> {
        let played = self.channel.read_opponent_move(self.round)?;
        let mv = played.mv;
        debug!("round {}: opponent line decoded as {:?}", self.round, played);

        let expected = self.side.opponent();
        if played.player != expected {
            return Err(AgentError::WrongPlayer {
                expected,
                found: played.player,
            });
        }
        if !self.board.in_bounds(mv.row, mv.col) {
            return Err(AgentError::OutOfBounds {
                row: mv.row,
                col: mv.col,
                n: self.board.size(),
            });
        }
        if !self.board.make_move(mv.row, mv.col, expected) {
            return Err(AgentError::OccupiedCell {
                row: mv.row,
                col: mv.col,
            });
        }
        info!(
            "round {}: {} plays ({}, {})",
            self.round,
            expected,
            mv.row,
            mv.col
        );
        self.last_opponent_move = Some(mv);
        Ok(self.result())
    }

    /// The game result if the game is over
    pub fn result(&self) -> Option<GameResult> {
        match self.board.outcome(self.side) {
            Outcome::Won(mark) if mark == self.side => Some(GameResult::Win),
            Outcome::Won(_) => Some(GameResult::Lose),
            Outcome::Draw => Some(GameResult::Draw),
            Outcome::InProgress => None,
        }
    }
}
