//! Board model for generalized k-in-a-row
//!
//! The board is an `n`×`n` grid of cells that are empty or hold a mark.
//! A side wins by owning `k` consecutive cells along a row, a column or
//! either diagonal.

use std::fmt;

use crate::{ordering, AgentError, Result};

/// The four ray directions scanned from every starting cell:
/// down, right, down-right and down-left.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the other side
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Lower-case letter used in logs and on the console
    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }

    /// Parses `x`/`o` (either case)
    pub fn from_char(c: char) -> Option<Mark> {
        match c.to_ascii_lowercase() {
            'x' => Some(Mark::X),
            'o' => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A board coordinate, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

/// Terminal check from a single side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndState {
    /// The side holds a winning line
    Win,
    /// Every cell is filled and the side holds no winning line
    Draw,
    Continue,
}

/// Terminal check covering both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won(Mark),
    Draw,
    InProgress,
}

/// Game board
///
/// Cells are stored row-major. Cloning produces an independent deep copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    n: usize,
    k: usize,
    cells: Vec<Option<Mark>>,
}

impl Board {
    /// Creates an empty `n`×`n` board where `k` in a row wins
    pub fn new(n: usize, k: usize) -> Result<Self> {
        if k == 0 || k > n {
            return Err(AgentError::InvalidBoard { n, k });
        }
        Ok(Board {
            n,
            k,
            cells: vec![None; n * n],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.k
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.n + col
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.n && col < self.n
    }

    /// Mark at a cell, `None` when empty or out of bounds
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.cells[self.index(row, col)].is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Places `player` at `(row, col)`
    ///
    /// Returns `false` and leaves the board untouched when the cell is
    /// occupied or outside the board.
    pub fn make_move(&mut self, row: usize, col: usize, player: Mark) -> bool {
        if !self.is_empty(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = Some(player);
        true
    }

    /// Clears `(row, col)` regardless of its contents
    pub fn undo_move(&mut self, row: usize, col: usize) {
        if self.in_bounds(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = None;
        }
    }

    /// Whether `k` consecutive `player` marks start at `(row, col)` along `(dr, dc)`
    fn check_line(&self, row: usize, col: usize, dr: isize, dc: isize, player: Mark) -> bool {
        let (mut r, mut c) = (row as isize, col as isize);
        for _ in 0..self.k {
            if r < 0 || c < 0 || self.get(r as usize, c as usize) != Some(player) {
                return false;
            }
            r += dr;
            c += dc;
        }
        true
    }

    fn has_line_from(&self, row: usize, col: usize, player: Mark) -> bool {
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.check_line(row, col, dr, dc, player))
    }

    /// Whether `player` owns a winning line anywhere on the board
    pub fn has_winning_line(&self, player: Mark) -> bool {
        (0..self.n).any(|row| (0..self.n).any(|col| self.has_line_from(row, col, player)))
    }

    /// Terminal check for a single side
    ///
    /// A winning line takes precedence over a full board.
    pub fn check_end(&self, player: Mark) -> EndState {
        if self.has_winning_line(player) {
            EndState::Win
        } else if self.is_full() {
            EndState::Draw
        } else {
            EndState::Continue
        }
    }

    /// Terminal check for both sides
    ///
    /// Each starting cell is tested for `first` before its opponent, so if
    /// both sides somehow hold a line the one found first in row-major order
    /// is reported.
    pub fn outcome(&self, first: Mark) -> Outcome {
        let second = first.opponent();
        for row in 0..self.n {
            for col in 0..self.n {
                if self.has_line_from(row, col, first) {
                    return Outcome::Won(first);
                }
                if self.has_line_from(row, col, second) {
                    return Outcome::Won(second);
                }
            }
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Move::new(i / self.n, i % self.n))
            .collect()
    }

    /// Empty cells ordered by distance to the board center
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = self.empty_cells();
        ordering::sort_by_center(&mut moves, self.n);
        moves
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.n {
            let line: Vec<String> = (0..self.n)
                .map(|col| match self.get(row, col) {
                    Some(mark) => mark.as_char().to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
