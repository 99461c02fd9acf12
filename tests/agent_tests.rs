use kinrow_agent::{
    Agent, AgentError, AlphaBeta, AlphaBetaConfig, Board, Engine, GameResult, Mark, Mcts,
    MctsConfig, Move, Outcome, PlayedMove, TurnChannel,
};
use std::time::Duration;

/// In-memory opponent that always takes the first empty cell in row-major
/// order, keeping its own copy of the board
struct FirstEmptyOpponent {
    board: Board,
    side: Mark,
    written: Vec<Move>,
    rounds_read: Vec<usize>,
}

impl FirstEmptyOpponent {
    fn new(n: usize, k: usize, side: Mark) -> Self {
        FirstEmptyOpponent {
            board: Board::new(n, k).unwrap(),
            side,
            written: Vec::new(),
            rounds_read: Vec::new(),
        }
    }
}

impl TurnChannel for FirstEmptyOpponent {
    fn read_opponent_move(&mut self, round: usize) -> kinrow_agent::Result<PlayedMove> {
        self.rounds_read.push(round);
        let mv = self.board.empty_cells()[0];
        self.board.make_move(mv.row, mv.col, self.side);
        Ok(PlayedMove {
            player: self.side,
            mv,
        })
    }

    fn write_own_move(&mut self, player: Mark, mv: Move) -> kinrow_agent::Result<()> {
        assert!(self.board.make_move(mv.row, mv.col, player));
        self.written.push(mv);
        Ok(())
    }
}

/// Replays a fixed list of opponent moves
struct Scripted {
    side: Mark,
    moves: Vec<Move>,
}

impl TurnChannel for Scripted {
    fn read_opponent_move(&mut self, round: usize) -> kinrow_agent::Result<PlayedMove> {
        // Running out of script looks like an opponent that never answers
        let mv = *self
            .moves
            .get(round - 1)
            .ok_or(AgentError::OpponentTimeout(round))?;
        Ok(PlayedMove {
            player: self.side,
            mv,
        })
    }

    fn write_own_move(&mut self, _player: Mark, _mv: Move) -> kinrow_agent::Result<()> {
        Ok(())
    }
}

fn alpha_beta(depth: usize) -> Engine {
    Engine::AlphaBeta(AlphaBeta::new(AlphaBetaConfig::default().with_depth_limit(depth)))
}

fn assert_result_matches_board<C: TurnChannel>(agent: &Agent<C>, result: GameResult) {
    let expected = match agent.board().outcome(agent.side()) {
        Outcome::Won(mark) if mark == agent.side() => GameResult::Win,
        Outcome::Won(_) => GameResult::Lose,
        Outcome::Draw => GameResult::Draw,
        Outcome::InProgress => panic!("game ended while still in progress"),
    };
    assert_eq!(result, expected);
}

#[test]
fn test_x_plays_full_game() {
    let board = Board::new(3, 3).unwrap();
    let channel = FirstEmptyOpponent::new(3, 3, Mark::O);
    let mut agent = Agent::new(board, Mark::X, alpha_beta(4), channel);

    let result = agent.play().unwrap();
    assert_result_matches_board(&agent, result);

    // Both sides saw the same game
    assert_eq!(agent.board(), &agent.channel().board);
    let x_marks = (0..3)
        .flat_map(|r| (0..3).map(move |c| (r, c)))
        .filter(|&(r, c)| agent.board().get(r, c) == Some(Mark::X))
        .count();
    assert_eq!(agent.channel().written.len(), x_marks);

    // Rounds are read in order starting at 1
    let rounds = &agent.channel().rounds_read;
    assert_eq!(rounds.first(), Some(&1));
    assert!(rounds.windows(2).all(|w| w[1] == w[0] + 1));
}

#[test]
fn test_o_waits_for_first_move() {
    let board = Board::new(3, 3).unwrap();
    let channel = FirstEmptyOpponent::new(3, 3, Mark::X);
    let config = MctsConfig::default()
        .with_max_time(Duration::from_secs(10))
        .with_max_iterations(200);
    let mut agent = Agent::new(board, Mark::O, Engine::Mcts(Mcts::new(config)), channel);

    let result = agent.play().unwrap();
    assert_result_matches_board(&agent, result);

    // X opened in the corner, so O never made the first mark
    assert_eq!(agent.board().get(0, 0), Some(Mark::X));
    assert_eq!(agent.channel().rounds_read.first(), Some(&1));
    assert_eq!(agent.board(), &agent.channel().board);
}

#[test]
fn test_o_blocks_open_row() {
    // X holds (0,0) and O holds (2,2); X then plays (0,1), so O has to
    // block at (0,2)
    let mut board = Board::new(3, 3).unwrap();
    board.make_move(0, 0, Mark::X);
    board.make_move(2, 2, Mark::O);
    let channel = Scripted {
        side: Mark::X,
        moves: vec![Move::new(0, 1)],
    };
    let config = MctsConfig::default().with_max_iterations(50);
    let mut agent = Agent::new(board, Mark::O, Engine::Mcts(Mcts::new(config)), channel);

    assert!(matches!(agent.play(), Err(AgentError::OpponentTimeout(2))));
    assert_eq!(agent.board().get(0, 2), Some(Mark::O));
}

#[test]
fn test_opponent_move_on_occupied_cell() {
    // X's first alpha-beta move on an empty 3x3 board is the center
    let board = Board::new(3, 3).unwrap();
    let channel = Scripted {
        side: Mark::O,
        moves: vec![Move::new(1, 1)],
    };
    let mut agent = Agent::new(board, Mark::X, alpha_beta(4), channel);

    assert!(matches!(
        agent.play(),
        Err(AgentError::OccupiedCell { row: 1, col: 1 })
    ));
}

#[test]
fn test_opponent_move_out_of_bounds() {
    let board = Board::new(3, 3).unwrap();
    let channel = Scripted {
        side: Mark::X,
        moves: vec![Move::new(3, 0)],
    };
    let mut agent = Agent::new(board, Mark::O, alpha_beta(2), channel);

    assert!(matches!(
        agent.play(),
        Err(AgentError::OutOfBounds { row: 3, col: 0, n: 3 })
    ));
}

#[test]
fn test_opponent_move_with_own_tag_is_rejected() {
    // O reads a line tagged 'o' from the X log
    let board = Board::new(3, 3).unwrap();
    let channel = Scripted {
        side: Mark::O,
        moves: vec![Move::new(0, 0)],
    };
    let mut agent = Agent::new(board, Mark::O, alpha_beta(2), channel);

    assert!(matches!(
        agent.play(),
        Err(AgentError::WrongPlayer {
            expected: Mark::X,
            found: Mark::O
        })
    ));
    assert_eq!(agent.board().empty_cells().len(), 9);

    // X makes its first move, then reads a line tagged 'x'
    let board = Board::new(3, 3).unwrap();
    let channel = Scripted {
        side: Mark::X,
        moves: vec![Move::new(0, 0)],
    };
    let mut agent = Agent::new(board, Mark::X, alpha_beta(2), channel);

    assert!(matches!(
        agent.play(),
        Err(AgentError::WrongPlayer {
            expected: Mark::O,
            found: Mark::X
        })
    ));
    assert_eq!(agent.board().get(0, 0), None);
}

#[test]
fn test_result_display() {
    assert_eq!(GameResult::Win.to_string(), "win");
    assert_eq!(GameResult::Lose.to_string(), "lose");
    assert_eq!(GameResult::Draw.to_string(), "draw");
}
