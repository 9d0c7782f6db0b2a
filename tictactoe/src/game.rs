use std::fmt::{self, Display};

use mcts::GameState;
use rand::{seq::IteratorRandom, thread_rng};
use rustc_hash::FxHashSet;

use crate::{board::Board, error::PlayError, game_result::GameResult, player::Player};

/// One tic-tac-toe position together with whose turn it is.
///
/// Positions are immutable values: `play` returns the position after the
/// move and leaves the original untouched, so they can key the search
/// tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game<const N: usize> {
    pub board: Board<N>,
    pub to_move: Player,
    pub result: GameResult,
}

impl<const N: usize> Default for Game<N> {
    fn default() -> Self {
        Game {
            board: Board::default(),
            to_move: Player::X,
            result: GameResult::Ongoing,
        }
    }
}

impl<const N: usize> Game<N> {
    /// Place the piece of the player to move on the given square.
    pub fn play(&self, row: usize, col: usize) -> Result<Self, PlayError> {
        if self.result != GameResult::Ongoing {
            return Err(PlayError::GameOver);
        }
        if !Board::<N>::has(row, col) {
            return Err(PlayError::OutOfBounds);
        }
        if self.board[(row, col)].is_some() {
            return Err(PlayError::AlreadyOccupied);
        }

        let mut board = self.board;
        board[(row, col)] = Some(self.to_move);
        let result = if let Some(winner) = board.winner() {
            GameResult::Winner(winner)
        } else if board.full() {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        };
        Ok(Game {
            board,
            to_move: self.to_move.opponent(),
            result,
        })
    }

    /// Play out a whole sequence of moves from the starting position.
    pub fn from_moves(moves: &[(usize, usize)]) -> Result<Self, PlayError> {
        let mut game = Game::default();
        for &(row, col) in moves {
            game = game.play(row, col)?;
        }
        Ok(game)
    }
}

impl<const N: usize> GameState for Game<N> {
    fn find_children(&self) -> FxHashSet<Self> {
        if self.is_terminal() {
            return FxHashSet::default();
        }
        self.board
            .empty_squares()
            .map(|(row, col)| self.play(row, col).expect("empty square must be playable"))
            .collect()
    }

    fn find_random_child(&self) -> Option<Self> {
        if self.is_terminal() {
            return None;
        }
        let (row, col) = self.board.empty_squares().choose(&mut thread_rng())?;
        Some(self.play(row, col).expect("empty square must be playable"))
    }

    fn is_terminal(&self) -> bool {
        self.result != GameResult::Ongoing
    }

    fn reward(&self) -> f32 {
        match self.result {
            // The winning move is always made by the winner, so the
            // player to move here can never hold the win.
            GameResult::Winner(winner) if winner == self.to_move => {
                panic!("reward called on an unreachable position")
            }
            GameResult::Winner(_) => 1.0,
            GameResult::Draw => 0.5,
            GameResult::Ongoing => panic!("reward called on an ongoing game"),
        }
    }
}

impl<const N: usize> Display for Game<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.board.fmt(f)
    }
}
