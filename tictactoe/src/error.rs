use std::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    OutOfBounds,
    AlreadyOccupied,
    GameOver,
}

impl Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            PlayError::OutOfBounds => "given square is not on the board",
            PlayError::AlreadyOccupied => "cannot place a piece in that position because it is already occupied",
            PlayError::GameOver => "cannot play a move after the game has ended",
        })
    }
}

impl Error for PlayError {}
