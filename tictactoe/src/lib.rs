mod board;
mod error;
mod game;
mod game_result;
mod player;

pub use board::Board;
pub use error::PlayError;
pub use game::Game;
pub use game_result::GameResult;
pub use player::Player;
