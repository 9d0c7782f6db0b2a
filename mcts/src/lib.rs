mod children;
mod exploration;
mod search;
mod state;
mod stats;

pub use rustc_hash::{self, FxHashSet};
pub use search::Mcts;
pub use state::GameState;

#[cfg(test)]
mod tests;
