use std::hash::Hash;

use rustc_hash::FxHashSet;

/// A single state of a two-player, alternating-turn, perfect-information
/// game. The search tree is built out of these.
///
/// States are value objects: applying a move produces a new state and
/// never mutates the old one. Equality and hashing must follow value
/// identity so that two states representing the same position share
/// their statistics.
pub trait GameState: Clone + Eq + Hash + Sized {
    /// All states reachable in one legal move. Empty iff this state is
    /// terminal.
    fn find_children(&self) -> FxHashSet<Self>;

    /// One randomly chosen successor, used for cheap simulation playouts.
    /// Must return `None` only on terminal states.
    fn find_random_child(&self) -> Option<Self>;

    /// Whether the game is over in this state.
    fn is_terminal(&self) -> bool;

    /// The outcome in [0, 1] for the player who moved into this state:
    /// 1 is a win, 0 a loss, 0.5 a draw. Only defined on terminal
    /// states; implementations must panic otherwise.
    fn reward(&self) -> f32;
}
