use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// The known part of the game tree: every expanded state mapped to its
/// legal successors. A missing key means the state was never expanded;
/// an empty set means it is terminal.
pub struct Children<S> {
    map: FxHashMap<S, FxHashSet<S>>,
}

impl<S> Default for Children<S> {
    fn default() -> Self {
        Children {
            map: FxHashMap::default(),
        }
    }
}

impl<S: Eq + Hash> Children<S> {
    pub fn is_expanded(&self, state: &S) -> bool {
        self.map.contains_key(state)
    }

    pub fn children_of(&self, state: &S) -> Option<&FxHashSet<S>> {
        self.map.get(state)
    }

    /// Register the successors of `state`. Expanding an already-expanded
    /// state is a no-op, it never replaces the recorded set.
    pub fn expand(&mut self, state: S, children: FxHashSet<S>) {
        self.map.entry(state).or_insert(children);
    }
}
