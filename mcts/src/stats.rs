use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Accumulated reward and visit count for every state the search has
/// passed through. Reads on unseen states return zero without inserting
/// an entry.
pub struct Statistics<S> {
    rewards: FxHashMap<S, f32>, // Q
    visits: FxHashMap<S, u32>,  // N
}

impl<S> Default for Statistics<S> {
    fn default() -> Self {
        Statistics {
            rewards: FxHashMap::default(),
            visits: FxHashMap::default(),
        }
    }
}

impl<S: Clone + Eq + Hash> Statistics<S> {
    pub fn visits(&self, state: &S) -> u32 {
        self.visits.get(state).copied().unwrap_or(0)
    }

    pub fn total_reward(&self, state: &S) -> f32 {
        self.rewards.get(state).copied().unwrap_or(0.0)
    }

    /// Count one visit worth `reward`.
    pub fn record(&mut self, state: S, reward: f32) {
        *self.visits.entry(state.clone()).or_default() += 1;
        *self.rewards.entry(state).or_default() += reward;
    }
}
