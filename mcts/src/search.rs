use rustc_hash::FxHashSet;

use crate::{children::Children, exploration::upper_confidence_bound, state::GameState, stats::Statistics};

/// Monte Carlo tree searcher. First rollout the tree, then choose a move.
///
/// One searcher owns all visit and reward statistics for its lifetime.
/// Rollouts are strictly sequential, the tree is never persisted or
/// pruned.
pub struct Mcts<S> {
    stats: Statistics<S>,
    children: Children<S>,
    exploration_weight: f32,
}

impl<S> Mcts<S> {
    pub fn new(exploration_weight: f32) -> Self {
        assert!(
            exploration_weight >= 0.0,
            "exploration weight must be non-negative"
        );
        Mcts {
            stats: Statistics::default(),
            children: Children::default(),
            exploration_weight,
        }
    }
}

impl<S> Default for Mcts<S> {
    fn default() -> Self {
        Mcts::new(1.0)
    }
}

impl<S: GameState> Mcts<S> {
    /// Choose the best successor of `state`. (Choose a move in the game.)
    ///
    /// Ties are broken arbitrarily but deterministically given consistent
    /// iteration order.
    pub fn choose(&self, state: &S) -> S {
        assert!(!state.is_terminal(), "choose called on a terminal state");

        let children = match self.children.children_of(state) {
            Some(children) => children,
            // No rollout ever reached this state, pick any move.
            None => {
                return state
                    .find_random_child()
                    .expect("find_random_child returned None for a non-terminal state")
            }
        };

        let score = |child: &S| -> f32 {
            let visits = self.stats.visits(child);
            if visits == 0 {
                return f32::NEG_INFINITY; // avoid unseen moves
            }
            self.stats.total_reward(child) / visits as f32
        };

        children
            .iter()
            .max_by(|a, b| score(a).partial_cmp(&score(b)).expect("tried comparing nan"))
            .expect("expanded non-terminal state has no children")
            .clone()
    }

    /// Make the tree one layer better. (Train for one iteration.)
    ///
    /// Assumes strictly alternating two-player zero-sum turns: the reward
    /// perspective flips on every ply during simulation and
    /// backpropagation.
    pub fn do_rollout(&mut self, root: &S) {
        let path = self.select(root);
        let leaf = path.last().expect("selection produced an empty path").clone();
        self.expand(&leaf);
        let reward = self.simulate(leaf);
        self.backpropagate(path, reward);
    }

    /// Number of rollouts whose path went through `state`.
    pub fn visits(&self, state: &S) -> u32 {
        self.stats.visits(state)
    }

    /// Sum of the rewards recorded at `state`.
    pub fn total_reward(&self, state: &S) -> f32 {
        self.stats.total_reward(state)
    }

    /// Average reward of `state`, zero when it was never visited.
    pub fn expected_reward(&self, state: &S) -> f32 {
        match self.stats.visits(state) {
            0 => 0.0,
            visits => self.stats.total_reward(state) / visits as f32,
        }
    }

    /// The registered successors of `state`, if it has been expanded.
    pub fn children_of(&self, state: &S) -> Option<&FxHashSet<S>> {
        self.children.children_of(state)
    }

    /// Find an unexplored descendant of `root`.
    fn select(&self, root: &S) -> Vec<S> {
        let mut path = Vec::new();
        let mut node = root.clone();
        loop {
            path.push(node.clone());
            let children = match self.children.children_of(&node) {
                // Either unexplored or terminal.
                None => return path,
                Some(children) if children.is_empty() => return path,
                Some(children) => children,
            };
            // Expand new territory before re-exploring known subtrees.
            if let Some(unexplored) = children.iter().find(|child| !self.children.is_expanded(child)) {
                path.push(unexplored.clone());
                return path;
            }
            // Descend a layer deeper.
            node = self.uct_select(&node, children);
        }
    }

    /// Register the children of `node` the first time it is reached.
    fn expand(&mut self, node: &S) {
        if self.children.is_expanded(node) {
            return; // already expanded
        }
        self.children.expand(node.clone(), node.find_children());
    }

    /// Reward of a random playout from `node` to the end of the game,
    /// from the perspective of the player who moved into `node`.
    fn simulate(&self, mut node: S) -> f32 {
        let mut invert = false;
        loop {
            if node.is_terminal() {
                let reward = node.reward();
                return if invert { 1.0 - reward } else { reward };
            }
            node = node
                .find_random_child()
                .expect("find_random_child returned None for a non-terminal state");
            invert = !invert;
        }
    }

    /// Send the reward back up to the ancestors of the leaf.
    fn backpropagate(&mut self, path: Vec<S>, mut reward: f32) {
        for node in path.into_iter().rev() {
            self.stats.record(node, reward);
            reward = 1.0 - reward; // a win for me is a loss for my opponent
        }
    }

    /// Select a child of `node`, balancing exploration and exploitation.
    fn uct_select(&self, node: &S, children: &FxHashSet<S>) -> S {
        // Only valid once every child has been expanded.
        assert!(
            children.iter().all(|child| self.children.is_expanded(child)),
            "uct_select called while an unexpanded child remains"
        );
        debug_assert!(self.stats.visits(node) > 0);

        let ln_parent_visits = (self.stats.visits(node) as f32).ln();
        let uct = |child: &S| -> f32 {
            upper_confidence_bound(
                self.stats.total_reward(child),
                self.stats.visits(child) as f32,
                self.exploration_weight,
                ln_parent_visits,
            )
        };

        children
            .iter()
            .max_by(|a, b| uct(a).partial_cmp(&uct(b)).expect("tried comparing nan"))
            .expect("tried to select on a state without children")
            .clone()
    }
}
