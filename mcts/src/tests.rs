use rustc_hash::FxHashSet;

use crate::{children::Children, GameState, Mcts};

/// A game with a single decision: the first player picks one of two
/// terminal outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum OneMove {
    Start,
    Win,
    Loss,
}

impl GameState for OneMove {
    fn find_children(&self) -> FxHashSet<Self> {
        match self {
            OneMove::Start => [OneMove::Win, OneMove::Loss].into_iter().collect(),
            _ => FxHashSet::default(),
        }
    }

    fn find_random_child(&self) -> Option<Self> {
        match self {
            OneMove::Start => Some(OneMove::Win),
            _ => None,
        }
    }

    fn is_terminal(&self) -> bool {
        !matches!(self, OneMove::Start)
    }

    fn reward(&self) -> f32 {
        match self {
            OneMove::Win => 1.0,
            OneMove::Loss => 0.0,
            OneMove::Start => panic!("reward called on a non-terminal state"),
        }
    }
}

const LINE_END: u8 = 2;
const LINE_REWARD: f32 = 0.25;

/// A single corridor of states ending in a fixed terminal reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Line(u8);

impl GameState for Line {
    fn find_children(&self) -> FxHashSet<Self> {
        if self.is_terminal() {
            FxHashSet::default()
        } else {
            [Line(self.0 + 1)].into_iter().collect()
        }
    }

    fn find_random_child(&self) -> Option<Self> {
        (!self.is_terminal()).then(|| Line(self.0 + 1))
    }

    fn is_terminal(&self) -> bool {
        self.0 == LINE_END
    }

    fn reward(&self) -> f32 {
        assert!(self.is_terminal(), "reward called on a non-terminal state");
        LINE_REWARD
    }
}

const FAN: u8 = 3;

/// Two plies deep: the root fans out to `FAN` middle states, each with a
/// single terminal child of a distinct reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Fan {
    Root,
    Mid(u8),
    End(u8),
}

impl Fan {
    fn all() -> impl Iterator<Item = Fan> {
        [Fan::Root]
            .into_iter()
            .chain((0..FAN).map(Fan::Mid))
            .chain((0..FAN).map(Fan::End))
    }
}

impl GameState for Fan {
    fn find_children(&self) -> FxHashSet<Self> {
        match *self {
            Fan::Root => (0..FAN).map(Fan::Mid).collect(),
            Fan::Mid(i) => [Fan::End(i)].into_iter().collect(),
            Fan::End(_) => FxHashSet::default(),
        }
    }

    fn find_random_child(&self) -> Option<Self> {
        match *self {
            Fan::Root => Some(Fan::Mid(0)),
            Fan::Mid(i) => Some(Fan::End(i)),
            Fan::End(_) => None,
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Fan::End(_))
    }

    fn reward(&self) -> f32 {
        match *self {
            Fan::End(i) => f32::from(i) / f32::from(FAN - 1),
            _ => panic!("reward called on a non-terminal state"),
        }
    }
}

#[test]
fn one_decision_end_to_end() {
    let mut tree = Mcts::default();
    tree.do_rollout(&OneMove::Start);
    tree.do_rollout(&OneMove::Start);

    // The second rollout visited exactly one of the children.
    let visited: Vec<_> = [OneMove::Win, OneMove::Loss]
        .into_iter()
        .filter(|child| tree.visits(child) > 0)
        .collect();
    assert_eq!(visited.len(), 1);
    let total = tree.total_reward(&visited[0]);
    assert!(total == 0.0 || total == 1.0);

    // Once both children have been tried the winning move is chosen
    // every time.
    for _ in 0..10 {
        tree.do_rollout(&OneMove::Start);
        assert_eq!(tree.choose(&OneMove::Start), OneMove::Win);
    }
}

#[test]
fn choose_avoids_unvisited_children() {
    let mut tree = Mcts::default();
    tree.do_rollout(&OneMove::Start);
    tree.do_rollout(&OneMove::Start);

    // One child is still unvisited and must lose to the visited one.
    let choice = tree.choose(&OneMove::Start);
    assert_eq!(tree.visits(&choice), 1);
}

#[test]
fn choose_falls_back_on_unexplored_root() {
    let tree = Mcts::default();
    let choice = tree.choose(&OneMove::Start);
    assert!(OneMove::Start.find_children().contains(&choice));
}

#[test]
#[should_panic(expected = "choose called on a terminal state")]
fn choose_panics_on_terminal_state() {
    Mcts::default().choose(&Line(LINE_END));
}

#[test]
#[should_panic(expected = "exploration weight must be non-negative")]
fn negative_exploration_weight_is_rejected() {
    Mcts::<Line>::new(-0.5);
}

#[test]
fn expansion_is_idempotent() {
    let mut children = Children::default();
    let first: FxHashSet<Line> = [Line(1)].into_iter().collect();
    children.expand(Line(0), first.clone());
    children.expand(Line(0), FxHashSet::default());
    assert_eq!(children.children_of(&Line(0)), Some(&first));
}

#[test]
fn visit_counts_match_rollouts() {
    const ROLLOUTS: u32 = 30;
    let mut tree = Mcts::default();
    for _ in 0..ROLLOUTS {
        tree.do_rollout(&Fan::Root);
    }

    assert_eq!(tree.visits(&Fan::Root), ROLLOUTS);
    // Every rollout but the first passes through exactly one middle
    // state, and only rollouts past the frontier reach a terminal.
    let mid_visits: u32 = (0..FAN).map(|i| tree.visits(&Fan::Mid(i))).sum();
    let end_visits: u32 = (0..FAN).map(|i| tree.visits(&Fan::End(i))).sum();
    assert_eq!(mid_visits, ROLLOUTS - 1);
    assert_eq!(end_visits, ROLLOUTS - 1 - u32::from(FAN));
}

#[test]
fn frontier_is_exhausted_before_uct() {
    let mut tree = Mcts::default();
    for _ in 0..=u32::from(FAN) {
        tree.do_rollout(&Fan::Root);
    }

    // The first rollout expands the root, the next FAN each visit one
    // fresh child; none is revisited until all have been expanded.
    for i in 0..FAN {
        assert_eq!(tree.visits(&Fan::Mid(i)), 1);
    }
}

#[test]
fn expected_reward_stays_in_range() {
    let mut tree = Mcts::default();
    for _ in 0..50 {
        tree.do_rollout(&Fan::Root);
    }
    for state in Fan::all() {
        let expected = tree.expected_reward(&state);
        assert!((0.0..=1.0).contains(&expected));
    }
}

#[test]
fn identical_runs_produce_identical_statistics() {
    let mut a = Mcts::default();
    let mut b = Mcts::default();
    for _ in 0..20 {
        a.do_rollout(&Fan::Root);
        b.do_rollout(&Fan::Root);
    }
    for state in Fan::all() {
        assert_eq!(a.visits(&state), b.visits(&state));
        assert_eq!(a.total_reward(&state), b.total_reward(&state));
    }
}

#[test]
fn simulation_keeps_perspective_on_even_plies() {
    let mut tree = Mcts::default();
    tree.do_rollout(&Line(0));
    // Two plies from the root to the end of the line, no inversion.
    assert_eq!(tree.total_reward(&Line(0)), LINE_REWARD);
}

#[test]
fn simulation_inverts_on_odd_plies() {
    let mut tree = Mcts::default();
    tree.do_rollout(&Fan::Root);
    tree.do_rollout(&Fan::Root);

    // The second rollout simulated one ply past a middle state.
    let visited: Vec<_> = (0..FAN).filter(|&i| tree.visits(&Fan::Mid(i)) == 1).collect();
    assert_eq!(visited.len(), 1);
    let i = visited[0];
    assert_eq!(tree.total_reward(&Fan::Mid(i)), 1.0 - Fan::End(i).reward());
}

#[test]
fn backpropagation_alternates_reward() {
    let mut tree = Mcts::default();
    for _ in 0..3 {
        tree.do_rollout(&Line(0));
    }

    assert_eq!(tree.visits(&Line(0)), 3);
    assert_eq!(tree.visits(&Line(1)), 2);
    assert_eq!(tree.visits(&Line(2)), 1);
    // The leaf keeps the raw reward, its parent sees it flipped.
    assert_eq!(tree.total_reward(&Line(2)), LINE_REWARD);
    assert_eq!(tree.total_reward(&Line(1)), 2.0 * (1.0 - LINE_REWARD));
    assert_eq!(tree.total_reward(&Line(0)), 3.0 * LINE_REWARD);
}
