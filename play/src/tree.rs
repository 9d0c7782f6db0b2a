use mcts::Mcts;
use tictactoe::Game;

/// Print visit and reward statistics for every registered child of
/// `root`, most visited first. Depth one only, the tree below the
/// children can be large.
pub fn print_root_children<const N: usize>(tree: &Mcts<Game<N>>, root: &Game<N>) {
    let children = match tree.children_of(root) {
        Some(children) => children,
        None => return,
    };

    let mut rows: Vec<_> = children
        .iter()
        .map(|child| {
            (
                played_square(root, child),
                tree.visits(child),
                tree.expected_reward(child),
            )
        })
        .collect();
    rows.sort_by_key(|(_, visits, _)| std::cmp::Reverse(*visits));

    println!("move     visited   reward");
    for ((row, col), visits, reward) in rows {
        let square = format!("{},{}", row + 1, col + 1);
        println!("{square: <8} {visits: >7} {reward: >8.4}");
    }
}

/// The square that turns `parent` into `child`.
fn played_square<const N: usize>(parent: &Game<N>, child: &Game<N>) -> (usize, usize) {
    for row in 0..N {
        for col in 0..N {
            if parent.board[(row, col)].is_none() && child.board[(row, col)].is_some() {
                return (row, col);
            }
        }
    }
    unreachable!("child must differ from its parent by one move")
}
