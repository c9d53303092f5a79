use fruit_core::{Board, Exclusions, SearchNode};
use fruit_engine::{generate_children, ChildOrdering};

/// Root value by plain minimax, no pruning and no deadline. Exponential;
/// meant for small boards and as a check on the pruned search.
pub fn minimax_value(board: &Board, depth_limit: u32) -> i64 {
    minimax(&SearchNode::root(board.clone()), depth_limit)
}

fn minimax(node: &SearchNode, depth_limit: u32) -> i64 {
    if node.is_terminal(depth_limit) {
        return node.value();
    }

    let mut taken = Exclusions::new();
    let values = generate_children(node, ChildOrdering::Streamed, &mut taken)
        .map(|child| minimax(&child, depth_limit));
    let best = if node.is_max_turn() {
        values.max()
    } else {
        values.min()
    };
    // a non-terminal node always has at least one fruit, hence a child
    best.unwrap_or_else(|| node.value())
}
