//! perft - leaf counts of the deduplicated move tree
//! a cheap oracle for exclusion bookkeeping and branching factor

use fruit_core::{Board, Exclusions, SearchNode};
use rayon::prelude::*;

use crate::movegen::{generate_children, ChildOrdering};

fn perft_node(state: &SearchNode, depth: u32) -> u64 {
    if depth == 0 || state.fruits_remaining() == 0 {
        return 1;
    }

    let mut taken = Exclusions::new();
    let children = generate_children(state, ChildOrdering::Streamed, &mut taken);
    if depth == 1 {
        return children.count() as u64;
    }
    children.map(|child| perft_node(&child, depth - 1)).sum()
}

/// perft - counts leaf nodes at `depth`; a cleared board is a leaf
pub fn perft(board: &Board, depth: u32) -> u64 {
    perft_node(&SearchNode::root(board.clone()), depth)
}

/// Parallel perft - splits top-level moves across threads
pub fn perft_parallel(board: &Board, depth: u32) -> u64 {
    let root = SearchNode::root(board.clone());
    if depth <= 1 || root.fruits_remaining() == 0 {
        return perft_node(&root, depth);
    }

    let mut taken = Exclusions::new();
    let children: Vec<SearchNode> =
        generate_children(&root, ChildOrdering::Streamed, &mut taken).collect();

    children
        .par_iter()
        .map(|child| perft_node(child, depth - 1))
        .sum()
}

/// Number of distinct moves (chains) on the board.
pub fn count_moves(board: &Board) -> usize {
    perft(board, 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).expect("valid board")
    }

    #[test]
    fn test_perft_depth_zero() {
        assert_eq!(perft(&board(&["12", "21"]), 0), 1);
    }

    #[test]
    fn test_count_moves_is_chain_count() {
        assert_eq!(count_moves(&board(&["11", "11"])), 1);
        assert_eq!(count_moves(&board(&["12", "21"])), 4);
        assert_eq!(count_moves(&board(&["11*", "122", "333"])), 3);
    }

    #[test]
    fn test_perft_depth_two() {
        // bottom clicks let a fruit fall next to its twin (2 replies each),
        // top clicks leave three singletons (3 replies each)
        let b = board(&["12", "21"]);
        assert_eq!(perft(&b, 2), 10);
    }

    #[test]
    fn test_cleared_board_is_leaf() {
        let b = board(&["11", "11"]);
        assert_eq!(perft(&b, 3), 1);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let b = board(&["1231", "2312", "3123", "1212"]);
        for depth in 0..4 {
            assert_eq!(perft_parallel(&b, depth), perft(&b, depth));
        }
    }
}
