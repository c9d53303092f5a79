use fruit_core::{Cell, Exclusions, Move, SearchNode};

/// Apply a click to a node and return the child node.
///
/// Clones the board, removes the chain under `mv`, applies gravity, and
/// credits `chain_size²` to the player who moved: added to `max_score` when
/// the parent is at an even depth, subtracted from `min_score` otherwise.
/// Every removed coordinate is recorded in `taken`.
pub fn make_move(state: &SearchNode, mv: Move, taken: &mut Exclusions) -> SearchNode {
    let mut board = state.board.clone();
    let chain_size = match board.get(mv.row(), mv.col()).and_then(Cell::fruit) {
        Some(fruit) => board.remove_chain_into(mv.row(), mv.col(), fruit, taken),
        None => 0,
    };
    board.apply_gravity();

    let gain = (chain_size * chain_size) as i64;
    let (max_score, min_score) = if state.is_max_turn() {
        (state.max_score + gain, state.min_score)
    } else {
        (state.max_score, state.min_score - gain)
    };

    SearchNode {
        board,
        depth: state.depth + 1,
        max_score,
        min_score,
        last_move: Some(mv),
        chain_size,
    }
}

/// [`make_move`] without exclusion bookkeeping, for one-off replays.
pub fn apply_move(state: &SearchNode, mv: Move) -> SearchNode {
    make_move(state, mv, &mut Exclusions::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fruit_core::Board;

    fn root(rows: &[&str]) -> SearchNode {
        SearchNode::root(Board::from_rows(rows).expect("valid board"))
    }

    #[test]
    fn test_max_move_adds_square() {
        let state = root(&["2**", "11*", "333"]);
        let mut taken = Exclusions::new();
        let child = make_move(&state, Move::new(1, 0), &mut taken);

        assert_eq!(child.chain_size, 2);
        assert_eq!(child.depth, 1);
        assert_eq!(child.max_score, 4);
        assert_eq!(child.min_score, 0);
        assert_eq!(child.last_move, Some(Move::new(1, 0)));
        assert_eq!(child.board.rows().collect::<Vec<_>>(), ["***", "2**", "333"]);
        assert_eq!(child.fruits_remaining(), 4);
        assert_eq!(taken.len(), 2);
        assert!(taken.contains(Move::new(1, 1)));
    }

    #[test]
    fn test_min_move_subtracts_square() {
        let mut state = root(&["12", "22"]);
        state.depth = 1;
        state.max_score = 4;
        let child = apply_move(&state, Move::new(1, 1));

        assert_eq!(child.chain_size, 3);
        assert_eq!(child.max_score, 4);
        assert_eq!(child.min_score, -9);
        assert_eq!(child.value(), -5);
        assert_eq!(child.depth, 2);
    }

    #[test]
    fn test_parent_is_untouched() {
        let state = root(&["12", "21"]);
        let before = state.clone();
        let _ = apply_move(&state, Move::new(0, 0));
        assert_eq!(state, before);
    }

    #[test]
    fn test_empty_cell_scores_nothing() {
        let state = root(&["1*", "11"]);
        let child = apply_move(&state, Move::new(0, 1));
        assert_eq!(child.chain_size, 0);
        assert_eq!(child.value(), 0);
        assert_eq!(child.board, state.board);
    }
}
