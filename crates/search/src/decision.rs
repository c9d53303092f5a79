use fruit_core::{Board, Move, SearchNode};

/// Root window bound; `-INF` is `i64::MIN + 1`.
pub const INF: i64 = i64::MAX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, terminals included.
    pub nodes: u64,
    pub cutoffs: u64,
    pub depth_limit: u32,
}

impl SearchStats {
    pub(crate) fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Outcome of one root search.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    /// Root value: the agent's score minus the opponent's along the best line.
    pub score: i64,
    /// `None` only when the board has no fruit left.
    pub chosen: Option<Move>,
    /// Board after `chosen`, or the input board when there is no move.
    pub board: Board,
    pub stats: SearchStats,
    /// `false` when a deadline cut the search short.
    pub completed: bool,
}

/// Best root child seen so far. Strict `>` keeps the first of equal values.
#[derive(Debug)]
pub(crate) struct RootDecision {
    pub best_value: i64,
    pub best: Option<SearchNode>,
}

impl RootDecision {
    pub fn new() -> Self {
        Self {
            best_value: -INF,
            best: None,
        }
    }

    pub fn offer(&mut self, value: i64, child: SearchNode) -> bool {
        if value > self.best_value {
            self.best_value = value;
            self.best = Some(child);
            true
        } else {
            false
        }
    }

    /// Keeps a move on hand when the clock ran out before any root child
    /// finished: the unfinished child scored by what it has banked so far.
    pub fn fallback(&mut self, child: SearchNode) {
        if self.best.is_none() {
            self.best_value = child.value();
            self.best = Some(child);
        }
    }

    pub fn into_decision(
        self,
        score: i64,
        root: &SearchNode,
        stats: SearchStats,
        completed: bool,
    ) -> Decision {
        match self.best {
            Some(child) => Decision {
                score,
                chosen: child.last_move,
                board: child.board,
                stats,
                completed,
            },
            None => Decision {
                score: root.value(),
                chosen: None,
                board: root.board.clone(),
                stats,
                completed,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(max_score: i64, col: usize) -> SearchNode {
        let mut node = SearchNode::root(Board::new(2).expect("valid size"));
        node.max_score = max_score;
        node.last_move = Some(Move::new(1, col));
        node
    }

    #[test]
    fn test_first_equal_value_wins() {
        let mut root = RootDecision::new();
        assert!(root.offer(4, node(4, 0)));
        assert!(!root.offer(4, node(4, 1)));
        assert_eq!(root.best.and_then(|n| n.last_move), Some(Move::new(1, 0)));
    }

    #[test]
    fn test_fallback_only_fills_empty_record() {
        let mut root = RootDecision::new();
        root.fallback(node(9, 1));
        assert_eq!(root.best_value, 9);

        let mut root = RootDecision::new();
        root.offer(2, node(1, 0));
        root.fallback(node(9, 1));
        assert_eq!(root.best_value, 2);
        assert_eq!(root.best.and_then(|n| n.last_move), Some(Move::new(1, 0)));
    }

    #[test]
    fn test_empty_record_returns_root_board() {
        let root = SearchNode::root(Board::new(3).expect("valid size"));
        let decision = RootDecision::new().into_decision(
            -INF,
            &root,
            SearchStats::default(),
            true,
        );
        assert_eq!(decision.chosen, None);
        assert_eq!(decision.score, 0);
        assert_eq!(decision.board, root.board);
    }
}
