//! Search tree node.

use crate::{Board, Move};

/// Snapshot of the game after a sequence of clicks from the root.
///
/// Even depths are to move for the maximizing agent, odd depths for the
/// opponent. `max_score` accumulates the agent's chain-size squares and
/// `min_score` subtracts the opponent's, so their sum is the running score
/// differential and the value of a terminal node.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SearchNode {
    pub board: Board,
    pub depth: u32,
    pub max_score: i64,
    pub min_score: i64,
    pub last_move: Option<Move>,
    /// Size of the chain removed by `last_move`; ordering scratch only.
    pub chain_size: usize,
}

impl SearchNode {
    pub fn root(board: Board) -> Self {
        Self {
            board,
            depth: 0,
            max_score: 0,
            min_score: 0,
            last_move: None,
            chain_size: 0,
        }
    }

    #[inline(always)]
    pub fn fruits_remaining(&self) -> usize {
        self.board.fruits_remaining()
    }

    #[inline(always)]
    pub fn is_max_turn(&self) -> bool {
        self.depth % 2 == 0
    }

    /// Accumulated differential; the value of the node when it is terminal.
    #[inline(always)]
    pub fn value(&self) -> i64 {
        self.max_score + self.min_score
    }

    #[inline]
    pub fn is_terminal(&self, depth_limit: u32) -> bool {
        self.fruits_remaining() == 0 || self.depth >= depth_limit
    }
}
