//! Depth-limited alpha-beta over the deduplicated move tree.
//!
//! Cutoff returns are deliberately asymmetric: a MAX node that fails high
//! returns `beta`, a MIN node that fails low returns `alpha`, and both return
//! their own bound when the loop runs out. Changing either return changes
//! which root move wins on some boards.

use std::time::Duration;

use fruit_core::{Board, Exclusions, SearchNode};
use fruit_engine::{generate_children, ChildOrdering, OrderingPolicy};
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::decision::{Decision, RootDecision, SearchStats, INF};
use crate::error::{Result, SearchError};
use crate::parallel;

/// Interior nodes between two reads of the wall clock.
const CLOCK_INTERVAL: u32 = 1024;

#[derive(Clone, Debug)]
pub struct SearchEngine {
    pub(crate) depth_limit: u32,
    pub(crate) ordering: OrderingPolicy,
    pub(crate) deadline: Option<Duration>,
    pub(crate) parallel: bool,
}

impl SearchEngine {
    pub fn new(depth_limit: u32) -> Result<Self> {
        if depth_limit == 0 {
            return Err(SearchError::ZeroDepth);
        }
        Ok(Self {
            depth_limit,
            ordering: OrderingPolicy::default(),
            deadline: None,
            parallel: false,
        })
    }

    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }

    /// Abort once `budget` has elapsed and keep the best finished root move.
    pub fn with_deadline(mut self, budget: Duration) -> Self {
        self.deadline = Some(budget);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn depth_limit(&self) -> u32 {
        self.depth_limit
    }

    pub fn decide(&self, board: &Board) -> Decision {
        let root = SearchNode::root(board.clone());
        let clock = Clock::start(self.deadline);

        let outcome = if self.parallel {
            parallel::search_root(self, &root, &clock)
        } else {
            let mut worker = Worker::new(self, root.board.size(), &clock);
            let (score, record) = worker.search_root(&root);
            RootOutcome {
                score,
                record,
                stats: worker.stats,
                completed: !worker.aborted,
            }
        };

        let mut stats = outcome.stats;
        stats.depth_limit = self.depth_limit;
        let decision = outcome
            .record
            .into_decision(outcome.score, &root, stats, outcome.completed);

        match decision.chosen {
            Some(mv) => info!(
                mv = %mv,
                score = decision.score,
                depth_limit = self.depth_limit,
                nodes = stats.nodes,
                cutoffs = stats.cutoffs,
                completed = decision.completed,
                "Search decided"
            ),
            None => warn!("No legal move: the board holds no fruit"),
        }
        decision
    }
}

pub(crate) struct RootOutcome {
    pub score: i64,
    pub record: RootDecision,
    pub stats: SearchStats,
    pub completed: bool,
}

/// One search thread's view: shared settings plus private counters.
pub(crate) struct Worker<'a> {
    depth_limit: u32,
    size: usize,
    ordering: &'a OrderingPolicy,
    clock: &'a Clock,
    until_poll: u32,
    pub stats: SearchStats,
    pub aborted: bool,
}

impl<'a> Worker<'a> {
    pub fn new(engine: &'a SearchEngine, size: usize, clock: &'a Clock) -> Self {
        Self {
            depth_limit: engine.depth_limit,
            size,
            ordering: &engine.ordering,
            clock,
            until_poll: 0,
            stats: SearchStats::default(),
            aborted: false,
        }
    }

    pub fn ordering_at(&self, node: &SearchNode) -> ChildOrdering {
        self.ordering
            .ordering_for(node.depth, self.depth_limit, self.size)
    }

    fn out_of_time(&mut self) -> bool {
        if self.aborted {
            return true;
        }
        self.aborted = if self.until_poll == 0 {
            self.until_poll = CLOCK_INTERVAL;
            self.clock.poll()
        } else {
            self.until_poll -= 1;
            self.clock.is_expired()
        };
        self.aborted
    }

    /// The root is a MAX node that also records the best child.
    pub fn search_root(&mut self, root: &SearchNode) -> (i64, RootDecision) {
        self.stats.nodes += 1;
        let mut record = RootDecision::new();
        if root.is_terminal(self.depth_limit) {
            return (root.value(), record);
        }

        let (mut alpha, beta) = (-INF, INF);
        let mut taken = Exclusions::new();
        for child in generate_children(root, self.ordering_at(root), &mut taken) {
            let value = self.evaluate_min(&child, alpha, beta);
            if self.aborted {
                warn!(mv = ?child.last_move, "Deadline reached, discarding unfinished root move");
                record.fallback(child);
                return (record.best_value, record);
            }
            debug!(mv = ?child.last_move, value, "Root move evaluated");

            alpha = alpha.max(value);
            record.offer(value, child);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                return (beta, record);
            }
        }
        (alpha, record)
    }

    pub fn evaluate_max(&mut self, node: &SearchNode, mut alpha: i64, beta: i64) -> i64 {
        self.stats.nodes += 1;
        if node.is_terminal(self.depth_limit) {
            return node.value();
        }
        if self.out_of_time() {
            return alpha;
        }

        let mut taken = Exclusions::new();
        for child in generate_children(node, self.ordering_at(node), &mut taken) {
            let value = self.evaluate_min(&child, alpha, beta);
            if self.aborted {
                return alpha;
            }
            alpha = alpha.max(value);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                return beta;
            }
        }
        alpha
    }

    pub fn evaluate_min(&mut self, node: &SearchNode, alpha: i64, mut beta: i64) -> i64 {
        self.stats.nodes += 1;
        if node.is_terminal(self.depth_limit) {
            return node.value();
        }
        if self.out_of_time() {
            return beta;
        }

        let mut taken = Exclusions::new();
        for child in generate_children(node, self.ordering_at(node), &mut taken) {
            let value = self.evaluate_max(&child, alpha, beta);
            if self.aborted {
                return beta;
            }
            beta = beta.min(value);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                return alpha;
            }
        }
        beta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fruit_core::Move;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).expect("valid board")
    }

    /// A node whose single chain clears the 2x2 board for 16 points.
    fn full_square(depth: u32) -> SearchNode {
        let mut node = SearchNode::root(board(&["11", "11"]));
        node.depth = depth;
        node
    }

    #[test]
    fn test_max_cutoff_returns_beta() {
        let engine = SearchEngine::new(1).expect("valid depth");
        let clock = Clock::start(None);
        let mut worker = Worker::new(&engine, 2, &clock);

        // the only child is worth 16, well above beta
        assert_eq!(worker.evaluate_max(&full_square(0), 0, 5), 5);
        assert_eq!(worker.stats.cutoffs, 1);

        // no cutoff: the raised alpha comes back
        assert_eq!(worker.evaluate_max(&full_square(0), 0, 20), 16);
        // every child below alpha: alpha itself comes back
        assert_eq!(worker.evaluate_max(&full_square(0), 20, 30), 20);
        assert_eq!(worker.stats.cutoffs, 1);
    }

    #[test]
    fn test_min_cutoff_returns_alpha() {
        let engine = SearchEngine::new(2).expect("valid depth");
        let clock = Clock::start(None);
        let mut worker = Worker::new(&engine, 2, &clock);

        // the opponent's only reply is worth -16, well below alpha
        assert_eq!(worker.evaluate_min(&full_square(1), -5, 10), -5);
        assert_eq!(worker.stats.cutoffs, 1);

        // no cutoff: the lowered beta comes back
        assert_eq!(worker.evaluate_min(&full_square(1), -20, 10), -16);
        // every child above beta: beta itself comes back
        assert_eq!(worker.evaluate_min(&full_square(1), -30, -20), -20);
        assert_eq!(worker.stats.cutoffs, 1);
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        assert_eq!(SearchEngine::new(0).unwrap_err(), SearchError::ZeroDepth);
    }

    #[test]
    fn test_single_chain_board() {
        let decision = SearchEngine::new(3)
            .expect("valid depth")
            .decide(&board(&["11", "11"]));
        assert_eq!(decision.chosen, Some(Move::new(1, 0)));
        assert_eq!(decision.score, 16);
        assert_eq!(decision.board.fruits_remaining(), 0);
        assert!(decision.completed);
    }

    #[test]
    fn test_depth_one_is_greedy() {
        // the 1s and the 2s both form chains of four; the first scanned wins
        let decision = SearchEngine::new(1)
            .expect("valid depth")
            .decide(&board(&["122", "132", "112"]));
        assert_eq!(decision.score, 16);
        assert_eq!(decision.chosen, Some(Move::new(2, 0)));
    }

    #[test]
    fn test_opponent_reply_is_subtracted() {
        // "12" over "21": every click leaves the opponent a reply worth 4 or 1
        let decision = SearchEngine::new(2)
            .expect("valid depth")
            .decide(&board(&["12", "21"]));
        // bottom-left click: 1 falls beside the other 1, opponent takes 4
        // top-left click: three singletons remain, opponent takes 1
        assert_eq!(decision.score, 0);
        assert_eq!(decision.chosen, Some(Move::new(0, 0)));
    }

    #[test]
    fn test_cleared_board_has_no_move() {
        let empty = board(&["**", "**"]);
        let decision = SearchEngine::new(4).expect("valid depth").decide(&empty);
        assert_eq!(decision.chosen, None);
        assert_eq!(decision.score, 0);
        assert_eq!(decision.board, empty);
        assert_eq!(decision.stats.nodes, 1);
        assert_eq!(decision.stats.depth_limit, 4);
    }

    #[test]
    fn test_expired_deadline_keeps_a_legal_move() {
        let decision = SearchEngine::new(4)
            .expect("valid depth")
            .with_deadline(Duration::ZERO)
            .decide(&board(&["121", "122", "211"]));
        assert!(!decision.completed);
        // first scanned chain, scored by what it banked
        assert_eq!(decision.chosen, Some(Move::new(2, 0)));
        assert_eq!(decision.score, 1);
    }
}
