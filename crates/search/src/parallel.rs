//! Young-brothers-wait split at the root.
//!
//! The eldest root child is searched alone to seed alpha; its younger
//! brothers then run on the rayon pool against a shared alpha that only
//! grows. Each brother's window opens one point below the alpha it read, so
//! a result that reaches that alpha is exact and a tie still competes. A
//! result below it was clamped and is only a bound. Exact results are
//! offered in scan order, so the lowest-index best move wins regardless of
//! thread timing.

use std::sync::atomic::{AtomicI64, Ordering};

use fruit_core::{Exclusions, SearchNode};
use fruit_engine::generate_children;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::alphabeta::{RootOutcome, SearchEngine, Worker};
use crate::clock::Clock;
use crate::decision::{RootDecision, SearchStats, INF};

struct Brother {
    child: SearchNode,
    /// `Some` when the value is exact and reached the starting alpha.
    value: Option<i64>,
    stats: SearchStats,
    aborted: bool,
}

pub(crate) fn search_root(engine: &SearchEngine, root: &SearchNode, clock: &Clock) -> RootOutcome {
    let size = root.board.size();
    let mut eldest = Worker::new(engine, size, clock);
    eldest.stats.nodes += 1;
    let mut record = RootDecision::new();

    if root.is_terminal(engine.depth_limit) {
        return RootOutcome {
            score: root.value(),
            record,
            stats: eldest.stats,
            completed: true,
        };
    }

    let mut taken = Exclusions::new();
    let mut children = generate_children(root, eldest.ordering_at(root), &mut taken)
        .collect::<Vec<_>>()
        .into_iter();

    let Some(first) = children.next() else {
        return RootOutcome {
            score: root.value(),
            record,
            stats: eldest.stats,
            completed: true,
        };
    };

    let first_value = eldest.evaluate_min(&first, -INF, INF);
    let mut stats = eldest.stats;
    if eldest.aborted {
        warn!(mv = ?first.last_move, "Deadline reached, discarding unfinished root move");
        record.fallback(first);
        return RootOutcome {
            score: record.best_value,
            record,
            stats,
            completed: false,
        };
    }
    debug!(mv = ?first.last_move, value = first_value, "Root move evaluated");
    record.offer(first_value, first);

    let alpha = AtomicI64::new(first_value);
    let brothers: Vec<Brother> = children
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|child| {
            let mut worker = Worker::new(engine, size, clock);
            if clock.is_expired() {
                return Brother {
                    child,
                    value: None,
                    stats: worker.stats,
                    aborted: true,
                };
            }

            let start = alpha.load(Ordering::Acquire);
            let value = worker.evaluate_min(&child, start.saturating_sub(1), INF);
            let exact = !worker.aborted && value >= start;
            if exact {
                alpha.fetch_max(value, Ordering::AcqRel);
            }
            Brother {
                child,
                value: exact.then_some(value),
                stats: worker.stats,
                aborted: worker.aborted,
            }
        })
        .collect();

    let mut completed = true;
    for brother in brothers {
        stats.merge(&brother.stats);
        if brother.aborted {
            completed = false;
            continue;
        }
        if let Some(value) = brother.value {
            debug!(mv = ?brother.child.last_move, value, "Root move evaluated");
            record.offer(value, brother.child);
        }
    }
    if !completed {
        warn!("Deadline reached, discarding unfinished root moves");
    }

    RootOutcome {
        score: record.best_value,
        record,
        stats,
        completed,
    }
}
