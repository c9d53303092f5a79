//! Move-ordering thresholds.
//!
//! Sorting children by chain size exposes cutoffs earlier but costs a full
//! materialization of the child list, so it only pays off near the root of
//! deep searches on larger boards. None of these settings change the value
//! a search returns.

use serde::{Deserialize, Serialize};

use crate::movegen::ChildOrdering;

/// Sort when `depth_limit >= min_depth_limit` and the board size lies in
/// `min_size..=max_size` (`max_size = None` is unbounded).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRule {
    pub min_depth_limit: u32,
    pub min_size: usize,
    #[serde(default)]
    pub max_size: Option<usize>,
}

impl SortRule {
    pub fn applies(&self, depth_limit: u32, size: usize) -> bool {
        depth_limit >= self.min_depth_limit
            && size >= self.min_size
            && self.max_size.map_or(true, |max| size <= max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingMode {
    /// Follow the root/reply rules.
    #[default]
    Adaptive,
    AlwaysSorted,
    AlwaysStreamed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingPolicy {
    pub mode: OrderingMode,
    /// Rules for the root (depth 0); any match sorts.
    pub root: Vec<SortRule>,
    /// Rules for the opponent's first reply (depth 1); any match sorts.
    pub reply: Vec<SortRule>,
}

impl OrderingPolicy {
    pub fn always(ordering: ChildOrdering) -> Self {
        let mode = match ordering {
            ChildOrdering::Sorted => OrderingMode::AlwaysSorted,
            ChildOrdering::Streamed => OrderingMode::AlwaysStreamed,
        };
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Strategy for expanding a node at `depth`.
    pub fn ordering_for(&self, depth: u32, depth_limit: u32, size: usize) -> ChildOrdering {
        let sorted = match self.mode {
            OrderingMode::AlwaysSorted => true,
            OrderingMode::AlwaysStreamed => false,
            OrderingMode::Adaptive => {
                let rules = match depth {
                    0 => &self.root,
                    1 => &self.reply,
                    _ => return ChildOrdering::Streamed,
                };
                rules.iter().any(|rule| rule.applies(depth_limit, size))
            }
        };
        if sorted {
            ChildOrdering::Sorted
        } else {
            ChildOrdering::Streamed
        }
    }
}

impl Default for OrderingPolicy {
    fn default() -> Self {
        Self {
            mode: OrderingMode::Adaptive,
            root: vec![SortRule {
                min_depth_limit: 3,
                min_size: 6,
                max_size: None,
            }],
            reply: vec![
                SortRule {
                    min_depth_limit: 5,
                    min_size: 7,
                    max_size: Some(15),
                },
                SortRule {
                    min_depth_limit: 3,
                    min_size: 16,
                    max_size: None,
                },
            ],
        }
    }
}
