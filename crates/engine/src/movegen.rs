//! Child generation for a search node.
//!
//! One physical move is one chain, so the scan excludes every coordinate a
//! materialized chain consumed. Two strategies share the same scan:
//! `Sorted` materializes all children and orders them by chain size,
//! `Streamed` builds them one at a time as the search asks. Both yield the
//! same set of children for the same parent.

use fruit_core::{CandidateCursor, Exclusions, Move, SearchNode};
use serde::{Deserialize, Serialize};

use crate::apply::make_move;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildOrdering {
    /// Materialize every child, largest chain first.
    Sorted,
    /// Build children lazily in scan order.
    Streamed,
}

/// Children of `state` in the requested order.
///
/// `taken` is the exclusion set for this one expansion; the caller owns it
/// and must hand in a fresh (or cleared) set per parent.
pub fn generate_children<'a>(
    state: &'a SearchNode,
    ordering: ChildOrdering,
    taken: &'a mut Exclusions,
) -> Children<'a> {
    match ordering {
        ChildOrdering::Sorted => {
            let mut children = Vec::new();
            let mut cursor = CandidateCursor::new();
            while let Some(mv) = cursor.next_candidate(&state.board, taken) {
                children.push(make_move(state, mv, taken));
            }
            // stable: equal chains keep scan order
            children.sort_by(|a, b| b.chain_size.cmp(&a.chain_size));
            Children::Sorted(children.into_iter())
        }
        ChildOrdering::Streamed => Children::Streamed {
            state,
            cursor: CandidateCursor::new(),
            taken,
        },
    }
}

/// Distinct moves available from `state`, in scan order.
pub fn legal_moves(state: &SearchNode) -> Vec<Move> {
    let mut taken = Exclusions::new();
    generate_children(state, ChildOrdering::Streamed, &mut taken)
        .filter_map(|child| child.last_move)
        .collect()
}

/// Ordered child supplier; the search is written once against this iterator.
pub enum Children<'a> {
    Sorted(std::vec::IntoIter<SearchNode>),
    Streamed {
        state: &'a SearchNode,
        cursor: CandidateCursor,
        taken: &'a mut Exclusions,
    },
}

impl Children<'_> {
    pub fn ordering(&self) -> ChildOrdering {
        match self {
            Children::Sorted(_) => ChildOrdering::Sorted,
            Children::Streamed { .. } => ChildOrdering::Streamed,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = SearchNode;

    fn next(&mut self) -> Option<SearchNode> {
        let mut child = match self {
            Children::Sorted(children) => children.next()?,
            Children::Streamed {
                state,
                cursor,
                taken,
            } => {
                let mv = cursor.next_candidate(&state.board, taken)?;
                make_move(state, mv, taken)
            }
        };
        // ordering scratch is not part of the child's identity
        child.chain_size = 0;
        Some(child)
    }
}
