//! fruit-search - adversarial search over fruit-rage boards.
//!
//! Depth-limited alpha-beta with chain-size move ordering near the root, an
//! optional wall-clock deadline, and an optional parallel root split. Plain
//! minimax is kept alongside for analysis.

mod alphabeta;
mod clock;
mod decision;
mod error;
mod minimax;
mod parallel;

pub use alphabeta::SearchEngine;
pub use decision::{Decision, SearchStats, INF};
pub use error::{Result, SearchError};
pub use minimax::minimax_value;

use fruit_core::Board;

/// Searches `board` to `depth_limit` plies with the default ordering.
pub fn decide(board: &Board, depth_limit: u32) -> Result<Decision> {
    Ok(SearchEngine::new(depth_limit)?.decide(board))
}
