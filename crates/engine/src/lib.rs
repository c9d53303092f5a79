//! fruit-engine - move generation for the fruit-rage board game.
//!
//! Provides chain clicks with incremental scoring, the sorted and streamed
//! child suppliers, move-ordering thresholds, and perft.

pub mod apply;
pub mod config;
pub mod movegen;
pub mod perft;

pub use apply::{apply_move, make_move};
pub use config::{OrderingMode, OrderingPolicy, SortRule};
pub use movegen::{generate_children, legal_moves, ChildOrdering, Children};
pub use perft::{count_moves, perft, perft_parallel};
