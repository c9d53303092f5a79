//! Fruit core crate - fundamental types for the fruit-rage board game.

mod board;
mod error;
mod fruit;
mod input;
mod moves;
mod state;

pub use board::{Board, CandidateCursor, Candidates, MAX_SIZE};
pub use error::{InputError, Result};
pub use fruit::{Cell, Fruit, EMPTY_SYMBOL};
pub use input::{format_output, GameInput};
pub use moves::{Exclusions, Move};
pub use state::SearchNode;
