//! Structural errors raised while decoding boards and game input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum InputError {
    #[error("board size {size} is out of range (must be 1-{max})")]
    SizeOutOfRange { size: usize, max: usize },

    #[error("board is not square: row {row} has {got} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("unrecognized symbol '{symbol}' at row {row}, column {col}")]
    InvalidSymbol { symbol: char, row: usize, col: usize },

    #[error("missing {field} line")]
    MissingHeader { field: &'static str },

    #[error("invalid {field} '{value}'")]
    InvalidHeader { field: &'static str, value: String },

    #[error("expected {expected} board rows, found {got}")]
    MissingRows { expected: usize, got: usize },

    #[error("invalid move notation '{0}'")]
    InvalidMove(String),
}

pub type Result<T> = std::result::Result<T, InputError>;
