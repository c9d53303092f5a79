//! Text encoding of the game input and the decision output.
//!
//! Input: board size, player count, remaining seconds, then one row of
//! symbols per line. Output: the move notation, then the resulting rows.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};
use crate::{Board, Move};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameInput {
    pub size: usize,
    /// Informational only.
    pub players: u32,
    /// Seconds left on the agent's clock.
    pub time_remaining: f64,
    pub board: Board,
}

impl GameInput {
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().map(str::trim_end);

        let size: usize = parse_header(lines.next(), "board size")?;
        let players: u32 = parse_header(lines.next(), "player count")?;
        let time_remaining: f64 = parse_header(lines.next(), "remaining time")?;
        if !time_remaining.is_finite() {
            return Err(InputError::InvalidHeader {
                field: "remaining time",
                value: time_remaining.to_string(),
            });
        }

        let rows: Vec<&str> = lines.by_ref().take(size).collect();
        if rows.len() < size {
            return Err(InputError::MissingRows {
                expected: size,
                got: rows.len(),
            });
        }
        let board = Board::from_rows(&rows)?;

        Ok(Self {
            size,
            players,
            time_remaining,
            board,
        })
    }

    /// Number of fruits on the initial board.
    pub fn fruits_found(&self) -> usize {
        self.board.fruits_remaining()
    }
}

impl FromStr for GameInput {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_header<T: FromStr>(line: Option<&str>, field: &'static str) -> Result<T> {
    let line = line.ok_or(InputError::MissingHeader { field })?;
    let value = line.trim();
    value.parse().map_err(|_| InputError::InvalidHeader {
        field,
        value: value.to_string(),
    })
}

/// Encode a decision: the move line followed by the board rows.
/// An absent move encodes to an empty string.
pub fn format_output(chosen: Option<Move>, board: &Board) -> String {
    match chosen {
        Some(mv) => format!("{mv}\n{board}"),
        None => String::new(),
    }
}
