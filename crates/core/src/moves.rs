//! Move coordinates, move notation and the per-expansion exclusion set.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// A click on the cell at `(row, col)`; row 0 is the top of the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row <= u8::MAX as usize && col <= u8::MAX as usize);
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    #[inline(always)]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline(always)]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Column letter followed by the 1-based row, e.g. `(0, 1)` is `B1`.
    pub fn notation(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row as usize + 1)
    }
}

impl FromStr for Move {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InputError::InvalidMove(s.to_string());
        let mut chars = s.chars();
        let letter = chars.next().filter(char::is_ascii_uppercase).ok_or_else(invalid)?;
        let row: usize = chars.as_str().parse().map_err(|_| invalid())?;
        if row == 0 || row > crate::board::MAX_SIZE {
            return Err(invalid());
        }
        Ok(Move::new(row - 1, (letter as u8 - b'A') as usize))
    }
}

/// Coordinates already consumed by a chain during one parent's expansion.
///
/// Every cell of a removed chain yields the same child board, so once a move
/// is materialized its whole chain is excluded from the rest of the scan.
/// Owned by a single expansion call and dropped when that call finishes.
#[derive(Clone, Debug, Default)]
pub struct Exclusions {
    taken: FxHashSet<Move>,
}

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn insert(&mut self, mv: Move) -> bool {
        self.taken.insert(mv)
    }

    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        self.taken.contains(&mv)
    }

    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }

    pub fn clear(&mut self) {
        self.taken.clear();
    }
}

impl Extend<Move> for Exclusions {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.taken.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation() {
        assert_eq!(Move::new(0, 0).notation(), "A1");
        assert_eq!(Move::new(0, 1).notation(), "B1");
        assert_eq!(Move::new(9, 25).notation(), "Z10");
    }

    #[test]
    fn test_parse_notation() {
        assert_eq!("B1".parse::<Move>(), Ok(Move::new(0, 1)));
        assert_eq!("C12".parse::<Move>(), Ok(Move::new(11, 2)));
        assert!("b1".parse::<Move>().is_err());
        assert!("A0".parse::<Move>().is_err());
        assert!("A".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
    }

    #[test]
    fn test_exclusions() {
        let mut taken = Exclusions::new();
        assert!(taken.is_empty());
        assert!(taken.insert(Move::new(1, 2)));
        assert!(!taken.insert(Move::new(1, 2)));
        taken.extend([Move::new(0, 0), Move::new(2, 2)]);
        assert_eq!(taken.len(), 3);
        assert!(taken.contains(Move::new(2, 2)));
        taken.clear();
        assert!(!taken.contains(Move::new(2, 2)));
    }
}
