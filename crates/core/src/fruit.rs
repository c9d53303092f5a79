//! Fruit types and cell contents.

use serde::{Deserialize, Serialize};

/// Symbol used for an empty cell in the text encoding.
pub const EMPTY_SYMBOL: char = '*';

/// One of the ten fruit colors, encoded as the digits `0`..`9`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fruit(u8);

impl Fruit {
    pub const COUNT: u8 = 10;

    pub fn new(kind: u8) -> Option<Self> {
        (kind < Self::COUNT).then_some(Self(kind))
    }

    pub fn kind(self) -> u8 {
        self.0
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        symbol
            .to_digit(10)
            .and_then(|digit| Self::new(digit as u8))
    }

    pub fn symbol(self) -> char {
        (b'0' + self.0) as char
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Fruit(Fruit),
}

impl Cell {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        if symbol == EMPTY_SYMBOL {
            Some(Cell::Empty)
        } else {
            Fruit::from_symbol(symbol).map(Cell::Fruit)
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Fruit(fruit) => fruit.symbol(),
        }
    }

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline(always)]
    pub fn fruit(self) -> Option<Fruit> {
        match self {
            Cell::Empty => None,
            Cell::Fruit(fruit) => Some(fruit),
        }
    }
}

impl From<Fruit> for Cell {
    fn from(fruit: Fruit) -> Self {
        Cell::Fruit(fruit)
    }
}
