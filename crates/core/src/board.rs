//! board representation - row-major cells, row 0 on top
//! fruit count maintained incrementally on every set/removal

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use crate::error::{InputError, Result};
use crate::fruit::{Cell, Fruit};
use crate::moves::{Exclusions, Move};

/// Largest supported board; the move notation has one letter per column.
pub const MAX_SIZE: usize = 26;

/// Square n×n fruit board.
/// `fruits_remaining` always equals the number of non-empty cells.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    fruits_remaining: usize,
}

impl Board {
    /// Empty board of the given size.
    pub fn new(size: usize) -> Result<Self> {
        check_size(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
            fruits_remaining: 0,
        })
    }

    /// Decode rows of symbols, top row first. Fails on anything that is not
    /// a square grid of known symbols.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let size = rows.len();
        let mut board = Self::new(size)?;
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let got = line.chars().count();
            if got != size {
                return Err(InputError::NotSquare {
                    row,
                    expected: size,
                    got,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol)
                    .ok_or(InputError::InvalidSymbol { symbol, row, col })?;
                board.set(row, col, cell);
            }
        }
        Ok(board)
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn fruits_remaining(&self) -> usize {
        self.fruits_remaining
    }

    /// Literal recount of non-empty cells, independent of the cached count.
    pub fn count_fruits(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Overwrite one cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row >= self.size || col >= self.size {
            return;
        }
        let idx = self.index(row, col);
        let old = self.cells[idx];
        match (old.is_empty(), cell.is_empty()) {
            (true, false) => self.fruits_remaining += 1,
            (false, true) => self.fruits_remaining -= 1,
            _ => {}
        }
        self.cells[idx] = cell;
    }

    /// Remove the 4-connected chain of `fruit` containing `(row, col)`.
    /// Returns the number of cells removed; 0 when the start is out of range,
    /// empty, or holds a different fruit.
    pub fn remove_chain(&mut self, row: usize, col: usize, fruit: Fruit) -> usize {
        self.remove_chain_with(row, col, fruit, |_| {})
    }

    /// Like [`Board::remove_chain`], also recording every removed cell.
    pub fn remove_chain_into(
        &mut self,
        row: usize,
        col: usize,
        fruit: Fruit,
        taken: &mut Exclusions,
    ) -> usize {
        self.remove_chain_with(row, col, fruit, |mv| {
            taken.insert(mv);
        })
    }

    /// Flood fill on an explicit stack so recursion depth never scales with
    /// chain length. `on_remove` sees each removed coordinate exactly once.
    pub fn remove_chain_with<F>(
        &mut self,
        row: usize,
        col: usize,
        fruit: Fruit,
        mut on_remove: F,
    ) -> usize
    where
        F: FnMut(Move),
    {
        let target = Cell::Fruit(fruit);
        if self.get(row, col) != Some(target) {
            return 0;
        }

        let mut removed = 0;
        let mut stack: SmallVec<[(usize, usize); 32]> = SmallVec::new();
        self.take(row, col);
        stack.push((row, col));

        while let Some((r, c)) = stack.pop() {
            removed += 1;
            on_remove(Move::new(r, c));

            let neighbors = [
                (r.wrapping_sub(1), c),
                (r + 1, c),
                (r, c.wrapping_sub(1)),
                (r, c + 1),
            ];
            for (nr, nc) in neighbors {
                // wrapping_sub underflow lands far out of range and fails get()
                if self.get(nr, nc) == Some(target) {
                    self.take(nr, nc);
                    stack.push((nr, nc));
                }
            }
        }

        removed
    }

    #[inline(always)]
    fn take(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Empty;
        self.fruits_remaining -= 1;
    }

    /// Compact every column downward, keeping the relative order of fruits.
    pub fn apply_gravity(&mut self) {
        let n = self.size;
        for col in 0..n {
            let mut write = n;
            for row in (0..n).rev() {
                let cell = self.cells[row * n + col];
                if !cell.is_empty() {
                    write -= 1;
                    if write != row {
                        self.cells[write * n + col] = cell;
                        self.cells[row * n + col] = Cell::Empty;
                    }
                }
            }
        }
    }

    /// True when no empty cell sits directly below a fruit.
    pub fn is_settled(&self) -> bool {
        let n = self.size;
        (0..n).all(|col| {
            (1..n).all(|row| {
                let below = self.cells[row * n + col];
                let above = self.cells[(row - 1) * n + col];
                !(below.is_empty() && !above.is_empty())
            })
        })
    }

    /// Every non-empty, non-excluded coordinate, bottom row first and left to right.
    pub fn candidates<'a>(&'a self, excluded: &'a Exclusions) -> Candidates<'a> {
        Candidates {
            board: self,
            excluded,
            cursor: CandidateCursor::new(),
        }
    }

    /// Encoded rows, top row first.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
    }
}

fn check_size(size: usize) -> Result<()> {
    if size == 0 || size > MAX_SIZE {
        return Err(InputError::SizeOutOfRange {
            size,
            max: MAX_SIZE,
        });
    }
    Ok(())
}

/// Resumable scan position over a board in candidate order.
///
/// Holds no borrows, so the owner may grow the exclusion set between calls;
/// a coordinate excluded before the scan reaches it is skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct CandidateCursor {
    next: usize,
}

impl CandidateCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_candidate(&mut self, board: &Board, excluded: &Exclusions) -> Option<Move> {
        let n = board.size;
        while self.next < n * n {
            let row = n - 1 - self.next / n;
            let col = self.next % n;
            self.next += 1;

            if board.cells[row * n + col].is_empty() {
                continue;
            }
            let mv = Move::new(row, col);
            if !excluded.contains(mv) {
                return Some(mv);
            }
        }
        None
    }
}

pub struct Candidates<'a> {
    board: &'a Board,
    excluded: &'a Exclusions,
    cursor: CandidateCursor,
}

impl Iterator for Candidates<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        self.cursor.next_candidate(self.board, self.excluded)
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<String> = self.rows().collect();
        rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<String> = Vec::deserialize(deserializer)?;
        Board::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
