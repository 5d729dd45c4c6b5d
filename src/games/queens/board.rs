//! Queen placement rules and conflict detection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};

/// Row/column of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of a row-major cell index on a `size`-wide board.
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }
}

/// Colour-region labels for the region variant, one label per cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regions {
    size: usize,
    labels: Vec<char>,
}

impl Regions {
    /// Parse one string per row, one label character per cell.
    ///
    /// ```
    /// use arcade_rules::games::queens::{Position, Regions};
    ///
    /// let regions = Regions::from_rows(&["aab", "acb", "ccb"]).unwrap();
    /// assert_eq!(regions.label(Position::new(1, 1)), 'c');
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let size = rows.len();
        let mut labels = Vec::with_capacity(size * size);

        for (r, row) in rows.iter().enumerate() {
            let row: Vec<char> = row.as_ref().chars().filter(|c| !c.is_whitespace()).collect();
            if row.len() != size {
                return Err(GameError::Config(format!(
                    "region row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    size
                )));
            }
            labels.extend(row);
        }

        Ok(Self { size, labels })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn label(&self, pos: Position) -> char {
        self.labels[pos.index(self.size)]
    }

    /// Number of distinct region labels.
    #[must_use]
    pub fn count(&self) -> usize {
        self.labels.iter().collect::<BTreeSet<_>>().len()
    }
}

/// Whether two queens attack each other.
///
/// Queens conflict when they share a row, column or diagonal, or, when
/// `regions` is given, a region. A queen never conflicts with itself.
#[must_use]
pub fn are_conflicting(a: Position, b: Position, regions: Option<&Regions>) -> bool {
    if a == b {
        return false;
    }
    let same_row = a.row == b.row;
    let same_col = a.col == b.col;
    let same_diag = a.row.abs_diff(b.row) == a.col.abs_diff(b.col);
    let same_region = regions.is_some_and(|r| r.label(a) == r.label(b));

    same_row || same_col || same_diag || same_region
}

/// Result of a pairwise conflict scan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflicts {
    /// Cells (row-major indices) holding a queen involved in any conflict.
    pub cells: BTreeSet<usize>,
    /// Number of conflicting queen pairs.
    pub pairs: usize,
}

impl Conflicts {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs == 0
    }
}

/// Scan every pair of queens for conflicts.
pub fn find_conflicts(queens: &[Position], size: usize, regions: Option<&Regions>) -> Conflicts {
    let mut conflicts = Conflicts::default();

    for (i, &a) in queens.iter().enumerate() {
        for &b in &queens[i + 1..] {
            if are_conflicting(a, b, regions) {
                conflicts.cells.insert(a.index(size));
                conflicts.cells.insert(b.index(size));
                conflicts.pairs += 1;
            }
        }
    }

    conflicts
}
