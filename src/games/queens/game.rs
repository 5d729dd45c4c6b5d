//! Queens puzzle session.

use serde::{Deserialize, Serialize};

use super::board::{find_conflicts, Conflicts, Position, Regions};
use crate::core::config::QueensConfig;
use crate::core::error::{GameError, Result};
use crate::rules::{GameResult, RulesEngine};

/// Board summary after a toggle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueensStatus {
    /// Whether the toggle placed (true) or removed (false) a queen.
    pub placed: bool,
    pub queens: usize,
    pub conflicts: Conflicts,
    pub solved: bool,
}

/// An N-Queens board the player fills by clicking cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueensPuzzle {
    size: usize,
    cells: Vec<bool>,
    regions: Option<Regions>,
}

impl QueensPuzzle {
    /// Classic puzzle: no two queens share a row, column or diagonal.
    pub fn new(config: &QueensConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            size: config.board_size,
            cells: vec![false; config.board_size * config.board_size],
            regions: None,
        })
    }

    /// Region variant: additionally, no two queens share a region.
    pub fn with_regions(regions: Regions) -> Result<Self> {
        let size = regions.size();
        if size == 0 {
            return Err(GameError::Config("region map is empty".into()));
        }
        Ok(Self {
            size,
            cells: vec![false; size * size],
            regions: Some(regions),
        })
    }

    /// Place or remove a queen on a row-major cell.
    ///
    /// Placing is refused once `size` queens are on the board.
    pub fn toggle(&mut self, index: usize) -> Result<QueensStatus> {
        if self.is_solved() {
            return Err(GameError::GameOver);
        }
        let cells = self.cells.len();
        let queens = self.queen_count();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::OutOfBounds { index, cells })?;

        let placed = if *cell {
            *cell = false;
            false
        } else {
            if queens >= self.size {
                return Err(GameError::QueenLimit(self.size));
            }
            *cell = true;
            true
        };

        let status = self.status(placed);
        tracing::debug!(index, placed, queens = status.queens, pairs = status.conflicts.pairs, "queen toggled");
        Ok(status)
    }

    fn status(&self, placed: bool) -> QueensStatus {
        let conflicts = self.conflicts();
        let queens = self.queen_count();
        QueensStatus {
            placed,
            queens,
            solved: queens == self.size && conflicts.is_empty(),
            conflicts,
        }
    }

    /// Positions of every placed queen, row-major.
    #[must_use]
    pub fn queens(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &q)| q)
            .map(|(i, _)| Position::from_index(i, self.size))
            .collect()
    }

    #[must_use]
    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|&&q| q).count()
    }

    #[must_use]
    pub fn has_queen(&self, index: usize) -> bool {
        self.cells.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn conflicts(&self) -> Conflicts {
        find_conflicts(&self.queens(), self.size, self.regions.as_ref())
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.queen_count() == self.size && self.conflicts().is_empty()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn regions(&self) -> Option<&Regions> {
        self.regions.as_ref()
    }

    /// Remove every queen.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = false);
    }
}

impl RulesEngine for QueensPuzzle {
    type Move = usize;
    type Feedback = QueensStatus;

    fn apply(&mut self, mv: usize) -> Result<QueensStatus> {
        self.toggle(mv)
    }

    fn result(&self) -> Option<GameResult> {
        self.is_solved().then_some(GameResult::Won)
    }

    fn reset(&mut self) {
        self.clear();
    }
}
