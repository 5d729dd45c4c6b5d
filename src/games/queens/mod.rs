//! Queens: place N queens so none attack each other.
//!
//! The region variant adds coloured regions; each region may hold at most
//! one queen.

mod board;
mod game;

pub use board::{are_conflicting, find_conflicts, Conflicts, Position, Regions};
pub use game::{QueensPuzzle, QueensStatus};
