//! Rules engine trait for game sessions.
//!
//! Every game session implements `RulesEngine`:
//! - `apply` validates and applies one move, returning per-move feedback
//! - `result` reports whether the session has ended
//! - `reset` starts a fresh session with the same settings

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Head-to-head game won by one seat.
    Winner(PlayerId),
    /// Nobody won (full board, blackjack push).
    Draw,
    /// Solo game won (word found, puzzle solved, number guessed).
    Won,
    /// Solo game lost (out of turns, busted, wrong call).
    Lost,
}

impl GameResult {
    /// Check if a seat won a head-to-head game.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply` must leave the session untouched when it returns `Err`
/// - `apply` after the session ended returns `GameError::GameOver`
/// - `result` returns `None` while the session continues
pub trait RulesEngine {
    /// One player input (a guess, a click, a hit/stand).
    type Move;

    /// What the player is told about an accepted move.
    type Feedback;

    /// Validate and apply a move.
    fn apply(&mut self, mv: Self::Move) -> Result<Self::Feedback>;

    /// Check if the session is over.
    fn result(&self) -> Option<GameResult>;

    /// Start over with the same settings.
    fn reset(&mut self);

    fn is_over(&self) -> bool {
        self.result().is_some()
    }
}
