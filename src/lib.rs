//! # arcade-rules
//!
//! Rules for a collection of small browser games: Wordle, Blackjack,
//! Tic-Tac-Toe, a number guessing game, Flag Battle, Where in the World,
//! Queens and Higher or Lower.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: No rendering. Sessions expose exactly what a page needs
//!    to draw (hidden dealer card, conflicting cells, canonical names).
//!
//! 2. **Deterministic**: Every session takes a `u64` seed. The same seed
//!    deals the same deck and picks the same secret.
//!
//! 3. **Reject, Don't Mutate**: A move that fails validation returns a
//!    `GameError` and leaves the session exactly as it was.
//!
//! ## Modules
//!
//! - `core`: RNG, player seats, errors, configuration
//! - `rules`: RulesEngine trait every session implements
//! - `data`: Bundled word list, country atlas and profiles
//! - `games`: One module per game
//! - `catalog`: The landing page list
//!
//! ## Example
//!
//! ```
//! use arcade_rules::games::tic_tac_toe::{MoveOutcome, TicTacToe};
//! use arcade_rules::{GameResult, PlayerId, RulesEngine};
//!
//! let mut game = TicTacToe::new();
//! for cell in [0, 3, 1, 4] {
//!     game.place(cell).unwrap();
//! }
//! assert!(matches!(game.place(2).unwrap(), MoveOutcome::Win { .. }));
//! assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::FIRST)));
//! ```

pub mod catalog;
pub mod core;
pub mod data;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{ArcadeConfig, GameError, GameRng, PlayerId, PlayerMap, Result};

pub use crate::catalog::GameKind;

pub use crate::rules::{GameResult, RulesEngine};
