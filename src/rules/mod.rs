//! Rules engine trait for game implementations.
//!
//! Each game implements `RulesEngine` to define:
//! - How a move is validated and applied
//! - What feedback the player gets
//! - Win/loss conditions

pub mod engine;

pub use engine::{GameResult, RulesEngine};
