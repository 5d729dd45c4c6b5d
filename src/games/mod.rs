//! The games.
//!
//! Each game is a session type implementing [`RulesEngine`](crate::rules::RulesEngine)
//! plus the pure rule functions it is built on. Games share nothing but the
//! `core` building blocks.

pub mod blackjack;
pub mod flag_battle;
pub mod guessing;
pub mod higher_lower;
pub mod queens;
pub mod tic_tac_toe;
pub mod where_in_world;
pub mod wordle;
