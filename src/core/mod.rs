//! Shared building blocks: RNG, player seats, errors, configuration.
//!
//! Nothing in here knows about a particular game.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    ArcadeConfig, BlackjackConfig, DistanceUnit, FlagBattleConfig, GuessingConfig, LocationConfig,
    QueensConfig, WordleConfig,
};
pub use error::{GameError, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
