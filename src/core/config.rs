//! Game configuration types.
//!
//! Each game reads its tunables from a small serde struct whose `Default`
//! matches the classic rules. `ArcadeConfig` bundles them so a host can load
//! every game's settings from one JSON document:
//!
//! ```
//! use arcade_rules::core::ArcadeConfig;
//!
//! let config = ArcadeConfig::from_json(r#"{ "wordle": { "max_turns": 8 } }"#).unwrap();
//! assert_eq!(config.wordle.max_turns, 8);
//! assert_eq!(config.wordle.word_length, 5);
//! assert_eq!(config.guessing.easy_attempts, 10);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Word-guessing settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordleConfig {
    /// Letters per word.
    pub word_length: usize,
    /// Guesses allowed before the game is lost.
    pub max_turns: usize,
}

impl Default for WordleConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_turns: 6,
        }
    }
}

impl WordleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.word_length == 0 {
            return Err(GameError::Config("wordle.word_length must be positive".into()));
        }
        if self.max_turns == 0 {
            return Err(GameError::Config("wordle.max_turns must be positive".into()));
        }
        Ok(())
    }
}

/// Blackjack settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlackjackConfig {
    /// Dealer keeps drawing while below this total.
    pub dealer_stands_on: u32,
}

impl Default for BlackjackConfig {
    fn default() -> Self {
        Self { dealer_stands_on: 17 }
    }
}

impl BlackjackConfig {
    pub fn validate(&self) -> Result<()> {
        if !(2..=21).contains(&self.dealer_stands_on) {
            return Err(GameError::Config("blackjack.dealer_stands_on must be in 2..=21".into()));
        }
        Ok(())
    }
}

/// Number-guessing settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessingConfig {
    /// Smallest possible secret (inclusive).
    pub min: i64,
    /// Largest possible secret (inclusive).
    pub max: i64,
    pub easy_attempts: u32,
    pub hard_attempts: u32,
}

impl Default for GuessingConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 100,
            easy_attempts: 10,
            hard_attempts: 5,
        }
    }
}

impl GuessingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(GameError::Config("guessing.min must not exceed guessing.max".into()));
        }
        if self.easy_attempts == 0 || self.hard_attempts == 0 {
            return Err(GameError::Config("guessing attempts must be positive".into()));
        }
        Ok(())
    }
}

/// Flag battle settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagBattleConfig {
    /// Lives each player starts with.
    pub lives: u32,
}

impl Default for FlagBattleConfig {
    fn default() -> Self {
        Self { lives: 3 }
    }
}

impl FlagBattleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.lives == 0 {
            return Err(GameError::Config("flag_battle.lives must be positive".into()));
        }
        Ok(())
    }
}

/// Queens puzzle settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueensConfig {
    /// Side length of the board; also the number of queens to place.
    pub board_size: usize,
}

impl Default for QueensConfig {
    fn default() -> Self {
        Self { board_size: 8 }
    }
}

impl QueensConfig {
    /// Largest supported board side.
    pub const MAX_BOARD_SIZE: usize = 16;

    pub fn validate(&self) -> Result<()> {
        if !(1..=Self::MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(GameError::Config(format!(
                "queens.board_size must be in 1..={}",
                Self::MAX_BOARD_SIZE
            )));
        }
        Ok(())
    }
}

/// Unit the location game reports distances in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
}

impl DistanceUnit {
    /// Mean Earth radius in this unit.
    #[must_use]
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles => 3958.8,
            DistanceUnit::Kilometers => 6371.0,
        }
    }

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "miles",
            DistanceUnit::Kilometers => "km",
        }
    }
}

/// Location guesser settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    /// Unit distances are reported in.
    pub unit: DistanceUnit,
}

/// Settings for every game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub wordle: WordleConfig,
    pub blackjack: BlackjackConfig,
    pub guessing: GuessingConfig,
    pub flag_battle: FlagBattleConfig,
    pub queens: QueensConfig,
    pub location: LocationConfig,
}

impl ArcadeConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ArcadeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no game could be played with.
    pub fn validate(&self) -> Result<()> {
        self.wordle.validate()?;
        self.blackjack.validate()?;
        self.guessing.validate()?;
        self.flag_battle.validate()?;
        self.queens.validate()
    }
}
