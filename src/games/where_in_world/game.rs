//! Location guessing session.

use serde::{Deserialize, Serialize};

use super::atlas::{Atlas, Country};
use super::geo::{haversine, Coordinate};
use crate::core::config::{DistanceUnit, LocationConfig};
use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;
use crate::rules::{GameResult, RulesEngine};

/// Answer to a recognized guess.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LocationFeedback {
    Correct {
        name: String,
    },
    Miss {
        /// Canonical name of the guessed country.
        name: String,
        /// Where the guessed country is, for highlighting.
        coordinate: Coordinate,
        same_continent: bool,
        /// Distance to the target, rounded to a whole unit.
        distance: u32,
        unit: DistanceUnit,
    },
}

impl LocationFeedback {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, LocationFeedback::Correct { .. })
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            LocationFeedback::Correct { name } => format!("Correct! It was {name}."),
            LocationFeedback::Miss {
                name,
                same_continent,
                distance,
                unit,
                ..
            } => {
                let continent = if *same_continent {
                    "Right continent"
                } else {
                    "Wrong continent"
                };
                format!("{name}: {continent}, {distance} {} away.", unit.suffix())
            }
        }
    }
}

/// Guess the hidden country; each miss reports how far off it was.
#[derive(Clone, Debug)]
pub struct LocationGame {
    atlas: Atlas,
    config: LocationConfig,
    rng: GameRng,
    target: usize,
    guessed: Vec<String>,
    solved: bool,
}

impl LocationGame {
    pub fn new(atlas: Atlas, config: LocationConfig, seed: u64) -> Result<Self> {
        let mut rng = GameRng::new(seed);
        let target = atlas.random_index(&mut rng)?;
        tracing::info!(seed, countries = atlas.len(), "location game started");

        Ok(Self {
            atlas,
            config,
            rng,
            target,
            guessed: Vec::new(),
            solved: false,
        })
    }

    /// Start with a fixed target country.
    pub fn with_target(atlas: Atlas, config: LocationConfig, target: &str, seed: u64) -> Result<Self> {
        let target = atlas
            .resolve_index(target)
            .ok_or_else(|| GameError::UnknownPlace(target.trim().to_string()))?;

        Ok(Self {
            atlas,
            config,
            rng: GameRng::new(seed),
            target,
            guessed: Vec::new(),
            solved: false,
        })
    }

    /// Check a typed country name against the target.
    pub fn guess(&mut self, input: &str) -> Result<LocationFeedback> {
        if self.solved {
            return Err(GameError::GameOver);
        }
        let idx = self
            .atlas
            .resolve_index(input)
            .ok_or_else(|| GameError::UnknownPlace(input.trim().to_string()))?;
        let (guessed, target) = match (self.atlas.get(idx), self.atlas.get(self.target)) {
            (Some(g), Some(t)) => (g, t),
            _ => return Err(GameError::UnknownPlace(input.trim().to_string())),
        };

        let name = guessed.canonical_name().to_string();
        if !self.guessed.contains(&name) {
            self.guessed.push(name.clone());
        }

        if idx == self.target {
            self.solved = true;
            tracing::info!(guesses = self.guessed.len(), "location found");
            return Ok(LocationFeedback::Correct { name });
        }

        let unit = self.config.unit;
        let distance = haversine(guessed.location, target.location, unit).round() as u32;
        let same_continent = guessed.continent == target.continent;
        tracing::debug!(%name, distance, same_continent, "location miss");

        Ok(LocationFeedback::Miss {
            name,
            coordinate: guessed.location,
            same_continent,
            distance,
            unit,
        })
    }

    /// Canonical names guessed so far, in first-guessed order.
    #[must_use]
    pub fn guessed(&self) -> &[String] {
        &self.guessed
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// The target, once found.
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Country> {
        if self.solved {
            self.atlas.get(self.target)
        } else {
            None
        }
    }

    /// Pick a new target and forget previous guesses.
    pub fn replay(&mut self) {
        let mut rng = self.rng.fork();
        // The atlas was non-empty when the game was created
        if let Ok(target) = self.atlas.random_index(&mut rng) {
            self.target = target;
        }
        self.rng = rng;
        self.guessed.clear();
        self.solved = false;
    }
}

impl RulesEngine for LocationGame {
    type Move = String;
    type Feedback = LocationFeedback;

    fn apply(&mut self, mv: String) -> Result<LocationFeedback> {
        self.guess(&mv)
    }

    fn result(&self) -> Option<GameResult> {
        self.solved.then_some(GameResult::Won)
    }

    fn reset(&mut self) {
        self.replay();
    }
}
