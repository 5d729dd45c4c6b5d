//! Higher or Lower: does B have more followers than A?
//!
//! A correct call scores a point and B slides over to become the new A.
//! One wrong call ends the run.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;
use crate::rules::{GameResult, RulesEngine};

/// A person to compare.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub description: String,
    pub country: String,
    /// Followers, in millions.
    pub follower_count: f64,
    /// Background image path, if any.
    #[serde(default)]
    pub image: Option<String>,
}

impl Profile {
    /// Parse a JSON array of profiles.
    pub fn list_from_json(json: &str) -> Result<Vec<Profile>> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Higher,
    Lower,
}

impl Choice {
    /// Whether this call is right for the pair. Ties count as higher.
    #[must_use]
    pub fn is_correct(self, a: f64, b: f64) -> bool {
        match self {
            Choice::Higher => b >= a,
            Choice::Lower => b < a,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallOutcome {
    Correct { score: u32 },
    Wrong { final_score: u32 },
}

#[derive(Clone, Debug)]
pub struct HigherLower {
    profiles: Vec<Profile>,
    rng: GameRng,
    a: usize,
    b: usize,
    score: u32,
    over: bool,
}

impl HigherLower {
    pub fn new(profiles: Vec<Profile>, seed: u64) -> Result<Self> {
        let mut rng = GameRng::new(seed);
        let (a, b) = Self::deal(profiles.len(), &mut rng)?;
        tracing::info!(seed, profiles = profiles.len(), "higher/lower started");

        Ok(Self {
            profiles,
            rng,
            a,
            b,
            score: 0,
            over: false,
        })
    }

    fn deal(len: usize, rng: &mut GameRng) -> Result<(usize, usize)> {
        let not_enough = GameError::NotEnoughEntries { needed: 2, available: len };
        if len < 2 {
            return Err(not_enough);
        }
        let a = rng.gen_range_usize(0..len);
        let b = rng.gen_index_except(len, a).ok_or(not_enough)?;
        Ok((a, b))
    }

    /// The shown profile.
    #[must_use]
    pub fn a(&self) -> &Profile {
        &self.profiles[self.a]
    }

    /// The profile being guessed about.
    #[must_use]
    pub fn b(&self) -> &Profile {
        &self.profiles[self.b]
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn call(&mut self, choice: Choice) -> Result<CallOutcome> {
        if self.over {
            return Err(GameError::GameOver);
        }
        let (a, b) = (self.a().follower_count, self.b().follower_count);

        if !choice.is_correct(a, b) {
            self.over = true;
            tracing::info!(score = self.score, "higher/lower over");
            return Ok(CallOutcome::Wrong { final_score: self.score });
        }

        self.score += 1;
        self.a = self.b;
        if let Some(next) = self.rng.gen_index_except(self.profiles.len(), self.a) {
            self.b = next;
        }
        tracing::debug!(score = self.score, "correct call");
        Ok(CallOutcome::Correct { score: self.score })
    }
}

impl RulesEngine for HigherLower {
    type Move = Choice;
    type Feedback = CallOutcome;

    fn apply(&mut self, mv: Choice) -> Result<CallOutcome> {
        self.call(mv)
    }

    fn result(&self) -> Option<GameResult> {
        self.over.then_some(GameResult::Lost)
    }

    fn reset(&mut self) {
        let mut rng = self.rng.fork();
        if let Ok((a, b)) = Self::deal(self.profiles.len(), &mut rng) {
            self.a = a;
            self.b = b;
        }
        self.rng = rng;
        self.score = 0;
        self.over = false;
    }
}
