//! Guess the secret number with a limited number of tries.
//!
//! After each wrong guess the player is told whether it was too high or too
//! low. Easy mode allows 10 tries, hard mode 5.

use serde::{Deserialize, Serialize};

use crate::core::config::GuessingConfig;
use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;
use crate::rules::{GameResult, RulesEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    /// Tries allowed at this difficulty.
    #[must_use]
    pub fn attempts(self, config: &GuessingConfig) -> u32 {
        match self {
            Difficulty::Easy => config.easy_attempts,
            Difficulty::Hard => config.hard_attempts,
        }
    }
}

/// Feedback for an accepted guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    Correct { answer: i64 },
    TooHigh { attempts_left: u32 },
    TooLow { attempts_left: u32 },
    /// Last try was wrong; the answer is revealed.
    OutOfAttempts { answer: i64 },
}

impl GuessOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            GuessOutcome::Correct { answer } => format!("You got it! The answer was {answer}."),
            GuessOutcome::TooHigh { .. } => "Too high. Try again.".to_string(),
            GuessOutcome::TooLow { .. } => "Too low. Try again.".to_string(),
            GuessOutcome::OutOfAttempts { answer } => {
                format!("Game over. The correct number was {answer}.")
            }
        }
    }
}

/// Parse a typed guess. Surrounding whitespace is ignored.
///
/// Decimals are accepted and truncated toward zero, so "4.5" guesses 4.
/// Empty input, words, and non-finite values are rejected.
///
/// ```
/// use arcade_rules::games::guessing::parse_guess;
///
/// assert_eq!(parse_guess(" 42 ").unwrap(), 42);
/// assert_eq!(parse_guess("4.5").unwrap(), 4);
/// assert_eq!(parse_guess("-7.9").unwrap(), -7);
/// assert!(parse_guess("inf").is_err());
/// ```
pub fn parse_guess(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }

    // 2^63: the first magnitude past i64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value.trunc().abs() < LIMIT => Ok(value.trunc() as i64),
        _ => Err(GameError::InvalidNumber(trimmed.to_string())),
    }
}

#[derive(Clone, Debug)]
pub struct GuessingGame {
    config: GuessingConfig,
    difficulty: Difficulty,
    rng: GameRng,
    secret: i64,
    attempts_left: u32,
    result: Option<GameResult>,
}

impl GuessingGame {
    pub fn new(config: GuessingConfig, difficulty: Difficulty, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = GameRng::new(seed);
        let secret = Self::draw_secret(&config, &mut rng);
        let attempts_left = difficulty.attempts(&config);
        tracing::info!(?difficulty, attempts_left, "number game started");

        Ok(Self {
            config,
            difficulty,
            rng,
            secret,
            attempts_left,
            result: None,
        })
    }

    fn draw_secret(config: &GuessingConfig, rng: &mut GameRng) -> i64 {
        rng.gen_range_i64(config.min..=config.max)
    }

    /// Check a typed guess.
    ///
    /// Input that isn't a number is rejected without costing a try.
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }
        let value = parse_guess(input)?;

        if value == self.secret {
            self.result = Some(GameResult::Won);
            return Ok(GuessOutcome::Correct { answer: self.secret });
        }

        self.attempts_left = self.attempts_left.saturating_sub(1);
        tracing::debug!(value, attempts_left = self.attempts_left, "wrong guess");

        if self.attempts_left == 0 {
            self.result = Some(GameResult::Lost);
            return Ok(GuessOutcome::OutOfAttempts { answer: self.secret });
        }
        if value > self.secret {
            Ok(GuessOutcome::TooHigh { attempts_left: self.attempts_left })
        } else {
            Ok(GuessOutcome::TooLow { attempts_left: self.attempts_left })
        }
    }

    #[must_use]
    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Inclusive range the secret is drawn from.
    #[must_use]
    pub fn range(&self) -> (i64, i64) {
        (self.config.min, self.config.max)
    }

    /// Start over at a (possibly different) difficulty.
    pub fn restart(&mut self, difficulty: Difficulty) {
        let mut rng = self.rng.fork();
        self.secret = Self::draw_secret(&self.config, &mut rng);
        self.rng = rng;
        self.difficulty = difficulty;
        self.attempts_left = difficulty.attempts(&self.config);
        self.result = None;
    }
}

impl RulesEngine for GuessingGame {
    type Move = String;
    type Feedback = GuessOutcome;

    fn apply(&mut self, mv: String) -> Result<GuessOutcome> {
        self.guess(&mv)
    }

    fn result(&self) -> Option<GameResult> {
        self.result
    }

    fn reset(&mut self) {
        self.restart(self.difficulty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(difficulty: Difficulty) -> GuessingGame {
        GuessingGame::new(GuessingConfig::default(), difficulty, 1234).unwrap()
    }

    #[test]
    fn test_secret_in_range() {
        for seed in 0..200 {
            let game = GuessingGame::new(GuessingConfig::default(), Difficulty::Easy, seed).unwrap();
            assert!((1..=100).contains(&game.secret));
        }
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = GuessingConfig { min: 10, max: 1, ..GuessingConfig::default() };
        let err = GuessingGame::new(config, Difficulty::Easy, 1).unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_attempts_by_difficulty() {
        assert_eq!(game(Difficulty::Easy).attempts_left(), 10);
        assert_eq!(game(Difficulty::Hard).attempts_left(), 5);
    }

    #[test]
    fn test_correct_guess() {
        let mut game = game(Difficulty::Hard);
        let secret = game.secret;
        let outcome = game.guess(&format!(" {secret} ")).unwrap();
        assert_eq!(outcome, GuessOutcome::Correct { answer: secret });
        assert_eq!(game.result(), Some(GameResult::Won));
        assert_eq!(game.attempts_left(), 5);
    }

    #[test]
    fn test_too_high_and_too_low() {
        let mut game = game(Difficulty::Easy);
        game.secret = 50;
        assert_eq!(game.guess("70").unwrap(), GuessOutcome::TooHigh { attempts_left: 9 });
        assert_eq!(game.guess("20").unwrap(), GuessOutcome::TooLow { attempts_left: 8 });
        assert_eq!(GuessOutcome::TooLow { attempts_left: 8 }.message(), "Too low. Try again.");
    }

    #[test]
    fn test_invalid_input_costs_nothing() {
        let mut game = game(Difficulty::Hard);
        assert_eq!(game.guess("abc").unwrap_err(), GameError::InvalidNumber("abc".into()));
        assert_eq!(game.guess("").unwrap_err(), GameError::InvalidNumber(String::new()));
        assert_eq!(game.guess("NaN").unwrap_err(), GameError::InvalidNumber("NaN".into()));
        assert_eq!(game.guess("1e400").unwrap_err(), GameError::InvalidNumber("1e400".into()));
        assert_eq!(game.attempts_left(), 5);
    }

    #[test]
    fn test_decimal_guess_is_truncated() {
        let mut game = game(Difficulty::Hard);
        game.secret = 4;
        assert_eq!(parse_guess("4.99").unwrap(), 4);
        assert_eq!(parse_guess("-0.5").unwrap(), 0);

        assert_eq!(game.guess("3.7").unwrap(), GuessOutcome::TooLow { attempts_left: 4 });
        assert_eq!(game.guess(" 4.5 ").unwrap(), GuessOutcome::Correct { answer: 4 });
    }

    #[test]
    fn test_run_out_of_attempts() {
        let mut game = game(Difficulty::Hard);
        game.secret = 50;
        for _ in 0..4 {
            game.guess("1").unwrap();
        }
        let outcome = game.guess("1").unwrap();
        assert_eq!(outcome, GuessOutcome::OutOfAttempts { answer: 50 });
        assert_eq!(outcome.message(), "Game over. The correct number was 50.");
        assert_eq!(game.attempts_left(), 0);
        assert_eq!(game.guess("50").unwrap_err(), GameError::GameOver);
    }

    #[test]
    fn test_restart_switches_difficulty() {
        let mut game = game(Difficulty::Hard);
        game.guess("x1").unwrap_err();
        game.restart(Difficulty::Easy);
        assert_eq!(game.difficulty(), Difficulty::Easy);
        assert_eq!(game.attempts_left(), 10);
        assert!(!game.is_over());
    }
}
