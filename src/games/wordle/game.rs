//! Word-guessing session.

use serde::{Deserialize, Serialize};

use super::feedback::{evaluate_guess, is_solved, Feedback, KeyboardState};
use crate::core::config::WordleConfig;
use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;
use crate::data::WordList;
use crate::rules::{GameResult, RulesEngine};

/// One accepted guess and its feedback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub word: String,
    pub feedback: Feedback,
}

/// A single word-guessing game.
///
/// ```
/// use arcade_rules::data::WordList;
/// use arcade_rules::games::wordle::WordleGame;
/// use arcade_rules::core::WordleConfig;
/// use arcade_rules::rules::{GameResult, RulesEngine};
///
/// let words = WordList::from_words(["crane", "slate", "adore"], 5);
/// let mut game = WordleGame::with_answer(words, WordleConfig::default(), "slate", 1).unwrap();
///
/// assert!(game.submit_guess("crane").is_ok());
/// assert!(game.submit_guess("slate").is_ok());
/// assert_eq!(game.result(), Some(GameResult::Won));
/// ```
#[derive(Clone, Debug)]
pub struct WordleGame {
    config: WordleConfig,
    words: WordList,
    rng: GameRng,
    answer: String,
    guesses: Vec<GuessRecord>,
    keyboard: KeyboardState,
    result: Option<GameResult>,
}

impl WordleGame {
    /// Start a game with a random answer drawn from `words`.
    pub fn new(words: WordList, config: WordleConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = GameRng::new(seed);
        let answer = Self::pick_answer(&words, &config, &mut rng)?;
        tracing::info!(seed, words = words.len(), "word game started");

        Ok(Self {
            config,
            words,
            rng,
            answer,
            guesses: Vec::new(),
            keyboard: KeyboardState::new(),
            result: None,
        })
    }

    /// Start a game with a fixed answer (daily puzzle, tests).
    ///
    /// The answer doesn't need to be in the word list but must have the
    /// configured length.
    pub fn with_answer(words: WordList, config: WordleConfig, answer: &str, seed: u64) -> Result<Self> {
        config.validate()?;
        let answer = answer.trim().to_ascii_lowercase();
        let len = answer.chars().count();
        if len != config.word_length {
            return Err(GameError::WrongLength {
                expected: config.word_length,
                actual: len,
            });
        }

        Ok(Self {
            config,
            words,
            rng: GameRng::new(seed),
            answer,
            guesses: Vec::new(),
            keyboard: KeyboardState::new(),
            result: None,
        })
    }

    fn pick_answer(words: &WordList, config: &WordleConfig, rng: &mut GameRng) -> Result<String> {
        if words.word_length() != config.word_length {
            return Err(GameError::Config(format!(
                "word list holds {}-letter words, game needs {}",
                words.word_length(),
                config.word_length
            )));
        }
        words
            .choose(rng)
            .map(str::to_string)
            .ok_or(GameError::NotEnoughEntries { needed: 1, available: 0 })
    }

    /// Validate and score a guess.
    ///
    /// Rejected guesses don't use up a turn.
    pub fn submit_guess(&mut self, guess: &str) -> Result<Feedback> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }

        let guess = guess.trim().to_ascii_lowercase();
        let len = guess.chars().count();
        if len != self.config.word_length {
            return Err(GameError::WrongLength {
                expected: self.config.word_length,
                actual: len,
            });
        }
        if !self.words.contains(&guess) {
            return Err(GameError::NotInWordList(guess));
        }

        let feedback = evaluate_guess(&guess, &self.answer)?;
        self.keyboard.update(&feedback);
        self.guesses.push(GuessRecord {
            word: guess,
            feedback: feedback.clone(),
        });

        if is_solved(&feedback) {
            self.result = Some(GameResult::Won);
        } else if self.guesses.len() >= self.config.max_turns {
            self.result = Some(GameResult::Lost);
        }

        tracing::debug!(turn = self.guesses.len(), result = ?self.result, "guess scored");
        Ok(feedback)
    }

    /// The answer, once the game is over.
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&str> {
        self.result.map(|_| self.answer.as_str())
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub fn turns_left(&self) -> usize {
        self.config.max_turns.saturating_sub(self.guesses.len())
    }
}

impl RulesEngine for WordleGame {
    type Move = String;
    type Feedback = Feedback;

    fn apply(&mut self, mv: String) -> Result<Feedback> {
        self.submit_guess(&mv)
    }

    fn result(&self) -> Option<GameResult> {
        self.result
    }

    fn reset(&mut self) {
        let mut rng = self.rng.fork();
        // The list was validated when the game was created
        if let Ok(answer) = Self::pick_answer(&self.words, &self.config, &mut rng) {
            self.answer = answer;
        }
        self.rng = rng;
        self.guesses.clear();
        self.keyboard.clear();
        self.result = None;
    }
}
