//! Positional feedback for a word guess.
//!
//! Each guessed letter gets one of three tags:
//! - `Correct`: right letter, right position
//! - `Present`: letter is in the answer somewhere else
//! - `Absent`: letter isn't (or is no longer) available in the answer
//!
//! Repeated letters are resolved in two passes. Exact matches are taken out
//! of the answer's letter pool first; the remaining guess letters are then
//! matched left to right against what is left. A letter that appears once in
//! the answer can therefore be credited at most once.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::{GameError, Result};

/// Tri-state feedback tag. Ordered from least to most informative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

/// Feedback for one position of a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterFeedback {
    pub letter: char,
    pub status: LetterStatus,
}

/// Feedback for a whole guess, one entry per position.
pub type Feedback = SmallVec<[LetterFeedback; 5]>;

/// Score `guess` against `answer`.
///
/// Comparison ignores ASCII case. Both words must have the same number of
/// characters.
///
/// ```
/// use arcade_rules::games::wordle::{evaluate_guess, LetterStatus::*};
///
/// let fb = evaluate_guess("allee", "apple").unwrap();
/// let tags: Vec<_> = fb.iter().map(|f| f.status).collect();
/// assert_eq!(tags, vec![Correct, Present, Absent, Absent, Correct]);
/// ```
pub fn evaluate_guess(guess: &str, answer: &str) -> Result<Feedback> {
    let guess: SmallVec<[char; 5]> = guess.chars().map(|c| c.to_ascii_lowercase()).collect();
    let answer: SmallVec<[char; 5]> = answer.chars().map(|c| c.to_ascii_lowercase()).collect();

    if guess.len() != answer.len() {
        return Err(GameError::WrongLength {
            expected: answer.len(),
            actual: guess.len(),
        });
    }

    let mut feedback: Feedback = guess
        .iter()
        .map(|&letter| LetterFeedback {
            letter,
            status: LetterStatus::Absent,
        })
        .collect();
    let mut unmatched: SmallVec<[Option<char>; 5]> = answer.iter().copied().map(Some).collect();

    for (i, (&g, &a)) in guess.iter().zip(answer.iter()).enumerate() {
        if g == a {
            feedback[i].status = LetterStatus::Correct;
            unmatched[i] = None;
        }
    }

    for (i, &g) in guess.iter().enumerate() {
        if feedback[i].status == LetterStatus::Correct {
            continue;
        }
        if let Some(slot) = unmatched.iter_mut().find(|slot| **slot == Some(g)) {
            feedback[i].status = LetterStatus::Present;
            *slot = None;
        }
    }

    Ok(feedback)
}

/// True when every position is an exact match.
#[must_use]
pub fn is_solved(feedback: &[LetterFeedback]) -> bool {
    !feedback.is_empty() && feedback.iter().all(|f| f.status == LetterStatus::Correct)
}

/// Best-known status of each letter across all guesses so far.
///
/// Drives the on-screen keyboard colouring. A letter's status only ever
/// improves: `Correct` is final, `Present` can be upgraded to `Correct`,
/// and `Absent` is recorded only for letters with no status yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardState {
    letters: FxHashMap<char, LetterStatus>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess's feedback into the keyboard.
    pub fn update(&mut self, feedback: &[LetterFeedback]) {
        for fb in feedback {
            let entry = self.letters.get(&fb.letter).copied();
            let next = match (fb.status, entry) {
                (LetterStatus::Correct, _) => LetterStatus::Correct,
                (LetterStatus::Present, Some(LetterStatus::Correct)) => LetterStatus::Correct,
                (LetterStatus::Present, _) => LetterStatus::Present,
                (LetterStatus::Absent, Some(existing)) => existing,
                (LetterStatus::Absent, None) => LetterStatus::Absent,
            };
            self.letters.insert(fb.letter, next);
        }
    }

    /// Status of a letter, `None` if it hasn't been guessed.
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::*;

    fn tags(guess: &str, answer: &str) -> Vec<LetterStatus> {
        evaluate_guess(guess, answer)
            .unwrap()
            .iter()
            .map(|f| f.status)
            .collect()
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(tags("crane", "crane"), vec![Correct; 5]);
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(tags("fjord", "bible"), vec![Absent; 5]);
    }

    #[test]
    fn test_misplaced_letters() {
        assert_eq!(tags("nacre", "crane"), vec![Present, Present, Present, Present, Correct]);
    }

    #[test]
    fn test_duplicate_guess_letter_single_in_answer() {
        // One 'l' in the answer; only the first 'l' of the guess is credited
        assert_eq!(tags("lolly", "clamp"), vec![Present, Absent, Absent, Absent, Absent]);
    }

    #[test]
    fn test_exact_match_consumes_before_present() {
        // The trailing 'e' is exact, so the earlier 'e' can't also claim it
        assert_eq!(tags("eerie", "crane"), vec![Absent, Absent, Present, Absent, Correct]);
    }

    #[test]
    fn test_duplicate_in_both() {
        assert_eq!(tags("sassy", "bassi"), vec![Absent, Correct, Correct, Correct, Absent]);
        assert_eq!(tags("sleep", "spelt"), vec![Correct, Present, Correct, Absent, Present]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(tags("CRANE", "crane"), vec![Correct; 5]);
        let fb = evaluate_guess("Crane", "CRANE").unwrap();
        assert_eq!(fb[0].letter, 'c');
    }

    #[test]
    fn test_length_mismatch() {
        let err = evaluate_guess("cran", "crane").unwrap_err();
        assert_eq!(err, GameError::WrongLength { expected: 5, actual: 4 });
    }

    #[test]
    fn test_is_solved() {
        assert!(is_solved(&evaluate_guess("crane", "crane").unwrap()));
        assert!(!is_solved(&evaluate_guess("crate", "crane").unwrap()));
        assert!(!is_solved(&[]));
    }

    #[test]
    fn test_keyboard_only_upgrades() {
        let mut keyboard = KeyboardState::new();

        keyboard.update(&evaluate_guess("nacre", "crane").unwrap());
        assert_eq!(keyboard.status('n'), Some(Present));
        assert_eq!(keyboard.status('e'), Some(Correct));

        keyboard.update(&evaluate_guess("crane", "crane").unwrap());
        assert_eq!(keyboard.status('n'), Some(Correct));

        // A later absent/present never downgrades
        keyboard.update(&evaluate_guess("eeeee", "crane").unwrap());
        assert_eq!(keyboard.status('e'), Some(Correct));

        keyboard.update(&evaluate_guess("zzzzz", "crane").unwrap());
        assert_eq!(keyboard.status('z'), Some(Absent));
        assert_eq!(keyboard.status('Z'), Some(Absent));
        assert_eq!(keyboard.status('q'), None);
    }
}
