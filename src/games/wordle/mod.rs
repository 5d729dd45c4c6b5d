//! Wordle-style word guessing.
//!
//! Guess a hidden five-letter word in six tries. After each guess every
//! letter is tagged exact / elsewhere / absent, and the on-screen keyboard
//! remembers the best tag seen per letter.

mod feedback;
mod game;

pub use feedback::{evaluate_guess, is_solved, Feedback, KeyboardState, LetterFeedback, LetterStatus};
pub use game::{GuessRecord, WordleGame};
