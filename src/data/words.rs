//! Word list for the word-guessing game.

use rustc_hash::FxHashSet;

use crate::core::rng::GameRng;

/// Dictionary of valid guesses, all of one length.
///
/// Words are stored lowercase. Entries of the wrong length or with
/// non-alphabetic characters are dropped on load.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: Vec<String>,
    lookup: FxHashSet<String>,
    word_length: usize,
}

impl WordList {
    /// Parse a newline-separated word list.
    pub fn from_text(text: &str, word_length: usize) -> Self {
        Self::from_words(text.lines(), word_length)
    }

    /// Build from any sequence of words.
    pub fn from_words<I, S>(words: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = WordList {
            words: Vec::new(),
            lookup: FxHashSet::default(),
            word_length,
        };
        let mut skipped = 0usize;

        for raw in words {
            let word = raw.as_ref().trim().to_ascii_lowercase();
            if word.is_empty() {
                continue;
            }
            if word.len() != word_length || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                skipped += 1;
                continue;
            }
            if list.lookup.insert(word.clone()) {
                list.words.push(word);
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, word_length, "dropped malformed word list entries");
        }
        tracing::debug!(words = list.words.len(), "word list loaded");

        list
    }

    /// Check membership, ignoring ASCII case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(&word.to_ascii_lowercase())
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a random word.
    pub fn choose(&self, rng: &mut GameRng) -> Option<&str> {
        rng.choose(&self.words).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
