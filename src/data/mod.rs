//! Static game data bundled with the crate.
//!
//! The word list, country atlas and celebrity profiles are embedded at
//! compile time and parsed on demand. Hosts that ship their own data can use
//! the loaders on each type directly.

pub mod words;

pub use words::WordList;

use crate::core::error::Result;
use crate::games::higher_lower::Profile;
use crate::games::where_in_world::Atlas;

/// Bundled five-letter word list, one word per line.
pub const WORDS: &str = include_str!("../../data/words.txt");

/// Bundled country records (names, coordinates, continent, flag code).
pub const COUNTRIES: &str = include_str!("../../data/countries.json");

/// Bundled celebrity follower counts.
pub const PROFILES: &str = include_str!("../../data/profiles.json");

/// The bundled word list filtered to `word_length`.
pub fn default_words(word_length: usize) -> WordList {
    WordList::from_text(WORDS, word_length)
}

/// The bundled country atlas.
pub fn default_atlas() -> Result<Atlas> {
    Atlas::from_json(COUNTRIES)
}

/// The bundled comparison profiles.
pub fn default_profiles() -> Result<Vec<Profile>> {
    Profile::list_from_json(PROFILES)
}
