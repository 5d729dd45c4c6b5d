//! Crate-wide error type.
//!
//! Every failure in this crate is an input-validation failure: the move is
//! rejected, the session is left untouched, and the caller shows the message
//! inline. Nothing here is fatal.

use thiserror::Error;

/// Errors returned when a move or a data load is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Guess length doesn't match the target length.
    #[error("guess must be {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// Guess isn't a known word.
    #[error("'{0}' is not in the word list")]
    NotInWordList(String),

    /// Input couldn't be parsed as a whole number.
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    /// No country matches the given name or alias.
    #[error("unknown place '{0}'")]
    UnknownPlace(String),

    /// Board index outside the grid.
    #[error("cell {index} is outside a board of {cells} cells")]
    OutOfBounds { index: usize, cells: usize },

    /// Board cell already holds a marker.
    #[error("cell {0} is already taken")]
    CellOccupied(usize),

    /// All queens are already on the board.
    #[error("all {0} queens are already placed")]
    QueenLimit(usize),

    /// Tried to draw from an empty deck.
    #[error("the deck is empty")]
    DeckExhausted,

    /// A pool needs more entries than it has.
    #[error("need at least {needed} entries, have {available}")]
    NotEnoughEntries { needed: usize, available: usize },

    /// The session has already ended; start a new one.
    #[error("game already ended, no new moves are accepted")]
    GameOver,

    /// Invalid configuration value.
    #[error("invalid config: {0}")]
    Config(String),

    /// Malformed data file.
    #[error("malformed data: {0}")]
    Data(String),
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Data(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
