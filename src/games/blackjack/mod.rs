//! Blackjack against a dealer who draws to 17.
//!
//! A round deals two cards each, hides the dealer's first card, lets the
//! player hit or stand, and settles once the player busts or stands.

mod card;
mod game;
mod hand;

pub use card::{Card, Deck, Rank, Suit};
pub use game::{BlackjackRound, Decision, RoundOutcome, RoundProgress};
pub use hand::{hand_value, is_bust, Hand, BLACKJACK};
