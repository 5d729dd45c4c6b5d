//! Hand scoring.

use smallvec::SmallVec;

use super::card::{Card, Rank};

/// Cards held by one side. Hands rarely exceed eight cards.
pub type Hand = SmallVec<[Card; 8]>;

/// Bust threshold.
pub const BLACKJACK: u32 = 21;

/// Score a hand under ace-flexible scoring.
///
/// Number cards count their pip value, J/Q/K count 10 and aces count 11.
/// While the total is over 21 and an ace is still counted as 11, that ace
/// drops to 1.
///
/// ```
/// use arcade_rules::games::blackjack::{hand_value, Card, Rank, Suit};
///
/// let hand = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Hearts)];
/// assert_eq!(hand_value(&hand), 21);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u32 {
    let mut total: u32 = cards.iter().map(|c| c.rank.value()).sum();
    let mut high_aces = cards.iter().filter(|c| c.rank == Rank::Ace).count();

    while total > BLACKJACK && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }

    total
}

#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    hand_value(cards) > BLACKJACK
}
