//! One round of player-vs-dealer blackjack.

use serde::{Deserialize, Serialize};

use super::card::{Card, Deck};
use super::hand::{hand_value, Hand, BLACKJACK};
use crate::core::config::BlackjackConfig;
use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;
use crate::rules::{GameResult, RulesEngine};

/// Player decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Hit,
    Stand,
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    PlayerWins,
    DealerWins,
    /// Equal totals.
    Push,
}

impl RoundOutcome {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            RoundOutcome::PlayerBust => "You busted!",
            RoundOutcome::DealerBust | RoundOutcome::PlayerWins => "You win!",
            RoundOutcome::DealerWins => "Dealer wins.",
            RoundOutcome::Push => "It's a tie.",
        }
    }
}

impl From<RoundOutcome> for GameResult {
    fn from(outcome: RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::DealerBust | RoundOutcome::PlayerWins => GameResult::Won,
            RoundOutcome::PlayerBust | RoundOutcome::DealerWins => GameResult::Lost,
            RoundOutcome::Push => GameResult::Draw,
        }
    }
}

/// State after a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundProgress {
    /// Player may act again.
    InPlay { player_total: u32 },
    Finished(RoundOutcome),
}

/// A dealt round: deck, both hands and the outcome once decided.
#[derive(Clone, Debug)]
pub struct BlackjackRound {
    config: BlackjackConfig,
    rng: GameRng,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    outcome: Option<RoundOutcome>,
}

impl BlackjackRound {
    /// Shuffle a fresh deck and deal.
    pub fn new(config: BlackjackConfig, seed: u64) -> Result<Self> {
        let mut rng = GameRng::new(seed);
        let deck = Deck::shuffled(&mut rng);
        Self::deal(config, rng, deck)
    }

    /// Deal from a prepared deck.
    pub fn with_deck(config: BlackjackConfig, deck: Deck) -> Result<Self> {
        Self::deal(config, GameRng::new(0), deck)
    }

    fn deal(config: BlackjackConfig, rng: GameRng, mut deck: Deck) -> Result<Self> {
        config.validate()?;
        let mut player = Hand::new();
        let mut dealer = Hand::new();

        // Alternate: player, dealer, player, dealer
        for _ in 0..2 {
            player.push(deck.draw()?);
            dealer.push(deck.draw()?);
        }
        tracing::debug!(player = hand_value(&player), "round dealt");

        Ok(Self {
            config,
            rng,
            deck,
            player,
            dealer,
            outcome: None,
        })
    }

    /// Player draws one card. Going over 21 ends the round.
    pub fn hit(&mut self) -> Result<RoundProgress> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }

        let card = self.deck.draw()?;
        self.player.push(card);
        let total = hand_value(&self.player);
        tracing::debug!(%card, total, "player hits");

        if total > BLACKJACK {
            return Ok(self.finish(RoundOutcome::PlayerBust));
        }
        Ok(RoundProgress::InPlay { player_total: total })
    }

    /// Player stands; the dealer draws to the configured total and the round
    /// is settled.
    pub fn stand(&mut self) -> Result<RoundProgress> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }

        // Draw on copies so an exhausted deck leaves the round untouched
        let mut deck = self.deck.clone();
        let mut dealer = self.dealer.clone();
        while hand_value(&dealer) < self.config.dealer_stands_on {
            dealer.push(deck.draw()?);
        }
        self.deck = deck;
        self.dealer = dealer;

        let player_total = hand_value(&self.player);
        let dealer_total = hand_value(&self.dealer);
        let outcome = if dealer_total > BLACKJACK {
            RoundOutcome::DealerBust
        } else if player_total > dealer_total {
            RoundOutcome::PlayerWins
        } else if player_total < dealer_total {
            RoundOutcome::DealerWins
        } else {
            RoundOutcome::Push
        };
        Ok(self.finish(outcome))
    }

    fn finish(&mut self, outcome: RoundOutcome) -> RoundProgress {
        tracing::info!(
            ?outcome,
            player = hand_value(&self.player),
            dealer = hand_value(&self.dealer),
            "round settled"
        );
        self.outcome = Some(outcome);
        RoundProgress::Finished(outcome)
    }

    #[must_use]
    pub fn player_hand(&self) -> &[Card] {
        &self.player
    }

    #[must_use]
    pub fn player_total(&self) -> u32 {
        hand_value(&self.player)
    }

    /// Dealer cards the player may see. The first card stays face down
    /// until the round ends.
    #[must_use]
    pub fn dealer_visible(&self) -> Vec<Option<Card>> {
        self.dealer
            .iter()
            .enumerate()
            .map(|(i, &card)| {
                if i == 0 && self.outcome.is_none() {
                    None
                } else {
                    Some(card)
                }
            })
            .collect()
    }

    /// Dealer total, once the hole card is revealed.
    #[must_use]
    pub fn dealer_total(&self) -> Option<u32> {
        self.outcome.map(|_| hand_value(&self.dealer))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }
}

impl RulesEngine for BlackjackRound {
    type Move = Decision;
    type Feedback = RoundProgress;

    fn apply(&mut self, mv: Decision) -> Result<RoundProgress> {
        match mv {
            Decision::Hit => self.hit(),
            Decision::Stand => self.stand(),
        }
    }

    fn result(&self) -> Option<GameResult> {
        self.outcome.map(GameResult::from)
    }

    fn reset(&mut self) {
        let mut rng = self.rng.fork();
        let deck = Deck::shuffled(&mut rng);
        // A full deck always has four cards to deal
        if let Ok(round) = Self::deal(self.config.clone(), rng, deck) {
            *self = round;
        }
    }
}
