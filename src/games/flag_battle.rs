//! Flag Battle: two players take turns naming flags.
//!
//! A wrong answer costs the player a life. The first player to run out of
//! lives loses. After every answer a new flag is drawn and the turn passes.

use serde::{Deserialize, Serialize};

use crate::core::config::FlagBattleConfig;
use crate::core::error::{GameError, Result};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::games::where_in_world::{Atlas, Country};
use crate::rules::{GameResult, RulesEngine};

const SEATS: usize = 2;

/// What happened to the player who just answered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagOutcome {
    Correct { player: PlayerId },
    Wrong { player: PlayerId, answer: String, lives_left: u32 },
    /// Wrong with no lives left; the other player wins.
    Eliminated { player: PlayerId, answer: String, winner: PlayerId },
}

impl FlagOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            FlagOutcome::Correct { player } => format!("Correct! {player} scores!"),
            FlagOutcome::Wrong { answer, .. } => format!("Wrong! That was {answer}"),
            FlagOutcome::Eliminated { player, winner, .. } => {
                format!("Wrong! {player} is out! {winner} wins!")
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct FlagBattle {
    atlas: Atlas,
    config: FlagBattleConfig,
    rng: GameRng,
    /// Atlas indices of countries that have a flag.
    pool: Vec<usize>,
    flag: usize,
    current: PlayerId,
    lives: PlayerMap<u32>,
    scores: PlayerMap<u32>,
    result: Option<GameResult>,
}

impl FlagBattle {
    pub fn new(atlas: Atlas, config: FlagBattleConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let pool: Vec<usize> = atlas
            .iter()
            .enumerate()
            .filter(|(_, c)| c.code.is_some())
            .map(|(i, _)| i)
            .collect();
        let mut rng = GameRng::new(seed);
        let flag = *rng
            .choose(&pool)
            .ok_or(GameError::NotEnoughEntries { needed: 1, available: 0 })?;
        tracing::info!(seed, flags = pool.len(), lives = config.lives, "flag battle started");

        Ok(Self {
            lives: PlayerMap::with_value(SEATS, config.lives),
            scores: PlayerMap::with_value(SEATS, 0),
            atlas,
            config,
            rng,
            pool,
            flag,
            current: PlayerId::FIRST,
            result: None,
        })
    }

    /// Country whose flag is on screen.
    #[must_use]
    pub fn current_flag(&self) -> Option<&Country> {
        self.atlas.get(self.flag)
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn lives(&self, player: PlayerId) -> u32 {
        self.lives[player]
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Answer for the current player.
    pub fn guess(&mut self, input: &str) -> Result<FlagOutcome> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }
        let country = self
            .atlas
            .get(self.flag)
            .ok_or_else(|| GameError::Data(format!("flag {} is not in the atlas", self.flag)))?;
        let answer = country.canonical_name().to_string();
        let correct = country
            .names
            .iter()
            .any(|name| name.to_lowercase() == input.trim().to_lowercase());
        let player = self.current;

        let outcome = if correct {
            self.scores[player] += 1;
            FlagOutcome::Correct { player }
        } else {
            self.lives[player] = self.lives[player].saturating_sub(1);
            if self.lives[player] == 0 {
                let winner = player.next(SEATS);
                self.result = Some(GameResult::Winner(winner));
                tracing::info!(%winner, "flag battle over");
                return Ok(FlagOutcome::Eliminated { player, answer, winner });
            }
            FlagOutcome::Wrong {
                player,
                answer,
                lives_left: self.lives[player],
            }
        };
        tracing::debug!(%player, correct, "flag answered");

        self.next_flag();
        self.current = player.next(SEATS);
        Ok(outcome)
    }

    fn next_flag(&mut self) {
        if let Some(&flag) = self.rng.choose(&self.pool) {
            self.flag = flag;
        }
    }
}

impl RulesEngine for FlagBattle {
    type Move = String;
    type Feedback = FlagOutcome;

    fn apply(&mut self, mv: String) -> Result<FlagOutcome> {
        self.guess(&mv)
    }

    fn result(&self) -> Option<GameResult> {
        self.result
    }

    fn reset(&mut self) {
        self.rng = self.rng.fork();
        self.next_flag();
        self.lives = PlayerMap::with_value(SEATS, self.config.lives);
        self.scores = PlayerMap::with_value(SEATS, 0);
        self.current = PlayerId::FIRST;
        self.result = None;
    }
}
