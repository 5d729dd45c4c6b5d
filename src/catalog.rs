//! The landing page: every game with its title and URL slug.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    Wordle,
    Blackjack,
    Guessing,
    WhereInTheWorld,
    FlagBattle,
    HigherLower,
    TicTacToe,
    Queens,
}

impl GameKind {
    /// Landing page order.
    pub const ALL: [GameKind; 8] = [
        GameKind::Wordle,
        GameKind::Blackjack,
        GameKind::Guessing,
        GameKind::WhereInTheWorld,
        GameKind::FlagBattle,
        GameKind::HigherLower,
        GameKind::TicTacToe,
        GameKind::Queens,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            GameKind::Wordle => "Wordle",
            GameKind::Blackjack => "Blackjack",
            GameKind::Guessing => "Guessing Game",
            GameKind::WhereInTheWorld => "Where in the World?",
            GameKind::FlagBattle => "Flag Battle",
            GameKind::HigherLower => "Higher or Lower",
            GameKind::TicTacToe => "Tic Tac Toe",
            GameKind::Queens => "Queens",
        }
    }

    /// Path segment the game is served under.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            GameKind::Wordle => "wordle",
            GameKind::Blackjack => "blackjack",
            GameKind::Guessing => "guessing-game",
            GameKind::WhereInTheWorld => "where-in-the-world",
            GameKind::FlagBattle => "flag-battle",
            GameKind::HigherLower => "higher_lower",
            GameKind::TicTacToe => "tic_tac_toe",
            GameKind::Queens => "queens",
        }
    }

    /// Reverse of [`GameKind::slug`].
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<GameKind> {
        let slug = slug.trim_matches('/');
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
