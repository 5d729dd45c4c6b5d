//! Player seats for the head-to-head games.
//!
//! Tic-Tac-Toe and Flag Battle are two-seat hot-seat games: both players
//! share one screen and take turns. `PlayerId` names a seat and `PlayerMap`
//! holds one value per seat (lives, score).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier. Seats are 0-based internally and shown 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// First seat; moves first in every head-to-head game.
    pub const FIRST: PlayerId = PlayerId(0);
    /// Second seat.
    pub const SECOND: PlayerId = PlayerId(1);

    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seat that moves after this one at a table of `seats` players.
    #[must_use]
    pub fn next(self, seats: usize) -> Self {
        debug_assert!(seats > 0);
        PlayerId(((self.index() + 1) % seats) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// One value per seat, indexable by `PlayerId`.
///
/// ```
/// use arcade_rules::core::{PlayerId, PlayerMap};
///
/// let mut lives = PlayerMap::with_value(2, 3u32);
/// lives[PlayerId::SECOND] -= 1;
/// assert_eq!(lives[PlayerId::FIRST], 3);
/// assert_eq!(lives[PlayerId::SECOND], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T: Clone> PlayerMap<T> {
    /// Build a map with every seat set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `seats` is zero.
    pub fn with_value(seats: usize, value: T) -> Self {
        assert!(seats > 0, "Must have at least 1 player");
        Self { data: vec![value; seats] }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
