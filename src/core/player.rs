//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two Hog players.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`. Scores live in a
//! `PlayerPair<u32>`, aliased as `Scores`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::{HogError, Result};

/// Identifier for one of the two players.
///
/// Player indices are 0-based: the first player is `PlayerId::ZERO`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Player 0, who takes the first turn.
    pub const ZERO: PlayerId = PlayerId(0);

    /// Player 1.
    pub const ONE: PlayerId = PlayerId(1);

    /// Create a player ID from a raw index.
    ///
    /// ```
    /// use rust_hog::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).unwrap(), PlayerId::ONE);
    /// assert!(PlayerId::new(2).is_err());
    /// ```
    pub fn new(id: u8) -> Result<Self> {
        match id {
            0 | 1 => Ok(Self(id)),
            _ => Err(HogError::InvalidPlayer(id)),
        }
    }

    /// Get the raw player index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Both players in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::ZERO, Self::ONE].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Return the other player, for a player `who` numbered 0 or 1.
#[must_use]
pub fn next_player(who: PlayerId) -> PlayerId {
    who.other()
}

/// One value per player.
///
/// ## Example
///
/// ```
/// use rust_hog::core::{PlayerId, PlayerPair};
///
/// let mut scores = PlayerPair::new(0u32, 0);
/// scores[PlayerId::ONE] += 7;
/// assert_eq!(scores[PlayerId::ONE], 7);
/// assert_eq!(scores.into_tuple(), (0, 7));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

/// Scores of both players, player 0 first.
pub type Scores = PlayerPair<u32>;

impl<T> PlayerPair<T> {
    /// Create a pair from player 0's and player 1's values.
    pub fn new(zero: T, one: T) -> Self {
        Self { data: [zero, one] }
    }

    /// Get a reference to a player's value.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's value.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }

    /// Split into `(player 0, player 1)`.
    pub fn into_tuple(self) -> (T, T) {
        let [zero, one] = self.data;
        (zero, one)
    }

    /// Values as seen by `player`: `(own, opponent)`.
    pub fn perspective(&self, player: PlayerId) -> (&T, &T) {
        (self.get(player), self.get(player.other()))
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

impl<T> From<(T, T)> for PlayerPair<T> {
    fn from((zero, one): (T, T)) -> Self {
        Self::new(zero, one)
    }
}
