//! Player identification and the session roster.
//!
//! ## PlayerId
//!
//! Opaque player name supplied by the session manager.
//!
//! ## Roster
//!
//! Ordered list of players in a session. Turn order follows roster order,
//! so the roster is the single source of truth for "who is next".

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// Players are identified by name; the engine never interprets the name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PlayerId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Ordered player list for a session.
///
/// ## Example
///
/// ```
/// use pile_engine::core::{PlayerId, Roster};
///
/// let mut roster = Roster::from_names(["ann", "bob", "cat"]);
/// assert_eq!(roster.position(&PlayerId::new("bob")), Some(1));
///
/// roster.remove(&PlayerId::new("ann"));
/// assert_eq!(roster.get(0), Some(&PlayerId::new("bob")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<PlayerId>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster from player names, in turn order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: names.into_iter().map(PlayerId::new).collect(),
        }
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get the player at a roster position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PlayerId> {
        self.players.get(index)
    }

    /// Get a player's roster position.
    #[must_use]
    pub fn position(&self, player: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }

    /// Whether the player is on the roster.
    #[must_use]
    pub fn contains(&self, player: &PlayerId) -> bool {
        self.players.contains(player)
    }

    /// Remove a player, returning their former position.
    pub fn remove(&mut self, player: &PlayerId) -> Option<usize> {
        let index = self.position(player)?;
        self.players.remove(index);
        Some(index)
    }

    /// Iterate over players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerId> {
        self.players.iter()
    }

    /// Players as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[PlayerId] {
        &self.players
    }
}

impl From<Vec<PlayerId>> for Roster {
    fn from(players: Vec<PlayerId>) -> Self {
        Self { players }
    }
}

impl FromIterator<PlayerId> for Roster {
    fn from_iter<T: IntoIterator<Item = PlayerId>>(iter: T) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}
