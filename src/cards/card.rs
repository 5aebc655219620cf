//! Cards and placement provenance.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Face value of a card.
pub type CardValue = u32;

/// A card in circulation.
///
/// Equality covers the owner too; hands and piles look cards up by value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub value: CardValue,

    /// Player the card was dealt to. `None` for pile sentinels and
    /// cards drawn without an owner.
    pub owner: Option<PlayerId>,
}

impl Card {
    /// Create an unowned card.
    #[must_use]
    pub fn new(value: CardValue) -> Self {
        Self { value, owner: None }
    }

    /// Create a card dealt to a player.
    #[must_use]
    pub fn owned(value: CardValue, owner: PlayerId) -> Self {
        Self {
            value,
            owner: Some(owner),
        }
    }
}

impl From<CardValue> for Card {
    fn from(value: CardValue) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Who placed a card on a pile, and on which turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInfo {
    pub owner: Option<PlayerId>,
    pub turn_played: Option<u32>,
}

impl CardInfo {
    #[must_use]
    pub fn new(owner: PlayerId, turn_played: u32) -> Self {
        Self {
            owner: Some(owner),
            turn_played: Some(turn_played),
        }
    }

    /// Whether this placement was made by `player` during `turn`.
    #[must_use]
    pub fn placed_by(&self, player: &PlayerId, turn: u32) -> bool {
        self.owner.as_ref() == Some(player) && self.turn_played == Some(turn)
    }
}
