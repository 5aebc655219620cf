//! Rule set configuration.
//!
//! A `RuleSet` is immutable once built. Changing the rules of a session
//! replaces the whole rule set, and the session rebuilds its deck and piles.
//!
//! ```
//! use pile_engine::core::{GameMode, RuleSet};
//!
//! let rules = RuleSet::builder()
//!     .with_pairs_of_piles(1)
//!     .with_top_limit(20)
//!     .with_game_mode(GameMode::OnFire)
//!     .build();
//!
//! assert!(rules.is_on_fire());
//! assert_eq!(rules.jump_back_size(), 10);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::EngineError;
use crate::cards::CardValue;

/// Hot card values, kept inline.
pub type OnFireCards = SmallVec<[CardValue; 8]>;

/// Game variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Plain rules.
    #[default]
    Regular,
    /// Hot cards left uncovered across turns destroy their pile.
    OnFire,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Regular => write!(f, "Regular"),
            GameMode::OnFire => write!(f, "On Fire"),
        }
    }
}

/// Immutable game rules.
///
/// Deserializing fills any missing field with its default, so hosts can
/// load partial configs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pairs_of_piles: usize,
    jump_back_size: CardValue,
    /// Exclusive upper bound of card values; also the descending pile start.
    top_limit: CardValue,
    hand_size: usize,
    cards_per_turn: usize,
    cards_per_turn_in_endgame: usize,
    game_mode: GameMode,
    on_fire_cards: OnFireCards,
    mulligan_limit: usize,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            pairs_of_piles: 2,
            jump_back_size: 10,
            top_limit: 100,
            hand_size: 8,
            cards_per_turn: 2,
            cards_per_turn_in_endgame: 1,
            game_mode: GameMode::Regular,
            on_fire_cards: SmallVec::from_slice(&[22, 33, 44, 55, 66, 77]),
            mulligan_limit: 0,
        }
    }
}

impl RuleSet {
    /// Start building a rule set from the defaults.
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    /// Number of ascending/descending pile pairs.
    #[must_use]
    pub fn pairs_of_piles(&self) -> usize {
        self.pairs_of_piles
    }

    /// Size of a legal backwards jump.
    #[must_use]
    pub fn jump_back_size(&self) -> CardValue {
        self.jump_back_size
    }

    /// Exclusive upper bound of card values.
    #[must_use]
    pub fn top_limit(&self) -> CardValue {
        self.top_limit
    }

    /// Cards dealt to each player at the start.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// Cards that must be played per turn.
    #[must_use]
    pub fn cards_per_turn(&self) -> usize {
        self.cards_per_turn
    }

    /// Cards that must be played per turn once the deck is empty.
    #[must_use]
    pub fn cards_per_turn_in_endgame(&self) -> usize {
        self.cards_per_turn_in_endgame
    }

    #[must_use]
    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    #[must_use]
    pub fn on_fire_cards(&self) -> &[CardValue] {
        &self.on_fire_cards
    }

    /// Mulligans allowed per session.
    #[must_use]
    pub fn mulligan_limit(&self) -> usize {
        self.mulligan_limit
    }

    /// Whether the On Fire variant is active.
    #[must_use]
    pub fn is_on_fire(&self) -> bool {
        self.game_mode == GameMode::OnFire
    }

    /// Whether a card value is hot.
    #[must_use]
    pub fn card_is_on_fire(&self, value: CardValue) -> bool {
        self.on_fire_cards.contains(&value)
    }

    /// Check the rule set describes a playable game.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.top_limit <= 2 {
            return Err(EngineError::invalid_rules(format!(
                "top limit must exceed 2, got {}",
                self.top_limit
            )));
        }
        if self.pairs_of_piles == 0 {
            return Err(EngineError::invalid_rules("at least one pair of piles is required"));
        }
        if self.jump_back_size == 0 {
            return Err(EngineError::invalid_rules("jump back size must be positive"));
        }
        if self.hand_size == 0 {
            return Err(EngineError::invalid_rules("hand size must be positive"));
        }
        Ok(())
    }
}

/// Fluent builder for [`RuleSet`].
#[derive(Clone, Debug, Default)]
pub struct RuleSetBuilder {
    rules: RuleSet,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pairs_of_piles(mut self, pairs: usize) -> Self {
        self.rules.pairs_of_piles = pairs;
        self
    }

    #[must_use]
    pub fn with_jump_back_size(mut self, size: CardValue) -> Self {
        self.rules.jump_back_size = size;
        self
    }

    #[must_use]
    pub fn with_top_limit(mut self, limit: CardValue) -> Self {
        self.rules.top_limit = limit;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.rules.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_cards_per_turn(mut self, count: usize) -> Self {
        self.rules.cards_per_turn = count;
        self
    }

    #[must_use]
    pub fn with_cards_per_turn_in_endgame(mut self, count: usize) -> Self {
        self.rules.cards_per_turn_in_endgame = count;
        self
    }

    #[must_use]
    pub fn with_game_mode(mut self, mode: GameMode) -> Self {
        self.rules.game_mode = mode;
        self
    }

    #[must_use]
    pub fn with_on_fire_cards(mut self, values: impl IntoIterator<Item = CardValue>) -> Self {
        self.rules.on_fire_cards = values.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_mulligan_limit(mut self, limit: usize) -> Self {
        self.rules.mulligan_limit = limit;
        self
    }

    /// Build the rule set.
    #[must_use]
    pub fn build(self) -> RuleSet {
        self.rules
    }
}
