//! Pile placement rules and the On Fire sub-state.
//!
//! ## Placement
//!
//! An ascending pile accepts any card above its top, or a card exactly
//! `jump_back_size` below it. Descending piles mirror this. The top of an
//! empty pile is a synthetic card at the pile's start value.
//!
//! ## On Fire
//!
//! In the On Fire variant a hot card left on top at a turn boundary sets
//! the pile burning. Each further boundary with a hot top adds a turn on
//! fire; covering it resets the count. A pile that has burned for more
//! than one turn is destroyed.
//!
//! ## Example
//!
//! ```
//! use pile_engine::cards::Card;
//! use pile_engine::core::{PlayerId, RuleSet};
//! use pile_engine::piles::{Direction, Pile};
//!
//! let rules = RuleSet::default();
//! let mut pile = Pile::new(1, Direction::Ascending);
//! let ann = PlayerId::new("ann");
//!
//! assert!(pile.push(Card::new(30), &ann, 0, &rules));
//! assert!(pile.push(Card::new(20), &ann, 0, &rules)); // jump back
//! assert!(!pile.push(Card::new(15), &ann, 0, &rules));
//! assert_eq!(pile.top_card().value, 20);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::{Card, CardInfo, CardValue};
use crate::core::{PlayerId, RuleSet};

/// Direction a pile runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Fire state of a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileState {
    Safe,
    OnFire,
    Destroyed,
}

/// A card on a pile with its placement record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedCard {
    pub card: Card,
    pub info: CardInfo,
}

impl PlacedCard {
    #[must_use]
    pub fn new(card: Card, info: CardInfo) -> Self {
        Self { card, info }
    }
}

/// An ordered stack of placed cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    start: CardValue,
    direction: Direction,
    cards: Vector<PlacedCard>,
    turns_on_fire: u32,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new(start: CardValue, direction: Direction) -> Self {
        Self::with_cards(start, direction, Vec::new(), 0)
    }

    /// Create a pile with existing placements, bottom first.
    #[must_use]
    pub fn with_cards(
        start: CardValue,
        direction: Direction,
        cards: impl IntoIterator<Item = PlacedCard>,
        turns_on_fire: u32,
    ) -> Self {
        Self {
            start,
            direction,
            cards: cards.into_iter().collect(),
            turns_on_fire,
        }
    }

    #[must_use]
    pub fn start(&self) -> CardValue {
        self.start
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn turns_on_fire(&self) -> u32 {
        self.turns_on_fire
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Placed cards, bottom first.
    pub fn history(&self) -> impl Iterator<Item = &PlacedCard> {
        self.cards.iter()
    }

    /// The top card, or a synthetic card at the start value when empty.
    #[must_use]
    pub fn top_card(&self) -> Card {
        self.cards
            .back()
            .map_or_else(|| Card::new(self.start), |placed| placed.card.clone())
    }

    /// Placement record of the top card. `None` when empty.
    #[must_use]
    pub fn top_card_info(&self) -> Option<&CardInfo> {
        self.cards.back().map(|placed| &placed.info)
    }

    fn top_value(&self) -> CardValue {
        self.cards.back().map_or(self.start, |placed| placed.card.value)
    }

    /// Whether a card may legally be placed on this pile.
    #[must_use]
    pub fn can_be_played(&self, card: &Card, rules: &RuleSet) -> bool {
        self.accepts(card.value, rules)
    }

    pub(crate) fn accepts(&self, value: CardValue, rules: &RuleSet) -> bool {
        let top = self.top_value();
        let jump = rules.jump_back_size();

        match self.direction {
            Direction::Ascending => value > top || top.checked_sub(jump) == Some(value),
            Direction::Descending => value < top || top.checked_add(jump) == Some(value),
        }
    }

    /// Place a card if legal. Returns whether it was placed.
    pub fn push(&mut self, card: Card, player: &PlayerId, turn: u32, rules: &RuleSet) -> bool {
        if !self.can_be_played(&card, rules) {
            return false;
        }

        self.cards
            .push_back(PlacedCard::new(card, CardInfo::new(player.clone(), turn)));
        true
    }

    /// Remove and return the top card. `None` when empty.
    pub fn pop_card(&mut self) -> Option<Card> {
        self.cards.pop_back().map(|placed| placed.card)
    }

    /// Whether `player` placed the top card during `turn`.
    #[must_use]
    pub fn can_mulligan(&self, player: &PlayerId, turn: u32) -> bool {
        self.top_card_info()
            .is_some_and(|info| info.placed_by(player, turn))
    }

    /// Whether the top card is hot.
    #[must_use]
    pub fn is_on_fire(&self, rules: &RuleSet) -> bool {
        rules.is_on_fire() && rules.card_is_on_fire(self.top_value())
    }

    #[must_use]
    pub fn state(&self, rules: &RuleSet) -> PileState {
        if !self.is_on_fire(rules) {
            return PileState::Safe;
        }

        if self.turns_on_fire > 1 {
            PileState::Destroyed
        } else {
            PileState::OnFire
        }
    }

    #[must_use]
    pub fn is_destroyed(&self, rules: &RuleSet) -> bool {
        rules.is_on_fire() && self.state(rules) == PileState::Destroyed
    }

    /// Advance the fire counter at a turn boundary.
    pub fn end_turn(&mut self, rules: &RuleSet) {
        if !rules.is_on_fire() {
            return;
        }

        if self.is_on_fire(rules) {
            self.turns_on_fire += 1;
            debug!(top = self.top_value(), turns_on_fire = self.turns_on_fire, "Pile is on fire");
            if self.turns_on_fire > 1 {
                warn!(top = self.top_value(), "Pile destroyed by fire");
            }
        } else if self.turns_on_fire > 0 {
            self.turns_on_fire = 0;
            debug!(top = self.top_value(), "Pile is no longer on fire");
        }
    }
}
