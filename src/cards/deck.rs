//! The shared draw pool.
//!
//! The deck is a bag of undrawn values. Draws pick a uniformly random
//! index, so internal order carries no meaning and `shuffle` is cosmetic.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::CardValue;
use crate::core::Randomness;

/// Undrawn card values.
///
/// Backed by `im::Vector` so session snapshots clone in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<CardValue>,
}

impl Deck {
    /// Create a deck holding exactly the given values.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = CardValue>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Create the sequential run `[min, max)`.
    ///
    /// ```
    /// use pile_engine::cards::Deck;
    ///
    /// let deck = Deck::create(2, 10);
    /// assert_eq!(deck.size(), 8);
    /// ```
    #[must_use]
    pub fn create(min: CardValue, max: CardValue) -> Self {
        Self::new(min..max)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the deck holds a value.
    #[must_use]
    pub fn contains(&self, value: CardValue) -> bool {
        self.cards.contains(&value)
    }

    /// Iterate over remaining values in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &CardValue> {
        self.cards.iter()
    }

    /// Draw one random value.
    ///
    /// Panics if the deck is empty; callers check `is_empty` first.
    pub fn draw_one(&mut self, rng: &mut impl Randomness) -> CardValue {
        assert!(!self.cards.is_empty(), "Cannot draw from an empty deck");
        let index = rng.index(self.cards.len());
        self.cards.remove(index)
    }

    /// Draw `count` distinct values, in draw order.
    ///
    /// Panics if fewer than `count` values remain.
    pub fn draw(&mut self, count: usize, rng: &mut impl Randomness) -> Vec<CardValue> {
        assert!(
            count <= self.cards.len(),
            "Cannot draw {} cards from a deck of {}",
            count,
            self.cards.len()
        );
        (0..count).map(|_| self.draw_one(rng)).collect()
    }

    /// Return values to the deck.
    pub fn add_cards(&mut self, values: impl IntoIterator<Item = CardValue>) {
        self.cards.extend(values);
    }

    /// Reorder the remaining values.
    pub fn shuffle(&mut self, rng: &mut impl Randomness) {
        let mut values: Vec<CardValue> = self.cards.iter().copied().collect();
        rng.shuffle(&mut values);
        self.cards = values.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    /// Always draws the first remaining value.
    struct FirstIndex;

    impl Randomness for FirstIndex {
        fn index(&mut self, _upper: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_create_sequential_run() {
        let deck = Deck::create(2, 6);
        let values: Vec<_> = deck.iter().copied().collect();
        assert_eq!(values, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_draw_one() {
        let mut deck = Deck::new([1, 2, 3]);

        let drawn = deck.draw_one(&mut FirstIndex);

        assert_eq!(drawn, 1);
        assert_eq!(deck.size(), 2);
        assert!(!deck.contains(1));
    }

    #[test]
    fn test_draw_in_draw_order() {
        let mut deck = Deck::create(2, 10);
        let drawn = deck.draw(3, &mut FirstIndex);
        assert_eq!(drawn, vec![2, 3, 4]);
        assert_eq!(deck.size(), 5);
    }

    #[test]
    fn test_draw_is_disjoint_from_remaining() {
        let mut deck = Deck::create(2, 100);
        let mut rng = GameRng::new(42);

        let drawn = deck.draw(20, &mut rng);

        assert_eq!(deck.size(), 78);
        for value in &drawn {
            assert!(!deck.contains(*value));
        }

        let mut all: Vec<_> = deck.iter().copied().chain(drawn).collect();
        all.sort_unstable();
        assert_eq!(all, (2..100).collect::<Vec<_>>());
    }

    #[test]
    #[should_panic(expected = "Cannot draw 4 cards from a deck of 3")]
    fn test_overdraw_panics() {
        let mut deck = Deck::new([1, 2, 3]);
        deck.draw(4, &mut FirstIndex);
    }

    #[test]
    fn test_add_cards() {
        let mut deck = Deck::new([1, 2, 3]);
        deck.add_cards([4, 5]);
        assert_eq!(deck.size(), 5);
    }

    #[test]
    fn test_shuffle_keeps_values() {
        let mut deck = Deck::create(2, 30);
        deck.shuffle(&mut GameRng::new(3));

        let mut values: Vec<_> = deck.iter().copied().collect();
        values.sort_unstable();
        assert_eq!(values, (2..30).collect::<Vec<_>>());
    }
}
