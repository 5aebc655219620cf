//! A player's held cards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardValue};

/// Cards held by one player, in the order they were received.
///
/// Inline storage covers the default hand size without allocating.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the hand holds a card with this value.
    #[must_use]
    pub fn contains(&self, value: CardValue) -> bool {
        self.cards.iter().any(|c| c.value == value)
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the first card with the same value as `card`.
    ///
    /// Panics if no such card is held.
    pub fn remove(&mut self, card: &Card) -> Card {
        let index = self
            .cards
            .iter()
            .position(|c| c.value == card.value)
            .unwrap_or_else(|| panic!("Card {} is not in the hand", card.value));
        self.cards.remove(index)
    }

    /// Return a copy of this hand sorted ascending by value.
    ///
    /// The receiver is left as it was.
    #[must_use]
    pub fn sort(&self) -> Hand {
        let mut cards = self.cards.clone();
        cards.sort_by_key(|c| c.value);
        Hand { cards }
    }

    /// Card values in hand order.
    pub fn values(&self) -> impl Iterator<Item = CardValue> + '_ {
        self.cards.iter().map(|c| c.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn hand_of(values: &[CardValue]) -> Hand {
        Hand::new(values.iter().copied().map(Card::new))
    }

    #[test]
    fn test_add() {
        let mut hand = hand_of(&[1, 2, 3]);
        hand.add(Card::new(4));
        assert_eq!(hand.values().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_remove_is_value_keyed() {
        let mut hand = Hand::new([Card::owned(2, PlayerId::new("ann")), Card::new(3)]);

        let removed = hand.remove(&Card::new(2));

        assert_eq!(removed.owner, Some(PlayerId::new("ann")));
        assert_eq!(hand.values().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    #[should_panic(expected = "Card 9 is not in the hand")]
    fn test_remove_missing_panics() {
        let mut hand = hand_of(&[1, 2]);
        hand.remove(&Card::new(9));
    }

    #[test]
    fn test_sort_returns_new_hand() {
        let hand = hand_of(&[40, 3, 17]);

        let sorted = hand.sort();

        assert_eq!(sorted.values().collect::<Vec<_>>(), vec![3, 17, 40]);
        assert_eq!(hand.values().collect::<Vec<_>>(), vec![40, 3, 17]);
    }

    #[test]
    fn test_size_and_empty() {
        assert!(Hand::default().is_empty());
        let hand = hand_of(&[5]);
        assert_eq!(hand.size(), 1);
        assert!(hand.contains(5));
        assert!(!hand.contains(6));
    }
}
