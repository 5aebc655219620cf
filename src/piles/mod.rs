//! Shared piles: placement legality, mulligan eligibility and fire state.

pub mod pile;

pub use pile::{Direction, Pile, PileState, PlacedCard};
