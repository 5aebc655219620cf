//! Cards, the shared deck, and player hands.
//!
//! - `Card`: a value plus the player it was dealt to
//! - `CardInfo`: who placed a card on a pile and on which turn
//! - `Deck`: undrawn values, drawn by injected random index
//! - `Hand`: a player's held cards

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, CardInfo, CardValue};
pub use deck::Deck;
pub use hand::Hand;
