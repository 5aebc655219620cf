//! # pile-engine
//!
//! Rules and state engine for a cooperative card-pile game.
//!
//! Players share a deck of values `[2, top_limit)` and try to empty it by
//! placing cards on shared piles: ascending piles start at 1, descending
//! piles start at `top_limit`. A card may also go "backwards" by exactly
//! the jump-back size.
//!
//! ## Design Principles
//!
//! 1. **Rule outcomes are values**: illegal placements, refused mulligans
//!    and denied votes return results and leave state untouched.
//!
//! 2. **Injected randomness**: every draw takes a `Randomness`, so hosts
//!    use `GameRng` and tests script exact sequences.
//!
//! 3. **Plain snapshots**: every entity serializes to plain data and
//!    rehydrates with full behavior.
//!
//! ## Modules
//!
//! - `core`: players, randomness, rule set, errors, `GameState`
//! - `cards`: cards, deck, hands
//! - `piles`: pile placement and fire rules
//! - `voting`: starting-player vote
//!
//! ## Example
//!
//! ```
//! use pile_engine::{Card, GameRng, GameState, PlayResult, PlayerId, RuleSet};
//!
//! let mut rng = GameRng::new(7);
//! let mut game = GameState::with_rule_set(RuleSet::default());
//! let ann = PlayerId::new("ann");
//!
//! game.start([ann.clone()], &mut rng);
//! let card = game.hand(&ann).unwrap().cards()[0].clone();
//!
//! // Any card goes on a fresh ascending pile
//! assert_eq!(game.play_card(&ann, &card, 0), PlayResult::Success);
//! game.replenish(&mut rng);
//! game.end_turn();
//! ```

pub mod cards;
pub mod core;
pub mod piles;
pub mod voting;

// Re-export commonly used types
pub use crate::core::{
    EngineError, GameMode, GamePhase, GameRng, GameRngState, GameSnapshot, GameStartResult,
    GameState, Mulligan, PlayResult, PlayerId, Randomness, Roster, RuleSet, RuleSetBuilder,
};

pub use crate::cards::{Card, CardInfo, CardValue, Deck, Hand};

pub use crate::piles::{Direction, Pile, PileState, PlacedCard};

pub use crate::voting::{
    UnanimousVoteCalculator, Vote, VoteCalculationMethod, VoteCalculator, VoteResult,
};
