//! Core engine types: players, randomness, rules, errors and session state.
//!
//! `GameState` is the entry point for a session manager. Everything it
//! consumes from outside (player roster, randomness) is passed in.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use config::{GameMode, OnFireCards, RuleSet, RuleSetBuilder};
pub use error::EngineError;
pub use player::{PlayerId, Roster};
pub use rng::{GameRng, GameRngState, Randomness};
pub use snapshot::GameSnapshot;
pub use state::{GamePhase, GameStartResult, GameState, Mulligan, PlayResult};
