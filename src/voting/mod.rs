//! Starting-player consensus.
//!
//! ## Key Types
//!
//! - `Vote`: voter set, cast choices, open/closed state
//! - `VoteCalculator`: pluggable winner strategy
//! - `UnanimousVoteCalculator`: all cast votes must agree

pub mod calculator;
pub mod vote;

pub use calculator::{UnanimousVoteCalculator, VoteCalculator};
pub use vote::{Vote, VoteCalculationMethod, VoteResult};
