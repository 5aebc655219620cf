//! Engine error type.
//!
//! Game-rule outcomes (illegal placements, denied votes, refused mulligans)
//! are plain values, never errors. `EngineError` only covers operations
//! that can fail for reasons outside the rules: bad configuration and
//! snapshots that do not decode or do not describe a consistent game.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid rule set: {message}")]
    InvalidRuleSet { message: String },

    #[error("snapshot could not be decoded: {0}")]
    Decode(#[from] bincode::Error),

    #[error("inconsistent snapshot: {message}")]
    InconsistentSnapshot { message: String },
}

impl EngineError {
    pub(crate) fn invalid_rules(message: impl Into<String>) -> Self {
        Self::InvalidRuleSet {
            message: message.into(),
        }
    }

    pub(crate) fn inconsistent(message: impl Into<String>) -> Self {
        Self::InconsistentSnapshot {
            message: message.into(),
        }
    }
}
