//! Starting-player vote.
//!
//! A vote is open until closed, and closed for good. Only the voters fixed
//! by `set_voters` may cast or withdraw votes.
//!
//! ```
//! use pile_engine::core::PlayerId;
//! use pile_engine::voting::{Vote, VoteResult};
//!
//! let ann = PlayerId::new("ann");
//! let bob = PlayerId::new("bob");
//!
//! let mut vote = Vote::new();
//! vote.set_voters([ann.clone(), bob.clone()]);
//!
//! assert_eq!(vote.add_vote(&ann, bob.clone()), VoteResult::Success);
//! assert_eq!(vote.add_vote(&bob, bob.clone()), VoteResult::Success);
//! assert_eq!(vote.winner(), Some(bob.clone()));
//!
//! vote.close();
//! assert_eq!(vote.add_vote(&ann, ann.clone()), VoteResult::Closed);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::calculator::{UnanimousVoteCalculator, VoteCalculator};
use crate::core::PlayerId;

/// Outcome of casting or withdrawing a vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteResult {
    Success,
    /// The voter is not eligible.
    Denied,
    /// The vote has been closed.
    Closed,
    /// No vote exists to act on.
    NonExistent,
}

/// Which strategy decides the winner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteCalculationMethod {
    #[default]
    Unanimous,
}

impl VoteCalculationMethod {
    /// The strategy for this method.
    #[must_use]
    pub fn calculator(self) -> Box<dyn VoteCalculator> {
        match self {
            VoteCalculationMethod::Unanimous => Box::new(UnanimousVoteCalculator),
        }
    }
}

/// Map of voters to their chosen candidates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    voters: Vec<PlayerId>,
    choices: FxHashMap<PlayerId, PlayerId>,
    method: VoteCalculationMethod,
    is_closed: bool,
}

impl Vote {
    /// An empty, open vote with no voters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty vote using a specific calculation method.
    #[must_use]
    pub fn with_method(method: VoteCalculationMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Fix the eligible voters.
    ///
    /// Voters can only be set once, on an open vote. Returns whether they
    /// were set.
    pub fn set_voters(&mut self, voters: impl IntoIterator<Item = PlayerId>) -> bool {
        if self.is_closed || !self.voters.is_empty() {
            return false;
        }

        self.voters = voters.into_iter().collect();
        true
    }

    #[must_use]
    pub fn voters(&self) -> &[PlayerId] {
        &self.voters
    }

    #[must_use]
    pub fn method(&self) -> VoteCalculationMethod {
        self.method
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    fn check_voter(&self, voter: &PlayerId) -> Option<VoteResult> {
        if self.is_closed {
            Some(VoteResult::Closed)
        } else if !self.voters.contains(voter) {
            Some(VoteResult::Denied)
        } else {
            None
        }
    }

    /// Cast or overwrite a voter's choice.
    pub fn add_vote(&mut self, voter: &PlayerId, choice: PlayerId) -> VoteResult {
        if let Some(rejection) = self.check_voter(voter) {
            return rejection;
        }

        self.choices.insert(voter.clone(), choice);
        VoteResult::Success
    }

    /// Withdraw a voter's choice.
    pub fn remove_vote(&mut self, voter: &PlayerId) -> VoteResult {
        if let Some(rejection) = self.check_voter(voter) {
            return rejection;
        }

        self.choices.remove(voter);
        VoteResult::Success
    }

    #[must_use]
    pub fn has_voted(&self, voter: &PlayerId) -> bool {
        self.choices.contains_key(voter)
    }

    /// Every eligible voter has a vote recorded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.voters.iter().filter(|v| self.has_voted(v)).count() == self.voters.len()
    }

    /// Cast votes as (voter, choice) pairs.
    pub fn votes(&self) -> impl Iterator<Item = (&PlayerId, &PlayerId)> {
        self.choices.iter()
    }

    /// Winner under this vote's own method.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.method.calculator().winner(self)
    }

    /// Winner under an injected strategy.
    #[must_use]
    pub fn winner_with(&self, calculator: &dyn VoteCalculator) -> Option<PlayerId> {
        calculator.winner(self)
    }

    /// Close the vote. No further votes are accepted.
    pub fn close(&mut self) {
        self.is_closed = true;
    }
}
