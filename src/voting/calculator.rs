//! Vote winner strategies.

use rustc_hash::FxHashSet;

use super::vote::Vote;
use crate::core::PlayerId;

/// Strategy for deciding the winner of a vote.
///
/// Implementations see every vote cast so far, complete or not.
pub trait VoteCalculator {
    /// Return the winning candidate, or `None` if there is none yet.
    fn winner(&self, vote: &Vote) -> Option<PlayerId>;
}

/// Winner exists only when every cast vote names the same candidate.
///
/// An early unanimous result is allowed before all voters have voted.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnanimousVoteCalculator;

impl VoteCalculator for UnanimousVoteCalculator {
    fn winner(&self, vote: &Vote) -> Option<PlayerId> {
        let candidates: FxHashSet<&PlayerId> = vote.votes().map(|(_, choice)| choice).collect();

        if candidates.len() != 1 {
            return None;
        }
        candidates.into_iter().next().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote_with(voters: &[&str], votes: &[(&str, &str)]) -> Vote {
        let mut vote = Vote::new();
        vote.set_voters(voters.iter().map(|&v| PlayerId::new(v)));
        for &(voter, choice) in votes {
            vote.add_vote(&PlayerId::new(voter), PlayerId::new(choice));
        }
        vote
    }

    #[test]
    fn test_unanimous_winner() {
        let vote = vote_with(
            &["voter1", "voter2", "voter3"],
            &[("voter1", "voter1"), ("voter2", "voter1"), ("voter3", "voter1")],
        );
        assert_eq!(UnanimousVoteCalculator.winner(&vote), Some(PlayerId::new("voter1")));
    }

    #[test]
    fn test_split_vote_has_no_winner() {
        let vote = vote_with(
            &["voter1", "voter2", "voter3"],
            &[("voter1", "voter1"), ("voter2", "voter2"), ("voter3", "voter1")],
        );
        assert_eq!(UnanimousVoteCalculator.winner(&vote), None);
    }

    #[test]
    fn test_no_votes_has_no_winner() {
        let vote = vote_with(&["voter1", "voter2", "voter3"], &[]);
        assert_eq!(UnanimousVoteCalculator.winner(&vote), None);
    }

    #[test]
    fn test_early_unanimous_result() {
        let vote = vote_with(&["voter1", "voter2", "voter3"], &[("voter2", "voter3")]);
        assert!(!vote.is_complete());
        assert_eq!(UnanimousVoteCalculator.winner(&vote), Some(PlayerId::new("voter3")));
    }
}
