//! Starting-player vote tests.

use pile_engine::core::PlayerId;
use pile_engine::voting::{UnanimousVoteCalculator, Vote, VoteCalculator, VoteResult};

fn ids(names: &[&str]) -> Vec<PlayerId> {
    names.iter().map(|&n| PlayerId::new(n)).collect()
}

fn vote_over(names: &[&str]) -> Vote {
    let mut vote = Vote::new();
    vote.set_voters(ids(names));
    vote
}

#[test]
fn test_all_agree() {
    let mut vote = vote_over(&["a", "b", "c"]);
    let x = PlayerId::new("x");
    for voter in ids(&["a", "b", "c"]) {
        vote.add_vote(&voter, x.clone());
    }

    assert!(vote.is_complete());
    assert_eq!(vote.winner(), Some(x));
}

#[test]
fn test_disagreement_has_no_winner() {
    let mut vote = vote_over(&["a", "b", "c"]);
    let (x, y) = (PlayerId::new("x"), PlayerId::new("y"));
    vote.add_vote(&PlayerId::new("a"), x.clone());
    vote.add_vote(&PlayerId::new("b"), y);
    vote.add_vote(&PlayerId::new("c"), x);

    assert_eq!(vote.winner(), None);
}

#[test]
fn test_no_votes_no_winner() {
    let vote = vote_over(&["a", "b", "c"]);
    assert_eq!(vote.winner(), None);
    assert!(!vote.is_complete());
}

#[test]
fn test_changing_a_vote_can_reach_agreement() {
    let mut vote = vote_over(&["a", "b"]);
    let (a, b) = (PlayerId::new("a"), PlayerId::new("b"));
    vote.add_vote(&a, a.clone());
    vote.add_vote(&b, b.clone());
    assert_eq!(vote.winner(), None);

    assert_eq!(vote.add_vote(&b, a.clone()), VoteResult::Success);
    assert_eq!(vote.winner(), Some(a));
}

#[test]
fn test_withdrawn_vote_leaves_remaining_agreement() {
    let mut vote = vote_over(&["a", "b"]);
    let (a, b) = (PlayerId::new("a"), PlayerId::new("b"));
    vote.add_vote(&a, a.clone());
    vote.add_vote(&b, b.clone());

    assert_eq!(vote.remove_vote(&b), VoteResult::Success);
    assert!(!vote.is_complete());
    assert_eq!(vote.winner_with(&UnanimousVoteCalculator), Some(a));
}

#[test]
fn test_non_voter_is_denied() {
    let mut vote = vote_over(&["a"]);
    assert_eq!(
        vote.add_vote(&PlayerId::new("z"), PlayerId::new("a")),
        VoteResult::Denied
    );
}

#[test]
fn test_closed_vote_rejects() {
    let mut vote = vote_over(&["a"]);
    vote.close();

    assert_eq!(
        vote.add_vote(&PlayerId::new("a"), PlayerId::new("a")),
        VoteResult::Closed
    );
    assert_eq!(vote.remove_vote(&PlayerId::new("a")), VoteResult::Closed);
}

/// Most votes wins; ties have no winner.
struct Plurality;

impl VoteCalculator for Plurality {
    fn winner(&self, vote: &Vote) -> Option<PlayerId> {
        let mut counts: Vec<(PlayerId, usize)> = Vec::new();
        for (_, choice) in vote.votes() {
            let position = counts.iter().position(|(c, _)| c == choice);
            match position {
                Some(i) => counts[i].1 += 1,
                None => counts.push((choice.clone(), 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        match counts.as_slice() {
            [(first, n), (_, m), ..] if n > m => Some(first.clone()),
            [(first, _)] => Some(first.clone()),
            _ => None,
        }
    }
}

#[test]
fn test_other_strategies_plug_in() {
    let mut vote = vote_over(&["a", "b", "c"]);
    let (x, y) = (PlayerId::new("x"), PlayerId::new("y"));
    vote.add_vote(&PlayerId::new("a"), x.clone());
    vote.add_vote(&PlayerId::new("b"), y);
    vote.add_vote(&PlayerId::new("c"), x.clone());

    assert_eq!(vote.winner(), None);
    assert_eq!(vote.winner_with(&Plurality), Some(x));
}
