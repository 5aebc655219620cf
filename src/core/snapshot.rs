//! Plain-data session snapshots.
//!
//! `GameSnapshot` is the field-for-field view of a `GameState` that crosses
//! the transport boundary. Converting it back yields a fully working
//! state. `GameState::from_bytes` additionally checks that the snapshot
//! describes a consistent game before handing it out.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::config::RuleSet;
use super::error::EngineError;
use super::player::{PlayerId, Roster};
use super::state::GameState;
use crate::cards::{Card, CardValue, Deck, Hand};
use crate::piles::Pile;
use crate::voting::Vote;

/// Plain session data, values only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Roster,
    pub rule_set: RuleSet,
    pub deck: Deck,
    pub hands: FxHashMap<PlayerId, Hand>,
    pub piles: Vec<Pile>,
    pub starting_player_vote: Vote,
    pub starting_player: Option<PlayerId>,
    pub has_started: bool,
    pub turns_played: u32,
    pub current_player_index: usize,
    pub card_to_play: Option<Card>,
    pub cards_played_this_turn: usize,
    pub cards_mulliganed: usize,
}

impl From<GameSnapshot> for GameState {
    fn from(snapshot: GameSnapshot) -> Self {
        Self {
            players: snapshot.players,
            rule_set: snapshot.rule_set,
            deck: snapshot.deck,
            hands: snapshot.hands,
            piles: snapshot.piles,
            starting_player_vote: snapshot.starting_player_vote,
            starting_player: snapshot.starting_player,
            has_started: snapshot.has_started,
            turns_played: snapshot.turns_played,
            current_player_index: snapshot.current_player_index,
            card_to_play: snapshot.card_to_play,
            cards_played_this_turn: snapshot.cards_played_this_turn,
            cards_mulliganed: snapshot.cards_mulliganed,
        }
    }
}

impl From<GameState> for GameSnapshot {
    fn from(state: GameState) -> Self {
        Self {
            players: state.players,
            rule_set: state.rule_set,
            deck: state.deck,
            hands: state.hands,
            piles: state.piles,
            starting_player_vote: state.starting_player_vote,
            starting_player: state.starting_player,
            has_started: state.has_started,
            turns_played: state.turns_played,
            current_player_index: state.current_player_index,
            card_to_play: state.card_to_play,
            cards_played_this_turn: state.cards_played_this_turn,
            cards_mulliganed: state.cards_mulliganed,
        }
    }
}

impl GameState {
    /// Encode the session for transport or storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a session and check it is consistent.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let state: GameState = bincode::deserialize(bytes)?;
        state.validate()?;
        Ok(state)
    }

    /// Check the structural invariants of a session.
    ///
    /// The rule set itself must pass `RuleSet::validate`.
    ///
    /// Card conservation is only checked once the game has started:
    /// every value in `[2, top_limit)` sits in exactly one of the deck,
    /// a hand, or a pile.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.rule_set.validate()?;

        if let Some(stray) = self.hands.keys().find(|p| !self.players.contains(p)) {
            return Err(EngineError::inconsistent(format!(
                "hand held by {} who is not on the roster",
                stray
            )));
        }

        if !self.players.is_empty() && self.current_player_index >= self.players.len() {
            return Err(EngineError::inconsistent(format!(
                "current player index {} out of range for {} players",
                self.current_player_index,
                self.players.len()
            )));
        }

        let expected_piles = self.rule_set.pairs_of_piles().checked_mul(2).ok_or_else(|| {
            EngineError::inconsistent(format!(
                "{} pairs of piles is out of range",
                self.rule_set.pairs_of_piles()
            ))
        })?;
        if self.piles.len() != expected_piles {
            return Err(EngineError::inconsistent(format!(
                "expected {} piles, found {}",
                expected_piles,
                self.piles.len()
            )));
        }

        if self.has_started {
            self.check_card_conservation()?;
        }

        Ok(())
    }

    fn check_card_conservation(&self) -> Result<(), EngineError> {
        let top_limit = self.rule_set.top_limit();
        let in_deck = self.deck.iter().copied();
        let in_hands = self.hands.values().flat_map(Hand::values);
        let on_piles = self.piles.iter().flat_map(|p| p.history().map(|placed| placed.card.value));

        let mut seen: FxHashSet<CardValue> = FxHashSet::default();
        for value in in_deck.chain(in_hands).chain(on_piles) {
            if !(2..top_limit).contains(&value) {
                return Err(EngineError::inconsistent(format!(
                    "card {} outside [2, {})",
                    value, top_limit
                )));
            }
            if !seen.insert(value) {
                return Err(EngineError::inconsistent(format!("card {} appears twice", value)));
            }
        }

        let expected = top_limit.saturating_sub(2) as usize;
        if seen.len() != expected {
            return Err(EngineError::inconsistent(format!(
                "{} of {} cards accounted for",
                seen.len(),
                expected
            )));
        }

        Ok(())
    }
}
