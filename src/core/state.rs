//! Game session state.
//!
//! `GameState` composes the rule set, deck, hands, piles and starting-player
//! vote into one session lifecycle:
//!
//! - `NotStarted`: built from a rule set, nothing dealt
//! - `AwaitingStartingPlayer`: hands dealt, vote open (multi-player only)
//! - `InProgress`: starting player chosen, turns being played
//! - `Won` / `Lost`: derived from deck, hands and piles
//!
//! Every mutating call either fully applies or leaves the state untouched.
//! Rule outcomes come back as values; a hosting server serializes calls
//! per session.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::RuleSet;
use super::player::{PlayerId, Roster};
use super::rng::Randomness;
use super::snapshot::GameSnapshot;
use crate::cards::{Card, Deck, Hand};
use crate::piles::{Direction, Pile, PlacedCard};
use crate::voting::{Vote, VoteResult};

/// Result of choosing the starting player from the vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStartResult {
    Success,
    /// The vote has no winner yet.
    NoStartingPlayer,
    /// The vote's winner is not on the roster.
    NonExistent,
}

/// Result of playing a card onto a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayResult {
    Success,
    /// The pile does not accept the card.
    Illegal,
    /// The player does not hold the card.
    NotInHand,
    /// No such pile, or the player has no hand.
    NonExistent,
}

/// Derived lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    AwaitingStartingPlayer,
    InProgress,
    Won,
    Lost,
}

/// A successful mulligan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulligan {
    /// Card returned to the player's hand.
    pub card: Card,
    /// The pile's top after the card was taken back.
    pub new_top: Card,
}

/// Full session state.
///
/// Serializes through [`GameSnapshot`], the plain-data view used when a
/// session crosses the transport boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GameSnapshot", into = "GameSnapshot")]
pub struct GameState {
    pub(crate) players: Roster,
    pub(crate) rule_set: RuleSet,
    pub(crate) deck: Deck,
    pub(crate) hands: FxHashMap<PlayerId, Hand>,
    pub(crate) piles: Vec<Pile>,
    pub(crate) starting_player_vote: Vote,
    pub(crate) starting_player: Option<PlayerId>,
    pub(crate) has_started: bool,
    pub(crate) turns_played: u32,
    pub(crate) current_player_index: usize,
    pub(crate) card_to_play: Option<Card>,
    pub(crate) cards_played_this_turn: usize,
    pub(crate) cards_mulliganed: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_rule_set(RuleSet::default())
    }
}

impl GameState {
    /// Create a fresh session for a rule set.
    #[must_use]
    pub fn with_rule_set(rule_set: RuleSet) -> Self {
        Self {
            players: Roster::new(),
            deck: Self::create_deck(&rule_set),
            hands: FxHashMap::default(),
            piles: Self::create_piles(&rule_set),
            rule_set,
            starting_player_vote: Vote::new(),
            starting_player: None,
            has_started: false,
            turns_played: 0,
            current_player_index: 0,
            card_to_play: None,
            cards_played_this_turn: 0,
            cards_mulliganed: 0,
        }
    }

    /// The full deck for a rule set: `[2, top_limit)`.
    #[must_use]
    pub fn create_deck(rule_set: &RuleSet) -> Deck {
        Deck::create(2, rule_set.top_limit())
    }

    /// Ascending piles from 1, then descending piles from the top limit.
    #[must_use]
    pub fn create_piles(rule_set: &RuleSet) -> Vec<Pile> {
        let pairs = rule_set.pairs_of_piles();
        let ascending = (0..pairs).map(|_| Pile::new(1, Direction::Ascending));
        let descending = (0..pairs).map(|_| Pile::new(rule_set.top_limit(), Direction::Descending));
        ascending.chain(descending).collect()
    }

    // === Accessors ===

    #[must_use]
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    #[must_use]
    pub fn players(&self) -> &Roster {
        &self.players
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    #[must_use]
    pub fn pile(&self, index: usize) -> Option<&Pile> {
        self.piles.get(index)
    }

    /// Placements on a pile, bottom first.
    pub fn pile_history(&self, index: usize) -> Option<impl Iterator<Item = &PlacedCard>> {
        self.piles.get(index).map(Pile::history)
    }

    #[must_use]
    pub fn starting_player_vote(&self) -> &Vote {
        &self.starting_player_vote
    }

    #[must_use]
    pub fn starting_player(&self) -> Option<&PlayerId> {
        self.starting_player.as_ref()
    }

    #[must_use]
    pub fn has_started(&self) -> bool {
        self.has_started
    }

    /// Turn counter recorded on placements.
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    #[must_use]
    pub fn cards_played_this_turn(&self) -> usize {
        self.cards_played_this_turn
    }

    #[must_use]
    pub fn cards_mulliganed(&self) -> usize {
        self.cards_mulliganed
    }

    #[must_use]
    pub fn card_to_play(&self) -> Option<&Card> {
        self.card_to_play.as_ref()
    }

    /// Remember the card a client has selected.
    pub fn set_card_to_play(&mut self, card: Option<Card>) {
        self.card_to_play = card;
    }

    // === Rules ===

    /// Replace the rule set and rebuild the deck and piles.
    ///
    /// Any dealt session is discarded along with its hands; the next
    /// `start` deals from the new deck.
    pub fn set_rule_set(&mut self, rule_set: RuleSet) {
        self.clear();
        info!(
            pairs_of_piles = rule_set.pairs_of_piles(),
            top_limit = rule_set.top_limit(),
            game_mode = %rule_set.game_mode(),
            "Rule set replaced"
        );
        self.deck = Self::create_deck(&rule_set);
        self.piles = Self::create_piles(&rule_set);
        self.rule_set = rule_set;
    }

    // === Lifecycle ===

    /// Deal hands and open the starting-player vote.
    ///
    /// A single player starts immediately without a vote. Panics if the
    /// session has already started (call `clear` first) or if the deck
    /// cannot cover every hand.
    pub fn start(&mut self, players: impl IntoIterator<Item = PlayerId>, rng: &mut impl Randomness) {
        assert!(!self.has_started, "Game has already started");
        self.players = players.into_iter().collect();

        let hand_size = self.rule_set.hand_size();
        for player in self.players.iter() {
            let cards = self
                .deck
                .draw(hand_size, rng)
                .into_iter()
                .map(|value| Card::owned(value, player.clone()));
            self.hands.insert(player.clone(), Hand::new(cards));
        }

        if self.players.len() == 1 {
            self.starting_player = self.players.get(0).cloned();
        } else {
            self.starting_player_vote
                .set_voters(self.players.iter().cloned());
        }

        self.has_started = true;
        info!(players = self.players.len(), hand_size, "Game started");
    }

    pub fn add_starting_player_vote(&mut self, voter: &PlayerId, choice: PlayerId) -> VoteResult {
        self.starting_player_vote.add_vote(voter, choice)
    }

    pub fn remove_starting_player_vote(&mut self, voter: &PlayerId) -> VoteResult {
        self.starting_player_vote.remove_vote(voter)
    }

    #[must_use]
    pub fn is_starting_player_vote_complete(&self) -> bool {
        self.starting_player_vote.is_complete()
    }

    /// Settle the starting player from the vote.
    pub fn set_starting_player(&mut self) -> GameStartResult {
        let Some(winner) = self.starting_player_vote.winner() else {
            return GameStartResult::NoStartingPlayer;
        };
        let Some(index) = self.players.position(&winner) else {
            return GameStartResult::NonExistent;
        };

        self.starting_player_vote.close();
        self.current_player_index = index;
        info!(starting_player = %winner, "Starting player chosen");
        self.starting_player = Some(winner);

        GameStartResult::Success
    }

    #[must_use]
    pub fn starting_player_chosen(&self) -> bool {
        self.starting_player.is_some()
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.has_started && self.starting_player_chosen()
    }

    /// Current lifecycle phase. Win is checked before loss.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if !self.has_started {
            GamePhase::NotStarted
        } else if !self.starting_player_chosen() {
            GamePhase::AwaitingStartingPlayer
        } else if self.is_won() {
            GamePhase::Won
        } else if self.is_lost() {
            GamePhase::Lost
        } else {
            GamePhase::InProgress
        }
    }

    /// Reset the session fields. Held cards go back into the deck; piles
    /// and rules stay until `set_rule_set` rebuilds them.
    pub fn clear(&mut self) {
        self.players = Roster::new();
        for (_, hand) in self.hands.drain() {
            self.deck.add_cards(hand.values());
        }
        self.starting_player_vote = Vote::new();
        self.starting_player = None;
        self.has_started = false;
        self.turns_played = 0;
        self.current_player_index = 0;
        self.card_to_play = None;
        self.cards_played_this_turn = 0;
        self.cards_mulliganed = 0;
    }

    // === Players and hands ===

    #[must_use]
    pub fn player_is_present(&self, player: &PlayerId) -> bool {
        self.players.contains(player)
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&PlayerId> {
        self.players.get(self.current_player_index)
    }

    #[must_use]
    pub fn hand(&self, player: &PlayerId) -> Option<&Hand> {
        self.hands.get(player)
    }

    /// All hands, in no particular order.
    pub fn hands(&self) -> impl Iterator<Item = (&PlayerId, &Hand)> {
        self.hands.iter()
    }

    /// Replace a player's hand with its sorted copy.
    pub fn sort_hand(&mut self, player: &PlayerId) -> bool {
        match self.hands.get(player) {
            Some(hand) => {
                let sorted = hand.sort();
                self.hands.insert(player.clone(), sorted);
                true
            }
            None => false,
        }
    }

    /// Remove a player, shuffling their hand back into the deck.
    pub fn remove_player(&mut self, player: &PlayerId, rng: &mut impl Randomness) -> bool {
        if self.players.remove(player).is_none() {
            return false;
        }

        self.current_player_index = self.current_player_index.saturating_sub(1);

        if let Some(hand) = self.hands.remove(player) {
            self.deck.add_cards(hand.values());
            self.deck.shuffle(rng);
        }

        info!(player = %player, remaining = self.players.len(), "Player removed");
        true
    }

    /// Advance to the next player in roster order.
    pub fn next_player(&mut self) -> Option<&PlayerId> {
        if self.players.is_empty() {
            return None;
        }

        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        self.players.get(self.current_player_index)
    }

    // === Turn flow ===

    /// Place a card from a player's hand onto a pile.
    pub fn play_card(&mut self, player: &PlayerId, card: &Card, pile_index: usize) -> PlayResult {
        let Some(pile) = self.piles.get_mut(pile_index) else {
            return PlayResult::NonExistent;
        };
        let Some(hand) = self.hands.get_mut(player) else {
            return PlayResult::NonExistent;
        };
        if !hand.contains(card.value) {
            return PlayResult::NotInHand;
        }
        if !pile.can_be_played(card, &self.rule_set) {
            return PlayResult::Illegal;
        }

        let held = hand.remove(card);
        let placed = pile.push(held, player, self.turns_played, &self.rule_set);
        debug_assert!(placed, "legal card was rejected by pile");

        self.cards_played_this_turn += 1;
        debug!(
            player = %player,
            card = card.value,
            pile = pile_index,
            turn = self.turns_played,
            "Card played"
        );

        PlayResult::Success
    }

    /// Whether the session still has mulligans left.
    #[must_use]
    pub fn can_mulligan(&self) -> bool {
        self.cards_mulliganed < self.rule_set.mulligan_limit()
    }

    /// Take back the top card of a pile placed by `player` this turn.
    pub fn mulligan(&mut self, pile_index: usize, player: &PlayerId) -> Option<Mulligan> {
        let pile = self.piles.get_mut(pile_index)?;
        if !pile.can_mulligan(player, self.turns_played) {
            return None;
        }
        let hand = self.hands.get_mut(player)?;

        let card = pile.pop_card()?;
        hand.add(card.clone());
        self.cards_mulliganed += 1;

        let new_top = pile.top_card();
        debug!(
            player = %player,
            card = card.value,
            pile = pile_index,
            mulligans = self.cards_mulliganed,
            "Mulligan taken"
        );

        Some(Mulligan { card, new_top })
    }

    /// Cards the current player must play this turn.
    #[must_use]
    pub fn cards_required_this_turn(&self) -> usize {
        if self.deck.is_empty() {
            self.rule_set.cards_per_turn_in_endgame()
        } else {
            self.rule_set.cards_per_turn()
        }
    }

    /// Whether the current player has played enough to end the turn.
    #[must_use]
    pub fn turn_requirement_met(&self) -> bool {
        let hand_empty = self
            .current_player()
            .and_then(|p| self.hands.get(p))
            .map_or(true, Hand::is_empty);

        hand_empty || self.cards_played_this_turn >= self.cards_required_this_turn()
    }

    /// Refill the current player's hand by the number of cards played.
    ///
    /// Returns how many cards were drawn.
    pub fn replenish(&mut self, rng: &mut impl Randomness) -> usize {
        let Some(player) = self.players.get(self.current_player_index) else {
            return 0;
        };
        let Some(hand) = self.hands.get_mut(player) else {
            return 0;
        };

        let count = self.cards_played_this_turn.min(self.deck.size());
        for value in self.deck.draw(count, rng) {
            hand.add(Card::owned(value, player.clone()));
        }
        count
    }

    /// Close the turn: advance pile fire counters and the turn counter.
    pub fn end_turn(&mut self) {
        for pile in &mut self.piles {
            pile.end_turn(&self.rule_set);
        }
        self.cards_played_this_turn = 0;
        self.turns_played += 1;
        debug!(turn = self.turns_played, "Turn ended");
    }

    // === Outcome ===

    /// Deck and every hand are empty.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.deck.is_empty() && self.hands.values().all(Hand::is_empty)
    }

    /// A pile burned down, cards are stranded in the deck, or nobody can
    /// place any held card.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        if self.rule_set.is_on_fire() && self.piles.iter().any(|p| p.is_destroyed(&self.rule_set)) {
            return true;
        }

        let mut held = self.hands.values().filter(|h| !h.is_empty()).peekable();
        if held.peek().is_none() {
            return !self.deck.is_empty();
        }

        let playable = held.any(|hand| {
            hand.cards()
                .iter()
                .any(|card| self.piles.iter().any(|p| p.can_be_played(card, &self.rule_set)))
        });

        !playable
    }

    /// Plain-data view of this state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.clone().into()
    }
}
