//! Game engine and state management.

extern crate alloc;

use core::sync::atomic::{AtomicU8, AtomicU32, Ordering};

use alloc::boxed::Box;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::{debug, info, trace, warn};

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{EmptyDeckError, JoinError, ReshuffleError};
use crate::hand::{DealerHand, PlayerHand};
use crate::observer::{NoopObserver, Observer, Operation, Stopwatch};
use crate::options::{GameOptions, TABLE_LIMIT};

mod actions;
mod bet;
mod dealer;
mod round;
pub mod state;

pub use dealer::dealer_should_hit;
pub use round::MIN_BET;
pub use state::GameState;

/// A blackjack game engine that manages players, betting, and round flow.
///
/// The game owns the deck, player funds, and every hand in play. Rounds can be
/// driven step by step ([`start_betting`](Self::start_betting),
/// [`bet`](Self::bet), [`deal`](Self::deal), [`hit`](Self::hit),
/// [`stand`](Self::stand), [`dealer_play`](Self::dealer_play),
/// [`settle`](Self::settle)) or in one call with
/// [`play_round`](Self::play_round).
pub struct Game {
    /// The deck cards are drawn from.
    pub deck: Mutex<Deck>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Next player ID to assign.
    next_id: AtomicU8,
    /// Seated player IDs, in seat order.
    pub players: Mutex<Vec<u8>>,
    /// Player funds not committed to a bet (`player_id` -> amount).
    pub funds: Mutex<HashMap<u8, usize>>,
    /// Escrowed bets for the current round (`player_id` -> bet amount).
    pub bets: Mutex<HashMap<u8, usize>>,
    /// Player hands for the current round.
    pub hands: Mutex<HashMap<u8, PlayerHand>>,
    /// Dealer's hand.
    pub dealer_hand: Mutex<DealerHand>,
    /// Players dealt into this round, in seat order.
    round_order: Mutex<Vec<u8>>,
    /// Index into `round_order` of the player whose turn it is.
    current_turn: Mutex<usize>,
    /// Number of settled rounds.
    rounds_played: AtomicU32,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
    observer: Box<dyn Observer>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::{DECK_SIZE, Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            deck: Mutex::new(deck),
            options,
            state: Mutex::new(GameState::WaitingForPlayers),
            next_id: AtomicU8::new(0),
            players: Mutex::new(Vec::new()),
            funds: Mutex::new(HashMap::new()),
            bets: Mutex::new(HashMap::new()),
            hands: Mutex::new(HashMap::new()),
            dealer_hand: Mutex::new(DealerHand::new()),
            round_order: Mutex::new(Vec::new()),
            current_turn: Mutex::new(0),
            rounds_played: AtomicU32::new(0),
            rng: Mutex::new(rng),
            observer: Box::new(NoopObserver),
        }
    }

    /// Installs an observer that receives operation timings.
    #[must_use]
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub(crate) fn record(&self, operation: Operation, watch: &Stopwatch) {
        self.observer.record(operation, watch.elapsed());
    }

    /// Replaces the deck with a freshly shuffled one.
    fn replace_deck(&self) {
        let watch = Stopwatch::start();
        let fresh = Deck::shuffled(&mut *self.rng.lock());
        *self.deck.lock() = fresh;
        self.record(Operation::Shuffle, &watch);
    }

    /// Replaces the deck with a freshly shuffled one.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress (not in `WaitingForPlayers`
    /// or `Betting` state).
    pub fn reshuffle(&self) -> Result<(), ReshuffleError> {
        let state = *self.state.lock();
        if state != GameState::WaitingForPlayers && state != GameState::Betting {
            return Err(ReshuffleError::InvalidState);
        }

        self.replace_deck();
        debug!("deck reshuffled on request");
        Ok(())
    }

    /// Returns whether the deck is too short for a round with `players`
    /// players.
    pub fn needs_reshuffle(&self, players: usize) -> bool {
        self.cards_remaining() < GameOptions::cards_required(players)
    }

    /// Replaces the deck if it cannot cover a round with `players` players.
    ///
    /// Returns `true` if the deck was replaced.
    pub(crate) fn replenish_for(&self, players: usize) -> bool {
        if !self.needs_reshuffle(players) {
            return false;
        }

        let remaining = self.cards_remaining();
        self.replace_deck();
        info!(
            remaining,
            required = GameOptions::cards_required(players),
            "deck running low, replaced with a fresh deck"
        );
        true
    }

    /// Draws a card from the top of the deck.
    pub(crate) fn draw(&self) -> Result<Card, EmptyDeckError> {
        let watch = Stopwatch::start();
        let card = self.deck.lock().deal();
        self.record(Operation::Deal, &watch);
        if let Ok(card) = &card {
            trace!(%card, "card drawn");
        }
        card
    }

    /// Joins the game with the specified funds.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error if every seat is taken, or if betting is enabled and
    /// `funds` is zero.
    pub fn join(&self, funds: usize) -> Result<u8, JoinError> {
        if self.options.enable_betting && funds == 0 {
            return Err(JoinError::NoFunds);
        }

        let mut players = self.players.lock();
        if players.len() >= self.options.max_players.min(TABLE_LIMIT) {
            return Err(JoinError::TableFull);
        }

        // Ids wrap after 255; seated ids are skipped.
        let id = loop {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            if !players.contains(&id) {
                break id;
            }
        };
        players.push(id);
        drop(players);
        self.funds.lock().insert(id, funds);

        debug!(player_id = id, funds, "player joined");
        Ok(id)
    }

    /// Joins the game with [`GameOptions::starting_funds`].
    ///
    /// # Errors
    ///
    /// See [`join`](Self::join).
    pub fn join_default(&self) -> Result<u8, JoinError> {
        self.join(self.options.starting_funds)
    }

    /// Leaves the game.
    ///
    /// Any bet escrowed for the current round is forfeited. Leaving during
    /// the player-turn phase passes the turn on if it was the leaver's.
    pub fn leave(&self, player_id: u8) {
        self.players.lock().retain(|&id| id != player_id);
        self.funds.lock().remove(&player_id);
        self.bets.lock().remove(&player_id);
        self.hands.lock().remove(&player_id);
        debug!(player_id, "player left");

        if self.state() == GameState::PlayerTurn {
            self.skip_finished_hands();
        }
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns the seated player IDs in seat order.
    pub fn player_ids(&self) -> Vec<u8> {
        self.players.lock().clone()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the number of settled rounds.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played.load(Ordering::SeqCst)
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` outside of the player-turn phase.
    pub fn current_player(&self) -> Option<u8> {
        if *self.state.lock() != GameState::PlayerTurn {
            return None;
        }
        let turn = *self.current_turn.lock();
        self.round_order.lock().get(turn).copied()
    }

    /// Returns the current bet for the specified player.
    pub fn get_bet(&self, player_id: u8) -> Option<usize> {
        self.bets.lock().get(&player_id).copied()
    }

    /// Returns the current funds for the specified player.
    pub fn get_funds(&self, player_id: u8) -> Option<usize> {
        self.funds.lock().get(&player_id).copied()
    }

    /// Returns the player's hand for the current round.
    pub fn get_hand(&self, player_id: u8) -> Option<PlayerHand> {
        self.hands.lock().get(&player_id).cloned()
    }

    /// Returns a clone of the dealer's hand.
    pub fn get_dealer_hand(&self) -> DealerHand {
        self.dealer_hand.lock().clone()
    }

    /// Returns whether no further round can be played.
    ///
    /// The game is over once the round limit is reached, once no player is
    /// seated, or, with betting enabled, once no player has funds left.
    pub fn is_game_over(&self) -> bool {
        if self
            .options
            .max_rounds
            .is_some_and(|max| self.rounds_played() >= max)
        {
            return true;
        }

        let players = self.players.lock();
        if players.is_empty() {
            return true;
        }
        if !self.options.enable_betting {
            return false;
        }

        let funds = self.funds.lock();
        !players
            .iter()
            .any(|id| funds.get(id).is_some_and(|&amount| amount > 0))
    }

    /// Clears all hands and bets (called at the end of a round).
    ///
    /// This also resets the turn position and returns the game to the
    /// `WaitingForPlayers` state.
    pub fn clear_round(&self) {
        self.bets.lock().clear();
        self.hands.lock().clear();
        self.dealer_hand.lock().clear();
        self.round_order.lock().clear();
        *self.current_turn.lock() = 0;
        *self.state.lock() = GameState::WaitingForPlayers;
    }

    /// Voids the current round.
    ///
    /// Every escrowed bet is returned to its player and the round is cleared,
    /// leaving funds exactly as they were before betting opened.
    pub fn abort_round(&self) {
        let bets: Vec<(u8, usize)> = self.bets.lock().drain().collect();
        let mut funds = self.funds.lock();
        for (player_id, bet) in bets {
            if let Some(amount) = funds.get_mut(&player_id) {
                *amount += bet;
            }
        }
        drop(funds);

        warn!(state = ?self.state(), "round aborted, bets refunded");
        self.clear_round();
    }
}
