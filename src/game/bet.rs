use alloc::vec::Vec;

use tracing::{debug, info};

use crate::error::{BetError, DealError};
use crate::hand::PlayerHand;
use crate::observer::{Operation, Stopwatch};

use super::{Game, GameState};

impl Game {
    /// Opens the betting phase for a new round.
    ///
    /// With betting enabled, players without funds are removed from the table.
    /// With betting disabled, every seated player is entered with a zero bet.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn start_betting(&self) -> Result<(), BetError> {
        let mut state = self.state.lock();
        if *state != GameState::WaitingForPlayers && *state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let mut players = self.players.lock();
        if self.options.enable_betting {
            let mut funds = self.funds.lock();
            players.retain(|id| {
                let solvent = funds.get(id).is_some_and(|&amount| amount > 0);
                if !solvent {
                    funds.remove(id);
                    info!(player_id = *id, "player out of funds, removed from the table");
                }
                solvent
            });
        } else {
            let mut bets = self.bets.lock();
            for &id in players.iter() {
                bets.insert(id, 0);
            }
        }
        drop(players);

        *state = GameState::Betting;
        Ok(())
    }

    /// Places a bet for the specified player.
    ///
    /// The amount is moved out of the player's funds immediately and held in
    /// escrow until settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is disabled, the game is not in betting
    /// state, the player cannot be found or has already bet, the bet is zero,
    /// or the player lacks funds.
    pub fn bet(&self, player_id: u8, amount: usize) -> Result<(), BetError> {
        if !self.options.enable_betting {
            return Err(BetError::BettingDisabled);
        }

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        let state = self.state.lock();
        if *state != GameState::Betting {
            return Err(BetError::InvalidState);
        }
        drop(state);

        if self.bets.lock().contains_key(&player_id) {
            return Err(BetError::AlreadyBet);
        }

        let mut funds = self.funds.lock();
        let player_funds = funds.get_mut(&player_id).ok_or(BetError::PlayerNotFound)?;

        if *player_funds < amount {
            return Err(BetError::InsufficientFunds);
        }

        *player_funds -= amount;
        let remaining = *player_funds;
        drop(funds);

        self.bets.lock().insert(player_id, amount);
        debug!(player_id, amount, remaining, "bet placed");

        Ok(())
    }

    /// Deals the opening cards.
    ///
    /// The deck is replaced first if it cannot cover the round. Each player
    /// who bet then receives two cards in seat order, followed by two cards
    /// for the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, no bets have been
    /// placed, or the deck runs out. After a deck failure the round must be
    /// voided with [`abort_round`](Self::abort_round).
    pub fn deal(&self) -> Result<(), DealError> {
        let mut state = self.state.lock();
        if *state != GameState::Betting {
            return Err(DealError::InvalidState);
        }

        let players = self.players.lock();
        let bets = self.bets.lock();
        if bets.is_empty() {
            return Err(DealError::NoBets);
        }

        let round_players: Vec<u8> = players
            .iter()
            .filter(|id| bets.contains_key(*id))
            .copied()
            .collect();
        drop(bets);
        drop(players);

        *state = GameState::Dealing;
        drop(state);

        let watch = Stopwatch::start();
        self.replenish_for(round_players.len());

        (*self.round_order.lock()).clone_from(&round_players);
        *self.current_turn.lock() = 0;

        let mut hands = self.hands.lock();
        hands.clear();
        for &player_id in &round_players {
            let mut hand = PlayerHand::new();
            hand.add_card(self.draw()?);
            hand.add_card(self.draw()?);
            hands.insert(player_id, hand);
        }
        drop(hands);

        let mut dealer = self.dealer_hand.lock();
        dealer.clear();
        dealer.add_card(self.draw()?);
        dealer.add_card(self.draw()?);
        drop(dealer);

        self.record(Operation::InitialDeal, &watch);
        debug!(
            players = round_players.len(),
            cards_remaining = self.cards_remaining(),
            "opening cards dealt"
        );

        *self.state.lock() = GameState::PlayerTurn;
        self.skip_finished_hands();

        Ok(())
    }
}
