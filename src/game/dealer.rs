use alloc::vec::Vec;
use core::sync::atomic::Ordering;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::{DealerError, SettleError};
use crate::hand::Hand;
use crate::options::DEALER_STANDS_ON;
use crate::result::{Outcome, PlayerResult, RoundResult};

use super::{Game, GameState};

/// Returns whether the dealer must draw another card on `hand`.
///
/// The dealer hits below 17 and stands on every 17, soft or hard.
#[must_use]
pub const fn dealer_should_hit(hand: &Hand) -> bool {
    hand.value() < DEALER_STANDS_ON
}

/// Signed result of a settled bet, saturating at the bounds of `isize`.
fn net_result(payout: usize, bet: usize) -> isize {
    if payout >= bet {
        isize::try_from(payout - bet).unwrap_or(isize::MAX)
    } else {
        isize::try_from(bet - payout).map_or(isize::MIN, |loss| -loss)
    }
}

impl Game {
    /// Dealer plays their hand.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher. Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck is
    /// empty while the dealer must draw.
    pub fn dealer_play(&self) -> Result<Vec<Card>, DealerError> {
        if *self.state.lock() != GameState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        self.dealer_hand.lock().reveal_hole();

        let mut drawn_cards = Vec::new();
        while dealer_should_hit(self.dealer_hand.lock().hand()) {
            let card = self.draw()?;
            self.dealer_hand.lock().add_card(card);
            drawn_cards.push(card);
        }

        let dealer = self.dealer_hand.lock();
        debug!(
            value = dealer.value(),
            bust = dealer.is_bust(),
            drawn = drawn_cards.len(),
            "dealer finished"
        );
        drop(dealer);

        *self.state.lock() = GameState::Settlement;

        Ok(drawn_cards)
    }

    /// Settles every bet against the dealer's final hand.
    ///
    /// This function:
    /// 1. Compares each player's hand to the dealer's hand
    /// 2. Credits the bet refund and winnings to the player's funds
    /// 3. Returns detailed results for each player
    ///
    /// A bust has already cost the player their escrowed bet, so it leaves
    /// funds unchanged here.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in settlement state.
    pub fn settle(&self) -> Result<RoundResult, SettleError> {
        let mut state = self.state.lock();
        if *state != GameState::Settlement {
            return Err(SettleError::InvalidState);
        }

        let dealer_hand = self.dealer_hand.lock().clone();

        let order = self.round_order.lock();
        let hands = self.hands.lock();
        let bets = self.bets.lock();
        let mut funds = self.funds.lock();

        let mut players = Vec::with_capacity(order.len());

        for &player_id in order.iter() {
            let Some(player_hand) = hands.get(&player_id) else {
                continue;
            };
            let Some(player_funds) = funds.get_mut(&player_id) else {
                continue;
            };

            let bet = bets.get(&player_id).copied().unwrap_or(0);
            let outcome = Outcome::resolve(player_hand.hand(), dealer_hand.hand());
            let payout = outcome.payout(bet);
            *player_funds = player_funds.saturating_add(payout);
            let net = net_result(payout, bet);

            info!(
                player_id,
                ?outcome,
                player_value = player_hand.value(),
                dealer_value = dealer_hand.value(),
                bet,
                payout,
                funds = *player_funds,
                "hand settled"
            );

            players.push(PlayerResult {
                player_id,
                hand: player_hand.hand().clone(),
                outcome,
                bet,
                payout,
                net,
                funds: *player_funds,
            });
        }
        drop(funds);
        drop(bets);
        drop(hands);
        drop(order);

        let round = self.rounds_played.fetch_add(1, Ordering::SeqCst) + 1;
        *state = GameState::RoundOver;
        drop(state);

        Ok(RoundResult {
            round,
            players,
            dealer_value: dealer_hand.value(),
            dealer_bust: dealer_hand.is_bust(),
            dealer_hand,
        })
    }
}
