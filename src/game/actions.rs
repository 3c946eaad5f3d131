use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::HandStatus;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self, player_id: u8) -> Result<(), ActionError> {
        if *self.state.lock() != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        if !self.hands.lock().contains_key(&player_id) {
            return Err(ActionError::PlayerNotFound);
        }

        if self.current_player() != Some(player_id) {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    fn ensure_active(&self, player_id: u8) -> Result<(), ActionError> {
        let hands = self.hands.lock();
        let hand = hands.get(&player_id).ok_or(ActionError::PlayerNotFound)?;
        if hand.is_active() {
            Ok(())
        } else {
            Err(ActionError::HandNotActive)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// The turn passes to the next player once the hand busts or reaches 21.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the player
    /// cannot be found, it is not the player's turn, the hand is not active,
    /// or the deck is empty.
    pub fn hit(&self, player_id: u8) -> Result<Card, ActionError> {
        self.ensure_player_turn(player_id)?;
        self.ensure_active(player_id)?;

        let card = self.draw()?;

        let mut hands = self.hands.lock();
        let hand = hands
            .get_mut(&player_id)
            .ok_or(ActionError::PlayerNotFound)?;
        hand.add_card(card);
        let status = hand.status();
        let value = hand.value();
        drop(hands);

        debug!(player_id, %card, value, ?status, "player hit");

        if status != HandStatus::Active {
            self.advance_turn();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the player
    /// cannot be found, it is not the player's turn, or the hand is not
    /// active.
    pub fn stand(&self, player_id: u8) -> Result<(), ActionError> {
        self.ensure_player_turn(player_id)?;

        let mut hands = self.hands.lock();
        let hand = hands
            .get_mut(&player_id)
            .ok_or(ActionError::PlayerNotFound)?;

        if !hand.is_active() {
            return Err(ActionError::HandNotActive);
        }

        hand.set_status(HandStatus::Stand);
        let value = hand.value();
        drop(hands);

        debug!(player_id, value, "player stood");
        self.advance_turn();

        Ok(())
    }

    /// Moves the turn to the next player with an active hand.
    fn advance_turn(&self) {
        *self.current_turn.lock() += 1;
        self.skip_finished_hands();
    }

    /// Skips players whose hands are already finished, starting at the
    /// current turn. Hands the turn to the dealer once every player is done.
    pub(super) fn skip_finished_hands(&self) {
        let order = self.round_order.lock();
        let hands = self.hands.lock();
        let mut turn = self.current_turn.lock();

        while let Some(player_id) = order.get(*turn) {
            if hands.get(player_id).is_some_and(|hand| hand.is_active()) {
                return;
            }
            *turn += 1;
        }
        drop(turn);
        drop(hands);
        drop(order);

        *self.state.lock() = GameState::DealerTurn;
    }
}
