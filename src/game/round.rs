use alloc::vec::Vec;

use tracing::{debug, info, instrument, warn};

use crate::error::{ActionError, RoundError};
use crate::input::{Move, PlayerInput};
use crate::observer::{Operation, Stopwatch};
use crate::result::RoundResult;

use super::Game;

/// Smallest bet a player can place.
pub const MIN_BET: usize = 1;

impl Game {
    /// Plays one full round, asking `input` for every decision.
    ///
    /// The round runs betting, the opening deal, each player's turn in seat
    /// order, the dealer's turn, and settlement, then clears the table for the
    /// next round.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::GameOver`] if no round can be played, or the
    /// error of the failing step. A failed round is void: every escrowed bet
    /// is refunded before the error is returned.
    #[instrument(level = "debug", skip(self, input), fields(round = self.rounds_played() + 1))]
    pub fn play_round<I: PlayerInput + ?Sized>(
        &self,
        input: &mut I,
    ) -> Result<RoundResult, RoundError> {
        if self.is_game_over() {
            return Err(RoundError::GameOver);
        }

        let watch = Stopwatch::start();
        match self.run_round(input) {
            Ok(result) => {
                self.clear_round();
                self.record(Operation::Round, &watch);
                Ok(result)
            }
            Err(err) => {
                warn!(error = %err, "round failed");
                self.abort_round();
                Err(err)
            }
        }
    }

    /// Plays rounds until the game is over or `input` declines to continue.
    ///
    /// Returns the results of every completed round.
    ///
    /// # Errors
    ///
    /// Returns the first round error. Rounds completed before it keep their
    /// effect on funds.
    pub fn play<I: PlayerInput + ?Sized>(
        &self,
        input: &mut I,
    ) -> Result<Vec<RoundResult>, RoundError> {
        let mut results = Vec::new();

        while !self.is_game_over() {
            results.push(self.play_round(input)?);

            if self.is_game_over() || !input.continue_playing() {
                break;
            }
        }

        info!(rounds = results.len(), "game finished");
        Ok(results)
    }

    fn run_round<I: PlayerInput + ?Sized>(&self, input: &mut I) -> Result<RoundResult, RoundError> {
        self.start_betting()?;
        if self.options.enable_betting {
            self.collect_bets(input)?;
        }

        self.deal()?;

        while let Some(player_id) = self.current_player() {
            self.play_turn(player_id, input)?;
        }

        let watch = Stopwatch::start();
        self.dealer_play()?;
        self.record(Operation::DealerTurn, &watch);

        let watch = Stopwatch::start();
        let result = self.settle()?;
        self.record(Operation::Settlement, &watch);

        Ok(result)
    }

    fn collect_bets<I: PlayerInput + ?Sized>(&self, input: &mut I) -> Result<(), RoundError> {
        let watch = Stopwatch::start();

        for player_id in self.player_ids() {
            let funds = self.get_funds(player_id).unwrap_or(0);
            if funds < MIN_BET {
                continue;
            }
            let amount = input.request_bet(player_id, MIN_BET, funds);
            self.bet(player_id, amount)?;
        }

        self.record(Operation::CollectBets, &watch);
        Ok(())
    }

    fn play_turn<I: PlayerInput + ?Sized>(
        &self,
        player_id: u8,
        input: &mut I,
    ) -> Result<(), RoundError> {
        let watch = Stopwatch::start();

        while self.current_player() == Some(player_id) {
            let hand = self
                .get_hand(player_id)
                .ok_or(ActionError::PlayerNotFound)?;
            let dealer = self.get_dealer_hand();

            match input.request_move(player_id, hand.hand(), &dealer) {
                Move::Hit => {
                    self.hit(player_id)?;
                }
                Move::Stand => self.stand(player_id)?,
            }
        }

        debug!(player_id, "turn finished");
        self.record(Operation::PlayerTurn, &watch);
        Ok(())
    }
}
