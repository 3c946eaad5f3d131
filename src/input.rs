//! Decisions supplied to the engine by its caller.
//!
//! The engine never parses text. A front end implements [`PlayerInput`],
//! validates whatever the user typed, and hands back values that are already
//! in range.

use crate::hand::{DealerHand, Hand};

/// A player's move during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Draw another card.
    Hit,
    /// Keep the current hand and end the turn.
    Stand,
}

/// Source of player decisions for [`Game::play_round`](crate::Game::play_round).
pub trait PlayerInput {
    /// Asks a player for a bet.
    ///
    /// The returned amount must lie in `min..=max`; the engine rejects any
    /// other value with a [`BetError`](crate::BetError) and voids the round.
    fn request_bet(&mut self, player_id: u8, min: usize, max: usize) -> usize;

    /// Asks a player whether to hit or stand on `hand`.
    fn request_move(&mut self, player_id: u8, hand: &Hand, dealer: &DealerHand) -> Move;

    /// Asks whether another round should be played.
    fn continue_playing(&mut self) -> bool;
}
