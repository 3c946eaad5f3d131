//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::{DealerHand, Hand};

/// Result of a player's hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Compares a finished player hand against the dealer's final hand.
    ///
    /// A busted player loses even if the dealer also busts.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::{Card, Hand, Outcome, Rank, Suit};
    ///
    /// let hand = |ranks: &[Rank]| {
    ///     let mut hand = Hand::new();
    ///     for &rank in ranks {
    ///         hand.add_card(Card::new(Suit::Hearts, rank));
    ///     }
    ///     hand
    /// };
    ///
    /// let player = hand(&[Rank::Ten, Rank::Queen]);
    /// let dealer = hand(&[Rank::Ten, Rank::Eight]);
    /// assert_eq!(Outcome::resolve(&player, &dealer), Outcome::Win);
    /// ```
    #[must_use]
    pub const fn resolve(player: &Hand, dealer: &Hand) -> Self {
        if player.is_bust() {
            Self::Lose
        } else if dealer.is_bust() || player.value() > dealer.value() {
            Self::Win
        } else if player.value() == dealer.value() {
            Self::Push
        } else {
            Self::Lose
        }
    }

    /// Returns the amount credited back to the player for an escrowed `bet`.
    ///
    /// A win returns the bet plus an equal amount, a push returns the bet, and
    /// a loss returns nothing. A win saturates at `usize::MAX`.
    #[must_use]
    pub const fn payout(self, bet: usize) -> usize {
        match self {
            Self::Win => bet.saturating_mul(2),
            Self::Push => bet,
            Self::Lose => 0,
        }
    }
}

/// Result for a single player after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: u8,
    /// The player's final hand.
    pub hand: Hand,
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The escrowed bet.
    pub bet: usize,
    /// Amount returned to the player's funds (bet refund plus winnings).
    pub payout: usize,
    /// Net result for the round (positive = profit, negative = loss).
    pub net: isize,
    /// Funds after settlement.
    pub funds: usize,
}

/// Result of an entire round after settlement.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// One-based round number.
    pub round: u32,
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand.
    pub dealer_hand: DealerHand,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Returns the result for the given player, if they took part.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&PlayerResult> {
        self.players.iter().find(|p| p.player_id == player_id)
    }
}
