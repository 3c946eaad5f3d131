//! Error types for game operations.

use thiserror::Error;

/// A card was requested from an empty deck.
///
/// The game replaces the deck before every deal, so during normal play this
/// indicates a sizing bug rather than a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the deck is empty")]
pub struct EmptyDeckError;

/// Errors that can occur when joining a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// The table has no free seat.
    #[error("the table is full")]
    TableFull,
    /// Betting is enabled and the player brought no funds.
    #[error("cannot join a betting table without funds")]
    NoFunds,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Betting is disabled for this game.
    #[error("betting is disabled")]
    BettingDisabled,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Player already placed a bet this round.
    #[error("player already placed a bet this round")]
    AlreadyBet,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No players have placed bets.
    #[error("no players have placed bets")]
    NoBets,
    /// The deck ran out while dealing.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Hand is not active.
    #[error("hand is not active")]
    HandNotActive,
    /// The deck ran out while drawing.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during the dealer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid game state for the dealer's turn.
    #[error("invalid game state for the dealer's turn")]
    InvalidState,
    /// The deck ran out while the dealer had to draw.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid game state for settlement.
    #[error("invalid game state for settlement")]
    InvalidState,
}

/// Errors that abort a full round.
///
/// A round that fails with this error is void: escrowed bets are refunded and
/// no payout is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The game is over; no player can take part in another round.
    #[error("the game is over")]
    GameOver,
    /// Betting failed.
    #[error("betting failed: {0}")]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error("dealing failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// The dealer's turn failed.
    #[error("dealer turn failed: {0}")]
    Dealer(#[from] DealerError),
    /// Settlement failed.
    #[error("settlement failed: {0}")]
    Settle(#[from] SettleError),
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}
