//! Game state types.

/// Round state.
///
/// A round moves through the states in declaration order and then returns to
/// [`WaitingForPlayers`](Self::WaitingForPlayers) once it is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Between rounds; players may join or leave.
    WaitingForPlayers,
    /// Accepting bets for the next round.
    Betting,
    /// Dealing initial cards.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are final and bets can be settled.
    Settlement,
    /// Round has been settled.
    RoundOver,
}
