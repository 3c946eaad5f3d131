//! Game configuration options.

/// Dealer draws while the hand value is below this threshold.
///
/// Soft 17 is not special-cased: the dealer stands on any 17.
pub const DEALER_STANDS_ON: u8 = 17;

/// Most cards a single hand can ever hold in one round.
///
/// A live hand holds at most 20 hard points, and the cheapest ten cards in a
/// deck (four aces, four twos, two threes) already add up to 18, so an
/// eleventh card always ends the turn. The dealer draws only below 17, so
/// the same bound covers the dealer's hand.
pub const MAX_HAND_CARDS: usize = 11;

/// Upper bound for [`GameOptions::max_players`].
///
/// Each hand holds at most 30 hard points while a fresh deck holds 340, so a
/// fresh deck always covers a round with this many players plus the dealer.
pub const TABLE_LIMIT: usize = 10;

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_engine::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_funds(500)
///     .with_max_rounds(Some(10))
///     .with_max_players(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether players bet each round. With betting disabled no funds move.
    pub enable_betting: bool,
    /// Number of rounds after which the game is over. `None` for unbounded.
    pub max_rounds: Option<u32>,
    /// Funds a player receives when joining through [`Game::join_default`](crate::Game::join_default).
    pub starting_funds: usize,
    /// Maximum number of seated players (clamped to [`TABLE_LIMIT`]).
    pub max_players: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            enable_betting: true,
            max_rounds: None,
            starting_funds: 100,
            max_players: 5,
        }
    }
}

impl GameOptions {
    /// Sets whether betting is enabled.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_betting(false);
    /// assert!(!options.enable_betting);
    /// ```
    #[must_use]
    pub const fn with_betting(mut self, enabled: bool) -> Self {
        self.enable_betting = enabled;
        self
    }

    /// Sets the maximum number of rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rounds(Some(3));
    /// assert_eq!(options.max_rounds, Some(3));
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, rounds: Option<u32>) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Sets the starting funds for each player.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_funds(1000);
    /// assert_eq!(options.starting_funds, 1000);
    /// ```
    #[must_use]
    pub const fn with_starting_funds(mut self, funds: usize) -> Self {
        self.starting_funds = funds;
        self
    }

    /// Sets the maximum number of players, clamped to [`TABLE_LIMIT`].
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::{GameOptions, TABLE_LIMIT};
    ///
    /// let options = GameOptions::default().with_max_players(64);
    /// assert_eq!(options.max_players, TABLE_LIMIT);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, players: usize) -> Self {
        self.max_players = if players > TABLE_LIMIT {
            TABLE_LIMIT
        } else {
            players
        };
        self
    }

    /// Returns the number of cards a round with `players` seated players may
    /// consume, including the dealer's hand.
    #[must_use]
    pub const fn cards_required(players: usize) -> usize {
        let needed = (players + 1) * MAX_HAND_CARDS;
        if needed > crate::card::DECK_SIZE {
            crate::card::DECK_SIZE
        } else {
            needed
        }
    }
}
