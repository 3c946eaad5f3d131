//! A turn-based blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs rounds of blackjack against a
//! dealer: betting with escrowed funds, the opening deal, hit/stand turns,
//! the dealer's draw-to-17 policy, and settlement. The deck is replaced with a
//! freshly shuffled one whenever it runs too low to cover a round.
//!
//! The engine performs no I/O. Decisions come from a [`PlayerInput`]
//! implementation that hands over already-validated bets and moves.
//!
//! # Example
//!
//! ```
//! use blackjack_engine::{DealerHand, Game, GameOptions, Hand, Move, PlayerInput};
//!
//! struct AlwaysStand;
//!
//! impl PlayerInput for AlwaysStand {
//!     fn request_bet(&mut self, _player_id: u8, min: usize, _max: usize) -> usize {
//!         min
//!     }
//!
//!     fn request_move(&mut self, _player_id: u8, _hand: &Hand, _dealer: &DealerHand) -> Move {
//!         Move::Stand
//!     }
//!
//!     fn continue_playing(&mut self) -> bool {
//!         false
//!     }
//! }
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let player = game.join(100).unwrap();
//! let result = game.play_round(&mut AlwaysStand).unwrap();
//! assert_eq!(result.players[0].player_id, player);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod observer;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, DealerError, EmptyDeckError, JoinError, ReshuffleError,
    RoundError, SettleError,
};
pub use game::{Game, GameState, MIN_BET, dealer_should_hit};
pub use hand::{BLACKJACK, DealerHand, Hand, HandStatus, PlayerHand};
pub use input::{Move, PlayerInput};
pub use observer::{ExecutionTimes, NoopObserver, Observer, Operation, OperationStats};
pub use options::{DEALER_STANDS_ON, GameOptions, MAX_HAND_CARDS, TABLE_LIMIT};
pub use result::{Outcome, PlayerResult, RoundResult};
