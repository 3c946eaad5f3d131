//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest value a hand can hold without busting.
pub const BLACKJACK: u8 = 21;

/// Hand status during a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood, or reached 21 with more than two cards.
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a blackjack (two-card 21).
    Blackjack,
}

impl HandStatus {
    /// Derives the status a hand settles into after a card is added.
    #[must_use]
    pub fn after_card(hand: &Hand) -> Self {
        if hand.is_bust() {
            Self::Bust
        } else if hand.is_blackjack() {
            Self::Blackjack
        } else if hand.value() == BLACKJACK {
            Self::Stand
        } else {
            Self::Active
        }
    }
}

/// A set of cards with a running blackjack total.
///
/// The total is updated on every [`add_card`](Self::add_card): each ace is
/// first counted as 11 ("soft") and converted to 1 only while the total
/// exceeds 21.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    total: u8,
    soft_aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            soft_aces: 0,
        }
    }

    /// Adds a card to the hand and re-applies the ace adjustment.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// assert_eq!(hand.value(), 12);
    /// ```
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.total = self.total.saturating_add(card.value());
        if card.is_ace() {
            self.soft_aces += 1;
        }

        while self.total > BLACKJACK && self.soft_aces > 0 {
            self.total -= 10;
            self.soft_aces -= 1;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current value of the hand.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.total
    }

    /// Returns the number of aces still counted as 11.
    #[must_use]
    pub const fn soft_aces(&self) -> u8 {
        self.soft_aces
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, " (Value: {})", self.total)
    }
}

/// A player's hand together with its turn status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHand {
    hand: Hand,
    status: HandStatus,
}

impl PlayerHand {
    /// Creates a new empty, active hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            status: HandStatus::Active,
        }
    }

    /// Adds a card and updates the status.
    ///
    /// A hand that reaches 21 or busts stops being active.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
        self.status = HandStatus::after_card(&self.hand);
    }

    /// Returns the underlying hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns whether the hand can still take actions.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == HandStatus::Active
    }

    /// Returns the current value of the hand.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.hand.value()
    }
}

impl Default for PlayerHand {
    fn default() -> Self {
        Self::new()
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    hand: Hand,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns the underlying hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.up_card().map_or(0, Card::value)
        }
    }

    /// Returns the full value of the hand.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.hand = Hand::new();
        self.hole_revealed = false;
    }
}

impl fmt::Display for DealerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hole_revealed {
            return write!(f, "{}", self.hand);
        }
        match self.up_card() {
            Some(card) if self.len() > 1 => write!(f, "{card}, ?"),
            Some(card) => write!(f, "{card}"),
            None => f.write_str("(no cards)"),
        }
    }
}
