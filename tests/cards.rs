//! Card, deck, and hand tests.

use std::collections::HashSet;

use blackjack_engine::{
    Card, DECK_SIZE, DealerHand, Deck, EmptyDeckError, Hand, HandStatus, PlayerHand, Rank, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for (index, &rank) in ranks.iter().enumerate() {
        hand.add_card(card(Suit::ALL[index % 4], rank));
    }
    hand
}

#[test]
fn card_values_follow_rank_table() {
    assert_eq!(card(Suit::Hearts, Rank::Two).value(), 2);
    assert_eq!(card(Suit::Hearts, Rank::Nine).value(), 9);
    assert_eq!(card(Suit::Clubs, Rank::Ten).value(), 10);
    assert_eq!(card(Suit::Clubs, Rank::Jack).value(), 10);
    assert_eq!(card(Suit::Spades, Rank::Queen).value(), 10);
    assert_eq!(card(Suit::Spades, Rank::King).value(), 10);
    assert_eq!(card(Suit::Diamonds, Rank::Ace).value(), 11);
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "Ace of Spades");
    assert_eq!(card(Suit::Hearts, Rank::Ten).to_string(), "10 of Hearts");
}

#[test]
fn new_deck_has_every_card_once_in_order() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(deck.cards()[0], card(Suit::Hearts, Rank::Two));
    assert_eq!(deck.cards()[12], card(Suit::Hearts, Rank::Ace));
    assert_eq!(deck.cards()[13], card(Suit::Diamonds, Rank::Two));
    assert_eq!(deck.cards()[DECK_SIZE - 1], card(Suit::Spades, Rank::Ace));
}

#[test]
fn shuffle_only_permutes() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck, Deck::new());

    let shuffled: HashSet<Card> = deck.cards().iter().copied().collect();
    let fresh: HashSet<Card> = Deck::new().cards().iter().copied().collect();
    assert_eq!(shuffled, fresh);
}

#[test]
fn shuffle_is_reproducible_with_a_seed() {
    let first = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(11));
    let second = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(11));
    let other = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(12));

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn deal_takes_from_the_top() {
    let mut deck = Deck::new();
    assert_eq!(deck.deal(), Ok(card(Suit::Spades, Rank::Ace)));
    assert_eq!(deck.deal(), Ok(card(Suit::Spades, Rank::King)));
    assert_eq!(deck.len(), DECK_SIZE - 2);
}

#[test]
fn deal_from_empty_deck_always_fails() {
    let mut deck = Deck::new();
    for _ in 0..DECK_SIZE {
        deck.deal().unwrap();
    }
    assert!(deck.is_empty());

    for _ in 0..3 {
        assert_eq!(deck.deal(), Err(EmptyDeckError));
    }
}

#[test]
fn empty_hand_is_zero() {
    let hand = Hand::new();
    assert_eq!(hand.value(), 0);
    assert!(hand.is_empty());
    assert!(!hand.is_bust());
}

#[test]
fn single_cards() {
    assert_eq!(hand_of(&[Rank::Ten]).value(), 10);
    assert_eq!(hand_of(&[Rank::Ace]).value(), 11);
}

#[test]
fn ten_and_ace_is_blackjack_in_either_order() {
    for ranks in [[Rank::Ten, Rank::Ace], [Rank::Ace, Rank::Ten]] {
        let hand = hand_of(&ranks);
        assert_eq!(hand.value(), 21);
        assert!(hand.is_blackjack());
        assert!(hand.is_soft());
    }
}

#[test]
fn two_aces_and_ten_is_twelve() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Spades, Rank::Ace));
    hand.add_card(card(Suit::Diamonds, Rank::Ace));
    assert_eq!(hand.value(), 12);
    assert_eq!(hand.soft_aces(), 1);

    hand.add_card(card(Suit::Hearts, Rank::Ten));
    assert_eq!(hand.value(), 12);
    assert_eq!(hand.soft_aces(), 0);
    assert!(!hand.is_soft());
}

#[test]
fn three_small_cards_make_twenty_one() {
    let hand = hand_of(&[Rank::Nine, Rank::Seven, Rank::Five]);
    assert_eq!(hand.value(), 21);
    assert!(!hand.is_blackjack());
}

#[test]
fn ten_eight_five_busts() {
    let hand = hand_of(&[Rank::Ten, Rank::Eight, Rank::Five]);
    assert_eq!(hand.value(), 23);
    assert!(hand.is_bust());
    assert_eq!(hand.soft_aces(), 0);
}

#[test]
fn ace_adjustment_is_always_maximal() {
    for seed in 0..50 {
        let mut deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(seed));
        let mut hand = Hand::new();
        let mut hard_total = 0u32;

        for _ in 0..8 {
            let next = deck.deal().unwrap();
            hard_total += if next.rank == Rank::Ace {
                1
            } else {
                u32::from(next.value())
            };
            hand.add_card(next);

            assert!(hand.value() <= 21 || hand.soft_aces() == 0);
            assert_eq!(
                u32::from(hand.value()),
                hard_total + 10 * u32::from(hand.soft_aces())
            );
        }
    }
}

#[test]
fn hand_display_lists_cards_and_value() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::King));
    hand.add_card(card(Suit::Clubs, Rank::Seven));
    assert_eq!(hand.to_string(), "King of Hearts, 7 of Clubs (Value: 17)");
}

#[test]
fn player_hand_status_tracks_cards() {
    let mut natural = PlayerHand::new();
    natural.add_card(card(Suit::Hearts, Rank::Ace));
    natural.add_card(card(Suit::Spades, Rank::King));
    assert_eq!(natural.status(), HandStatus::Blackjack);

    let mut three_card = PlayerHand::new();
    three_card.add_card(card(Suit::Hearts, Rank::Nine));
    three_card.add_card(card(Suit::Spades, Rank::Seven));
    assert!(three_card.is_active());
    three_card.add_card(card(Suit::Clubs, Rank::Five));
    assert_eq!(three_card.status(), HandStatus::Stand);

    let mut bust = PlayerHand::new();
    bust.add_card(card(Suit::Hearts, Rank::Ten));
    bust.add_card(card(Suit::Spades, Rank::Ten));
    bust.add_card(card(Suit::Diamonds, Rank::Two));
    assert_eq!(bust.status(), HandStatus::Bust);
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, Rank::Ace));
    dealer.add_card(card(Suit::Clubs, Rank::Six));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 11);
    assert_eq!(dealer.to_string(), "Ace of Hearts, ?");

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.hand().is_soft());
    assert_eq!(dealer.to_string(), "Ace of Hearts, 6 of Clubs (Value: 17)");

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
}
