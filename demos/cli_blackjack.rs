//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_engine::{
    Card, DealerHand, ExecutionTimes, Game, GameOptions, Hand, Move, Outcome, PlayerInput, Rank,
    RoundResult, Suit,
};
use tracing_subscriber::EnvFilter;

const MAX_STARTING_FUNDS: usize = 1_000;

struct Console;

impl PlayerInput for Console {
    fn request_bet(&mut self, player_id: u8, min: usize, max: usize) -> usize {
        println!("\nPlayer {}, you have {max}.", player_id + 1);
        prompt_in_range(&format!("Bet amount ({min}-{max}): "), min, max)
    }

    fn request_move(&mut self, player_id: u8, hand: &Hand, dealer: &DealerHand) -> Move {
        println!("\nDealer: [{}]", format_dealer(dealer));
        println!(
            "Player {}: [{}] (value {})",
            player_id + 1,
            format_hand(hand),
            hand.value()
        );

        loop {
            match prompt_line("Action ([h]it/[s]tand): ").as_str() {
                "h" | "hit" => return Move::Hit,
                "s" | "stand" => return Move::Stand,
                _ => println!("Unknown action."),
            }
        }
    }

    fn continue_playing(&mut self) -> bool {
        prompt_yes_no("\nPlay another round? (y/n): ")
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example");

    let players = prompt_in_range("Number of players (1-5): ", 1, 5);
    let funds = prompt_in_range(
        &format!("Starting funds per player (1-{MAX_STARTING_FUNDS}): "),
        1,
        MAX_STARTING_FUNDS,
    );

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let times = Arc::new(ExecutionTimes::new());
    let game = Game::new(
        GameOptions::default()
            .with_starting_funds(funds)
            .with_max_players(players),
        seed,
    )
    .with_observer(Arc::clone(&times));

    for _ in 0..players {
        if let Err(err) = game.join_default() {
            println!("Join error: {err}");
            return;
        }
    }

    let mut console = Console;
    while !game.is_game_over() {
        match game.play_round(&mut console) {
            Ok(result) => print_result(&result),
            Err(err) => {
                println!("Round error: {err}");
                break;
            }
        }

        if game.is_game_over() || !console.continue_playing() {
            break;
        }
    }

    println!("\nGame over after {} round(s).", game.rounds_played());
    for player_id in game.player_ids() {
        let remaining = game.get_funds(player_id).unwrap_or(0);
        println!("Player {}: {remaining}", player_id + 1);
    }

    if prompt_yes_no("Show execution times? (y/n): ") {
        for (operation, stats) in times.report() {
            println!(
                "{operation:<14} calls {:>6} | total {:>12?} | mean {:>10?}",
                stats.calls,
                stats.total,
                stats.mean()
            );
        }
    }
}

fn print_result(result: &RoundResult) {
    println!("\n--- Round {} ---", result.round);
    let dealer_note = if result.dealer_bust { " BUST" } else { "" };
    println!(
        "Dealer: [{}] (value {}){dealer_note}",
        format_hand(result.dealer_hand.hand()),
        result.dealer_value
    );

    for player in &result.players {
        let outcome = match player.outcome {
            Outcome::Win => colorize("win", "32"),
            Outcome::Push => colorize("push", "33"),
            Outcome::Lose => colorize("lose", "31"),
        };
        println!(
            "Player {}: [{}] (value {}) | {outcome} | net {} | funds {}",
            player.player_id + 1,
            format_hand(&player.hand),
            player.hand.value(),
            player.net,
            player.funds
        );
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_in_range(prompt: &str, min: usize, max: usize) -> usize {
    loop {
        match prompt_line(prompt).parse::<usize>() {
            Ok(value) if (min..=max).contains(&value) => return value,
            Ok(_) => println!("Please enter a number between {min} and {max}."),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        match prompt_line(prompt).as_str() {
            "y" | "yes" => return true,
            "n" | "no" => return false,
            _ => println!("Please answer y or n."),
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hole_revealed() {
        return format_hand(dealer.hand());
    }

    let mut parts = Vec::new();
    if let Some(card) = dealer.up_card() {
        parts.push(format_card(card));
    }
    if dealer.len() > 1 {
        parts.push("?".to_string());
    }
    parts.join(", ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        other => other.value().to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}
