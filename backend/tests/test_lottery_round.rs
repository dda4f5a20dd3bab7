//! Lottery round tests
//!
//! Tickets are played once, against the winning draw of the current round.

use lucky_dip_core_rs::lottery::{LotteryBook, LotteryError};
use lucky_dip_core_rs::rng::ScriptedSource;
use lucky_dip_core_rs::{Draw, DrawGenerator, GeneratorConfig};

// ============================================================================
// Test Helpers
// ============================================================================

fn create_book() -> LotteryBook {
    LotteryBook::new(DrawGenerator::new(GeneratorConfig::default()).unwrap())
}

fn draw(text: &str) -> Draw {
    text.parse().expect("valid draw literal")
}

fn source_for(text: &str) -> ScriptedSource {
    ScriptedSource::new(text.split_whitespace().map(|n| n.parse().unwrap()).collect())
}

// ============================================================================
// Round Play
// ============================================================================

#[test]
fn test_run_round_without_winning_draw() {
    let mut book = create_book();
    book.submit("alice", draw("1 2 3 4 5 6"));

    assert_eq!(book.run_round(), Err(LotteryError::NoWinningDraw));
}

#[test]
fn test_run_round_without_entries_keeps_draw_unplayed() {
    let mut book = create_book();
    book.generate_winning_draw(&mut source_for("1 2 3 4 5 6"))
        .unwrap();

    assert_eq!(book.run_round(), Err(LotteryError::NoEntries { round: 1 }));
    assert!(book.winning_draw().is_some());
}

#[test]
fn test_winners_flagged_and_tickets_played() {
    let mut book = create_book();
    let winning_id = book.submit("alice", draw("5 10 15 20 25 30"));
    let losing_id = book.submit("bob", draw("5 10 15 20 25 31"));

    book.generate_winning_draw(&mut source_for("30 25 20 15 10 5"))
        .unwrap();
    let result = book.run_round().unwrap();

    assert_eq!(result.round, 1);
    assert_eq!(result.entries, 2);
    assert_eq!(result.winning_draw, draw("5 10 15 20 25 30"));
    assert_eq!(result.winners.len(), 1);
    assert_eq!(result.winners[0].ticket_id, winning_id);
    assert_eq!(result.winners[0].owner_id, "alice");

    let winner = book.ticket(&winning_id).unwrap();
    assert!(winner.is_played() && winner.is_winner());
    assert_eq!(winner.round(), 1);

    let loser = book.ticket(&losing_id).unwrap();
    assert!(loser.is_played() && !loser.is_winner());
}

#[test]
fn test_played_winning_draw_cannot_rerun() {
    let mut book = create_book();
    book.submit("alice", draw("1 2 3 4 5 6"));
    book.generate_winning_draw(&mut source_for("7 8 9 10 11 12"))
        .unwrap();
    book.run_round().unwrap();

    book.submit("alice", draw("7 8 9 10 11 12"));
    assert!(book.winning_draw().is_none());
    assert_eq!(book.run_round(), Err(LotteryError::NoWinningDraw));
}

#[test]
fn test_rounds_increment() {
    let mut book = create_book();

    let first = book
        .generate_winning_draw(&mut source_for("1 2 3 4 5 6"))
        .unwrap()
        .round;
    let second = book
        .generate_winning_draw(&mut source_for("2 3 4 5 6 7"))
        .unwrap()
        .round;

    assert_eq!((first, second), (1, 2));

    book.submit("carol", draw("2 3 4 5 6 7"));
    let result = book.run_round().unwrap();
    assert_eq!(result.round, 2);
    assert_eq!(result.winners.len(), 1);
}

// ============================================================================
// Ticket Views
// ============================================================================

#[test]
fn test_playable_played_and_clear() {
    let mut book = create_book();
    book.submit("alice", draw("1 2 3 4 5 6"));
    book.submit("bob", draw("1 2 3 4 5 7"));

    assert_eq!(book.playable("alice").len(), 1);
    assert!(book.played("alice").is_empty());

    book.generate_winning_draw(&mut source_for("11 12 13 14 15 16"))
        .unwrap();
    book.run_round().unwrap();

    book.submit("alice", draw("20 21 22 23 24 25"));

    assert_eq!(book.playable("alice").len(), 1);
    assert_eq!(book.played("alice").len(), 1);

    assert_eq!(book.clear_played("alice"), 1);
    assert!(book.played("alice").is_empty());
    assert_eq!(book.playable("alice").len(), 1);
    // Other players are untouched
    assert_eq!(book.played("bob").len(), 1);
}
