//! Lottery rounds
//!
//! Players submit tickets (draws), an administrator generates the winning
//! draw for the next round, then plays the round to mark winners.
//! Everything is held in memory.

pub mod book;

pub use book::{LotteryBook, LotteryError, RoundResult, Ticket, WinningDraw, Winner};
