//! Ticket book and round execution

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::generator::{DrawGenerator, GenerateError};
use crate::models::Draw;
use crate::rng::RandomSource;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LotteryError {
    #[error("No unplayed winning draw; generate one for the next round")]
    NoWinningDraw,

    #[error("No unplayed tickets entered for round {round}")]
    NoEntries { round: u32 },

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// A player's entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket identifier (UUID)
    id: String,

    owner_id: String,

    draw: Draw,

    /// Set once the ticket has taken part in a round
    played: bool,

    /// Set when the ticket matched the winning draw of its round
    matches_master: bool,

    /// Round the ticket was played in, 0 while unplayed
    round: u32,
}

impl Ticket {
    fn new(owner_id: String, draw: Draw) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id,
            draw,
            played: false,
            matches_master: false,
            round: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn draw(&self) -> &Draw {
        &self.draw
    }

    pub fn is_played(&self) -> bool {
        self.played
    }

    pub fn is_winner(&self) -> bool {
        self.matches_master
    }

    pub fn round(&self) -> u32 {
        self.round
    }
}

/// The master draw tickets are matched against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningDraw {
    pub draw: Draw,
    pub round: u32,
    pub played: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub ticket_id: String,
    pub owner_id: String,
    pub draw: Draw,
}

/// Outcome of playing a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub winning_draw: Draw,
    /// Number of tickets played this round
    pub entries: usize,
    pub winners: Vec<Winner>,
}

/// In-memory ticket book
///
/// # Example
/// ```
/// use lucky_dip_core_rs::lottery::LotteryBook;
/// use lucky_dip_core_rs::rng::ScriptedSource;
/// use lucky_dip_core_rs::{Draw, DrawGenerator, GeneratorConfig};
///
/// let generator = DrawGenerator::new(GeneratorConfig::default()).unwrap();
/// let mut book = LotteryBook::new(generator);
///
/// let ticket = Draw::new(&[1, 2, 3, 4, 5, 6]).unwrap();
/// book.submit("alice", ticket);
///
/// let mut source = ScriptedSource::new(vec![6, 5, 4, 3, 2, 1]);
/// book.generate_winning_draw(&mut source).unwrap();
///
/// let result = book.run_round().unwrap();
/// assert_eq!(result.round, 1);
/// assert_eq!(result.winners.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LotteryBook {
    generator: DrawGenerator,
    tickets: Vec<Ticket>,
    winning: Option<WinningDraw>,
}

impl LotteryBook {
    pub fn new(generator: DrawGenerator) -> Self {
        Self {
            generator,
            tickets: Vec::new(),
            winning: None,
        }
    }

    /// Enter a ticket, returning its id
    pub fn submit(&mut self, owner_id: &str, draw: Draw) -> String {
        let ticket = Ticket::new(owner_id.to_string(), draw);
        let id = ticket.id.clone();
        self.tickets.push(ticket);
        id
    }

    pub fn ticket(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Create the winning draw for the next round
    ///
    /// Replaces any existing winning draw, played or not. The round number
    /// is one more than the replaced draw's, starting at 1.
    pub fn generate_winning_draw<R>(&mut self, source: &mut R) -> Result<&WinningDraw, LotteryError>
    where
        R: RandomSource + ?Sized,
    {
        let round = self.winning.as_ref().map_or(1, |w| w.round + 1);
        let draw = self.generator.generate(source)?;
        info!(round, draw = %draw, "winning draw generated");

        Ok(&*self.winning.insert(WinningDraw {
            draw,
            round,
            played: false,
        }))
    }

    /// Current winning draw, if it has not been played yet
    pub fn winning_draw(&self) -> Option<&WinningDraw> {
        self.winning.as_ref().filter(|w| !w.played)
    }

    /// Play every unplayed ticket against the winning draw
    ///
    /// # Errors
    /// - [`LotteryError::NoWinningDraw`] if there is no unplayed winning draw
    /// - [`LotteryError::NoEntries`] if no ticket is waiting; the winning
    ///   draw stays unplayed in that case
    pub fn run_round(&mut self) -> Result<RoundResult, LotteryError> {
        let winning = match self.winning.as_mut() {
            Some(w) if !w.played => w,
            _ => return Err(LotteryError::NoWinningDraw),
        };

        if self.tickets.iter().all(|t| t.played) {
            return Err(LotteryError::NoEntries {
                round: winning.round,
            });
        }

        winning.played = true;
        let mut entries = 0;
        let mut winners = Vec::new();

        for ticket in self.tickets.iter_mut().filter(|t| !t.played) {
            entries += 1;
            ticket.played = true;
            ticket.round = winning.round;
            if ticket.draw == winning.draw {
                ticket.matches_master = true;
                winners.push(Winner {
                    ticket_id: ticket.id.clone(),
                    owner_id: ticket.owner_id.clone(),
                    draw: ticket.draw,
                });
            }
        }

        info!(
            round = winning.round,
            entries,
            winners = winners.len(),
            "lottery round played"
        );

        Ok(RoundResult {
            round: winning.round,
            winning_draw: winning.draw,
            entries,
            winners,
        })
    }

    /// Tickets of `owner_id` still waiting for a round
    pub fn playable(&self, owner_id: &str) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.owner_id == owner_id && !t.played)
            .collect()
    }

    /// Tickets of `owner_id` that have been played
    pub fn played(&self, owner_id: &str) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.owner_id == owner_id && t.played)
            .collect()
    }

    /// Remove the played tickets of `owner_id`, returning how many went
    pub fn clear_played(&mut self, owner_id: &str) -> usize {
        let before = self.tickets.len();
        self.tickets
            .retain(|t| !(t.owner_id == owner_id && t.played));
        before - self.tickets.len()
    }
}
