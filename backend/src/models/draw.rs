//! Draw model
//!
//! A draw is six distinct lottery numbers in [1, 60], kept sorted ascending.
//! Every constructor enforces that shape, so a `Draw` value is always valid.
//!
//! The textual form is the numbers separated by single spaces, e.g.
//! `"3 14 15 27 42 60"`.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::slot::SlotId;

/// Numbers per draw
pub const DRAW_SIZE: usize = 6;

/// Smallest ball (inclusive)
pub const MIN_NUMBER: u8 = 1;

/// Largest ball (inclusive)
pub const MAX_NUMBER: u8 = 60;

/// Errors raised when building a draw from untrusted numbers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("A draw needs exactly {expected} numbers, got {actual}")]
    WrongCount { expected: usize, actual: usize },

    #[error("Number {value} is outside the range {min}..={max}")]
    OutOfRange { value: i64, min: u8, max: u8 },

    #[error("Number {value} appears more than once")]
    Duplicate { value: u8 },

    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}

/// Six distinct numbers in [1, 60], sorted ascending
///
/// # Example
/// ```
/// use lucky_dip_core_rs::Draw;
///
/// let draw = Draw::new(&[42, 7, 19, 1, 60, 33]).unwrap();
/// assert_eq!(draw.numbers(), &[1, 7, 19, 33, 42, 60]);
/// assert_eq!(draw.to_string(), "1 7 19 33 42 60");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u8>")]
pub struct Draw {
    numbers: [u8; DRAW_SIZE],
}

impl Draw {
    /// Build a draw from numbers in any order
    ///
    /// # Errors
    /// - [`DrawError::WrongCount`] unless exactly six numbers are given
    /// - [`DrawError::OutOfRange`] for any number outside [1, 60]
    /// - [`DrawError::Duplicate`] if a number repeats
    pub fn new(values: &[i64]) -> Result<Self, DrawError> {
        if values.len() != DRAW_SIZE {
            return Err(DrawError::WrongCount {
                expected: DRAW_SIZE,
                actual: values.len(),
            });
        }

        let mut seen = HashSet::with_capacity(DRAW_SIZE);
        let mut numbers = [0u8; DRAW_SIZE];
        for (slot, &value) in numbers.iter_mut().zip(values) {
            let ball = to_ball(value)?;
            if !seen.insert(ball) {
                return Err(DrawError::Duplicate { value: ball });
            }
            *slot = ball;
        }

        // Numeric sort on u8, never lexicographic
        numbers.sort_unstable();
        Ok(Self { numbers })
    }

    /// Sorted numbers
    pub fn numbers(&self) -> &[u8; DRAW_SIZE] {
        &self.numbers
    }

    /// Number destined for a given slot
    pub fn get(&self, slot: SlotId) -> u8 {
        self.numbers[slot.position()]
    }

    /// `(slot, number)` pairs in write order
    pub fn slots(&self) -> impl Iterator<Item = (SlotId, u8)> + '_ {
        SlotId::all().map(move |slot| (slot, self.get(slot)))
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }
}

fn to_ball(value: i64) -> Result<u8, DrawError> {
    if value < i64::from(MIN_NUMBER) || value > i64::from(MAX_NUMBER) {
        return Err(DrawError::OutOfRange {
            value,
            min: MIN_NUMBER,
            max: MAX_NUMBER,
        });
    }
    Ok(value as u8)
}

impl TryFrom<Vec<i64>> for Draw {
    type Error = DrawError;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        Draw::new(&values)
    }
}

impl From<Draw> for Vec<u8> {
    fn from(draw: Draw) -> Self {
        draw.numbers.to_vec()
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, number) in self.numbers.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", number)?;
        }
        Ok(())
    }
}

impl FromStr for Draw {
    type Err = DrawError;

    /// Parses whitespace-separated numbers, in any order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| DrawError::InvalidNumber(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Draw::new(&values)
    }
}
