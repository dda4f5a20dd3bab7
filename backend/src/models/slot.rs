//! Output slot addressing
//!
//! A draw is written into six positional slots. Slot `i` (1-based) receives
//! the i-th smallest number. Slots are named `<prefix><i>`; the default
//! prefix gives `slot-1` .. `slot-6`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::draw::DRAW_SIZE;

/// Prefix used when no other naming convention is configured.
pub const DEFAULT_SLOT_PREFIX: &str = "slot-";

/// Raised when an index does not name one of the six slots
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Slot index {0} is outside 1..={}", DRAW_SIZE)]
pub struct InvalidSlot(pub u8);

/// 1-based index of an output slot (1..=6)
///
/// # Example
/// ```
/// use lucky_dip_core_rs::SlotId;
///
/// let slot = SlotId::new(3).unwrap();
/// assert_eq!(slot.name("slot-"), "slot-3");
/// assert_eq!(slot.position(), 2);
/// assert!(SlotId::new(7).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SlotId(u8);

impl SlotId {
    /// Returns `None` outside 1..=6.
    pub fn new(index: u8) -> Option<Self> {
        if index >= 1 && usize::from(index) <= DRAW_SIZE {
            Some(Self(index))
        } else {
            None
        }
    }

    /// 1-based index
    pub fn index(self) -> u8 {
        self.0
    }

    /// 0-based position into the sorted draw
    pub fn position(self) -> usize {
        usize::from(self.0) - 1
    }

    /// All slots in write order
    pub fn all() -> impl Iterator<Item = SlotId> {
        (1..=DRAW_SIZE as u8).map(SlotId)
    }

    /// Field name under the given prefix
    pub fn name(self, prefix: &str) -> String {
        format!("{}{}", prefix, self.0)
    }
}

impl TryFrom<u8> for SlotId {
    type Error = InvalidSlot;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        SlotId::new(index).ok_or(InvalidSlot(index))
    }
}

impl From<SlotId> for u8 {
    fn from(slot: SlotId) -> Self {
        slot.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DEFAULT_SLOT_PREFIX, self.0)
    }
}
