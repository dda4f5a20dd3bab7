//! Domain models for the lucky dip generator

pub mod draw;
pub mod slot;

// Re-exports
pub use draw::{Draw, DrawError, DRAW_SIZE, MAX_NUMBER, MIN_NUMBER};
pub use slot::{InvalidSlot, SlotId, DEFAULT_SLOT_PREFIX};
