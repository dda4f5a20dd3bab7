//! Output sinks
//!
//! The generator never owns the slots it fills. It writes through
//! [`OutputSink`], so a web form, a terminal or a Python dict can sit behind
//! the same sampling logic.

mod form;
mod writer;

pub use form::FormSlots;
pub use writer::WriterSink;

use thiserror::Error;

use crate::models::SlotId;

/// Errors a sink can report for a single write
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Output slot '{name}' does not exist")]
    MissingSlot { name: String },

    #[error("Failed to write output slot: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for the six numbers of a draw
pub trait OutputSink {
    /// Write `value` into `slot`.
    ///
    /// Sinks that cannot address the slot return [`SinkError::MissingSlot`];
    /// the caller decides whether that is fatal.
    fn set(&mut self, slot: SlotId, value: u8) -> Result<(), SinkError>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn set(&mut self, slot: SlotId, value: u8) -> Result<(), SinkError> {
        (**self).set(slot, value)
    }
}
