//! Line-oriented sink for terminals and files

use std::collections::BTreeSet;
use std::io::Write;

use super::{OutputSink, SinkError};
use crate::models::SlotId;

/// Writes each slot as a `name=value` line
///
/// By default every slot is addressable. [`WriterSink::with_fields`]
/// restricts output to a declared set of field names; other slots are
/// reported as missing.
///
/// # Example
/// ```
/// use lucky_dip_core_rs::sink::{OutputSink, WriterSink};
/// use lucky_dip_core_rs::SlotId;
///
/// let mut sink = WriterSink::new(Vec::new(), "slot-");
/// sink.set(SlotId::new(1).unwrap(), 4).unwrap();
/// assert_eq!(sink.into_inner(), b"slot-1=4\n");
/// ```
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    prefix: String,
    fields: Option<BTreeSet<String>>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, prefix: &str) -> Self {
        Self {
            writer,
            prefix: prefix.to_string(),
            fields: None,
        }
    }

    /// Sink that only accepts the given field names
    pub fn with_fields<I, S>(writer: W, prefix: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            writer,
            prefix: prefix.to_string(),
            fields: Some(names.into_iter().map(Into::into).collect()),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn set(&mut self, slot: SlotId, value: u8) -> Result<(), SinkError> {
        let name = slot.name(&self.prefix);
        if let Some(fields) = &self.fields {
            if !fields.contains(&name) {
                return Err(SinkError::MissingSlot { name });
            }
        }
        writeln!(self.writer, "{}={}", name, value)?;
        Ok(())
    }
}
