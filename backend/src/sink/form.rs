//! In-memory form with named fields

use std::collections::BTreeMap;

use super::{OutputSink, SinkError};
use crate::models::{SlotId, DEFAULT_SLOT_PREFIX};

/// A form holding a declared set of named number fields
///
/// Only declared fields can be written. A form built with fewer than six
/// slot fields reproduces the "missing slot" case of a partial page.
///
/// # Example
/// ```
/// use lucky_dip_core_rs::sink::{FormSlots, OutputSink};
/// use lucky_dip_core_rs::SlotId;
///
/// let mut form = FormSlots::new("slot-");
/// form.set(SlotId::new(1).unwrap(), 17).unwrap();
/// assert_eq!(form.value("slot-1"), Some(17));
/// assert_eq!(form.value("slot-2"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSlots {
    prefix: String,
    fields: BTreeMap<String, Option<u8>>,
}

impl FormSlots {
    /// Form with all six slot fields declared under `prefix`
    pub fn new(prefix: &str) -> Self {
        Self::with_fields(prefix, SlotId::all().map(|slot| slot.name(prefix)))
    }

    /// Form declaring exactly the given field names
    pub fn with_fields<I, S>(prefix: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefix: prefix.to_string(),
            fields: names.into_iter().map(|n| (n.into(), None)).collect(),
        }
    }

    /// Current value of a field, `None` if unset or undeclared
    pub fn value(&self, name: &str) -> Option<u8> {
        self.fields.get(name).copied().flatten()
    }

    /// Value held for a slot
    pub fn get(&self, slot: SlotId) -> Option<u8> {
        self.value(&slot.name(&self.prefix))
    }

    /// Slot values in slot order; `None` where unset or undeclared
    pub fn slot_values(&self) -> Vec<Option<u8>> {
        SlotId::all().map(|slot| self.get(slot)).collect()
    }

    /// Fields holding a value, in name order
    pub fn filled(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.fields
            .iter()
            .filter_map(|(name, value)| value.map(|v| (name.as_str(), v)))
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for FormSlots {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_PREFIX)
    }
}

impl OutputSink for FormSlots {
    fn set(&mut self, slot: SlotId, value: u8) -> Result<(), SinkError> {
        let name = slot.name(&self.prefix);
        match self.fields.get_mut(&name) {
            Some(field) => {
                *field = Some(value);
                Ok(())
            }
            None => Err(SinkError::MissingSlot { name }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to_undeclared_field_fails() {
        let mut form = FormSlots::with_fields("slot-", ["slot-1", "slot-2"]);
        let slot3 = SlotId::new(3).unwrap();

        match form.set(slot3, 9) {
            Err(SinkError::MissingSlot { name }) => assert_eq!(name, "slot-3"),
            other => panic!("expected MissingSlot, got {:?}", other),
        }
        assert!(!form.has_field("slot-3"));
    }

    #[test]
    fn test_overwrite_keeps_latest() {
        let mut form = FormSlots::default();
        let slot = SlotId::new(2).unwrap();
        form.set(slot, 5).unwrap();
        form.set(slot, 8).unwrap();
        assert_eq!(form.get(slot), Some(8));
    }

    #[test]
    fn test_filled_skips_unset_fields() {
        let mut form = FormSlots::default();
        form.set(SlotId::new(4).unwrap(), 31).unwrap();
        let filled: Vec<(&str, u8)> = form.filled().collect();
        assert_eq!(filled, vec![("slot-4", 31)]);
    }
}
