//! Type conversion utilities for FFI boundary
//!
//! Converts Python dicts into generator configuration and lets a dict act as
//! an output sink.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::{GeneratorConfig, MissingSlotPolicy};
use crate::models::SlotId;
use crate::sink::{OutputSink, SinkError};

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract an optional field from a Python dict.
///
/// Returns `None` if the key is absent; errors only if conversion fails.
fn extract_optional<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => Ok(Some(value.extract()?)),
        _ => Ok(None),
    }
}

// ========================================================================
// Configuration Parsers
// ========================================================================

/// Convert Python dict to GeneratorConfig
///
/// Unknown keys are ignored; missing keys take their defaults.
///
/// # Errors
///
/// Returns PyValueError if a value has the wrong type or the resulting
/// config fails validation.
pub fn parse_generator_config(py_config: &Bound<'_, PyDict>) -> PyResult<GeneratorConfig> {
    let mut config = GeneratorConfig::default();

    config.rng_seed = extract_optional(py_config, "rng_seed")?;

    if let Some(prefix) = extract_optional::<String>(py_config, "slot_prefix")? {
        config.slot_prefix = prefix;
    }

    if let Some(policy) = extract_optional::<String>(py_config, "missing_slot")? {
        config.missing_slot = match policy.as_str() {
            "skip" => MissingSlotPolicy::Skip,
            "fail" => MissingSlotPolicy::Fail,
            other => {
                return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "Unknown missing_slot policy '{}', expected 'skip' or 'fail'",
                    other
                )))
            }
        };
    }

    if let Some(max_attempts) = extract_optional(py_config, "max_attempts")? {
        config.max_attempts = max_attempts;
    }

    config
        .validate()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

    Ok(config)
}

// ========================================================================
// Dict Sink
// ========================================================================

/// Writes slots into keys already present in a Python dict
///
/// A key that is absent from the dict is a missing slot, mirroring a form
/// that lacks the field.
pub struct PyDictSink<'a, 'py> {
    dict: &'a Bound<'py, PyDict>,
    prefix: &'a str,
}

impl<'a, 'py> PyDictSink<'a, 'py> {
    pub fn new(dict: &'a Bound<'py, PyDict>, prefix: &'a str) -> Self {
        Self { dict, prefix }
    }
}

impl OutputSink for PyDictSink<'_, '_> {
    fn set(&mut self, slot: SlotId, value: u8) -> Result<(), SinkError> {
        let name = slot.name(self.prefix);
        let present = self.dict.contains(name.as_str()).map_err(py_to_sink)?;
        if !present {
            return Err(SinkError::MissingSlot { name });
        }
        self.dict.set_item(name, value).map_err(py_to_sink)
    }
}

fn py_to_sink(err: PyErr) -> SinkError {
    SinkError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        err.to_string(),
    ))
}
