//! Generator configuration
//!
//! Loaded from JSON (CLI `--config`) or a Python dict (FFI). Every field has
//! a default, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::models::{DEFAULT_SLOT_PREFIX, DRAW_SIZE};

/// Default cap on raw samples per generation
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Errors raised while loading or checking a configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Config serialization failed: {0}")]
    Serialization(String),
}

/// What to do when an output slot does not exist in the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingSlotPolicy {
    /// Log at debug level, record the slot as skipped, keep going
    #[default]
    Skip,

    /// Abort population with an error
    Fail,
}

/// Complete generator configuration
///
/// # Example
/// ```
/// use lucky_dip_core_rs::config::{GeneratorConfig, MissingSlotPolicy};
///
/// let config = GeneratorConfig::from_json(r#"{"rng_seed": 7, "slot_prefix": "no"}"#).unwrap();
/// assert_eq!(config.rng_seed, Some(7));
/// assert_eq!(config.slot_prefix, "no");
/// assert_eq!(config.missing_slot, MissingSlotPolicy::Skip);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible draws; `None` seeds from entropy
    pub rng_seed: Option<u64>,

    /// Slot naming prefix (`slot-` gives `slot-1` .. `slot-6`)
    pub slot_prefix: String,

    /// Behaviour on a missing output slot
    pub missing_slot: MissingSlotPolicy,

    /// Maximum raw samples before giving up on a source
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            slot_prefix: DEFAULT_SLOT_PREFIX.to_string(),
            missing_slot: MissingSlotPolicy::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// Config with a fixed seed and everything else defaulted
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng_seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "slot_prefix must not be empty".to_string(),
            ));
        }
        if self.max_attempts < DRAW_SIZE {
            return Err(ConfigError::Invalid(format!(
                "max_attempts must be at least {}, got {}",
                DRAW_SIZE, self.max_attempts
            )));
        }
        Ok(())
    }
}

/// Compute deterministic SHA256 hash of a config
///
/// Keys are sorted before hashing so the digest does not depend on field
/// or map ordering.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, ConfigError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(config).map_err(|e| ConfigError::Serialization(e.to_string()))?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value))
        .map_err(|e| ConfigError::Serialization(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
