//! Reproducibility record
//!
//! Captures what is needed to regenerate a draw: the seed, the draw itself
//! and a hash of the configuration it was produced under.
//!
//! # Critical Invariants
//!
//! - **Determinism**: same seed + same config produces the same draw
//! - **Config Matching**: a record only replays under a matching config

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{compute_config_hash, ConfigError, GeneratorConfig};
use crate::generator::{DrawGenerator, GenerateError};
use crate::models::Draw;
use crate::rng::RngManager;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Config hash mismatch: record has {expected}, config gives {actual}")]
    ConfigMismatch { expected: String, actual: String },

    #[error("Replay diverged: recorded {expected}, regenerated {actual}")]
    Divergence { expected: Draw, actual: Draw },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("Record serialization failed: {0}")]
    Serialization(String),
}

/// A draw together with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    /// Seed the RNG was created with
    pub rng_seed: u64,

    /// The draw that seed produced
    pub draw: Draw,

    /// SHA256 of the config, with `rng_seed` pinned to the seed used
    pub config_hash: String,
}

impl DrawRecord {
    /// Generate a draw with `generator` and record how it was made
    ///
    /// Works for entropy-seeded configs too: the seed actually drawn is
    /// stored, so the record replays all the same.
    pub fn capture(generator: &DrawGenerator) -> Result<Self, RecordError> {
        let (mut rng, seed) = generator.source();
        let draw = generator.generate(&mut rng)?;
        let config_hash = pinned_hash(generator.config(), seed)?;

        Ok(Self {
            rng_seed: seed,
            draw,
            config_hash,
        })
    }

    /// Regenerate the draw under `config` and check it matches
    ///
    /// # Errors
    /// - [`RecordError::ConfigMismatch`] if `config` differs from the one
    ///   recorded (a config carrying a different seed counts as different)
    /// - [`RecordError::Divergence`] if regeneration yields another draw
    pub fn replay(&self, config: &GeneratorConfig) -> Result<Draw, RecordError> {
        let actual_hash = pinned_hash(config, self.rng_seed)?;
        if actual_hash != self.config_hash {
            return Err(RecordError::ConfigMismatch {
                expected: self.config_hash.clone(),
                actual: actual_hash,
            });
        }

        let generator = DrawGenerator::new(config.clone())?;
        let mut rng = RngManager::new(self.rng_seed);
        let draw = generator.generate(&mut rng)?;

        if draw != self.draw {
            return Err(RecordError::Divergence {
                expected: self.draw,
                actual: draw,
            });
        }
        Ok(draw)
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        serde_json::to_string(self).map_err(|e| RecordError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        serde_json::from_str(json).map_err(|e| RecordError::Serialization(e.to_string()))
    }
}

fn pinned_hash(config: &GeneratorConfig, seed: u64) -> Result<String, ConfigError> {
    let pinned = GeneratorConfig {
        rng_seed: Some(config.rng_seed.unwrap_or(seed)),
        ..config.clone()
    };
    compute_config_hash(&pinned)
}
