//! Sampling loop and slot population
//!
//! # Algorithm
//!
//! 1. Draw integers uniformly from [1, 60] into a set; duplicates are
//!    discarded and do not count.
//! 2. Stop once the set holds six members.
//! 3. Sort ascending (numeric).
//! 4. Write number i into slot i for i = 1..6.
//!
//! The loop terminates almost surely for any uniform source. `max_attempts`
//! bounds it anyway so a stuck source fails instead of hanging the caller.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, trace};

use crate::config::{ConfigError, GeneratorConfig, MissingSlotPolicy};
use crate::models::{Draw, DrawError, SlotId, DRAW_SIZE, MAX_NUMBER, MIN_NUMBER};
use crate::rng::{RandomSource, RngManager};
use crate::sink::{OutputSink, SinkError};

/// Errors from the sampling loop
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Random source returned {value}, outside {min}..={max}")]
    SourceOutOfRange { value: i64, min: u8, max: u8 },

    #[error("Gave up after {attempts} samples with only {distinct} distinct numbers")]
    AttemptsExhausted { attempts: usize, distinct: usize },

    #[error("Sampled numbers do not form a valid draw: {0}")]
    InvalidDraw(#[from] DrawError),
}

/// Errors from generate-and-populate
#[derive(Debug, Error)]
pub enum PopulateError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("Failed to populate {slot}: {source}")]
    Sink {
        slot: SlotId,
        #[source]
        source: SinkError,
    },
}

/// Outcome of writing a draw into a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulateReport {
    /// The draw that was written
    pub draw: Draw,

    /// Slots that accepted their number
    pub written: Vec<SlotId>,

    /// Slots the sink could not address (skip policy only)
    pub skipped: Vec<SlotId>,
}

impl PopulateReport {
    /// True when all six slots were written
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.written.len() == DRAW_SIZE
    }
}

/// Generates draws and writes them into output sinks
///
/// # Example
/// ```
/// use lucky_dip_core_rs::{DrawGenerator, GeneratorConfig, RngManager};
/// use lucky_dip_core_rs::sink::FormSlots;
///
/// let generator = DrawGenerator::new(GeneratorConfig::default()).unwrap();
/// let mut rng = RngManager::new(2024);
/// let mut form = FormSlots::new("slot-");
///
/// let report = generator.generate_and_populate(&mut rng, &mut form).unwrap();
/// assert!(report.is_complete());
/// assert_eq!(form.get(lucky_dip_core_rs::SlotId::new(1).unwrap()), Some(report.draw.numbers()[0]));
/// ```
#[derive(Debug, Clone)]
pub struct DrawGenerator {
    config: GeneratorConfig,
}

impl DrawGenerator {
    /// Create a generator from a validated configuration
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] if the configuration fails validation
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Random source described by the configuration
    ///
    /// Returns the seeded RNG and the seed it was built from. Without a
    /// configured seed the RNG is seeded from entropy.
    pub fn source(&self) -> (RngManager, u64) {
        match self.config.rng_seed {
            Some(seed) => (RngManager::new(seed), seed),
            None => RngManager::from_entropy(),
        }
    }

    /// Sample a draw from `source`
    ///
    /// # Errors
    /// - [`GenerateError::SourceOutOfRange`] if the source breaks its bounds
    /// - [`GenerateError::AttemptsExhausted`] if `max_attempts` samples do
    ///   not yield six distinct numbers
    pub fn generate<R>(&self, source: &mut R) -> Result<Draw, GenerateError>
    where
        R: RandomSource + ?Sized,
    {
        let low = i64::from(MIN_NUMBER);
        let high = i64::from(MAX_NUMBER);

        let mut chosen: HashSet<i64> = HashSet::with_capacity(DRAW_SIZE);
        let mut attempts = 0usize;

        while chosen.len() < DRAW_SIZE {
            if attempts == self.config.max_attempts {
                return Err(GenerateError::AttemptsExhausted {
                    attempts,
                    distinct: chosen.len(),
                });
            }
            attempts += 1;

            let value = source.next_int(low, high);
            if value < low || value > high {
                return Err(GenerateError::SourceOutOfRange {
                    value,
                    min: MIN_NUMBER,
                    max: MAX_NUMBER,
                });
            }
            if !chosen.insert(value) {
                trace!(value, "duplicate sample discarded");
            }
        }

        let values: Vec<i64> = chosen.into_iter().collect();
        let draw = Draw::new(&values)?;
        debug!(attempts, draw = %draw, "draw generated");
        Ok(draw)
    }

    /// Write an existing draw into `sink`, slot i receiving number i
    ///
    /// # Errors
    /// - [`PopulateError::Sink`] on an I/O failure, or on a missing slot
    ///   under [`MissingSlotPolicy::Fail`]
    pub fn populate<S>(&self, draw: &Draw, sink: &mut S) -> Result<PopulateReport, PopulateError>
    where
        S: OutputSink + ?Sized,
    {
        let mut written = Vec::with_capacity(DRAW_SIZE);
        let mut skipped = Vec::new();

        for (slot, value) in draw.slots() {
            match sink.set(slot, value) {
                Ok(()) => written.push(slot),
                Err(SinkError::MissingSlot { name })
                    if self.config.missing_slot == MissingSlotPolicy::Skip =>
                {
                    debug!(slot = %name, value, "output slot missing, skipped");
                    skipped.push(slot);
                }
                Err(source) => return Err(PopulateError::Sink { slot, source }),
            }
        }

        Ok(PopulateReport {
            draw: *draw,
            written,
            skipped,
        })
    }

    /// Sample a draw and write it into `sink`
    pub fn generate_and_populate<R, S>(
        &self,
        source: &mut R,
        sink: &mut S,
    ) -> Result<PopulateReport, PopulateError>
    where
        R: RandomSource + ?Sized,
        S: OutputSink + ?Sized,
    {
        let draw = self.generate(source)?;
        self.populate(&draw, sink)
    }
}

/// Fill `sink` with a fresh entropy-seeded draw using default settings
pub fn lucky_dip<S>(sink: &mut S) -> Result<PopulateReport, PopulateError>
where
    S: OutputSink + ?Sized,
{
    let generator = DrawGenerator {
        config: GeneratorConfig::default(),
    };
    let (mut rng, _) = generator.source();
    generator.generate_and_populate(&mut rng, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;
    use crate::sink::FormSlots;

    fn generator() -> DrawGenerator {
        DrawGenerator::new(GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn test_duplicates_do_not_count() {
        let mut source = ScriptedSource::new(vec![5, 5, 5, 9, 1, 9, 2, 3, 4]);
        let draw = generator().generate(&mut source).unwrap();

        assert_eq!(draw.numbers(), &[1, 2, 3, 4, 5, 9]);
        assert_eq!(source.calls(), 9);
    }

    #[test]
    fn test_out_of_range_source_rejected() {
        let mut source = ScriptedSource::new(vec![3, 61]);
        let err = generator().generate(&mut source).unwrap_err();
        assert_eq!(
            err,
            GenerateError::SourceOutOfRange { value: 61, min: 1, max: 60 }
        );
    }

    #[test]
    fn test_stuck_source_exhausts_attempts() {
        let config = GeneratorConfig {
            max_attempts: 50,
            ..GeneratorConfig::default()
        };
        let generator = DrawGenerator::new(config).unwrap();
        let mut source = ScriptedSource::new(vec![1, 2, 3]);

        let err = generator.generate(&mut source).unwrap_err();
        assert_eq!(
            err,
            GenerateError::AttemptsExhausted { attempts: 50, distinct: 3 }
        );
    }

    #[test]
    fn test_missing_slot_fails_under_strict_policy() {
        let config = GeneratorConfig {
            missing_slot: MissingSlotPolicy::Fail,
            ..GeneratorConfig::default()
        };
        let generator = DrawGenerator::new(config).unwrap();
        let draw = Draw::new(&[1, 2, 3, 4, 5, 6]).unwrap();
        let mut form = FormSlots::with_fields("slot-", ["slot-1", "slot-2"]);

        let err = generator.populate(&draw, &mut form).unwrap_err();
        match err {
            PopulateError::Sink { slot, .. } => assert_eq!(slot.index(), 3),
            other => panic!("expected sink error, got {:?}", other),
        }
        // Slots before the failure were written
        assert_eq!(form.value("slot-2"), Some(2));
    }

    #[test]
    fn test_dyn_source_and_sink() {
        let mut source = ScriptedSource::new(vec![6, 5, 4, 3, 2, 1]);
        let mut form = FormSlots::default();
        let source_dyn: &mut dyn RandomSource = &mut source;
        let sink_dyn: &mut dyn OutputSink = &mut form;

        let report = generator().generate_and_populate(source_dyn, sink_dyn).unwrap();
        assert!(report.is_complete());
        assert_eq!(form.slot_values(), vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6)]);
    }

    #[test]
    fn test_lucky_dip_fills_default_form() {
        let mut form = FormSlots::default();
        let report = lucky_dip(&mut form).unwrap();
        assert!(report.is_complete());
        assert!(form.slot_values().iter().all(Option::is_some));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GeneratorConfig {
            slot_prefix: String::new(),
            ..GeneratorConfig::default()
        };
        assert!(DrawGenerator::new(config).is_err());
    }
}
