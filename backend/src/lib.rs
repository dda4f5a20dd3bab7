//! Lucky Dip Core - Rust Engine
//!
//! Generates lottery draws of six unique numbers in [1, 60], sorted
//! ascending, and writes them into six output slots.
//!
//! # Architecture
//!
//! - **rng**: Deterministic random number generation and the `RandomSource` seam
//! - **models**: Domain types (Draw, SlotId)
//! - **generator**: Sampling loop and slot population
//! - **sink**: Output sinks (`OutputSink` seam, in-memory form, line writer)
//! - **config**: Generator configuration and config hashing
//! - **record**: Reproducibility records for seeded draws
//! - **lottery**: Ticket book and round play
//!
//! # Critical Invariants
//!
//! 1. A draw has exactly 6 distinct numbers, each in [1, 60], strictly increasing
//! 2. Seeded randomness is deterministic (same seed, same draw)
//! 3. A missing output slot is never fatal under the default policy
//!
//! # Example
//!
//! ```
//! use lucky_dip_core_rs::{DrawGenerator, GeneratorConfig};
//! use lucky_dip_core_rs::sink::FormSlots;
//!
//! let generator = DrawGenerator::new(GeneratorConfig::seeded(42)).unwrap();
//! let (mut rng, _seed) = generator.source();
//! let mut form = FormSlots::default();
//!
//! let report = generator.generate_and_populate(&mut rng, &mut form).unwrap();
//! let numbers = report.draw.numbers();
//! assert!(numbers.windows(2).all(|w| w[0] < w[1]));
//! ```

// Module declarations
pub mod config;
pub mod generator;
pub mod lottery;
pub mod models;
pub mod record;
pub mod rng;
pub mod sink;

// Re-exports for convenience
pub use config::{ConfigError, GeneratorConfig, MissingSlotPolicy};
pub use generator::{lucky_dip, DrawGenerator, GenerateError, PopulateError, PopulateReport};
pub use models::{Draw, DrawError, InvalidSlot, SlotId, DRAW_SIZE, MAX_NUMBER, MIN_NUMBER};
pub use record::{DrawRecord, RecordError};
pub use rng::{RandomSource, RngManager};
pub use sink::{OutputSink, SinkError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn lucky_dip_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyLuckyDip>()?;
    Ok(())
}
