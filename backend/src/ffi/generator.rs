//! PyO3 wrapper for DrawGenerator
//!
//! This module provides the Python interface to the draw generator.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{parse_generator_config, PyDictSink};
use crate::config::GeneratorConfig;
use crate::generator::DrawGenerator;
use crate::rng::RngManager;

/// Python wrapper for the draw generator
///
/// Holds its own RNG, so successive calls continue one seeded sequence.
///
/// # Example (from Python)
///
/// ```python
/// from lucky_dip_core_rs import LuckyDip
///
/// dip = LuckyDip({"rng_seed": 12345, "slot_prefix": "no"})
/// form = {"no1": None, "no2": None, "no3": None,
///         "no4": None, "no5": None, "no6": None}
/// numbers = dip.populate(form)
/// print(numbers, form)
/// ```
#[pyclass(name = "LuckyDip")]
pub struct PyLuckyDip {
    inner: DrawGenerator,
    rng: RngManager,
    seed: u64,
}

fn runtime_error(context: &str, err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!("{}: {}", context, err))
}

#[pymethods]
impl PyLuckyDip {
    /// Create a generator from an optional configuration dict
    ///
    /// # Errors
    ///
    /// Raises ValueError if a config value has the wrong type or is invalid
    #[new]
    #[pyo3(signature = (config = None))]
    fn new(config: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let rust_config = match config {
            Some(dict) => parse_generator_config(dict)?,
            None => GeneratorConfig::default(),
        };

        let inner = DrawGenerator::new(rust_config)
            .map_err(|e| runtime_error("Failed to create generator", e))?;
        let (rng, seed) = inner.source();

        Ok(PyLuckyDip { inner, rng, seed })
    }

    /// Generate a draw and return it as a sorted list
    fn draw(&mut self) -> PyResult<Vec<u8>> {
        let draw = self
            .inner
            .generate(&mut self.rng)
            .map_err(|e| runtime_error("Draw generation failed", e))?;
        Ok(draw.numbers().to_vec())
    }

    /// Generate a draw and write it into the slot keys of `form`
    ///
    /// Keys missing from `form` are skipped (or raise, under the `fail`
    /// policy). Returns the full sorted draw.
    fn populate(&mut self, form: &Bound<'_, PyDict>) -> PyResult<Vec<u8>> {
        let prefix = self.inner.config().slot_prefix.clone();
        let mut sink = PyDictSink::new(form, &prefix);

        let report = self
            .inner
            .generate_and_populate(&mut self.rng, &mut sink)
            .map_err(|e| runtime_error("Populate failed", e))?;
        Ok(report.draw.numbers().to_vec())
    }

    /// Seed the internal RNG was created with
    fn seed(&self) -> u64 {
        self.seed
    }
}
