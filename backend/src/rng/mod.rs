//! Deterministic random number generation
//!
//! Uses xorshift64* for fast, reproducible draws.
//! All randomness used by the generator goes through [`RandomSource`], so
//! tests can swap the seeded generator for a scripted one.

mod source;
mod xorshift;

pub use source::{RandomSource, ScriptedSource};
pub use xorshift::RngManager;
