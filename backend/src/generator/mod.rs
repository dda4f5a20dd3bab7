//! Draw generator
//!
//! Samples six unique numbers, sorts them and writes them into the output
//! slots. See `engine.rs` for the implementation.

pub mod engine;

pub use engine::{lucky_dip, DrawGenerator, GenerateError, PopulateError, PopulateReport};
