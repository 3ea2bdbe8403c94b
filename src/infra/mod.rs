//! Infrastructure for the evidence mock service
//!
//! The random evidence generator and the crate error type.

mod error;
mod generator;

pub use error::{ConfigError, EvidenceError, Result};
pub use generator::{
    EvidenceGenerator, GenerationMode, MAX_RANDOMIZED_EVIDENCE, MIN_RANDOMIZED_EVIDENCE,
};
