//! API layer for the evidence mock service
//!
//! REST endpoints serving generated evidence, health probes, and the OpenAPI
//! document.

pub mod error;
pub mod handlers;
mod rest;
pub mod types;

pub use error::{ApiError, ErrorCode};
pub use rest::*;
