//! Evidence Mock Service Library
//!
//! A mock HTTP service that, given a control ID, returns randomly generated
//! compliance evidence records so integrations can be built against a stable
//! API shape without a real evidence-collection backend.
//!
//! ## Modules
//!
//! - [`domain`] - Evidence records, templates, and the template catalog
//! - [`infra`] - Evidence generator and error types
//! - [`api`] - REST API routes, handlers, and error responses
//! - [`telemetry`] - Logging setup
//! - [`server`] - Configuration and HTTP server bootstrap

pub mod api;
pub mod domain;
pub mod infra;
pub mod server;
pub mod telemetry;

// Re-export commonly used types
pub use domain::{
    AppId, ControlId, Evidence, EvidenceStatus, EvidenceTemplate, EvidenceType, TemplateCatalog,
};

pub use infra::{ConfigError, EvidenceError, EvidenceGenerator, GenerationMode, Result};
