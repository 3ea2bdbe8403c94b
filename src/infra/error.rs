//! Error types for the evidence mock service

use thiserror::Error;

/// Errors that can occur while serving evidence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvidenceError {
    /// The `controlId` query parameter was absent or empty
    #[error("Control ID is required")]
    MissingControlId,
}

/// Errors raised while loading configuration at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable held a value that could not be used
    #[error("invalid {name} {value:?}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Result type for evidence operations
pub type Result<T> = std::result::Result<T, EvidenceError>;
