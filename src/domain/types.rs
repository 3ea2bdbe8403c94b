//! Core identifier types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal prefix carried by every generated evidence ID
pub const EVIDENCE_ID_PREFIX: &str = "sys_";

/// Number of random characters following [`EVIDENCE_ID_PREFIX`]
pub const EVIDENCE_ID_RANDOM_LEN: usize = 32;

/// Alphabet the random part of an evidence ID is drawn from
pub const EVIDENCE_ID_CHARSET: &[u8; 16] = b"abcdef0123456789";

/// External identifier grouping evidence templates (e.g. "1234")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(pub String);

impl ControlId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ControlId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ControlId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Kind of tool an evidence record was collected from (e.g. "dataDog")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceType(pub String);

impl EvidenceType {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn data_dog() -> Self {
        Self::new("dataDog")
    }

    pub fn sonar() -> Self {
        Self::new("sonar")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EvidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EvidenceType {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Single-letter application label (A-Z) attached to a generated record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub char);

impl AppId {
    /// All 26 labels in alphabetical order
    pub fn all() -> Vec<AppId> {
        ('A'..='Z').map(AppId).collect()
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
