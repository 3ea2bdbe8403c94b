//! Shared request types for REST API handlers.

use crate::domain::ControlId;
use crate::infra::{EvidenceError, Result};

/// Query parameters for `GET /v1/evidences`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EvidenceQuery {
    pub control_id: Option<String>,
}

impl EvidenceQuery {
    /// Build from decoded query pairs. A repeated `controlId` keeps its first
    /// value; other keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            control_id: pairs
                .into_iter()
                .find(|(key, _)| key == "controlId")
                .map(|(_, value)| value),
        }
    }

    /// The requested control, rejecting an absent or empty value.
    pub fn control_id(self) -> Result<ControlId> {
        match self.control_id {
            Some(id) if !id.is_empty() => Ok(ControlId::new(id)),
            _ => Err(EvidenceError::MissingControlId),
        }
    }
}
