//! Evidence records returned by the API

use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::{AppId, ControlId, EvidenceType};

/// Outcome of a simulated evidence collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceStatus {
    Success,
    Failed,
}

impl EvidenceStatus {
    pub const ALL: [EvidenceStatus; 2] = [EvidenceStatus::Success, EvidenceStatus::Failed];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceStatus::Success => "SUCCESS",
            EvidenceStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for EvidenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static pairing of an evidence type with the control it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceTemplate {
    pub evidence_type: EvidenceType,
    pub control_id: ControlId,
}

impl EvidenceTemplate {
    pub fn new(evidence_type: impl Into<EvidenceType>, control_id: impl Into<ControlId>) -> Self {
        Self {
            evidence_type: evidence_type.into(),
            control_id: control_id.into(),
        }
    }
}

/// A generated evidence record.
///
/// Built per request from a template and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub evidence_id: String,
    pub evidence_type: EvidenceType,
    pub control_id: ControlId,
    pub evidence_status: EvidenceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<AppId>,
}

impl Evidence {
    /// Build a record for `template` with the given identity and outcome.
    pub fn from_template(
        template: &EvidenceTemplate,
        evidence_id: String,
        evidence_status: EvidenceStatus,
        app_id: Option<AppId>,
    ) -> Self {
        Self {
            evidence_id,
            evidence_type: template.evidence_type.clone(),
            control_id: template.control_id.clone(),
            evidence_status,
            app_id,
        }
    }
}
