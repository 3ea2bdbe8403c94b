//! Template catalog
//!
//! The read-only table mapping control IDs to the evidence templates that
//! records are generated from. Built once at startup and shared by reference.

use super::evidence::EvidenceTemplate;
use super::types::{ControlId, EvidenceType};

/// Immutable collection of evidence templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<EvidenceTemplate>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<EvidenceTemplate>) -> Self {
        Self { templates }
    }

    /// All templates whose control ID equals `control_id`, in catalog order.
    pub fn matching(&self, control_id: &ControlId) -> Vec<&EvidenceTemplate> {
        self.templates
            .iter()
            .filter(|t| &t.control_id == control_id)
            .collect()
    }

    pub fn templates(&self) -> &[EvidenceTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateCatalog {
    /// DataDog evidence for control 1234, Sonar evidence for control 5678.
    fn default() -> Self {
        Self::new(vec![
            EvidenceTemplate {
                evidence_type: EvidenceType::data_dog(),
                control_id: ControlId::from("1234"),
            },
            EvidenceTemplate {
                evidence_type: EvidenceType::sonar(),
                control_id: ControlId::from("5678"),
            },
        ])
    }
}
