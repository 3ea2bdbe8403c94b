//! Random evidence generation
//!
//! A single [`EvidenceGenerator`] is created at startup and shared by every
//! request. Its random source is seeded exactly once, either from OS entropy
//! or from a fixed seed for reproducible runs, and is never reseeded.

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::error::ConfigError;
use crate::domain::{
    AppId, Evidence, EvidenceStatus, EvidenceTemplate, EVIDENCE_ID_CHARSET, EVIDENCE_ID_PREFIX,
    EVIDENCE_ID_RANDOM_LEN,
};

/// Lower bound on the record count in randomized mode
pub const MIN_RANDOMIZED_EVIDENCE: usize = 10;

/// Upper bound on the record count in randomized mode (one per app ID label)
pub const MAX_RANDOMIZED_EVIDENCE: usize = 26;

/// How many records to produce for a set of matching templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    /// 10-26 records cycling through the templates, each with a unique app ID
    /// and a random status
    #[default]
    Randomized,
    /// Exactly one successful record per template, without app IDs
    PerTemplate,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Randomized => "randomized",
            GenerationMode::PerTemplate => "per-template",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "randomized" | "random" => Ok(GenerationMode::Randomized),
            "per-template" | "per_template" | "fixed" => Ok(GenerationMode::PerTemplate),
            _ => Err(ConfigError::InvalidValue {
                name: "EVIDENCE_MODE",
                value: s.to_string(),
                reason: "expected \"randomized\" or \"per-template\"".to_string(),
            }),
        }
    }
}

/// Process-wide source of generated evidence
pub struct EvidenceGenerator {
    rng: Mutex<StdRng>,
}

impl EvidenceGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a generator with a fixed seed. Two generators with the same seed
    /// produce identical output for identical calls.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Generate records for `templates`.
    ///
    /// Returns an empty list when no templates are given. The random source is
    /// locked once for the whole response.
    pub fn generate(&self, templates: &[&EvidenceTemplate], mode: GenerationMode) -> Vec<Evidence> {
        if templates.is_empty() {
            return Vec::new();
        }

        let mut rng = self.lock();
        match mode {
            GenerationMode::PerTemplate => templates
                .iter()
                .map(|template| {
                    Evidence::from_template(
                        template,
                        random_evidence_id(&mut *rng),
                        EvidenceStatus::Success,
                        None,
                    )
                })
                .collect(),
            GenerationMode::Randomized => {
                let target = rng.gen_range(MIN_RANDOMIZED_EVIDENCE..=MAX_RANDOMIZED_EVIDENCE);

                let mut app_ids = AppId::all();
                app_ids.shuffle(&mut *rng);

                // Stops early if the labels run out before the target count
                app_ids
                    .into_iter()
                    .take(target)
                    .enumerate()
                    .map(|(i, app_id)| {
                        let template = templates[i % templates.len()];
                        Evidence::from_template(
                            template,
                            random_evidence_id(&mut *rng),
                            random_status(&mut *rng),
                            Some(app_id),
                        )
                    })
                    .collect()
            }
        }
    }

    /// A fresh `sys_`-prefixed evidence ID.
    pub fn evidence_id(&self) -> String {
        random_evidence_id(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, StdRng> {
        // The RNG has no invariants a panicking holder could break
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for EvidenceGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl fmt::Debug for EvidenceGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvidenceGenerator").finish_non_exhaustive()
    }
}

fn random_evidence_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut id = String::with_capacity(EVIDENCE_ID_PREFIX.len() + EVIDENCE_ID_RANDOM_LEN);
    id.push_str(EVIDENCE_ID_PREFIX);
    for _ in 0..EVIDENCE_ID_RANDOM_LEN {
        let idx = rng.gen_range(0..EVIDENCE_ID_CHARSET.len());
        id.push(EVIDENCE_ID_CHARSET[idx] as char);
    }
    id
}

fn random_status<R: Rng + ?Sized>(rng: &mut R) -> EvidenceStatus {
    EvidenceStatus::ALL[rng.gen_range(0..EvidenceStatus::ALL.len())]
}
