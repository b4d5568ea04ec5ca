use serde::{Deserialize, Serialize};

use super::score::Score;

/// Verdict produced by the content validation collaborator at creation time.
///
/// Set once when the memory is ingested; only the `quarantined` flag is
/// mutated afterwards, by quarantine/promote operations, which keep it in
/// sync with [`super::MemoryStatus::Quarantined`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionMetadata {
    /// Validator confidence in the content's trustworthiness.
    pub confidence: Score,
    /// Format the validator detected (e.g. "text/plain", "json").
    pub detected_format: String,
    /// Anomalies the validator flagged (injection patterns, contradictions, ...).
    #[serde(default)]
    pub anomaly_flags: Vec<String>,
    /// Whether the memory was placed in the quarantine partition.
    pub quarantined: bool,
    /// Free-form validator notes.
    #[serde(default)]
    pub validation_notes: Vec<String>,
}

impl IngestionMetadata {
    /// A clean verdict: full confidence, no anomalies, not quarantined.
    pub fn clean(detected_format: impl Into<String>) -> Self {
        Self {
            confidence: Score::default(),
            detected_format: detected_format.into(),
            anomaly_flags: Vec::new(),
            quarantined: false,
            validation_notes: Vec::new(),
        }
    }

    /// Whether the validator flagged any anomaly.
    pub fn has_anomalies(&self) -> bool {
        !self.anomaly_flags.is_empty()
    }
}
