use crate::errors::EngramResult;
use crate::memory::{IngestionMetadata, MemoryDraft, Score};

/// Content validation collaborator, consulted once at memory creation.
///
/// The verdict decides whether the new memory lands in the primary or the
/// quarantine partition. Outright rejection surfaces as
/// `LifecycleError::ValidationRejected`.
pub trait ContentValidator: Send + Sync {
    fn validate(&self, draft: &MemoryDraft) -> EngramResult<IngestionMetadata>;
}

/// Reference validator that accepts everything with full confidence.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ContentValidator for AcceptAll {
    fn validate(&self, draft: &MemoryDraft) -> EngramResult<IngestionMetadata> {
        Ok(IngestionMetadata::clean(draft.content_type.clone()))
    }
}

/// Reference validator that quarantines below a confidence threshold.
///
/// Confidence is a crude length heuristic (empty content scores 0); real
/// deployments plug in their own validator. Anomaly flags always quarantine.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdValidator {
    /// Quarantine below this confidence (default 0.5).
    pub quarantine_below: f64,
}

impl Default for ThresholdValidator {
    fn default() -> Self {
        Self {
            quarantine_below: Score::MEDIUM,
        }
    }
}

impl ContentValidator for ThresholdValidator {
    fn validate(&self, draft: &MemoryDraft) -> EngramResult<IngestionMetadata> {
        let trimmed = draft.content.trim();
        let confidence = if trimmed.is_empty() {
            Score::new(0.0)
        } else if trimmed.len() < 8 {
            Score::new(0.4)
        } else {
            Score::default()
        };
        let mut notes = Vec::new();
        let quarantined = confidence.value() < self.quarantine_below;
        if quarantined {
            notes.push(format!(
                "confidence {confidence} below quarantine threshold {}",
                self.quarantine_below
            ));
        }
        Ok(IngestionMetadata {
            confidence,
            detected_format: draft.content_type.clone(),
            anomaly_flags: Vec::new(),
            quarantined,
            validation_notes: notes,
        })
    }
}
