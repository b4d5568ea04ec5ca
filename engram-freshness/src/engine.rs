use chrono::Utc;

use engram_core::memory::MemoryObject;
use engram_core::models::slo::{ComplianceReport, FreshnessSlo, StalenessAssessment};

use crate::compliance::{self, CrossSessionSample, ResultSample};
use crate::staleness;

/// Freshness evaluator holding the SLO it measures against.
#[derive(Debug, Clone, Default)]
pub struct FreshnessEvaluator {
    slo: FreshnessSlo,
}

impl FreshnessEvaluator {
    pub fn new(slo: FreshnessSlo) -> Self {
        Self { slo }
    }

    pub fn slo(&self) -> &FreshnessSlo {
        &self.slo
    }

    /// Assess one memory's staleness as of now.
    pub fn assess(&self, memory: &MemoryObject) -> StalenessAssessment {
        staleness::assess(memory, &self.slo, Utc::now())
    }

    /// Assess with an explicit clock, for deterministic tests.
    pub fn assess_at(
        &self,
        memory: &MemoryObject,
        now: chrono::DateTime<Utc>,
    ) -> StalenessAssessment {
        staleness::assess(memory, &self.slo, now)
    }

    /// Evaluate namespace-level compliance for a batch of query results.
    pub fn compliance(
        &self,
        samples: &[ResultSample],
        cross_session: Option<CrossSessionSample>,
    ) -> ComplianceReport {
        compliance::evaluate(samples, cross_session, &self.slo)
    }
}
