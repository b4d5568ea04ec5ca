//! Namespace-level SLO compliance over a batch of query results.

use engram_core::constants::CROSS_SESSION_RECALL_TARGET_PERCENT;
use engram_core::models::slo::{
    ComplianceReport, FreshnessSlo, SloViolation, ViolationKind, ViolationSeverity,
};

/// Severity cutoff: compliance below this fraction of target is critical.
const CRITICAL_FRACTION: f64 = 0.8;

/// Cross-session critical cutoff (percent).
const CROSS_SESSION_CRITICAL_PERCENT: f64 = 70.0;

/// One query result reduced to the two signals compliance cares about.
#[derive(Debug, Clone, Copy)]
pub struct ResultSample {
    pub is_stale: bool,
    pub semantic_similarity: f64,
}

/// Cross-session recall attempts and successes for the reporting window.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossSessionSample {
    pub attempts: u64,
    pub successes: u64,
}

fn percent(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 100.0;
    }
    numerator as f64 / denominator as f64 * 100.0
}

fn severity_for(observed: f64, critical_below: f64) -> ViolationSeverity {
    if observed < critical_below {
        ViolationSeverity::Critical
    } else {
        ViolationSeverity::Warning
    }
}

/// Evaluate compliance for a batch of results plus optional cross-session
/// statistics. An empty batch is fully compliant.
pub fn evaluate(
    samples: &[ResultSample],
    cross_session: Option<CrossSessionSample>,
    slo: &FreshnessSlo,
) -> ComplianceReport {
    let total = samples.len();
    let fresh = samples.iter().filter(|s| !s.is_stale).count();
    let relevant = samples
        .iter()
        .filter(|s| s.semantic_similarity >= slo.relevance_threshold)
        .count();

    let freshness_percent = percent(fresh, total);
    let relevance_percent = percent(relevant, total);

    let mut violations = Vec::new();
    let target = slo.recall_target_percent;
    let critical_below = target * CRITICAL_FRACTION;

    if total > 0 && freshness_percent < target {
        violations.push(SloViolation {
            kind: ViolationKind::Freshness,
            severity: severity_for(freshness_percent, critical_below),
            observed_percent: freshness_percent,
            target_percent: target,
        });
    }
    if total > 0 && relevance_percent < target {
        violations.push(SloViolation {
            kind: ViolationKind::Relevance,
            severity: severity_for(relevance_percent, critical_below),
            observed_percent: relevance_percent,
            target_percent: target,
        });
    }

    let cross_session_percent = cross_session.and_then(|cs| {
        if cs.attempts == 0 {
            return None;
        }
        let observed = cs.successes as f64 / cs.attempts as f64 * 100.0;
        if observed < CROSS_SESSION_RECALL_TARGET_PERCENT {
            violations.push(SloViolation {
                kind: ViolationKind::CrossSessionRecall,
                severity: severity_for(observed, CROSS_SESSION_CRITICAL_PERCENT),
                observed_percent: observed,
                target_percent: CROSS_SESSION_RECALL_TARGET_PERCENT,
            });
        }
        Some(observed)
    });

    let is_compliant = violations.is_empty();
    ComplianceReport {
        freshness_percent,
        relevance_percent,
        cross_session_percent,
        violations,
        is_compliant,
    }
}
