//! The staleness curve.

use chrono::{DateTime, Utc};

use engram_core::memory::MemoryObject;
use engram_core::models::slo::{FreshnessSlo, StalenessAssessment};

/// Fraction of `max_age_hours` treated as the grace period.
const GRACE_FRACTION: f64 = 0.5;

/// Staleness ceiling inside the grace period.
const GRACE_CEILING: f64 = 0.2;

/// Piecewise-linear staleness for a given age.
///
/// - age ≤ 0 → 0; age ≥ max → 1
/// - within the grace period (50% of max age): linear from 0 to 0.2
/// - beyond it: linear from 0.2 to 1.0 over the remaining range
pub fn staleness_for_age(age_hours: f64, slo: &FreshnessSlo) -> f64 {
    if age_hours <= 0.0 {
        return 0.0;
    }
    if age_hours >= slo.max_age_hours {
        return 1.0;
    }
    let grace = slo.max_age_hours * GRACE_FRACTION;
    if age_hours <= grace {
        (age_hours / grace) * GRACE_CEILING
    } else {
        let progressed = (age_hours - grace) / (slo.max_age_hours - grace);
        GRACE_CEILING + progressed * (1.0 - GRACE_CEILING)
    }
}

/// Effective age in hours: the more recent of `created_at` and
/// `last_accessed_at` counts, so an actively used memory ages slower.
pub fn effective_age_hours(memory: &MemoryObject, now: DateTime<Utc>) -> f64 {
    let reference = match memory.last_accessed_at {
        Some(accessed) if accessed > memory.created_at => accessed,
        _ => memory.created_at,
    };
    let age = now.signed_duration_since(reference);
    age.num_milliseconds() as f64 / 3_600_000.0
}

/// Assess a memory's staleness at `now`.
pub fn assess(memory: &MemoryObject, slo: &FreshnessSlo, now: DateTime<Utc>) -> StalenessAssessment {
    let age_hours = effective_age_hours(memory, now);
    StalenessAssessment {
        age_hours,
        staleness: staleness_for_age(age_hours, slo),
        is_stale: age_hours >= slo.max_age_hours,
    }
}
