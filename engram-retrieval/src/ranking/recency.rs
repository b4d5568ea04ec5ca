//! Recency decay.
//!
//! The primary signal ages from `created_at` so repeated retrieval cannot
//! keep a memory "immortal"; recent access only adds a capped boost.

use chrono::{DateTime, Utc};

use engram_core::constants::{ACCESS_BOOST_CAP, ACCESS_HALF_LIFE_MS, CREATED_HALF_LIFE_MS};
use engram_core::memory::MemoryObject;

fn half_life_decay(age_ms: f64, half_life_ms: f64) -> f64 {
    0.5_f64.powf(age_ms / half_life_ms)
}

/// Recency score in [0,1] at `now`.
///
/// - created-at decay with a 7-day half-life; a future `created_at`
///   (clock skew) scores 1.0
/// - last-accessed decay with a 3.5-day half-life adds at most +0.2 on top;
///   a future access timestamp is ignored
pub fn recency_score(memory: &MemoryObject, now: DateTime<Utc>) -> f64 {
    let created_age_ms = now.signed_duration_since(memory.created_at).num_milliseconds();
    let created_score = if created_age_ms < 0 {
        1.0
    } else {
        half_life_decay(created_age_ms as f64, CREATED_HALF_LIFE_MS)
    };

    let boosted = match memory.last_accessed_at {
        Some(accessed) => {
            let access_age_ms = now.signed_duration_since(accessed).num_milliseconds();
            if access_age_ms < 0 {
                created_score
            } else {
                let access_score = half_life_decay(access_age_ms as f64, ACCESS_HALF_LIFE_MS);
                created_score + ACCESS_BOOST_CAP * access_score
            }
        }
        None => created_score,
    };

    boosted.clamp(0.0, 1.0)
}
