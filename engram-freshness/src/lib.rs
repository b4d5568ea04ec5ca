//! # engram-freshness
//!
//! Staleness scoring and freshness SLO compliance.
//!
//! Staleness is a [0,1] progression toward the SLO's maximum age with a
//! grace period: inside the first half of the window it climbs slowly to
//! 0.2, beyond it accelerates linearly to 1.0. Compliance evaluates a batch
//! of query results against the SLO's freshness, relevance, and
//! cross-session targets.

pub mod compliance;
pub mod engine;
pub mod staleness;

pub use engine::FreshnessEvaluator;
