/// Engram system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Half-life for the created-at recency signal (7 days, in milliseconds).
pub const CREATED_HALF_LIFE_MS: f64 = 7.0 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Half-life for the last-accessed recency signal (3.5 days, in milliseconds).
pub const ACCESS_HALF_LIFE_MS: f64 = 3.5 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Maximum boost the access signal can add on top of the created-at score.
pub const ACCESS_BOOST_CAP: f64 = 0.2;

/// Actor recorded on provenance entries written by automated sweeps.
pub const SYSTEM_ACTOR: &str = "system";

/// Session bucket used when a memory carries no session id.
pub const DEFAULT_SESSION_ID: &str = "default";

/// Fixed compliance target for cross-session recall (percent).
pub const CROSS_SESSION_RECALL_TARGET_PERCENT: f64 = 90.0;
