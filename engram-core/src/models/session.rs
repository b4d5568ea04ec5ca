use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate view of one session's memories within a namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    /// Earliest `created_at` among the session's memories.
    pub started_at: DateTime<Utc>,
    pub memory_ids: Vec<String>,
    pub memory_count: usize,
    /// Summed cross-session recall counts over member memories.
    pub cross_session_recalls: u64,
}
