use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::score::Score;

/// Snapshot of a memory's mutable fields, captured before each mutation.
///
/// Stored in `MemoryObject::previous_versions`, append-only. Every snapshot's
/// `version` is strictly less than the memory's current version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryVersion {
    /// Version number this snapshot preserves.
    pub version: u64,
    pub content: String,
    pub content_type: String,
    pub tags: BTreeSet<String>,
    pub importance: Score,
    pub task_criticality: Score,
    /// When this version stopped being current.
    pub superseded_at: DateTime<Utc>,
    /// Actor whose mutation superseded this version.
    pub superseded_by: String,
    /// Reason the caller gave for the superseding mutation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_reason: Option<String>,
}
