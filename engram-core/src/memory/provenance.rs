use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle action recorded in a provenance entry.
///
/// Closed enum so every consumer gets exhaustiveness checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvenanceAction {
    Created,
    Accessed,
    Modified,
    Cited,
    Invalidated,
    Edited,
    Deleted,
    Merged,
    Quarantined,
    RolledBack,
    Expired,
}

impl std::fmt::Display for ProvenanceAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Created => "created",
            Self::Accessed => "accessed",
            Self::Modified => "modified",
            Self::Cited => "cited",
            Self::Invalidated => "invalidated",
            Self::Edited => "edited",
            Self::Deleted => "deleted",
            Self::Merged => "merged",
            Self::Quarantined => "quarantined",
            Self::RolledBack => "rolled_back",
            Self::Expired => "expired",
        };
        write!(f, "{s}")
    }
}

/// One immutable audit record describing a single lifecycle action.
///
/// Entries are appended by the lifecycle manager, exactly one per
/// state-changing operation. They are never removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceEntry {
    /// What happened.
    pub action: ProvenanceAction,
    /// Who did it (agent id, user id, or "system").
    pub actor_id: String,
    /// When it happened.
    pub timestamp: DateTime<Utc>,
    /// Why, when the caller supplied a reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Version the memory held after this action, for versioning actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    /// Source memory ids, for merge entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_from: Option<Vec<String>>,
    /// Content as it stood before this action, for edit/rollback audit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_content: Option<String>,
}

impl ProvenanceEntry {
    /// A minimal entry: action + actor, timestamped now.
    pub fn new(action: ProvenanceAction, actor_id: impl Into<String>) -> Self {
        Self {
            action,
            actor_id: actor_id.into(),
            timestamp: Utc::now(),
            reason: None,
            version: None,
            merged_from: None,
            previous_content: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_version(mut self, version: u64) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_merged_from(mut self, ids: Vec<String>) -> Self {
        self.merged_from = Some(ids);
        self
    }

    pub fn with_previous_content(mut self, content: impl Into<String>) -> Self {
        self.previous_content = Some(content.into());
        self
    }
}
