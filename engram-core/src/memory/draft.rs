use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::score::Score;
use super::source::MemorySource;
use crate::models::namespace::NamespaceKey;

/// Input to memory creation, before validation has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryDraft {
    pub namespace: NamespaceKey,
    pub content: String,
    pub content_type: String,
    pub source: MemorySource,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub importance: Score,
    #[serde(default)]
    pub task_criticality: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl MemoryDraft {
    pub fn new(
        namespace: NamespaceKey,
        content: impl Into<String>,
        source: MemorySource,
    ) -> Self {
        Self {
            namespace,
            content: content.into(),
            content_type: "text/plain".to_string(),
            source,
            tags: BTreeSet::new(),
            importance: Score::new(0.5),
            task_criticality: Score::new(0.5),
            embedding: None,
            ttl_seconds: None,
            expires_at: None,
            session_id: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_importance(mut self, importance: Score) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_task_criticality(mut self, criticality: Score) -> Self {
        self.task_criticality = criticality;
        self
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_ttl(mut self, ttl_seconds: u64) -> Self {
        self.ttl_seconds = Some(ttl_seconds);
        self
    }
}
