use std::collections::BTreeSet;

use engram_core::memory::Score;

/// Partial update for an edit operation. Only supplied fields change.
#[derive(Debug, Clone, Default)]
pub struct MemoryUpdates {
    pub content: Option<String>,
    pub content_type: Option<String>,
    pub tags: Option<BTreeSet<String>>,
    pub importance: Option<Score>,
    pub task_criticality: Option<Score>,
    pub embedding: Option<Vec<f32>>,
}

impl MemoryUpdates {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.content_type.is_none()
            && self.tags.is_none()
            && self.importance.is_none()
            && self.task_criticality.is_none()
            && self.embedding.is_none()
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_importance(mut self, importance: Score) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn with_task_criticality(mut self, criticality: Score) -> Self {
        self.task_criticality = Some(criticality);
        self
    }
}
