use std::collections::BTreeSet;

use engram_core::memory::Score;

/// Caller overrides for a merge. Defaults: tag union, arithmetic-mean
/// importance and task criticality over the sources.
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    pub tags: Option<BTreeSet<String>>,
    pub importance: Option<Score>,
    pub task_criticality: Option<Score>,
    /// Reason recorded on the merge provenance entry.
    pub reason: Option<String>,
}
