use crate::memory::MemoryStatus;

/// Lifecycle state-machine errors.
///
/// All of these are synchronous failures surfaced directly to the caller;
/// there is no retry at this layer.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("memory not found: {memory_id}")]
    NotFound { memory_id: String },

    #[error("quarantined memory not found: {memory_id}")]
    QuarantineNotFound { memory_id: String },

    #[error("memory {memory_id} is already deleted")]
    AlreadyDeleted { memory_id: String },

    #[error("memory {memory_id} is already quarantined")]
    AlreadyQuarantined { memory_id: String },

    #[error("cannot {action} memory {memory_id} in status {status}")]
    InvalidTransition {
        memory_id: String,
        status: MemoryStatus,
        action: &'static str,
    },

    #[error("content rejected by validator: {notes:?}")]
    ValidationRejected { notes: Vec<String> },

    #[error("version {requested} not found in history of memory {memory_id} (current {current})")]
    VersionNotFound {
        memory_id: String,
        requested: u64,
        current: u64,
    },

    #[error("merge sources span namespaces: expected {expected}, found {found}")]
    NamespaceMismatch { expected: String, found: String },

    #[error("merge requires at least 2 source memories, got {count}")]
    MergeRequiresTwo { count: usize },
}
