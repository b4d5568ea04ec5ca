/// Storage-contract errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {message}")]
    Backend { message: String },

    #[error("version conflict on memory {memory_id}: expected {expected}, found {found}")]
    VersionConflict {
        memory_id: String,
        expected: u64,
        found: u64,
    },

    #[error("audit log unavailable: {reason}")]
    AuditUnavailable { reason: String },
}
