use serde::{Deserialize, Serialize};

/// Result of one expiry sweep over a namespace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpiryReport {
    /// Memories examined.
    pub scanned: usize,
    /// Memories soft-deleted as expired.
    pub expired_ids: Vec<String>,
}

impl ExpiryReport {
    pub fn expired_count(&self) -> usize {
        self.expired_ids.len()
    }
}
