use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::namespace::NamespaceKey;

/// One entry in the namespace-level audit log.
///
/// Distinct from per-memory provenance: provenance lives on the memory and
/// records its own history; audit entries are the store-wide ledger the
/// lifecycle manager writes best-effort after every operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// UUID v4 entry id.
    pub id: String,
    pub namespace: NamespaceKey,
    /// Operation name (e.g. "edit", "merge", "expire_sweep").
    pub action: String,
    /// What kind of resource was touched (e.g. "memory").
    pub resource_type: String,
    pub resource_id: String,
    pub actor_id: String,
    /// Operation-specific details.
    #[serde(default)]
    pub metadata: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(
        namespace: NamespaceKey,
        action: impl Into<String>,
        resource_id: impl Into<String>,
        actor_id: impl Into<String>,
        metadata: serde_json::Value,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            namespace,
            action: action.into(),
            resource_type: "memory".to_string(),
            resource_id: resource_id.into(),
            actor_id: actor_id.into(),
            metadata,
            timestamp: Utc::now(),
        }
    }
}
