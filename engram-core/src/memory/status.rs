use serde::{Deserialize, Serialize};

/// Lifecycle status of a memory.
///
/// `Deleted` is terminal: there is no transition back out, and every
/// mutating operation rejects a deleted memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryStatus {
    #[default]
    Active,
    Quarantined,
    Deleted,
}

impl MemoryStatus {
    /// Whether a memory in this status may still be mutated.
    pub fn is_mutable(self) -> bool {
        !matches!(self, Self::Deleted)
    }
}

impl std::fmt::Display for MemoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::Quarantined => "quarantined",
            Self::Deleted => "deleted",
        };
        write!(f, "{s}")
    }
}
