//! Namespace keys for multi-tenant memory isolation.
//!
//! # Examples
//!
//! ```
//! use engram_core::models::namespace::NamespaceKey;
//!
//! let ns = NamespaceKey::new("acme", "assistant", "agent-7", None).unwrap();
//! assert_eq!(ns.key(), "acme:assistant:agent-7");
//!
//! let scoped = NamespaceKey::new("acme", "assistant", "agent-7", Some("u42")).unwrap();
//! assert_eq!(scoped.key(), "acme:assistant:agent-7:u42");
//! assert_eq!(NamespaceKey::parse(&scoped.key()).unwrap(), scoped);
//! ```

use serde::{Deserialize, Serialize};

/// Deterministic partition identifier scoping every memory operation.
///
/// Immutable once constructed. Serializes to a colon-joined key;
/// `user_id` is omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespaceKey {
    pub org_id: String,
    pub app_id: String,
    pub agent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl NamespaceKey {
    /// Build a namespace key, validating that no segment is empty or
    /// contains the `:` separator.
    pub fn new(
        org_id: impl Into<String>,
        app_id: impl Into<String>,
        agent_id: impl Into<String>,
        user_id: Option<&str>,
    ) -> Result<Self, String> {
        let ns = Self {
            org_id: org_id.into(),
            app_id: app_id.into(),
            agent_id: agent_id.into(),
            user_id: user_id.map(str::to_string),
        };
        for segment in ns.segments() {
            if segment.is_empty() {
                return Err("namespace segment cannot be empty".to_string());
            }
            if segment.contains(':') {
                return Err(format!("namespace segment cannot contain ':': {segment}"));
            }
        }
        Ok(ns)
    }

    fn segments(&self) -> Vec<&str> {
        let mut segments = vec![
            self.org_id.as_str(),
            self.app_id.as_str(),
            self.agent_id.as_str(),
        ];
        if let Some(user) = &self.user_id {
            segments.push(user.as_str());
        }
        segments
    }

    /// Format as a colon-joined key: `org:app:agent[:user]`.
    pub fn key(&self) -> String {
        self.segments().join(":")
    }

    /// Parse a colon-joined key back into a `NamespaceKey`.
    ///
    /// Accepts 3 segments (no user scope) or 4 (user-scoped).
    pub fn parse(key: &str) -> Result<Self, String> {
        let parts: Vec<&str> = key.split(':').collect();
        match parts.as_slice() {
            [org, app, agent] => Self::new(*org, *app, *agent, None),
            [org, app, agent, user] => Self::new(*org, *app, *agent, Some(user)),
            _ => Err(format!("invalid namespace key: {key}")),
        }
    }

    /// Whether this namespace is scoped to a single user.
    pub fn is_user_scoped(&self) -> bool {
        self.user_id.is_some()
    }
}

impl std::fmt::Display for NamespaceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
