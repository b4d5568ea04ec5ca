use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a memory originally came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Typed or dictated directly by the user.
    UserInput,
    /// Output of a tool invocation the agent made.
    ToolOutput,
    /// Scraped from a web page.
    WebScrape,
    /// Inferred by the agent itself, not observed.
    AgentInference,
    /// Imported from an external system.
    External,
    /// Produced by the memory system itself (e.g. merge results).
    System,
}

/// Origin descriptor attached to every memory at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorySource {
    /// What kind of origin this is.
    pub source_type: SourceType,
    /// Origin-specific identifier (tool name, URL, user id, ...).
    pub identifier: String,
    /// When the source material was produced.
    pub timestamp: DateTime<Utc>,
}

impl MemorySource {
    pub fn new(source_type: SourceType, identifier: impl Into<String>) -> Self {
        Self {
            source_type,
            identifier: identifier.into(),
            timestamp: Utc::now(),
        }
    }
}
