pub mod draft;
pub mod ingestion;
pub mod object;
pub mod provenance;
pub mod score;
pub mod source;
pub mod status;
pub mod version;

pub use draft::MemoryDraft;
pub use ingestion::IngestionMetadata;
pub use object::MemoryObject;
pub use provenance::{ProvenanceAction, ProvenanceEntry};
pub use score::Score;
pub use source::{MemorySource, SourceType};
pub use status::MemoryStatus;
pub use version::MemoryVersion;
