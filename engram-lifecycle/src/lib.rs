//! # engram-lifecycle
//!
//! The lifecycle state machine for memory objects: create, edit, delete,
//! quarantine, promote, merge, rollback, expire.
//!
//! Every operation validates its preconditions, mutates the memory through
//! the store, appends exactly one provenance entry whose action matches the
//! operation, and writes a best-effort audit entry. Mutations to the same
//! memory are serialized per id so concurrent edits cannot lose a version
//! bump.

pub mod edit;
pub mod expiry;
pub mod manager;
pub mod merge;

pub use edit::MemoryUpdates;
pub use expiry::ExpiryReport;
pub use manager::LifecycleManager;
pub use merge::MergeOptions;
