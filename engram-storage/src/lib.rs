//! # engram-storage
//!
//! In-memory reference implementation of the [`engram_core::traits::MemoryStore`]
//! contract. The production KV/document backend lives outside this workspace;
//! this store exists so every other crate's tests run against a real store
//! with both partitions, audit logging, and version-checked writes.

mod memory_store;
mod similarity;

pub use memory_store::InMemoryStore;
pub use similarity::lexical_similarity;
