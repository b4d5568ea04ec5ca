//! # engram-retrieval
//!
//! Retrieval pipeline: store search → composite ranking → freshness gate →
//! ranked results plus structured recall-failure diagnostics.
//!
//! Retrieval never returns an error to the caller. Anything that keeps
//! candidates from surfacing (an empty namespace, a relevance floor, an
//! exhausted freshness SLO, a storage outage) degrades to an empty or
//! shorter result set with a [`engram_core::models::RecallFailure`]
//! explaining why.

pub mod engine;
pub mod ranking;

pub use engine::RetrievalEngine;
pub use ranking::scorer::rank;
