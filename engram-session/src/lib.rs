//! # engram-session
//!
//! Session grouping and cross-session recall statistics.
//!
//! The tracker is caller-owned and store-backed, with no process-global
//! session state, so multiple namespaces and tenants can be tracked
//! concurrently.

pub mod tracker;

pub use tracker::{CrossSessionStats, SessionTracker};
