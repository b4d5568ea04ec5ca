//! # engram-drift
//!
//! Topic drift detection across a session's memories.
//!
//! Drift is measured entirely through tag sets: Jaccard distance between
//! consecutive memories counts topic changes, memories sharing no tag with
//! any other count toward fragmentation, and overall tag repetition drives
//! coherence. No embeddings involved.

pub mod detector;
pub mod metrics;

pub use detector::DriftDetector;
