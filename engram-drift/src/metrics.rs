//! Tag-set metrics feeding the drift score.

use std::collections::{BTreeSet, HashMap};

use engram_core::memory::MemoryObject;

/// Jaccard similarity below which consecutive memories count as a topic change.
pub const TOPIC_CHANGE_THRESHOLD: f64 = 0.3;

/// |intersection| / |union| of two tag sets. Two empty sets score 1.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let union = a.union(b).count();
    if union == 0 {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Count topic changes between consecutive memories (assumed sorted by
/// `created_at`).
pub fn topic_changes(memories: &[MemoryObject]) -> usize {
    memories
        .windows(2)
        .filter(|pair| jaccard(&pair[0].tags, &pair[1].tags) < TOPIC_CHANGE_THRESHOLD)
        .count()
}

/// Fraction of memories that share no tag with any other memory in the set.
/// Only memories carrying at least one tag are counted.
pub fn fragmentation(memories: &[MemoryObject]) -> f64 {
    if memories.is_empty() {
        return 0.0;
    }
    let isolated = memories
        .iter()
        .enumerate()
        .filter(|(i, m)| {
            if m.tags.is_empty() {
                return false;
            }
            !memories
                .iter()
                .enumerate()
                .any(|(j, other)| *i != j && m.tags.intersection(&other.tags).next().is_some())
        })
        .count();
    isolated as f64 / memories.len() as f64
}

/// `min(1, 2 · avg_tag_frequency)` where avg_tag_frequency is the repeated
/// tag occurrences over (distinct tags × memory count). Only tags appearing
/// in more than one memory contribute, so a session of fully disjoint tag
/// sets scores 0.
pub fn coherence(memories: &[MemoryObject]) -> f64 {
    if memories.is_empty() {
        return 1.0;
    }
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for memory in memories {
        for tag in &memory.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }
    if counts.is_empty() {
        return 1.0;
    }
    let repeated_occurrences: usize = counts.values().filter(|&&c| c >= 2).sum();
    let avg_frequency =
        repeated_occurrences as f64 / (counts.len() * memories.len()) as f64;
    (2.0 * avg_frequency).min(1.0)
}
