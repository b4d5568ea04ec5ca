//! Stand-in similarity signal for the reference store.
//!
//! Real deployments supply semantic similarity from an external embedding
//! service. The reference store substitutes token-overlap Jaccard so
//! retrieval is testable end to end without an embedding stack.

use std::collections::BTreeSet;

/// Token-overlap Jaccard similarity between two texts, in [0,1].
///
/// Tokens are lowercased alphanumeric runs. Two empty token sets score 0.
pub fn lexical_similarity(a: &str, b: &str) -> f64 {
    let ta = tokenize(a);
    let tb = tokenize(b);
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }
    let intersection = ta.intersection(&tb).count();
    let union = ta.union(&tb).count();
    intersection as f64 / union as f64
}

fn tokenize(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}
