//! Composite relevance scorer (4 components).
//!
//! `score = w_c·task_criticality + w_s·semantic_similarity
//!        + w_i·importance + w_r·recency`, components pre-clamped to [0,1].

use chrono::{DateTime, Utc};

use engram_core::config::RankingWeights;
use engram_core::models::query::SearchHit;

use super::recency;

/// A search hit with its composite relevance score and component breakdown.
#[derive(Debug, Clone)]
pub struct ScoredHit {
    pub hit: SearchHit,
    /// Final composite score.
    pub relevance: f64,
    pub recency: f64,
}

/// Score one hit at `now`.
pub fn score_hit(hit: &SearchHit, weights: &RankingWeights, now: DateTime<Utc>) -> ScoredHit {
    let m = &hit.memory;
    // Score fields are clamped on construction; recency clamps itself.
    let f_criticality = m.task_criticality.value();
    let f_similarity = hit.semantic_similarity.value();
    let f_importance = m.importance.value();
    let f_recency = recency::recency_score(m, now);

    let relevance = weights.task_criticality * f_criticality
        + weights.semantic_similarity * f_similarity
        + weights.importance * f_importance
        + weights.recency * f_recency;

    ScoredHit {
        hit: hit.clone(),
        relevance,
        recency: f_recency,
    }
}

/// Score a candidate list and sort by relevance descending.
pub fn rank(hits: &[SearchHit], weights: &RankingWeights) -> Vec<ScoredHit> {
    let now = Utc::now();
    let mut scored: Vec<ScoredHit> = hits.iter().map(|h| score_hit(h, weights, now)).collect();
    scored.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}
