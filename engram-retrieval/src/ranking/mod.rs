pub mod recency;
pub mod scorer;

pub use scorer::ScoredHit;
