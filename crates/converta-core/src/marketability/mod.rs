pub mod insights;
pub mod scorer;
pub mod weights;

pub use scorer::{score_marketability, score_marketability_as_of, MarketabilityMetrics, MarketabilityResult};
