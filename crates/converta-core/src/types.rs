use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Integer score on the 0-100 scale.
pub type Score = u32;

/// Additive relevance points. Unbounded above.
pub type Points = u32;

/// Aggregation weights expressed as decimals (0.25 = 25%). Never as percentages.
pub type Weight = Decimal;

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// `per_item * count`, capped at `cap`.
pub fn capped_points(count: usize, per_item: Decimal, cap: Decimal) -> Decimal {
    let raw = Decimal::from(count as u64) * per_item;
    if raw > cap {
        cap
    } else {
        raw
    }
}

/// Round half away from zero and clamp into [0, 100].
pub fn clamp_score(raw: Decimal) -> Score {
    let rounded = raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let clamped = rounded.max(Decimal::ZERO).min(dec!(100));
    clamped.to_u32().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score_rounds_half_up() {
        assert_eq!(clamp_score(dec!(33.5)), 34);
        assert_eq!(clamp_score(dec!(33.49)), 33);
        assert_eq!(clamp_score(dec!(34.5)), 35);
    }

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(dec!(-12)), 0);
        assert_eq!(clamp_score(dec!(145)), 100);
    }

    #[test]
    fn test_capped_points() {
        assert_eq!(capped_points(2, dec!(8), dec!(25)), dec!(16));
        assert_eq!(capped_points(4, dec!(8), dec!(25)), dec!(25));
        assert_eq!(capped_points(0, dec!(10), dec!(30)), Decimal::ZERO);
    }
}
