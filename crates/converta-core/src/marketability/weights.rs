use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Weight;

/// Aggregation weights for the six readiness metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricWeights {
    pub product_market_fit: Weight,
    pub regulatory_compatibility: Weight,
    pub logistics_viability: Weight,
    pub digital_readiness: Weight,
    pub scalability_potential: Weight,
    pub founder_advantage: Weight,
}

pub const MARKETABILITY_WEIGHTS: MetricWeights = MetricWeights {
    product_market_fit: dec!(0.25),
    regulatory_compatibility: dec!(0.15),
    logistics_viability: dec!(0.20),
    digital_readiness: dec!(0.15),
    scalability_potential: dec!(0.15),
    founder_advantage: dec!(0.10),
};

impl MetricWeights {
    pub fn total(&self) -> Decimal {
        self.product_market_fit
            + self.regulatory_compatibility
            + self.logistics_viability
            + self.digital_readiness
            + self.scalability_potential
            + self.founder_advantage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert_eq!(MARKETABILITY_WEIGHTS.total(), Decimal::ONE);
    }

    #[test]
    fn test_product_market_fit_carries_most_weight() {
        let w = MARKETABILITY_WEIGHTS;
        for other in [
            w.regulatory_compatibility,
            w.logistics_viability,
            w.digital_readiness,
            w.scalability_potential,
            w.founder_advantage,
        ] {
            assert!(w.product_market_fit > other);
        }
    }
}
