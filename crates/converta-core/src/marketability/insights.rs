use serde::{Deserialize, Serialize};

use super::scorer::MarketabilityMetrics;
use crate::types::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_overall(overall_score: Score) -> Self {
        if overall_score >= 75 {
            ConfidenceLevel::High
        } else if overall_score < 50 {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::Medium
        }
    }
}

/// Qualitative findings derived from the metric breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Insights {
    pub risk_factors: Vec<String>,
    pub opportunities: Vec<String>,
    pub recommendations: Vec<String>,
}

/// A threshold rule: fires when `applies` holds and contributes `message`.
struct Rule {
    applies: fn(&MarketabilityMetrics) -> bool,
    message: &'static str,
}

const RISK_RULES: &[Rule] = &[
    Rule {
        applies: |m| m.regulatory_compatibility < 50,
        message: "Regulatory gaps may delay UK market entry: sector approvals and \
                  certifications are not yet in place",
    },
    Rule {
        applies: |m| m.digital_readiness < 40,
        message: "Limited digital presence will make it hard to reach UK customers online",
    },
    Rule {
        applies: |m| m.logistics_viability < 50,
        message: "Fulfilment and distribution capacity may not support UK order volumes",
    },
];

const OPPORTUNITY_RULES: &[Rule] = &[
    Rule {
        applies: |m| m.product_market_fit > 70,
        message: "Strong product-market fit with current UK consumer trends",
    },
    Rule {
        applies: |m| m.scalability_potential > 60,
        message: "Business model shows good potential to scale across the UK",
    },
    Rule {
        applies: |m| m.digital_readiness > 70,
        message: "Digital channels are ready for direct-to-consumer UK sales",
    },
];

const RECOMMENDATION_RULES: &[Rule] = &[
    Rule {
        applies: |m| m.digital_readiness < 60,
        message: "Build an English-language website and UK-facing social media presence",
    },
    Rule {
        applies: |m| m.regulatory_compatibility < 60,
        message: "Engage a UK compliance adviser to map required certifications and approvals",
    },
    Rule {
        applies: |m| m.logistics_viability < 60,
        message: "Partner with a UK logistics or fulfilment provider before launch",
    },
];

fn fire(rules: &[Rule], metrics: &MarketabilityMetrics) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(metrics))
        .map(|rule| rule.message.to_string())
        .collect()
}

/// Evaluate every insight rule in its fixed order.
pub fn generate(metrics: &MarketabilityMetrics) -> Insights {
    Insights {
        risk_factors: fire(RISK_RULES, metrics),
        opportunities: fire(OPPORTUNITY_RULES, metrics),
        recommendations: fire(RECOMMENDATION_RULES, metrics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(score: Score) -> MarketabilityMetrics {
        MarketabilityMetrics {
            product_market_fit: score,
            regulatory_compatibility: score,
            logistics_viability: score,
            digital_readiness: score,
            scalability_potential: score,
            founder_advantage: score,
        }
    }

    #[test]
    fn test_confidence_thresholds() {
        assert_eq!(ConfidenceLevel::from_overall(75), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_overall(74), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_overall(50), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_overall(49), ConfidenceLevel::Low);
    }

    #[test]
    fn test_weak_profile_gets_all_risks_and_recommendations() {
        let insights = generate(&uniform(30));
        assert_eq!(insights.risk_factors.len(), 3);
        assert_eq!(insights.recommendations.len(), 3);
        assert!(insights.opportunities.is_empty());
    }

    #[test]
    fn test_strong_profile_gets_only_opportunities() {
        let insights = generate(&uniform(90));
        assert!(insights.risk_factors.is_empty());
        assert!(insights.recommendations.is_empty());
        assert_eq!(insights.opportunities.len(), 3);
    }

    #[test]
    fn test_boundaries_are_strict() {
        // 50 is not a regulatory risk but is below the 60 recommendation line
        let mut m = uniform(65);
        m.regulatory_compatibility = 50;
        let insights = generate(&m);
        assert!(insights.risk_factors.is_empty());
        assert_eq!(insights.recommendations.len(), 1);
        assert!(insights.recommendations[0].contains("compliance adviser"));
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let mut m = uniform(90);
        m.logistics_viability = 10;
        m.regulatory_compatibility = 10;
        let insights = generate(&m);
        assert!(insights.risk_factors[0].starts_with("Regulatory"));
        assert!(insights.risk_factors[1].starts_with("Fulfilment"));
    }
}
