//! UK marketability scoring for a business profile.
//!
//! Covers:
//! 1. **Product-market fit** -- industry demand, trend keywords, markets, revenue.
//! 2. **Regulatory compatibility** -- regulated-sector penalty, compliance artefacts.
//! 3. **Logistics viability** -- headcount, channels, online sales, export reach.
//! 4. **Digital readiness** -- website, English site, social presence, e-commerce.
//! 5. **Scalability potential** -- scalable industry, revenue, entry timeline.
//! 6. **Founder advantage** -- years trading, markets, expansion budget.
//!
//! Weighted with `MARKETABILITY_WEIGHTS` in `rust_decimal`; every sub-score is
//! clamped to 0-100 and the overall rounds half away from zero.

use chrono::{Datelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::insights::{self, ConfidenceLevel};
use super::weights::MARKETABILITY_WEIGHTS;
use crate::profile::{AnnualRevenue, Budget, BusinessProfile, CompanySize, Timeline};
use crate::types::{capped_points, clamp_score, with_metadata, ComputationOutput, Score};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// The six readiness sub-scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketabilityMetrics {
    pub product_market_fit: Score,
    pub regulatory_compatibility: Score,
    pub logistics_viability: Score,
    pub digital_readiness: Score,
    pub scalability_potential: Score,
    pub founder_advantage: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketabilityResult {
    pub overall_score: Score,
    pub metrics: MarketabilityMetrics,
    pub risk_factors: Vec<String>,
    pub opportunities: Vec<String>,
    pub recommendations: Vec<String>,
    pub confidence_level: ConfidenceLevel,
}

// ---------------------------------------------------------------------------
// Static tables
// ---------------------------------------------------------------------------

/// Industries with strong UK demand.
const HIGH_DEMAND_INDUSTRIES: &[&str] =
    &["technology", "healthcare", "food-beverage", "retail", "services"];

/// Industries that face sector-specific UK regulators.
const REGULATED_INDUSTRIES: &[&str] = &["healthcare", "food-beverage", "automotive", "construction"];

/// Industries whose business model scales without proportional headcount.
const SCALABLE_INDUSTRIES: &[&str] = &["technology", "services", "retail"];

/// UK consumer trend keyword groups: (trend, keywords).
const TREND_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "sustainability",
        &["eco", "sustainable", "green", "organic", "recycled", "renewable"],
    ),
    ("technology", &["ai", "tech", "digital", "software", "app", "smart"]),
    (
        "convenience",
        &["fast", "easy", "convenient", "delivery", "on-demand", "subscription"],
    ),
    (
        "health",
        &["health", "wellness", "fitness", "natural", "vitamin", "medical"],
    ),
    (
        "luxury",
        &["premium", "luxury", "handmade", "artisan", "exclusive", "bespoke"],
    ),
];

const TREND_POINTS_PER_GROUP: Decimal = dec!(5);
const TREND_POINTS_CAP: Decimal = dec!(25);

// ---------------------------------------------------------------------------
// Bucket lookups (unknown or missing buckets fall through to the default)
// ---------------------------------------------------------------------------

fn revenue_market_points(revenue: Option<&AnnualRevenue>) -> Decimal {
    match revenue {
        Some(AnnualRevenue::UpTo50k) => dec!(5),
        Some(AnnualRevenue::From50kTo250k) => dec!(10),
        Some(AnnualRevenue::From250kTo1m) => dec!(15),
        Some(AnnualRevenue::From1mTo5m) => dec!(20),
        Some(AnnualRevenue::Over5m) => dec!(25),
        Some(AnnualRevenue::Other(_)) | None => Decimal::ZERO,
    }
}

fn revenue_scale_points(revenue: Option<&AnnualRevenue>) -> Decimal {
    match revenue {
        Some(AnnualRevenue::UpTo50k) => dec!(5),
        Some(AnnualRevenue::From50kTo250k) => dec!(10),
        Some(AnnualRevenue::From250kTo1m) => dec!(20),
        Some(AnnualRevenue::From1mTo5m) => dec!(30),
        Some(AnnualRevenue::Over5m) => dec!(35),
        Some(AnnualRevenue::Other(_)) | None => Decimal::ZERO,
    }
}

fn company_size_points(size: Option<&CompanySize>) -> Decimal {
    match size {
        Some(CompanySize::Micro) => dec!(10),
        Some(CompanySize::Small) => dec!(20),
        Some(CompanySize::Medium) => dec!(30),
        Some(CompanySize::Large) => dec!(35),
        Some(CompanySize::Other(_)) | None => Decimal::ZERO,
    }
}

fn timeline_points(timeline: Option<&Timeline>) -> Decimal {
    match timeline {
        Some(Timeline::ThreeToSixMonths) => dec!(30),
        Some(Timeline::SixToTwelveMonths) => dec!(25),
        Some(Timeline::OneToTwoYears) => dec!(15),
        Some(Timeline::OverTwoYears) => dec!(10),
        Some(Timeline::Other(_)) | None => dec!(10),
    }
}

fn budget_points(budget: Option<&Budget>) -> Decimal {
    match budget {
        Some(Budget::UpTo10k) => dec!(5),
        Some(Budget::From10kTo50k) => dec!(10),
        Some(Budget::From50kTo100k) => dec!(15),
        Some(Budget::Over100k) => dec!(20),
        Some(Budget::Other(_)) | None => Decimal::ZERO,
    }
}

fn tenure_points(years: i32) -> Decimal {
    if years >= 5 {
        dec!(30)
    } else if years >= 2 {
        dec!(20)
    } else if years >= 1 {
        dec!(10)
    } else {
        Decimal::ZERO
    }
}

// ---------------------------------------------------------------------------
// Sub-scores
// ---------------------------------------------------------------------------

/// Trend relevance of the description and products text (max 25).
fn trend_points(text: &str) -> Decimal {
    let total: Decimal = TREND_KEYWORDS
        .iter()
        .map(|(_, keywords)| {
            let matched = keywords.iter().filter(|k| text.contains(*k)).count();
            let ratio = Decimal::from(matched as u64) / Decimal::from(keywords.len() as u64);
            ratio.min(Decimal::ONE) * TREND_POINTS_PER_GROUP
        })
        .sum();
    // Sixths leave residue at the 28th decimal place.
    total
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .min(TREND_POINTS_CAP)
}

fn product_market_fit(profile: &BusinessProfile) -> Score {
    let base = if profile.industry_in(HIGH_DEMAND_INDUSTRIES) {
        dec!(30)
    } else {
        dec!(15)
    };
    let trend = trend_points(&profile.keyword_text());
    let markets = capped_points(profile.current_markets.len(), dec!(5), dec!(20));
    let revenue = revenue_market_points(profile.annual_revenue.as_ref());

    clamp_score(base + trend + markets + revenue)
}

fn regulatory_compatibility(profile: &BusinessProfile) -> Score {
    let mut score = dec!(50);
    if profile.industry_in(REGULATED_INDUSTRIES) {
        score -= dec!(20);
    }
    score += capped_points(profile.regulatory_compliance.len(), dec!(10), dec!(30));
    score += capped_points(profile.quality_certifications.len(), dec!(10), dec!(20));

    clamp_score(score)
}

fn logistics_viability(profile: &BusinessProfile) -> Score {
    let mut score = dec!(40) + company_size_points(profile.company_size.as_ref());
    score += capped_points(profile.digital_presence.len(), dec!(8), dec!(25));
    if profile.has_online_store {
        score += dec!(15);
    }
    if profile.has_ecommerce_platform {
        score += dec!(15);
    }
    if profile.current_markets.len() > 1 {
        score += dec!(15);
    }

    clamp_score(score)
}

fn digital_readiness(profile: &BusinessProfile) -> Score {
    let mut score = dec!(20);
    if profile.has_website() {
        score += dec!(25);
    }
    if profile.has_english_website {
        score += dec!(20);
    }
    score += capped_points(profile.digital_presence.len(), dec!(8), dec!(30));
    if profile.has_online_store {
        score += dec!(15);
    }
    if profile.has_ecommerce_platform {
        score += dec!(10);
    }

    clamp_score(score)
}

fn scalability_potential(profile: &BusinessProfile) -> Score {
    let industry = if profile.industry_in(SCALABLE_INDUSTRIES) {
        dec!(25)
    } else {
        dec!(10)
    };
    let revenue = revenue_scale_points(profile.annual_revenue.as_ref());
    let timeline = timeline_points(profile.timeline.as_ref());

    clamp_score(dec!(30) + industry + revenue + timeline)
}

fn founder_advantage(profile: &BusinessProfile, reference_year: i32) -> Score {
    let tenure = tenure_points(profile.years_in_business(reference_year));
    let markets = capped_points(profile.current_markets.len(), dec!(5), dec!(20));
    let budget = budget_points(profile.budget.as_ref());

    clamp_score(dec!(40) + tenure + markets + budget)
}

/// Compute the six sub-scores for a profile.
pub fn compute_metrics(profile: &BusinessProfile, reference_year: i32) -> MarketabilityMetrics {
    MarketabilityMetrics {
        product_market_fit: product_market_fit(profile),
        regulatory_compatibility: regulatory_compatibility(profile),
        logistics_viability: logistics_viability(profile),
        digital_readiness: digital_readiness(profile),
        scalability_potential: scalability_potential(profile),
        founder_advantage: founder_advantage(profile, reference_year),
    }
}

/// Weighted aggregate of the six metrics, rounded half away from zero.
pub fn overall_score(metrics: &MarketabilityMetrics) -> Score {
    let w = MARKETABILITY_WEIGHTS;
    let weighted = Decimal::from(metrics.product_market_fit) * w.product_market_fit
        + Decimal::from(metrics.regulatory_compatibility) * w.regulatory_compatibility
        + Decimal::from(metrics.logistics_viability) * w.logistics_viability
        + Decimal::from(metrics.digital_readiness) * w.digital_readiness
        + Decimal::from(metrics.scalability_potential) * w.scalability_potential
        + Decimal::from(metrics.founder_advantage) * w.founder_advantage;
    clamp_score(weighted)
}

fn unrecognised_bucket_warnings(profile: &BusinessProfile) -> Vec<String> {
    let mut unknown: Vec<(&str, &str)> = Vec::new();
    if let Some(CompanySize::Other(raw)) = &profile.company_size {
        unknown.push(("company_size", raw.as_str()));
    }
    if let Some(AnnualRevenue::Other(raw)) = &profile.annual_revenue {
        unknown.push(("annual_revenue", raw.as_str()));
    }
    if let Some(Timeline::Other(raw)) = &profile.timeline {
        unknown.push(("timeline", raw.as_str()));
    }
    if let Some(Budget::Other(raw)) = &profile.budget {
        unknown.push(("budget", raw.as_str()));
    }

    unknown
        .into_iter()
        .map(|(field, raw)| {
            tracing::debug!(field, value = raw, "unrecognised bucket, using default points");
            format!("Unrecognised {} '{}'; default points applied.", field, raw)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score a business profile's UK market-entry readiness using the current
/// calendar year for tenure.
pub fn score_marketability(profile: &BusinessProfile) -> ComputationOutput<MarketabilityResult> {
    score_marketability_as_of(profile, Utc::now().year())
}

/// Score a business profile against a fixed reference year. Same inputs
/// always produce the same result.
pub fn score_marketability_as_of(
    profile: &BusinessProfile,
    reference_year: i32,
) -> ComputationOutput<MarketabilityResult> {
    let start = Instant::now();
    let warnings = unrecognised_bucket_warnings(profile);

    let metrics = compute_metrics(profile, reference_year);
    let overall_score = overall_score(&metrics);
    let generated = insights::generate(&metrics);

    let result = MarketabilityResult {
        overall_score,
        metrics,
        risk_factors: generated.risk_factors,
        opportunities: generated.opportunities,
        recommendations: generated.recommendations,
        confidence_level: ConfidenceLevel::from_overall(overall_score),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "reference_year": reference_year,
        "weights": MARKETABILITY_WEIGHTS,
        "trend_matching": "case-insensitive substring over description and products",
        "unknown_buckets": "contribute 0 points (timeline defaults to 10)"
    });

    with_metadata(
        "Weighted six-factor UK marketability scoring (0-100)",
        &assumptions,
        warnings,
        elapsed,
        result,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2026;

    fn scenario_a() -> BusinessProfile {
        BusinessProfile {
            industry: Some("technology".to_string()),
            company_size: Some(CompanySize::Micro),
            annual_revenue: Some(AnnualRevenue::UpTo50k),
            description: Some("AI powered eco-friendly app".to_string()),
            digital_presence: vec!["instagram".to_string()],
            ..Default::default()
        }
    }

    fn established_exporter() -> BusinessProfile {
        BusinessProfile {
            industry: Some("Retail".to_string()),
            company_size: Some(CompanySize::Medium),
            annual_revenue: Some(AnnualRevenue::From1mTo5m),
            description: Some("Premium handmade organic textiles with fast delivery".to_string()),
            products: Some("Luxury towels, bespoke linen".to_string()),
            current_markets: vec![
                "Turkey".to_string(),
                "Germany".to_string(),
                "Netherlands".to_string(),
            ],
            digital_presence: vec![
                "instagram".to_string(),
                "linkedin".to_string(),
                "facebook".to_string(),
            ],
            has_online_store: true,
            has_ecommerce_platform: true,
            has_english_website: true,
            website: Some("https://example.com.tr".to_string()),
            regulatory_compliance: vec!["CE".to_string(), "REACH".to_string()],
            quality_certifications: vec!["ISO 9001".to_string()],
            timeline: Some(Timeline::ThreeToSixMonths),
            budget: Some(Budget::From50kTo100k),
            year_established: Some(2012),
        }
    }

    // === Sub-score tests ===

    #[test]
    fn test_scenario_a_product_market_fit() {
        // base 30 + trend (tech 2/6*5 + sustainability 1/6*5 = 2.5) + revenue 5
        let m = compute_metrics(&scenario_a(), YEAR);
        assert_eq!(m.product_market_fit, 38);
    }

    #[test]
    fn test_scenario_a_regulatory_is_neutral() {
        let m = compute_metrics(&scenario_a(), YEAR);
        assert_eq!(m.regulatory_compatibility, 50);
    }

    #[test]
    fn test_scenario_a_remaining_metrics() {
        let m = compute_metrics(&scenario_a(), YEAR);
        // 40 + size 10 + presence 8
        assert_eq!(m.logistics_viability, 58);
        // 20 + presence 8
        assert_eq!(m.digital_readiness, 28);
        // 30 + industry 25 + revenue 5 + default timeline 10
        assert_eq!(m.scalability_potential, 70);
        // 40 + no tenure + no markets + no budget
        assert_eq!(m.founder_advantage, 40);
    }

    #[test]
    fn test_scenario_a_overall_and_confidence() {
        let out = score_marketability_as_of(&scenario_a(), YEAR);
        // 38*.25 + 50*.15 + 58*.2 + 28*.15 + 70*.15 + 40*.1 = 47.3
        assert_eq!(out.result.overall_score, 47);
        assert_eq!(out.result.confidence_level, ConfidenceLevel::Low);
    }

    #[test]
    fn test_regulated_industry_penalty() {
        let profile = BusinessProfile {
            industry: Some("Food & Beverage".to_string()),
            ..Default::default()
        };
        assert_eq!(compute_metrics(&profile, YEAR).regulatory_compatibility, 30);
    }

    #[test]
    fn test_compliance_artifacts_capped() {
        let profile = BusinessProfile {
            industry: Some("healthcare".to_string()),
            regulatory_compliance: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            quality_certifications: vec!["x".into(), "y".into(), "z".into()],
            ..Default::default()
        };
        // 50 - 20 + 30 + 20
        assert_eq!(compute_metrics(&profile, YEAR).regulatory_compatibility, 80);
    }

    #[test]
    fn test_established_exporter_metrics() {
        let m = compute_metrics(&established_exporter(), YEAR);
        // 30 + trend + 15 (3 markets) + 20
        assert!(m.product_market_fit >= 65);
        assert_eq!(m.regulatory_compatibility, 50 + 20 + 10);
        // 40 + 30 + 24 + 15 + 15 + 15 = 139 -> clamped
        assert_eq!(m.logistics_viability, 100);
        // 20 + 25 + 20 + 24 + 15 + 10 = 114 -> clamped
        assert_eq!(m.digital_readiness, 100);
        // 30 + 25 + 30 + 30
        assert_eq!(m.scalability_potential, 100);
        // 40 + 30 + 15 + 15
        assert_eq!(m.founder_advantage, 100);
    }

    #[test]
    fn test_trend_points_capped_at_25() {
        let all: String = TREND_KEYWORDS
            .iter()
            .flat_map(|(_, kws)| kws.iter())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(trend_points(&all), dec!(25));
        assert_eq!(trend_points(""), Decimal::ZERO);
    }

    #[test]
    fn test_tenure_tiers() {
        let mut profile = BusinessProfile::default();
        let cases = [(2026, 40), (2025, 50), (2024, 60), (2021, 70), (2000, 70)];
        for (established, expected) in cases {
            profile.year_established = Some(established);
            assert_eq!(
                compute_metrics(&profile, YEAR).founder_advantage,
                expected,
                "established {}",
                established
            );
        }
    }

    #[test]
    fn test_timeline_lookup() {
        let mut profile = BusinessProfile::default();
        let cases = [
            (Timeline::ThreeToSixMonths, 70),
            (Timeline::SixToTwelveMonths, 65),
            (Timeline::OneToTwoYears, 55),
            (Timeline::OverTwoYears, 50),
            (Timeline::Other("someday".to_string()), 50),
        ];
        for (timeline, expected) in cases {
            profile.timeline = Some(timeline);
            assert_eq!(compute_metrics(&profile, YEAR).scalability_potential, expected);
        }
    }

    // === Aggregate / property tests ===

    #[test]
    fn test_empty_profile_uses_base_scores() {
        let out = score_marketability_as_of(&BusinessProfile::default(), YEAR);
        let m = out.result.metrics;
        assert_eq!(m.product_market_fit, 15);
        assert_eq!(m.regulatory_compatibility, 50);
        assert_eq!(m.logistics_viability, 40);
        assert_eq!(m.digital_readiness, 20);
        assert_eq!(m.scalability_potential, 50);
        assert_eq!(m.founder_advantage, 40);
        // 3.75 + 7.5 + 8 + 3 + 7.5 + 4 = 33.75
        assert_eq!(out.result.overall_score, 34);
        assert_eq!(out.result.confidence_level, ConfidenceLevel::Low);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let profile = established_exporter();
        let a = score_marketability_as_of(&profile, YEAR).result;
        let b = score_marketability_as_of(&profile, YEAR).result;
        assert_eq!(a, b);
    }

    #[test]
    fn test_more_markets_never_lowers_market_metrics() {
        let mut profile = scenario_a();
        let mut previous = compute_metrics(&profile, YEAR);
        for i in 0..8 {
            profile.current_markets.push(format!("market-{}", i));
            let next = compute_metrics(&profile, YEAR);
            assert!(next.product_market_fit >= previous.product_market_fit);
            assert!(next.logistics_viability >= previous.logistics_viability);
            assert!(next.founder_advantage >= previous.founder_advantage);
            previous = next;
        }
    }

    #[test]
    fn test_high_confidence_for_strong_profile() {
        let out = score_marketability_as_of(&established_exporter(), YEAR);
        assert!(out.result.overall_score >= 75);
        assert_eq!(out.result.confidence_level, ConfidenceLevel::High);
        assert!(out.result.risk_factors.is_empty());
    }

    #[test]
    fn test_unknown_buckets_warn() {
        let profile = BusinessProfile {
            company_size: Some(CompanySize::from("huge")),
            budget: Some(Budget::from("plenty")),
            ..Default::default()
        };
        let out = score_marketability_as_of(&profile, YEAR);
        assert_eq!(out.warnings.len(), 2);
        assert_eq!(out.result.metrics.logistics_viability, 40);
    }
}
