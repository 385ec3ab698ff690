//! Full readiness analysis: marketability, compliance and partner matching
//! in one envelope, with partner urgency driven by the freshly computed scores.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compliance::recommendation::{generate_compliance_recommendation, ComplianceRecommendation};
use crate::error::ConvertaError;
use crate::marketability::scorer::{score_marketability_as_of, MarketabilityResult};
use crate::partners::filters::PartnerFilter;
use crate::partners::ranker::{rank_partners, BusinessContext, Partner, PartnerWithScore, ScoreBreakdown};
use crate::partners::recommendations::{build_category_recommendations, PartnerRecommendation};
use crate::profile::BusinessProfile;
use crate::types::{with_metadata, ComputationOutput};
use crate::ConvertaResult;

const DEFAULT_TOP_N: usize = 3;

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessInput {
    pub profile: BusinessProfile,
    #[serde(default)]
    pub partners: Vec<Partner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<PartnerFilter>,
    #[serde(default = "default_top_n")]
    pub top_n_per_category: usize,
    /// Year used for tenure scoring; defaults to the current UTC year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub marketability: MarketabilityResult,
    pub compliance: ComplianceRecommendation,
    pub ranked_partners: Vec<PartnerWithScore>,
    pub recommendations: Vec<PartnerRecommendation>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Analyse one profile against a partner catalog.
pub fn analyse_readiness(
    input: &ReadinessInput,
) -> ConvertaResult<ComputationOutput<ReadinessReport>> {
    let start = Instant::now();

    if input.top_n_per_category == 0 {
        return Err(ConvertaError::InvalidInput {
            field: "top_n_per_category".into(),
            reason: "Must be at least 1.".into(),
        });
    }
    let reference_year = input.reference_year.unwrap_or_else(|| Utc::now().year());

    let marketability = score_marketability_as_of(&input.profile, reference_year);
    let compliance = generate_compliance_recommendation(&input.profile);

    let scores = ScoreBreakdown::from(&marketability.result.metrics);
    let context = BusinessContext::from_profile(&input.profile, Some(scores));
    let mut ranked_partners = rank_partners(&input.partners, Some(&context));
    if let Some(filter) = &input.filter {
        ranked_partners = filter.apply(ranked_partners);
    }

    let recommendations =
        build_category_recommendations(&ranked_partners, Some(&scores), input.top_n_per_category);

    let mut warnings = marketability.warnings;
    warnings.extend(compliance.warnings);
    if input.partners.is_empty() {
        warnings.push("Partner catalog is empty; no partner recommendations produced.".into());
    } else if ranked_partners.is_empty() {
        warnings.push("No partners matched the supplied filter.".into());
    }

    tracing::debug!(
        overall_score = marketability.result.overall_score,
        partners = ranked_partners.len(),
        categories = recommendations.len(),
        "readiness analysis complete"
    );

    let report = ReadinessReport {
        marketability: marketability.result,
        compliance: compliance.result,
        ranked_partners,
        recommendations,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "reference_year": reference_year,
        "top_n_per_category": input.top_n_per_category,
        "partner_context": "profile industry, size and description with computed metrics"
    });

    Ok(with_metadata(
        "UK market-entry readiness: marketability, compliance and partner matching",
        &assumptions,
        warnings,
        elapsed,
        report,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
