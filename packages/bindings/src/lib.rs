use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use converta_core::partners::{BusinessContext, Partner, PartnerFilter};
use converta_core::BusinessProfile;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Marketability
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct MarketabilityRequest {
    #[serde(flatten)]
    profile: BusinessProfile,
    #[serde(default)]
    reference_year: Option<i32>,
}

/// Accepts a business profile, optionally with a `reference_year` field.
#[napi]
pub fn score_marketability(input_json: String) -> NapiResult<String> {
    let input: MarketabilityRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = match input.reference_year {
        Some(year) => converta_core::marketability::score_marketability_as_of(&input.profile, year),
        None => converta_core::marketability::score_marketability(&input.profile),
    };
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Compliance
// ---------------------------------------------------------------------------

#[napi]
pub fn generate_compliance_recommendation(input_json: String) -> NapiResult<String> {
    let profile: BusinessProfile = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = converta_core::compliance::generate_compliance_recommendation(&profile);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Partners
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RankRequest {
    partners: Vec<Partner>,
    #[serde(default)]
    context: Option<BusinessContext>,
    #[serde(default)]
    filter: Option<PartnerFilter>,
}

/// Accepts `{ partners, context?, filter? }` and returns the ranked list.
#[napi]
pub fn rank_partners(input_json: String) -> NapiResult<String> {
    let input: RankRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let mut ranked = converta_core::partners::rank_partners(&input.partners, input.context.as_ref());
    if let Some(filter) = &input.filter {
        ranked = filter.apply(ranked);
    }
    serde_json::to_string(&ranked).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Readiness
// ---------------------------------------------------------------------------

#[napi]
pub fn analyse_readiness(input_json: String) -> NapiResult<String> {
    let input: converta_core::readiness::ReadinessInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = converta_core::readiness::analyse_readiness(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
