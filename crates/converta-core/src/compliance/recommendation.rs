//! UK company structure and compliance recommendation.
//!
//! Rules are evaluated in order and the first match decides the company type.
//! Taxes, registrations and the calendar are baseline lists extended by
//! industry, revenue band and online-store flags.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::calendar::{baseline_events, vat_return_event, ComplianceEvent};
use crate::profile::{AnnualRevenue, BusinessProfile, CompanySize};
use crate::types::{with_metadata, ComputationOutput};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyType {
    #[serde(rename = "Private Limited Company")]
    PrivateLimited,
    #[serde(rename = "Public Limited Company (PLC)")]
    PublicLimited,
}

impl std::fmt::Display for CompanyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PrivateLimited => "Private Limited Company",
            Self::PublicLimited => "Public Limited Company (PLC)",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRecommendation {
    pub recommended_company_type: CompanyType,
    pub tax_obligations: Vec<String>,
    pub compliance_calendar: Vec<ComplianceEvent>,
    pub required_registrations: Vec<String>,
    pub estimated_setup_cost: String,
    pub reasoning: String,
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

const IMPORT_EXPORT_INDUSTRIES: &[&str] = &["manufacturing", "technology"];

const SPECIALIST_SETUP_INDUSTRIES: &[&str] = &["healthcare", "financial-services"];

const BASELINE_TAXES: &[&str] = &[
    "Corporation Tax (19-25% of taxable profits)",
    "PAYE (Pay As You Earn) once staff are employed",
    "National Insurance contributions for employees and directors",
];

const VAT_OBLIGATION: &str = "VAT registration (mandatory above the £90,000 turnover threshold)";

const IMPORT_EXPORT_OBLIGATION: &str = "Import/export duties and customs declarations";

const BASELINE_REGISTRATIONS: &[&str] = &[
    "Companies House incorporation",
    "HMRC Corporation Tax registration",
    "UK registered office address",
];

const SETUP_COST_STANDARD: &str = "$1,000 - $3,000";
const SETUP_COST_SPECIALIST: &str = "$5,000 - $15,000";
const SETUP_COST_PLC: &str = "$10,000 - $25,000";

// ---------------------------------------------------------------------------
// Decision rules
// ---------------------------------------------------------------------------

fn choose_company_type(profile: &BusinessProfile) -> (CompanyType, &'static str) {
    let revenue = profile.annual_revenue.as_ref();
    let size = profile.company_size.as_ref();

    if revenue == Some(&AnnualRevenue::UpTo50k) && size == Some(&CompanySize::Micro) {
        (
            CompanyType::PrivateLimited,
            "A Private Limited Company gives a small, early-stage business limited \
             liability with the lowest administrative burden and setup cost.",
        )
    } else if revenue == Some(&AnnualRevenue::Over5m) || size == Some(&CompanySize::Large) {
        (
            CompanyType::PublicLimited,
            "At this revenue or headcount a Public Limited Company supports raising \
             capital from the public and signals credibility to large UK buyers.",
        )
    } else {
        (
            CompanyType::PrivateLimited,
            "A Private Limited Company is the standard vehicle for overseas businesses \
             entering the UK, balancing liability protection with flexibility.",
        )
    }
}

fn tax_obligations(profile: &BusinessProfile) -> Vec<String> {
    let mut taxes: Vec<String> = BASELINE_TAXES.iter().map(|t| t.to_string()).collect();

    let below_vat_band = profile.annual_revenue == Some(AnnualRevenue::UpTo50k);
    if profile.has_online_store || !below_vat_band {
        taxes.push(VAT_OBLIGATION.to_string());
    }
    if profile.industry_in(IMPORT_EXPORT_INDUSTRIES) {
        taxes.push(IMPORT_EXPORT_OBLIGATION.to_string());
    }
    taxes
}

fn required_registrations(profile: &BusinessProfile) -> Vec<String> {
    let mut registrations: Vec<String> =
        BASELINE_REGISTRATIONS.iter().map(|r| r.to_string()).collect();

    match profile.industry_key().as_deref() {
        Some("food-beverage") => registrations.push("Food safety registration".to_string()),
        Some("healthcare") => registrations.push("Healthcare regulatory approval".to_string()),
        _ => {}
    }
    registrations
}

fn estimated_setup_cost(profile: &BusinessProfile, company_type: CompanyType) -> &'static str {
    if company_type == CompanyType::PublicLimited {
        SETUP_COST_PLC
    } else if profile.industry_in(SPECIALIST_SETUP_INDUSTRIES) {
        SETUP_COST_SPECIALIST
    } else {
        SETUP_COST_STANDARD
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Recommend a UK legal structure, tax obligations and compliance calendar
/// for a business profile.
pub fn generate_compliance_recommendation(
    profile: &BusinessProfile,
) -> ComputationOutput<ComplianceRecommendation> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    if profile.annual_revenue.is_none() {
        warnings.push("Annual revenue not provided; VAT registration assumed.".to_string());
    }
    if profile.company_size.is_none() {
        warnings.push("Company size not provided; headcount rules not applied.".to_string());
    }

    let (recommended_company_type, reasoning) = choose_company_type(profile);

    let mut compliance_calendar = baseline_events();
    if profile.has_online_store {
        compliance_calendar.push(vat_return_event());
    }

    let result = ComplianceRecommendation {
        recommended_company_type,
        tax_obligations: tax_obligations(profile),
        compliance_calendar,
        required_registrations: required_registrations(profile),
        estimated_setup_cost: estimated_setup_cost(profile, recommended_company_type).to_string(),
        reasoning: reasoning.to_string(),
    };

    tracing::debug!(
        company_type = %recommended_company_type,
        events = result.compliance_calendar.len(),
        "compliance recommendation generated"
    );

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "jurisdiction": "England and Wales",
        "deadlines": "descriptive, not computed from incorporation date",
        "setup_cost_currency": "USD"
    });

    with_metadata(
        "UK company structure and compliance calendar (first matching rule)",
        &assumptions,
        warnings,
        elapsed,
        result,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
