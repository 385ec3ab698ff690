//! Partner relevance ranking.
//!
//! Each partner starts at 10 points and gains additive bonuses for industry
//! expertise, category priority, company-size affinity, description overlap,
//! score-driven urgency, portfolio breadth and UK locality. Ranking is a
//! stable descending sort on the total.

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::profile::{BusinessProfile, CompanySize};
use crate::types::{Points, Score};

// ---------------------------------------------------------------------------
// Catalog types
// ---------------------------------------------------------------------------

string_enum! {
    /// Service area a partner is listed under.
    pub enum PartnerCategory {
        Accounting => "accounting",
        Legal => "legal",
        Marketing => "marketing",
        BusinessDevelopment => "business_development",
        Compliance => "compliance",
        Logistics => "logistics",
    }
}

/// A verified service provider from the partner directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: PartnerCategory,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub verification_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

impl Partner {
    /// Description and specialties, lower-cased, for substring matching.
    fn match_text(&self) -> String {
        format!("{} {}", self.description, self.specialties.join(" ")).to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerWithScore {
    #[serde(flatten)]
    pub partner: Partner,
    pub relevance_score: Points,
    pub match_reasons: Vec<String>,
}

/// Prior readiness scores, any subset of which may be known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBreakdown {
    pub product_market_fit: Option<Score>,
    pub regulatory_compatibility: Option<Score>,
    pub logistics_viability: Option<Score>,
    pub digital_readiness: Option<Score>,
    pub scalability_potential: Option<Score>,
    /// Also read from `investment_readiness` in older analysis payloads.
    #[serde(alias = "investment_readiness")]
    pub founder_advantage: Option<Score>,
}

#[cfg(feature = "marketability")]
impl From<&crate::marketability::MarketabilityMetrics> for ScoreBreakdown {
    fn from(m: &crate::marketability::MarketabilityMetrics) -> Self {
        ScoreBreakdown {
            product_market_fit: Some(m.product_market_fit),
            regulatory_compatibility: Some(m.regulatory_compatibility),
            logistics_viability: Some(m.logistics_viability),
            digital_readiness: Some(m.digital_readiness),
            scalability_potential: Some(m.scalability_potential),
            founder_advantage: Some(m.founder_advantage),
        }
    }
}

/// What the ranker knows about the business being matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessContext {
    pub industry: Option<String>,
    pub company_size: Option<CompanySize>,
    pub description: Option<String>,
    pub scores: Option<ScoreBreakdown>,
}

impl BusinessContext {
    pub fn from_profile(profile: &BusinessProfile, scores: Option<ScoreBreakdown>) -> Self {
        BusinessContext {
            industry: profile.industry.clone(),
            company_size: profile.company_size.clone(),
            description: profile.description.clone(),
            scores,
        }
    }

    fn industry_lower(&self) -> Option<String> {
        self.industry
            .as_deref()
            .map(|i| i.trim().to_lowercase())
            .filter(|i| !i.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Static tables
// ---------------------------------------------------------------------------

const BASE_POINTS: Points = 10;
const INDUSTRY_EXPERTISE_POINTS: Points = 25;
const CATEGORY_PRIORITY_POINTS: Points = 15;
const SIZE_AFFINITY_POINTS: Points = 10;
const STRONG_ALIGNMENT_POINTS: Points = 8;
const SOME_ALIGNMENT_POINTS: Points = 4;
const RICH_PORTFOLIO_POINTS: Points = 5;
const UK_LOCALITY_POINTS: Points = 8;

/// Keyword → partner categories most needed by businesses in that industry.
/// Matched in order; the first key contained in the industry wins.
const INDUSTRY_PRIORITIES: &[(&str, &[&str])] = &[
    ("healthcare", &["compliance", "legal", "consulting"]),
    ("medical", &["compliance", "legal", "consulting"]),
    ("pharmaceutical", &["compliance", "legal", "consulting"]),
    ("finance", &["legal", "compliance", "accounting"]),
    ("fintech", &["legal", "compliance", "accounting"]),
    ("technology", &["legal", "marketing", "consulting"]),
    ("software", &["legal", "marketing", "consulting"]),
    ("retail", &["logistics", "marketing", "accounting"]),
    ("e-commerce", &["logistics", "marketing", "accounting"]),
    ("manufacturing", &["logistics", "compliance", "legal"]),
    ("food", &["compliance", "legal", "logistics"]),
    ("automotive", &["compliance", "legal", "logistics"]),
];

const SME_MARKERS: &[&str] = &["sme", "small business"];
const ENTERPRISE_MARKERS: &[&str] = &["enterprise", "large company"];
const UK_MARKERS: &[&str] = &["uk", "london", "england"];

/// Business description words shorter than this are ignored for overlap.
const MIN_KEYWORD_CHARS: usize = 5;

fn priority_categories(industry: &str) -> Option<&'static [&'static str]> {
    INDUSTRY_PRIORITIES
        .iter()
        .find(|(key, _)| industry.contains(key))
        .map(|(_, categories)| *categories)
}

fn mentions_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text.contains(m))
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

struct Tally {
    score: Points,
    reasons: Vec<String>,
}

impl Tally {
    fn award(&mut self, points: Points, reason: impl Into<String>) {
        self.score += points;
        self.reasons.push(reason.into());
    }
}

fn score_urgency(tally: &mut Tally, category: &PartnerCategory, scores: &ScoreBreakdown) {
    let below = |value: Option<Score>, limit: Score| value.map_or(false, |v| v < limit);

    match category {
        PartnerCategory::Legal => {
            if below(scores.regulatory_compatibility, 50) {
                tally.award(20, "Critical legal gaps identified");
            } else if below(scores.regulatory_compatibility, 70) {
                tally.award(10, "Legal improvements needed");
            }
        }
        PartnerCategory::Accounting => {
            if below(scores.founder_advantage, 60) {
                tally.award(15, "Financial structuring required");
            }
        }
        PartnerCategory::Marketing => {
            if below(scores.digital_readiness, 60) || below(scores.product_market_fit, 60) {
                tally.award(12, "Marketing optimization needed");
            }
        }
        PartnerCategory::BusinessDevelopment
        | PartnerCategory::Compliance
        | PartnerCategory::Logistics
        | PartnerCategory::Other(_) => {}
    }
}

fn score_against_context(tally: &mut Tally, partner: &Partner, text: &str, ctx: &BusinessContext) {
    if let Some(industry) = ctx.industry_lower() {
        if text.contains(&industry) {
            tally.award(INDUSTRY_EXPERTISE_POINTS, format!("{} industry expertise", industry));
        }
        let preferred = priority_categories(&industry);
        let is_preferred = preferred.map_or(false, |cats| {
            cats.iter().any(|c| partner.category == PartnerCategory::from(*c))
        });
        if is_preferred {
            tally.award(
                CATEGORY_PRIORITY_POINTS,
                format!("High priority for {} businesses", industry),
            );
        }
    }

    if let Some(size) = &ctx.company_size {
        let description = partner.description.to_lowercase();
        if mentions_any(&description, SME_MARKERS) && size.is_small() {
            tally.award(SIZE_AFFINITY_POINTS, "Specializes in small businesses");
        }
        if mentions_any(&description, ENTERPRISE_MARKERS) && size.is_large() {
            tally.award(SIZE_AFFINITY_POINTS, "Enterprise-focused services");
        }
    }

    if let Some(description) = &ctx.description {
        let matches = description
            .to_lowercase()
            .split_whitespace()
            .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
            .filter(|word| text.contains(*word))
            .count();
        if matches > 2 {
            tally.award(STRONG_ALIGNMENT_POINTS, "Strong business alignment");
        } else if matches > 0 {
            tally.award(SOME_ALIGNMENT_POINTS, "Business relevance");
        }
    }

    if let Some(scores) = &ctx.scores {
        score_urgency(tally, &partner.category, scores);
    }
}

/// Score a single partner against an optional business context.
pub fn score_partner(partner: &Partner, context: Option<&BusinessContext>) -> PartnerWithScore {
    let mut tally = Tally {
        score: BASE_POINTS,
        reasons: Vec::new(),
    };
    let text = partner.match_text();

    if let Some(ctx) = context {
        score_against_context(&mut tally, partner, &text, ctx);
    }

    if partner.specialties.len() > 3 {
        tally.award(RICH_PORTFOLIO_POINTS, "Comprehensive service portfolio");
    }
    if mentions_any(&partner.location.to_lowercase(), UK_MARKERS) {
        tally.award(UK_LOCALITY_POINTS, "UK-based with local market knowledge");
    }

    PartnerWithScore {
        partner: partner.clone(),
        relevance_score: tally.score,
        match_reasons: tally.reasons,
    }
}

#[cfg(not(feature = "parallel"))]
fn score_all(partners: &[Partner], context: Option<&BusinessContext>) -> Vec<PartnerWithScore> {
    partners.iter().map(|p| score_partner(p, context)).collect()
}

#[cfg(feature = "parallel")]
fn score_all(partners: &[Partner], context: Option<&BusinessContext>) -> Vec<PartnerWithScore> {
    partners.par_iter().map(|p| score_partner(p, context)).collect()
}

/// Score every partner and order by relevance, highest first. Partners with
/// equal scores keep their catalog order.
pub fn rank_partners(
    partners: &[Partner],
    context: Option<&BusinessContext>,
) -> Vec<PartnerWithScore> {
    let mut scored = score_all(partners, context);
    scored.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));

    tracing::debug!(
        partners = scored.len(),
        top_score = scored.first().map(|p| p.relevance_score),
        with_context = context.is_some(),
        "partners ranked"
    );
    scored
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
