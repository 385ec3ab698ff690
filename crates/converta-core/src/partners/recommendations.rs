use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::ranker::{PartnerCategory, PartnerWithScore, ScoreBreakdown};
use crate::types::{Points, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    fn rank(urgency: Option<Urgency>) -> u8 {
        match urgency {
            Some(Urgency::High) => 0,
            Some(Urgency::Medium) => 1,
            Some(Urgency::Low) => 2,
            None => 3,
        }
    }
}

/// A category of service with the best-matching partners for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerRecommendation {
    pub category: PartnerCategory,
    pub partners: Vec<PartnerWithScore>,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<Points>,
}

fn compare(a: &PartnerRecommendation, b: &PartnerRecommendation) -> Ordering {
    Urgency::rank(a.urgency)
        .cmp(&Urgency::rank(b.urgency))
        // Option orders None first, so reversing puts unscored groups last.
        .then_with(|| b.match_score.cmp(&a.match_score))
}

/// Order recommendations high > medium > low > unset, then by match score
/// descending. Otherwise-equal entries keep their input order.
pub fn prioritize_recommendations(
    mut recommendations: Vec<PartnerRecommendation>,
) -> Vec<PartnerRecommendation> {
    recommendations.sort_by(compare);
    recommendations
}

fn category_reason(category: &PartnerCategory) -> String {
    match category {
        PartnerCategory::Legal => {
            "Legal advisers for incorporation, contracts and UK regulatory approvals".to_string()
        }
        PartnerCategory::Accounting => {
            "Accountants for Corporation Tax, VAT and UK financial structuring".to_string()
        }
        PartnerCategory::Marketing => {
            "Marketing specialists to position products for UK customers".to_string()
        }
        PartnerCategory::BusinessDevelopment => {
            "Business development partners to open UK sales channels".to_string()
        }
        PartnerCategory::Compliance => {
            "Compliance consultants for UK product standards and certifications".to_string()
        }
        PartnerCategory::Logistics => {
            "Logistics providers for customs, warehousing and UK fulfilment".to_string()
        }
        PartnerCategory::Other(raw) => format!("Specialist {} support for UK market entry", raw),
    }
}

fn category_urgency(category: &PartnerCategory, scores: &ScoreBreakdown) -> Urgency {
    let below = |value: Option<Score>, limit: Score| value.map_or(false, |v| v < limit);

    let high = match category {
        PartnerCategory::Legal => below(scores.regulatory_compatibility, 50),
        PartnerCategory::Accounting => below(scores.founder_advantage, 60),
        PartnerCategory::Marketing => {
            below(scores.digital_readiness, 60) || below(scores.product_market_fit, 60)
        }
        PartnerCategory::Logistics => below(scores.logistics_viability, 50),
        PartnerCategory::Compliance => below(scores.regulatory_compatibility, 60),
        PartnerCategory::BusinessDevelopment | PartnerCategory::Other(_) => false,
    };
    let medium = match category {
        PartnerCategory::Legal => below(scores.regulatory_compatibility, 70),
        PartnerCategory::Logistics => below(scores.logistics_viability, 60),
        _ => false,
    };

    if high {
        Urgency::High
    } else if medium {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

/// Group a ranked partner list by category, keep the `top_n` best of each
/// and order the groups by urgency.
pub fn build_category_recommendations(
    ranked: &[PartnerWithScore],
    scores: Option<&ScoreBreakdown>,
    top_n: usize,
) -> Vec<PartnerRecommendation> {
    let mut groups: Vec<(PartnerCategory, Vec<PartnerWithScore>)> = Vec::new();
    for scored in ranked {
        let category = &scored.partner.category;
        match groups.iter().position(|(c, _)| c == category) {
            Some(i) => groups[i].1.push(scored.clone()),
            None => groups.push((category.clone(), vec![scored.clone()])),
        }
    }

    let recommendations = groups
        .into_iter()
        .map(|(category, mut members)| {
            members.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
            members.truncate(top_n);
            PartnerRecommendation {
                reason: category_reason(&category),
                urgency: scores.map(|s| category_urgency(&category, s)),
                match_score: members.first().map(|p| p.relevance_score),
                category,
                partners: members,
            }
        })
        .collect();

    prioritize_recommendations(recommendations)
}
