use serde::{Deserialize, Serialize};

use super::ranker::{PartnerCategory, PartnerWithScore};
use crate::types::Points;

/// Partners scoring at or below this are hidden by the relevance filter.
pub const RELEVANCE_THRESHOLD: Points = 20;

fn matches_search(scored: &PartnerWithScore, needle: &str) -> bool {
    let p = &scored.partner;
    p.name.to_lowercase().contains(needle)
        || p.description.to_lowercase().contains(needle)
        || p.specialties.iter().any(|s| s.to_lowercase().contains(needle))
        || p.category.as_str().to_lowercase().contains(needle)
}

fn normalised_query(query: &str) -> Option<String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        None
    } else {
        Some(q)
    }
}

/// Keep partners whose name, description, specialties or category contain
/// `query` (case-insensitive). A blank query keeps everything.
pub fn filter_by_search(partners: Vec<PartnerWithScore>, query: &str) -> Vec<PartnerWithScore> {
    match normalised_query(query) {
        Some(needle) => partners
            .into_iter()
            .filter(|p| matches_search(p, &needle))
            .collect(),
        None => partners,
    }
}

pub fn filter_by_category(
    partners: Vec<PartnerWithScore>,
    category: &PartnerCategory,
) -> Vec<PartnerWithScore> {
    partners
        .into_iter()
        .filter(|p| &p.partner.category == category)
        .collect()
}

pub fn filter_by_relevance_threshold(partners: Vec<PartnerWithScore>) -> Vec<PartnerWithScore> {
    partners
        .into_iter()
        .filter(|p| p.relevance_score > RELEVANCE_THRESHOLD)
        .collect()
}

/// All three filters combined by logical AND, applied in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartnerFilter {
    pub search: Option<String>,
    pub category: Option<PartnerCategory>,
    pub relevant_only: bool,
}

impl PartnerFilter {
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().and_then(normalised_query).is_none()
            && self.category.is_none()
            && !self.relevant_only
    }

    pub fn apply(&self, mut partners: Vec<PartnerWithScore>) -> Vec<PartnerWithScore> {
        let needle = self.search.as_deref().and_then(normalised_query);
        partners.retain(|p| {
            needle.as_deref().map_or(true, |n| matches_search(p, n))
                && self.category.as_ref().map_or(true, |c| &p.partner.category == c)
                && (!self.relevant_only || p.relevance_score > RELEVANCE_THRESHOLD)
        });
        partners
    }
}
