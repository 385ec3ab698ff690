use converta_core::marketability::scorer;
use converta_core::partners::filters::{self, PartnerFilter};
use converta_core::partners::ranker::{self, BusinessContext, Partner, PartnerCategory, ScoreBreakdown};
use converta_core::partners::recommendations::{self, Urgency};
use converta_core::profile::BusinessProfile;
use pretty_assertions::assert_eq;

// ===========================================================================
// Fixtures
// ===========================================================================

fn catalog() -> Vec<Partner> {
    serde_json::from_value(serde_json::json!([
        {
            "id": "p-01",
            "name": "Anglo-Turkish Law Partners",
            "description": "UK based legal experts for SME exporters",
            "category": "legal",
            "specialties": ["Company formation", "Commercial contracts", "Food labelling law", "Trademarks"],
            "location": "London",
            "verification_status": "verified"
        },
        {
            "id": "p-02",
            "name": "Marmara Accountants",
            "description": "Cross-border tax and bookkeeping",
            "category": "accounting",
            "specialties": ["VAT", "Payroll"],
            "location": "Istanbul",
            "verification_status": "verified"
        },
        {
            "id": "p-03",
            "name": "ColdChain UK",
            "description": "Temperature-controlled food freight and customs clearance",
            "category": "logistics",
            "specialties": ["Customs", "Warehousing"],
            "location": "Felixstowe, England",
            "verification_status": "verified"
        },
        {
            "id": "p-04",
            "name": "Shelf Ready",
            "description": "Retail listings and packaging design for premium confectionery",
            "category": "marketing",
            "specialties": ["Packaging", "Retail buyers"],
            "location": "Manchester",
            "verification_status": "verified"
        }
    ]))
    .unwrap()
}

fn confectioner() -> BusinessProfile {
    serde_json::from_value(serde_json::json!({
        "industry": "food",
        "company_size": "11-50",
        "annual_revenue": "50k-250k",
        "description": "Premium confectionery and packaging for retail chains",
        "current_markets": ["Turkey"],
        "digital_presence": ["instagram"]
    }))
    .unwrap()
}

// ===========================================================================
// Scenarios
// ===========================================================================

#[test]
fn test_scenario_c_legal_gap_and_locality() {
    let partner: Partner = serde_json::from_value(serde_json::json!({
        "id": "c",
        "name": "C",
        "description": "UK based legal experts",
        "category": "legal",
        "location": "London"
    }))
    .unwrap();
    let context: BusinessContext = serde_json::from_value(serde_json::json!({
        "scores": { "regulatory_compatibility": 40 }
    }))
    .unwrap();

    let scored = ranker::score_partner(&partner, Some(&context));
    assert_eq!(scored.relevance_score, 38);
    assert!(scored
        .match_reasons
        .contains(&"Critical legal gaps identified".to_string()));
    assert!(scored
        .match_reasons
        .contains(&"UK-based with local market knowledge".to_string()));
}

#[test]
fn test_scenario_d_empty_catalog() {
    let context = BusinessContext::from_profile(&confectioner(), None);
    assert!(ranker::rank_partners(&[], Some(&context)).is_empty());
}

// ===========================================================================
// Ranking with a real context
// ===========================================================================

#[test]
fn test_rank_confectioner_catalog() {
    let profile = confectioner();
    let metrics = scorer::score_marketability_as_of(&profile, 2026).result.metrics;
    let context = BusinessContext::from_profile(&profile, Some(ScoreBreakdown::from(&metrics)));

    let ranked = ranker::rank_partners(&catalog(), Some(&context));
    let order: Vec<_> = ranked.iter().map(|p| (p.partner.id.as_str(), p.relevance_score)).collect();

    // p-01: 10 + food 25 + priority 15 + sme 10 + urgency 10 (reg 50) + portfolio 5 + uk 8
    // p-03: 10 + food 25 + priority 15 + uk 8
    // p-04: 10 + keywords 8 + urgency 12
    // p-02: 10 + urgency 15 (founder 45)
    assert_eq!(order, vec![("p-01", 83), ("p-03", 58), ("p-04", 30), ("p-02", 25)]);
}

#[test]
fn test_equal_scores_keep_catalog_order() {
    let mut twins = catalog();
    for p in twins.iter_mut() {
        p.location = "Bursa".to_string();
        p.specialties.clear();
    }
    let ranked = ranker::rank_partners(&twins, None);
    let ids: Vec<_> = ranked.iter().map(|p| p.partner.id.as_str()).collect();
    assert_eq!(ids, vec!["p-01", "p-02", "p-03", "p-04"]);
}

#[test]
fn test_filters_over_ranked_list() {
    let profile = confectioner();
    let context = BusinessContext::from_profile(&profile, None);
    let ranked = ranker::rank_partners(&catalog(), Some(&context));

    let food = filters::filter_by_search(ranked.clone(), "FOOD");
    assert_eq!(food.len(), 2);

    let relevant = filters::filter_by_relevance_threshold(ranked.clone());
    assert!(relevant.iter().all(|p| p.relevance_score > 20));

    let filter = PartnerFilter {
        search: Some("customs".to_string()),
        category: Some(PartnerCategory::Logistics),
        relevant_only: true,
    };
    let only = filter.apply(ranked);
    assert_eq!(only.len(), 1);
    assert_eq!(only[0].partner.id, "p-03");
}

#[test]
fn test_category_recommendations_prioritised() {
    let profile = confectioner();
    let metrics = scorer::score_marketability_as_of(&profile, 2026).result.metrics;
    let scores = ScoreBreakdown::from(&metrics);
    let context = BusinessContext::from_profile(&profile, Some(scores));
    let ranked = ranker::rank_partners(&catalog(), Some(&context));

    let recs = recommendations::build_category_recommendations(&ranked, Some(&scores), 2);
    let summary: Vec<_> = recs
        .iter()
        .map(|r| (r.category.as_str(), r.urgency, r.match_score))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("marketing", Some(Urgency::High), Some(30)),
            ("accounting", Some(Urgency::High), Some(25)),
            ("legal", Some(Urgency::Medium), Some(83)),
            ("logistics", Some(Urgency::Low), Some(58)),
        ]
    );
}
