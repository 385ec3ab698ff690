use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use converta_core::partners::ranker::{self, BusinessContext, Partner, PartnerCategory};
use converta_core::partners::PartnerFilter;

use crate::input;

/// Arguments for partner ranking
#[derive(Args)]
pub struct RankPartnersArgs {
    /// Path to `{ partners, context? }` (JSON or YAML)
    #[arg(long)]
    pub input: Option<String>,

    /// Keep partners whose name, description, specialties or category contain this text
    #[arg(long)]
    pub search: Option<String>,

    /// Keep a single category, e.g. legal or logistics
    #[arg(long)]
    pub category: Option<String>,

    /// Hide partners at or below the relevance threshold
    #[arg(long)]
    pub relevant_only: bool,
}

#[derive(Deserialize)]
struct RankRequest {
    partners: Vec<Partner>,
    #[serde(default)]
    context: Option<BusinessContext>,
}

pub fn run_rank_partners(args: RankPartnersArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: RankRequest = input::load(args.input.as_deref(), "partner ranking")?;

    let filter = PartnerFilter {
        search: args.search,
        category: args.category.map(PartnerCategory::from),
        relevant_only: args.relevant_only,
    };
    if let Some(PartnerCategory::Other(raw)) = &filter.category {
        tracing::warn!(category = %raw, "unrecognised partner category filter");
    }

    let ranked = ranker::rank_partners(&request.partners, request.context.as_ref());
    let ranked = if filter.is_empty() {
        ranked
    } else {
        filter.apply(ranked)
    };
    Ok(serde_json::to_value(ranked)?)
}
