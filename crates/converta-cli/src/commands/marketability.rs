use clap::Args;
use serde_json::Value;

use converta_core::marketability::scorer;
use converta_core::BusinessProfile;

use crate::input;

/// Arguments for marketability scoring
#[derive(Args)]
pub struct MarketabilityArgs {
    /// Path to a business profile (JSON or YAML)
    #[arg(long)]
    pub input: Option<String>,

    /// Year used for years-in-business; defaults to the current year
    #[arg(long)]
    pub reference_year: Option<i32>,
}

pub fn run_marketability(args: MarketabilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile: BusinessProfile = input::load(args.input.as_deref(), "marketability scoring")?;
    let result = match args.reference_year {
        Some(year) => scorer::score_marketability_as_of(&profile, year),
        None => scorer::score_marketability(&profile),
    };
    Ok(serde_json::to_value(result)?)
}
