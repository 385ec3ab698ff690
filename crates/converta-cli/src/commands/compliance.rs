use clap::Args;
use serde_json::Value;

use converta_core::compliance::recommendation;
use converta_core::BusinessProfile;

use crate::input;

/// Arguments for the compliance recommendation
#[derive(Args)]
pub struct ComplianceArgs {
    /// Path to a business profile (JSON or YAML)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_compliance(args: ComplianceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile: BusinessProfile = input::load(args.input.as_deref(), "compliance recommendation")?;
    let result = recommendation::generate_compliance_recommendation(&profile);
    Ok(serde_json::to_value(result)?)
}
