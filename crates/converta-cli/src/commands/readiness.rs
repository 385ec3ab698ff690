use clap::Args;
use serde_json::Value;

use converta_core::readiness::{self, ReadinessInput};

use crate::input;

/// Arguments for the full readiness analysis
#[derive(Args)]
pub struct AnalyseArgs {
    /// Path to `{ profile, partners, filter?, top_n_per_category?, reference_year? }`
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_analyse(args: AnalyseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: ReadinessInput = input::load(args.input.as_deref(), "readiness analysis")?;
    let result = readiness::analyse_readiness(&request)?;
    Ok(serde_json::to_value(result)?)
}
