mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::compliance::ComplianceArgs;
use commands::marketability::MarketabilityArgs;
use commands::partners::RankPartnersArgs;
use commands::readiness::AnalyseArgs;

/// UK market-entry readiness for Turkish SMEs
#[derive(Parser)]
#[command(
    name = "converta",
    version,
    about = "UK market-entry readiness scoring, compliance planning and partner matching",
    long_about = "Scores a business profile's readiness to enter the UK market, recommends \
                  a UK company structure with its tax and filing obligations, and ranks \
                  service partners by relevance to the business."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log scoring decisions to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score marketability across six readiness metrics
    Marketability(MarketabilityArgs),
    /// Recommend a UK company structure and compliance calendar
    Compliance(ComplianceArgs),
    /// Rank a partner catalog by relevance to a business
    RankPartners(RankPartnersArgs),
    /// Run the full readiness analysis
    Analyse(AnalyseArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Marketability(args) => commands::marketability::run_marketability(args),
        Commands::Compliance(args) => commands::compliance::run_compliance(args),
        Commands::RankPartners(args) => commands::partners::run_rank_partners(args),
        Commands::Analyse(args) => commands::readiness::run_analyse(args),
        Commands::Version => {
            println!("converta {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
