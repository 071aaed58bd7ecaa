//! Command implementations for the water quality CLI.
//!
//! Both subcommands fetch the dataset once, aggregate it per calendar year
//! and either print the series or the filtering summary.

use clap::{Args, Subcommand};
use wq_socrata::client::DEFAULT_TIMEOUT;
use wq_socrata::endpoint::{DEFAULT_BASE_URL, DEFAULT_LIMIT};

pub mod annual;
pub mod output;

pub use output::OutputFormat;

/// Where to fetch from and how to bucket years.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Dataset resource URL (without the `$limit` parameter)
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub endpoint: String,

    /// Maximum number of records to request
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Take calendar years in UTC instead of the local time zone
    #[arg(long)]
    pub utc: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print or write the annual mean oxygen and turbidity series
    Annual {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Print how many records were kept or dropped, and why
    Summary {
        #[command(flatten)]
        source: SourceArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Annual {
            source,
            format,
            output,
        } => annual::run_annual(&source, format, output.as_deref()).await,
        Command::Summary { source } => annual::run_summary(&source).await,
    }
}
