//! UBP Pipeline - user batch ETL job

use anyhow::Result;
use clap::Parser;
use tracing::info;
use ubp_common::logging::{init_logging, LogConfig, LogLevel};
use ubp_pipeline::config::PipelineConfig;
use ubp_pipeline::run;

#[derive(Parser, Debug)]
#[command(name = "ubp-pipeline")]
#[command(author, version, about = "Fetch, flatten, validate, and persist the user directory")]
struct Cli {
    /// Source API endpoint (overrides UBP_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Directory receiving the CSV files and SQLite database (overrides UBP_OUTPUT_DIR)
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // LOG_* environment variables first, then the verbose flag on top
    let mut log_config = LogConfig::from_env()?;
    log_config.log_file_prefix = "ubp-pipeline".to_string();
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }

    init_logging(&log_config)?;

    let mut config = PipelineConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir.into();
    }

    let outcome = run::run(&config).await?;
    info!(?outcome, "Pipeline run finished");

    Ok(())
}
