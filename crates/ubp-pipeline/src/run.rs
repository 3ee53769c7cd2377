//! Pipeline orchestration
//!
//! Runs the stages strictly in sequence: extract, transform, report,
//! validate, persist. Owns the console contract: `No data extracted` when
//! there is nothing to process, the insight report plus
//! `Pipeline executed successfully` otherwise.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::{extract, insights, persist, transform, validate};
use tracing::{error, info};

/// Result of a completed pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Extraction failed or returned zero users; nothing was written
    NoData,
    /// All stages completed and both partitions were persisted
    Completed { valid: usize, rejected: usize },
}

/// Execute the full pipeline with the given configuration
///
/// Extraction failures are logged and mapped to [`RunOutcome::NoData`];
/// persistence failures propagate as errors.
pub async fn run(config: &PipelineConfig) -> Result<RunOutcome> {
    let raw_users = match extract::extract(config).await {
        Ok(users) => users,
        Err(e) => {
            error!(error = %e, "API failure");
            println!("No data extracted");
            return Ok(RunOutcome::NoData);
        },
    };

    if raw_users.is_empty() {
        info!("Source returned zero users");
        println!("No data extracted");
        return Ok(RunOutcome::NoData);
    }

    let users = transform::transform(raw_users);

    insights::report(&insights::compute(&users));

    let (valid, rejected) = validate::validate(users);
    info!(
        valid = valid.len(),
        rejected = rejected.len(),
        "Validation complete"
    );

    persist::save_csv(&valid, &rejected, config)?;
    persist::load_users(&valid, &config.db_path())?;

    println!("Pipeline executed successfully");
    Ok(RunOutcome::Completed {
        valid: valid.len(),
        rejected: rejected.len(),
    })
}
