//! UBP Pipeline Library
//!
//! A single-pass batch ETL job over a remote user directory:
//!
//! 1. **Extract**: one bounded HTTP GET returning a JSON array of users
//! 2. **Transform**: flatten each nested record into a 13-field row
//! 3. **Insights**: descriptive statistics over the flat table
//! 4. **Validate**: per-row rule checks partitioning rows into valid/rejected
//! 5. **Persist**: CSV files for both partitions, SQLite upsert for the valid one
//!
//! Stages run strictly in sequence; each consumes the previous stage's
//! output by value. See [`run::run`] for the orchestration.
//!
//! # Example
//!
//! ```no_run
//! use ubp_pipeline::{config::PipelineConfig, run};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = PipelineConfig::from_env()?;
//!     run::run(&config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod insights;
pub mod model;
pub mod persist;
pub mod run;
pub mod transform;
pub mod validate;

// Re-export commonly used types
pub use error::{PipelineError, Result};
pub use model::{FlatUser, RawUser, RejectedUser};
