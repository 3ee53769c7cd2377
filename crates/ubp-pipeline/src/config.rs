//! Configuration for a pipeline run
//!
//! Fixed defaults with environment-variable overrides. Output paths are
//! resolved relative to a single output directory so tests can point a run
//! at a scratch location.

use crate::error::{PipelineError, Result};
use std::path::{Path, PathBuf};

// ============================================================================
// Pipeline Configuration Constants
// ============================================================================

/// Default source endpoint returning a JSON array of users.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Total request timeout in seconds for the extraction call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// File name for the valid partition.
pub const VALID_CSV_FILE: &str = "valid_users.csv";

/// File name for the rejected partition.
pub const REJECTED_CSV_FILE: &str = "rejected_users.csv";

/// File name for the SQLite store holding the valid partition.
pub const DB_FILE: &str = "users.db";

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Source API endpoint
    pub api_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Directory receiving the CSV files and the SQLite database
    pub output_dir: PathBuf,
}

impl PipelineConfig {
    /// Create a config with default values, writing into the given directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output_dir: output_dir.into(),
        }
    }

    /// Load config from environment variables
    ///
    /// - `UBP_API_URL`: source endpoint
    /// - `UBP_TIMEOUT_SECS`: request timeout in seconds
    /// - `UBP_OUTPUT_DIR`: output directory (defaults to the working directory)
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(".");

        if let Ok(url) = std::env::var("UBP_API_URL") {
            config.api_url = url;
        }

        if let Ok(secs) = std::env::var("UBP_TIMEOUT_SECS") {
            config.timeout_secs = secs
                .parse()
                .map_err(|_| PipelineError::config(format!("Invalid UBP_TIMEOUT_SECS: {}", secs)))?;
        }

        if let Ok(dir) = std::env::var("UBP_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Path of the valid-partition CSV file
    pub fn valid_csv_path(&self) -> PathBuf {
        self.output_dir.join(VALID_CSV_FILE)
    }

    /// Path of the rejected-partition CSV file
    pub fn rejected_csv_path(&self) -> PathBuf {
        self.output_dir.join(REJECTED_CSV_FILE)
    }

    /// Path of the SQLite database
    pub fn db_path(&self) -> PathBuf {
        self.output_dir.join(DB_FILE)
    }

    /// Output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
