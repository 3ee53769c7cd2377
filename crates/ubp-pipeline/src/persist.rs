//! Persistence stage
//!
//! Two independent sinks: CSV files for both partitions, and a SQLite table
//! holding the valid partition keyed by `user_id`. CSV files are overwritten
//! on every run. SQLite rows are upserted (`INSERT OR REPLACE`) inside a
//! single transaction committed at the end of the batch.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::model::{FlatUser, RejectedUser, FLAT_COLUMNS};
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::info;

/// Column added to the rejected partition's CSV
const VIOLATIONS_COLUMN: &str = "violations";

/// Write both partitions to CSV files at the configured locations
pub fn save_csv(
    valid: &[FlatUser],
    rejected: &[RejectedUser],
    config: &PipelineConfig,
) -> Result<()> {
    std::fs::create_dir_all(config.output_dir())?;

    write_valid_csv(valid, &config.valid_csv_path())?;
    write_rejected_csv(rejected, &config.rejected_csv_path())?;

    info!(
        valid = valid.len(),
        rejected = rejected.len(),
        "CSV files saved"
    );
    Ok(())
}

fn write_valid_csv(valid: &[FlatUser], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(FLAT_COLUMNS)?;
    for user in valid {
        writer.write_record(user.csv_fields())?;
    }

    writer.flush()?;
    Ok(())
}

fn write_rejected_csv(rejected: &[RejectedUser], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header: Vec<&str> = FLAT_COLUMNS.to_vec();
    header.push(VIOLATIONS_COLUMN);
    writer.write_record(header)?;

    for row in rejected {
        let mut fields = row.user.csv_fields();
        fields.push(row.violations.clone());
        writer.write_record(fields)?;
    }

    writer.flush()?;
    Ok(())
}

/// Upsert the valid partition into the `users` table of the SQLite store
///
/// Creates the database and table on first use. All rows are written inside
/// one transaction, so a completed call is all-or-nothing.
pub fn load_users(valid: &[FlatUser], db_path: &Path) -> Result<()> {
    let mut conn = Connection::open(db_path)?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            user_id INTEGER PRIMARY KEY,
            name TEXT,
            username TEXT,
            email TEXT,
            phone TEXT,
            website TEXT,
            city TEXT,
            zipcode TEXT,
            latitude TEXT,
            longitude TEXT,
            company_name TEXT,
            company_phrase TEXT,
            company_bs TEXT
        )
        "#,
        [],
    )?;

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            r#"
            INSERT OR REPLACE INTO users
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
        )?;

        for user in valid {
            stmt.execute(params![
                user.user_id,
                user.name,
                user.username,
                user.email,
                user.phone,
                user.website,
                user.city,
                user.zipcode,
                user.latitude,
                user.longitude,
                user.company_name,
                user.company_phrase,
                user.company_bs,
            ])?;
        }
    }
    tx.commit()?;

    info!(rows = valid.len(), db = %db_path.display(), "Data loaded into SQLite");
    Ok(())
}
