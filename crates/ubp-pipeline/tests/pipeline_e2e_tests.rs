//! End-to-end tests for the ubp-pipeline binary
//!
//! These tests run the real binary against a mock HTTP source and validate:
//! - Console output (insight report and status lines)
//! - CSV partition files
//! - SQLite upsert behavior
//! - The no-data abort path

use assert_cmd::Command;
use predicates::prelude::*;
use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Two-user payload: a clean row followed by a row violating every rule,
/// including a duplicated id.
fn two_user_payload() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Clean User",
            "email": "x@y.com",
            "address": {"city": "Reno", "zipcode": "89501"}
        },
        {
            "id": 1,
            "name": "Broken User",
            "email": "bad",
            "address": {"city": null, "zipcode": "1"}
        }
    ])
}

/// Run the pipeline binary against the given mock server, writing into `dir`
fn run_pipeline(server_uri: &str, dir: &Path) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("ubp-pipeline").unwrap();
    cmd.arg("--api-url")
        .arg(format!("{}/users", server_uri))
        .arg("--output-dir")
        .arg(dir)
        .env("LOG_DIR", dir.join("logs"));
    cmd.assert()
}

#[tokio::test]
async fn test_e2e_valid_and_rejected_partitions() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_user_payload()))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    run_pipeline(&mock_server.uri(), dir.path())
        .success()
        .stdout(predicate::str::contains("--- DATA INSIGHTS ---"))
        .stdout(predicate::str::contains("Total users: 2"))
        .stdout(predicate::str::contains("Unique cities: 1"))
        .stdout(predicate::str::contains("Unique companies: 0"))
        .stdout(predicate::str::contains("Latitude range: n/a"))
        .stdout(predicate::str::contains("Longitude range: n/a"))
        .stdout(predicate::str::contains("Pipeline executed successfully"));

    // Valid partition: header plus the first occurrence of id 1.
    let valid = std::fs::read_to_string(dir.path().join("valid_users.csv")).unwrap();
    let mut lines = valid.lines();
    assert!(lines.next().unwrap().starts_with("user_id,name,"));
    assert!(lines.next().unwrap().starts_with("1,Clean User,"));
    assert_eq!(lines.next(), None);

    // Rejected partition: the second occurrence with all four violations.
    let rejected = std::fs::read_to_string(dir.path().join("rejected_users.csv")).unwrap();
    let mut lines = rejected.lines();
    assert!(lines.next().unwrap().ends_with(",violations"));
    let row = lines.next().unwrap();
    assert!(row.starts_with("1,Broken User,"));
    assert!(row.ends_with("\"Duplicate user_id, Invalid email, City is null, Invalid zipcode\""));

    // SQLite store: only the valid row was loaded.
    let conn = Connection::open(dir.path().join("users.db")).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
    let name: String = conn
        .query_row("SELECT name FROM users WHERE user_id = 1", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(name, "Clean User");
}

#[tokio::test]
async fn test_e2e_rerun_upserts_without_duplicating() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_user_payload()))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    run_pipeline(&mock_server.uri(), dir.path()).success();
    run_pipeline(&mock_server.uri(), dir.path()).success();

    let conn = Connection::open(dir.path().join("users.db")).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_e2e_server_error_aborts_without_writes() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    run_pipeline(&mock_server.uri(), dir.path())
        .success()
        .stdout(predicate::str::contains("No data extracted"))
        .stdout(predicate::str::contains("Pipeline executed successfully").not());

    assert!(!dir.path().join("valid_users.csv").exists());
    assert!(!dir.path().join("rejected_users.csv").exists());
    assert!(!dir.path().join("users.db").exists());
}

#[tokio::test]
async fn test_e2e_empty_upstream_aborts_without_writes() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    run_pipeline(&mock_server.uri(), dir.path())
        .success()
        .stdout(predicate::str::contains("No data extracted"));

    assert!(!dir.path().join("valid_users.csv").exists());
    assert!(!dir.path().join("users.db").exists());
}
