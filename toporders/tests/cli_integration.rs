//! Integration tests for toporders CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::{tempdir, TempDir};

const SAMPLE: &str = "\
OrderID,CustomerID,TotalProfit,OrderDate
O1,C1,100,2020-01-01
O2,C2,500,2020-01-02
O3,C3,300,2020-01-03
O4,C4,50,2020-01-04
";

const SAMPLE_REPORT: &str = "\
Top 3 Most Profitable Orders:
OrderID CustomerID TotalProfit  OrderDate
     O2         C2         500 2020-01-02
     O3         C3         300 2020-01-03
     O1         C1         100 2020-01-01
";

fn run_toporders_in(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_toporders"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// A temporary working directory holding `data/Order.csv` with the given content.
fn workdir_with_orders(csv: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/Order.csv"), csv).unwrap();
    dir
}

#[test]
fn test_cli_help() {
    let dir = tempdir().unwrap();
    let (stdout, _, success) = run_toporders_in(dir.path(), &["--help"]);

    assert!(success);
    assert!(stdout.contains("toporders"));
    assert!(stdout.contains("--top"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let dir = tempdir().unwrap();
    let (stdout, _, success) = run_toporders_in(dir.path(), &["--version"]);

    assert!(success);
    assert!(stdout.contains("toporders"));
}

#[test]
fn test_default_path_report() {
    let dir = workdir_with_orders(SAMPLE);
    let (stdout, stderr, success) = run_toporders_in(dir.path(), &[]);

    assert!(success, "stderr: {stderr}");
    assert_eq!(stdout, SAMPLE_REPORT);
}

#[test]
fn test_explicit_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.csv");
    fs::write(&path, SAMPLE).unwrap();

    let (stdout, _, success) = run_toporders_in(dir.path(), &[path.to_str().unwrap()]);

    assert!(success);
    assert_eq!(stdout, SAMPLE_REPORT);
}

#[test]
fn test_runs_are_identical() {
    let dir = workdir_with_orders(SAMPLE);
    let (first, _, ok1) = run_toporders_in(dir.path(), &[]);
    let (second, _, ok2) = run_toporders_in(dir.path(), &[]);

    assert!(ok1 && ok2);
    assert_eq!(first, second);
}

#[test]
fn test_fewer_than_three_rows() {
    let dir = workdir_with_orders(
        "OrderID,CustomerID,TotalProfit,OrderDate\nA1,X,10,2021-01-01\nA2,Y,20,2021-01-02\n",
    );
    let (stdout, _, success) = run_toporders_in(dir.path(), &[]);

    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4); // title, header, 2 rows
    assert!(lines[2].starts_with("     A2"));
    assert!(lines[3].starts_with("     A1"));
}

#[test]
fn test_empty_table_prints_title_only() {
    let dir = workdir_with_orders("OrderID,CustomerID,TotalProfit,OrderDate\n");
    let (stdout, _, success) = run_toporders_in(dir.path(), &[]);

    assert!(success);
    assert_eq!(stdout, "Top 3 Most Profitable Orders:\n");
}

#[test]
fn test_extra_columns_ignored() {
    let dir = workdir_with_orders(
        "Region,OrderID,Units,OrderDate,CustomerID,TotalProfit\n\
         EU,O1,3,2020-01-01,C1,100\n\
         US,O2,1,2020-01-02,C2,500\n\
         EU,O3,9,2020-01-03,C3,300\n\
         US,O4,2,2020-01-04,C4,50\n",
    );
    let (stdout, _, success) = run_toporders_in(dir.path(), &[]);

    assert!(success);
    assert_eq!(stdout, SAMPLE_REPORT);
    assert!(!stdout.contains("Region"));
}

#[test]
fn test_top_option() {
    let dir = workdir_with_orders(SAMPLE);
    let (stdout, _, success) = run_toporders_in(dir.path(), &["--top", "1"]);

    assert!(success);
    assert!(stdout.starts_with("Top 1 Most Profitable Orders:\n"));
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.contains("O2"));
    assert!(!stdout.contains("O3"));
}

#[test]
fn test_top_zero() {
    let dir = workdir_with_orders(SAMPLE);
    let (stdout, _, success) = run_toporders_in(dir.path(), &["-n", "0"]);

    assert!(success);
    assert_eq!(stdout, "Top 0 Most Profitable Orders:\n");
}

#[test]
fn test_json_output() {
    let dir = workdir_with_orders(SAMPLE);
    let (stdout, _, success) = run_toporders_in(dir.path(), &["--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["title"], "Top 3 Most Profitable Orders:");
    assert_eq!(parsed["headers"][0], "OrderID");
    let rows = parsed["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["values"][0], "O2");
    assert_eq!(rows[0]["values"][2], "500");
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let (stdout, stderr, success) = run_toporders_in(dir.path(), &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("data/Order.csv"));
}

#[test]
fn test_missing_profit_column() {
    let dir = workdir_with_orders("OrderID,CustomerID,OrderDate\nO1,C1,2020-01-01\n");
    let (stdout, stderr, success) = run_toporders_in(dir.path(), &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("TotalProfit"));
}

#[test]
fn test_non_numeric_profit() {
    let dir = workdir_with_orders(
        "OrderID,CustomerID,TotalProfit,OrderDate\nO1,C1,100,2020-01-01\nO2,C2,lots,2020-01-02\n",
    );
    let (stdout, stderr, success) = run_toporders_in(dir.path(), &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("non-numeric value 'lots'"));
    assert!(stderr.contains("line 3"));
}

#[test]
fn test_missing_value_markers_rank_last() {
    let dir = workdir_with_orders(
        "OrderID,CustomerID,TotalProfit,OrderDate\nO1,C1,NA,2020-01-01\nO2,C2,500,2020-01-02\n",
    );
    let (stdout, stderr, success) = run_toporders_in(dir.path(), &[]);

    assert!(success, "stderr: {stderr}");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[2].starts_with("     O2"));
    assert!(lines[3].starts_with("     O1"));
    assert!(lines[3].contains("NaN"));
}

#[test]
fn test_malformed_csv() {
    let dir = workdir_with_orders(
        "OrderID,CustomerID,TotalProfit,OrderDate\nO1,C1,100,2020-01-01,extra\n",
    );
    let (stdout, stderr, success) = run_toporders_in(dir.path(), &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("malformed CSV"));
}
