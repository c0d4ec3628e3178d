//! Integration tests for export pre-flight validation and output.

use eventlens::core::pagination::PageRequest;
use eventlens::core::record::{ResultEntry, Row};
use eventlens::core::render_pass::SecurityViewPipeline;
use eventlens::export::csv_export::{export_csv, validate_export_path};
use eventlens::export::json_export::export_json;
use std::path::PathBuf;

fn entries() -> Vec<ResultEntry> {
    vec![
        ResultEntry::new(
            "SecurityEvents",
            [("EventID", "4625"), ("TargetUserName", "alice")]
                .into_iter()
                .collect::<Row>(),
        ),
        ResultEntry::new(
            "SecurityEvents",
            [("EventID", "4740"), ("Note", "a,b")].into_iter().collect::<Row>(),
        ),
    ]
}

#[test]
fn validate_export_path_valid_directory() {
    let path = std::env::temp_dir().join("eventlens_test_export.csv");
    let result = validate_export_path(&path);
    assert!(result.is_ok(), "Temp dir should be writable: {result:?}");
}

#[test]
fn validate_export_path_nonexistent_directory() {
    let path = std::env::temp_dir()
        .join("eventlens_nonexistent_dir_12345")
        .join("output.csv");
    let result = validate_export_path(&path);
    assert!(result.is_err(), "Non-existent dir should fail");
    let msg = result.unwrap_err().to_string();
    assert!(
        msg.contains("does not exist"),
        "Should indicate dir missing: {msg}"
    );
}

#[test]
fn validate_export_path_bare_file_name() {
    assert!(validate_export_path(&PathBuf::from("just_a_filename.csv")).is_ok());
}

#[test]
fn csv_export_writes_union_columns() {
    let entries = entries();
    let refs: Vec<&ResultEntry> = entries.iter().collect();
    let path = std::env::temp_dir().join("eventlens_csv_export_test.csv");
    export_csv(&refs, &path).expect("export");

    let written = std::fs::read_to_string(&path).expect("read back");
    let _ = std::fs::remove_file(&path);
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "Index,EventID,TargetUserName,Note");
    assert_eq!(lines[1], "SecurityEvents,4625,alice,");
    assert_eq!(lines[2], "SecurityEvents,4740,,\"a,b\"");
}

#[test]
fn json_export_writes_plan() {
    let entries = entries();
    let plan = SecurityViewPipeline::default().plan(1, &entries, PageRequest::new(1, 10));
    let path = std::env::temp_dir().join("eventlens_json_export_test.json");
    export_json(&plan, &path).expect("export");

    let written = std::fs::read_to_string(&path).expect("read back");
    let _ = std::fs::remove_file(&path);
    let value: serde_json::Value = serde_json::from_str(&written).expect("valid json");
    assert_eq!(value["view"], "cards");
    assert_eq!(value["summary"]["displayed_count"], 2);
    assert_eq!(value["cards"][1]["label"], "Account Locked Out");
}
