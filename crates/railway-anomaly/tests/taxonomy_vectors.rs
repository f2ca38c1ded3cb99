//! Integration tests: render taxonomy errors from fixture vectors.
//!
//! Each fixture in tests/fixtures/ has:
//! - case.json: a type number, subject, context arguments and optional
//!   actual value, error id and report instance
//! - expect.json: the expected code, classification, message, formatted
//!   line and problem report

use railway_anomaly::SystemError;
use railway_anomaly::taxonomy::by_type_number;
use serde_json::{Value, json};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn read_json(path: &PathBuf) -> Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()))
}

fn run_fixture(name: &str) {
    let dir = fixtures_dir().join(name);
    let case = read_json(&dir.join("case.json"));
    let expected = read_json(&dir.join("expect.json"));

    let type_number = case["type_number"].as_u64().expect("missing type_number") as u32;
    let kind = by_type_number(type_number).unwrap_or_else(|| panic!("unknown kind: {type_number}"));
    let subject = case["subject"].as_str().expect("missing subject");
    let context_args = case["context_args"].as_array().cloned().unwrap_or_default();
    let actual_value = case.get("actual_value").cloned();

    let mut error = SystemError::assemble(subject, kind, context_args, actual_value);
    if let Some(error_id) = case["error_id"].as_str() {
        error = error.with_error_id(error_id);
    }
    let report = error.to_problem_report(case["instance"].as_str());

    let result = json!({
        "code": error.code(),
        "family": error.family(),
        "category": error.category(),
        "severity": error.severity(),
        "message": error.message(),
        "format": error.format(),
        "report": report,
    });

    assert_eq!(
        result,
        expected,
        "\n\nFixture: {name}\n\nGot:\n{}\n\nExpected:\n{}\n",
        serde_json::to_string_pretty(&result).expect("json"),
        serde_json::to_string_pretty(&expected).expect("json"),
    );
}

#[test]
fn resource_locked_with_error_id() {
    run_fixture("resource_locked_with_error_id");
}

#[test]
fn business_rule_insufficient_funds() {
    run_fixture("business_rule_insufficient_funds");
}

#[test]
fn invariant_data_corruption() {
    run_fixture("invariant_data_corruption");
}

#[test]
fn template_mismatch_falls_back() {
    run_fixture("template_mismatch_falls_back");
}

#[test]
fn authorization_not_authenticated() {
    run_fixture("authorization_not_authenticated");
}
