use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "railway-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_railway<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_railway");
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("railway command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_failure(output: &Output) {
    if output.status.success() {
        panic!(
            "command unexpectedly succeeded\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "expected valid JSON stdout, got error: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn kinds_json_lists_whole_taxonomy() {
    let output = run_railway(["kinds", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["count"], 36);
    assert_eq!(payload["kinds"][0]["code"], "NULL_PARAMETER");
    assert_eq!(payload["kinds"][0]["typeNumber"], 1001);
    assert_eq!(payload["kinds"][35]["code"], "DATA_CORRUPTION");
}

#[test]
fn kinds_filters_by_family() {
    let output = run_railway(["kinds", "--family", "business-rule", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["count"], 2);
    assert_eq!(payload["kinds"][1]["code"], "AGE_RESTRICTION");

    let output = run_railway(["kinds", "--family", "resource"]);
    assert_success(&output);
    let text = stdout_text(&output);
    assert!(text.contains("NOT_FOUND"));
    assert!(text.contains("2 kind(s)"));
}

#[test]
fn kinds_rejects_unknown_family() {
    let output = run_railway(["kinds", "--family", "weather"]);
    assert_failure(&output);
    assert!(stderr_text(&output).contains("unknown error family: weather"));
}

#[test]
fn describe_reports_kind_metadata() {
    let output = run_railway(["describe", "2004", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["code"], "RESOURCE_LOCKED");
    assert_eq!(payload["status"], 423);
    assert_eq!(payload["category"], "RESOURCE");
    assert_eq!(payload["family"], "precondition");
    assert_eq!(payload["arity"], 2);
    assert_eq!(payload["retryable"], false);

    let output = run_railway(["describe", "9999"]);
    assert_failure(&output);
    assert!(stderr_text(&output).contains("no error kind with type number 9999"));
}

#[test]
fn render_prints_problem_report() {
    let output = run_railway([
        "render",
        "6001",
        "--subject",
        "Order",
        "--arg",
        "42",
        "--instance",
        "/orders/42",
    ]);
    assert_success(&output);
    let report = parse_json_stdout(&output);
    assert_eq!(report["type"], "https://tools.ietf.org/html/rfc7231#section-6.5.4");
    assert_eq!(report["title"], "Not Found");
    assert_eq!(report["status"], 404);
    assert_eq!(report["detail"], "Order: Resource with ID 42 not found");
    assert_eq!(report["instance"], "/orders/42");
}

#[test]
fn render_line_includes_actual_value_and_id() {
    let output = run_railway([
        "render",
        "1002",
        "--subject",
        "age",
        "--arg",
        "0",
        "--arg",
        "120",
        "--actual",
        "150",
        "--error-id",
        "1002-9",
        "--line",
    ]);
    assert_success(&output);
    assert_eq!(
        stdout_text(&output).trim_end(),
        "[OUT_OF_RANGE|1002-9] age: Parameter value must be between 0 and 120 (actual value: 150)"
    );
}

#[test]
fn render_applies_report_config() {
    let tmp = TempDirGuard::new("render-config");
    let config_path = tmp.path().join("report.toml");
    fs::write(
        &config_path,
        "expose_values = true\ninstance_base = \"https://api.example.com/errors\"\n",
    )
    .expect("config should be written");

    let output = run_railway([
        "render",
        "6001",
        "--subject",
        "Order",
        "--arg",
        "42",
        "--actual",
        "\"ord-42\"",
        "--instance",
        "orders/42",
        "--config",
        config_path.to_str().expect("utf-8 temp path"),
    ]);
    assert_success(&output);
    let report = parse_json_stdout(&output);
    assert_eq!(report["instance"], "https://api.example.com/errors/orders/42");
    assert_eq!(
        report["detail"],
        "[NOT_FOUND] Order: Resource with ID 42 not found (actual value: ord-42)"
    );
}

#[test]
fn render_fails_on_invalid_config() {
    let tmp = TempDirGuard::new("bad-config");
    let config_path = tmp.path().join("report.toml");
    fs::write(&config_path, "expose_values = \"sometimes\"\n").expect("config should be written");

    let output = run_railway([
        "render",
        "6001",
        "--subject",
        "Order",
        "--config",
        config_path.to_str().expect("utf-8 temp path"),
    ]);
    assert_failure(&output);
    assert!(stderr_text(&output).contains("invalid toml at"));
}

#[test]
fn error_id_combines_type_number_and_instance() {
    let output = run_railway(["error-id", "6001", "--instance", "42"]);
    assert_success(&output);
    assert_eq!(stdout_text(&output).trim_end(), "6001-42");

    let output = run_railway(["error-id", "3004"]);
    assert_success(&output);
    assert!(stdout_text(&output).starts_with("3004-"));
}
