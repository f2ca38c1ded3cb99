use railway_anomaly::taxonomy::by_type_number;
use railway_anomaly::{ErrorKind, Family, ReportConfig, TaxonomyKind};
use railway_kernel::Either;
use serde_json::{Value, json};

pub fn kind_or_exit(type_number: u32) -> TaxonomyKind {
    by_type_number(type_number).unwrap_or_else(|| {
        eprintln!("error: no error kind with type number {type_number}");
        std::process::exit(1);
    })
}

pub fn parse_family_or_exit(family: &str) -> Family {
    family.parse().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn load_config_or_exit(path: Option<&str>) -> ReportConfig {
    let Some(path) = path else {
        return ReportConfig::default();
    };
    ReportConfig::load(path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

/// JSON when the text parses as JSON, otherwise the text as a string.
pub fn parse_value(raw: &str) -> Value {
    Either::from_result(serde_json::from_str::<Value>(raw))
        .or_else_get(|_| Value::String(raw.to_string()))
}

pub fn kind_payload(kind: TaxonomyKind) -> Value {
    json!({
        "code": kind.code(),
        "typeNumber": kind.type_number(),
        "family": kind.family(),
        "category": kind.category(),
        "severity": kind.severity(),
        "status": kind.suggested_status(),
        "template": kind.message_template(),
        "problemType": kind.problem_type(),
        "title": kind.problem_title(),
        "clientError": kind.is_client_error(),
        "retryable": kind.is_retryable(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_prefers_json() {
        assert_eq!(parse_value("42"), json!(42));
        assert_eq!(parse_value("{\"a\":1}"), json!({ "a": 1 }));
        assert_eq!(parse_value("\"quoted\""), json!("quoted"));
        assert_eq!(parse_value("Order"), json!("Order"));
    }
}
