//! Machine-readable problem reports (`type`, `title`, `status`, `detail`,
//! `instance`), with absent fields omitted on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemReport {
    #[serde(rename = "type")]
    pub problem_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemReport {
    pub const ABOUT_BLANK: &'static str = "about:blank";

    pub fn new(problem_type: impl Into<String>) -> Self {
        Self {
            problem_type: problem_type.into(),
            title: None,
            status: None,
            detail: None,
            instance: None,
        }
    }

    pub fn about_blank() -> Self {
        Self::new(Self::ABOUT_BLANK)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_detail_opt(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    pub fn with_instance_opt(mut self, instance: Option<String>) -> Self {
        self.instance = instance;
        self
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}

impl fmt::Display for ProblemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.status {
            write!(f, "{status} ")?;
        }
        write!(f, "{}", self.title.as_deref().unwrap_or(&self.problem_type))?;
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let report = ProblemReport::about_blank().with_status(404);
        let json = serde_json::to_string(&report).expect("serialize");
        assert_eq!(json, r#"{"type":"about:blank","status":404}"#);
    }

    #[test]
    fn reads_reports_with_missing_fields() {
        let report: ProblemReport =
            serde_json::from_str(r#"{"type":"about:blank","detail":"gone"}"#).expect("deserialize");
        assert_eq!(report.detail.as_deref(), Some("gone"));
        assert_eq!(report.status, None);
    }

    #[test]
    fn display_is_one_line_summary() {
        let report = ProblemReport::new("urn:x")
            .with_title("Not Found")
            .with_status(404)
            .with_detail("order: missing");
        assert_eq!(report.to_string(), "404 Not Found: order: missing");
        assert_eq!(ProblemReport::new("urn:x").to_string(), "urn:x");
    }
}
