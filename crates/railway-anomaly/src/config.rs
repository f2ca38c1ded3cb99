//! How system errors and validation failures are rendered as problem
//! reports.
//!
//! ```toml
//! generate_missing_ids = true
//! instance_base = "https://api.example.com/errors"
//! expose_values = false
//!
//! [validation]
//! title = "Invalid Request"
//! ```

use crate::accumulate::{
    AccumulatingResult, VALIDATION_PROBLEM_STATUS, VALIDATION_PROBLEM_TITLE,
    VALIDATION_PROBLEM_TYPE,
};
use crate::error::AnomalyError;
use crate::problem::ProblemReport;
use crate::system::SystemError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Stamp a time-derived error id on errors that carry none.
    pub generate_missing_ids: bool,
    /// Use the error id as the report instance when no instance is given.
    pub instance_from_error_id: bool,
    /// Prefix for relative instances.
    pub instance_base: Option<String>,
    /// Put the full formatted line, actual value included, in the detail.
    pub expose_values: bool,
    pub validation: ValidationReportConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            generate_missing_ids: false,
            instance_from_error_id: false,
            instance_base: None,
            expose_values: false,
            validation: ValidationReportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationReportConfig {
    pub problem_type: String,
    pub title: String,
    pub status: u16,
}

impl Default for ValidationReportConfig {
    fn default() -> Self {
        Self {
            problem_type: VALIDATION_PROBLEM_TYPE.to_string(),
            title: VALIDATION_PROBLEM_TITLE.to_string(),
            status: VALIDATION_PROBLEM_STATUS,
        }
    }
}

impl ReportConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, AnomalyError> {
        parse(text, "<inline>")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AnomalyError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| AnomalyError::ReadConfig {
            path: shown.clone(),
            source,
        })?;
        let config = parse(&text, &shown)?;
        tracing::debug!(path = %shown, "loaded report config");
        Ok(config)
    }

    pub fn render(&self, error: &SystemError, instance: Option<&str>) -> ProblemReport {
        let error = if self.generate_missing_ids && error.error_id().is_none() {
            error.clone().with_generated_id()
        } else {
            error.clone()
        };
        let detail = if self.expose_values {
            error.format()
        } else {
            error.message()
        };
        let instance = self.resolve_instance(instance, error.error_id());
        tracing::trace!(code = error.code(), instance = ?instance, "rendering problem report");
        error
            .to_problem_report(None)
            .with_detail(detail)
            .with_instance_opt(instance)
    }

    /// `None` for a success.
    pub fn render_validation<T>(&self, result: &AccumulatingResult<T>) -> Option<ProblemReport> {
        result.to_problem_report_with(
            &self.validation.problem_type,
            &self.validation.title,
            self.validation.status,
        )
    }

    fn resolve_instance(&self, instance: Option<&str>, error_id: Option<&str>) -> Option<String> {
        let instance = instance.or(if self.instance_from_error_id {
            error_id
        } else {
            None
        })?;
        if is_absolute(instance) {
            return Some(instance.to_string());
        }
        match &self.instance_base {
            Some(base) => Some(format!(
                "{}/{}",
                base.trim_end_matches('/'),
                instance.trim_start_matches('/')
            )),
            None => Some(instance.to_string()),
        }
    }
}

fn parse(text: &str, path: &str) -> Result<ReportConfig, AnomalyError> {
    toml::from_str(text).map_err(|source| AnomalyError::ParseConfig {
        path: path.to_string(),
        source,
    })
}

fn is_absolute(instance: &str) -> bool {
    instance.contains("://") || instance.starts_with("urn:")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::{ParameterError, ResourceError};
    use crate::validation_error::ValidationError;

    fn not_found() -> SystemError {
        ResourceError::not_found("Order", 42).into()
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config = ReportConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.validation.status, 400);
    }

    #[test]
    fn partial_validation_section_keeps_other_defaults() {
        let config = ReportConfig::from_toml_str(
            r#"
            expose_values = true

            [validation]
            title = "Invalid Request"
            "#,
        )
        .expect("config");
        assert!(config.expose_values);
        assert_eq!(config.validation.title, "Invalid Request");
        assert_eq!(config.validation.problem_type, VALIDATION_PROBLEM_TYPE);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let error = ReportConfig::from_toml_str("expose_values = 3").expect_err("bad type");
        assert!(matches!(error, AnomalyError::ParseConfig { ref path, .. } if path == "<inline>"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let error = ReportConfig::load("/nonexistent/railway/report.toml").expect_err("missing");
        assert!(matches!(error, AnomalyError::ReadConfig { .. }));
        assert!(error.to_string().starts_with("failed to read report config: /nonexistent"));
    }

    #[test]
    fn load_reads_config_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "railway-report-config-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "generate_missing_ids = true\n[validation]\nstatus = 422\n")
            .expect("config should be written");
        let loaded = ReportConfig::load(&path);
        let _ = fs::remove_file(&path);

        let config = loaded.expect("config loads");
        assert!(config.generate_missing_ids);
        assert_eq!(config.validation.status, 422);
    }

    #[test]
    fn detail_hides_values_unless_exposed() {
        let error: SystemError = ParameterError::unsupported_value("mode", "turbo").into();
        let hidden = ReportConfig::default().render(&error, None);
        assert_eq!(hidden.detail.as_deref(), Some("mode: Parameter value is not supported"));

        let config = ReportConfig {
            expose_values: true,
            ..ReportConfig::default()
        };
        let shown = config.render(&error, None);
        assert_eq!(
            shown.detail.as_deref(),
            Some("[UNSUPPORTED_VALUE] mode: Parameter value is not supported (actual value: turbo)")
        );
    }

    #[test]
    fn relative_instances_join_the_base() {
        let config = ReportConfig {
            instance_base: Some("https://api.example.com/errors/".into()),
            ..ReportConfig::default()
        };
        let report = config.render(&not_found(), Some("/orders/42"));
        assert_eq!(
            report.instance.as_deref(),
            Some("https://api.example.com/errors/orders/42")
        );
        let report = config.render(&not_found(), Some("urn:order:42"));
        assert_eq!(report.instance.as_deref(), Some("urn:order:42"));
    }

    #[test]
    fn error_id_can_stand_in_for_instance() {
        let config = ReportConfig {
            generate_missing_ids: true,
            instance_from_error_id: true,
            ..ReportConfig::default()
        };
        let report = config.render(&not_found(), None);
        assert!(report.instance.is_some_and(|id| id.starts_with("6001-")));

        let report = ReportConfig::default().render(&not_found().with_error_id("6001-9"), None);
        assert_eq!(report.instance, None);
        assert_eq!(report.status, Some(404));
    }

    #[test]
    fn validation_reports_use_configured_envelope() {
        let config = ReportConfig::from_toml_str("[validation]\nstatus = 422").expect("config");
        let failed: AccumulatingResult<()> = AccumulatingResult::failure(ValidationError::required("email"));
        let report = config.render_validation(&failed).expect("failure report");
        assert_eq!(report.status, Some(422));
        assert_eq!(report.detail.as_deref(), Some("email: Required field is missing"));
        assert_eq!(config.render_validation(&AccumulatingResult::success(1)), None);
    }
}
