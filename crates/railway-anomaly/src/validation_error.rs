//! A failed check on one field of an input.

use crate::kind::ErrorKind;
use crate::problem::ProblemReport;
use crate::system::format_line;
use crate::taxonomy::{ParameterErrorKind, TaxonomyKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    field_path: String,
    kind: TaxonomyKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    context_args: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rejected_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_id: Option<String>,
}

impl ValidationError {
    pub fn new(field_path: impl Into<String>, kind: impl Into<TaxonomyKind>) -> Self {
        Self {
            field_path: field_path.into(),
            kind: kind.into(),
            context_args: Vec::new(),
            rejected_value: None,
            error_id: None,
        }
    }

    /// A missing required field. Carries no rejected value.
    pub fn required(field_path: impl Into<String>) -> Self {
        Self::new(field_path, ParameterErrorKind::Required)
    }

    pub fn invalid_format(field_path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field_path, ParameterErrorKind::InvalidFormat).with_rejected_value(value)
    }

    /// `max_length` is the context arg; `value` is the rejected value.
    pub fn too_long(field_path: impl Into<String>, value: impl Into<Value>, max_length: usize) -> Self {
        Self::new(field_path, ParameterErrorKind::TooLong)
            .with_context_args([Value::from(max_length)])
            .with_rejected_value(value)
    }

    pub fn too_short(field_path: impl Into<String>, value: impl Into<Value>, min_length: usize) -> Self {
        Self::new(field_path, ParameterErrorKind::TooShort)
            .with_context_args([Value::from(min_length)])
            .with_rejected_value(value)
    }

    pub fn out_of_range(
        field_path: impl Into<String>,
        value: impl Into<Value>,
        min: impl Into<Value>,
        max: impl Into<Value>,
    ) -> Self {
        Self::new(field_path, ParameterErrorKind::OutOfRange)
            .with_context_args([min.into(), max.into()])
            .with_rejected_value(value)
    }

    pub fn with_context_args(mut self, args: impl IntoIterator<Item = Value>) -> Self {
        self.context_args = args.into_iter().collect();
        self
    }

    pub fn with_rejected_value(mut self, value: impl Into<Value>) -> Self {
        self.rejected_value = Some(value.into());
        self
    }

    pub fn with_error_id(mut self, error_id: impl Into<String>) -> Self {
        self.error_id = Some(error_id.into());
        self
    }

    pub fn with_generated_id(self) -> Self {
        let error_id = self.kind.generate_error_id_now();
        self.with_error_id(error_id)
    }

    pub fn field_path(&self) -> &str {
        &self.field_path
    }

    pub fn kind(&self) -> TaxonomyKind {
        self.kind
    }

    pub fn context_args(&self) -> &[Value] {
        &self.context_args
    }

    pub fn rejected_value(&self) -> Option<&Value> {
        self.rejected_value.as_ref()
    }

    pub fn error_id(&self) -> Option<&str> {
        self.error_id.as_deref()
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn type_number(&self) -> u32 {
        self.kind.type_number()
    }

    pub fn suggested_status(&self) -> u16 {
        self.kind.suggested_status()
    }

    /// The formatted message, without the field path.
    pub fn message(&self) -> String {
        self.kind.format_message(&self.context_args)
    }

    pub fn format(&self) -> String {
        format_line(
            self.code(),
            self.error_id(),
            &format!("{}: {}", self.field_path, self.message()),
            self.rejected_value(),
            "rejected value",
        )
    }

    pub fn to_problem_report(&self) -> ProblemReport {
        self.kind.to_problem_report(
            Some(format!("{}: {}", self.field_path, self.message())),
            None,
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl std::error::Error for ValidationError {}
