//! Error kinds: what broke, and how to report it.
//!
//! Every kind belongs to one [`Family`] and carries a static
//! [`KindDescriptor`]. The [`ErrorKind`] trait derives everything else
//! (severity, message formatting, error ids, problem reports) from those two.

use crate::error::AnomalyError;
use crate::format;
use crate::problem::ProblemReport;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Validation,
    Security,
    BusinessLogic,
    Resource,
    ExternalService,
    System,
    RateLimit,
    Configuration,
    Contract,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION",
            Self::Security => "SECURITY",
            Self::BusinessLogic => "BUSINESS_LOGIC",
            Self::Resource => "RESOURCE",
            Self::ExternalService => "EXTERNAL_SERVICE",
            Self::System => "SYSTEM",
            Self::RateLimit => "RATE_LIMIT",
            Self::Configuration => "CONFIGURATION",
            Self::Contract => "CONTRACT",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// The seven families of the taxonomy. The family fixes the type-number
/// block, the default severity and the message qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Parameter,
    Precondition,
    Postcondition,
    BusinessRule,
    Authorization,
    Resource,
    Invariant,
}

impl Family {
    pub const ALL: [Self; 7] = [
        Self::Parameter,
        Self::Precondition,
        Self::Postcondition,
        Self::BusinessRule,
        Self::Authorization,
        Self::Resource,
        Self::Invariant,
    ];

    /// First type number of the family's block (1000, 2000, ...).
    pub const fn block(self) -> u32 {
        match self {
            Self::Parameter => 1000,
            Self::Precondition => 2000,
            Self::Postcondition => 3000,
            Self::BusinessRule => 4000,
            Self::Authorization => 5000,
            Self::Resource => 6000,
            Self::Invariant => 7000,
        }
    }

    /// Broken postconditions and invariants are programming errors and
    /// always critical.
    pub const fn severity_for(self, status: u16) -> Severity {
        match self {
            Self::Postcondition | Self::Invariant => Severity::Critical,
            _ if status >= 500 => Severity::Error,
            _ => Severity::Warning,
        }
    }

    /// Prefixes a formatted message with its subject.
    pub fn qualify(self, subject: &str, message: &str) -> String {
        match self {
            Self::BusinessRule => format!("Business rule '{subject}': {message}"),
            Self::Authorization => format!("Authorization: {message}"),
            Self::Invariant => format!("Invariant '{subject}': {message}"),
            _ => format!("{subject}: {message}"),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parameter => "parameter",
            Self::Precondition => "precondition",
            Self::Postcondition => "postcondition",
            Self::BusinessRule => "business_rule",
            Self::Authorization => "authorization",
            Self::Resource => "resource",
            Self::Invariant => "invariant",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = AnomalyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == normalized)
            .ok_or_else(|| AnomalyError::UnknownFamily(s.to_string()))
    }
}

/// Static metadata of one taxonomy member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDescriptor {
    pub code: &'static str,
    pub type_number: u32,
    pub template: &'static str,
    pub status: u16,
    pub problem_type: &'static str,
    pub title: &'static str,
    pub category: Category,
}

pub trait ErrorKind: Copy {
    fn family(&self) -> Family;

    fn descriptor(&self) -> &'static KindDescriptor;

    fn code(&self) -> &'static str {
        self.descriptor().code
    }

    fn type_number(&self) -> u32 {
        self.descriptor().type_number
    }

    fn message_template(&self) -> &'static str {
        self.descriptor().template
    }

    fn suggested_status(&self) -> u16 {
        self.descriptor().status
    }

    fn problem_type(&self) -> &'static str {
        self.descriptor().problem_type
    }

    fn problem_title(&self) -> &'static str {
        self.descriptor().title
    }

    fn category(&self) -> Category {
        self.descriptor().category
    }

    fn severity(&self) -> Severity {
        self.family().severity_for(self.suggested_status())
    }

    fn is_client_error(&self) -> bool {
        self.suggested_status() < 500
    }

    fn is_server_error(&self) -> bool {
        self.suggested_status() >= 500
    }

    fn is_retryable(&self) -> bool {
        self.is_server_error()
    }

    /// Fills the template with `args`. Without arguments, or when the
    /// arguments do not fit the template, the raw template is returned.
    fn format_message(&self, args: &[Value]) -> String {
        let template = self.message_template();
        if args.is_empty() {
            return template.to_string();
        }
        format::substitute(template, args).unwrap_or_else(|| template.to_string())
    }

    fn generate_error_id(&self, instance_id: u64) -> String {
        format!("{}-{instance_id}", self.type_number())
    }

    fn generate_error_id_now(&self) -> String {
        self.generate_error_id(next_instance_id())
    }

    fn to_problem_report(&self, detail: Option<String>, instance: Option<String>) -> ProblemReport {
        ProblemReport::new(self.problem_type())
            .with_title(self.problem_title())
            .with_status(self.suggested_status())
            .with_detail_opt(detail)
            .with_instance_opt(instance)
    }
}

static LAST_INSTANCE_ID: AtomicU64 = AtomicU64::new(0);

/// Time-derived instance id, strictly increasing within the process.
///
/// Uses the wall clock in milliseconds, bumped past the previous id when
/// two calls land in the same millisecond or the clock steps back.
pub fn next_instance_id() -> u64 {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let previous = LAST_INSTANCE_ID
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or_else(|last| last);
    now.max(previous + 1)
}
