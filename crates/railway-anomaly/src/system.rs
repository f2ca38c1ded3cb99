//! System errors: a taxonomy kind bound to the subject it failed on.
//!
//! A [`KindError`] pairs a kind with a subject (the parameter, rule or
//! resource concerned), the arguments its message template needs, the
//! offending value and an optional error id. [`SystemError`] closes over the
//! seven families so callers can match exhaustively.

use crate::error::Fault;
use crate::kind::{Category, ErrorKind, Family, Severity};
use crate::problem::ProblemReport;
use crate::taxonomy::{
    AuthorizationErrorKind, BusinessRuleErrorKind, InvariantErrorKind, ParameterErrorKind,
    PostconditionErrorKind, PreconditionErrorKind, ResourceErrorKind, TaxonomyKind,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindError<K> {
    subject: String,
    kind: K,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    context_args: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    actual_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_id: Option<String>,
}

pub type ParameterError = KindError<ParameterErrorKind>;
pub type PreconditionError = KindError<PreconditionErrorKind>;
pub type PostconditionError = KindError<PostconditionErrorKind>;
pub type BusinessRuleError = KindError<BusinessRuleErrorKind>;
pub type AuthorizationError = KindError<AuthorizationErrorKind>;
pub type ResourceError = KindError<ResourceErrorKind>;
pub type InvariantError = KindError<InvariantErrorKind>;

impl<K: ErrorKind> KindError<K> {
    pub fn new(subject: impl Into<String>, kind: K) -> Self {
        Self {
            subject: subject.into(),
            kind,
            context_args: Vec::new(),
            actual_value: None,
            error_id: None,
        }
    }

    pub fn with_context_args(mut self, args: impl IntoIterator<Item = Value>) -> Self {
        self.context_args = args.into_iter().collect();
        self
    }

    pub fn with_context_arg(mut self, arg: impl Into<Value>) -> Self {
        self.context_args.push(arg.into());
        self
    }

    pub fn with_actual_value(mut self, value: impl Into<Value>) -> Self {
        self.actual_value = Some(value.into());
        self
    }

    pub fn with_error_id(mut self, error_id: impl Into<String>) -> Self {
        self.error_id = Some(error_id.into());
        self
    }

    /// Attaches a fresh time-derived id, replacing any existing one.
    pub fn with_generated_id(self) -> Self {
        let error_id = self.kind.generate_error_id_now();
        self.with_error_id(error_id)
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn kind(&self) -> K {
        self.kind
    }

    pub fn context_args(&self) -> &[Value] {
        &self.context_args
    }

    pub fn actual_value(&self) -> Option<&Value> {
        self.actual_value.as_ref()
    }

    pub fn error_id(&self) -> Option<&str> {
        self.error_id.as_deref()
    }

    pub fn message(&self) -> String {
        qualified_message(self.kind, &self.subject, &self.context_args)
    }

    pub fn format(&self) -> String {
        format_line(
            self.kind.code(),
            self.error_id(),
            &self.message(),
            self.actual_value(),
            "actual value",
        )
    }

    pub fn to_problem_report(&self, instance: Option<&str>) -> ProblemReport {
        self.kind
            .to_problem_report(Some(self.message()), instance.map(str::to_string))
    }
}

impl<K: ErrorKind> fmt::Display for KindError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

fn qualified_message(kind: impl ErrorKind, subject: &str, args: &[Value]) -> String {
    kind.family().qualify(subject, &kind.format_message(args))
}

/// `[CODE|id] message (label: value)`, leaving out the id and the value
/// suffix when absent.
pub(crate) fn format_line(
    code: &str,
    error_id: Option<&str>,
    message: &str,
    value: Option<&Value>,
    value_label: &str,
) -> String {
    let mut line = match error_id {
        Some(id) => format!("[{code}|{id}] {message}"),
        None => format!("[{code}] {message}"),
    };
    if let Some(value) = value {
        line.push_str(&format!(" ({value_label}: {})", crate::format::render_any(value)));
    }
    line
}

fn args<const N: usize>(values: [Value; N]) -> Vec<Value> {
    values.into()
}

impl ParameterError {
    pub fn null_parameter(name: impl Into<String>) -> Self {
        Self::new(name, ParameterErrorKind::NullParameter)
    }

    /// `min` and `max` are the context args; `actual` is the recorded value.
    pub fn out_of_range(
        name: impl Into<String>,
        actual: impl Into<Value>,
        min: impl Into<Value>,
        max: impl Into<Value>,
    ) -> Self {
        Self::new(name, ParameterErrorKind::OutOfRange)
            .with_context_args(args([min.into(), max.into()]))
            .with_actual_value(actual)
    }

    pub fn invalid_format(name: impl Into<String>, actual: impl Into<Value>) -> Self {
        Self::new(name, ParameterErrorKind::InvalidFormat).with_actual_value(actual)
    }

    pub fn too_long(name: impl Into<String>, actual: impl Into<Value>, max: u64) -> Self {
        Self::new(name, ParameterErrorKind::TooLong)
            .with_context_arg(max)
            .with_actual_value(actual)
    }

    pub fn too_short(name: impl Into<String>, actual: impl Into<Value>, min: u64) -> Self {
        Self::new(name, ParameterErrorKind::TooShort)
            .with_context_arg(min)
            .with_actual_value(actual)
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, ParameterErrorKind::Empty)
    }

    pub fn unsupported_value(name: impl Into<String>, actual: impl Into<Value>) -> Self {
        Self::new(name, ParameterErrorKind::UnsupportedValue).with_actual_value(actual)
    }

    /// `description` names the conflicting parameters.
    pub fn invalid_combination(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, ParameterErrorKind::InvalidCombination).with_context_arg(description.into())
    }

    pub fn required(name: impl Into<String>) -> Self {
        Self::new(name, ParameterErrorKind::Required)
    }
}

impl PreconditionError {
    pub fn system_not_ready(reason: impl Into<String>) -> Self {
        Self::new("system", PreconditionErrorKind::SystemNotReady).with_context_arg(reason.into())
    }

    pub fn conflicting_state(subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(subject, PreconditionErrorKind::ConflictingState)
            .with_context_arg(description.into())
    }

    pub fn insufficient_permissions(subject: impl Into<String>, required: impl Into<String>) -> Self {
        Self::new(subject, PreconditionErrorKind::InsufficientPermissions)
            .with_context_arg(required.into())
    }

    pub fn resource_locked(resource_type: impl Into<String>, resource_id: impl Into<Value>) -> Self {
        let resource_type = resource_type.into();
        Self::new(resource_type.clone(), PreconditionErrorKind::ResourceLocked)
            .with_context_args(args([Value::String(resource_type), resource_id.into()]))
    }

    pub fn operation_not_allowed(operation: impl Into<String>, state: impl Into<String>) -> Self {
        let operation = operation.into();
        Self::new(operation.clone(), PreconditionErrorKind::OperationNotAllowed)
            .with_context_args(args([Value::String(operation), Value::String(state.into())]))
    }

    pub fn rate_limit_exceeded(subject: impl Into<String>, limit: impl Into<String>) -> Self {
        Self::new(subject, PreconditionErrorKind::RateLimitExceeded).with_context_arg(limit.into())
    }

    pub fn maintenance_mode(estimated_duration: impl Into<String>) -> Self {
        Self::new("system", PreconditionErrorKind::MaintenanceMode)
            .with_context_arg(estimated_duration.into())
    }

    pub fn dependency_unavailable(dependency: impl Into<String>) -> Self {
        let dependency = dependency.into();
        Self::new(dependency.clone(), PreconditionErrorKind::DependencyUnavailable)
            .with_context_arg(dependency)
    }

    pub fn failed(subject: impl Into<String>, condition: impl Into<String>) -> Self {
        Self::new(subject, PreconditionErrorKind::PreconditionFailed)
            .with_context_arg(condition.into())
    }
}

impl PostconditionError {
    pub fn expected_state_not_reached(subject: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::new(subject, PostconditionErrorKind::ExpectedStateNotReached)
            .with_context_arg(expected.into())
    }

    pub fn invariant_violated(subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(subject, PostconditionErrorKind::InvariantViolated)
            .with_context_arg(description.into())
    }

    pub fn side_effect_failed(subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(subject, PostconditionErrorKind::SideEffectFailed)
            .with_context_arg(description.into())
    }

    pub fn persistence_failed(entity: impl Into<String>, id: impl Into<Value>) -> Self {
        let entity = entity.into();
        Self::new(entity.clone(), PostconditionErrorKind::PersistenceFailed)
            .with_context_args(args([Value::String(entity), id.into()]))
    }

    pub fn notification_failed(channel: impl Into<String>, recipient: impl Into<String>) -> Self {
        let channel = channel.into();
        Self::new(channel.clone(), PostconditionErrorKind::NotificationFailed)
            .with_context_args(args([Value::String(channel), Value::String(recipient.into())]))
    }

    pub fn consistency_violated(subject: impl Into<String>, rule: impl Into<String>) -> Self {
        Self::new(subject, PostconditionErrorKind::ConsistencyViolated).with_context_arg(rule.into())
    }

    pub fn integration_failed(system: impl Into<String>, operation: impl Into<String>) -> Self {
        let system = system.into();
        Self::new(system.clone(), PostconditionErrorKind::IntegrationFailed)
            .with_context_args(args([Value::String(system), Value::String(operation.into())]))
    }

    pub fn transaction_rollback(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(subject, PostconditionErrorKind::TransactionRollback).with_context_arg(reason.into())
    }

    pub fn async_operation_failed(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(subject, PostconditionErrorKind::AsyncOperationFailed)
            .with_context_arg(reason.into())
    }

    pub fn resource_cleanup_failed(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(subject, PostconditionErrorKind::ResourceCleanupFailed)
            .with_context_arg(reason.into())
    }
}

impl BusinessRuleError {
    /// Context args are the account, the requested amount and the available balance.
    pub fn insufficient_funds(
        account: impl Into<String>,
        requested: impl Into<Value>,
        available: impl Into<Value>,
    ) -> Self {
        let account = account.into();
        Self::new("insufficient_funds", BusinessRuleErrorKind::InsufficientFunds)
            .with_context_args(args([Value::String(account), requested.into(), available.into()]))
    }

    /// The actual age is also recorded as the actual value.
    pub fn age_restriction(minimum_age: u32, actual_age: u32) -> Self {
        Self::new("age_restriction", BusinessRuleErrorKind::AgeRestriction)
            .with_context_args(args([minimum_age.into(), actual_age.into()]))
            .with_actual_value(actual_age)
    }
}

impl AuthorizationError {
    pub fn not_authenticated() -> Self {
        Self::new("authentication", AuthorizationErrorKind::NotAuthenticated)
    }

    pub fn insufficient_permissions(required: impl Into<String>) -> Self {
        Self::new("authorization", AuthorizationErrorKind::InsufficientPermissions)
            .with_context_arg(required.into())
    }
}

impl ResourceError {
    /// The id becomes the only context arg.
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<Value>) -> Self {
        Self::new(resource_type, ResourceErrorKind::NotFound).with_context_arg(id)
    }

    pub fn already_exists(resource_type: impl Into<String>, id: impl Into<Value>) -> Self {
        Self::new(resource_type, ResourceErrorKind::AlreadyExists).with_context_arg(id)
    }
}

impl InvariantError {
    pub fn object_consistency(subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(subject, InvariantErrorKind::ObjectConsistency)
            .with_context_arg(description.into())
    }

    pub fn data_corruption(subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(subject, InvariantErrorKind::DataCorruption).with_context_arg(description.into())
    }
}

/// A system error of any family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum SystemError {
    Parameter(ParameterError),
    Precondition(PreconditionError),
    Postcondition(PostconditionError),
    BusinessRule(BusinessRuleError),
    Authorization(AuthorizationError),
    Resource(ResourceError),
    Invariant(InvariantError),
}

macro_rules! each_family {
    ($value:expr, $error:ident => $body:expr) => {
        match $value {
            SystemError::Parameter($error) => $body,
            SystemError::Precondition($error) => $body,
            SystemError::Postcondition($error) => $body,
            SystemError::BusinessRule($error) => $body,
            SystemError::Authorization($error) => $body,
            SystemError::Resource($error) => $body,
            SystemError::Invariant($error) => $body,
        }
    };
}

macro_rules! rebuild_family {
    ($value:expr, $error:ident => $body:expr) => {
        match $value {
            SystemError::Parameter($error) => SystemError::Parameter($body),
            SystemError::Precondition($error) => SystemError::Precondition($body),
            SystemError::Postcondition($error) => SystemError::Postcondition($body),
            SystemError::BusinessRule($error) => SystemError::BusinessRule($body),
            SystemError::Authorization($error) => SystemError::Authorization($body),
            SystemError::Resource($error) => SystemError::Resource($body),
            SystemError::Invariant($error) => SystemError::Invariant($body),
        }
    };
}

impl SystemError {
    /// Builds the family error matching `kind`.
    pub fn assemble(
        subject: impl Into<String>,
        kind: impl Into<TaxonomyKind>,
        context_args: Vec<Value>,
        actual_value: Option<Value>,
    ) -> Self {
        fn build<K: ErrorKind>(
            subject: String,
            kind: K,
            context_args: Vec<Value>,
            actual_value: Option<Value>,
        ) -> KindError<K> {
            KindError {
                subject,
                kind,
                context_args,
                actual_value,
                error_id: None,
            }
        }

        let subject = subject.into();
        match kind.into() {
            TaxonomyKind::Parameter(k) => Self::Parameter(build(subject, k, context_args, actual_value)),
            TaxonomyKind::Precondition(k) => {
                Self::Precondition(build(subject, k, context_args, actual_value))
            }
            TaxonomyKind::Postcondition(k) => {
                Self::Postcondition(build(subject, k, context_args, actual_value))
            }
            TaxonomyKind::BusinessRule(k) => {
                Self::BusinessRule(build(subject, k, context_args, actual_value))
            }
            TaxonomyKind::Authorization(k) => {
                Self::Authorization(build(subject, k, context_args, actual_value))
            }
            TaxonomyKind::Resource(k) => Self::Resource(build(subject, k, context_args, actual_value)),
            TaxonomyKind::Invariant(k) => Self::Invariant(build(subject, k, context_args, actual_value)),
        }
    }

    pub fn kind(&self) -> TaxonomyKind {
        each_family!(self, error => error.kind().into())
    }

    pub fn family(&self) -> Family {
        self.kind().family()
    }

    pub fn subject(&self) -> &str {
        each_family!(self, error => error.subject())
    }

    pub fn context_args(&self) -> &[Value] {
        each_family!(self, error => error.context_args())
    }

    pub fn actual_value(&self) -> Option<&Value> {
        each_family!(self, error => error.actual_value())
    }

    pub fn error_id(&self) -> Option<&str> {
        each_family!(self, error => error.error_id())
    }

    pub fn with_error_id(self, error_id: impl Into<String>) -> Self {
        let error_id = error_id.into();
        rebuild_family!(self, error => error.with_error_id(error_id))
    }

    pub fn with_generated_id(self) -> Self {
        rebuild_family!(self, error => error.with_generated_id())
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    pub fn category(&self) -> Category {
        self.kind().category()
    }

    pub fn severity(&self) -> Severity {
        self.kind().severity()
    }

    pub fn suggested_status(&self) -> u16 {
        self.kind().suggested_status()
    }

    pub fn is_client_error(&self) -> bool {
        self.kind().is_client_error()
    }

    pub fn is_server_error(&self) -> bool {
        self.kind().is_server_error()
    }

    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }

    pub fn message(&self) -> String {
        each_family!(self, error => error.message())
    }

    pub fn format(&self) -> String {
        each_family!(self, error => error.format())
    }

    pub fn to_problem_report(&self, instance: Option<&str>) -> ProblemReport {
        each_family!(self, error => error.to_problem_report(instance))
    }

    pub fn into_fault(self) -> Fault {
        Fault::from_error(self)
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl std::error::Error for SystemError {}

macro_rules! family_from {
    ($($variant:ident($error:ty)),+ $(,)?) => {
        $(
            impl From<$error> for SystemError {
                fn from(error: $error) -> Self {
                    Self::$variant(error)
                }
            }
        )+
    };
}

family_from! {
    Parameter(ParameterError),
    Precondition(PreconditionError),
    Postcondition(PostconditionError),
    BusinessRule(BusinessRuleError),
    Authorization(AuthorizationError),
    Resource(ResourceError),
    Invariant(InvariantError),
}
