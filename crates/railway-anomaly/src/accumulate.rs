//! Error-accumulating results.
//!
//! Unlike `Either`, combining two failed [`AccumulatingResult`]s keeps the
//! errors of both. Use it for independent checks (form fields, batch items)
//! where the caller wants every failure at once.

use crate::error::AnomalyError;
use crate::kind::ErrorKind;
use crate::problem::ProblemReport;
use crate::validation_error::ValidationError;
use railway_kernel::{Either, Maybe, NonEmpty, TriBool, Validation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const VALIDATION_PROBLEM_TYPE: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.1";
pub const VALIDATION_PROBLEM_TITLE: &str = "Validation Error";
pub const VALIDATION_PROBLEM_STATUS: u16 = 400;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccumulatingResult<T> {
    Success(T),
    Failure(NonEmpty<ValidationError>),
}

impl<T> AccumulatingResult<T> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn failure(error: ValidationError) -> Self {
        Self::Failure(NonEmpty::new(error))
    }

    /// Fails with `errors`, which must not be empty.
    pub fn failures(errors: Vec<ValidationError>) -> Result<Self, AnomalyError> {
        NonEmpty::from_vec(errors)
            .map(Self::Failure)
            .ok_or(AnomalyError::EmptyFailure)
    }

    pub fn from_errors(errors: NonEmpty<ValidationError>) -> Self {
        Self::Failure(errors)
    }

    /// Lifts a single validation, mapping its error into a [`ValidationError`].
    pub fn from_validation<I>(
        validation: Validation<I, T>,
        mapper: impl FnOnce(I) -> ValidationError,
    ) -> Self {
        validation.fold(|error| Self::failure(mapper(error)), Self::Success)
    }

    pub fn is_success(&self) -> TriBool {
        TriBool::of(matches!(self, Self::Success(_)))
    }

    pub fn is_failure(&self) -> TriBool {
        TriBool::of(matches!(self, Self::Failure(_)))
    }

    pub fn value(&self) -> Maybe<&T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Empty on success.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(errors) => errors.as_slice(),
        }
    }

    pub fn fold<U>(
        self,
        on_failure: impl FnOnce(NonEmpty<ValidationError>) -> U,
        on_success: impl FnOnce(T) -> U,
    ) -> U {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(errors) => on_failure(errors),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AccumulatingResult<U> {
        match self {
            Self::Success(value) => AccumulatingResult::Success(f(value)),
            Self::Failure(errors) => AccumulatingResult::Failure(errors),
        }
    }

    pub fn flat_map<U>(self, f: impl FnOnce(T) -> AccumulatingResult<U>) -> AccumulatingResult<U> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(errors) => AccumulatingResult::Failure(errors),
        }
    }

    /// Both successes combine their payloads; otherwise the errors of both
    /// operands are concatenated, `self`'s first.
    pub fn combine<U, V>(
        self,
        other: AccumulatingResult<U>,
        combiner: impl FnOnce(T, U) -> V,
    ) -> AccumulatingResult<V> {
        match (self, other) {
            (Self::Success(a), AccumulatingResult::Success(b)) => {
                AccumulatingResult::Success(combiner(a, b))
            }
            (Self::Failure(left), AccumulatingResult::Failure(right)) => {
                AccumulatingResult::Failure(left.append(right))
            }
            (Self::Failure(errors), _) | (_, AccumulatingResult::Failure(errors)) => {
                AccumulatingResult::Failure(errors)
            }
        }
    }

    /// Runs a further check on the success value, keeping the value when
    /// the check passes.
    pub fn validate(self, check: impl FnOnce(&T) -> AccumulatingResult<()>) -> Self {
        match self {
            Self::Success(value) => match check(&value) {
                AccumulatingResult::Success(()) => Self::Success(value),
                AccumulatingResult::Failure(errors) => Self::Failure(errors),
            },
            failure => failure,
        }
    }

    pub fn validate_that(
        self,
        predicate: impl FnOnce(&T) -> bool,
        error: impl FnOnce() -> ValidationError,
    ) -> Self {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::failure(error())
                }
            }
            failure => failure,
        }
    }

    pub fn into_either(self) -> Either<NonEmpty<ValidationError>, T> {
        self.fold(Either::Left, Either::Right)
    }

    /// Failures collapse into one `; `-separated line of formatted errors.
    pub fn to_either_message(self) -> Either<String, T> {
        self.into_either().map_left(|errors| {
            errors
                .iter()
                .map(ValidationError::format)
                .collect::<Vec<_>>()
                .join("; ")
        })
    }

    /// Back to fail-fast: only the first error survives.
    pub fn to_first_error_validation(self) -> Validation<ValidationError, T> {
        match self {
            Self::Success(value) => Validation::Valid(value),
            Self::Failure(errors) => Validation::Invalid(errors.into_vec().swap_remove(0)),
        }
    }

    /// A report with the default validation problem type, or `None` on
    /// success.
    pub fn to_problem_report(&self) -> Option<ProblemReport> {
        self.to_problem_report_with(
            VALIDATION_PROBLEM_TYPE,
            VALIDATION_PROBLEM_TITLE,
            VALIDATION_PROBLEM_STATUS,
        )
    }

    pub fn to_problem_report_with(
        &self,
        problem_type: &str,
        title: &str,
        status: u16,
    ) -> Option<ProblemReport> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(
                ProblemReport::new(problem_type)
                    .with_title(title)
                    .with_status(status)
                    .with_detail(detail_lines(errors)),
            ),
        }
    }

    /// A report typed after the first error's kind, with every error in
    /// the detail.
    pub fn to_problem_report_from_kind(&self) -> Option<ProblemReport> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => {
                let kind = errors.head().kind();
                Some(kind.to_problem_report(Some(detail_lines(errors)), None))
            }
        }
    }

    pub fn group_by_status(&self) -> BTreeMap<u16, Vec<&ValidationError>> {
        let mut groups: BTreeMap<u16, Vec<&ValidationError>> = BTreeMap::new();
        for error in self.errors() {
            groups.entry(error.suggested_status()).or_default().push(error);
        }
        groups
    }

    /// True when every error is a client error (vacuously true on success).
    pub fn all_client_errors(&self) -> bool {
        self.errors().iter().all(|error| error.kind().is_client_error())
    }

    pub fn has_server_errors(&self) -> bool {
        self.errors().iter().any(|error| error.kind().is_server_error())
    }
}

fn detail_lines(errors: &NonEmpty<ValidationError>) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {}", error.field_path(), error.message()))
        .collect::<Vec<_>>()
        .join("; ")
}

impl<T> From<Validation<ValidationError, T>> for AccumulatingResult<T> {
    fn from(validation: Validation<ValidationError, T>) -> Self {
        Self::from_validation(validation, |error| error)
    }
}

/// Runs `validator` on every item and returns all values or all errors.
pub fn validate_all<T, U>(
    items: impl IntoIterator<Item = T>,
    validator: impl FnMut(T) -> AccumulatingResult<U>,
) -> AccumulatingResult<Vec<U>> {
    sequence(items.into_iter().map(validator))
}

/// All successes, or the concatenation of every failure in order.
pub fn sequence<T>(
    results: impl IntoIterator<Item = AccumulatingResult<T>>,
) -> AccumulatingResult<Vec<T>> {
    let mut values = Vec::new();
    let mut errors: Option<NonEmpty<ValidationError>> = None;
    for result in results {
        match result {
            AccumulatingResult::Success(value) => values.push(value),
            AccumulatingResult::Failure(failed) => {
                errors = Some(match errors {
                    Some(existing) => existing.append(failed),
                    None => failed,
                });
            }
        }
    }
    match errors {
        Some(errors) => AccumulatingResult::Failure(errors),
        None => AccumulatingResult::Success(values),
    }
}
