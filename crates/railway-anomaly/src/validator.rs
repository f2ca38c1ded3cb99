//! Field-level checks that produce taxonomy-typed validation errors.
//!
//! The free functions return fail-fast [`Validation`]s; [`Field`] wraps the
//! same checks as [`AccumulatingResult`]s so they can be combined, and
//! [`ObjectValidator`] runs a series of checks against one value.

use crate::accumulate::AccumulatingResult;
use crate::taxonomy::TaxonomyKind;
use crate::validation_error::ValidationError;
use railway_kernel::Validation;
use serde::Serialize;
use serde_json::Value;

/// Valid when a value is present.
pub fn required<T>(field_path: &str, value: Option<T>) -> Validation<ValidationError, T> {
    match value {
        Some(value) => Validation::Valid(value),
        None => Validation::Invalid(ValidationError::required(field_path)),
    }
}

/// Valid when `predicate` holds; otherwise an error of `kind` with the
/// value recorded as rejected.
pub fn check<T: Serialize>(
    field_path: &str,
    value: T,
    predicate: impl FnOnce(&T) -> bool,
    kind: impl Into<TaxonomyKind>,
    context_args: Vec<Value>,
) -> Validation<ValidationError, T> {
    let kind = kind.into();
    Validation::check(value, predicate, |rejected| {
        let error = ValidationError::new(field_path, kind).with_context_args(context_args);
        match serde_json::to_value(rejected) {
            Ok(rejected) => error.with_rejected_value(rejected),
            Err(_) => error,
        }
    })
}

/// Valid when the text is present and its length, in characters, lies in
/// `min..=max`.
pub fn length_between<'a>(
    field_path: &str,
    value: Option<&'a str>,
    min: usize,
    max: usize,
) -> Validation<ValidationError, &'a str> {
    required(field_path, value).flat_map(|text| {
        let length = text.chars().count();
        if length < min {
            Validation::Invalid(ValidationError::too_short(field_path, text, min))
        } else if length > max {
            Validation::Invalid(ValidationError::too_long(field_path, text, max))
        } else {
            Validation::Valid(text)
        }
    })
}

/// Valid when the value is present and lies in `min..=max`.
pub fn range_between<N>(
    field_path: &str,
    value: Option<N>,
    min: N,
    max: N,
) -> Validation<ValidationError, N>
where
    N: PartialOrd + Copy + Into<Value>,
{
    required(field_path, value).flat_map(|number| {
        if number < min || number > max {
            Validation::Invalid(ValidationError::out_of_range(field_path, number, min, max))
        } else {
            Validation::Valid(number)
        }
    })
}

/// The checks above, bound to one field path and returning accumulating
/// results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    path: String,
}

impl Field {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn required<T>(&self, value: Option<T>) -> AccumulatingResult<T> {
        required(&self.path, value).into()
    }

    pub fn check<T: Serialize>(
        &self,
        value: T,
        predicate: impl FnOnce(&T) -> bool,
        kind: impl Into<TaxonomyKind>,
        context_args: Vec<Value>,
    ) -> AccumulatingResult<T> {
        check(&self.path, value, predicate, kind, context_args).into()
    }

    pub fn length_between<'a>(
        &self,
        value: Option<&'a str>,
        min: usize,
        max: usize,
    ) -> AccumulatingResult<&'a str> {
        length_between(&self.path, value, min, max).into()
    }

    pub fn range_between<N>(&self, value: Option<N>, min: N, max: N) -> AccumulatingResult<N>
    where
        N: PartialOrd + Copy + Into<Value>,
    {
        range_between(&self.path, value, min, max).into()
    }
}

/// Runs checks against one owned value.
///
/// [`ObjectValidator::validate`] is fail-fast: it is skipped once any check
/// has failed. [`ObjectValidator::validate_and_accumulate`] always runs and
/// adds its errors to those already collected.
#[derive(Debug, Clone)]
pub struct ObjectValidator<T> {
    object: T,
    errors: Vec<ValidationError>,
}

impl<T> ObjectValidator<T> {
    pub fn new(object: T) -> Self {
        Self {
            object,
            errors: Vec::new(),
        }
    }

    pub fn validate<U>(self, check: impl FnOnce(&T) -> AccumulatingResult<U>) -> Self {
        if self.errors.is_empty() {
            self.validate_and_accumulate(check)
        } else {
            self
        }
    }

    pub fn validate_and_accumulate<U>(mut self, check: impl FnOnce(&T) -> AccumulatingResult<U>) -> Self {
        if let AccumulatingResult::Failure(errors) = check(&self.object) {
            self.errors.extend(errors);
        }
        self
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The object itself when every check passed.
    pub fn result(self) -> AccumulatingResult<T> {
        match AccumulatingResult::failures(self.errors) {
            Ok(failure) => failure,
            Err(_) => AccumulatingResult::Success(self.object),
        }
    }
}
