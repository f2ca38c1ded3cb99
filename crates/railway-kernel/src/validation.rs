//! Valid or invalid, isomorphic to `Either<I, V>`.
//!
//! Unlike `Either`, a validation has no `swap`.

use crate::either::Either;
use crate::logic::TriBool;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation<I, V> {
    Invalid(I),
    Valid(V),
}

impl<I, V> Validation<I, V> {
    pub const fn valid(value: V) -> Self {
        Self::Valid(value)
    }

    pub const fn invalid(error: I) -> Self {
        Self::Invalid(error)
    }

    /// Valid when `predicate` holds for `value`, otherwise invalid with
    /// `error(&value)`.
    pub fn check(value: V, predicate: impl FnOnce(&V) -> bool, error: impl FnOnce(&V) -> I) -> Self {
        if predicate(&value) {
            Self::Valid(value)
        } else {
            Self::Invalid(error(&value))
        }
    }

    pub fn is_valid(&self) -> TriBool {
        TriBool::of(matches!(self, Self::Valid(_)))
    }

    pub fn is_invalid(&self) -> TriBool {
        TriBool::of(matches!(self, Self::Invalid(_)))
    }

    pub fn as_ref(&self) -> Validation<&I, &V> {
        match self {
            Self::Invalid(error) => Validation::Invalid(error),
            Self::Valid(value) => Validation::Valid(value),
        }
    }

    pub fn fold<U>(self, on_invalid: impl FnOnce(I) -> U, on_valid: impl FnOnce(V) -> U) -> U {
        self.into_either().fold(on_invalid, on_valid)
    }

    pub fn map<V2>(self, f: impl FnOnce(V) -> V2) -> Validation<I, V2> {
        self.into_either().map(f).into()
    }

    pub fn map_invalid<I2>(self, f: impl FnOnce(I) -> I2) -> Validation<I2, V> {
        self.into_either().map_left(f).into()
    }

    pub fn bimap<I2, V2>(
        self,
        on_invalid: impl FnOnce(I) -> I2,
        on_valid: impl FnOnce(V) -> V2,
    ) -> Validation<I2, V2> {
        self.into_either().bimap(on_invalid, on_valid).into()
    }

    pub fn flat_map<V2>(self, f: impl FnOnce(V) -> Validation<I, V2>) -> Validation<I, V2> {
        self.into_either()
            .flat_map(|value| f(value).into_either())
            .into()
    }

    pub fn and_then<V2>(self, f: impl FnOnce(V) -> Validation<I, V2>) -> Validation<I, V2> {
        self.flat_map(f)
    }

    pub fn recover(self, f: impl FnOnce(I) -> Validation<I, V>) -> Self {
        self.into_either()
            .recover(|error| f(error).into_either())
            .into()
    }

    pub fn filter(self, predicate: impl FnOnce(&V) -> bool, else_error: impl FnOnce() -> I) -> Self {
        self.into_either().filter(predicate, else_error).into()
    }

    pub fn zip<V2>(self, other: Validation<I, V2>) -> Validation<I, (V, V2)> {
        self.into_either().zip(other.into_either()).into()
    }

    pub fn zip_with<V2, U>(
        self,
        other: Validation<I, V2>,
        combiner: impl FnOnce(V, V2) -> U,
    ) -> Validation<I, U> {
        self.into_either()
            .zip_with(other.into_either(), combiner)
            .into()
    }

    pub fn or(self, default: V) -> V {
        self.into_either().or(default)
    }

    pub fn or_none(self) -> Option<V> {
        self.into_either().or_none()
    }

    pub fn invalid_or_none(self) -> Option<I> {
        self.into_either().left_or_none()
    }

    pub fn into_either(self) -> Either<I, V> {
        match self {
            Self::Invalid(error) => Either::Left(error),
            Self::Valid(value) => Either::Right(value),
        }
    }

    pub fn into_result(self) -> Result<V, I> {
        self.into_either().into_result()
    }
}

impl<I, V> From<Either<I, V>> for Validation<I, V> {
    fn from(value: Either<I, V>) -> Self {
        value.fold(Self::Invalid, Self::Valid)
    }
}

impl<I, V> From<Validation<I, V>> for Either<I, V> {
    fn from(value: Validation<I, V>) -> Self {
        value.into_either()
    }
}

impl<I, V> From<Result<V, I>> for Validation<I, V> {
    fn from(value: Result<V, I>) -> Self {
        Either::from_result(value).into()
    }
}
