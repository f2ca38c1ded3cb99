//! The two-track value and its combinator algebra.
//!
//! `Right` is the success track, `Left` the error track. Every chaining
//! combinator short-circuits: once a value is `Left`, mapping, chaining and
//! filtering return it unchanged and never call the supplied closure.

use crate::logic::TriBool;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn from_option(value: Option<R>, on_absent: impl FnOnce() -> L) -> Self {
        match value {
            Some(value) => Self::Right(value),
            None => Self::Left(on_absent()),
        }
    }

    /// Right with `on_true()` when the condition holds, Left with
    /// `on_false()` otherwise. Only the selected closure runs.
    pub fn from_bool(
        condition: impl Into<TriBool>,
        on_false: impl FnOnce() -> L,
        on_true: impl FnOnce() -> R,
    ) -> Self {
        condition
            .into()
            .fold(|| Self::Left(on_false()), || Self::Right(on_true()))
    }

    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }

    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Right(value) => Ok(value),
            Self::Left(error) => Err(error),
        }
    }

    pub fn is_left(&self) -> TriBool {
        TriBool::of(matches!(self, Self::Left(_)))
    }

    pub fn is_right(&self) -> TriBool {
        TriBool::of(matches!(self, Self::Right(_)))
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Total extraction. Exactly one closure runs.
    pub fn fold<U>(self, on_left: impl FnOnce(L) -> U, on_right: impl FnOnce(R) -> U) -> U {
        match self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => on_right(value),
        }
    }

    pub fn map<R2>(self, f: impl FnOnce(R) -> R2) -> Either<L, R2> {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(f(value)),
        }
    }

    /// Replaces the right payload with a freshly provided one.
    pub fn map_with<R2>(self, provider: impl FnOnce() -> R2) -> Either<L, R2> {
        self.map(|_| provider())
    }

    pub fn map_left<L2>(self, f: impl FnOnce(L) -> L2) -> Either<L2, R> {
        match self {
            Self::Left(error) => Either::Left(f(error)),
            Self::Right(value) => Either::Right(value),
        }
    }

    pub fn bimap<L2, R2>(
        self,
        on_left: impl FnOnce(L) -> L2,
        on_right: impl FnOnce(R) -> R2,
    ) -> Either<L2, R2> {
        match self {
            Self::Left(error) => Either::Left(on_left(error)),
            Self::Right(value) => Either::Right(on_right(value)),
        }
    }

    pub fn flat_map<R2>(self, f: impl FnOnce(R) -> Either<L, R2>) -> Either<L, R2> {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => f(value),
        }
    }

    pub fn and_then<R2>(self, f: impl FnOnce(R) -> Either<L, R2>) -> Either<L, R2> {
        self.flat_map(f)
    }

    /// Chains on the error track; a right value passes through untouched.
    pub fn flat_map_left<L2>(self, f: impl FnOnce(L) -> Either<L2, R>) -> Either<L2, R> {
        match self {
            Self::Left(error) => f(error),
            Self::Right(value) => Either::Right(value),
        }
    }

    pub fn recover(self, f: impl FnOnce(L) -> Either<L, R>) -> Self {
        self.flat_map_left(f)
    }

    pub fn filter(self, predicate: impl FnOnce(&R) -> bool, else_error: impl FnOnce() -> L) -> Self {
        match self {
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(else_error())
                }
            }
            left => left,
        }
    }

    pub fn ensure(self, predicate: impl FnOnce(&R) -> bool, else_error: impl FnOnce() -> L) -> Self {
        self.filter(predicate, else_error)
    }

    /// Runs `action` on the right value and passes `self` through.
    pub fn inspect(self, action: impl FnOnce(&R)) -> Self {
        if let Self::Right(value) = &self {
            action(value);
        }
        self
    }

    pub fn inspect_left(self, action: impl FnOnce(&L)) -> Self {
        if let Self::Left(error) = &self {
            action(error);
        }
        self
    }

    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(error) => Either::Right(error),
            Self::Right(value) => Either::Left(value),
        }
    }

    pub fn zip<R2>(self, other: Either<L, R2>) -> Either<L, (R, R2)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Right only if both are right; otherwise the first left, in
    /// left-to-right order.
    pub fn zip_with<R2, U>(
        self,
        other: Either<L, R2>,
        combiner: impl FnOnce(R, R2) -> U,
    ) -> Either<L, U> {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(combiner(a, b)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }

    pub fn map2<R2, U>(self, other: Either<L, R2>, f: impl FnOnce(R, R2) -> U) -> Either<L, U> {
        self.zip_with(other, f)
    }

    pub fn map3<R2, R3, U>(
        self,
        second: Either<L, R2>,
        third: Either<L, R3>,
        f: impl FnOnce(R, R2, R3) -> U,
    ) -> Either<L, U> {
        self.zip(second).zip_with(third, |(a, b), c| f(a, b, c))
    }

    /// Applies a function carried on the success track. A left function
    /// wins over a left argument.
    pub fn apply<R2, F>(self, function: Either<L, F>) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match function {
            Either::Left(error) => Either::Left(error),
            Either::Right(f) => self.map(f),
        }
    }

    pub fn or(self, default: R) -> R {
        match self {
            Self::Right(value) => value,
            Self::Left(_) => default,
        }
    }

    pub fn or_else_get(self, f: impl FnOnce(L) -> R) -> R {
        match self {
            Self::Right(value) => value,
            Self::Left(error) => f(error),
        }
    }

    pub fn or_none(self) -> Option<R> {
        match self {
            Self::Right(value) => Some(value),
            Self::Left(_) => None,
        }
    }

    pub fn left_or_none(self) -> Option<L> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    pub fn or_else(self, replacement: Either<L, R>) -> Self {
        match self {
            Self::Right(value) => Self::Right(value),
            Self::Left(_) => replacement,
        }
    }

    pub fn or_else_with(self, f: impl FnOnce(L) -> Either<L, R>) -> Self {
        self.flat_map_left(f)
    }
}

impl<T> Either<T, T> {
    pub fn merge(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Self::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

/// Collects rights, stopping at the first left.
impl<L, R, V> FromIterator<Either<L, R>> for Either<L, V>
where
    V: FromIterator<R>,
{
    fn from_iter<I: IntoIterator<Item = Either<L, R>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Either::into_result)
            .collect::<Result<V, L>>()
            .into()
    }
}

/// Maps every item through `f`, short-circuiting on the first left. Items
/// after the first left are never passed to `f`.
pub fn traverse<T, L, R, I, F>(items: I, f: F) -> Either<L, Vec<R>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Either<L, R>,
{
    items.into_iter().map(f).collect()
}

pub fn sequence<L, R, I>(eithers: I) -> Either<L, Vec<R>>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    eithers.into_iter().collect()
}

/// Splits into all lefts and all rights, preserving input order.
pub fn partition<L, R, I>(eithers: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();
    for either in eithers {
        match either {
            Either::Left(error) => lefts.push(error),
            Either::Right(value) => rights.push(value),
        }
    }
    (lefts, rights)
}

pub fn lift<L, R, R2>(f: impl Fn(R) -> R2) -> impl Fn(Either<L, R>) -> Either<L, R2> {
    move |either: Either<L, R>| either.map(&f)
}

pub fn lift2<L, A, B, C>(
    f: impl Fn(A, B) -> C,
) -> impl Fn(Either<L, A>, Either<L, B>) -> Either<L, C> {
    move |a: Either<L, A>, b: Either<L, B>| a.zip_with(b, &f)
}
