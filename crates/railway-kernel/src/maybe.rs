//! Optional values on the railway.
//!
//! `Maybe<T>` is isomorphic to `Either<(), T>`. A present value is always a
//! real `T`; absentable inputs go through [`Maybe::of_absentable`].

use crate::either::Either;
use crate::logic::TriBool;
use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Maybe<T> {
    None,
    Some(T),
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> Maybe<T> {
    pub const fn of(value: T) -> Self {
        Self::Some(value)
    }

    pub fn of_absentable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    pub const fn none() -> Self {
        Self::None
    }

    pub fn when(condition: impl Into<TriBool>, value: T) -> Self {
        if condition.into().is_true() {
            Self::Some(value)
        } else {
            Self::None
        }
    }

    /// Like [`Maybe::when`], but the value is only built when the
    /// condition holds.
    pub fn when_with(condition: impl Into<TriBool>, f: impl FnOnce() -> T) -> Self {
        if condition.into().is_true() {
            Self::Some(f())
        } else {
            Self::None
        }
    }

    /// The first present element, if any.
    pub fn first_present(candidates: impl IntoIterator<Item = Maybe<T>>) -> Self {
        candidates
            .into_iter()
            .find(|candidate| candidate.is_present().is_true())
            .unwrap_or(Self::None)
    }

    pub fn is_present(&self) -> TriBool {
        TriBool::of(matches!(self, Self::Some(_)))
    }

    pub fn is_empty(&self) -> TriBool {
        TriBool::of(matches!(self, Self::None))
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    pub fn fold<U>(self, on_none: impl FnOnce() -> U, on_some: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    pub fn flat_map<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(value) => f(value),
            Self::None => Maybe::None,
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        self.flat_map(f)
    }

    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some((a, b)),
            _ => Maybe::None,
        }
    }

    pub fn or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    pub fn or_else_get(self, f: impl FnOnce() -> T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => f(),
        }
    }

    pub fn or_else(self, replacement: Maybe<T>) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => replacement,
        }
    }

    pub fn or_else_with(self, f: impl FnOnce() -> Maybe<T>) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => f(),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    pub fn into_either(self) -> Either<(), T> {
        match self {
            Self::Some(value) => Either::Right(value),
            Self::None => Either::Left(()),
        }
    }

    /// Absence becomes a failure carrying `error`.
    pub fn to_outcome<F>(self, error: F) -> Outcome<F, T> {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(error),
        }
    }

    pub fn inspect(self, action: impl FnOnce(&T)) -> Self {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Maybe<Vec<T>> {
    /// Present only for a non-empty collection.
    pub fn of_collection(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::None
        } else {
            Self::Some(items)
        }
    }
}

impl<K, V> Maybe<BTreeMap<K, V>> {
    /// Present only for a map with at least one entry.
    pub fn of_map(entries: BTreeMap<K, V>) -> Self {
        if entries.is_empty() {
            Self::None
        } else {
            Self::Some(entries)
        }
    }
}

impl<S: AsRef<str>> Maybe<S> {
    /// Present only when the text contains a non-whitespace character.
    pub fn of_blankable(value: S) -> Self {
        if value.as_ref().trim().is_empty() {
            Self::None
        } else {
            Self::Some(value)
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_absentable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> From<Either<(), T>> for Maybe<T> {
    fn from(value: Either<(), T>) -> Self {
        value.fold(|()| Self::None, Self::Some)
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
