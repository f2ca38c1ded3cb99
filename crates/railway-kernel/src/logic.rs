//! Boolean conditions of the algebra.
//!
//! `TriBool` is the condition type returned by every `is_*` query. It has
//! exactly two inhabited states; there is no way to construct a third.
//! `NullableTriBool` is the disjoint three-state variant for conditions that
//! may be unknown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriBool {
    False,
    True,
}

impl TriBool {
    pub const fn of(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }

    pub const fn to_bool(self) -> bool {
        matches!(self, Self::True)
    }

    pub const fn is_true(self) -> bool {
        self.to_bool()
    }

    pub const fn is_false(self) -> bool {
        !self.to_bool()
    }

    pub const fn negate(self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
        }
    }

    /// Eager conjunction.
    pub fn and(self, other: impl Into<TriBool>) -> Self {
        Self::of(self.to_bool() && other.into().to_bool())
    }

    /// Lazy conjunction: `other` only runs when `self` is true.
    pub fn and_then(self, other: impl FnOnce() -> TriBool) -> Self {
        match self {
            Self::True => other(),
            Self::False => Self::False,
        }
    }

    pub fn or(self, other: impl Into<TriBool>) -> Self {
        Self::of(self.to_bool() || other.into().to_bool())
    }

    /// Lazy disjunction: `other` only runs when `self` is false.
    pub fn or_else(self, other: impl FnOnce() -> TriBool) -> Self {
        match self {
            Self::True => Self::True,
            Self::False => other(),
        }
    }

    pub fn xor(self, other: impl Into<TriBool>) -> Self {
        Self::of(self.to_bool() != other.into().to_bool())
    }

    pub fn fold<U>(self, on_false: impl FnOnce() -> U, on_true: impl FnOnce() -> U) -> U {
        match self {
            Self::True => on_true(),
            Self::False => on_false(),
        }
    }

    pub fn if_true(self, action: impl FnOnce()) -> Self {
        if self.is_true() {
            action();
        }
        self
    }

    pub fn if_false(self, action: impl FnOnce()) -> Self {
        if self.is_false() {
            action();
        }
        self
    }
}

impl From<bool> for TriBool {
    fn from(value: bool) -> Self {
        Self::of(value)
    }
}

impl From<TriBool> for bool {
    fn from(value: TriBool) -> Self {
        value.to_bool()
    }
}

impl Not for TriBool {
    type Output = TriBool;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl BitAnd for TriBool {
    type Output = TriBool;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for TriBool {
    type Output = TriBool;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl BitXor for TriBool {
    type Output = TriBool;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(rhs)
    }
}

impl fmt::Display for TriBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_bool())
    }
}

/// A condition that may also be unknown. Disjoint from [`TriBool`]:
/// widening is total, narrowing is partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullableTriBool {
    False,
    Unknown,
    True,
}

impl NullableTriBool {
    pub const fn from_option(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::True,
            Some(false) => Self::False,
            None => Self::Unknown,
        }
    }

    pub const fn to_option(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Unknown => None,
        }
    }

    pub const fn to_tri_bool(self) -> Option<TriBool> {
        match self {
            Self::True => Some(TriBool::True),
            Self::False => Some(TriBool::False),
            Self::Unknown => None,
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    pub const fn is_false(self) -> bool {
        matches!(self, Self::False)
    }

    /// Unknown stays unknown; known values are negated.
    pub const fn negate(self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::Unknown => Self::Unknown,
        }
    }

    pub fn fold<U>(
        self,
        on_false: impl FnOnce() -> U,
        on_unknown: impl FnOnce() -> U,
        on_true: impl FnOnce() -> U,
    ) -> U {
        match self {
            Self::True => on_true(),
            Self::Unknown => on_unknown(),
            Self::False => on_false(),
        }
    }

    pub fn if_unknown(self, action: impl FnOnce()) -> Self {
        if !self.is_known() {
            action();
        }
        self
    }
}

impl From<TriBool> for NullableTriBool {
    fn from(value: TriBool) -> Self {
        match value {
            TriBool::True => Self::True,
            TriBool::False => Self::False,
        }
    }
}

impl From<Option<bool>> for NullableTriBool {
    fn from(value: Option<bool>) -> Self {
        Self::from_option(value)
    }
}

impl fmt::Display for NullableTriBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
