//! A sequence with at least one element.

use crate::error::AlgebraError;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Serializes as a plain list; deserializing an empty list fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmpty<T> {
    items: Vec<T>,
}

impl<T> NonEmpty<T> {
    pub fn new(head: T) -> Self {
        Self { items: vec![head] }
    }

    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    pub fn head(&self) -> &T {
        &self.items[0]
    }

    pub fn last(&self) -> &T {
        &self.items[self.items.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Concatenates, keeping `self`'s elements first.
    pub fn append(mut self, other: NonEmpty<T>) -> Self {
        self.items.extend(other.items);
        self
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> NonEmpty<U> {
        NonEmpty {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> TryFrom<Vec<T>> for NonEmpty<T> {
    type Error = AlgebraError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(items).ok_or(AlgebraError::EmptyCollection)
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(value: NonEmpty<T>) -> Self {
        value.items
    }
}

impl<T> Extend<T> for NonEmpty<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for NonEmpty<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmpty<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(items).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_vec_is_rejected() {
        assert_eq!(NonEmpty::<i32>::from_vec(Vec::new()), None);
        assert_eq!(
            NonEmpty::<i32>::try_from(Vec::new()),
            Err(AlgebraError::EmptyCollection)
        );
    }

    #[test]
    fn append_keeps_left_elements_first() {
        let joined = NonEmpty::new(1).append(NonEmpty::from_vec(vec![2, 3]).expect("non-empty"));
        assert_eq!(joined.as_slice(), &[1, 2, 3]);
        assert_eq!(*joined.head(), 1);
        assert_eq!(*joined.last(), 3);
        assert_eq!(joined.len(), 3);
    }

    #[test]
    fn serde_round_trip_rejects_empty_list() {
        let json = serde_json::to_string(&NonEmpty::new("a")).expect("serialize");
        assert_eq!(json, r#"["a"]"#);
        let err = serde_json::from_str::<NonEmpty<String>>("[]").expect_err("empty list");
        assert!(err.to_string().contains("empty collection"));
    }
}
