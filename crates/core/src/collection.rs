//! Tri-state container specialised for sequences.
//!
//! `OptionalCollection<T>` is deliberately not `Optional<Vec<T>>`: an empty
//! but present sequence is a value in its own right and must stay
//! distinguishable from null and from undefined.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::state::{OptionalState, StateError};
use crate::traits::TriState;

/// A sequence field that is undefined, null, or holds zero or more `T`.
///
/// Iterating a null or undefined collection yields nothing.
///
/// # Examples
///
/// ```
/// use tristate_core::{OptionalCollection, OptionalState};
///
/// let tags: OptionalCollection<&str> = vec!["a", "b"].into();
/// assert_eq!(tags.iter().count(), 2);
///
/// let empty: OptionalCollection<&str> = OptionalCollection::new(Vec::new());
/// assert_eq!(empty.state(), OptionalState::HasValue);
/// assert_ne!(empty, OptionalCollection::NULL);
///
/// let cleared: OptionalCollection<&str> = OptionalCollection::NULL;
/// assert_eq!(cleared.iter().count(), 0);
/// ```
#[derive(Clone)]
pub struct OptionalCollection<T> {
    state: OptionalState,
    value: Option<Vec<T>>,
}

impl<T> OptionalCollection<T> {
    /// The canonical undefined instance.
    pub const UNDEFINED: Self = Self {
        state: OptionalState::Undefined,
        value: None,
    };

    /// The canonical null instance.
    pub const NULL: Self = Self {
        state: OptionalState::Null,
        value: None,
    };

    /// Wraps a sequence in the `HasValue` state, empty or not.
    #[inline]
    pub const fn new(items: Vec<T>) -> Self {
        Self {
            state: OptionalState::HasValue,
            value: Some(items),
        }
    }

    /// Returns [`OptionalCollection::UNDEFINED`].
    #[inline]
    pub const fn undefined() -> Self {
        Self::UNDEFINED
    }

    /// Returns [`OptionalCollection::NULL`].
    #[inline]
    pub const fn null() -> Self {
        Self::NULL
    }

    /// Builds from a nullable sequence: `None` collapses to `Null`.
    pub fn from_option(items: Option<Vec<T>>) -> Self {
        match items {
            Some(items) => Self::new(items),
            None => Self::NULL,
        }
    }

    /// Builds an empty instance from an explicit state tag.
    pub fn from_state(state: OptionalState) -> Result<Self, StateError> {
        match state {
            OptionalState::Undefined => Ok(Self::UNDEFINED),
            OptionalState::Null => Ok(Self::NULL),
            OptionalState::HasValue => Err(StateError::PayloadRequired),
        }
    }

    #[inline]
    pub const fn state(&self) -> OptionalState {
        self.state
    }

    /// The items when the state is `HasValue` and a sequence is stored.
    pub fn has_value(&self) -> Option<&[T]> {
        match (self.state, &self.value) {
            (OptionalState::HasValue, Some(items)) => Some(items.as_slice()),
            _ => None,
        }
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.state == OptionalState::Undefined
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.state == OptionalState::Null
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.state != OptionalState::Undefined
    }

    /// `None` when undefined, `Some(None)` when null, `Some(Some(items))`
    /// otherwise.
    pub fn as_set(&self) -> Option<Option<&[T]>> {
        if self.is_set() {
            Some(self.has_value())
        } else {
            None
        }
    }

    /// The items, or an empty slice for null and undefined.
    pub fn as_slice(&self) -> &[T] {
        self.has_value().unwrap_or(&[])
    }

    /// Iterates the items; empty for null and undefined.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Flattens into a plain `Option<Vec<T>>`.
    pub fn into_option(self) -> Option<Vec<T>> {
        match self.state {
            OptionalState::HasValue => self.value,
            OptionalState::Undefined | OptionalState::Null => None,
        }
    }

    /// Maps every item, keeping the state.
    ///
    /// # Examples
    ///
    /// ```
    /// use tristate_core::OptionalCollection;
    ///
    /// let ids = OptionalCollection::new(vec![1, 2]);
    /// assert_eq!(ids.map(|n| n.to_string()).as_slice(), ["1", "2"]);
    /// ```
    pub fn map<U, F>(self, f: F) -> OptionalCollection<U>
    where
        F: FnMut(T) -> U,
    {
        match self.state {
            OptionalState::Undefined => OptionalCollection::UNDEFINED,
            OptionalState::Null => OptionalCollection::NULL,
            OptionalState::HasValue => match self.value {
                Some(items) => OptionalCollection::new(items.into_iter().map(f).collect()),
                None => OptionalCollection::NULL,
            },
        }
    }

    /// Equality with a caller-supplied element comparer.
    pub fn eq_with<F>(&self, other: &Self, mut comparer: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.state != other.state {
            return false;
        }

        match (self.has_value(), other.has_value()) {
            (Some(left), Some(right)) => {
                std::ptr::eq(left, right)
                    || (left.len() == right.len()
                        && left.iter().zip(right).all(|(l, r)| comparer(l, r)))
            }
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Default for OptionalCollection<T> {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl<T> From<Vec<T>> for OptionalCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for OptionalCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> From<OptionalCollection<T>> for Option<Vec<T>> {
    fn from(collection: OptionalCollection<T>) -> Self {
        collection.into_option()
    }
}

impl<T> IntoIterator for OptionalCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().unwrap_or_default().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OptionalCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> TriState for OptionalCollection<T> {
    type Payload = [T];

    fn state(&self) -> OptionalState {
        self.state
    }

    fn has_value(&self) -> Option<&[T]> {
        OptionalCollection::has_value(self)
    }
}

impl<T: PartialEq> PartialEq for OptionalCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_with(other, T::eq)
    }
}

impl<T: Eq> Eq for OptionalCollection<T> {}

impl<T: Hash> Hash for OptionalCollection<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.discriminant().hash(state);
        if let Some(items) = self.has_value() {
            items.hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Display for OptionalCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(items) = self.has_value() else {
            return f.write_str(self.state.as_str());
        };

        f.write_str("[")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionalCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.has_value() {
            Some(items) => f.debug_tuple("OptionalCollection").field(&items).finish(),
            None => write!(f, "OptionalCollection::{}", self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_survives_missing_payload() {
        let broken: OptionalCollection<u8> = OptionalCollection {
            state: OptionalState::HasValue,
            value: None,
        };
        assert!(broken.has_value().is_none());
        assert_eq!(broken.iter().count(), 0);
        assert_eq!(broken.to_string(), "has_value");
        assert_eq!(broken.into_iter().count(), 0);
    }

    #[test]
    fn element_comparer_checks_length() {
        let short = OptionalCollection::new(vec!["a"]);
        let long = OptionalCollection::new(vec!["A", "b"]);
        assert!(!short.eq_with(&long, |l, r| l.eq_ignore_ascii_case(r)));
    }

    #[test]
    fn display_lists_items() {
        let tags = OptionalCollection::new(vec!["x", "y"]);
        assert_eq!(tags.to_string(), "[x, y]");
        assert_eq!(OptionalCollection::<u8>::NULL.to_string(), "null");
        assert_eq!(OptionalCollection::<u8>::UNDEFINED.to_string(), "undefined");
    }
}
