//! Scalar tri-state container.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::state::{OptionalState, StateError};
use crate::traits::TriState;

// ============================================================================
// OPTIONAL
// ============================================================================

/// A field that is undefined, null, or holds a `T`.
///
/// Values are immutable: every transformation returns a new instance. The
/// default value is [`Optional::UNDEFINED`].
///
/// A payload type that can itself be null, such as `Option<U>`, is not
/// supported on the wire: `Optional::new(None::<U>)` encodes to `null` and
/// decodes back as [`Optional::NULL`]. Use `Optional<U>` instead.
///
/// # Examples
///
/// ```
/// use tristate_core::{Optional, OptionalState};
///
/// let age = Optional::new(23);
/// assert_eq!(age.has_value(), Some(&23));
///
/// // `None` collapses to the null state.
/// let cleared: Optional<i32> = Optional::from_option(None);
/// assert_eq!(cleared.state(), OptionalState::Null);
///
/// let untouched: Optional<i32> = Optional::default();
/// assert!(untouched.is_undefined());
/// ```
#[derive(Clone, Copy)]
pub struct Optional<T> {
    state: OptionalState,
    value: Option<T>,
}

impl<T> Optional<T> {
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

    /// Wraps a payload in the `HasValue` state.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            state: OptionalState::HasValue,
            value: Some(value),
        }
    }

    /// Returns [`Optional::UNDEFINED`].
    #[inline]
    pub const fn undefined() -> Self {
        Self::UNDEFINED
    }

    /// Returns [`Optional::NULL`].
    #[inline]
    pub const fn null() -> Self {
        Self::NULL
    }

    /// Builds from a nullable payload: `None` collapses to `Null`, never
    /// to `HasValue`.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::NULL,
        }
    }

    /// Builds an empty instance from an explicit state tag.
    ///
    /// Fails with [`StateError::PayloadRequired`] for `HasValue`, since there
    /// is no payload to carry.
    pub fn from_state(state: OptionalState) -> Result<Self, StateError> {
        match state {
            OptionalState::Undefined => Ok(Self::UNDEFINED),
            OptionalState::Null => Ok(Self::NULL),
            OptionalState::HasValue => Err(StateError::PayloadRequired),
        }
    }

    /// Current state tag.
    #[inline]
    pub const fn state(&self) -> OptionalState {
        self.state
    }

    /// The payload when the state is `HasValue` and a payload is stored.
    #[inline]
    pub fn has_value(&self) -> Option<&T> {
        match (self.state, &self.value) {
            (OptionalState::HasValue, Some(value)) => Some(value),
            _ => None,
        }
    }

    /// `state() == Undefined`. Usable as a serde `skip_serializing_if` path.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.state == OptionalState::Undefined
    }

    /// `state() == Null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.state == OptionalState::Null
    }

    /// `state() != Undefined`.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.state != OptionalState::Undefined
    }

    /// Whether the field was set, and with what.
    ///
    /// `None` when undefined, `Some(None)` when null, `Some(Some(v))` when
    /// a payload is present.
    pub fn as_set(&self) -> Option<Option<&T>> {
        if self.is_set() {
            Some(self.has_value())
        } else {
            None
        }
    }

    /// Flattens into a plain `Option`; both empty states become `None`.
    pub fn into_option(self) -> Option<T> {
        match self.state {
            OptionalState::HasValue => self.value,
            OptionalState::Undefined | OptionalState::Null => None,
        }
    }

    /// Borrows the payload, keeping the state.
    pub fn as_ref(&self) -> Optional<&T> {
        Optional {
            state: self.state,
            value: self.value.as_ref(),
        }
    }

    /// The payload, or `T::default()` when there is none.
    pub fn value_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.has_value().cloned().unwrap_or_default()
    }

    /// Maps the payload, keeping undefined and null as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// use tristate_core::Optional;
    ///
    /// assert_eq!(Optional::new(2).map(|n| n * 10), Optional::new(20));
    /// assert_eq!(Optional::<i32>::NULL.map(|n| n * 10), Optional::NULL);
    /// ```
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            OptionalState::Undefined => Optional::UNDEFINED,
            OptionalState::Null => Optional::NULL,
            OptionalState::HasValue => match self.value {
                Some(value) => Optional::new(f(value)),
                None => Optional::NULL,
            },
        }
    }

    /// Maps the payload through a nullable function; a `None` result
    /// collapses to `Null`.
    pub fn map_nullable<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self.state {
            OptionalState::Undefined => Optional::UNDEFINED,
            OptionalState::Null => Optional::NULL,
            OptionalState::HasValue => Optional::from_option(self.value.and_then(f)),
        }
    }

    /// Equality with a caller-supplied payload comparer.
    ///
    /// States must match; payloads are only compared when both sides hold one.
    ///
    /// # Examples
    ///
    /// ```
    /// use tristate_core::Optional;
    ///
    /// let a = Optional::new("Test".to_owned());
    /// let b = Optional::new("test".to_owned());
    /// assert_ne!(a, b);
    /// assert!(a.eq_with(&b, |x, y| x.eq_ignore_ascii_case(y)));
    /// ```
    pub fn eq_with<F>(&self, other: &Self, comparer: F) -> bool
    where
        F: FnOnce(&T, &T) -> bool,
    {
        if self.state != other.state {
            return false;
        }

        match (self.has_value(), other.has_value()) {
            (Some(left), Some(right)) => std::ptr::eq(left, right) || comparer(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T> TriState for Optional<T> {
    type Payload = T;

    #[inline]
    fn state(&self) -> OptionalState {
        self.state
    }

    #[inline]
    fn has_value(&self) -> Option<&T> {
        Optional::has_value(self)
    }
}

// ============================================================================
// EQUALITY / HASHING
// ============================================================================

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_with(other, T::eq)
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.discriminant().hash(state);
        if let Some(value) = self.has_value() {
            value.hash(state);
        }
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.has_value() {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str(self.state.as_str()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.has_value() {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => write!(f, "Optional::{}", self.state),
        }
    }
}
