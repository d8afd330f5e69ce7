//! The capability contract implemented by every tri-state container.
//!
//! Validation rules and serialization adapters only ever talk to a field
//! through [`TriState`], so `Optional<T>` and `OptionalCollection<T>` can be
//! handled uniformly without one being defined in terms of the other.

use crate::state::OptionalState;

/// A value that is either undefined, null, or carries a payload.
///
/// Implementors provide [`state`](TriState::state) and
/// [`has_value`](TriState::has_value); the predicates are derived from those.
///
/// # Examples
///
/// ```
/// use tristate_core::{Optional, OptionalState, TriState};
///
/// let name: Optional<String> = Optional::new("alice".to_owned());
/// assert_eq!(name.state(), OptionalState::HasValue);
/// assert!(name.is_set());
///
/// let cleared: Optional<String> = Optional::NULL;
/// assert!(cleared.is_set());
/// assert!(cleared.has_value().is_none());
/// ```
pub trait TriState {
    /// The payload exposed when the state is `HasValue`.
    ///
    /// `?Sized` so collections can expose a slice.
    type Payload: ?Sized;

    /// Current state tag.
    fn state(&self) -> OptionalState;

    /// The payload, only when the state is `HasValue` and a payload is stored.
    ///
    /// Both empty states report `None`. A `HasValue` tag without a stored
    /// payload also reports `None` instead of panicking.
    fn has_value(&self) -> Option<&Self::Payload>;

    /// `state() == Undefined`.
    #[inline]
    fn is_undefined(&self) -> bool {
        self.state() == OptionalState::Undefined
    }

    /// `state() == Null`.
    #[inline]
    fn is_null(&self) -> bool {
        self.state() == OptionalState::Null
    }

    /// `state() != Undefined`; null and has-value both count as set.
    #[inline]
    fn is_set(&self) -> bool {
        self.state() != OptionalState::Undefined
    }
}

impl<O: TriState + ?Sized> TriState for &O {
    type Payload = O::Payload;

    fn state(&self) -> OptionalState {
        (**self).state()
    }

    fn has_value(&self) -> Option<&Self::Payload> {
        (**self).has_value()
    }
}
