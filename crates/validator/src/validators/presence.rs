//! Presence rules over whole tri-state fields.
//!
//! Unlike value-shape rules these treat an explicit null as a failure.
//! Undefined still passes: requiring a field to be sent is a separate
//! concern.

use std::fmt;
use std::marker::PhantomData;

use tristate_core::{OptionalState, TriState};

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// BLANK
// ============================================================================

/// Payloads that can be "present but empty".
///
/// Strings are blank when empty or whitespace-only, sequences when empty,
/// and numbers, booleans and chars when equal to their default value.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<T> Blank for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<B: Blank + ?Sized> Blank for &B {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<B: Blank + ?Sized> Blank for Box<B> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

macro_rules! blank_when_default {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Blank for $ty {
                fn is_blank(&self) -> bool {
                    *self == <$ty>::default()
                }
            }
        )+
    };
}

blank_when_default!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

// ============================================================================
// NOT NULL
// ============================================================================

/// Fails only when the field is explicitly null.
pub struct NotNull<O: ?Sized> {
    _field: PhantomData<fn(&O)>,
}

impl<O: TriState + ?Sized> Validate for NotNull<O> {
    type Input = O;

    fn validate(&self, field: &O) -> Result<(), ValidationError> {
        if field.is_null() {
            tracing::trace!("not_null rule failed");
            Err(ValidationError::not_null())
        } else {
            Ok(())
        }
    }
}

#[must_use]
pub const fn not_null<O: ?Sized>() -> NotNull<O> {
    NotNull {
        _field: PhantomData,
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Fails when the field is null, or holds a [`Blank`] value.
///
/// # Examples
///
/// ```
/// use tristate_core::Optional;
/// use tristate_validator::foundation::Validate;
/// use tristate_validator::validators::not_empty;
///
/// let rule = not_empty::<Optional<String>>();
/// assert!(rule.validate(&Optional::UNDEFINED).is_ok());
/// assert!(rule.validate(&Optional::NULL).is_err());
/// assert!(rule.validate(&Optional::new("  ".to_owned())).is_err());
/// assert!(rule.validate(&Optional::new("x".to_owned())).is_ok());
/// ```
pub struct NotEmpty<O: ?Sized> {
    _field: PhantomData<fn(&O)>,
}

impl<O> Validate for NotEmpty<O>
where
    O: TriState + ?Sized,
    O::Payload: Blank,
{
    type Input = O;

    fn validate(&self, field: &O) -> Result<(), ValidationError> {
        let passes = match field.state() {
            OptionalState::Undefined => true,
            OptionalState::Null => false,
            OptionalState::HasValue => field.has_value().is_some_and(|value| !value.is_blank()),
        };

        if passes {
            Ok(())
        } else {
            tracing::trace!(state = %field.state(), "not_empty rule failed");
            Err(ValidationError::not_empty())
        }
    }
}

#[must_use]
pub const fn not_empty<O: ?Sized>() -> NotEmpty<O> {
    NotEmpty {
        _field: PhantomData,
    }
}

macro_rules! phantom_rule_traits {
    ($($name:ident),+) => {
        $(
            impl<O: ?Sized> Clone for $name<O> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<O: ?Sized> Copy for $name<O> {}

            impl<O: ?Sized> Default for $name<O> {
                fn default() -> Self {
                    Self { _field: PhantomData }
                }
            }

            impl<O: ?Sized> fmt::Debug for $name<O> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(stringify!($name))
                }
            }
        )+
    };
}

phantom_rule_traits!(NotNull, NotEmpty);
