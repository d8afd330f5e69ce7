//! Core traits for the validation system.

use std::borrow::Borrow;

use tristate_core::TriState;

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every rule implements.
///
/// Scalar rules validate a payload (`str`, `[T]`, a number); tri-state
/// rules validate the whole field and decide for themselves what the empty
/// states mean.
///
/// # Examples
///
/// ```
/// use tristate_validator::foundation::{Validate, ValidationError};
///
/// struct StartsUpper;
///
/// impl Validate for StartsUpper {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         match input.chars().next() {
///             Some(c) if c.is_uppercase() => Ok(()),
///             _ => Err(ValidationError::custom("must start with an uppercase letter")),
///         }
///     }
/// }
///
/// assert!(StartsUpper.validate("Alice").is_ok());
/// assert!(StartsUpper.validate("alice").is_err());
/// ```
pub trait Validate {
    /// The type being validated; `?Sized` so `str` and `[T]` work.
    type Input: ?Sized;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Combinator methods, implemented for every [`Validate`].
///
/// # Examples
///
/// ```
/// use tristate_core::Optional;
/// use tristate_validator::prelude::*;
///
/// let nickname = min_length(2).and(max_length(8)).on_value::<Optional<String>>();
///
/// assert!(nickname.validate(&Optional::new("bob".to_owned())).is_ok());
/// assert!(nickname.validate(&Optional::new("b".to_owned())).is_err());
/// assert!(nickname.validate(&Optional::NULL).is_ok());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both rules must pass; the first failure is returned.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one rule must pass.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the rule.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Lifts a payload rule to a tri-state field of type `O`.
    ///
    /// Undefined and null fields pass; a field with a value is checked.
    fn on_value<O>(self) -> OnValue<Self, O>
    where
        O: TriState + ?Sized,
        O::Payload: Borrow<Self::Input>,
    {
        OnValue::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::on_value::OnValue;
pub use crate::combinators::or::Or;

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn references_and_boxes_validate() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysValid);
        assert!(boxed.validate("x").is_ok());
        assert!((&AlwaysValid).validate("x").is_ok());
    }
}
