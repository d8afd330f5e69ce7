//! Lifts a payload rule to a tri-state field.
//!
//! This is the wrapper every value-shape rule goes through: an undefined
//! field is never checked, a null field has nothing to check, and only a
//! field with a value reaches the inner rule.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use tristate_core::TriState;

use crate::foundation::{Validate, ValidationError};

/// Runs `V` against the payload of a tri-state field `O`.
///
/// # Examples
///
/// ```
/// use tristate_core::OptionalCollection;
/// use tristate_validator::combinators::on_value;
/// use tristate_validator::foundation::Validate;
/// use tristate_validator::validators::count;
///
/// let tags = on_value::<OptionalCollection<String>, _>(count(1, Some(2))?);
///
/// assert!(tags.validate(&OptionalCollection::NULL).is_ok());
/// assert!(tags.validate(&vec!["a".to_owned()].into()).is_ok());
///
/// let three: OptionalCollection<String> = ["a", "b", "c"].map(String::from).into_iter().collect();
/// assert!(tags.validate(&three).is_err());
/// # Ok::<(), tristate_validator::RuleError>(())
/// ```
pub struct OnValue<V, O: ?Sized> {
    inner: V,
    _field: PhantomData<fn(&O)>,
}

impl<V, O: ?Sized> OnValue<V, O> {
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _field: PhantomData,
        }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, O> Validate for OnValue<V, O>
where
    V: Validate,
    O: TriState + ?Sized,
    O::Payload: Borrow<V::Input>,
{
    type Input = O;

    fn validate(&self, field: &O) -> Result<(), ValidationError> {
        match field.has_value() {
            Some(payload) => self.inner.validate(payload.borrow()),
            None => Ok(()),
        }
    }
}

impl<V: Clone, O: ?Sized> Clone for OnValue<V, O> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<V: fmt::Debug, O: ?Sized> fmt::Debug for OnValue<V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OnValue").field(&self.inner).finish()
    }
}

pub fn on_value<O, V>(validator: V) -> OnValue<V, O>
where
    V: Validate,
    O: TriState + ?Sized,
    O::Payload: Borrow<V::Input>,
{
    OnValue::new(validator)
}
