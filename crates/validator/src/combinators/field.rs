//! Validates one field of a record through an accessor.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Applies `V` to the field of `M` returned by the accessor `F`.
///
/// Failures are tagged with the field name.
pub struct Field<M, O: ?Sized, V, F> {
    name: Cow<'static, str>,
    validator: V,
    accessor: F,
    _phantom: PhantomData<fn(&M) -> &O>,
}

impl<M, O, V, F> Field<M, O, V, F>
where
    O: ?Sized,
    V: Validate<Input = O>,
    F: Fn(&M) -> &O,
{
    pub fn new(name: impl Into<Cow<'static, str>>, accessor: F, validator: V) -> Self {
        Self {
            name: name.into(),
            validator,
            accessor,
            _phantom: PhantomData,
        }
    }
}

impl<M, O: ?Sized, V, F> Field<M, O, V, F> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }
}

impl<M, O, V, F> Validate for Field<M, O, V, F>
where
    O: ?Sized,
    V: Validate<Input = O>,
    F: Fn(&M) -> &O,
{
    type Input = M;

    fn validate(&self, record: &M) -> Result<(), ValidationError> {
        self.validator
            .validate((self.accessor)(record))
            .map_err(|error| error.with_field(self.name.clone()))
    }
}

impl<M, O: ?Sized, V: Clone, F: Clone> Clone for Field<M, O, V, F> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            validator: self.validator.clone(),
            accessor: self.accessor.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<M, O: ?Sized, V: fmt::Debug, F> fmt::Debug for Field<M, O, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("validator", &self.validator)
            .field("accessor", &"<function>")
            .finish()
    }
}

/// Builds a named field rule.
///
/// # Examples
///
/// ```
/// use tristate_core::Optional;
/// use tristate_validator::combinators::field;
/// use tristate_validator::foundation::Validate;
/// use tristate_validator::validators::not_null;
///
/// struct Patch {
///     name: Optional<String>,
/// }
///
/// let rule = field("name", |p: &Patch| &p.name, not_null());
/// let error = rule.validate(&Patch { name: Optional::NULL }).unwrap_err();
/// assert_eq!(error.field.as_deref(), Some("name"));
/// ```
pub fn field<M, O, V, F>(name: impl Into<Cow<'static, str>>, accessor: F, validator: V) -> Field<M, O, V, F>
where
    O: ?Sized,
    V: Validate<Input = O>,
    F: Fn(&M) -> &O,
{
    Field::new(name, accessor, validator)
}
