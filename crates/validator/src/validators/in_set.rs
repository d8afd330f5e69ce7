//! Set-membership rule.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::foundation::{Validate, ValidationError};

/// Validates that a value is one of an allowed set.
///
/// The set keeps insertion order so failure messages list values the way
/// they were configured.
///
/// # Examples
///
/// ```
/// use tristate_validator::foundation::Validate;
/// use tristate_validator::validators::in_set;
///
/// let status = in_set::<String, _>(["open", "closed"]);
/// assert!(status.validate(&"open".to_owned()).is_ok());
///
/// let error = status.validate(&"pending".to_owned()).unwrap_err();
/// assert_eq!(error.message, "has invalid value 'pending', valid value set is: [open, closed]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InSet<T: Hash + Eq> {
    allowed: IndexSet<T>,
}

impl<T: Hash + Eq> InSet<T> {
    pub fn new(allowed: IndexSet<T>) -> Self {
        Self { allowed }
    }

    pub fn allowed(&self) -> &IndexSet<T> {
        &self.allowed
    }
}

impl<T: Hash + Eq + fmt::Display> Validate for InSet<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if self.allowed.contains(input) {
            return Ok(());
        }

        let valid_set = self
            .allowed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        Err(ValidationError::new(
            "in_set",
            format!("has invalid value '{input}', valid value set is: [{valid_set}]"),
        )
        .with_param("valid_set", valid_set))
    }
}

pub fn in_set<T, I>(allowed: I) -> InSet<T>
where
    T: Hash + Eq,
    I: IntoIterator,
    I::Item: Into<T>,
{
    InSet::new(allowed.into_iter().map(Into::into).collect())
}
