//! Core validation types and traits.
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`] for a single failure,
//!   [`ValidationErrors`] for failures accumulated across rules

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Runs every validator against the same input and accumulates failures.
///
/// # Examples
///
/// ```
/// use tristate_validator::foundation::{Validate, validate_with_all};
/// use tristate_validator::validators::{max_length, min_length};
///
/// let min = min_length(3);
/// let max = max_length(4);
/// let rules: [&dyn Validate<Input = str>; 2] = [&min, &max];
///
/// assert!(validate_with_all("abcd", &rules).is_ok());
/// assert_eq!(validate_with_all("ab", &rules).unwrap_err().len(), 1);
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let errors: ValidationErrors = validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect();

    errors.into_result(())
}
