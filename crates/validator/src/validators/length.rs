//! String length rules.
//!
//! Length is measured in Unicode scalar values, not bytes.

use crate::error::RuleError;
use crate::foundation::{Validate, ValidationError};
use crate::validators::bounds::Bounds;

/// Validates that a string's character count lies within [`Bounds`].
///
/// # Examples
///
/// ```
/// use tristate_validator::foundation::Validate;
/// use tristate_validator::validators::length;
///
/// let rule = length(1, Some(2))?;
/// assert!(rule.validate("ab").is_ok());
/// assert!(rule.validate("äöü").is_err());
/// # Ok::<(), tristate_validator::RuleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Length {
    bounds: Bounds,
}

impl Length {
    pub const fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl Validate for Length {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let len = input.chars().count();
        if self.bounds.contains(len) {
            Ok(())
        } else {
            Err(ValidationError::out_of_bounds(
                "length",
                "characters",
                self.bounds.min(),
                self.bounds.max(),
                len,
            ))
        }
    }
}

/// Length within `[min, max]`; `max == min` is an exact length.
pub fn length(min: usize, max: Option<usize>) -> Result<Length, RuleError> {
    Bounds::length(min, max).map(Length::new)
}

/// Length within `[min, max]` in integer form, `-1` meaning no maximum.
///
/// As with [`length`], `max == min` is an exact length.
pub fn length_sentinel(min: i64, max: i64) -> Result<Length, RuleError> {
    Bounds::length_sentinel(min, max).map(Length::new)
}

#[must_use]
pub const fn exact_length(n: usize) -> Length {
    Length::new(Bounds::exactly(n))
}

#[must_use]
pub const fn min_length(min: usize) -> Length {
    Length::new(Bounds::at_least(min))
}

#[must_use]
pub const fn max_length(max: usize) -> Length {
    Length::new(Bounds::at_most(max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("a", true)]
    #[case("ab", true)]
    #[case("abc", false)]
    fn one_to_two(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(length(1, Some(2)).unwrap().validate(input).is_ok(), ok);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert!(exact_length(3).validate("日本語").is_ok());
    }

    #[test]
    fn shorthands() {
        assert!(min_length(2).validate("a").is_err());
        assert!(max_length(2).validate("abc").is_err());
        assert!(max_length(2).validate("").is_ok());
    }

    #[rstest]
    #[case("a", false)]
    #[case("ab", true)]
    #[case("abc", false)]
    fn sentinel_exact_length(#[case] input: &str, #[case] ok: bool) {
        let rule = length_sentinel(2, 2).unwrap();
        assert_eq!(rule.validate(input).is_ok(), ok);
        assert_eq!(rule, length(2, Some(2)).unwrap());
    }

    #[test]
    fn reversed_bounds_are_rejected() {
        assert!(length(3, Some(1)).is_err());
        assert!(length_sentinel(3, 1).is_err());
        assert!(length_sentinel(3, -1).is_ok());
    }
}
