//! OR combinator: at least one rule must pass.

use crate::foundation::{Validate, ValidationError};

/// Combines two rules with logical OR.
///
/// The right rule only runs when the left one fails. When both fail, the
/// error nests both failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let Err(left_error) = self.left.validate(input) else {
            return Ok(());
        };

        match self.right.validate(input) {
            Ok(()) => Ok(()),
            Err(right_error) => Err(ValidationError::new("or_failed", "all alternatives failed")
                .with_nested(vec![left_error, right_error])),
        }
    }
}

pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{exact_length, https_url};

    #[test]
    fn either_alternative_passes() {
        let rule = or(exact_length(2), exact_length(4));
        assert!(rule.validate("ab").is_ok());
        assert!(rule.validate("abcd").is_ok());
    }

    #[test]
    fn both_failures_are_nested() {
        let rule = or(exact_length(2), https_url());
        let error = rule.validate("abc").unwrap_err();
        assert_eq!(error.code, "or_failed");
        assert_eq!(error.nested.len(), 2);
        assert_eq!(error.nested[1].code, "uri");
    }
}
