//! NOT combinator: inverts a rule.

use crate::foundation::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for Not<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "validation should have failed but passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

pub fn not<V: Validate>(validator: V) -> Not<V> {
    Not::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::email;

    #[test]
    fn inverts_result() {
        let rule = not(email());
        assert!(rule.validate("not an address").is_ok());
        assert!(rule.validate("a@b.io").is_err());
    }

    #[test]
    fn double_negation() {
        let rule = email().not().not();
        assert!(rule.validate("a@b.io").is_ok());
    }
}
