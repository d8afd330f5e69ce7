//! Ordered range rules.

use std::fmt;

use crate::error::RuleError;
use crate::foundation::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Ends {
    Inclusive,
    Exclusive,
}

/// Validates that a value lies between two bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Between<T> {
    from: T,
    to: T,
    ends: Ends,
}

impl<T: PartialOrd> Between<T> {
    /// `from <= value <= to`. Reversed bounds are swapped.
    pub fn inclusive(from: T, to: T) -> Self {
        let (from, to) = ordered(from, to);
        Self {
            from,
            to,
            ends: Ends::Inclusive,
        }
    }

    /// `from < value < to`. Reversed bounds are swapped; equal bounds are
    /// rejected.
    pub fn exclusive(from: T, to: T) -> Result<Self, RuleError>
    where
        T: fmt::Display,
    {
        if from == to {
            return Err(RuleError::EmptyExclusiveRange {
                bound: from.to_string(),
            });
        }

        let (from, to) = ordered(from, to);
        Ok(Self {
            from,
            to,
            ends: Ends::Exclusive,
        })
    }

    pub fn lower(&self) -> &T {
        &self.from
    }

    pub fn upper(&self) -> &T {
        &self.to
    }

    fn contains(&self, value: &T) -> bool {
        match self.ends {
            Ends::Inclusive => *value >= self.from && *value <= self.to,
            Ends::Exclusive => *value > self.from && *value < self.to,
        }
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a > b { (b, a) } else { (a, b) }
}

impl<T: PartialOrd + fmt::Display> Validate for Between<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if self.contains(input) {
            return Ok(());
        }

        let ends = match self.ends {
            Ends::Inclusive => "inclusive",
            Ends::Exclusive => "exclusive",
        };

        Err(ValidationError::new(
            "between",
            format!(
                "must be between {} and {} ({ends}), found {input}",
                self.from, self.to
            ),
        )
        .with_param("from", self.from.to_string())
        .with_param("to", self.to.to_string())
        .with_param("value", input.to_string()))
    }
}

pub fn inclusive_between<T: PartialOrd>(from: T, to: T) -> Between<T> {
    Between::inclusive(from, to)
}

pub fn exclusive_between<T: PartialOrd + fmt::Display>(from: T, to: T) -> Result<Between<T>, RuleError> {
    Between::exclusive(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, true)]
    #[case(5, true)]
    #[case(10, true)]
    #[case(0, false)]
    #[case(11, false)]
    fn inclusive_ends(#[case] value: i32, #[case] ok: bool) {
        assert_eq!(inclusive_between(1, 10).validate(&value).is_ok(), ok);
    }

    #[rstest]
    #[case(1, false)]
    #[case(5, true)]
    #[case(10, false)]
    fn exclusive_ends(#[case] value: i32, #[case] ok: bool) {
        assert_eq!(exclusive_between(1, 10).unwrap().validate(&value).is_ok(), ok);
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let rule = inclusive_between(10, 1);
        assert_eq!((*rule.lower(), *rule.upper()), (1, 10));
        assert!(rule.validate(&3).is_ok());
    }

    #[test]
    fn equal_exclusive_bounds_are_rejected() {
        assert_eq!(
            exclusive_between(4, 4).unwrap_err(),
            RuleError::EmptyExclusiveRange { bound: "4".into() }
        );
    }

    #[test]
    fn failure_message() {
        let error = inclusive_between(1.5, 2.5).validate(&3.0).unwrap_err();
        assert_eq!(error.message, "must be between 1.5 and 2.5 (inclusive), found 3");
    }
}
