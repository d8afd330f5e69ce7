//! Configuration errors raised while building rules.
//!
//! These are programmer mistakes caught at construction time. Validation
//! failures are reported separately through
//! [`ValidationError`](crate::foundation::ValidationError).

/// A rule could not be built from the given configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// A lower bound below zero.
    #[error("minimum must not be negative, got {min}")]
    NegativeMin {
        /// The rejected minimum.
        min: i64,
    },

    /// A bounded maximum that is not strictly above the minimum.
    #[error("maximum {max} must be greater than minimum {min}, or -1 for no limit")]
    MaxNotAboveMin {
        min: i64,
        max: i64,
    },

    /// A length maximum below the minimum.
    #[error("maximum length {max} must not be less than minimum length {min}")]
    MaxBelowMin {
        min: i64,
        max: i64,
    },

    /// An exclusive range whose bounds are equal admits no value.
    #[error("exclusive range between {bound} and {bound} is empty")]
    EmptyExclusiveRange {
        /// The shared bound, rendered.
        bound: String,
    },

    /// The pattern did not compile.
    #[error("invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),
}
