//! Regular-expression rule.

use regex::Regex;

use crate::error::RuleError;
use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// The match is unanchored; anchor the pattern with `^…$` to require a
    /// full match.
    pub Matches { regex: Regex } for str;
    rule(self, input) { self.regex.is_match(input) }
    error(self, input) {
        ValidationError::new(
            "pattern",
            format!("'{input}' is not in the correct format"),
        )
        .with_param("regular_expression", self.regex.as_str().to_owned())
    }
    new(regex: Regex) { Self { regex } }
    fn matches(regex: Regex);
}

impl Matches {
    /// Compiles `pattern`, failing with [`RuleError::InvalidPattern`].
    pub fn pattern(pattern: &str) -> Result<Self, RuleError> {
        Ok(Self::new(Regex::new(pattern)?))
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Builds a [`Matches`] rule from a pattern string.
pub fn matches_pattern(pattern: &str) -> Result<Matches, RuleError> {
    Matches::pattern(pattern)
}
