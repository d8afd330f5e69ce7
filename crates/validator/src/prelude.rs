//! `use tristate_validator::prelude::*;` brings in the traits, the built-in
//! rules and the combinators.

pub use crate::combinators::{
    And, Field, Not, OnValue, Or, and, field, not, on_value, or,
};
pub use crate::error::RuleError;
pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};
pub use crate::rule_set::RuleSet;

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
