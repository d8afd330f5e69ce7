//! # tristate-validator
//!
//! Validation rules for tri-state fields.
//!
//! Rules follow one convention: an **undefined** field is never checked, a
//! **null** field passes every value-shape rule (length, count, pattern,
//! membership, range, URI, email) and fails only the presence rules
//! ([`not_null`](validators::not_null), [`not_empty`](validators::not_empty)),
//! and a field **with a value** is unwrapped and checked.
//!
//! ## Quick Start
//!
//! ```rust
//! use tristate_core::{Optional, OptionalCollection};
//! use tristate_validator::prelude::*;
//!
//! let tags = count::<String>(1, Some(2))?.on_value::<OptionalCollection<String>>();
//! assert!(tags.validate(&OptionalCollection::NULL).is_ok());
//!
//! let name = not_empty::<Optional<String>>();
//! assert!(name.validate(&Optional::NULL).is_err());
//! assert!(name.validate(&Optional::UNDEFINED).is_ok());
//!
//! // Bounds are checked when the rule is built.
//! assert!(count::<String>(2, Some(1)).is_err());
//! # Ok::<(), RuleError>(())
//! ```
//!
//! ## Creating Rules
//!
//! Use the [`validator!`] macro for simple payload rules, or implement
//! [`Validate`](foundation::Validate) directly.

// Rules return `ValidationError` unboxed.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod error;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rule_set;
pub mod validators;

pub use error::RuleError;
pub use rule_set::RuleSet;
