//! Built-in rules.
//!
//! Payload rules validate an unwrapped value and are lifted to tri-state
//! fields with [`on_value`](crate::combinators::on_value):
//!
//! - **Length**: [`Length`] over `str`, counted in characters
//! - **Count**: [`Count`] over `[T]`
//! - **Pattern**: [`Matches`]
//! - **Email**: [`Email`]
//! - **URI**: [`Uri`] with a [`UriScheme`] allow-list
//! - **Membership**: [`InSet`]
//! - **Range**: [`Between`]
//!
//! Presence rules validate the field itself and fail on null:
//! [`NotNull`], [`NotEmpty`].

pub mod between;
pub mod bounds;
pub mod count;
pub mod email;
pub mod in_set;
pub mod length;
pub mod pattern;
pub mod presence;
pub mod uri;

pub use between::{Between, exclusive_between, inclusive_between};
pub use bounds::{Bounds, UNBOUNDED};
pub use count::{Count, count, count_sentinel, max_count, min_count};
pub use email::{Email, email};
pub use in_set::{InSet, in_set};
pub use length::{Length, exact_length, length, length_sentinel, max_length, min_length};
pub use pattern::{Matches, matches, matches_pattern};
pub use presence::{Blank, NotEmpty, NotNull, not_empty, not_null};
pub use uri::{Uri, UriScheme, any_uri, http_url, https_url, uri};
