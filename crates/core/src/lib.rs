//! # Tristate Core
//!
//! Tri-state optional values for JSON and PATCH-style APIs.
//!
//! A plain `Option<T>` cannot tell "the client did not send this field" from
//! "the client sent `null`". The containers in this crate keep the two apart:
//!
//! - **Undefined**: the field was absent and should be left untouched.
//! - **Null**: the field was explicitly cleared.
//! - **HasValue**: the field carries a payload.
//!
//! ## Key Components
//!
//! - [`Optional`]: scalar tri-state container
//! - [`OptionalCollection`]: sequence tri-state container, where an empty
//!   sequence is a value and not null
//! - [`TriState`]: the capability trait validation and serialization code
//!   are written against
//! - [`OptionalState`]: the state tag itself
//!
//! ## Usage
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use tristate_core::{Optional, OptionalCollection};
//!
//! #[derive(Serialize, Deserialize)]
//! struct UserPatch {
//!     #[serde(default, skip_serializing_if = "Optional::is_undefined")]
//!     nickname: Optional<String>,
//!     #[serde(default, skip_serializing_if = "OptionalCollection::is_undefined")]
//!     tags: OptionalCollection<String>,
//! }
//!
//! let patch: UserPatch = serde_json::from_str(r#"{"nickname":null}"#).unwrap();
//! assert!(patch.nickname.is_null());
//! assert!(patch.tags.is_undefined());
//! assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"nickname":null}"#);
//! ```

mod collection;
mod optional;
#[cfg(feature = "serde")]
mod serde_impl;
mod state;
mod traits;

pub use collection::OptionalCollection;
pub use optional::Optional;
pub use state::{OptionalState, StateError};
pub use traits::TriState;
