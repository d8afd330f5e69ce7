//! # tristate-schema
//!
//! OpenAPI-style schema description for records with tri-state fields.
//!
//! - [`DescribeSchema`] maps a Rust type to a [`Schema`]. `Optional<T>` is
//!   described as `T` and `OptionalCollection<T>` as an array of `T`.
//! - [`ObjectSchema`] assembles record schemas; [`FieldAnnotations`] adds
//!   per-field nullability.
//!
//! ```
//! use tristate_core::Optional;
//! use tristate_schema::{DescribeSchema, FieldAnnotations, ObjectSchema, Schema, SchemaError};
//!
//! struct Address {
//!     city: String,
//! }
//!
//! impl DescribeSchema for Address {
//!     fn describe() -> Result<Schema, SchemaError> {
//!         Ok(ObjectSchema::new().property::<String>("city")?.build())
//!     }
//! }
//!
//! let patch = ObjectSchema::new()
//!     .annotated::<Optional<Address>>("address", FieldAnnotations::NULLABLE)?
//!     .build();
//!
//! assert_eq!(
//!     serde_json::to_string(&patch)?,
//!     r#"{"type":"object","properties":{"address":{"type":"object","properties":{"city":{"type":"string"}},"required":["city"],"nullable":true}}}"#
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod describe;
pub mod error;
pub mod object;
pub mod schema;

pub use describe::DescribeSchema;
pub use error::SchemaError;
pub use object::{FieldAnnotations, ObjectSchema};
pub use schema::{Schema, SchemaType};
