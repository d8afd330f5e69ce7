//! # tristate-json
//!
//! Token-level JSON mapping for [`Optional`](tristate_core::Optional) and
//! [`OptionalCollection`](tristate_core::OptionalCollection).
//!
//! `tristate-core`'s serde impls cover the common case. This crate is for
//! callers that build JSON by hand or need per-type payload converters:
//!
//! - [`JsonMapper`] encodes and decodes single properties and whole records
//! - [`ConverterRegistry`] holds custom [`ValueConverter`]s and falls back to
//!   serde for everything else
//! - [`JsonRecord`] with [`ObjectWriter`] / [`ObjectReader`] describes a
//!   record field by field
//! - [`JsonOptions`] configures property naming
//!
//! | state       | written as        | read from         |
//! |-------------|-------------------|-------------------|
//! | undefined   | property omitted  | property missing  |
//! | null        | `null`            | `null`            |
//! | has value   | converter output  | any other token   |

pub mod converter;
pub mod error;
pub mod mapper;
pub mod object;
pub mod options;
pub mod registry;

pub use converter::{JsonPayload, SerdeConverter, ValueConverter};
pub use error::JsonError;
pub use mapper::JsonMapper;
pub use object::{JsonRecord, ObjectReader, ObjectWriter};
pub use options::{JsonOptions, NamingStrategy};
pub use registry::ConverterRegistry;
