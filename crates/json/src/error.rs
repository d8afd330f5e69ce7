//! JSON mapping errors.

use serde_json::Value;

/// Errors from encoding or decoding tri-state values.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum JsonError {
    /// An undefined value was written as a standalone token.
    #[error("undefined value cannot be written; omit the property instead")]
    UndefinedValue,

    /// The state claims a payload that is not stored.
    #[error("state is `has_value` but no payload is stored")]
    MissingPayload,

    /// A payload encoded to `null`, which would decode as the null state.
    #[error("payload of type `{type_name}` encoded to null; use the null state instead")]
    NullPayload {
        type_name: &'static str,
    },

    /// A collection field received a non-array token.
    #[error("expected an array or null, found {found}")]
    ExpectedArray {
        /// JSON kind of the offending token.
        found: &'static str,
    },

    /// A record received a non-object token.
    #[error("expected an object, found {found}")]
    ExpectedObject {
        /// JSON kind of the offending token.
        found: &'static str,
    },

    /// A required plain field was absent.
    #[error("missing field `{field}`")]
    MissingField {
        /// Property name as it appears on the wire.
        field: String,
    },

    /// A property failed to encode or decode.
    #[error("invalid value for `{field}`: {source}")]
    Field {
        /// Property name as it appears on the wire.
        field: String,
        #[source]
        source: Box<JsonError>,
    },

    /// A custom converter rejected a value.
    #[error("converter for `{type_name}` failed: {message}")]
    Converter {
        type_name: &'static str,
        message: String,
    },

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl JsonError {
    /// Wraps this error with the property it came from.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Builds a [`JsonError::Converter`] for `T`.
    pub fn converter<T: ?Sized>(message: impl Into<String>) -> Self {
        Self::Converter {
            type_name: std::any::type_name::<T>(),
            message: message.into(),
        }
    }
}

/// Name of a token's JSON kind, for error messages.
pub(crate) const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
