//! Payload converters.
//!
//! A converter maps one element type to and from a JSON token. The mapper
//! handles the tri-state envelope (omitted property, `null`, value) and
//! hands only real payloads to the converter.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::JsonError;

/// Element types the mapper can carry.
///
/// Blanket-implemented for every owned serde type, which is what the default
/// converter needs.
pub trait JsonPayload: Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> JsonPayload for T where T: Serialize + DeserializeOwned + Send + Sync + 'static {}

/// Converts one payload type to and from JSON.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use tristate_json::{JsonError, ValueConverter};
///
/// /// Writes booleans as `"yes"` / `"no"`.
/// struct YesNo;
///
/// impl ValueConverter<bool> for YesNo {
///     fn to_json(&self, value: &bool) -> Result<Value, JsonError> {
///         Ok(json!(if *value { "yes" } else { "no" }))
///     }
///
///     fn from_json(&self, value: Value) -> Result<bool, JsonError> {
///         match value.as_str() {
///             Some("yes") => Ok(true),
///             Some("no") => Ok(false),
///             _ => Err(JsonError::converter::<bool>("expected \"yes\" or \"no\"")),
///         }
///     }
/// }
///
/// assert_eq!(YesNo.to_json(&true)?, json!("yes"));
/// assert!(YesNo.from_json(json!(1)).is_err());
/// # Ok::<(), JsonError>(())
/// ```
pub trait ValueConverter<T>: Send + Sync {
    fn to_json(&self, value: &T) -> Result<Value, JsonError>;

    fn from_json(&self, value: Value) -> Result<T, JsonError>;
}

/// The default converter: plain serde round trip through [`serde_json`].
pub struct SerdeConverter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> SerdeConverter<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SerdeConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SerdeConverter<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SerdeConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SerdeConverter<{}>", std::any::type_name::<T>())
    }
}

impl<T: Serialize + DeserializeOwned> ValueConverter<T> for SerdeConverter<T> {
    fn to_json(&self, value: &T) -> Result<Value, JsonError> {
        Ok(serde_json::to_value(value)?)
    }

    fn from_json(&self, value: Value) -> Result<T, JsonError> {
        Ok(serde_json::from_value(value)?)
    }
}
