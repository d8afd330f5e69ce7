//! The mapping entry point.

use serde_json::Value;
use tristate_core::{Optional, OptionalCollection, OptionalState};

use crate::converter::{JsonPayload, ValueConverter};
use crate::error::{JsonError, kind};
use crate::object::{JsonRecord, ObjectReader, ObjectWriter};
use crate::options::JsonOptions;
use crate::registry::ConverterRegistry;

/// Encodes and decodes tri-state values as JSON tokens.
///
/// A property-level token is an `Option<Value>`: `None` is an omitted
/// property, `Some(Value::Null)` is an explicit `null`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tristate_core::Optional;
/// use tristate_json::JsonMapper;
///
/// let mapper = JsonMapper::new();
///
/// assert_eq!(mapper.encode(&Optional::<i32>::UNDEFINED)?, None);
/// assert_eq!(mapper.encode(&Optional::<i32>::NULL)?, Some(json!(null)));
/// assert_eq!(mapper.encode(&Optional::new(23))?, Some(json!(23)));
///
/// assert!(mapper.decode::<i32>(None)?.is_undefined());
/// assert!(mapper.decode::<i32>(Some(json!(null)))?.is_null());
/// # Ok::<(), tristate_json::JsonError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonMapper {
    registry: ConverterRegistry,
    options: JsonOptions,
}

impl JsonMapper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: JsonOptions) -> Self {
        Self {
            registry: ConverterRegistry::new(),
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> &JsonOptions {
        &self.options
    }

    #[must_use]
    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    /// Registers a custom converter; see [`ConverterRegistry::register`].
    pub fn register<T, C>(&self, converter: C) -> bool
    where
        T: 'static,
        C: ValueConverter<T> + 'static,
    {
        self.registry.register(converter)
    }

    /// Encodes a property value. `None` means the property is omitted.
    ///
    /// A payload that encodes to `null` is an error, since it would read
    /// back as the null state.
    pub fn encode<T: JsonPayload>(&self, value: &Optional<T>) -> Result<Option<Value>, JsonError> {
        match value.state() {
            OptionalState::Undefined => Ok(None),
            OptionalState::Null => Ok(Some(Value::Null)),
            OptionalState::HasValue => {
                let payload = value.has_value().ok_or(JsonError::MissingPayload)?;
                match self.registry.resolve::<T>()?.to_json(payload)? {
                    Value::Null => Err(JsonError::NullPayload {
                        type_name: std::any::type_name::<T>(),
                    }),
                    token => Ok(Some(token)),
                }
            }
        }
    }

    /// Encodes a standalone value, where omission is impossible.
    pub fn encode_value<T: JsonPayload>(&self, value: &Optional<T>) -> Result<Value, JsonError> {
        self.encode(value)?.ok_or(JsonError::UndefinedValue)
    }

    /// Decodes a property token; `None` is a missing property.
    pub fn decode<T: JsonPayload>(&self, token: Option<Value>) -> Result<Optional<T>, JsonError> {
        match token {
            None => Ok(Optional::UNDEFINED),
            Some(Value::Null) => Ok(Optional::NULL),
            Some(value) => self.registry.resolve::<T>()?.from_json(value).map(Optional::new),
        }
    }

    /// Encodes a collection property. Each item goes through the element converter.
    pub fn encode_collection<T: JsonPayload>(
        &self,
        value: &OptionalCollection<T>,
    ) -> Result<Option<Value>, JsonError> {
        match value.state() {
            OptionalState::Undefined => Ok(None),
            OptionalState::Null => Ok(Some(Value::Null)),
            OptionalState::HasValue => {
                let items = value.has_value().ok_or(JsonError::MissingPayload)?;
                let converter = self.registry.resolve::<T>()?;
                let tokens = items
                    .iter()
                    .map(|item| converter.to_json(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Some(Value::Array(tokens)))
            }
        }
    }

    /// Decodes a collection property; any token other than an array or `null` fails.
    pub fn decode_collection<T: JsonPayload>(
        &self,
        token: Option<Value>,
    ) -> Result<OptionalCollection<T>, JsonError> {
        match token {
            None => Ok(OptionalCollection::UNDEFINED),
            Some(Value::Null) => Ok(OptionalCollection::NULL),
            Some(Value::Array(tokens)) => {
                let converter = self.registry.resolve::<T>()?;
                tokens
                    .into_iter()
                    .map(|token| converter.from_json(token))
                    .collect::<Result<Vec<_>, _>>()
                    .map(OptionalCollection::new)
            }
            Some(other) => Err(JsonError::ExpectedArray { found: kind(&other) }),
        }
    }

    /// Writes a record as a JSON object.
    pub fn to_value<R: JsonRecord + ?Sized>(&self, record: &R) -> Result<Value, JsonError> {
        let mut writer = ObjectWriter::new(self);
        record.write(&mut writer)?;
        Ok(writer.finish())
    }

    /// Reads a record from a JSON object.
    pub fn from_value<R: JsonRecord>(&self, value: Value) -> Result<R, JsonError> {
        match value {
            Value::Object(properties) => R::read(&mut ObjectReader::new(self, properties)),
            other => Err(JsonError::ExpectedObject { found: kind(&other) }),
        }
    }

    pub fn to_json_string<R: JsonRecord + ?Sized>(&self, record: &R) -> Result<String, JsonError> {
        Ok(serde_json::to_string(&self.to_value(record)?)?)
    }

    pub fn from_json_str<R: JsonRecord>(&self, json: &str) -> Result<R, JsonError> {
        self.from_value(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn encode_value_rejects_undefined() {
        let mapper = JsonMapper::new();
        let err = mapper.encode_value(&Optional::<i32>::UNDEFINED).unwrap_err();
        assert!(matches!(err, JsonError::UndefinedValue));
        assert_eq!(mapper.encode_value(&Optional::<i32>::NULL).unwrap(), Value::Null);
    }

    #[test]
    fn null_payload_is_rejected() {
        let mapper = JsonMapper::new();
        let err = mapper.encode(&Optional::new(None::<i32>)).unwrap_err();
        assert!(matches!(err, JsonError::NullPayload { .. }));
        assert_eq!(
            mapper.encode(&Optional::new(Some(4))).unwrap(),
            Some(json!(4))
        );
    }

    #[test]
    fn collection_tokens() {
        let mapper = JsonMapper::new();
        let tags = OptionalCollection::new(vec!["a".to_owned(), "b".to_owned()]);

        assert_eq!(mapper.encode_collection(&tags).unwrap(), Some(json!(["a", "b"])));
        assert_eq!(
            mapper.encode_collection(&OptionalCollection::<String>::NULL).unwrap(),
            Some(Value::Null)
        );
        assert_eq!(mapper.encode_collection(&OptionalCollection::<String>::UNDEFINED).unwrap(), None);
        assert_eq!(mapper.decode_collection::<String>(Some(json!(["a", "b"]))).unwrap(), tags);
    }

    #[test]
    fn empty_array_decodes_to_empty_value() {
        let mapper = JsonMapper::new();
        let decoded = mapper.decode_collection::<i32>(Some(json!([]))).unwrap();
        assert!(decoded.is_set());
        assert_eq!(decoded.has_value(), Some(&[][..]));
    }

    #[test]
    fn collection_rejects_scalar() {
        let mapper = JsonMapper::new();
        let err = mapper.decode_collection::<i32>(Some(json!("oops"))).unwrap_err();
        assert_eq!(err.to_string(), "expected an array or null, found string");
    }

    #[test]
    fn record_requires_object() {
        #[derive(Debug)]
        struct Empty;

        impl JsonRecord for Empty {
            fn write(&self, _writer: &mut ObjectWriter<'_>) -> Result<(), JsonError> {
                Ok(())
            }

            fn read(_reader: &mut ObjectReader<'_>) -> Result<Self, JsonError> {
                Ok(Empty)
            }
        }

        let mapper = JsonMapper::new();
        assert_eq!(mapper.to_value(&Empty).unwrap(), json!({}));
        let err = mapper.from_value::<Empty>(json!([1])).unwrap_err();
        assert!(matches!(err, JsonError::ExpectedObject { found: "array" }));
    }
}
