//! Record-level reading and writing.

use serde_json::{Map, Value};
use tristate_core::{Optional, OptionalCollection};

use crate::converter::JsonPayload;
use crate::error::JsonError;
use crate::mapper::JsonMapper;

/// A record whose fields are written one property at a time.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tristate_core::Optional;
/// use tristate_json::{JsonError, JsonMapper, JsonRecord, ObjectReader, ObjectWriter};
///
/// struct Patch {
///     display_name: Optional<String>,
/// }
///
/// impl JsonRecord for Patch {
///     fn write(&self, writer: &mut ObjectWriter<'_>) -> Result<(), JsonError> {
///         writer.optional("display_name", &self.display_name)
///     }
///
///     fn read(reader: &mut ObjectReader<'_>) -> Result<Self, JsonError> {
///         Ok(Self { display_name: reader.optional("display_name")? })
///     }
/// }
///
/// let mapper = JsonMapper::new();
/// let patch = Patch { display_name: Optional::NULL };
/// assert_eq!(mapper.to_value(&patch)?, json!({ "displayName": null }));
///
/// let empty: Patch = mapper.from_value(json!({}))?;
/// assert!(empty.display_name.is_undefined());
/// # Ok::<(), JsonError>(())
/// ```
pub trait JsonRecord {
    fn write(&self, writer: &mut ObjectWriter<'_>) -> Result<(), JsonError>;

    fn read(reader: &mut ObjectReader<'_>) -> Result<Self, JsonError>
    where
        Self: Sized;
}

/// Builds a JSON object; undefined fields are skipped.
#[derive(Debug)]
pub struct ObjectWriter<'m> {
    mapper: &'m JsonMapper,
    properties: Map<String, Value>,
}

impl<'m> ObjectWriter<'m> {
    pub(crate) fn new(mapper: &'m JsonMapper) -> Self {
        Self {
            mapper,
            properties: Map::new(),
        }
    }

    pub fn optional<T: JsonPayload>(
        &mut self,
        name: &str,
        value: &Optional<T>,
    ) -> Result<(), JsonError> {
        let key = self.key(name);
        let token = self.mapper.encode(value).map_err(|e| e.in_field(key.clone()))?;
        self.put(key, token);
        Ok(())
    }

    pub fn collection<T: JsonPayload>(
        &mut self,
        name: &str,
        value: &OptionalCollection<T>,
    ) -> Result<(), JsonError> {
        let key = self.key(name);
        let token = self
            .mapper
            .encode_collection(value)
            .map_err(|e| e.in_field(key.clone()))?;
        self.put(key, token);
        Ok(())
    }

    /// Writes a plain, always-present field.
    pub fn value<T: JsonPayload>(&mut self, name: &str, value: &T) -> Result<(), JsonError> {
        let key = self.key(name);
        let token = self
            .mapper
            .registry()
            .resolve::<T>()
            .and_then(|converter| converter.to_json(value))
            .map_err(|e| e.in_field(key.clone()))?;
        self.properties.insert(key, token);
        Ok(())
    }

    #[must_use]
    pub fn finish(self) -> Value {
        Value::Object(self.properties)
    }

    fn key(&self, name: &str) -> String {
        self.mapper.options().naming.apply(name).into_owned()
    }

    fn put(&mut self, key: String, token: Option<Value>) {
        if let Some(token) = token {
            self.properties.insert(key, token);
        }
    }
}

/// Reads fields out of a JSON object; unknown properties are ignored.
#[derive(Debug)]
pub struct ObjectReader<'m> {
    mapper: &'m JsonMapper,
    properties: Map<String, Value>,
}

impl<'m> ObjectReader<'m> {
    pub(crate) fn new(mapper: &'m JsonMapper, properties: Map<String, Value>) -> Self {
        Self { mapper, properties }
    }

    /// A missing property reads as undefined.
    pub fn optional<T: JsonPayload>(&mut self, name: &str) -> Result<Optional<T>, JsonError> {
        let key = self.key(name);
        let token = self.properties.remove(&key);
        self.mapper.decode(token).map_err(|e| e.in_field(key))
    }

    pub fn collection<T: JsonPayload>(
        &mut self,
        name: &str,
    ) -> Result<OptionalCollection<T>, JsonError> {
        let key = self.key(name);
        let token = self.properties.remove(&key);
        self.mapper.decode_collection(token).map_err(|e| e.in_field(key))
    }

    /// Reads a plain field; a missing property is an error.
    pub fn value<T: JsonPayload>(&mut self, name: &str) -> Result<T, JsonError> {
        let key = self.key(name);
        let Some(token) = self.properties.remove(&key) else {
            return Err(JsonError::MissingField { field: key });
        };
        self.mapper
            .registry()
            .resolve::<T>()
            .and_then(|converter| converter.from_json(token))
            .map_err(|e| e.in_field(key))
    }

    fn key(&self, name: &str) -> String {
        self.mapper.options().naming.apply(name).into_owned()
    }
}
