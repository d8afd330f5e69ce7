//! Converter registry.
//!
//! Owned by a [`JsonMapper`](crate::JsonMapper); there is no process-wide
//! cache. Entries are never replaced once inserted.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::converter::{JsonPayload, SerdeConverter, ValueConverter};
use crate::error::JsonError;

/// Type-erased `Arc<dyn ValueConverter<T>>`.
type ErasedConverter = Arc<dyn Any + Send + Sync>;

/// Append-only map from payload type to its converter.
#[derive(Clone, Default)]
pub struct ConverterRegistry {
    converters: DashMap<TypeId, ErasedConverter>,
}

impl ConverterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a converter for `T`.
    ///
    /// The first registration wins: returns `false` and keeps the existing
    /// converter when `T` already has one, including a default converter
    /// inserted by an earlier [`resolve`](Self::resolve).
    pub fn register<T, C>(&self, converter: C) -> bool
    where
        T: 'static,
        C: ValueConverter<T> + 'static,
    {
        let type_name = std::any::type_name::<T>();
        match self.converters.entry(TypeId::of::<T>()) {
            Entry::Occupied(_) => {
                tracing::debug!(type_name, "json converter already registered, keeping first");
                false
            }
            Entry::Vacant(slot) => {
                let converter: Arc<dyn ValueConverter<T>> = Arc::new(converter);
                slot.insert(Arc::new(converter));
                tracing::debug!(type_name, "registered json converter");
                true
            }
        }
    }

    /// The converter registered for `T`, if any.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<Arc<dyn ValueConverter<T>>> {
        self.converters
            .get(&TypeId::of::<T>())
            .and_then(|entry| downcast::<T>(entry.value()))
    }

    /// The converter for `T`, inserting the serde default on a miss.
    pub fn resolve<T: JsonPayload>(&self) -> Result<Arc<dyn ValueConverter<T>>, JsonError> {
        let type_name = std::any::type_name::<T>();

        if let Some(converter) = self.get::<T>() {
            tracing::trace!(type_name, "json converter cache hit");
            return Ok(converter);
        }

        let entry = self.converters.entry(TypeId::of::<T>()).or_insert_with(|| {
            tracing::debug!(type_name, "no json converter registered, using serde default");
            let converter: Arc<dyn ValueConverter<T>> = Arc::new(SerdeConverter::<T>::new());
            Arc::new(converter)
        });

        downcast::<T>(entry.value())
            .ok_or_else(|| JsonError::converter::<T>("registry entry holds a converter for another type"))
    }

    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.converters.contains_key(&TypeId::of::<T>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

fn downcast<T: 'static>(erased: &ErasedConverter) -> Option<Arc<dyn ValueConverter<T>>> {
    erased
        .as_ref()
        .downcast_ref::<Arc<dyn ValueConverter<T>>>()
        .cloned()
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("converters", &self.converters.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    struct Fixed(i64);

    impl ValueConverter<i64> for Fixed {
        fn to_json(&self, _value: &i64) -> Result<Value, JsonError> {
            Ok(json!(self.0))
        }

        fn from_json(&self, _value: Value) -> Result<i64, JsonError> {
            Ok(self.0)
        }
    }

    #[test]
    fn first_registration_wins() {
        let registry = ConverterRegistry::new();
        assert!(registry.register::<i64, _>(Fixed(1)));
        assert!(!registry.register::<i64, _>(Fixed(2)));

        let converter = registry.get::<i64>().unwrap();
        assert_eq!(converter.to_json(&0).unwrap(), json!(1));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn resolve_inserts_default_once() {
        let registry = ConverterRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get::<String>().is_none());

        let first = registry.resolve::<String>().unwrap();
        let second = registry.resolve::<String>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(registry.contains::<String>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn resolved_default_blocks_later_registration() {
        let registry = ConverterRegistry::new();
        registry.resolve::<i64>().unwrap();
        assert!(!registry.register::<i64, _>(Fixed(9)));
        assert_eq!(registry.resolve::<i64>().unwrap().to_json(&5).unwrap(), json!(5));
    }

    #[test]
    fn registries_are_independent() {
        let left = ConverterRegistry::new();
        let right = ConverterRegistry::new();
        left.register::<i64, _>(Fixed(1));
        assert!(!right.contains::<i64>());
    }
}
