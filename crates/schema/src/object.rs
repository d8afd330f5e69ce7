//! Object schema builder.

use indexmap::IndexMap;

use crate::describe::DescribeSchema;
use crate::error::SchemaError;
use crate::schema::{Schema, SchemaType};

/// Per-field metadata that the type alone cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldAnnotations {
    /// The field accepts an explicit `null`.
    pub nullable: bool,
}

impl FieldAnnotations {
    pub const NONE: Self = Self { nullable: false };
    pub const NULLABLE: Self = Self { nullable: true };
}

/// Builds an object [`Schema`] one property at a time.
///
/// ```
/// use tristate_core::{Optional, OptionalCollection};
/// use tristate_schema::{FieldAnnotations, ObjectSchema};
///
/// let schema = ObjectSchema::new()
///     .property::<u32>("id")?
///     .property::<Optional<String>>("nickname")?
///     .annotated::<OptionalCollection<String>>("tags", FieldAnnotations::NULLABLE)?
///     .build();
///
/// assert!(schema.is_required("id"));
/// assert!(!schema.is_required("nickname"));
/// assert!(!schema.property("nickname").unwrap().nullable);
/// assert!(schema.property("tags").unwrap().nullable);
/// # Ok::<(), tristate_schema::SchemaError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    properties: IndexMap<String, Schema>,
    required: Vec<String>,
}

impl ObjectSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property with no annotations.
    pub fn property<T: DescribeSchema + ?Sized>(
        self,
        name: impl Into<String>,
    ) -> Result<Self, SchemaError> {
        self.annotated::<T>(name, FieldAnnotations::NONE)
    }

    /// Adds a property; a nullable annotation marks the property schema nullable.
    pub fn annotated<T: DescribeSchema + ?Sized>(
        mut self,
        name: impl Into<String>,
        annotations: FieldAnnotations,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let mut schema = T::describe()?;
        if annotations.nullable {
            schema.nullable = true;
        }

        tracing::trace!(
            property = %name,
            tristate = T::IS_TRISTATE,
            nullable = schema.nullable,
            "described property"
        );

        if T::REQUIRED {
            self.required.push(name.clone());
        }
        self.properties.insert(name, schema);
        Ok(self)
    }

    /// Adds a property with an already built schema.
    #[must_use]
    pub fn with_schema(mut self, name: impl Into<String>, schema: Schema, required: bool) -> Self {
        let name = name.into();
        if required {
            self.required.push(name.clone());
        }
        self.properties.insert(name, schema);
        self
    }

    pub fn build(self) -> Schema {
        Schema {
            properties: self.properties,
            required: self.required,
            ..Schema::of(SchemaType::Object)
        }
    }
}
