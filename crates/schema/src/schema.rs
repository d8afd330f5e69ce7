//! The schema value.
//!
//! Schemas are descriptive only: they say what shape a field has on the
//! wire and never validate anything.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// SCHEMA TYPE
// ============================================================================

/// The OpenAPI `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl SchemaType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// An OpenAPI-shaped schema.
///
/// Serializes to the familiar JSON form; empty parts are left out.
///
/// ```
/// use tristate_schema::Schema;
///
/// let schema = Schema::array(Schema::integer("int32")).nullable();
/// assert_eq!(
///     serde_json::to_string(&schema)?,
///     r#"{"type":"array","items":{"type":"integer","format":"int32"},"nullable":true}"#
/// );
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// `None` accepts any JSON value.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SchemaType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Element schema for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    /// Property schemas in declaration order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
}

impl Schema {
    /// Accepts any value.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn of(kind: SchemaType) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn boolean() -> Self {
        Self::of(SchemaType::Boolean)
    }

    pub fn integer(format: &str) -> Self {
        Self::of(SchemaType::Integer).with_format(format)
    }

    pub fn number(format: &str) -> Self {
        Self::of(SchemaType::Number).with_format(format)
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(SchemaType::Array)
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Marks the schema as accepting `null`.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|name| name == property)
    }

    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties.get(name)
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, &self.items) {
            (Some(SchemaType::Array), Some(items)) => write!(f, "[{items}]")?,
            (Some(SchemaType::Object), _) if !self.properties.is_empty() => {
                write!(f, "{{")?;
                for (i, (name, schema)) in self.properties.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    let marker = if self.is_required(name) { "" } else { "?" };
                    write!(f, "{name}{marker}: {schema}")?;
                }
                write!(f, "}}")?;
            }
            (Some(kind), _) => write!(f, "{kind}")?,
            (None, _) => write!(f, "any")?,
        }
        if self.nullable {
            write!(f, " | null")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_parts_are_omitted() {
        let json = serde_json::to_string(&Schema::string()).unwrap();
        assert_eq!(json, r#"{"type":"string"}"#);
        assert_eq!(serde_json::to_string(&Schema::any()).unwrap(), "{}");
    }

    #[test]
    fn deserializes_back() {
        let schema = Schema::array(Schema::number("double")).nullable();
        let back: Schema = serde_json::from_value(schema.to_json_value()).unwrap();
        assert_eq!(back, schema);
    }

    #[test]
    fn display() {
        assert_eq!(Schema::array(Schema::boolean()).to_string(), "[boolean]");
        assert_eq!(Schema::string().nullable().to_string(), "string | null");
        assert_eq!(Schema::any().to_string(), "any");
    }
}
