//! Mapper configuration.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How record field names are written as JSON property names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStrategy {
    /// Property names are written exactly as given.
    AsIs,
    /// `display_name` becomes `displayName`.
    #[default]
    CamelCase,
}

impl NamingStrategy {
    /// Applies the strategy to a field name.
    ///
    /// ```
    /// use tristate_json::NamingStrategy;
    ///
    /// assert_eq!(NamingStrategy::CamelCase.apply("display_name"), "displayName");
    /// assert_eq!(NamingStrategy::CamelCase.apply("Age"), "age");
    /// assert_eq!(NamingStrategy::AsIs.apply("display_name"), "display_name");
    /// ```
    pub fn apply<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            Self::AsIs => Cow::Borrowed(name),
            Self::CamelCase => camel_case(name),
        }
    }
}

fn camel_case(name: &str) -> Cow<'_, str> {
    let starts_lower = name.chars().next().is_none_or(|c| !c.is_uppercase());
    if starts_lower && !name.contains('_') {
        return Cow::Borrowed(name);
    }

    let mut out = String::with_capacity(name.len());
    for (i, part) in name.split('_').filter(|p| !p.is_empty()).enumerate() {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    Cow::Owned(out)
}

/// Options held by a [`JsonMapper`](crate::JsonMapper).
///
/// Deserializable so it can be loaded from any configuration source:
///
/// ```
/// use tristate_json::{JsonOptions, NamingStrategy};
///
/// let options: JsonOptions = serde_json::from_str(r#"{"naming":"as_is"}"#)?;
/// assert_eq!(options.naming, NamingStrategy::AsIs);
///
/// let defaults: JsonOptions = serde_json::from_str("{}")?;
/// assert_eq!(defaults, JsonOptions::default());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    /// Property naming for records.
    pub naming: NamingStrategy,
}

impl JsonOptions {
    #[must_use]
    pub fn with_naming(mut self, naming: NamingStrategy) -> Self {
        self.naming = naming;
        self
    }
}
