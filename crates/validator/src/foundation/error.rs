//! Structured validation failures.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single rule failure with a stable code and interpolated parameters.
///
/// # Examples
///
/// ```
/// use tristate_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("length", "must be between 1 and 2 characters")
///     .with_field("nickname")
///     .with_param("min_length", "1")
///     .with_param("max_length", "2");
///
/// assert_eq!(error.param("max_length"), Some("2"));
/// assert_eq!(
///     error.to_string(),
///     "[nickname] length: must be between 1 and 2 characters (params: [min_length=1, max_length=2])"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable code for programmatic handling, e.g. `"not_empty"`, `"count"`.
    pub code: Cow<'static, str>,

    /// Human-readable message with parameters already interpolated.
    pub message: Cow<'static, str>,

    /// Field path, set when the failure is attached to a record field.
    pub field: Option<Cow<'static, str>>,

    /// Ordered template parameters, e.g. `[("min_count", "1"), ("max_count", "2")]`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Failures reported by nested rules.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Number of failures including nested ones.
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .nested
            .iter()
            .map(ValidationError::total_error_count)
            .sum::<usize>()
    }

    /// Depth-first list of this failure and every nested one.
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for nested in &self.nested {
            result.extend(nested.flatten());
        }
        result
    }

    /// JSON rendering for API responses.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
            "nested": self.nested.iter().map(Self::to_json_value).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        for (i, error) in self.nested.iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, error)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// RULE FAILURES
// ============================================================================

impl ValidationError {
    /// The field is null or blank where a value is required.
    pub fn not_empty() -> Self {
        Self::new("not_empty", "must not be empty")
    }

    /// The field is explicitly null.
    pub fn not_null() -> Self {
        Self::new("not_null", "must not be null")
    }

    /// A character or item count fell outside `[min, max]`.
    pub(crate) fn out_of_bounds(
        code: &'static str,
        unit: &'static str,
        min: usize,
        max: Option<usize>,
        actual: usize,
    ) -> Self {
        let message = match max {
            Some(max) if max == min => format!("must be exactly {min} {unit}, found {actual}"),
            Some(max) if min == 0 => format!("must be at most {max} {unit}, found {actual}"),
            Some(max) => format!("must be between {min} and {max} {unit}, found {actual}"),
            None => format!("must be at least {min} {unit}, found {actual}"),
        };

        let error = Self::new(code, message).with_param(format!("min_{code}"), min.to_string());
        let error = match max {
            Some(max) => error.with_param(format!("max_{code}"), max.to_string()),
            None => error,
        };
        error.with_param(format!("total_{code}"), actual.to_string())
    }

    /// A generic failure with a caller-supplied message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Failures accumulated across independent rules.
///
/// One failing rule never stops the evaluation of the others; the collection
/// keeps every failure in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Failures attached to the given field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors
            .iter()
            .filter(move |e| e.field.as_deref() == Some(field))
    }

    /// Folds the collection into one error carrying the failures as nested.
    pub fn into_single_error(self, message: impl Into<Cow<'static, str>>) -> ValidationError {
        ValidationError::new("validation_errors", message).with_nested(self.errors)
    }

    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_interpolates_parameters() {
        let error = ValidationError::out_of_bounds("count", "items", 1, Some(2), 3);
        assert_eq!(error.code, "count");
        assert_eq!(error.message, "must be between 1 and 2 items, found 3");
        assert_eq!(error.param("min_count"), Some("1"));
        assert_eq!(error.param("max_count"), Some("2"));
        assert_eq!(error.param("total_count"), Some("3"));
    }

    #[test]
    fn unbounded_maximum_has_no_max_param() {
        let error = ValidationError::out_of_bounds("length", "characters", 3, None, 1);
        assert_eq!(error.message, "must be at least 3 characters, found 1");
        assert_eq!(error.param("max_length"), None);
    }

    #[test]
    fn exact_bounds_message() {
        let error = ValidationError::out_of_bounds("length", "characters", 4, Some(4), 2);
        assert_eq!(error.message, "must be exactly 4 characters, found 2");
    }

    #[test]
    fn static_strings_do_not_allocate() {
        let error = ValidationError::not_null();
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn collection_filters_by_field() {
        let errors: ValidationErrors = [
            ValidationError::not_null().with_field("name"),
            ValidationError::not_empty().with_field("tags"),
            ValidationError::custom("bad").with_field("name"),
        ]
        .into_iter()
        .collect();

        assert_eq!(errors.for_field("name").count(), 2);
        assert_eq!(errors.for_field("tags").count(), 1);
        assert_eq!(errors.for_field("missing").count(), 0);
    }

    #[test]
    fn single_error_nests_everything() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::not_null());
        errors.extend([ValidationError::not_empty()]);

        let single = errors.into_single_error("record is invalid");
        assert_eq!(single.total_error_count(), 3);
        assert_eq!(single.flatten().len(), 3);
    }
}
