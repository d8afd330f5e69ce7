//! Schema description errors.

/// Errors raised while describing a type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// A tri-state container wraps another tri-state type.
    #[error("{container}<T>'s element type `{element}` is another tri-state type")]
    NestedOptional {
        /// `Optional` or `OptionalCollection`.
        container: &'static str,
        /// Full name of the offending element type.
        element: &'static str,
    },
}
