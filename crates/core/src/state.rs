//! The three-valued state tag shared by every tri-state container.

use std::fmt;

// ============================================================================
// OPTIONAL STATE
// ============================================================================

/// Which of the three states a tri-state value is in.
///
/// `Undefined` means the field was absent from the source representation,
/// `Null` means it was present but explicitly empty, and `HasValue` means it
/// carries a payload. The default is `Undefined`, so a field that nobody
/// touched stays out of the serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OptionalState {
    /// Absent from the source representation.
    #[default]
    Undefined,
    /// Present, explicitly empty.
    Null,
    /// Present with a payload.
    HasValue,
}

impl OptionalState {
    /// Lowercase name used for string rendering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::HasValue => "has_value",
        }
    }

    /// Fixed hash discriminant for this state.
    #[inline]
    pub(crate) const fn discriminant(self) -> u8 {
        match self {
            Self::Undefined => 0,
            Self::Null => 1,
            Self::HasValue => 2,
        }
    }
}

impl fmt::Display for OptionalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// STATE ERROR
// ============================================================================

/// Errors raised when a tri-state container is built from an invalid state tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StateError {
    /// `HasValue` was requested without a payload.
    #[error("state cannot be `has_value` when no value is provided")]
    PayloadRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_undefined() {
        assert_eq!(OptionalState::default(), OptionalState::Undefined);
    }

    #[test]
    fn display_names() {
        assert_eq!(OptionalState::Undefined.to_string(), "undefined");
        assert_eq!(OptionalState::Null.to_string(), "null");
        assert_eq!(OptionalState::HasValue.to_string(), "has_value");
    }

    #[test]
    fn discriminants_are_distinct() {
        let all = [
            OptionalState::Undefined.discriminant(),
            OptionalState::Null.discriminant(),
            OptionalState::HasValue.discriminant(),
        ];
        assert_ne!(all[0], all[1]);
        assert_ne!(all[1], all[2]);
        assert_ne!(all[0], all[2]);
    }

    #[test]
    fn state_error_message() {
        assert_eq!(
            StateError::PayloadRequired.to_string(),
            "state cannot be `has_value` when no value is provided"
        );
    }
}
