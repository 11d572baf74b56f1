//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// All variants are deterministic, synchronous failures surfaced straight to the
/// caller. Nothing in the domain layer retries or recovers from them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Name is empty or whitespace-only.
    #[error("validation failed: name cannot be empty")]
    EmptyName,

    /// Name exceeds the maximum length (in characters).
    #[error("validation failed: name must be at most {max} characters (got {actual})")]
    NameTooLong { max: usize, actual: usize },

    /// Description exceeds the maximum length (in characters).
    #[error("validation failed: description must be at most {max} characters (got {actual})")]
    DescriptionTooLong { max: usize, actual: usize },

    /// A serialized snapshot has a missing or mismatched type discriminant,
    /// or is not a map at all.
    #[error("invalid data format: {0}")]
    Format(String),

    /// A required key is absent from a serialized snapshot.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A key is present in a serialized snapshot but holds the wrong kind of value.
    #[error("invalid field `{field}`: expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
}

impl DomainError {
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn invalid_field(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField {
            field: field.into(),
            expected,
        }
    }

    /// True for field-rule violations (as opposed to snapshot decoding failures).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyName | Self::NameTooLong { .. } | Self::DescriptionTooLong { .. }
        )
    }
}
