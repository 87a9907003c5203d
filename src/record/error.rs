//! Structured validation failure.

use thiserror::Error;

/// Why a field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The top-level input was not an object.
    NotAnObject,
    /// A required field was absent.
    Missing,
    /// A field was present but had the wrong type.
    WrongType,
    /// A sample value was numeric but not finite.
    NotFinite,
    /// `steps` and `hazard` have different lengths.
    LengthMismatch {
        /// Number of entries in `steps`.
        steps: usize,
        /// Number of entries in `hazard`.
        hazard: usize,
    },
    /// `startDate` did not parse as an absolute date/time.
    InvalidDate,
}

/// A record failed a structural or invariant check.
///
/// `field` is a path into the input (`steps[2].y`, `hazard`, `$` for the
/// root) and `reason` is a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    /// Path of the offending field.
    pub field: String,
    /// Human-readable explanation.
    pub reason: String,
    /// Machine-readable classification.
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub(crate) fn new(
        field: impl Into<String>,
        kind: ValidationErrorKind,
        reason: impl Into<String>,
    ) -> Self {
        Self { field: field.into(), reason: reason.into(), kind }
    }

    pub(crate) fn missing(field: &str) -> Self {
        Self::new(field, ValidationErrorKind::Missing, "required field is missing")
    }

    pub(crate) fn wrong_type(
        field: impl Into<String>,
        expected: &str,
        found: &serde_json::Value,
    ) -> Self {
        Self::new(
            field,
            ValidationErrorKind::WrongType,
            format!("expected {expected}, found {}", type_name(found)),
        )
    }

    /// Returns `true` when this error reports a `steps`/`hazard` length mismatch.
    #[must_use]
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::LengthMismatch { .. })
    }
}

/// Short JSON type name used in error messages.
pub(crate) fn type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
