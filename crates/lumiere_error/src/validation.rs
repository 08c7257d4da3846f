//! Submission validation error types.
//!
//! These are caller-side checks. The orchestrator itself accepts any
//! request; front ends run validation before submitting.

use std::panic::Location;

/// Specific validation failures for a generation submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Script text too short after trimming
    #[display("Script text must be longer than {} characters (got {})", minimum, actual)]
    ScriptTooShort {
        /// Minimum length after trimming
        minimum: usize,
        /// Trimmed length actually provided
        actual: usize,
    },
    /// Theme too short after trimming
    #[display("Theme must be longer than {} characters (got {})", minimum, actual)]
    ThemeTooShort {
        /// Minimum length after trimming
        minimum: usize,
        /// Trimmed length actually provided
        actual: usize,
    },
    /// No asset kinds selected
    #[display("At least one asset kind must be selected")]
    NoKindsSelected,
}

/// A rejected submission with its capture site.
///
/// # Examples
///
/// ```
/// use lumiere_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::NoKindsSelected);
/// assert!(format!("{}", err).contains("asset kind"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at {}", kind, location)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    location: &'static Location<'static>,
}

impl ValidationError {
    /// Wrap a validation kind, capturing the caller's location.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self {
            kind,
            location: Location::caller(),
        }
    }

    /// The validation failure kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}
