//! Studio orchestration error types.

use std::panic::Location;

/// Specific error conditions for studio operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StudioErrorKind {
    /// Aggregate failure for a generation session. The display form is
    /// the user-visible session error message.
    #[display("Failed to generate content. Details: {}", _0)]
    GenerationFailed(String),
    /// Model returned no text for an asset
    #[display("Model returned an empty response for {}", _0)]
    EmptyResponse(String),
    /// Structured output did not deserialize into the expected asset
    #[display("Structured response did not match the expected format: {}", _0)]
    InvalidFormat(String),
}

/// A studio failure with its capture site.
///
/// # Examples
///
/// ```
/// use lumiere_error::{StudioError, StudioErrorKind};
///
/// let err = StudioError::new(StudioErrorKind::GenerationFailed("HTTP 503".into()));
/// assert!(format!("{}", err).contains("Failed to generate content"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Studio Error: {} at {}", kind, location)]
pub struct StudioError {
    kind: StudioErrorKind,
    location: &'static Location<'static>,
}

impl StudioError {
    /// Wrap a studio failure kind, capturing the caller's location.
    #[track_caller]
    pub fn new(kind: StudioErrorKind) -> Self {
        Self {
            kind,
            location: Location::caller(),
        }
    }

    /// The failure kind.
    pub fn kind(&self) -> &StudioErrorKind {
        &self.kind
    }
}
