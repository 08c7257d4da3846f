//! Gemini boundary error types.
//!
//! Everything that can go wrong between building a `generateContent`
//! request and handing usable candidate text back to a generator. The
//! schema-constrained path has its own taxonomy in [`crate::SchemaError`].

use std::panic::Location;

/// Failure modes of a Gemini boundary call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GeminiErrorKind {
    /// The required credential is absent from the environment. Fatal at
    /// client construction, never retried.
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// The request never produced a usable HTTP response, or the
    /// response body could not be read.
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// The API answered with a non-success status.
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error body returned by the API
        message: String,
    },
    /// The call succeeded but no candidate carried any content, for
    /// example when every candidate was safety-blocked.
    #[display("Gemini response contained no candidate content")]
    EmptyResponse,
}

/// A Gemini boundary failure with its capture site.
///
/// # Examples
///
/// ```
/// use lumiere_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at {}", kind, location)]
pub struct GeminiError {
    kind: GeminiErrorKind,
    location: &'static Location<'static>,
}

impl GeminiError {
    /// Wrap a failure kind, capturing the caller's location.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        Self {
            kind,
            location: Location::caller(),
        }
    }

    /// The failure kind.
    pub fn kind(&self) -> &GeminiErrorKind {
        &self.kind
    }
}
