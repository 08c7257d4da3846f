//! JSON error types.

use std::panic::Location;

/// JSON serialization error raised while rendering an asset.
///
/// Surfaces on the export path when a structured payload, such as the
/// audio prompt record, fails to serialize for writing to disk. The
/// construction site is captured so the failure points at the caller,
/// not this crate.
///
/// # Examples
///
/// ```
/// use lumiere_error::JsonError;
///
/// let err = JsonError::new("key must be a string");
/// assert!(format!("{}", err).starts_with("JSON Error"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at {}", message, location)]
pub struct JsonError {
    message: String,
    location: &'static Location<'static>,
}

impl JsonError {
    /// Wrap a serde message, capturing the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: Location::caller(),
        }
    }

    /// The underlying serde message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
