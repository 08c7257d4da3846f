//! Configuration error types.

use std::panic::Location;

/// Configuration loading error.
///
/// Raised by the binary's options layer when a `lumiere.toml` source
/// cannot be read or does not deserialize. Missing-credential failures
/// at the client boundary are reported separately as Gemini errors;
/// this type covers only the file-based options.
///
/// # Examples
///
/// ```
/// use lumiere_error::ConfigError;
///
/// let err = ConfigError::new("missing field `generation`");
/// assert!(format!("{}", err).starts_with("Configuration Error"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at {}", message, location)]
pub struct ConfigError {
    message: String,
    location: &'static Location<'static>,
}

impl ConfigError {
    /// Wrap a loader message, capturing the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: Location::caller(),
        }
    }

    /// The underlying loader message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
