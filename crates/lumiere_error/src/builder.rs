//! Builder-related errors.

use std::panic::Location;

/// Failure reported by a derive_builder `build()` call.
///
/// Every request and message in this workspace is assembled through a
/// generated builder, and the only failure those builders produce is an
/// uninitialized-field message. The message is carried opaquely; the
/// capture site distinguishes which assembly failed.
///
/// # Examples
///
/// ```
/// use lumiere_error::BuilderError;
///
/// let err = BuilderError::from("`messages` must be initialized");
/// assert!(format!("{}", err).contains("messages"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at {}", message, location)]
pub struct BuilderError {
    message: String,
    location: &'static Location<'static>,
}

impl BuilderError {
    /// Wrap a builder message, capturing the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: Location::caller(),
        }
    }

    /// The underlying builder message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for BuilderError {
    #[track_caller]
    fn from(msg: String) -> Self {
        Self::new(msg)
    }
}

impl From<&str> for BuilderError {
    #[track_caller]
    fn from(msg: &str) -> Self {
        Self::new(msg)
    }
}
