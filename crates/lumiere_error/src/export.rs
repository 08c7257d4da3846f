//! Asset export error types.

use std::panic::Location;

/// Specific error conditions for export operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExportErrorKind {
    /// Failed to create the export directory
    #[display("Failed to create export directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write an asset file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to read an input file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
}

/// A file operation failure with its capture site.
///
/// # Examples
///
/// ```
/// use lumiere_error::{ExportError, ExportErrorKind};
///
/// let err = ExportError::new(ExportErrorKind::FileWrite("disk full".into()));
/// assert!(format!("{}", err).contains("Failed to write file"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at {}", kind, location)]
pub struct ExportError {
    kind: ExportErrorKind,
    location: &'static Location<'static>,
}

impl ExportError {
    /// Wrap an export failure kind, capturing the caller's location.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        Self {
            kind,
            location: Location::caller(),
        }
    }

    /// The failure kind.
    pub fn kind(&self) -> &ExportErrorKind {
        &self.kind
    }
}
