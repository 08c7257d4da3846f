//! Schema-constrained generation error types.
//!
//! Distinguishes "the model answered, but not in the shape we asked for"
//! from transport failures. Raised only on the structured output path.

use std::panic::Location;

/// Failure modes of a schema-constrained response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SchemaErrorKind {
    /// Response text is not parseable JSON
    #[display("Structured response is not valid JSON: {}", _0)]
    InvalidJson(String),
    /// Response parsed but does not match the requested shape
    #[display("Structured response does not match the requested schema: {}", _0)]
    UnexpectedShape(String),
}

/// A schema violation with its capture site.
///
/// # Examples
///
/// ```
/// use lumiere_error::{SchemaError, SchemaErrorKind};
///
/// let err = SchemaError::new(SchemaErrorKind::InvalidJson("EOF at line 1".into()));
/// assert!(format!("{}", err).contains("not valid JSON"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Schema Error: {} at {}", kind, location)]
pub struct SchemaError {
    kind: SchemaErrorKind,
    location: &'static Location<'static>,
}

impl SchemaError {
    /// Wrap a violation kind, capturing the caller's location.
    #[track_caller]
    pub fn new(kind: SchemaErrorKind) -> Self {
        Self {
            kind,
            location: Location::caller(),
        }
    }

    /// The violation kind.
    pub fn kind(&self) -> &SchemaErrorKind {
        &self.kind
    }
}
