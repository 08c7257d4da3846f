//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, ExportError, GeminiError, JsonError, SchemaError, StudioError,
    ValidationError,
};

/// Union of every domain error in the workspace.
///
/// One variant per owning domain, from-convertible so domain errors
/// bubble up through `?` without explicit mapping.
///
/// # Examples
///
/// ```
/// use lumiere_error::{LumiereError, JsonError};
///
/// let json_err = JsonError::new("Unexpected end of input");
/// let err: LumiereError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LumiereErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Gemini boundary error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Schema-constrained response error
    #[from(SchemaError)]
    Schema(SchemaError),
    /// Submission validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Studio orchestration error
    #[from(StudioError)]
    Studio(StudioError),
    /// Asset export error
    #[from(ExportError)]
    Export(ExportError),
}

/// The workspace error type.
///
/// Boxes its kind so `Result` stays one pointer wide regardless of
/// which domain the failure came from.
///
/// # Examples
///
/// ```
/// use lumiere_error::{LumiereError, LumiereResult, ConfigError};
///
/// fn might_fail() -> LumiereResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Lumiere Error: {}", _0)]
pub struct LumiereError(Box<LumiereErrorKind>);

impl LumiereError {
    /// Create a new error from a kind.
    pub fn new(kind: LumiereErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LumiereErrorKind {
        &self.0
    }
}

impl<T> From<T> for LumiereError
where
    T: Into<LumiereErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Lumiere operations.
///
/// # Examples
///
/// ```
/// use lumiere_error::{LumiereResult, JsonError};
///
/// fn parse_data() -> LumiereResult<String> {
///     Err(JsonError::new("EOF while parsing a value"))?
/// }
/// ```
pub type LumiereResult<T> = std::result::Result<T, LumiereError>;
