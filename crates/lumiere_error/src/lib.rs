//! Error types for the Lumiere workspace.
//!
//! Every failure in the workspace flows through this crate. Each domain
//! owns a `*ErrorKind` enum naming its specific conditions, wrapped in a
//! `*Error` struct that records the capture site via `#[track_caller]`.
//! The domain errors compose into [`LumiereError`], a boxed top-level
//! kind with a blanket `From`, so `?` works from any layer.
//!
//! The taxonomy mirrors the system's failure model: configuration and
//! credential problems are fatal at startup, transport failures
//! propagate up to the session aggregate, and schema violations on the
//! structured output path are named separately from transport so a
//! malformed model answer is diagnosable as such.
//!
//! # Examples
//!
//! ```
//! use lumiere_error::{LumiereResult, JsonError};
//!
//! fn parse_record() -> LumiereResult<String> {
//!     Err(JsonError::new("Unexpected end of input"))?
//! }
//!
//! match parse_record() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod export;
mod gemini;
mod json;
mod schema;
mod studio;
mod validation;

pub use builder::BuilderError;
pub use config::ConfigError;
pub use error::{LumiereError, LumiereErrorKind, LumiereResult};
pub use export::{ExportError, ExportErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use schema::{SchemaError, SchemaErrorKind};
pub use studio::{StudioError, StudioErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
