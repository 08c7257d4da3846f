//! Output types from model responses.

use serde::{Deserialize, Serialize};

/// Supported output types from a generation call.
///
/// Responses arrive in one of two modes: free text, or a structured value
/// when the request carried a response schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),

    /// Structured output from a schema-constrained request.
    Json(serde_json::Value),
}

impl Output {
    /// Borrow the text content, if this output is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
            Output::Json(_) => None,
        }
    }
}
