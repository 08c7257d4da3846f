//! Boundary request and response shapes.

use crate::{Message, Output};
use serde::{Deserialize, Serialize};

/// One call across the generation boundary.
///
/// Carries the instruction-plus-script message pair and the optional
/// sampling knobs. Fields left `None` defer to the provider's defaults;
/// only the guidance path sets the tuning fields.
///
/// # Examples
///
/// ```
/// use lumiere_core::{GenerateRequest, Message, Role};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message {
///         role: Role::User,
///         content: "INT. OFFICE - DAY".to_string(),
///     }])
///     .max_tokens(Some(100))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.max_tokens, Some(100));
/// assert!(request.model.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
pub struct GenerateRequest {
    /// Instruction and input messages, in request order
    pub messages: Vec<Message>,
    /// Output token ceiling
    #[builder(default)]
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Reasoning token budget, for providers that expose one
    #[builder(default)]
    pub thinking_budget: Option<u32>,
    /// Model id; falls back to the client's configured model when unset
    #[builder(default)]
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Start building a request.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// What came back from a boundary call.
///
/// # Examples
///
/// ```
/// use lumiere_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("FADE IN:".to_string())],
/// };
///
/// assert_eq!(response.outputs[0].as_text(), Some("FADE IN:"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Model outputs, free text or structured
    pub outputs: Vec<Output>,
}
