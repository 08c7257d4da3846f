//! Gemini `generateContent` REST API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One text part of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeminiPart {
    /// Part text
    pub text: String,
}

/// A content block: an ordered list of parts with an optional role.
///
/// Request contents carry `"user"` or `"model"` roles; the system
/// instruction block carries none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeminiContent {
    /// Ordered message parts
    parts: Vec<GeminiPart>,
    /// Conversation role, where applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
}

impl GeminiContent {
    /// A user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            parts: vec![GeminiPart { text: text.into() }],
            role: Some("user".to_string()),
        }
    }

    /// A model turn (prior assistant output).
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            parts: vec![GeminiPart { text: text.into() }],
            role: Some("model".to_string()),
        }
    }

    /// A system instruction block (no role on the wire).
    pub fn instruction(text: impl Into<String>) -> Self {
        Self {
            parts: vec![GeminiPart { text: text.into() }],
            role: None,
        }
    }

    /// Concatenated text of all parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<String>()
    }
}

/// Reasoning budget configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    /// Token budget the model may spend on reasoning
    thinking_budget: u32,
}

impl ThinkingConfig {
    /// Creates a new thinking configuration.
    pub fn new(thinking_budget: u32) -> Self {
        Self { thinking_budget }
    }
}

/// Generation parameters for a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters, Default)]
#[builder(setter(into), default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    /// Response MIME type; `"application/json"` for schema mode
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    /// Response schema for schema-constrained output
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    /// Reasoning budget settings
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

impl GenerationConfig {
    /// Creates a new builder for `GenerationConfig`.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }

    /// True when no parameter is set.
    pub fn is_empty(&self) -> bool {
        self == &GenerationConfig::default()
    }
}

/// Gemini API request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation contents in request order
    contents: Vec<GeminiContent>,
    /// System instruction applied to the whole request
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    /// Generation parameters
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GeminiRequest {
    /// Creates a new builder for `GeminiRequest`.
    pub fn builder() -> GeminiRequestBuilder {
        GeminiRequestBuilder::default()
    }
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GeminiCandidate {
    /// Generated content, absent when the candidate was blocked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<GeminiContent>,
}

/// Gemini API response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GeminiResponse {
    /// Response candidates; the first one carries the answer
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let request = GeminiRequest::builder()
            .contents(vec![GeminiContent::user("Hello")])
            .system_instruction(GeminiContent::instruction("Be terse."))
            .generation_config(
                GenerationConfig::builder()
                    .temperature(0.8f32)
                    .max_output_tokens(100u32)
                    .thinking_config(ThinkingConfig::new(50))
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "Be terse.");
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 100);
        assert_eq!(
            value["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            50
        );
    }

    #[test]
    fn schema_fields_are_omitted_unless_set() {
        let request = GeminiRequest::builder()
            .contents(vec![GeminiContent::user("Hello")])
            .build()
            .unwrap();

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("generationConfig").is_none());
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn response_parses_candidate_text() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "FADE IN:"}, {"text": " a neon street"}],
                    "role": "model"
                }
            }]
        });

        let response: GeminiResponse = serde_json::from_value(body).unwrap();
        let content = response.candidates()[0].content().as_ref().unwrap();
        assert_eq!(content.text(), "FADE IN: a neon street");
    }

    #[test]
    fn response_tolerates_missing_candidates() {
        let response: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.candidates().is_empty());
    }
}
