//! Trait definitions for LLM backends and their capabilities.

use async_trait::async_trait;
use lumiere_core::{GenerateRequest, GenerateResponse};
use lumiere_error::LumiereResult;

/// Core trait that all LLM backends must implement.
///
/// This provides the minimal interface for text generation. Additional
/// capabilities are exposed through optional traits.
#[async_trait]
pub trait LumiereDriver: Send + Sync {
    /// Generate model output given a request.
    async fn generate(&self, req: &GenerateRequest) -> LumiereResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// Trait for models that support structured JSON output.
///
/// The schema constrains the response server-side; the returned value is
/// the parsed response body. A response that does not parse as JSON is a
/// schema violation, reported through the error taxonomy rather than as
/// text.
#[async_trait]
pub trait JsonMode: LumiereDriver {
    /// Generate output conforming to a JSON schema.
    async fn generate_json(
        &self,
        req: &GenerateRequest,
        schema: &serde_json::Value,
    ) -> LumiereResult<serde_json::Value>;
}
