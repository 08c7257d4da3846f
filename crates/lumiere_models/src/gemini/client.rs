//! Google Gemini REST API client.
//!
//! Speaks the `models/{model}:generateContent` endpoint directly over
//! reqwest. Two modes are supported: free text, and schema-constrained
//! JSON where the API enforces the response shape server-side.

use crate::gemini::conversion;
use crate::gemini::dto::{GeminiRequest, GeminiResponse};
use async_trait::async_trait;
use lumiere_core::{GenerateRequest, GenerateResponse};
use lumiere_error::{GeminiError, GeminiErrorKind, LumiereResult, SchemaError, SchemaErrorKind};
use lumiere_interface::{JsonMode, LumiereDriver};
use reqwest::Client;
use std::env;
use tracing::{debug, instrument};

/// Model used when a request does not name one.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini REST API client.
///
/// # Examples
///
/// ```no_run
/// use lumiere_models::GeminiClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Creates a new Gemini client with the default model.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set in the environment.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> LumiereResult<Self> {
        Self::with_model(DEFAULT_GEMINI_MODEL.to_string())
    }

    /// Creates a new Gemini client with a specific default model.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set in the environment.
    #[instrument(name = "gemini_client_with_model")]
    pub fn with_model(model: String) -> LumiereResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Ok(Self::with_api_key(api_key, model))
    }

    /// Creates a new Gemini client with an explicit API key.
    pub fn with_api_key(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
            model,
        }
    }

    /// Sends a request body to the `generateContent` endpoint for a model.
    async fn send_request(
        &self,
        model: &str,
        body: &GeminiRequest,
    ) -> LumiereResult<GeminiResponse> {
        let url = format!("{}/{}:generateContent", self.base_url, model);
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status,
                message: error_text,
            })
            .into());
        }

        response.json().await.map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to parse response: {}",
                e
            )))
            .into()
        })
    }

    fn resolve_model<'a>(&'a self, req: &'a GenerateRequest) -> &'a str {
        req.model.as_deref().unwrap_or(&self.model)
    }
}

#[async_trait]
impl LumiereDriver for GeminiClient {
    #[instrument(skip(self, req))]
    async fn generate(&self, req: &GenerateRequest) -> LumiereResult<GenerateResponse> {
        let body = conversion::to_gemini_request(req)?;
        let response = self.send_request(self.resolve_model(req), &body).await?;

        conversion::from_gemini_response(&response)
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse).into())
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl JsonMode for GeminiClient {
    #[instrument(skip(self, req, schema))]
    async fn generate_json(
        &self,
        req: &GenerateRequest,
        schema: &serde_json::Value,
    ) -> LumiereResult<serde_json::Value> {
        let body = conversion::to_gemini_request_with_schema(req, schema)?;
        let response = self.send_request(self.resolve_model(req), &body).await?;

        let text = conversion::response_text(&response)
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))?;

        serde_json::from_str(&text)
            .map_err(|e| SchemaError::new(SchemaErrorKind::InvalidJson(e.to_string())).into())
    }
}
