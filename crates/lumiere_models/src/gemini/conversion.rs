//! Type conversions between Lumiere and Gemini wire types.

use lumiere_core::{GenerateRequest, GenerateResponse, Output, Role};
use lumiere_error::{BuilderError, LumiereResult};

use super::dto::{GeminiContent, GeminiRequest, GeminiResponse, GenerationConfig, ThinkingConfig};

/// Converts a Lumiere request to a Gemini request body.
///
/// System messages fold into the request-level system instruction; user
/// and assistant messages become conversation contents. The model name is
/// not part of the body (it lives in the endpoint path).
pub fn to_gemini_request(request: &GenerateRequest) -> LumiereResult<GeminiRequest> {
    build_request(request, None)
}

/// Converts a Lumiere request to a schema-constrained Gemini request body.
///
/// Sets the JSON response MIME type alongside the schema, which is what
/// makes the API enforce the shape server-side.
pub fn to_gemini_request_with_schema(
    request: &GenerateRequest,
    schema: &serde_json::Value,
) -> LumiereResult<GeminiRequest> {
    build_request(request, Some(schema))
}

fn build_request(
    request: &GenerateRequest,
    schema: Option<&serde_json::Value>,
) -> LumiereResult<GeminiRequest> {
    let mut contents = Vec::new();
    let mut system_texts: Vec<&str> = Vec::new();

    for message in &request.messages {
        match message.role {
            Role::System => system_texts.push(&message.content),
            Role::User => contents.push(GeminiContent::user(&message.content)),
            Role::Assistant => contents.push(GeminiContent::model(&message.content)),
        }
    }

    let mut builder = GeminiRequest::builder();
    builder.contents(contents);

    if !system_texts.is_empty() {
        builder.system_instruction(GeminiContent::instruction(system_texts.join("\n\n")));
    }

    if let Some(config) = generation_config(request, schema)? {
        builder.generation_config(config);
    }

    builder
        .build()
        .map_err(|e| BuilderError::from(format!("Failed to build Gemini request: {}", e)).into())
}

fn generation_config(
    request: &GenerateRequest,
    schema: Option<&serde_json::Value>,
) -> LumiereResult<Option<GenerationConfig>> {
    let mut builder = GenerationConfig::builder();

    if let Some(temperature) = request.temperature {
        builder.temperature(temperature);
    }
    if let Some(max_tokens) = request.max_tokens {
        builder.max_output_tokens(max_tokens);
    }
    if let Some(budget) = request.thinking_budget {
        builder.thinking_config(ThinkingConfig::new(budget));
    }
    if let Some(schema) = schema {
        builder.response_mime_type("application/json".to_string());
        builder.response_schema(schema.clone());
    }

    let config = builder
        .build()
        .map_err(|e| BuilderError::from(format!("Failed to build generation config: {}", e)))?;

    if config.is_empty() {
        Ok(None)
    } else {
        Ok(Some(config))
    }
}

/// Extracts the concatenated text of the first candidate, if any.
pub fn response_text(response: &GeminiResponse) -> Option<String> {
    let content = response.candidates().first()?.content().as_ref()?;
    let text = content.text();
    if text.is_empty() { None } else { Some(text) }
}

/// Converts a Gemini response to a Lumiere response.
pub fn from_gemini_response(response: &GeminiResponse) -> Option<GenerateResponse> {
    response_text(response).map(|text| GenerateResponse {
        outputs: vec![Output::Text(text)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_core::Message;
    use serde_json::json;

    fn request_with_roles() -> GenerateRequest {
        GenerateRequest {
            messages: vec![
                Message {
                    role: Role::System,
                    content: "You are a film production assistant.".to_string(),
                },
                Message {
                    role: Role::User,
                    content: "INT. OFFICE - DAY".to_string(),
                },
            ],
            max_tokens: None,
            temperature: None,
            thinking_budget: None,
            model: None,
        }
    }

    #[test]
    fn system_messages_become_the_instruction_block() {
        let gemini_request = to_gemini_request(&request_with_roles()).unwrap();

        let instruction = gemini_request.system_instruction().as_ref().unwrap();
        assert_eq!(instruction.text(), "You are a film production assistant.");
        assert_eq!(gemini_request.contents().len(), 1);
        assert_eq!(gemini_request.contents()[0].role().as_deref(), Some("user"));
    }

    #[test]
    fn bare_request_carries_no_generation_config() {
        let gemini_request = to_gemini_request(&request_with_roles()).unwrap();
        assert!(gemini_request.generation_config().is_none());
    }

    #[test]
    fn schema_request_sets_json_mime_type() {
        let schema = json!({
            "type": "object",
            "properties": {
                "style": {"type": "string"},
                "lyrics": {"type": "string"}
            },
            "required": ["style", "lyrics"]
        });

        let gemini_request =
            to_gemini_request_with_schema(&request_with_roles(), &schema).unwrap();
        let config = gemini_request.generation_config().as_ref().unwrap();
        assert_eq!(config.response_mime_type().as_deref(), Some("application/json"));
        assert_eq!(config.response_schema().as_ref(), Some(&schema));
    }

    #[test]
    fn tuning_parameters_map_onto_the_wire_config() {
        let mut request = request_with_roles();
        request.temperature = Some(0.8);
        request.max_tokens = Some(100);
        request.thinking_budget = Some(50);

        let gemini_request = to_gemini_request(&request).unwrap();
        let config = gemini_request.generation_config().as_ref().unwrap();
        assert_eq!(*config.temperature(), Some(0.8));
        assert_eq!(*config.max_output_tokens(), Some(100));
        assert_eq!(
            config.thinking_config().as_ref().map(|t| *t.thinking_budget()),
            Some(50)
        );
    }

    #[test]
    fn empty_candidate_list_yields_no_text() {
        let response: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response_text(&response).is_none());
        assert!(from_gemini_response(&response).is_none());
    }
}
