//! Asset generators, parametrized by kind.
//!
//! Each generator is a pure function of (script, theme): it builds the
//! kind's instruction, issues one boundary call, and shapes the response
//! into an [`AssetPayload`]. Blueprint and storyboard run in free-text
//! mode; the audio prompt runs schema-constrained and deserializes the
//! structured value.

use crate::prompts;
use lumiere_core::{
    AssetKind, AssetPayload, AudioPrompt, GenerateRequest, Message, MessageBuilder, Output, Role,
};
use lumiere_error::{BuilderError, LumiereResult, StudioError, StudioErrorKind};
use lumiere_interface::JsonMode;
use tracing::debug;

/// Generate one asset of the requested kind.
///
/// # Errors
///
/// Returns an error if the boundary call fails, the model returns no
/// text, or (for the audio prompt) the structured response does not
/// deserialize into [`AudioPrompt`].
pub async fn generate_asset(
    driver: &dyn JsonMode,
    kind: AssetKind,
    script: &str,
    theme: &str,
) -> LumiereResult<AssetPayload> {
    debug!(kind = %kind, "Starting asset generation");
    match kind {
        AssetKind::Blueprint => {
            let text = generate_text(driver, kind, script, theme).await?;
            Ok(AssetPayload::Blueprint(text))
        }
        AssetKind::Storyboard => {
            let text = generate_text(driver, kind, script, theme).await?;
            Ok(AssetPayload::Storyboard(text))
        }
        AssetKind::AudioPrompt => generate_audio(driver, script, theme).await,
    }
}

async fn generate_text(
    driver: &dyn JsonMode,
    kind: AssetKind,
    script: &str,
    theme: &str,
) -> LumiereResult<String> {
    let request = build_request(prompts::instruction_for(kind, theme), script)?;
    let response = driver.generate(&request).await?;

    let text = extract_text(&response.outputs);
    if text.trim().is_empty() {
        Err(StudioError::new(StudioErrorKind::EmptyResponse(
            kind.as_str().to_string(),
        )))?;
    }
    Ok(text)
}

async fn generate_audio(
    driver: &dyn JsonMode,
    script: &str,
    theme: &str,
) -> LumiereResult<AssetPayload> {
    let request = build_request(
        prompts::instruction_for(AssetKind::AudioPrompt, theme),
        script,
    )?;
    let value = driver.generate_json(&request, &audio_prompt_schema()).await?;

    let prompt: AudioPrompt = serde_json::from_value(value).map_err(|e| {
        StudioError::new(StudioErrorKind::InvalidFormat(e.to_string()))
    })?;
    Ok(AssetPayload::Audio(prompt))
}

/// Response schema sent with the audio prompt request. The remote
/// service constrains its output to an object with exactly these two
/// string fields.
fn audio_prompt_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "style": { "type": "STRING" },
            "lyrics": { "type": "STRING" }
        },
        "required": ["style", "lyrics"]
    })
}

/// Build a two-message request: the instruction as the system message,
/// the script as the user message.
fn build_request(instruction: String, script: &str) -> LumiereResult<GenerateRequest> {
    let system = build_message(Role::System, instruction)?;
    let user = build_message(Role::User, script.to_string())?;

    GenerateRequest::builder()
        .messages(vec![system, user])
        .build()
        .map_err(|e| BuilderError::from(format!("Failed to build request: {}", e)).into())
}

fn build_message(role: Role, content: String) -> LumiereResult<Message> {
    MessageBuilder::default()
        .role(role)
        .content(content)
        .build()
        .map_err(|e| BuilderError::from(format!("Failed to build message: {}", e)).into())
}

/// Concatenate the text outputs of a response.
pub(crate) fn extract_text(outputs: &[Output]) -> String {
    let mut texts = Vec::new();
    for output in outputs {
        if let Output::Text(text) = output {
            texts.push(text.clone());
        }
    }
    texts.join("\n")
}
