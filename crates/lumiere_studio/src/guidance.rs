//! Short-form script feedback, independent of the generation fan-out.

use crate::generator::extract_text;
use crate::prompts;
use derive_getters::Getters;
use lumiere_core::{GenerateRequest, GuidanceState, MessageBuilder, Role};
use lumiere_error::{BuilderError, LumiereResult, StudioError, StudioErrorKind};
use lumiere_interface::LumiereDriver;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

/// Fallback returned when the feedback request fails for any reason.
pub const GUIDANCE_FALLBACK: &str = "Sorry, I was unable to get feedback right now.";

/// Generation options applied to every guidance request.
///
/// Feedback is meant to be short and a little opinionated, so the
/// defaults run hotter and tighter than the asset generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GuidanceTuning {
    /// Sampling temperature
    temperature: f32,
    /// Output token ceiling
    max_tokens: u32,
    /// Reasoning token budget
    thinking_budget: u32,
}

impl GuidanceTuning {
    /// Create a tuning from explicit values.
    pub fn new(temperature: f32, max_tokens: u32, thinking_budget: u32) -> Self {
        Self {
            temperature,
            max_tokens,
            thinking_budget,
        }
    }
}

impl Default for GuidanceTuning {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            max_tokens: 100,
            thinking_budget: 50,
        }
    }
}

/// Issues single short feedback requests against a script.
///
/// Independent of [`crate::Studio`]: guidance has its own state channel
/// and may run concurrently with a generation session. Failures never
/// escape; the caller always gets a string.
pub struct GuidanceRequester {
    driver: Arc<dyn LumiereDriver>,
    tuning: GuidanceTuning,
    state: watch::Sender<GuidanceState>,
}

impl GuidanceRequester {
    /// Create a requester with the default tuning.
    pub fn new(driver: Arc<dyn LumiereDriver>) -> Self {
        Self::with_tuning(driver, GuidanceTuning::default())
    }

    /// Create a requester with explicit tuning.
    pub fn with_tuning(driver: Arc<dyn LumiereDriver>, tuning: GuidanceTuning) -> Self {
        let (state, _) = watch::channel(GuidanceState::default());
        Self {
            driver,
            tuning,
            state,
        }
    }

    /// Subscribe to guidance state changes.
    pub fn subscribe(&self) -> watch::Receiver<GuidanceState> {
        self.state.subscribe()
    }

    /// Clear any previous feedback.
    ///
    /// Front ends call this when a new generation is submitted, so stale
    /// advice never outlives the script it described.
    pub fn reset(&self) {
        debug!("Clearing guidance state");
        self.state.send_replace(GuidanceState::Idle);
    }

    /// Request short feedback on a script.
    ///
    /// Any failure is absorbed here: the error is logged at warn and the
    /// caller receives [`GUIDANCE_FALLBACK`] instead. Raw failure detail
    /// never reaches the returned string.
    #[instrument(skip(self, script), fields(script_chars = script.chars().count()))]
    pub async fn request_guidance(&self, script: &str) -> String {
        self.state.send_replace(GuidanceState::Pending);

        let text = match self.fetch(script).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Guidance request failed, falling back");
                GUIDANCE_FALLBACK.to_string()
            }
        };

        self.state.send_replace(GuidanceState::Ready(text.clone()));
        text
    }

    async fn fetch(&self, script: &str) -> LumiereResult<String> {
        let system = MessageBuilder::default()
            .role(Role::System)
            .content(prompts::guidance_instruction())
            .build()
            .map_err(|e| BuilderError::from(format!("Failed to build message: {}", e)))?;
        let user = MessageBuilder::default()
            .role(Role::User)
            .content(script.to_string())
            .build()
            .map_err(|e| BuilderError::from(format!("Failed to build message: {}", e)))?;

        let request = GenerateRequest::builder()
            .messages(vec![system, user])
            .max_tokens(Some(*self.tuning.max_tokens()))
            .temperature(Some(*self.tuning.temperature()))
            .thinking_budget(Some(*self.tuning.thinking_budget()))
            .build()
            .map_err(|e| BuilderError::from(format!("Failed to build request: {}", e)))?;

        let response = self.driver.generate(&request).await?;

        // Models pad short answers with stray newlines; the caller gets
        // the trimmed text.
        let text = extract_text(&response.outputs).trim().to_string();
        if text.is_empty() {
            Err(StudioError::new(StudioErrorKind::EmptyResponse(
                "guidance".to_string(),
            )))?;
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_matches_the_guidance_profile() {
        let tuning = GuidanceTuning::default();
        assert_eq!(*tuning.temperature(), 0.8);
        assert_eq!(*tuning.max_tokens(), 100);
        assert_eq!(*tuning.thinking_budget(), 50);
    }

    #[test]
    fn tuning_round_trips_through_toml_shape() {
        let tuning: GuidanceTuning = serde_json::from_str(
            r#"{"temperature": 0.5, "max_tokens": 80, "thinking_budget": 10}"#,
        )
        .unwrap();
        assert_eq!(tuning, GuidanceTuning::new(0.5, 80, 10));
    }
}
