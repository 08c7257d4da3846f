//! Behavior-programmable driver for orchestration tests.
//!
//! The mock mirrors the production client's semantics at the trait
//! boundary: free-text calls return outputs, schema calls return parsed
//! JSON or a schema violation, and failures surface as Gemini errors.
//! Behaviors can be keyed on instruction content so a fan-out can
//! succeed on one kind and fail on another.

use async_trait::async_trait;
use lumiere_core::{GenerateRequest, GenerateResponse, Output, Role};
use lumiere_error::{GeminiError, GeminiErrorKind, LumiereResult, SchemaError, SchemaErrorKind};
use lumiere_interface::{JsonMode, LumiereDriver};
use std::sync::{Arc, Mutex};

/// Scripted outcome for one boundary call.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this text. In schema mode the text is parsed as JSON, so a
    /// non-JSON value reproduces a remote schema violation.
    Text(String),
    /// Return this structured value. In free-text mode it surfaces as a
    /// structured output that text extraction ignores.
    Json(serde_json::Value),
    /// Fail the call with a Gemini error.
    Error(GeminiErrorKind),
    /// Return a response with no outputs at all.
    Empty,
    /// Never complete. Used to prove that in-flight calls are dropped.
    Stall,
}

/// One observed boundary call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Concatenated system message content
    pub instruction: String,
    /// Concatenated non-system message content
    pub input: String,
    /// Schema passed to `generate_json`, if this was a schema call
    pub schema: Option<serde_json::Value>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub thinking_budget: Option<u32>,
}

/// Mock implementation of the driver traits.
#[derive(Clone)]
pub struct MockDriver {
    text_behavior: MockBehavior,
    json_behavior: MockBehavior,
    rules: Arc<Mutex<Vec<(String, MockBehavior)>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockDriver {
    /// A driver that answers every free-text call with `text` and every
    /// schema call with `json`.
    pub fn succeed_with(text: &str, json: serde_json::Value) -> Self {
        Self {
            text_behavior: MockBehavior::Text(text.to_string()),
            json_behavior: MockBehavior::Json(json),
            rules: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A driver that answers every call with `text`. Schema calls parse
    /// the text as JSON, exactly like the production client.
    pub fn text(text: &str) -> Self {
        Self {
            text_behavior: MockBehavior::Text(text.to_string()),
            json_behavior: MockBehavior::Text(text.to_string()),
            rules: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A driver that fails every call with the given error kind.
    pub fn failing(kind: GeminiErrorKind) -> Self {
        Self {
            text_behavior: MockBehavior::Error(kind.clone()),
            json_behavior: MockBehavior::Error(kind),
            rules: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A driver that never completes any call.
    pub fn stalled() -> Self {
        Self {
            text_behavior: MockBehavior::Stall,
            json_behavior: MockBehavior::Stall,
            rules: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Override the behavior for calls whose instruction contains
    /// `needle`. Rules are checked in registration order, before the
    /// default behaviors.
    pub fn on(self, needle: &str, behavior: MockBehavior) -> Self {
        self.rules
            .lock()
            .unwrap()
            .push((needle.to_string(), behavior));
        self
    }

    /// Number of boundary calls observed so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All observed calls, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, req: &GenerateRequest, schema: Option<&serde_json::Value>) -> String {
        let (instruction, input) = split_messages(req);
        self.calls.lock().unwrap().push(RecordedCall {
            instruction: instruction.clone(),
            input,
            schema: schema.cloned(),
            max_tokens: req.max_tokens,
            temperature: req.temperature,
            thinking_budget: req.thinking_budget,
        });
        instruction
    }

    fn behavior_for(&self, instruction: &str, default: &MockBehavior) -> MockBehavior {
        let rules = self.rules.lock().unwrap();
        for (needle, behavior) in rules.iter() {
            if instruction.contains(needle) {
                return behavior.clone();
            }
        }
        default.clone()
    }
}

#[async_trait]
impl LumiereDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> LumiereResult<GenerateResponse> {
        let instruction = self.record(req, None);
        match self.behavior_for(&instruction, &self.text_behavior) {
            MockBehavior::Text(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text)],
            }),
            MockBehavior::Json(value) => Ok(GenerateResponse {
                outputs: vec![Output::Json(value)],
            }),
            MockBehavior::Error(kind) => Err(GeminiError::new(kind).into()),
            MockBehavior::Empty => Ok(GenerateResponse { outputs: vec![] }),
            MockBehavior::Stall => {
                futures_util::future::pending::<()>().await;
                unreachable!("stalled call resumed")
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

#[async_trait]
impl JsonMode for MockDriver {
    async fn generate_json(
        &self,
        req: &GenerateRequest,
        schema: &serde_json::Value,
    ) -> LumiereResult<serde_json::Value> {
        let instruction = self.record(req, Some(schema));
        match self.behavior_for(&instruction, &self.json_behavior) {
            MockBehavior::Json(value) => Ok(value),
            MockBehavior::Text(text) => serde_json::from_str(&text).map_err(|e| {
                SchemaError::new(SchemaErrorKind::InvalidJson(e.to_string())).into()
            }),
            MockBehavior::Error(kind) => Err(GeminiError::new(kind).into()),
            MockBehavior::Empty => Err(GeminiError::new(GeminiErrorKind::EmptyResponse).into()),
            MockBehavior::Stall => {
                futures_util::future::pending::<()>().await;
                unreachable!("stalled call resumed")
            }
        }
    }
}

fn split_messages(req: &GenerateRequest) -> (String, String) {
    let mut instruction = Vec::new();
    let mut input = Vec::new();
    for message in &req.messages {
        match message.role {
            Role::System => instruction.push(message.content.clone()),
            _ => input.push(message.content.clone()),
        }
    }
    (instruction.join("\n"), input.join("\n"))
}
