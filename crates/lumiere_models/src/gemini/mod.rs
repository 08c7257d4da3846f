//! Google Gemini REST API integration.

mod client;
mod conversion;
mod dto;

pub use client::{DEFAULT_GEMINI_MODEL, GeminiClient};
pub use dto::{
    GeminiCandidate, GeminiContent, GeminiPart, GeminiRequest, GeminiRequestBuilder,
    GeminiResponse, GenerationConfig, GenerationConfigBuilder, ThinkingConfig,
};
