//! Core data types for the Lumiere cinematic asset generation library.
//!
//! This crate provides the foundation data types used across all Lumiere interfaces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod message;
mod output;
mod request;
mod role;
mod script;
mod session;

pub use asset::{AssetKind, AssetPayload, AudioPrompt};
pub use message::{Message, MessageBuilder};
pub use output::Output;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use script::{MIN_SCRIPT_CHARS, MIN_THEME_CHARS, ScriptRequest};
pub use session::{AssetSlot, GenerationSession, GuidanceState};
