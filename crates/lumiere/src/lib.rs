//! Lumiere - Script-to-Cinematic-Assets Toolkit
//!
//! Lumiere turns a screenplay excerpt and a creative theme into a set of
//! production assets by fanning the script out to the Gemini API: a
//! markdown production blueprint, a structured audio generation prompt,
//! and numbered storyboard image prompts. A separate lightweight channel
//! requests short feedback on the script itself.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lumiere::{AssetKind, GeminiClient, ScriptRequest, Studio};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let driver = Arc::new(GeminiClient::new()?);
//!     let studio = Studio::new(driver);
//!
//!     let request = ScriptRequest::new(
//!         "INT. OFFICE - DAY\nJane stares at the screen.",
//!         "Cyberpunk Noir",
//!         vec![AssetKind::Blueprint, AssetKind::Storyboard],
//!     );
//!     request.validate()?;
//!
//!     let mut handle = studio.submit(request).await;
//!     let session = handle.settled().await;
//!     println!("{:#?}", session.slots());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Lumiere is organized as a workspace with focused crates:
//!
//! - `lumiere_core` - Core data types (ScriptRequest, AssetPayload, etc.)
//! - `lumiere_interface` - LumiereDriver and JsonMode trait definitions
//! - `lumiere_error` - Error types
//! - `lumiere_models` - Gemini provider implementation
//! - `lumiere_studio` - Generation fan-out and guidance orchestration
//!
//! This crate (`lumiere`) re-exports everything for convenience and
//! carries the CLI binary with its configuration and export helpers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Re-export core crates (always available)
pub use lumiere_core::*;
pub use lumiere_error::*;
pub use lumiere_interface::*;
pub use lumiere_models::{DEFAULT_GEMINI_MODEL, GeminiClient};
pub use lumiere_studio::{
    GUIDANCE_FALLBACK, GuidanceRequester, GuidanceTuning, SessionHandle, Studio, generate_asset,
};

pub mod config;
pub mod export;
