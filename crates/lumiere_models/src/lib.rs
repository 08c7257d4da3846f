//! LLM provider integrations for Lumiere.
//!
//! This crate provides the Gemini client used by the studio orchestrator.
//! The client speaks the `generateContent` REST API directly over reqwest,
//! in both free-text and schema-constrained modes.
//!
//! # Example
//!
//! ```no_run
//! use lumiere_models::GeminiClient;
//! use lumiere_interface::LumiereDriver;
//! use lumiere_core::{GenerateRequest, Message, Role};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message {
//!         role: Role::User,
//!         content: "Describe a rain-slick neon street.".to_string(),
//!     }])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{DEFAULT_GEMINI_MODEL, GeminiClient};
