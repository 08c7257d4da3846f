//! Generation orchestration for Lumiere.
//!
//! This crate turns one submitted script into a set of concurrent
//! boundary calls and a single observable session:
//!
//! - **[`Studio`]**: fans a [`lumiere_core::ScriptRequest`] out into one
//!   generator per requested asset kind, publishing session snapshots as
//!   results land. Any sub-request failure poisons the whole session.
//! - **[`generator`]**: per-kind generators over the driver traits, free
//!   text for blueprint and storyboard, schema-constrained JSON for the
//!   audio prompt.
//! - **[`GuidanceRequester`]**: an independent short feedback call with
//!   its own state channel; failures collapse to a fixed fallback string.
//! - **[`prompts`]**: the instruction templates that carry all of the
//!   domain knowledge.
//!
//! # Example
//!
//! ```rust,ignore
//! use lumiere_core::{AssetKind, ScriptRequest};
//! use lumiere_models::GeminiClient;
//! use lumiere_studio::Studio;
//! use std::sync::Arc;
//!
//! let request = ScriptRequest::new(script, "Cyberpunk Noir", vec![AssetKind::Blueprint]);
//! request.validate()?;
//!
//! let studio = Studio::new(Arc::new(GeminiClient::new()?));
//! let mut handle = studio.submit(request).await;
//!
//! let session = handle.settled().await;
//! match session.error() {
//!     Some(message) => eprintln!("{message}"),
//!     None => println!("{:?}", session.payload(AssetKind::Blueprint)),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod guidance;
pub mod prompts;
mod session;
mod studio;

pub use generator::generate_asset;
pub use guidance::{GUIDANCE_FALLBACK, GuidanceRequester, GuidanceTuning};
pub use session::SessionHandle;
pub use studio::Studio;
