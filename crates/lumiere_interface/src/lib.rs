//! Trait definitions for the Lumiere cinematic asset generation library.
//!
//! This crate provides the core driver trait and the capability traits
//! that define the Lumiere generation boundary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{JsonMode, LumiereDriver};
