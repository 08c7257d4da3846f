//! Test utilities for lumiere_studio tests.
//!
//! Provides a behavior-programmable driver so orchestration tests run
//! without real API calls.

// Each test binary compiles its own copy, so not every helper is used
// from every binary.
#![allow(dead_code)]

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver, RecordedCall};
