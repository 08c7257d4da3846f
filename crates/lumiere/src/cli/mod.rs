//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the lumiere binary.

mod commands;
mod feedback;
mod generate;

pub use commands::{Cli, Commands};
pub use feedback::run_feedback;
pub use generate::run_generate;

use lumiere::{ExportError, ExportErrorKind, LumiereResult};
use std::path::Path;

/// Read a script file into memory.
pub(crate) fn read_script(path: &Path) -> LumiereResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ExportError::new(ExportErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
        .into()
    })
}
