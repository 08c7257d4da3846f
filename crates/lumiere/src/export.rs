//! Asset export and clipboard helpers.
//!
//! Generated assets are written into an export directory under canonical
//! file names, one file per asset kind. Clipboard support shells out to a
//! platform helper and never fails the calling command.

use lumiere_core::{AssetKind, AssetPayload, GenerationSession};
use lumiere_error::{ExportError, ExportErrorKind, JsonError, LumiereResult};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, instrument, warn};

/// Canonical file name for an asset kind.
pub fn asset_file_name(kind: AssetKind) -> &'static str {
    match kind {
        AssetKind::Blueprint => "blueprint.md",
        AssetKind::AudioPrompt => "audio_prompt.json",
        AssetKind::Storyboard => "storyboard.txt",
    }
}

/// Render a payload to its on-disk form.
///
/// Text assets are written verbatim. The audio prompt is serialized as
/// pretty-printed JSON so it can be pasted into a music generator.
pub fn render_asset(payload: &AssetPayload) -> LumiereResult<String> {
    match payload {
        AssetPayload::Blueprint(text) | AssetPayload::Storyboard(text) => Ok(text.clone()),
        AssetPayload::Audio(prompt) => serde_json::to_string_pretty(prompt)
            .map_err(|e| JsonError::new(e.to_string()).into()),
    }
}

/// Write one asset into `dir` under its canonical file name.
///
/// Creates the directory if needed and returns the path of the written
/// file.
#[instrument(skip(payload, dir), fields(kind = %payload.kind(), dir = %dir.display()))]
pub fn save_asset(payload: &AssetPayload, dir: &Path) -> LumiereResult<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| {
        ExportError::new(ExportErrorKind::DirectoryCreation(format!(
            "{}: {}",
            dir.display(),
            e
        )))
    })?;

    let path = dir.join(asset_file_name(payload.kind()));
    let content = render_asset(payload)?;
    std::fs::write(&path, content).map_err(|e| {
        ExportError::new(ExportErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    debug!(path = %path.display(), "Wrote asset");
    Ok(path)
}

/// Write every ready asset of a settled session into `dir`.
///
/// Export is best effort: an asset that fails to write is logged and
/// skipped. Returns the paths that were written.
#[instrument(skip(session, dir), fields(session = %session.id(), dir = %dir.display()))]
pub fn export_assets(session: &GenerationSession, dir: &Path) -> Vec<PathBuf> {
    let mut written = Vec::new();
    for slot in session.slots().values() {
        let Some(payload) = slot.payload() else {
            continue;
        };
        match save_asset(payload, dir) {
            Ok(path) => written.push(path),
            Err(e) => warn!(kind = %payload.kind(), error = %e, "Skipping asset export"),
        }
    }
    written
}

/// Copy text to the system clipboard, best effort.
///
/// Tries the Wayland, X11, and macOS clipboard helpers in turn and
/// reports whether one of them accepted the text. Never fails the
/// calling command.
pub fn copy_text(text: &str) -> bool {
    const HELPERS: [(&str, &[&str]); 3] = [
        ("wl-copy", &[]),
        ("xclip", &["-selection", "clipboard"]),
        ("pbcopy", &[]),
    ];

    for (program, args) in HELPERS {
        match pipe_to_helper(program, args, text) {
            Ok(()) => {
                debug!(helper = program, "Copied text to clipboard");
                return true;
            }
            Err(e) => debug!(helper = program, error = %e, "Clipboard helper unavailable"),
        }
    }

    warn!("No clipboard helper accepted the text");
    false
}

fn pipe_to_helper(program: &str, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(text.as_bytes())?;
    }
    // Close the pipe so the helper sees end of input and exits.
    drop(child.stdin.take());

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!(
            "{} exited with {}",
            program, status
        )))
    }
}
