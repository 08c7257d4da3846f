//! Asset generation command handler.

use lumiere::config::LumiereConfig;
use lumiere::export;
use lumiere::{
    AssetKind, GeminiClient, GenerationSession, GuidanceRequester, LumiereResult, ScriptRequest,
    Studio,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{error, info};

/// Generate cinematic assets from a script file.
///
/// Submits one generation session and waits for it to settle. When
/// `feedback` is set, a guidance request runs concurrently with the
/// fan-out and its advice is printed after the assets.
pub async fn run_generate(
    script_path: &Path,
    theme: &str,
    kinds: Vec<AssetKind>,
    feedback: bool,
    out: Option<PathBuf>,
) -> LumiereResult<()> {
    let config = LumiereConfig::load()?;
    let script = super::read_script(script_path)?;

    let kinds = if kinds.is_empty() {
        AssetKind::iter().collect()
    } else {
        kinds
    };

    let request = ScriptRequest::new(script.clone(), theme, kinds);
    request.validate()?;

    let driver = Arc::new(GeminiClient::with_model(config.models.generation.clone())?);
    let studio = Studio::new(driver.clone());
    let requester = feedback.then(|| GuidanceRequester::with_tuning(driver, config.guidance));

    // A fresh submission invalidates any advice from an earlier script.
    if let Some(requester) = &requester {
        requester.reset();
    }

    info!(
        script = %script_path.display(),
        theme,
        "Submitting generation request"
    );

    let mut handle = studio.submit(request).await;

    let (session, advice) = match &requester {
        Some(requester) => {
            let (session, advice) =
                tokio::join!(handle.settled(), requester.request_guidance(&script));
            (session, Some(advice))
        }
        None => (handle.settled().await, None),
    };

    let succeeded = report(&session, out.as_deref().unwrap_or(&config.export.dir));

    // Feedback is an independent channel, so it prints even when the
    // generation session failed.
    if let Some(advice) = advice {
        println!();
        println!("Feedback: {}", advice);
    }

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}

/// Print the session outcome and export ready assets.
fn report(session: &GenerationSession, dir: &Path) -> bool {
    if let Some(message) = session.error() {
        error!(session = %session.id(), "Generation session failed");
        eprintln!("{}", message);
        return false;
    }

    let written = export::export_assets(session, dir);
    info!(session = %session.id(), files = written.len(), "Exported assets");
    for path in &written {
        println!("Wrote {}", path.display());
    }
    true
}
