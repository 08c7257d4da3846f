//! Script feedback command handler.

use lumiere::config::LumiereConfig;
use lumiere::export;
use lumiere::{GeminiClient, GuidanceRequester, LumiereResult};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Request short feedback on a script file and print it.
pub async fn run_feedback(script_path: &Path, copy: bool) -> LumiereResult<()> {
    let config = LumiereConfig::load()?;
    let script = super::read_script(script_path)?;

    let driver = Arc::new(GeminiClient::with_model(config.models.generation.clone())?);
    let requester = GuidanceRequester::with_tuning(driver, config.guidance);

    info!(script = %script_path.display(), "Requesting script feedback");

    let advice = requester.request_guidance(&script).await;
    println!("{}", advice);

    if copy && export::copy_text(&advice) {
        println!("Copied to clipboard");
    }

    Ok(())
}
