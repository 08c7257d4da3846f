//! The generation orchestrator.

use crate::generator::generate_asset;
use crate::session::SessionHandle;
use futures_util::stream::{FuturesUnordered, StreamExt};
use lumiere_core::{GenerationSession, ScriptRequest};
use lumiere_error::StudioErrorKind;
use lumiere_interface::JsonMode;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, instrument};

/// Fans one submission out into concurrent per-kind generation calls.
///
/// [`Studio::submit`] opens a [`GenerationSession`] with one pending slot
/// per requested kind, starts the matching generators concurrently, and
/// publishes a session snapshot after every completion event. Failure is
/// all-or-nothing: the first sub-request error poisons the session,
/// recorded results are discarded, and the remaining in-flight calls are
/// dropped.
///
/// The studio performs no input validation. Callers check
/// [`ScriptRequest::validate`] before submitting and serialize
/// submissions on the session loading flag; a new submission does not
/// cancel a prior in-flight session.
///
/// # Examples
///
/// ```rust,ignore
/// use lumiere_models::GeminiClient;
/// use lumiere_studio::Studio;
/// use std::sync::Arc;
///
/// let studio = Studio::new(Arc::new(GeminiClient::new()?));
/// let mut handle = studio.submit(request).await;
/// let session = handle.settled().await;
/// ```
pub struct Studio {
    driver: Arc<dyn JsonMode>,
}

impl Studio {
    /// Create a studio over a driver with structured output support.
    pub fn new(driver: Arc<dyn JsonMode>) -> Self {
        Self { driver }
    }

    /// Submit a request, returning an observer handle for its session.
    ///
    /// The fan-out runs on a background task; the handle sees snapshots
    /// through its watch channel as sub-requests settle.
    #[instrument(skip(self, request), fields(theme = %request.theme(), kinds = request.kinds().len()))]
    pub async fn submit(&self, request: ScriptRequest) -> SessionHandle {
        let session = GenerationSession::begin(request.kinds());
        debug!(session = %session.id(), "Submitting generation request");

        let (tx, rx) = watch::channel(session.clone());
        let driver = Arc::clone(&self.driver);
        tokio::spawn(run_fan_out(driver, request, session, tx));

        SessionHandle::new(rx)
    }
}

/// Drive every generator to completion, publishing snapshots as results
/// land. First failure wins: the session is poisoned and the remaining
/// futures are dropped, so a late success can never resurface.
async fn run_fan_out(
    driver: Arc<dyn JsonMode>,
    request: ScriptRequest,
    mut session: GenerationSession,
    tx: watch::Sender<GenerationSession>,
) {
    let mut jobs = request
        .kinds()
        .iter()
        .map(|kind| {
            let driver = Arc::clone(&driver);
            let script = request.script().clone();
            let theme = request.theme().clone();
            let kind = *kind;
            async move {
                let result = generate_asset(driver.as_ref(), kind, &script, &theme).await;
                (kind, result)
            }
        })
        .collect::<FuturesUnordered<_>>();

    while let Some((kind, result)) = jobs.next().await {
        match result {
            Ok(payload) => {
                session.record_success(payload);
                tx.send_replace(session.clone());
            }
            Err(e) => {
                let cause = e.kind().to_string();
                error!(
                    session = %session.id(),
                    kind = %kind,
                    cause = %cause,
                    "Generation session failed"
                );
                session.record_failure(kind, cause.clone());
                tx.send_replace(session.clone());

                session.poison(StudioErrorKind::GenerationFailed(cause).to_string());
                tx.send_replace(session.clone());
                return;
            }
        }
    }

    session.finalize();
    tx.send_replace(session.clone());
}
