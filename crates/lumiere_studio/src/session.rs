//! Observer handle for a generation session.

use lumiere_core::GenerationSession;
use tokio::sync::watch;

/// Observer side of one generation fan-out.
///
/// The orchestrator publishes a fresh [`GenerationSession`] snapshot
/// through a watch channel after every completion event. Snapshots are
/// immutable values; holders never see a session mid-mutation.
///
/// The handle can be cloned to hand the same session to several
/// observers.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    rx: watch::Receiver<GenerationSession>,
}

impl SessionHandle {
    pub(crate) fn new(rx: watch::Receiver<GenerationSession>) -> Self {
        Self { rx }
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> GenerationSession {
        self.rx.borrow().clone()
    }

    /// Wait for the next published snapshot.
    ///
    /// Returns `None` once the session task has finished and no newer
    /// snapshot will arrive.
    pub async fn changed(&mut self) -> Option<GenerationSession> {
        match self.rx.changed().await {
            Ok(()) => Some(self.rx.borrow_and_update().clone()),
            Err(_) => None,
        }
    }

    /// Wait until the session settles, then return the final snapshot.
    ///
    /// A session settles when every sub-request has completed (loading
    /// cleared) or the session is poisoned by a failure.
    pub async fn settled(&mut self) -> GenerationSession {
        loop {
            {
                let current = self.rx.borrow_and_update();
                if !current.loading() {
                    return current.clone();
                }
            }
            if self.rx.changed().await.is_err() {
                return self.rx.borrow().clone();
            }
        }
    }
}
