//! Session state for a single generation fan-out.

use crate::{AssetKind, AssetPayload};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

/// Outcome slot for one requested asset kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AssetSlot {
    /// Sub-request has not settled yet
    #[default]
    Pending,
    /// Generation succeeded
    Ready(AssetPayload),
    /// Generation failed, with the underlying cause message
    Failed(String),
}

impl AssetSlot {
    /// True while the sub-request has not settled.
    pub fn is_pending(&self) -> bool {
        matches!(self, AssetSlot::Pending)
    }

    /// Borrow the payload if the sub-request succeeded.
    pub fn payload(&self) -> Option<&AssetPayload> {
        match self {
            AssetSlot::Ready(payload) => Some(payload),
            _ => None,
        }
    }
}

/// State of one generation fan-out, from submission to settlement.
///
/// A session is created when a request is submitted, mutated only by
/// completion events of its own sub-requests, and finalized once every
/// sub-request has settled. Any sub-request failure poisons the whole
/// session: recorded results are discarded and a single aggregate error
/// message is kept.
///
/// # Examples
///
/// ```
/// use lumiere_core::{AssetKind, AssetPayload, GenerationSession};
///
/// let mut session = GenerationSession::begin(&[AssetKind::Blueprint]);
/// assert!(session.loading());
///
/// session.record_success(AssetPayload::Blueprint("# Logline".to_string()));
/// session.finalize();
///
/// assert!(!session.loading());
/// assert!(session.payload(AssetKind::Blueprint).is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSession {
    /// Unique session identifier, used for log correlation
    id: Uuid,
    /// True from submission until settlement
    loading: bool,
    /// One slot per requested kind
    slots: BTreeMap<AssetKind, AssetSlot>,
    /// Aggregate error message, set when the session is poisoned
    error: Option<String>,
}

impl GenerationSession {
    /// Open a session with one pending slot per requested kind.
    pub fn begin(kinds: &[AssetKind]) -> Self {
        let id = Uuid::new_v4();
        let slots = kinds
            .iter()
            .map(|kind| (*kind, AssetSlot::Pending))
            .collect::<BTreeMap<_, _>>();
        debug!(session = %id, kinds = slots.len(), "Opened generation session");
        Self {
            id,
            loading: true,
            slots,
            error: None,
        }
    }

    /// Record a successful sub-request. The slot is selected by the
    /// payload's own kind.
    pub fn record_success(&mut self, payload: AssetPayload) {
        let kind = payload.kind();
        debug!(session = %self.id, kind = %kind, "Recording generated asset");
        self.slots.insert(kind, AssetSlot::Ready(payload));
    }

    /// Record a failed sub-request with its cause message.
    pub fn record_failure(&mut self, kind: AssetKind, cause: impl Into<String>) {
        let cause = cause.into();
        debug!(session = %self.id, kind = %kind, cause = %cause, "Recording failed asset");
        self.slots.insert(kind, AssetSlot::Failed(cause));
    }

    /// Mark the whole session failed.
    ///
    /// Results recorded so far are discarded, the aggregate message is
    /// kept, and the loading flag is cleared.
    pub fn poison(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(session = %self.id, error = %message, "Poisoning generation session");
        self.slots.clear();
        self.error = Some(message);
        self.loading = false;
    }

    /// Clear the loading flag once every sub-request has settled.
    pub fn finalize(&mut self) {
        debug!(session = %self.id, "Finalizing generation session");
        self.loading = false;
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// True from submission until settlement.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Aggregate error message, if the session failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Slot for a specific kind, if it was requested.
    pub fn slot(&self, kind: AssetKind) -> Option<&AssetSlot> {
        self.slots.get(&kind)
    }

    /// All slots, keyed by kind.
    pub fn slots(&self) -> &BTreeMap<AssetKind, AssetSlot> {
        &self.slots
    }

    /// Payload for a kind, if that sub-request succeeded.
    pub fn payload(&self, kind: AssetKind) -> Option<&AssetPayload> {
        self.slots.get(&kind).and_then(AssetSlot::payload)
    }
}

/// State of the independent guidance requester.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GuidanceState {
    /// No guidance requested yet
    #[default]
    Idle,
    /// Request in flight
    Pending,
    /// Feedback text available
    Ready(String),
}

impl GuidanceState {
    /// True while a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, GuidanceState::Pending)
    }

    /// Borrow the feedback text, if available.
    pub fn text(&self) -> Option<&str> {
        match self {
            GuidanceState::Ready(text) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AudioPrompt;

    #[test]
    fn session_opens_with_pending_slots() {
        let session = GenerationSession::begin(&[AssetKind::Blueprint, AssetKind::Storyboard]);
        assert!(session.loading());
        assert!(session.error().is_none());
        assert_eq!(session.slots().len(), 2);
        assert!(session.slot(AssetKind::Blueprint).unwrap().is_pending());
        assert!(session.slot(AssetKind::AudioPrompt).is_none());
    }

    #[test]
    fn success_fills_the_matching_slot() {
        let mut session = GenerationSession::begin(&[AssetKind::AudioPrompt]);
        session.record_success(AssetPayload::Audio(AudioPrompt {
            style: "dark synth".to_string(),
            lyrics: "[Verse] neon rain".to_string(),
        }));
        assert!(session.payload(AssetKind::AudioPrompt).is_some());
    }

    #[test]
    fn poison_discards_recorded_results() {
        let mut session = GenerationSession::begin(&[AssetKind::Blueprint, AssetKind::Storyboard]);
        session.record_success(AssetPayload::Blueprint("# Logline".to_string()));
        session.record_failure(AssetKind::Storyboard, "HTTP 503 error");
        session.poison("Failed to generate content. Details: HTTP 503 error");

        assert!(!session.loading());
        assert!(session.slots().is_empty());
        assert_eq!(
            session.error(),
            Some("Failed to generate content. Details: HTTP 503 error")
        );
    }

    #[test]
    fn finalize_clears_loading_and_keeps_results() {
        let mut session = GenerationSession::begin(&[AssetKind::Storyboard]);
        session.record_success(AssetPayload::Storyboard("1. Wide shot".to_string()));
        session.finalize();
        assert!(!session.loading());
        assert!(session.payload(AssetKind::Storyboard).is_some());
    }

    #[test]
    fn guidance_state_exposes_text_only_when_ready() {
        assert!(GuidanceState::Idle.text().is_none());
        assert!(GuidanceState::Pending.is_pending());
        assert_eq!(
            GuidanceState::Ready("Tighten the dialogue.".to_string()).text(),
            Some("Tighten the dialogue.")
        );
    }
}
