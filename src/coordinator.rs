//! Search coordination
//!
//! Single source of truth for the current query. Bridges typed input and the
//! voice subsystem to the pure filter engine and surfaces transient
//! notifications to the presentation layer through registered callbacks.

use std::sync::{Arc, Mutex};

use crate::catalog::{Catalog, Deal};
use crate::search;
use crate::voice::{
    CaptureStatus, RecognizerEvent, SessionHandle, SpeechCaptureController, SpeechPlayback,
    SpeechRecognizer, SpeechSynthesizer,
};

/// Transient user-facing signal for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The host has no speech-recognition capability
    VoiceUnsupported,

    /// A capture session began
    ListeningStarted,

    /// The capture session ended
    ListeningStopped,

    /// The recognition backend reported a failure
    RecognitionError(String),
}

type NotificationListener = Box<dyn FnMut(&Notification) + Send>;

/// Fan-out of notifications to registered listeners
#[derive(Clone, Default)]
struct Notifier {
    listeners: Arc<Mutex<Vec<NotificationListener>>>,
}

impl Notifier {
    fn register(&self, listener: NotificationListener) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(listener);
        }
    }

    fn emit(&self, notification: &Notification) {
        if let Ok(mut listeners) = self.listeners.lock() {
            for listener in listeners.iter_mut() {
                listener(notification);
            }
        }
    }
}

/// Owns the query and derives the visible result set
pub struct SearchCoordinator<R: SpeechRecognizer, S: SpeechSynthesizer> {
    catalog: Arc<Catalog>,
    query: Arc<Mutex<String>>,
    capture: SpeechCaptureController<R>,
    playback: SpeechPlayback<S>,
    notifier: Notifier,
}

impl<R, S> SearchCoordinator<R, S>
where
    R: SpeechRecognizer,
    S: SpeechSynthesizer,
{
    /// Wire the coordinator to its leaf components
    ///
    /// The capture controller's transcript callback overwrites the query, so
    /// once voice capture is active the transcript always wins over a stale
    /// typed value; recognition failures surface as
    /// [`Notification::RecognitionError`].
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, recognizer: R, playback: SpeechPlayback<S>) -> Self {
        let query = Arc::new(Mutex::new(String::new()));
        let notifier = Notifier::default();

        let mut capture = SpeechCaptureController::new(recognizer);

        let transcript_query = Arc::clone(&query);
        capture.on_transcript(move |transcript| {
            if let Ok(mut query) = transcript_query.lock() {
                transcript.clone_into(&mut query);
            }
        });

        let error_notifier = notifier.clone();
        capture.on_error(move |reason| {
            error_notifier.emit(&Notification::RecognitionError(reason.to_string()));
        });

        Self {
            catalog,
            query,
            capture,
            playback,
            notifier,
        }
    }

    /// Register a presentation-layer notification listener
    pub fn on_notification(&self, listener: impl FnMut(&Notification) + Send + 'static) {
        self.notifier.register(Box::new(listener));
    }

    /// Overwrite the query from typed input
    pub fn set_query(&self, text: &str) {
        if let Ok(mut query) = self.query.lock() {
            text.clone_into(&mut query);
        }
    }

    /// Current query string
    #[must_use]
    pub fn query(&self) -> String {
        self.query.lock().map(|query| query.clone()).unwrap_or_default()
    }

    /// Start or stop voice capture
    ///
    /// When listening, stops the session and emits
    /// [`Notification::ListeningStopped`]. Otherwise starts one, unless the
    /// host has no recognition capability, in which case a single
    /// [`Notification::VoiceUnsupported`] is emitted and the query is left
    /// untouched. Returns the handle of the newly started session so the
    /// host pump can route backend events, or `None` when no session began.
    pub fn toggle_voice(&mut self) -> Option<SessionHandle> {
        if self.capture.status() == CaptureStatus::Listening {
            self.capture.stop();
            self.notifier.emit(&Notification::ListeningStopped);
            return None;
        }

        if !self.capture.is_supported() {
            tracing::debug!("speech recognition unsupported, voice toggle ignored");
            self.notifier.emit(&Notification::VoiceUnsupported);
            return None;
        }

        let handle = self.capture.start();
        if self.capture.status() == CaptureStatus::Listening {
            self.notifier.emit(&Notification::ListeningStarted);
            Some(handle)
        } else {
            None
        }
    }

    /// Feed a recognition backend event through the capture controller
    ///
    /// Emits [`Notification::ListeningStopped`] when the event ended the
    /// session from the backend side.
    pub fn handle_recognizer_event(&mut self, handle: SessionHandle, event: RecognizerEvent) {
        let was_listening = self.capture.status() == CaptureStatus::Listening;
        self.capture.handle_event(handle, event);

        if was_listening && self.capture.status() == CaptureStatus::Idle {
            self.notifier.emit(&Notification::ListeningStopped);
        }
    }

    /// Recompute the visible results for the live query
    ///
    /// Always re-derived from the fixed catalog, never cached across query
    /// mutations.
    #[must_use]
    pub fn results(&self) -> Vec<&Deal> {
        let query = self.query();
        search::filter_deals(self.catalog.deals(), &query)
    }

    /// Speak a deal's description and return the spoken sentence
    pub fn describe(&mut self, deal: &Deal) -> String {
        let sentence = format!(
            "{} {}. Originally {} rupees, now {} rupees. {}% off. {}",
            deal.brand,
            deal.title,
            deal.original_price,
            deal.discounted_price,
            deal.discount,
            deal.description
        );
        self.playback.speak(&sentence);
        sentence
    }

    /// Capture session status, for presentation feedback
    #[must_use]
    pub const fn capture_status(&self) -> CaptureStatus {
        self.capture.status()
    }

    /// Cumulative transcript of the most recent capture session
    #[must_use]
    pub fn transcript(&self) -> String {
        self.capture.transcript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::{ConsoleSynthesizer, StubRecognizer};

    fn coordinator() -> SearchCoordinator<StubRecognizer, ConsoleSynthesizer> {
        SearchCoordinator::new(
            Arc::new(Catalog::sample()),
            StubRecognizer::supported(),
            SpeechPlayback::new(ConsoleSynthesizer),
        )
    }

    #[test]
    fn typed_query_filters_results() {
        let coordinator = coordinator();

        coordinator.set_query("shirt");
        let results = coordinator.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].brand, "Allen Solly");
    }

    #[test]
    fn results_recomputed_per_mutation() {
        let coordinator = coordinator();

        coordinator.set_query("denim");
        assert_eq!(coordinator.results().len(), 1);

        coordinator.set_query("");
        assert_eq!(coordinator.results().len(), 6);
    }

    #[test]
    fn describe_builds_exact_sentence() {
        let mut coordinator = coordinator();
        let catalog = Catalog::sample();
        let deal = catalog.get("1").unwrap();

        let sentence = coordinator.describe(deal);
        assert_eq!(
            sentence,
            "Allen Solly Cotton Slim Fit Casual Shirt. Originally 2499 rupees, \
             now 1249 rupees. 50% off. Premium cotton fabric with modern slim fit. \
             Perfect for casual outings."
        );
    }
}
