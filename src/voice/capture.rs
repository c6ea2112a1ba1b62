//! Speech capture session management
//!
//! Wraps an injected speech-recognition backend in a small state machine and
//! surfaces transcript updates and failures through registered callbacks. The
//! backend delivers its events out-of-band; the host pump feeds them to
//! [`SpeechCaptureController::handle_event`] tagged with the session handle
//! they were produced under, so events from a restarted session are dropped
//! instead of resurrecting a stale transcript.

use crate::Result;

/// Status of the live capture session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStatus {
    /// No session running
    Idle,
    /// Receiving fragments from the backend
    Listening,
    /// The backend reported a failure; a new `start` recovers
    Error,
}

/// Handle identifying one capture session
///
/// Returned by [`SpeechCaptureController::start`] and attached by the host to
/// every backend event it delivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionHandle(u64);

/// Normalized event from a speech-recognition backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerEvent {
    /// The engine's current ordered fragment list for the live utterance
    ///
    /// Engines refine interim fragments as more audio arrives, so every
    /// update carries the full list. The cumulative transcript is the
    /// in-order concatenation.
    Fragments(Vec<String>),

    /// The backend failed (permission denied, no speech detected, network)
    Error(String),

    /// The backend ended the session on its own (e.g. silence timeout)
    Ended,
}

/// Speech-recognition backend
///
/// Adapts a host capability (on-device engine or cloud service) to the
/// capture controller. `begin`/`end` bracket one native session; recognition
/// events are delivered by the host, not returned from these calls.
pub trait SpeechRecognizer {
    /// Whether the host exposes a usable recognition capability
    fn is_supported(&self) -> bool;

    /// Ask the backend to open a native session
    ///
    /// # Errors
    ///
    /// Returns error if the backend refuses synchronously; the controller
    /// normalizes this into its asynchronous error path
    fn begin(&mut self) -> Result<()>;

    /// Ask the backend to end the native session
    fn end(&mut self);
}

type TranscriptListener = Box<dyn FnMut(&str) + Send>;
type ErrorListener = Box<dyn FnMut(&str) + Send>;

/// Manages exactly one speech-recognition session at a time
pub struct SpeechCaptureController<R: SpeechRecognizer> {
    recognizer: R,
    status: CaptureStatus,
    fragments: Vec<String>,
    last_error: Option<String>,
    generation: u64,
    transcript_listeners: Vec<TranscriptListener>,
    error_listeners: Vec<ErrorListener>,
}

impl<R: SpeechRecognizer> SpeechCaptureController<R> {
    /// Create a controller around a recognition backend
    #[must_use]
    pub const fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            status: CaptureStatus::Idle,
            fragments: Vec::new(),
            last_error: None,
            generation: 0,
            transcript_listeners: Vec::new(),
            error_listeners: Vec::new(),
        }
    }

    /// Whether the host exposes a recognition capability
    ///
    /// Check before [`Self::start`]; an unsupported host is reported here,
    /// never as a start failure.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.recognizer.is_supported()
    }

    /// Begin a new capture session
    ///
    /// A no-op returning the live handle when already listening, so
    /// overlapping starts never spawn a second native session. Otherwise the
    /// previous transcript is discarded and the generation advanced before
    /// the backend is asked to begin, so a callback still in flight from an
    /// older session can never reach the new one. A synchronous backend
    /// refusal moves the controller to [`CaptureStatus::Error`] and fires the
    /// error listeners; `start` itself does not fail.
    pub fn start(&mut self) -> SessionHandle {
        if self.status == CaptureStatus::Listening {
            tracing::debug!(session = self.generation, "already listening, start ignored");
            return SessionHandle(self.generation);
        }

        self.generation += 1;
        self.fragments.clear();
        self.last_error = None;
        self.status = CaptureStatus::Listening;

        if let Err(e) = self.recognizer.begin() {
            self.fail(&e.to_string());
        } else {
            tracing::debug!(session = self.generation, "capture session started");
        }

        SessionHandle(self.generation)
    }

    /// End the live capture session
    ///
    /// Safe to call in any state, including before any fragment has arrived;
    /// only a listening session is ended. The last received transcript is
    /// retained.
    pub fn stop(&mut self) {
        if self.status != CaptureStatus::Listening {
            return;
        }

        self.recognizer.end();
        self.status = CaptureStatus::Idle;
        tracing::debug!(session = self.generation, "capture session stopped");
    }

    /// Register a listener for cumulative transcript updates
    ///
    /// Invoked once per fragment update while listening, in arrival order.
    pub fn on_transcript(&mut self, listener: impl FnMut(&str) + Send + 'static) {
        self.transcript_listeners.push(Box::new(listener));
    }

    /// Register a listener for backend failures
    pub fn on_error(&mut self, listener: impl FnMut(&str) + Send + 'static) {
        self.error_listeners.push(Box::new(listener));
    }

    /// Feed a backend event into the controller
    ///
    /// Events carrying a stale handle, or arriving when no session is
    /// listening, are dropped.
    pub fn handle_event(&mut self, handle: SessionHandle, event: RecognizerEvent) {
        if handle.0 != self.generation {
            tracing::trace!(
                stale = handle.0,
                live = self.generation,
                "dropping event from stale session"
            );
            return;
        }

        if self.status != CaptureStatus::Listening {
            return;
        }

        match event {
            RecognizerEvent::Fragments(fragments) => {
                self.fragments = fragments;
                let transcript = self.fragments.concat();
                tracing::trace!(transcript = %transcript, "transcript updated");
                for listener in &mut self.transcript_listeners {
                    listener(&transcript);
                }
            }
            RecognizerEvent::Error(reason) => self.fail(&reason),
            RecognizerEvent::Ended => {
                self.status = CaptureStatus::Idle;
                tracing::debug!(session = self.generation, "backend ended capture session");
            }
        }
    }

    /// Current session status
    #[must_use]
    pub const fn status(&self) -> CaptureStatus {
        self.status
    }

    /// Cumulative transcript of the most recent session
    #[must_use]
    pub fn transcript(&self) -> String {
        self.fragments.concat()
    }

    /// Reason for the most recent failure, if the session is in error
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn fail(&mut self, reason: &str) {
        tracing::warn!(reason, "speech recognition failed");
        self.status = CaptureStatus::Error;
        self.last_error = Some(reason.to_string());
        for listener in &mut self.error_listeners {
            listener(reason);
        }
    }
}
