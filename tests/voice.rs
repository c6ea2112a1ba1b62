//! Speech capture state machine integration tests
//!
//! Drives the capture controller with a counting backend; no audio hardware
//! or recognition engine is involved.

use std::sync::{Arc, Mutex};

use voicedeals::Result;
use voicedeals::voice::{
    CaptureStatus, RecognizerEvent, SpeechCaptureController, SpeechRecognizer,
};

/// Recognition backend that counts native session open/close requests
#[derive(Debug, Clone, Default)]
struct CountingRecognizer {
    begins: Arc<Mutex<usize>>,
    ends: Arc<Mutex<usize>>,
}

impl CountingRecognizer {
    fn new() -> Self {
        Self::default()
    }

    fn begins(&self) -> usize {
        *self.begins.lock().unwrap()
    }

    fn ends(&self) -> usize {
        *self.ends.lock().unwrap()
    }
}

impl SpeechRecognizer for CountingRecognizer {
    fn is_supported(&self) -> bool {
        true
    }

    fn begin(&mut self) -> Result<()> {
        *self.begins.lock().unwrap() += 1;
        Ok(())
    }

    fn end(&mut self) {
        *self.ends.lock().unwrap() += 1;
    }
}

fn fragments(parts: &[&str]) -> RecognizerEvent {
    RecognizerEvent::Fragments(parts.iter().map(ToString::to_string).collect())
}

#[test]
fn transcript_begins_empty_and_accumulates_in_order() {
    let mut controller = SpeechCaptureController::new(CountingRecognizer::new());

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    controller.on_transcript(move |transcript| {
        sink.lock().unwrap().push(transcript.to_string());
    });

    let handle = controller.start();
    assert_eq!(controller.transcript(), "");

    controller.handle_event(handle, fragments(&["find "]));
    controller.handle_event(handle, fragments(&["find ", "blue "]));
    controller.handle_event(handle, fragments(&["find ", "blue ", "jeans"]));

    assert_eq!(controller.transcript(), "find blue jeans");
    assert_eq!(
        *seen.lock().unwrap(),
        vec!["find ", "find blue ", "find blue jeans"]
    );
}

#[test]
fn second_start_is_noop_without_new_session() {
    let recognizer = CountingRecognizer::new();
    let mut controller = SpeechCaptureController::new(recognizer.clone());

    let first = controller.start();
    controller.handle_event(first, fragments(&["kurta"]));

    let second = controller.start();
    assert_eq!(first, second);
    assert_eq!(recognizer.begins(), 1); // no duplicate native session
    assert_eq!(controller.transcript(), "kurta"); // no transcript reset
    assert_eq!(controller.status(), CaptureStatus::Listening);
}

#[test]
fn stop_requests_backend_end_and_retains_transcript() {
    let recognizer = CountingRecognizer::new();
    let mut controller = SpeechCaptureController::new(recognizer.clone());

    let handle = controller.start();
    controller.handle_event(handle, fragments(&["track pants"]));
    controller.stop();

    assert_eq!(controller.status(), CaptureStatus::Idle);
    assert_eq!(controller.transcript(), "track pants");
    assert_eq!(recognizer.ends(), 1);
}

#[test]
fn stop_is_safe_before_any_fragment() {
    let recognizer = CountingRecognizer::new();
    let mut controller = SpeechCaptureController::new(recognizer.clone());

    controller.start();
    controller.stop();

    assert_eq!(controller.status(), CaptureStatus::Idle);
    assert_eq!(controller.transcript(), "");

    // From idle, a further stop does nothing
    controller.stop();
    assert_eq!(recognizer.ends(), 1);
}

#[test]
fn error_fires_listener_and_restart_recovers() {
    let recognizer = CountingRecognizer::new();
    let mut controller = SpeechCaptureController::new(recognizer.clone());

    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&errors);
    controller.on_error(move |reason| {
        sink.lock().unwrap().push(reason.to_string());
    });

    let handle = controller.start();
    controller.handle_event(handle, RecognizerEvent::Error("not-allowed".to_string()));

    assert_eq!(controller.status(), CaptureStatus::Error);
    assert_eq!(controller.last_error(), Some("not-allowed"));
    assert_eq!(*errors.lock().unwrap(), vec!["not-allowed"]);

    controller.start();
    assert_eq!(controller.status(), CaptureStatus::Listening);
    assert_eq!(recognizer.begins(), 2);
    assert_eq!(controller.last_error(), None);
}

#[test]
fn backend_ended_session_returns_to_idle() {
    let mut controller = SpeechCaptureController::new(CountingRecognizer::new());

    let handle = controller.start();
    controller.handle_event(handle, fragments(&["saree"]));
    controller.handle_event(handle, RecognizerEvent::Ended);

    assert_eq!(controller.status(), CaptureStatus::Idle);
    assert_eq!(controller.transcript(), "saree");
}

#[test]
fn events_after_stop_are_dropped() {
    let mut controller = SpeechCaptureController::new(CountingRecognizer::new());

    let handle = controller.start();
    controller.stop();

    // A callback still in flight from the stopped session
    controller.handle_event(handle, fragments(&["late"]));
    assert_eq!(controller.transcript(), "");
    assert_eq!(controller.status(), CaptureStatus::Idle);

    // A late error must not flip a stopped session into the error state
    controller.handle_event(handle, RecognizerEvent::Error("aborted".to_string()));
    assert_eq!(controller.status(), CaptureStatus::Idle);
}

#[test]
fn stale_session_cannot_resurrect_transcript() {
    let mut controller = SpeechCaptureController::new(CountingRecognizer::new());

    let old = controller.start();
    controller.handle_event(old, RecognizerEvent::Error("network".to_string()));

    // New session starts while the old session's callbacks are still in flight
    let live = controller.start();
    controller.handle_event(old, fragments(&["stale words"]));

    assert_eq!(controller.transcript(), "");
    assert_eq!(controller.status(), CaptureStatus::Listening);

    controller.handle_event(live, fragments(&["fresh words"]));
    assert_eq!(controller.transcript(), "fresh words");
}
