//! Voice subsystem
//!
//! Speech capture wraps an injected recognition backend in a state machine;
//! playback forwards spoken text to a synthesis backend. Both capabilities
//! are traits, so the pipeline can be driven without audio hardware.

mod backends;
mod capture;
mod playback;

pub use backends::{ConsoleSynthesizer, StubRecognizer};
pub use capture::{
    CaptureStatus, RecognizerEvent, SessionHandle, SpeechCaptureController, SpeechRecognizer,
};
pub use playback::{DEFAULT_LOCALE, DEFAULT_RATE, SpeechPlayback, SpeechSynthesizer, Utterance};
