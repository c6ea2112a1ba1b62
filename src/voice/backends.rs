//! Backend implementations that need no audio hardware
//!
//! The demo binary and the test suite drive the voice pipeline with these.
//! Real host capabilities substitute through the same traits.

use crate::voice::capture::SpeechRecognizer;
use crate::voice::playback::{SpeechSynthesizer, Utterance};
use crate::{Error, Result};

/// Recognition backend with no engine behind it
///
/// Reports a fixed support flag and tracks whether a native session is open.
/// Recognition events are injected by the host pump, so none originate here.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubRecognizer {
    supported: bool,
    active: bool,
}

impl StubRecognizer {
    /// Backend that accepts sessions
    #[must_use]
    pub const fn supported() -> Self {
        Self {
            supported: true,
            active: false,
        }
    }

    /// Backend for hosts without a recognition capability
    #[must_use]
    pub const fn unsupported() -> Self {
        Self {
            supported: false,
            active: false,
        }
    }

    /// Whether a native session is currently open
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

impl SpeechRecognizer for StubRecognizer {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn begin(&mut self) -> Result<()> {
        if !self.supported {
            return Err(Error::Recognition(
                "speech recognition not available".to_string(),
            ));
        }
        self.active = true;
        Ok(())
    }

    fn end(&mut self) {
        self.active = false;
    }
}

/// Synthesis backend that renders utterances to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSynthesizer;

impl SpeechSynthesizer for ConsoleSynthesizer {
    fn is_supported(&self) -> bool {
        true
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        tracing::info!(
            locale = %utterance.locale,
            rate = utterance.rate,
            text = %utterance.text,
            "speaking"
        );
        Ok(())
    }
}
