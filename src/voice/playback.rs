//! Text-to-speech playback trigger

use crate::Result;

/// Default locale hint for spoken deal descriptions
pub const DEFAULT_LOCALE: &str = "en-IN";

/// Default speaking rate, slightly slower than normal for clarity
pub const DEFAULT_RATE: f32 = 0.9;

/// A single synthesis request
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Text to vocalize
    pub text: String,

    /// BCP 47 locale hint (e.g. "en-IN")
    pub locale: String,

    /// Speaking rate, where 1.0 is the backend's normal speed
    pub rate: f32,
}

/// Speech-synthesis backend
pub trait SpeechSynthesizer {
    /// Whether the host exposes a usable synthesis capability
    fn is_supported(&self) -> bool;

    /// Vocalize the utterance
    ///
    /// # Errors
    ///
    /// Returns error if the backend rejects the request
    fn speak(&mut self, utterance: &Utterance) -> Result<()>;
}

/// Fire-and-forget speech playback
pub struct SpeechPlayback<S: SpeechSynthesizer> {
    synthesizer: S,
    locale: String,
    rate: f32,
}

impl<S: SpeechSynthesizer> SpeechPlayback<S> {
    /// Create a playback service with the default voice settings
    #[must_use]
    pub fn new(synthesizer: S) -> Self {
        Self::with_voice(synthesizer, DEFAULT_LOCALE.to_string(), DEFAULT_RATE)
    }

    /// Create a playback service with an explicit locale hint and rate
    #[must_use]
    pub const fn with_voice(synthesizer: S, locale: String, rate: f32) -> Self {
        Self {
            synthesizer,
            locale,
            rate,
        }
    }

    /// Request playback of the given text
    ///
    /// A silent no-op when the host has no synthesis capability; backend
    /// failures are logged and swallowed. Playback is a non-essential
    /// enhancement and never disturbs the caller. Whether a new request
    /// interrupts or queues behind a still-playing utterance is left to the
    /// backend's default behavior.
    pub fn speak(&mut self, text: &str) {
        if !self.synthesizer.is_supported() {
            tracing::debug!("speech synthesis unavailable, skipping playback");
            return;
        }

        let utterance = Utterance {
            text: text.to_string(),
            locale: self.locale.clone(),
            rate: self.rate,
        };

        if let Err(e) = self.synthesizer.speak(&utterance) {
            tracing::warn!(error = %e, "speech synthesis failed");
        }
    }

    /// Locale hint applied to every utterance
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Speaking rate applied to every utterance
    #[must_use]
    pub const fn rate(&self) -> f32 {
        self.rate
    }
}
