//! Shared test utilities

use std::sync::{Arc, Mutex};

use voicedeals::voice::{SpeechSynthesizer, Utterance};
use voicedeals::{Deal, Result};

/// Synthesizer double that records every utterance it receives
#[derive(Clone, Default)]
pub struct RecordingSynthesizer {
    supported: bool,
    utterances: Arc<Mutex<Vec<Utterance>>>,
}

impl RecordingSynthesizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            supported: true,
            utterances: Arc::default(),
        }
    }

    #[must_use]
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            utterances: Arc::default(),
        }
    }

    /// Utterances received so far
    #[must_use]
    pub fn spoken(&self) -> Vec<Utterance> {
        self.utterances.lock().unwrap().clone()
    }
}

impl SpeechSynthesizer for RecordingSynthesizer {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        self.utterances.lock().unwrap().push(utterance.clone());
        Ok(())
    }
}

/// Build a deal with the searchable fields of interest
#[must_use]
pub fn make_deal(id: &str, title: &str, brand: &str, description: &str) -> Deal {
    Deal {
        id: id.to_string(),
        title: title.to_string(),
        brand: brand.to_string(),
        original_price: 1000,
        discounted_price: 500,
        discount: 50,
        description: description.to_string(),
        platform: "Myntra".to_string(),
        featured: false,
    }
}
