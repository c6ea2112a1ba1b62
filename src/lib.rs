//! Voicedeals - voice-driven search over a fixed deal catalog
//!
//! This library lets a user locate deals in a small in-memory catalog by
//! typing or by speaking a query, and hear a deal's description read aloud:
//! - Speech capture: a state machine over an injected recognition backend
//! - Search: a pure, order-preserving substring filter
//! - Playback: a fire-and-forget text-to-speech trigger
//! - Coordination: query ownership and notification fan-out
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 Presentation layer                   │
//! │    typed input │ voice toggle │ describe │ render   │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │                SearchCoordinator                     │
//! │      query │ notifications │ derived results        │
//! └───────┬─────────────────┬─────────────────┬─────────┘
//!         │                 │                 │
//! ┌───────▼──────┐ ┌────────▼─────────┐ ┌─────▼────────┐
//! │ filter engine│ │ SpeechCapture    │ │ Speech       │
//! │    (pure)    │ │ Controller       │ │ Playback     │
//! └──────────────┘ └────────┬─────────┘ └─────┬────────┘
//!                           │                 │
//!                 recognition backend   synthesis backend
//! ```
//!
//! Host speech capabilities are reached only through the
//! [`voice::SpeechRecognizer`] and [`voice::SpeechSynthesizer`] traits, so
//! the whole pipeline runs with fakes in tests and on hosts without audio.

pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod search;
pub mod voice;

pub use catalog::{Catalog, Deal};
pub use config::{Config, VoiceConfig};
pub use coordinator::{Notification, SearchCoordinator};
pub use error::{Error, Result};
