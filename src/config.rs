//! Configuration loading
//!
//! A TOML file overlays built-in defaults; every field is optional. An
//! explicitly given path must parse, while the standard per-user location
//! degrades to defaults when missing or malformed.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::Result;
use crate::voice::{DEFAULT_LOCALE, DEFAULT_RATE};

/// Runtime configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Voice subsystem configuration
    pub voice: VoiceConfig,

    /// Path to a JSON catalog file; the built-in sample catalog when unset
    pub catalog_path: Option<PathBuf>,
}

/// Voice subsystem configuration
#[derive(Debug, Clone)]
pub struct VoiceConfig {
    /// Enable voice capture
    pub enabled: bool,

    /// Locale hint passed to the synthesis backend
    pub locale: String,

    /// Speaking rate, where 1.0 is the backend's normal speed
    pub rate: f32,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            locale: DEFAULT_LOCALE.to_string(),
            rate: DEFAULT_RATE,
        }
    }
}

/// Top-level TOML configuration file schema
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    /// Path to a JSON catalog file
    #[serde(default)]
    catalog: Option<PathBuf>,

    /// `[voice]` section
    #[serde(default)]
    voice: VoiceFileConfig,
}

/// `[voice]` section of the config file
#[derive(Debug, Default, Deserialize)]
struct VoiceFileConfig {
    enabled: Option<bool>,
    locale: Option<String>,
    rate: Option<f32>,
}

impl Config {
    /// Load configuration, overlaying the config file on defaults
    ///
    /// # Errors
    ///
    /// Returns error if an explicitly given path cannot be read or parsed
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content)?
            }
            None => load_default_file(),
        };

        Ok(Self::from_file(file))
    }

    fn from_file(file: ConfigFile) -> Self {
        let defaults = VoiceConfig::default();
        Self {
            voice: VoiceConfig {
                enabled: file.voice.enabled.unwrap_or(defaults.enabled),
                locale: file.voice.locale.unwrap_or(defaults.locale),
                rate: file.voice.rate.unwrap_or(defaults.rate),
            },
            catalog_path: file.catalog,
        }
    }
}

/// Load the TOML config file from the standard path
///
/// Returns defaults if the file doesn't exist or can't be parsed.
fn load_default_file() -> ConfigFile {
    let Some(path) = config_file_path() else {
        return ConfigFile::default();
    };

    if !path.exists() {
        return ConfigFile::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(file) => {
                tracing::info!(path = %path.display(), "loaded config file");
                file
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config file, using defaults"
                );
                ConfigFile::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read config file"
            );
            ConfigFile::default()
        }
    }
}

/// Standard config file path: `~/.config/voicedeals/config.toml`
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.config_dir().join("voicedeals").join("config.toml"))
}
