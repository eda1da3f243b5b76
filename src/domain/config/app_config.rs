//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::recording::Duration;
use crate::domain::translation::Language;

/// Gemini model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default credential, used when no custom key is supplied
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    /// Speak every translation after it arrives
    pub speak: Option<bool>,
    pub listen_timeout: Option<String>,
    pub phrase_limit: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some(DEFAULT_MODEL.to_string()),
            source_language: Some(Language::English.name().to_string()),
            target_language: Some(Language::Spanish.name().to_string()),
            speak: Some(false),
            listen_timeout: Some(Duration::default_listen_timeout().to_string()),
            phrase_limit: Some(Duration::default_phrase_limit().to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            source_language: other.source_language.or(self.source_language),
            target_language: other.target_language.or(self.target_language),
            speak: other.speak.or(self.speak),
            listen_timeout: other.listen_timeout.or(self.listen_timeout),
            phrase_limit: other.phrase_limit.or(self.phrase_limit),
        }
    }

    pub fn model_or_default(&self) -> &str {
        self.model
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_MODEL)
    }

    pub fn speak_or_default(&self) -> bool {
        self.speak.unwrap_or(false)
    }
}
