//! Speech synthesis port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioData;
use crate::domain::translation::Language;

/// Speech synthesis errors
#[derive(Debug, Clone, Error)]
pub enum SynthesisError {
    #[error("Speech synthesis not available for {0}")]
    UnsupportedLanguage(String),

    #[error("Synthesis request failed: {0}")]
    RequestFailed(String),

    #[error("Synthesis service error: {0}")]
    ApiError(String),

    #[error("Synthesis service returned no audio")]
    EmptyAudio,
}

/// Port for the external text-to-speech service
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` in `language`. Either the full payload or an error;
    /// never a partial buffer.
    async fn synthesize(&self, text: &str, language: Language)
        -> Result<AudioData, SynthesisError>;
}

#[async_trait]
impl SpeechSynthesizer for Box<dyn SpeechSynthesizer> {
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
    ) -> Result<AudioData, SynthesisError> {
        self.as_ref().synthesize(text, language).await
    }
}
