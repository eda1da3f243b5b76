//! Speech recognition port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioData;
use crate::domain::translation::Language;

/// Speech recognition errors
#[derive(Debug, Clone, Error)]
pub enum RecognitionError {
    #[error("No speech detected")]
    NoSpeechDetected,

    #[error("Speech recognition service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Port for the external speech-to-text service
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Transcribe a captured clip spoken in `language`.
    async fn recognize(
        &self,
        audio: &AudioData,
        language: Language,
    ) -> Result<String, RecognitionError>;
}

#[async_trait]
impl SpeechRecognizer for Box<dyn SpeechRecognizer> {
    async fn recognize(
        &self,
        audio: &AudioData,
        language: Language,
    ) -> Result<String, RecognitionError> {
        self.as_ref().recognize(audio, language).await
    }
}
