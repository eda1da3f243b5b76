//! Listen (speech transcription) use case

use thiserror::Error;

use crate::domain::recording::ListenSettings;
use crate::domain::translation::Language;

use super::ports::{CaptureError, Microphone, RecognitionError, SpeechRecognizer};

/// Errors from the listen use case
#[derive(Debug, Clone, Error)]
pub enum ListenError {
    #[error("No speech detected. Please try again.")]
    NoSpeechDetected,

    #[error("Speech service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<CaptureError> for ListenError {
    fn from(err: CaptureError) -> Self {
        match err {
            CaptureError::Timeout => Self::NoSpeechDetected,
            other => Self::ServiceUnavailable(other.to_string()),
        }
    }
}

impl From<RecognitionError> for ListenError {
    fn from(err: RecognitionError) -> Self {
        match err {
            RecognitionError::NoSpeechDetected => Self::NoSpeechDetected,
            RecognitionError::ServiceUnavailable(msg) => Self::ServiceUnavailable(msg),
        }
    }
}

/// Output from the listen use case
#[derive(Debug, Clone)]
pub struct ListenOutput {
    pub transcript: String,
    /// Encoded clip size in human-readable format
    pub audio_size: String,
}

/// Callbacks for status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct ListenCallbacks {
    /// Called when the microphone is about to open
    pub on_listening: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called with the clip size once a phrase has been captured
    pub on_recognizing: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

/// Captures one phrase and sends it to the recognizer
pub struct ListenUseCase<M: Microphone, R: SpeechRecognizer> {
    microphone: M,
    recognizer: R,
}

impl<M: Microphone, R: SpeechRecognizer> ListenUseCase<M, R> {
    pub fn new(microphone: M, recognizer: R) -> Self {
        Self {
            microphone,
            recognizer,
        }
    }

    pub async fn execute(
        &self,
        language: Language,
        settings: ListenSettings,
        callbacks: ListenCallbacks,
    ) -> Result<ListenOutput, ListenError> {
        if let Some(ref cb) = callbacks.on_listening {
            cb();
        }

        let audio = self.microphone.listen(settings).await?;
        let audio_size = audio.human_readable_size();
        tracing::debug!(size = %audio_size, language = language.code(), "captured phrase");

        if let Some(ref cb) = callbacks.on_recognizing {
            cb(&audio_size);
        }

        let transcript = self.recognizer.recognize(&audio, language).await?;
        if transcript.trim().is_empty() {
            return Err(ListenError::NoSpeechDetected);
        }

        Ok(ListenOutput {
            transcript,
            audio_size,
        })
    }
}
