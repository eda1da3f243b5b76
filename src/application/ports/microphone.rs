//! Microphone capture port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioData;
use crate::domain::recording::ListenSettings;

/// Capture errors
#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    #[error("No audio input device available")]
    NoAudioDevice,

    #[error("Failed to start recording: {0}")]
    StartFailed(String),

    #[error("Recording failed: {0}")]
    CaptureFailed(String),

    #[error("No speech started before the listen timeout")]
    Timeout,

    #[error("Failed to encode audio: {0}")]
    EncodeFailed(String),
}

/// Port for capturing one spoken phrase from the microphone
#[async_trait]
pub trait Microphone: Send + Sync {
    /// Acquire the input device, calibrate, wait for a phrase and return it
    /// encoded for the recognizer. The device is released before returning.
    async fn listen(&self, settings: ListenSettings) -> Result<AudioData, CaptureError>;
}

#[async_trait]
impl Microphone for Box<dyn Microphone> {
    async fn listen(&self, settings: ListenSettings) -> Result<AudioData, CaptureError> {
        self.as_ref().listen(settings).await
    }
}
