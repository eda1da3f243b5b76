//! Audio output port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioData;

/// Audio output errors
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    #[error("No audio output device available")]
    NoOutputDevice,

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    #[error("Failed to write audio file: {0}")]
    WriteFailed(String),
}

/// Port for delivering synthesized audio to the user
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    /// Play (or store) the payload, returning once it is done.
    async fn play(&self, audio: &AudioData) -> Result<(), PlaybackError>;
}

#[async_trait]
impl AudioPlayer for Box<dyn AudioPlayer> {
    async fn play(&self, audio: &AudioData) -> Result<(), PlaybackError> {
        self.as_ref().play(audio).await
    }
}
