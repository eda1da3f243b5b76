//! Speaker playback using rodio

use std::io::Cursor;

use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink};

use crate::application::ports::{AudioPlayer, PlaybackError};
use crate::domain::audio::AudioData;

/// Plays payloads on the default output device
#[derive(Debug, Default)]
pub struct RodioPlayer;

impl RodioPlayer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AudioPlayer for RodioPlayer {
    async fn play(&self, audio: &AudioData) -> Result<(), PlaybackError> {
        let bytes = audio.data().to_vec();
        // OutputStream is not Send; open, play and drop it on one blocking thread
        tokio::task::spawn_blocking(move || play_blocking(bytes))
            .await
            .map_err(|e| PlaybackError::PlaybackFailed(format!("Task join error: {}", e)))?
    }
}

fn play_blocking(bytes: Vec<u8>) -> Result<(), PlaybackError> {
    let (_stream, handle) =
        OutputStream::try_default().map_err(|_| PlaybackError::NoOutputDevice)?;

    let sink = Sink::try_new(&handle).map_err(|e| PlaybackError::PlaybackFailed(e.to_string()))?;

    let source = Decoder::new(Cursor::new(bytes))
        .map_err(|e| PlaybackError::PlaybackFailed(format!("Cannot decode audio: {}", e)))?;

    sink.append(source);
    sink.sleep_until_end();

    Ok(())
}
