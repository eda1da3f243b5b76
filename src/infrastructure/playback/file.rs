//! Writes synthesized audio to a file instead of playing it

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{AudioPlayer, PlaybackError};
use crate::domain::audio::AudioData;

/// Stores the payload at a user-chosen path, replacing any existing file
#[derive(Debug, Clone)]
pub struct FileAudioSink {
    path: PathBuf,
}

impl FileAudioSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AudioPlayer for FileAudioSink {
    async fn play(&self, audio: &AudioData) -> Result<(), PlaybackError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PlaybackError::WriteFailed(e.to_string()))?;
        }

        fs::write(&self.path, audio.data())
            .await
            .map_err(|e| PlaybackError::WriteFailed(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(path = %self.path.display(), bytes = audio.size_bytes(), "audio written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audio::AudioMimeType;

    #[tokio::test]
    async fn writes_bytes_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/translation.mp3");
        let sink = FileAudioSink::new(&path);

        sink.play(&AudioData::new(vec![0xFF, 0xFB, 0x10], AudioMimeType::Mpeg))
            .await
            .unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), vec![0xFF, 0xFB, 0x10]);
    }

    #[tokio::test]
    async fn unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten by a file
        let sink = FileAudioSink::new(dir.path());

        let result = sink
            .play(&AudioData::new(vec![1], AudioMimeType::Mpeg))
            .await;

        assert!(matches!(result, Err(PlaybackError::WriteFailed(_))));
    }
}
