//! Speak translation use case

use thiserror::Error;

use crate::domain::error::EmptyInputError;
use crate::domain::translation::Language;

use super::ports::{AudioPlayer, PlaybackError, SpeechSynthesizer, SynthesisError};

/// Errors from the speak use case
#[derive(Debug, Clone, Error)]
pub enum SpeakError {
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),

    #[error("Error generating speech: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

/// Output from the speak use case
#[derive(Debug, Clone)]
pub struct SpeakOutput {
    /// Synthesized payload size in human-readable format
    pub audio_size: String,
}

/// Synthesizes text and hands the audio to the player
pub struct SpeakUseCase<S: SpeechSynthesizer, P: AudioPlayer> {
    synthesizer: S,
    player: P,
}

impl<S: SpeechSynthesizer, P: AudioPlayer> SpeakUseCase<S, P> {
    pub fn new(synthesizer: S, player: P) -> Self {
        Self {
            synthesizer,
            player,
        }
    }

    pub async fn execute(&self, text: &str, language: Language) -> Result<SpeakOutput, SpeakError> {
        if text.trim().is_empty() {
            return Err(EmptyInputError.into());
        }

        let audio = self.synthesizer.synthesize(text, language).await?;
        let audio_size = audio.human_readable_size();
        tracing::debug!(size = %audio_size, language = language.code(), "synthesized speech");

        self.player.play(&audio).await?;

        Ok(SpeakOutput { audio_size })
    }
}
