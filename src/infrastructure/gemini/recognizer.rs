//! Gemini speech recognizer adapter
//!
//! The FLAC clip goes inline next to a transcription instruction that names
//! the spoken language. Silence is signalled with a fixed marker.

use async_trait::async_trait;

use super::client::GeminiClient;
use super::wire::{GenerateContentRequest, GenerationConfig, Part, SystemInstruction};
use crate::application::ports::{GenerationError, RecognitionError, SpeechRecognizer};
use crate::domain::audio::AudioData;
use crate::domain::translation::Language;

/// Reply the model is told to give when the clip holds no intelligible speech
pub const NO_SPEECH_MARKER: &str = "NO_SPEECH";

pub struct GeminiRecognizer {
    client: GeminiClient,
}

impl GeminiRecognizer {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn instruction(language: Language) -> String {
        format!(
            "You are a speech-to-text engine for a medical interpreter.\n\
             Transcribe the audio exactly as spoken. The speaker is using {} (language code {}).\n\
             Output only the transcription, in the spoken language, without translation or commentary.\n\
             If the audio contains no intelligible speech, output exactly {}.",
            language.name(),
            language.code(),
            NO_SPEECH_MARKER
        )
    }

    fn build_request(audio: &AudioData, language: Language) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: Some(SystemInstruction {
                parts: vec![Part::text(Self::instruction(language))],
            }),
            generation_config: Some(GenerationConfig {
                temperature: Some(0.0),
            }),
            ..GenerateContentRequest::user(vec![Part::inline(
                audio.mime_type().as_str(),
                audio.to_base64(),
            )])
        }
    }
}

impl From<GenerationError> for RecognitionError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::EmptyResponse => Self::NoSpeechDetected,
            other => Self::ServiceUnavailable(other.to_string()),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for GeminiRecognizer {
    async fn recognize(
        &self,
        audio: &AudioData,
        language: Language,
    ) -> Result<String, RecognitionError> {
        let text = self
            .client
            .generate_content(&Self::build_request(audio, language))
            .await?;

        let transcript = text.trim();
        if transcript.is_empty() || transcript == NO_SPEECH_MARKER {
            return Err(RecognitionError::NoSpeechDetected);
        }

        Ok(transcript.to_string())
    }
}
