//! Production wiring of the service ports

use std::path::PathBuf;

use crate::application::ports::{
    AudioPlayer, Microphone, ServiceProvider, SpeechRecognizer, SpeechSynthesizer, TextGenerator,
};
use crate::domain::config::DEFAULT_MODEL;
use crate::domain::credential::Credential;

use super::gemini::{GeminiClient, GeminiGenerator, GeminiRecognizer, DEFAULT_BASE_URL};
use super::playback::{FileAudioSink, RodioPlayer};
use super::recording::CpalMicrophone;
use super::synthesis::{GoogleTranslateSynthesizer, DEFAULT_TTS_URL};

/// Real network services, microphone and speaker (or output file)
#[derive(Debug, Clone)]
pub struct LiveServices {
    model: String,
    gemini_url: String,
    tts_url: String,
    output: Option<PathBuf>,
}

impl LiveServices {
    pub fn new() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            gemini_url: DEFAULT_BASE_URL.to_string(),
            tts_url: DEFAULT_TTS_URL.to_string(),
            output: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_gemini_url(mut self, url: impl Into<String>) -> Self {
        self.gemini_url = url.into();
        self
    }

    pub fn with_tts_url(mut self, url: impl Into<String>) -> Self {
        self.tts_url = url.into();
        self
    }

    /// Write synthesized audio to `path` instead of playing it
    pub fn with_output(mut self, path: Option<PathBuf>) -> Self {
        self.output = path;
        self
    }

    fn gemini(&self, credential: &Credential) -> GeminiClient {
        GeminiClient::new(credential.clone())
            .with_model(&self.model)
            .with_base_url(&self.gemini_url)
    }
}

impl Default for LiveServices {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceProvider for LiveServices {
    fn text_generator(&self, credential: &Credential) -> Box<dyn TextGenerator> {
        Box::new(GeminiGenerator::new(self.gemini(credential)))
    }

    fn speech_recognizer(&self, credential: &Credential) -> Box<dyn SpeechRecognizer> {
        Box::new(GeminiRecognizer::new(self.gemini(credential)))
    }

    fn speech_synthesizer(&self) -> Box<dyn SpeechSynthesizer> {
        Box::new(GoogleTranslateSynthesizer::new().with_base_url(&self.tts_url))
    }

    fn microphone(&self) -> Box<dyn Microphone> {
        Box::new(CpalMicrophone::new())
    }

    fn audio_player(&self) -> Box<dyn AudioPlayer> {
        match &self.output {
            Some(path) => Box::new(FileAudioSink::new(path)),
            None => Box::new(RodioPlayer::new()),
        }
    }
}
