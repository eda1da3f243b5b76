//! Factory port for credential-bound service clients

use crate::domain::credential::Credential;

use super::{AudioPlayer, Microphone, SpeechRecognizer, SpeechSynthesizer, TextGenerator};

/// Builds service clients on demand.
///
/// The active credential can change between interactions, so clients that
/// need one are created per call rather than held for the whole session.
pub trait ServiceProvider: Send + Sync {
    fn text_generator(&self, credential: &Credential) -> Box<dyn TextGenerator>;

    fn speech_recognizer(&self, credential: &Credential) -> Box<dyn SpeechRecognizer>;

    fn speech_synthesizer(&self) -> Box<dyn SpeechSynthesizer>;

    fn microphone(&self) -> Box<dyn Microphone>;

    fn audio_player(&self) -> Box<dyn AudioPlayer>;
}
