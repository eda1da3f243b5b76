//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Gemini API, the Google
//! Translate speech endpoint and the platform audio stack.

pub mod config;
pub mod credentials;
pub mod gemini;
pub mod playback;
pub mod recording;
pub mod services;
pub mod synthesis;

// Re-export adapters
pub use config::XdgConfigStore;
pub use credentials::{ChainedCredentialSource, ConfigCredentialSource, EnvCredentialSource};
pub use gemini::{GeminiClient, GeminiGenerator, GeminiRecognizer};
pub use playback::{FileAudioSink, RodioPlayer};
pub use recording::CpalMicrophone;
pub use services::LiveServices;
pub use synthesis::GoogleTranslateSynthesizer;

/// HTTP client with a whole-request timeout
pub(crate) fn http_client(timeout: std::time::Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
