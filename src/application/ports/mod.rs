//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod credentials;
pub mod generator;
pub mod microphone;
pub mod player;
pub mod provider;
pub mod recognizer;
pub mod synthesizer;

// Re-export common types
pub use config::ConfigStore;
pub use credentials::CredentialSource;
pub use generator::{GenerationError, TextGenerator};
pub use microphone::{CaptureError, Microphone};
pub use player::{AudioPlayer, PlaybackError};
pub use provider::ServiceProvider;
pub use recognizer::{RecognitionError, SpeechRecognizer};
pub use synthesizer::{SpeechSynthesizer, SynthesisError};
