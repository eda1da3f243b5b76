//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod audio;
pub mod config;
pub mod credential;
pub mod error;
pub mod recording;
pub mod session;
pub mod translation;

// Re-export common types
pub use audio::{AudioData, AudioMimeType};
pub use config::AppConfig;
pub use credential::{Credential, CredentialSelection};
pub use error::*;
pub use recording::{Duration, ListenSettings};
pub use session::{InteractionState, SessionCommand};
pub use translation::{Language, LanguagePair, QuickPhrase, TranslationPrompt, TranslationRequest};
