//! Interaction state value carried between session handlers

use crate::domain::credential::{Credential, CredentialSelection};
use crate::domain::translation::LanguagePair;

/// A credential resolved for a particular selection
#[derive(Debug, Clone, PartialEq, Eq)]
struct CachedCredential {
    selection: CredentialSelection,
    credential: Credential,
}

/// Everything one interactive session remembers between user actions.
///
/// Handlers take the state by value and hand back the next one; there is no
/// shared mutable session store. Nothing here is ever written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    selection: CredentialSelection,
    cached: Option<CachedCredential>,
    languages: LanguagePair,
    transcript: String,
    translation: Option<String>,
    auto_speak: bool,
}

impl InteractionState {
    pub fn new(languages: LanguagePair) -> Self {
        Self {
            languages,
            ..Self::default()
        }
    }

    /// Switch to a user-supplied key
    pub fn with_custom_key(self, value: impl Into<String>) -> Self {
        self.with_selection(CredentialSelection::custom(value))
    }

    /// Switch back to the process-configured default key
    pub fn with_default_key(self) -> Self {
        self.with_selection(CredentialSelection::default_key())
    }

    fn with_selection(mut self, selection: CredentialSelection) -> Self {
        if self.selection != selection {
            self.cached = None;
        }
        self.selection = selection;
        self
    }

    pub fn selection(&self) -> &CredentialSelection {
        &self.selection
    }

    /// The cached credential, if it was resolved for the current selection
    pub fn cached_credential(&self) -> Option<&Credential> {
        self.cached
            .as_ref()
            .filter(|cached| cached.selection == self.selection)
            .map(|cached| &cached.credential)
    }

    /// Remember a credential resolved for the current selection
    pub fn with_cached_credential(mut self, credential: Credential) -> Self {
        self.cached = Some(CachedCredential {
            selection: self.selection.clone(),
            credential,
        });
        self
    }

    pub fn languages(&self) -> LanguagePair {
        self.languages
    }

    pub fn with_languages(mut self, languages: LanguagePair) -> Self {
        self.languages = languages;
        self
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn with_transcript(mut self, transcript: impl Into<String>) -> Self {
        self.transcript = transcript.into();
        self
    }

    pub fn translation(&self) -> Option<&str> {
        self.translation.as_deref()
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    pub fn auto_speak(&self) -> bool {
        self.auto_speak
    }

    pub fn with_auto_speak(mut self, enabled: bool) -> Self {
        self.auto_speak = enabled;
        self
    }

    /// Forget transcript and translation, keeping settings and credential
    pub fn cleared(mut self) -> Self {
        self.transcript.clear();
        self.translation = None;
        self
    }
}
