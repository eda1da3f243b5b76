//! Translation request value objects

use super::language::Language;
use crate::domain::error::EmptyInputError;

/// Source and target language of a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguagePair {
    source: Language,
    target: Language,
}

impl LanguagePair {
    /// Create a pair. Identical source and target are allowed.
    pub const fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }

    pub const fn source(&self) -> Language {
        self.source
    }

    pub const fn target(&self) -> Language {
        self.target
    }

    /// The same pair with source and target exchanged
    pub const fn swapped(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    pub fn with_source(self, source: Language) -> Self {
        Self { source, ..self }
    }

    pub fn with_target(self, target: Language) -> Self {
        Self { target, ..self }
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new(Language::English, Language::Spanish)
    }
}

/// Validated text plus language pair, ready to be turned into a prompt.
///
/// The text is kept verbatim; only emptiness is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    languages: LanguagePair,
}

impl TranslationRequest {
    /// Build a request, rejecting empty or whitespace-only text
    pub fn new(text: impl Into<String>, languages: LanguagePair) -> Result<Self, EmptyInputError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(EmptyInputError);
        }
        Ok(Self { text, languages })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn languages(&self) -> LanguagePair {
        self.languages
    }
}
