//! Translate text use case

use thiserror::Error;

use crate::domain::error::EmptyInputError;
use crate::domain::translation::{LanguagePair, TranslationPrompt, TranslationRequest};

use super::ports::{GenerationError, TextGenerator};

/// Errors from the translate use case
#[derive(Debug, Clone, Error)]
pub enum TranslateError {
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),

    #[error("Translation error: {0}")]
    Generation(#[from] GenerationError),
}

/// Output from the translate use case
#[derive(Debug, Clone)]
pub struct TranslateOutput {
    /// Text exactly as the service returned it
    pub translation: String,
    pub languages: LanguagePair,
}

/// Wraps text in the medical translator prompt and submits it once
pub struct TranslateTextUseCase<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> TranslateTextUseCase<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub async fn execute(
        &self,
        text: &str,
        languages: LanguagePair,
    ) -> Result<TranslateOutput, TranslateError> {
        let request = TranslationRequest::new(text, languages)?;
        let prompt = TranslationPrompt::build(&request);

        tracing::debug!(
            source = languages.source().code(),
            target = languages.target().code(),
            chars = request.text().chars().count(),
            "submitting translation"
        );

        let translation = self.generator.generate(&prompt).await?;

        Ok(TranslateOutput {
            translation,
            languages,
        })
    }
}
