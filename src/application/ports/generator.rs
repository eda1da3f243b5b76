//! Text generation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::translation::TranslationPrompt;

/// Text generation errors
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("The service returned no text")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for the large-language-model text generation service
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Submit a prompt and return the generated text as-is.
    async fn generate(&self, prompt: &TranslationPrompt) -> Result<String, GenerationError>;
}

#[async_trait]
impl TextGenerator for Box<dyn TextGenerator> {
    async fn generate(&self, prompt: &TranslationPrompt) -> Result<String, GenerationError> {
        self.as_ref().generate(prompt).await
    }
}
