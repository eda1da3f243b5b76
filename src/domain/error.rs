//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>s, <number>m, or <number>m<number>s (e.g., 5s, 1m, 1m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when an unsupported language is requested
#[derive(Debug, Clone, Error)]
#[error("Invalid language: \"{input}\". Supported languages are: English, Spanish, French, German, Chinese, Arabic, Hindi, Japanese")]
pub struct InvalidLanguageError {
    pub input: String,
}

/// Error when an unknown quick phrase is requested
#[derive(Debug, Clone, Error)]
#[error("Invalid phrase: \"{input}\". Valid phrases are: where-does-it-hurt, take-medication, examine (or 1-3)")]
pub struct InvalidPhraseError {
    pub input: String,
}

/// Raised locally when there is nothing to send to an external service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please enter some text to translate")]
pub struct EmptyInputError;

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
