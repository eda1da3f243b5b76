//! Default credential sources
//!
//! The default key is looked up in order: `DEFAULT_GEMINI_API_KEY`,
//! `GEMINI_API_KEY`, then the config file's `api_key`.

use crate::application::ports::CredentialSource;

/// Primary environment variable for the default key
pub const DEFAULT_KEY_ENV: &str = "DEFAULT_GEMINI_API_KEY";

/// Secondary environment variable, the one Google's own tools read
pub const GEMINI_KEY_ENV: &str = "GEMINI_API_KEY";

/// Reads one environment variable at lookup time
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    var: String,
}

impl EnvCredentialSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredentialSource {
    fn lookup(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|v| !v.is_empty())
    }
}

/// The `api_key` value from an already loaded config file
#[derive(Debug, Clone, Default)]
pub struct ConfigCredentialSource {
    api_key: Option<String>,
}

impl ConfigCredentialSource {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

impl CredentialSource for ConfigCredentialSource {
    fn lookup(&self) -> Option<String> {
        self.api_key.clone().filter(|v| !v.is_empty())
    }
}

/// First source with a non-empty value wins
#[derive(Default)]
pub struct ChainedCredentialSource {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl ChainedCredentialSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, source: impl CredentialSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Environment variables first, then the config file value
    pub fn standard(config_api_key: Option<String>) -> Self {
        Self::new()
            .then(EnvCredentialSource::new(DEFAULT_KEY_ENV))
            .then(EnvCredentialSource::new(GEMINI_KEY_ENV))
            .then(ConfigCredentialSource::new(config_api_key))
    }
}

impl CredentialSource for ChainedCredentialSource {
    fn lookup(&self) -> Option<String> {
        self.sources.iter().find_map(|source| source.lookup())
    }
}
