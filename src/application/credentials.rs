//! Credential resolution use case

use thiserror::Error;

use crate::domain::credential::{Credential, CredentialSelection};

use super::ports::CredentialSource;

/// Credential resolution errors
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("No API key found. Pass --api-key, set DEFAULT_GEMINI_API_KEY, or run 'med-translate config set api_key <key>'")]
    NoCredentialFound,
}

/// Picks the credential for one interaction: the user's custom key when the
/// toggle is on and a value was given, otherwise the configured default.
pub struct CredentialResolver<S: CredentialSource> {
    default_source: S,
}

impl<S: CredentialSource> CredentialResolver<S> {
    pub fn new(default_source: S) -> Self {
        Self { default_source }
    }

    /// Resolve without contacting any service; values are returned verbatim.
    pub fn resolve(
        &self,
        use_custom: bool,
        custom_value: Option<&str>,
    ) -> Result<Credential, CredentialError> {
        if use_custom {
            if let Some(value) = custom_value.filter(|v| !v.is_empty()) {
                tracing::debug!("using custom credential");
                return Ok(Credential::new(value));
            }
        }

        self.default_source
            .lookup()
            .filter(|v| !v.is_empty())
            .map(|value| {
                tracing::debug!("using default credential");
                Credential::new(value)
            })
            .ok_or(CredentialError::NoCredentialFound)
    }

    pub fn resolve_selection(
        &self,
        selection: &CredentialSelection,
    ) -> Result<Credential, CredentialError> {
        self.resolve(selection.use_custom, selection.custom_value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Option<&'static str>);

    impl CredentialSource for FixedSource {
        fn lookup(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn custom_value_returned_verbatim() {
        let resolver = CredentialResolver::new(FixedSource(Some("default-key")));
        let credential = resolver.resolve(true, Some(" custom key ")).unwrap();
        assert_eq!(credential.expose(), " custom key ");
    }

    #[test]
    fn default_used_when_toggle_off() {
        let resolver = CredentialResolver::new(FixedSource(Some("default-key")));
        let credential = resolver.resolve(false, Some("ignored")).unwrap();
        assert_eq!(credential.expose(), "default-key");
    }

    #[test]
    fn default_used_when_custom_value_empty() {
        let resolver = CredentialResolver::new(FixedSource(Some("default-key")));
        assert_eq!(resolver.resolve(true, Some("")).unwrap().expose(), "default-key");
        assert_eq!(resolver.resolve(true, None).unwrap().expose(), "default-key");
    }

    #[test]
    fn missing_default_fails() {
        let resolver = CredentialResolver::new(FixedSource(None));
        assert!(matches!(
            resolver.resolve(false, None),
            Err(CredentialError::NoCredentialFound)
        ));
    }

    #[test]
    fn empty_default_fails() {
        let resolver = CredentialResolver::new(FixedSource(Some("")));
        assert!(resolver.resolve(true, Some("")).is_err());
    }

    #[test]
    fn resolve_selection_follows_toggle() {
        let resolver = CredentialResolver::new(FixedSource(Some("default-key")));
        let custom = CredentialSelection::custom("mine");
        assert_eq!(resolver.resolve_selection(&custom).unwrap().expose(), "mine");
        let default = CredentialSelection::default_key();
        assert_eq!(
            resolver.resolve_selection(&default).unwrap().expose(),
            "default-key"
        );
    }
}
