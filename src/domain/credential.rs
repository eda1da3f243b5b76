//! API credential value objects

use std::fmt;

/// Opaque secret authorizing calls to the generation service.
///
/// `Debug` and `Display` only ever show a masked form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    secret: String,
}

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// The raw secret, for building requests
    pub fn expose(&self) -> &str {
        &self.secret
    }

    /// Masked form suitable for display
    pub fn masked(&self) -> String {
        mask_secret(&self.secret)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

/// Which credential the user asked for: the custom override or the default
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CredentialSelection {
    pub use_custom: bool,
    pub custom_value: Option<String>,
}

impl CredentialSelection {
    /// Select the process-configured default
    pub fn default_key() -> Self {
        Self::default()
    }

    /// Select a user-supplied override
    pub fn custom(value: impl Into<String>) -> Self {
        Self {
            use_custom: true,
            custom_value: Some(value.into()),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.use_custom
    }
}

/// Mask a secret for display (first 4 and last 4 chars)
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_long_secret() {
        assert_eq!(mask_secret("abcdefghijklmnop"), "abcd...mnop");
    }

    #[test]
    fn mask_short_secret() {
        assert_eq!(mask_secret("short"), "*****");
    }

    #[test]
    fn debug_does_not_leak() {
        let credential = Credential::new("AIzaSyD-super-secret-value");
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("AIza"));
    }

    #[test]
    fn expose_returns_verbatim() {
        let credential = Credential::new("  spaced key ");
        assert_eq!(credential.expose(), "  spaced key ");
    }

    #[test]
    fn selection_constructors() {
        assert!(!CredentialSelection::default_key().is_custom());
        let custom = CredentialSelection::custom("k");
        assert!(custom.is_custom());
        assert_eq!(custom.custom_value.as_deref(), Some("k"));
    }
}
