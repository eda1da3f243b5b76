//! Default credential lookup port

/// Port for a process-configured default credential
pub trait CredentialSource: Send + Sync {
    /// The raw default credential, if this source has one
    fn lookup(&self) -> Option<String>;
}

impl CredentialSource for Box<dyn CredentialSource> {
    fn lookup(&self) -> Option<String> {
        self.as_ref().lookup()
    }
}
