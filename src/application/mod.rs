//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod credentials;
pub mod listen;
pub mod ports;
pub mod session;
pub mod speak;
pub mod translate;

// Re-export use cases
pub use credentials::{CredentialError, CredentialResolver};
pub use listen::{ListenCallbacks, ListenError, ListenOutput, ListenUseCase};
pub use session::{apply, Outcome, SessionEffect, SessionError, SessionService};
pub use speak::{SpeakError, SpeakOutput, SpeakUseCase};
pub use translate::{TranslateError, TranslateOutput, TranslateTextUseCase};
