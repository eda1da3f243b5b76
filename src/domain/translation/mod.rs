//! Translation domain module

mod language;
mod phrase;
mod prompt;
mod request;

pub use language::{Language, ALL_LANGUAGES};
pub use phrase::{QuickPhrase, ALL_PHRASES};
pub use prompt::TranslationPrompt;
pub use request::{LanguagePair, TranslationRequest};
