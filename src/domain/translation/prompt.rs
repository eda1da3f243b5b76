//! Translation prompt value object

use super::request::TranslationRequest;

/// Role framing for every translation
const ROLE_INSTRUCTION: &str = "Act as a professional medical translator.";

/// Accuracy directive for medical terminology
const ACCURACY_INSTRUCTION: &str = "Please maintain medical accuracy and context. If there are medical terms, provide accurate translations while keeping the meaning clear.";

/// Value object representing the complete prompt sent to the generation service.
/// Wraps the literal input text with the role framing and accuracy directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationPrompt {
    content: String,
}

impl TranslationPrompt {
    /// Build the prompt for a validated request
    pub fn build(request: &TranslationRequest) -> Self {
        let languages = request.languages();
        let content = format!(
            "{} Translate the following text from {} to {}.\n{}\n\nText to translate: {}",
            ROLE_INSTRUCTION,
            languages.source().name(),
            languages.target().name(),
            ACCURACY_INSTRUCTION,
            request.text()
        );
        Self { content }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::translation::{Language, LanguagePair, ALL_LANGUAGES};

    fn request(text: &str, source: Language, target: Language) -> TranslationRequest {
        TranslationRequest::new(text, LanguagePair::new(source, target)).unwrap()
    }

    #[test]
    fn contains_role_and_accuracy_directive() {
        let prompt = TranslationPrompt::build(&request(
            "Where does it hurt?",
            Language::English,
            Language::Spanish,
        ));
        assert!(prompt
            .content()
            .contains("Act as a professional medical translator"));
        assert!(prompt.content().contains("maintain medical accuracy"));
        assert!(prompt.content().contains("keeping the meaning clear"));
    }

    #[test]
    fn embeds_language_names_in_order() {
        let prompt = TranslationPrompt::build(&request(
            "hello",
            Language::German,
            Language::Japanese,
        ));
        assert!(prompt.content().contains("from German to Japanese"));
    }

    #[test]
    fn every_pair_embeds_names_and_literal_text() {
        let text = "The patient presents with acute abdominal pain and fever.";
        for source in ALL_LANGUAGES {
            for target in ALL_LANGUAGES {
                let prompt = TranslationPrompt::build(&request(text, *source, *target));
                let content = prompt.content();
                assert!(content.contains(source.name()), "{} -> {}", source, target);
                assert!(content.contains(target.name()), "{} -> {}", source, target);
                assert!(content.contains(&format!("Text to translate: {}", text)));
            }
        }
    }

    #[test]
    fn same_request_builds_same_prompt() {
        let a = TranslationPrompt::build(&request("fever", Language::English, Language::French));
        let b = TranslationPrompt::build(&request("fever", Language::English, Language::French));
        assert_eq!(a, b);
    }

    #[test]
    fn text_is_not_trimmed() {
        let prompt = TranslationPrompt::build(&request(
            "  pain  ",
            Language::English,
            Language::Arabic,
        ));
        assert!(prompt.content().ends_with("Text to translate:   pain  "));
    }
}
