//! Supported language value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidLanguageError;

/// All supported languages, in display order
pub const ALL_LANGUAGES: &[Language] = &[
    Language::English,
    Language::Spanish,
    Language::French,
    Language::German,
    Language::Chinese,
    Language::Arabic,
    Language::Hindi,
    Language::Japanese,
];

/// Closed set of human languages used for recognition, translation and synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Chinese,
    Arabic,
    Hindi,
    Japanese,
}

impl Language {
    /// Human-readable name, as embedded in prompts
    pub const fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Chinese => "Chinese",
            Self::Arabic => "Arabic",
            Self::Hindi => "Hindi",
            Self::Japanese => "Japanese",
        }
    }

    /// Two-letter language code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Chinese => "zh",
            Self::Arabic => "ar",
            Self::Hindi => "hi",
            Self::Japanese => "ja",
        }
    }
}

impl FromStr for Language {
    type Err = InvalidLanguageError;

    /// Accepts either the language name or its code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_LANGUAGES
            .iter()
            .copied()
            .find(|lang| {
                lang.name().eq_ignore_ascii_case(needle) || lang.code().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| InvalidLanguageError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_by_name() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!("japanese".parse::<Language>().unwrap(), Language::Japanese);
        assert_eq!("  HINDI ".parse::<Language>().unwrap(), Language::Hindi);
    }

    #[test]
    fn parse_by_code() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!("ZH".parse::<Language>().unwrap(), Language::Chinese);
        assert_eq!("ar".parse::<Language>().unwrap(), Language::Arabic);
    }

    #[test]
    fn parse_invalid() {
        assert!("klingon".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
        assert!("pt".parse::<Language>().is_err());
    }

    #[test]
    fn codes_are_two_letters_and_unique() {
        let mut codes: Vec<&str> = ALL_LANGUAGES.iter().map(|l| l.code()).collect();
        assert!(codes.iter().all(|c| c.len() == 2));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL_LANGUAGES.len());
    }

    #[test]
    fn name_round_trips_through_parse() {
        for lang in ALL_LANGUAGES {
            assert_eq!(lang.name().parse::<Language>().unwrap(), *lang);
            assert_eq!(lang.code().parse::<Language>().unwrap(), *lang);
        }
    }

    #[test]
    fn eight_languages() {
        assert_eq!(ALL_LANGUAGES.len(), 8);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Language::German.to_string(), "German");
    }
}
