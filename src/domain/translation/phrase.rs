//! Quick medical phrases

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidPhraseError;

/// All quick phrases, in display order
pub const ALL_PHRASES: &[QuickPhrase] = &[
    QuickPhrase::WhereDoesItHurt,
    QuickPhrase::TakeMedication,
    QuickPhrase::Examine,
];

/// Canned phrases a clinician can send without typing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickPhrase {
    WhereDoesItHurt,
    TakeMedication,
    Examine,
}

impl QuickPhrase {
    /// Stable identifier used on the command line
    pub const fn id(&self) -> &'static str {
        match self {
            Self::WhereDoesItHurt => "where-does-it-hurt",
            Self::TakeMedication => "take-medication",
            Self::Examine => "examine",
        }
    }

    /// The phrase text that becomes the transcript
    pub const fn text(&self) -> &'static str {
        match self {
            Self::WhereDoesItHurt => "Where does it hurt?",
            Self::TakeMedication => "Take this medication twice daily",
            Self::Examine => "I need to examine you",
        }
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            Self::WhereDoesItHurt => "🤒",
            Self::TakeMedication => "💊",
            Self::Examine => "🩺",
        }
    }
}

impl FromStr for QuickPhrase {
    type Err = InvalidPhraseError;

    /// Accepts the phrase id or its 1-based position in [`ALL_PHRASES`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if let Ok(index) = needle.parse::<usize>() {
            if let Some(phrase) = index.checked_sub(1).and_then(|i| ALL_PHRASES.get(i)) {
                return Ok(*phrase);
            }
        }
        ALL_PHRASES
            .iter()
            .copied()
            .find(|p| p.id() == needle)
            .ok_or_else(|| InvalidPhraseError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for QuickPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_by_id() {
        assert_eq!(
            "where-does-it-hurt".parse::<QuickPhrase>().unwrap(),
            QuickPhrase::WhereDoesItHurt
        );
        assert_eq!("EXAMINE".parse::<QuickPhrase>().unwrap(), QuickPhrase::Examine);
    }

    #[test]
    fn parse_by_position() {
        assert_eq!("1".parse::<QuickPhrase>().unwrap(), QuickPhrase::WhereDoesItHurt);
        assert_eq!("2".parse::<QuickPhrase>().unwrap(), QuickPhrase::TakeMedication);
        assert_eq!("3".parse::<QuickPhrase>().unwrap(), QuickPhrase::Examine);
    }

    #[test]
    fn parse_invalid() {
        assert!("0".parse::<QuickPhrase>().is_err());
        assert!("4".parse::<QuickPhrase>().is_err());
        assert!("hello".parse::<QuickPhrase>().is_err());
    }

    #[test]
    fn phrase_texts() {
        assert_eq!(QuickPhrase::WhereDoesItHurt.text(), "Where does it hurt?");
        assert_eq!(
            QuickPhrase::TakeMedication.text(),
            "Take this medication twice daily"
        );
        assert_eq!(QuickPhrase::Examine.text(), "I need to examine you");
    }
}
