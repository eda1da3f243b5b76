//! Interactive session commands

use std::str::FromStr;

use thiserror::Error;

use crate::domain::error::{InvalidLanguageError, InvalidPhraseError};
use crate::domain::translation::{Language, QuickPhrase};

/// Prefix that marks a line as a command rather than text
pub const COMMAND_PREFIX: char = ':';

/// One line of user input in an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Free text: becomes the transcript and is translated
    Text(String),
    /// Translate the current transcript
    Translate,
    From(Language),
    To(Language),
    Swap,
    Phrase(QuickPhrase),
    Listen,
    Speak,
    AutoSpeak(bool),
    UseCustomKey(String),
    UseDefaultKey,
    Status,
    Languages,
    Phrases,
    Clear,
    Help,
    Quit,
}

/// Error when a `:command` line cannot be understood
#[derive(Debug, Clone, Error)]
pub enum CommandParseError {
    #[error("Unknown command ':{0}'. Type :help for a list of commands")]
    Unknown(String),

    #[error("Missing argument. Usage: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    InvalidLanguage(#[from] InvalidLanguageError),

    #[error(transparent)]
    InvalidPhrase(#[from] InvalidPhraseError),

    #[error("Expected 'on' or 'off', got '{0}'")]
    InvalidToggle(String),
}

/// Command reference shown by `:help`
pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("<text>", "Translate the text"),
    (":translate", "Translate the current transcript again"),
    (":from <language>", "Set the source language"),
    (":to <language>", "Set the target language"),
    (":swap", "Swap source and target languages"),
    (":phrase <id|1-3>", "Use a quick medical phrase as the transcript"),
    (":listen", "Transcribe speech from the microphone, then translate"),
    (":speak", "Speak the last translation"),
    (":auto-speak on|off", "Speak every translation automatically"),
    (":key <value>", "Use a custom API key"),
    (":key default", "Use the configured default API key"),
    (":status", "Show languages, key source and last translation"),
    (":languages", "List supported languages"),
    (":phrases", "List quick medical phrases"),
    (":clear", "Clear transcript and translation"),
    (":help", "Show this help"),
    (":quit", "Leave the session"),
];

impl FromStr for SessionCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let Some(body) = line.trim_start().strip_prefix(COMMAND_PREFIX) else {
            return Ok(Self::Text(line.to_string()));
        };

        // `raw_arg` is everything after the first separator, kept for `:key`
        let body = body.trim_start();
        let (name, raw_arg) = match body.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg)),
            None => (body, None),
        };
        let arg = raw_arg.map(str::trim).filter(|a| !a.is_empty());

        match (name.to_lowercase().as_str(), arg) {
            ("translate" | "t", _) => Ok(Self::Translate),
            ("from", Some(lang)) => Ok(Self::From(lang.parse()?)),
            ("from", None) => Err(CommandParseError::MissingArgument(":from <language>")),
            ("to", Some(lang)) => Ok(Self::To(lang.parse()?)),
            ("to", None) => Err(CommandParseError::MissingArgument(":to <language>")),
            ("swap", _) => Ok(Self::Swap),
            ("phrase" | "p", Some(phrase)) => Ok(Self::Phrase(phrase.parse()?)),
            ("phrase" | "p", None) => Err(CommandParseError::MissingArgument(":phrase <id|1-3>")),
            ("listen" | "l", _) => Ok(Self::Listen),
            ("speak" | "s", _) => Ok(Self::Speak),
            ("auto-speak", Some(toggle)) => match toggle.to_lowercase().as_str() {
                "on" | "true" | "yes" => Ok(Self::AutoSpeak(true)),
                "off" | "false" | "no" => Ok(Self::AutoSpeak(false)),
                _ => Err(CommandParseError::InvalidToggle(toggle.to_string())),
            },
            ("auto-speak", None) => Err(CommandParseError::MissingArgument(":auto-speak on|off")),
            ("key", Some(value)) if value.eq_ignore_ascii_case("default") => {
                Ok(Self::UseDefaultKey)
            }
            ("key", Some(value)) => Ok(Self::UseCustomKey(
                raw_arg.unwrap_or(value).to_string(),
            )),
            ("key", None) => Err(CommandParseError::MissingArgument(":key <value>|default")),
            ("status", _) => Ok(Self::Status),
            ("languages", _) => Ok(Self::Languages),
            ("phrases", _) => Ok(Self::Phrases),
            ("clear", _) => Ok(Self::Clear),
            ("help" | "h" | "?", _) => Ok(Self::Help),
            ("quit" | "q" | "exit", _) => Ok(Self::Quit),
            (other, _) => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}
