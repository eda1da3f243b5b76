//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::translation::{Language, QuickPhrase};

/// MedTranslate - healthcare translation assistant
#[derive(Parser, Debug)]
#[command(name = "med-translate")]
#[command(version)]
#[command(about = "Medical translation between patients and providers using Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    /// Text to translate
    #[arg(value_name = "TEXT", conflicts_with_all = ["phrase", "listen"])]
    pub text: Option<String>,

    /// Source language (name or code, e.g. English, es)
    #[arg(short = 'f', long = "from", value_name = "LANG", ignore_case = true, global = true)]
    pub from: Option<LanguageArg>,

    /// Target language (name or code, e.g. Spanish, ja)
    #[arg(short = 't', long = "to", value_name = "LANG", ignore_case = true, global = true)]
    pub to: Option<LanguageArg>,

    /// Translate a quick medical phrase
    #[arg(short = 'p', long, value_name = "PHRASE", conflicts_with = "listen")]
    pub phrase: Option<PhraseArg>,

    /// Transcribe speech from the microphone, then translate it
    #[arg(short = 'l', long)]
    pub listen: bool,

    /// Speak the translation aloud
    #[arg(short = 's', long, global = true)]
    pub speak: bool,

    /// Write the spoken translation to an MP3 file instead of playing it
    #[arg(short = 'o', long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Use this API key instead of the configured default
    #[arg(long, value_name = "KEY", global = true)]
    pub api_key: Option<String>,

    /// Gemini model
    #[arg(long, value_name = "MODEL", env = "MED_TRANSLATE_MODEL", global = true)]
    pub model: Option<String>,

    /// How long to wait for speech to start (e.g., 5s, 10s)
    #[arg(long, value_name = "TIME", global = true)]
    pub listen_timeout: Option<String>,

    /// Longest phrase to capture (e.g., 15s, 1m)
    #[arg(long, value_name = "TIME", global = true)]
    pub phrase_limit: Option<String>,

    /// Show debug logs on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Gemini API root
    #[arg(long, hide = true, env = "MED_TRANSLATE_GEMINI_URL", global = true)]
    pub gemini_url: Option<String>,

    /// Speech synthesis endpoint root
    #[arg(long, hide = true, env = "MED_TRANSLATE_TTS_URL", global = true)]
    pub tts_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive translation session
    Session,
    /// List supported languages
    Languages,
    /// List quick medical phrases
    Phrases,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Language argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    #[value(alias = "en")]
    English,
    #[value(alias = "es")]
    Spanish,
    #[value(alias = "fr")]
    French,
    #[value(alias = "de")]
    German,
    #[value(alias = "zh")]
    Chinese,
    #[value(alias = "ar")]
    Arabic,
    #[value(alias = "hi")]
    Hindi,
    #[value(alias = "ja")]
    Japanese,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::English => Language::English,
            LanguageArg::Spanish => Language::Spanish,
            LanguageArg::French => Language::French,
            LanguageArg::German => Language::German,
            LanguageArg::Chinese => Language::Chinese,
            LanguageArg::Arabic => Language::Arabic,
            LanguageArg::Hindi => Language::Hindi,
            LanguageArg::Japanese => Language::Japanese,
        }
    }
}

/// Quick phrase argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PhraseArg {
    #[value(alias = "1")]
    WhereDoesItHurt,
    #[value(alias = "2")]
    TakeMedication,
    #[value(alias = "3")]
    Examine,
}

impl From<PhraseArg> for QuickPhrase {
    fn from(arg: PhraseArg) -> Self {
        match arg {
            PhraseArg::WhereDoesItHurt => QuickPhrase::WhereDoesItHurt,
            PhraseArg::TakeMedication => QuickPhrase::TakeMedication,
            PhraseArg::Examine => QuickPhrase::Examine,
        }
    }
}

/// Parsed options for one-shot mode, after config merging
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub input: InputSource,
    pub speak: bool,
}

/// Where one-shot input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    Phrase(QuickPhrase),
    Microphone,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "model",
    "source_language",
    "target_language",
    "speak",
    "listen_timeout",
    "phrase_limit",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
