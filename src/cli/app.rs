//! Main app runner for one-shot mode, plus the steps shared with sessions

use std::path::Path;
use std::process::ExitCode;

use thiserror::Error;

use crate::application::ports::{ConfigStore, CredentialSource, ServiceProvider};
use crate::application::{
    ListenCallbacks, ListenOutput, Outcome, SessionService, SpeakOutput, TranslateOutput,
};
use crate::domain::config::AppConfig;
use crate::domain::error::{DurationParseError, InvalidLanguageError};
use crate::domain::recording::{Duration, ListenSettings};
use crate::domain::session::InteractionState;
use crate::domain::translation::{Language, LanguagePair, ALL_LANGUAGES, ALL_PHRASES};
use crate::infrastructure::XdgConfigStore;

use super::args::{InputSource, TranslateOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Merged settings that did not parse
#[derive(Debug, Clone, Error)]
pub enum UsageError {
    #[error("Invalid {key}: {source}")]
    Language {
        key: &'static str,
        source: InvalidLanguageError,
    },

    #[error("Invalid {key}: {source}")]
    Duration {
        key: &'static str,
        source: DurationParseError,
    },
}

/// Typed settings for a run, validated from the merged config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub languages: LanguagePair,
    pub listen: ListenSettings,
    pub speak: bool,
}

impl RunSettings {
    /// Unlike the `*_or_default` accessors, this rejects values that are set
    /// but malformed so the user hears about typos.
    pub fn from_config(config: &AppConfig) -> Result<Self, UsageError> {
        let source = parse_language("source language", config.source_language.as_deref())?
            .unwrap_or(Language::English);
        let target = parse_language("target language", config.target_language.as_deref())?
            .unwrap_or(Language::Spanish);

        let timeout = parse_duration("listen timeout", config.listen_timeout.as_deref())?
            .unwrap_or_else(Duration::default_listen_timeout);
        let phrase_limit = parse_duration("phrase limit", config.phrase_limit.as_deref())?
            .unwrap_or_else(Duration::default_phrase_limit);

        Ok(Self {
            languages: LanguagePair::new(source, target),
            listen: ListenSettings {
                timeout,
                phrase_limit,
            },
            speak: config.speak_or_default(),
        })
    }

    /// Session state a run starts from
    pub fn initial_state(&self, custom_key: Option<String>) -> InteractionState {
        let state = InteractionState::new(self.languages).with_auto_speak(self.speak);
        match custom_key {
            Some(key) => state.with_custom_key(key),
            None => state,
        }
    }
}

fn parse_language(key: &'static str, value: Option<&str>) -> Result<Option<Language>, UsageError> {
    value
        .map(|v| v.parse().map_err(|source| UsageError::Language { key, source }))
        .transpose()
}

fn parse_duration(key: &'static str, value: Option<&str>) -> Result<Option<Duration>, UsageError> {
    value
        .map(|v| v.parse().map_err(|source| UsageError::Duration { key, source }))
        .transpose()
}

/// Run one translation and exit
pub async fn run_oneshot<P: ServiceProvider, S: CredentialSource>(
    service: SessionService<P, S>,
    state: InteractionState,
    options: TranslateOptions,
    output: Option<&Path>,
) -> ExitCode {
    let mut presenter = Presenter::new();

    let pipeline = oneshot_pipeline(&service, state, &options, output, &mut presenter);
    let succeeded = tokio::select! {
        ok = pipeline => ok,
        _ = tokio::signal::ctrl_c() => {
            eprintln!();
            Presenter::new().warn("Interrupted");
            false
        }
    };

    if succeeded {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

async fn oneshot_pipeline<P: ServiceProvider, S: CredentialSource>(
    service: &SessionService<P, S>,
    state: InteractionState,
    options: &TranslateOptions,
    output: Option<&Path>,
    presenter: &mut Presenter,
) -> bool {
    let state = match &options.input {
        InputSource::Text(text) => state.with_transcript(text.as_str()),
        InputSource::Phrase(phrase) => state.with_transcript(phrase.text()),
        InputSource::Microphone => match listen_step(service, state, presenter).await {
            (state, Ok(_)) => state,
            (_, Err(_)) => return false,
        },
    };

    let (state, result) = translate_step(service, state, presenter).await;
    match result {
        Ok(translated) => presenter.output(&translated.translation),
        Err(_) => return false,
    }

    if options.speak {
        let (_, result) = speak_step(service, state, presenter, output).await;
        return result.is_ok();
    }
    true
}

/// Translate the transcript under a spinner; failures are reported here
pub async fn translate_step<P: ServiceProvider, S: CredentialSource>(
    service: &SessionService<P, S>,
    state: InteractionState,
    presenter: &mut Presenter,
) -> Outcome<TranslateOutput> {
    let languages = state.languages();
    presenter.start_spinner(&format!(
        "Translating {} → {}...",
        languages.source(),
        languages.target()
    ));

    let (state, result) = service.translate(state).await;
    match &result {
        Ok(_) => presenter.spinner_success("Translated"),
        Err(e) => {
            presenter.spinner_fail("Translation failed");
            presenter.error(&e.to_string());
        }
    }
    (state, result)
}

/// Capture one phrase from the microphone and transcribe it
pub async fn listen_step<P: ServiceProvider, S: CredentialSource>(
    service: &SessionService<P, S>,
    state: InteractionState,
    presenter: &mut Presenter,
) -> Outcome<ListenOutput> {
    let source = state.languages().source();
    presenter.start_spinner("Calibrating microphone...");

    let mut callbacks = ListenCallbacks::default();
    if let Some(spinner) = presenter.spinner_handle() {
        let listening = spinner.clone();
        callbacks.on_listening = Some(Box::new(move || {
            listening.set_message(format!("Listening for {}... speak now", source));
        }));
        callbacks.on_recognizing = Some(Box::new(move |size: &str| {
            spinner.set_message(format!("Recognizing speech ({})...", size));
        }));
    }

    let (state, result) = service.listen(state, callbacks).await;
    match &result {
        Ok(heard) => {
            presenter.stop_spinner();
            presenter.info(&format!("Heard ({}): \"{}\"", source, heard.transcript));
        }
        Err(e) => {
            presenter.spinner_fail("Listening failed");
            presenter.error(&e.to_string());
        }
    }
    (state, result)
}

/// Speak the last translation, or save it when `output` is set
pub async fn speak_step<P: ServiceProvider, S: CredentialSource>(
    service: &SessionService<P, S>,
    state: InteractionState,
    presenter: &mut Presenter,
    output: Option<&Path>,
) -> Outcome<SpeakOutput> {
    presenter.start_spinner(&format!(
        "Generating {} speech...",
        state.languages().target()
    ));

    let (state, result) = service.speak(state).await;
    match &result {
        Ok(spoken) => {
            presenter.stop_spinner();
            match output {
                Some(path) => presenter.success(&format!(
                    "Saved audio to {} ({})",
                    path.display(),
                    spoken.audio_size
                )),
                None => presenter.success(&format!("Played translation ({})", spoken.audio_size)),
            }
        }
        Err(e) => {
            presenter.spinner_fail("Speech failed");
            presenter.error(&e.to_string());
        }
    }
    (state, result)
}

/// Print the supported languages
pub fn print_languages(presenter: &Presenter) {
    for language in ALL_LANGUAGES {
        presenter.key_value(language.code(), language.name());
    }
}

/// Print the quick phrases with their numbers
pub fn print_phrases(presenter: &Presenter) {
    for (index, phrase) in ALL_PHRASES.iter().enumerate() {
        presenter.key_value(
            &(index + 1).to_string(),
            &format!("{} {} ({})", phrase.icon(), phrase.text(), phrase.id()),
        );
    }
}

/// Load and merge configuration: defaults < file < CLI (flags and their env vars)
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable config file");
            AppConfig::empty()
        }
    };

    AppConfig::defaults().merge(file_config).merge(cli_config)
}
