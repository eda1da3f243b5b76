//! Interactive session handlers
//!
//! `apply` is the pure part: it folds a command into the state and names the
//! effect to run. `SessionService` runs effects that call external services,
//! taking the state by value and handing back the next one on every path.

use thiserror::Error;

use crate::domain::credential::Credential;
use crate::domain::error::EmptyInputError;
use crate::domain::recording::ListenSettings;
use crate::domain::session::{InteractionState, SessionCommand};
use crate::domain::translation::LanguagePair;

use super::credentials::{CredentialError, CredentialResolver};
use super::listen::{ListenCallbacks, ListenError, ListenOutput, ListenUseCase};
use super::ports::{CredentialSource, ServiceProvider};
use super::speak::{SpeakError, SpeakOutput, SpeakUseCase};
use super::translate::{TranslateError, TranslateOutput, TranslateTextUseCase};

/// Errors surfaced by a session action
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    Listen(#[from] ListenError),

    #[error(transparent)]
    Speak(#[from] SpeakError),

    #[error("Nothing to speak yet. Translate something first")]
    NothingToSpeak,
}

/// What the loop should do after a command was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    Translate,
    Listen,
    Speak,
    /// Show a one-line confirmation
    Notice(String),
    ShowStatus,
    ShowLanguages,
    ShowPhrases,
    ShowHelp,
    Quit,
}

/// Fold a command into the state
pub fn apply(state: InteractionState, command: SessionCommand) -> (InteractionState, SessionEffect) {
    match command {
        SessionCommand::Text(text) => (state.with_transcript(text), SessionEffect::Translate),
        SessionCommand::Translate => (state, SessionEffect::Translate),
        SessionCommand::From(language) => {
            let languages = state.languages().with_source(language);
            (state.with_languages(languages), languages_notice(&languages))
        }
        SessionCommand::To(language) => {
            let languages = state.languages().with_target(language);
            (state.with_languages(languages), languages_notice(&languages))
        }
        SessionCommand::Swap => {
            let languages = state.languages().swapped();
            (state.with_languages(languages), languages_notice(&languages))
        }
        SessionCommand::Phrase(phrase) => (
            state.with_transcript(phrase.text()),
            SessionEffect::Notice(format!(
                "Transcript set to \"{}\". Type :translate to translate it",
                phrase.text()
            )),
        ),
        SessionCommand::Listen => (state, SessionEffect::Listen),
        SessionCommand::Speak => (state, SessionEffect::Speak),
        SessionCommand::AutoSpeak(enabled) => (
            state.with_auto_speak(enabled),
            SessionEffect::Notice(format!(
                "Auto-speak {}",
                if enabled { "on" } else { "off" }
            )),
        ),
        SessionCommand::UseCustomKey(value) => {
            let masked = Credential::new(value.as_str()).masked();
            (
                state.with_custom_key(value),
                SessionEffect::Notice(format!("Using custom API key ({})", masked)),
            )
        }
        SessionCommand::UseDefaultKey => (
            state.with_default_key(),
            SessionEffect::Notice("Using default API key".to_string()),
        ),
        SessionCommand::Status => (state, SessionEffect::ShowStatus),
        SessionCommand::Languages => (state, SessionEffect::ShowLanguages),
        SessionCommand::Phrases => (state, SessionEffect::ShowPhrases),
        SessionCommand::Clear => (
            state.cleared(),
            SessionEffect::Notice("Transcript and translation cleared".to_string()),
        ),
        SessionCommand::Help => (state, SessionEffect::ShowHelp),
        SessionCommand::Quit => (state, SessionEffect::Quit),
    }
}

fn languages_notice(languages: &LanguagePair) -> SessionEffect {
    SessionEffect::Notice(format!(
        "Translating {} → {}",
        languages.source(),
        languages.target()
    ))
}

/// Result of a service-backed handler: the next state plus the outcome
pub type Outcome<T> = (InteractionState, Result<T, SessionError>);

/// Runs service-backed session actions
pub struct SessionService<P: ServiceProvider, S: CredentialSource> {
    provider: P,
    resolver: CredentialResolver<S>,
    listen_settings: ListenSettings,
}

impl<P: ServiceProvider, S: CredentialSource> SessionService<P, S> {
    pub fn new(provider: P, default_source: S, listen_settings: ListenSettings) -> Self {
        Self {
            provider,
            resolver: CredentialResolver::new(default_source),
            listen_settings,
        }
    }

    /// Credential for the current selection, reusing the cached one when the
    /// selection has not changed since it was resolved.
    pub fn credential(&self, state: InteractionState) -> Outcome<Credential> {
        if let Some(credential) = state.cached_credential() {
            let credential = credential.clone();
            return (state, Ok(credential));
        }

        match self.resolver.resolve_selection(state.selection()) {
            Ok(credential) => (state.with_cached_credential(credential.clone()), Ok(credential)),
            Err(e) => (state, Err(e.into())),
        }
    }

    /// Translate the current transcript and remember the result
    pub async fn translate(&self, state: InteractionState) -> Outcome<TranslateOutput> {
        if state.transcript().trim().is_empty() {
            return (state, Err(TranslateError::EmptyInput(EmptyInputError).into()));
        }

        let (state, credential) = self.credential(state);
        let credential = match credential {
            Ok(credential) => credential,
            Err(e) => return (state, Err(e)),
        };

        let use_case = TranslateTextUseCase::new(self.provider.text_generator(&credential));
        match use_case.execute(state.transcript(), state.languages()).await {
            Ok(output) => {
                let state = state.with_translation(output.translation.clone());
                (state, Ok(output))
            }
            Err(e) => (state, Err(e.into())),
        }
    }

    /// Capture speech in the source language into the transcript
    pub async fn listen(
        &self,
        state: InteractionState,
        callbacks: ListenCallbacks,
    ) -> Outcome<ListenOutput> {
        let (state, credential) = self.credential(state);
        let credential = match credential {
            Ok(credential) => credential,
            Err(e) => return (state, Err(e)),
        };

        let use_case = ListenUseCase::new(
            self.provider.microphone(),
            self.provider.speech_recognizer(&credential),
        );
        let language = state.languages().source();
        match use_case.execute(language, self.listen_settings, callbacks).await {
            Ok(output) => {
                let state = state.with_transcript(output.transcript.clone());
                (state, Ok(output))
            }
            Err(e) => (state, Err(e.into())),
        }
    }

    /// Speak the last translation in the target language
    pub async fn speak(&self, state: InteractionState) -> Outcome<SpeakOutput> {
        let Some(translation) = state.translation().map(str::to_string) else {
            return (state, Err(SessionError::NothingToSpeak));
        };

        let use_case =
            SpeakUseCase::new(self.provider.speech_synthesizer(), self.provider.audio_player());
        let result = use_case
            .execute(&translation, state.languages().target())
            .await
            .map_err(SessionError::from);
        (state, result)
    }
}
