//! Interactive session runner
//!
//! Reads one line at a time from stdin. Each line is parsed into a
//! `SessionCommand`, folded into the `InteractionState` and the resulting
//! effect is awaited to completion before the next line is read.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::ports::{CredentialSource, ServiceProvider};
use crate::application::{apply, SessionEffect, SessionService};
use crate::domain::credential::mask_secret;
use crate::domain::session::{InteractionState, SessionCommand, COMMAND_HELP};

use super::app::{
    listen_step, print_languages, print_phrases, speak_step, translate_step, EXIT_ERROR,
};
use super::presenter::Presenter;

/// Whether the loop keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Run the interactive session until `:quit`, end of input or Ctrl+C
pub async fn run_session<P: ServiceProvider, S: CredentialSource>(
    service: SessionService<P, S>,
    state: InteractionState,
    output: Option<PathBuf>,
) -> ExitCode {
    let mut presenter = Presenter::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut state = state;

    show_banner(&presenter, &state);

    loop {
        let languages = state.languages();
        presenter.prompt(&format!(
            "{}→{}",
            languages.source().code(),
            languages.target().code()
        ));

        let line = tokio::select! {
            line = lines.next_line() => line,
            _ = tokio::signal::ctrl_c() => {
                eprintln!();
                break;
            }
        };

        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) => {
                eprintln!();
                break;
            }
            Err(e) => {
                presenter.error(&format!("Failed to read input: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        };

        let (next, flow) =
            handle_line(&service, state, &line, &mut presenter, output.as_deref()).await;
        state = next;
        if flow == Flow::Stop {
            break;
        }
    }

    presenter.info("Session ended");
    ExitCode::SUCCESS
}

/// Handle one line of input and hand back the next state
pub async fn handle_line<P: ServiceProvider, S: CredentialSource>(
    service: &SessionService<P, S>,
    state: InteractionState,
    line: &str,
    presenter: &mut Presenter,
    output: Option<&Path>,
) -> (InteractionState, Flow) {
    if line.trim().is_empty() {
        return (state, Flow::Continue);
    }

    let command = match line.parse::<SessionCommand>() {
        Ok(command) => command,
        Err(e) => {
            presenter.warn(&e.to_string());
            return (state, Flow::Continue);
        }
    };

    let (state, effect) = apply(state, command);
    match effect {
        SessionEffect::Translate => {
            let state = translate_and_maybe_speak(service, state, presenter, output).await;
            (state, Flow::Continue)
        }
        SessionEffect::Listen => {
            let (state, result) = listen_step(service, state, presenter).await;
            if result.is_err() {
                return (state, Flow::Continue);
            }
            let state = translate_and_maybe_speak(service, state, presenter, output).await;
            (state, Flow::Continue)
        }
        SessionEffect::Speak => {
            let (state, _) = speak_step(service, state, presenter, output).await;
            (state, Flow::Continue)
        }
        SessionEffect::Notice(message) => {
            presenter.success(&message);
            (state, Flow::Continue)
        }
        SessionEffect::ShowStatus => {
            show_status(presenter, &state);
            (state, Flow::Continue)
        }
        SessionEffect::ShowLanguages => {
            print_languages(presenter);
            (state, Flow::Continue)
        }
        SessionEffect::ShowPhrases => {
            print_phrases(presenter);
            (state, Flow::Continue)
        }
        SessionEffect::ShowHelp => {
            show_help(presenter);
            (state, Flow::Continue)
        }
        SessionEffect::Quit => (state, Flow::Stop),
    }
}

async fn translate_and_maybe_speak<P: ServiceProvider, S: CredentialSource>(
    service: &SessionService<P, S>,
    state: InteractionState,
    presenter: &mut Presenter,
    output: Option<&Path>,
) -> InteractionState {
    let (state, result) = translate_step(service, state, presenter).await;
    let Ok(translated) = result else {
        return state;
    };

    presenter.labeled(translated.languages.target().name(), &translated.translation);

    if state.auto_speak() {
        let (state, _) = speak_step(service, state, presenter, output).await;
        return state;
    }
    state
}

fn show_banner(presenter: &Presenter, state: &InteractionState) {
    let languages = state.languages();
    presenter.heading("MedTranslate session");
    presenter.info(&format!(
        "Translating {} → {}. Type text to translate, :help for commands, :quit to leave",
        languages.source(),
        languages.target()
    ));
}

fn show_help(presenter: &Presenter) {
    presenter.heading("Commands");
    for (usage, description) in COMMAND_HELP {
        presenter.key_value(usage, description);
    }
}

fn show_status(presenter: &Presenter, state: &InteractionState) {
    let languages = state.languages();
    presenter.key_value(
        "languages",
        &format!("{} → {}", languages.source(), languages.target()),
    );

    let key = match &state.selection().custom_value {
        Some(value) if state.selection().is_custom() && !value.trim().is_empty() => {
            format!("custom ({})", mask_secret(value))
        }
        _ => "default".to_string(),
    };
    presenter.key_value("api key", &key);
    presenter.key_value("auto-speak", if state.auto_speak() { "on" } else { "off" });

    let transcript = state.transcript();
    presenter.key_value(
        "transcript",
        if transcript.is_empty() { "(empty)" } else { transcript },
    );
    presenter.key_value("translation", state.translation().unwrap_or("(none)"));
}
