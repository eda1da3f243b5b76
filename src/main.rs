//! MedTranslate CLI entry point

use std::process::ExitCode;

use clap::Parser;

use med_translate::application::SessionService;
use med_translate::cli::{
    app::{load_merged_config, print_languages, print_phrases, run_oneshot, RunSettings},
    args::{Cli, Commands, InputSource, TranslateOptions},
    config_cmd::handle_config_command,
    logging,
    presenter::Presenter,
    session_app::run_session,
    EXIT_ERROR, EXIT_USAGE_ERROR,
};
use med_translate::domain::config::AppConfig;
use med_translate::domain::translation::Language;
use med_translate::infrastructure::{ChainedCredentialSource, LiveServices, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let presenter = Presenter::new();

    // Handle subcommands
    let session = match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Languages) => {
            print_languages(&presenter);
            return ExitCode::SUCCESS;
        }
        Some(Commands::Phrases) => {
            print_phrases(&presenter);
            return ExitCode::SUCCESS;
        }
        Some(Commands::Session) => true,
        None => false,
    };

    // Build CLI config from args; the custom key is a selection, not config
    let cli_config = AppConfig {
        api_key: None,
        model: cli.model.clone(),
        source_language: cli.from.map(|l| Language::from(l).name().to_string()),
        target_language: cli.to.map(|l| Language::from(l).name().to_string()),
        speak: if cli.speak || cli.output.is_some() {
            Some(true)
        } else {
            None
        },
        listen_timeout: cli.listen_timeout.clone(),
        phrase_limit: cli.phrase_limit.clone(),
    };

    let config = load_merged_config(cli_config).await;

    let settings = match RunSettings::from_config(&config) {
        Ok(settings) => settings,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let mut services = LiveServices::new()
        .with_model(config.model_or_default())
        .with_output(cli.output.clone());
    if let Some(url) = cli.gemini_url {
        services = services.with_gemini_url(url);
    }
    if let Some(url) = cli.tts_url {
        services = services.with_tts_url(url);
    }

    let service = SessionService::new(
        services,
        ChainedCredentialSource::standard(config.api_key.clone()),
        settings.listen,
    );
    let state = settings.initial_state(cli.api_key);

    if session {
        return run_session(service, state, cli.output).await;
    }

    let input = match (cli.text, cli.phrase, cli.listen) {
        (Some(text), _, _) => InputSource::Text(text),
        (None, Some(phrase), _) => InputSource::Phrase(phrase.into()),
        (None, None, true) => InputSource::Microphone,
        (None, None, false) => {
            presenter.error(
                "Nothing to translate. Pass TEXT, --phrase or --listen, or run 'med-translate session'",
            );
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = TranslateOptions {
        input,
        speak: settings.speak,
    };
    run_oneshot(service, state, options, cli.output.as_deref()).await
}
