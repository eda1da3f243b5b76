//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::credential::mask_secret;
use crate::domain::error::ConfigError;
use crate::domain::recording::Duration;
use crate::domain::translation::Language;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let mut config = store.load().await?;
    set_value(&mut config, key, value)?;
    store.save(&config).await?;

    let shown = if key == "api_key" {
        mask_secret(value)
    } else {
        value.to_string()
    };
    presenter.success(&format!("{} = {}", key, shown));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    match display_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;
    for key in VALID_CONFIG_KEYS {
        let value = display_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }
    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(invalid(
            key,
            format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        ))
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: message.into(),
    }
}

/// Validate `value` for `key` and store it in normalized form
fn set_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "api_key" => {
            if value.trim().is_empty() {
                return Err(invalid(key, "Value must not be empty"));
            }
            config.api_key = Some(value.to_string());
        }
        "model" => {
            if value.trim().is_empty() {
                return Err(invalid(key, "Value must not be empty"));
            }
            config.model = Some(value.trim().to_string());
        }
        "source_language" | "target_language" => {
            let language: Language = value.parse().map_err(|e| invalid(key, format!("{}", e)))?;
            let name = Some(language.name().to_string());
            if key == "source_language" {
                config.source_language = name;
            } else {
                config.target_language = name;
            }
        }
        "speak" => {
            config.speak = Some(
                parse_bool(value).map_err(|_| invalid(key, "Value must be 'true' or 'false'"))?,
            );
        }
        "listen_timeout" | "phrase_limit" => {
            let duration: Duration = value.parse().map_err(|e| invalid(key, format!("{}", e)))?;
            if key == "listen_timeout" {
                config.listen_timeout = Some(duration.to_string());
            } else {
                config.phrase_limit = Some(duration.to_string());
            }
        }
        _ => return Err(invalid(key, "Unknown key")),
    }
    Ok(())
}

/// Value as shown by `get` and `list`; the API key is masked
fn display_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "api_key" => config.api_key.as_deref().map(mask_secret),
        "model" => config.model.clone(),
        "source_language" => config.source_language.clone(),
        "target_language" => config.target_language.clone(),
        "speak" => config.speak.map(|b| b.to_string()),
        "listen_timeout" => config.listen_timeout.clone(),
        "phrase_limit" => config.phrase_limit.clone(),
        _ => None,
    }
}

/// Parse a boolean value
pub fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, XdgConfigStore) {
        let dir = TempDir::new().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        (dir, store)
    }

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("NO"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("sometimes").is_err());
    }

    #[test]
    fn languages_are_normalized_to_names() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "target_language", "ja").unwrap();
        set_value(&mut config, "source_language", "SPANISH").unwrap();
        assert_eq!(config.target_language.as_deref(), Some("Japanese"));
        assert_eq!(config.source_language.as_deref(), Some("Spanish"));
    }

    #[test]
    fn unknown_language_rejected() {
        let mut config = AppConfig::empty();
        let err = set_value(&mut config, "target_language", "klingon").unwrap_err();
        assert!(err.to_string().contains("target_language"));
        assert!(config.target_language.is_none());
    }

    #[test]
    fn durations_are_validated_and_normalized() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "listen_timeout", "90s").unwrap();
        assert_eq!(config.listen_timeout.as_deref(), Some("1m30s"));
        assert!(set_value(&mut config, "phrase_limit", "forever").is_err());
        assert!(set_value(&mut config, "phrase_limit", "0s").is_err());
    }

    #[test]
    fn blank_api_key_rejected() {
        let mut config = AppConfig::empty();
        assert!(set_value(&mut config, "api_key", "  ").is_err());
    }

    #[test]
    fn api_key_is_masked_for_display() {
        let config = AppConfig {
            api_key: Some("AIzaSyExample1234".to_string()),
            ..Default::default()
        };
        assert_eq!(display_value(&config, "api_key").as_deref(), Some("AIza...1234"));
    }

    #[tokio::test]
    async fn set_then_get_roundtrips_through_store() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "speak", "yes").await.unwrap();
        handle_set(&store, &presenter, "model", "gemini-2.0-flash").await.unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.speak, Some(true));
        assert_eq!(config.model.as_deref(), Some("gemini-2.0-flash"));
    }

    #[tokio::test]
    async fn unknown_key_rejected_without_touching_file() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        let result = handle_set(&store, &presenter, "duration", "10s").await;
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
        assert!(!store.exists());
    }
}
