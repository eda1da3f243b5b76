//! XDG config store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Directory name under the user's config home
const APP_DIR: &str = "med-translate";

const FILE_NAME: &str = "config.toml";

/// TOML config file under `$XDG_CONFIG_HOME/med-translate/`
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        Self {
            path: config_path(dirs::config_dir(), dirs::home_dir()),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

/// `config_home/med-translate/config.toml`, falling back to `~/.config`
/// and then to the working directory when no home is known
fn config_path(config_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    config_home
        .or_else(|| home.map(|h| h.join(".config")))
        .unwrap_or_default()
        .join(APP_DIR)
        .join(FILE_NAME)
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), "loaded config file");
        Self::parse_toml(&content)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml(config)?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        self.save(&AppConfig::defaults()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_xdg() {
        let store = XdgConfigStore::new();
        let path = store.path();
        assert!(path.ends_with("med-translate/config.toml"));
    }

    #[test]
    fn falls_back_to_dot_config_under_home() {
        let path = config_path(None, Some(PathBuf::from("/home/nurse")));
        assert_eq!(path, PathBuf::from("/home/nurse/.config/med-translate/config.toml"));
    }

    #[test]
    fn config_home_wins_over_home() {
        let path = config_path(
            Some(PathBuf::from("/xdg")),
            Some(PathBuf::from("/home/nurse")),
        );
        assert_eq!(path, PathBuf::from("/xdg/med-translate/config.toml"));
    }

    #[test]
    fn no_home_uses_working_directory() {
        assert_eq!(config_path(None, None), PathBuf::from("med-translate/config.toml"));
    }

    #[test]
    fn parse_toml_all_keys() {
        let content = r#"
api_key = "test-key"
model = "gemini-2.0-flash"
source_language = "English"
target_language = "hi"
speak = true
listen_timeout = "8s"
phrase_limit = "20s"
"#;

        let config = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(config.target_language.as_deref(), Some("hi"));
        assert_eq!(config.speak, Some(true));
        assert_eq!(config.listen_timeout.as_deref(), Some("8s"));
    }

    #[test]
    fn parse_toml_rejects_wrong_types() {
        assert!(matches!(
            XdgConfigStore::parse_toml("speak = \"loud\""),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        assert_eq!(store.load().await.unwrap(), AppConfig::empty());
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("nested/config.toml"));
        let config = AppConfig {
            api_key: Some("k".to_string()),
            source_language: Some("Japanese".to_string()),
            ..Default::default()
        };

        store.save(&config).await.unwrap();

        assert_eq!(store.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));

        store.init().await.unwrap();
        assert_eq!(store.load().await.unwrap(), AppConfig::defaults());

        assert!(matches!(
            store.init().await,
            Err(ConfigError::AlreadyExists(_))
        ));
    }
}
