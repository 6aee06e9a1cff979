use std::fmt;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::core::error::{Result, TubeStatsError};
use crate::core::dirs::get_config_directory;

pub const APP_ID_VAR: &str = "TFL_APP_ID";
pub const APP_KEY_VAR: &str = "TFL_API_KEY";
pub const API_URL_VAR: &str = "TUBESTATS_API_URL";
pub const DEFAULT_API_BASE: &str = "https://api.tfl.gov.uk";

const CONFIG_FILE: &str = "config.json";

/// TfL application credentials sent with every request
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub app_key: String,
}

impl Credentials {
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }
}

// Keys stay out of debug logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .finish()
    }
}

/// Contents of `config.json`, written by `tubestats init`
#[derive(Serialize, Deserialize, Debug)]
pub struct StoredConfig {
    pub credentials: Credentials,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl StoredConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            created_at: chrono::Utc::now(),
        }
    }

    pub fn path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE))
    }

    /// Load the stored config, `None` when `init` has never run
    pub fn load() -> Result<Option<Self>> {
        let config_file = Self::path()?;

        if !config_file.exists() {
            log::debug!("No config file at {}", config_file.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_file)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_dir = get_config_directory()?;
        std::fs::create_dir_all(&config_dir)?;

        let config_file = config_dir.join(CONFIG_FILE);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        log::debug!("Saved config to {}", config_file.display());
        Ok(config_file)
    }
}

/// Everything the status client needs, resolved once per invocation
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub api_base: String,
}

impl Settings {
    /// Resolve settings from the process environment and the stored config
    pub fn load() -> Result<Self> {
        Self::resolve(|key| std::env::var(key).ok(), StoredConfig::load)
    }

    /// Environment values win over the stored config. The stored config is only read
    /// when the environment lacks credentials.
    pub fn resolve<E, S>(env: E, stored: S) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
        S: FnOnce() -> Result<Option<StoredConfig>>,
    {
        let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let credentials = match (non_empty(APP_ID_VAR), non_empty(APP_KEY_VAR)) {
            (Some(app_id), Some(app_key)) => Credentials::new(app_id, app_key),
            _ => {
                log::debug!("{APP_ID_VAR}/{APP_KEY_VAR} not set, falling back to stored config");
                stored()?
                    .map(|config| config.credentials)
                    .ok_or(TubeStatsError::MissingCredentials)?
            }
        };

        let api_base = non_empty(API_URL_VAR)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            credentials,
            api_base,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_credentials_take_precedence() -> Result<()> {
        let env = env_from(&[(APP_ID_VAR, "env-id"), (APP_KEY_VAR, "env-key")]);
        let settings = Settings::resolve(env, || panic!("stored config must not be read"))?;
        assert_eq!(settings.credentials, Credentials::new("env-id", "env-key"));
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        Ok(())
    }

    #[test]
    fn test_falls_back_to_stored_config() -> Result<()> {
        let env = env_from(&[(APP_ID_VAR, "only-id")]);
        let settings = Settings::resolve(env, || {
            Ok(Some(StoredConfig::new(Credentials::new("file-id", "file-key"))))
        })?;
        assert_eq!(settings.credentials, Credentials::new("file-id", "file-key"));
        Ok(())
    }

    #[test]
    fn test_missing_everywhere_is_missing_credentials() {
        let env = env_from(&[(APP_ID_VAR, "  "), (APP_KEY_VAR, "")]);
        let result = Settings::resolve(env, || Ok(None));
        assert!(matches!(result, Err(TubeStatsError::MissingCredentials)));
    }

    #[test]
    fn test_api_url_override_drops_trailing_slash() -> Result<()> {
        let env = env_from(&[
            (APP_ID_VAR, "id"),
            (APP_KEY_VAR, "key"),
            (API_URL_VAR, "http://127.0.0.1:9999/"),
        ]);
        let settings = Settings::resolve(env, || Ok(None))?;
        assert_eq!(settings.api_base, "http://127.0.0.1:9999");
        Ok(())
    }

    #[test]
    fn test_debug_redacts_app_key() {
        let rendered = format!("{:?}", Credentials::new("visible-id", "secret-key"));
        assert!(rendered.contains("visible-id"));
        assert!(!rendered.contains("secret-key"));
    }

    #[test]
    fn test_stored_config_round_trips_through_json() -> Result<()> {
        let config = StoredConfig::new(Credentials::new("id", "key"));
        let json = serde_json::to_string(&config)?;
        let loaded: StoredConfig = serde_json::from_str(&json)?;
        assert_eq!(loaded.credentials, config.credentials);
        assert_eq!(loaded.created_at, config.created_at);
        Ok(())
    }
}
