//! Configuration for wachat.
//!
//! Values are resolved in layers, later layers winning: built-in defaults,
//! a JSON config file, environment variables, then command-line overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Title shown in the conversation header.
pub const DEFAULT_ASSISTANT_NAME: &str = "AI Chat Assistant";

/// Environment variable overriding [`Config::api_url`].
pub const API_URL_ENV: &str = "WACHAT_API_URL";

/// Environment variable overriding [`Config::theme`].
pub const THEME_ENV: &str = "WACHAT_THEME";

/// Main configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the chat service.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Name shown in the header.
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,

    /// Color theme.
    #[serde(default)]
    pub theme: ThemeName,

    /// Transport timeout for requests. Unset means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}

fn default_assistant_name() -> String {
    DEFAULT_ASSISTANT_NAME.into()
}

/// Named color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ConfigError::InvalidTheme(s.to_string())),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            assistant_name: default_assistant_name(),
            theme: ThemeName::default(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Per-user config file location, e.g. `~/.config/wachat/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wachat").join("config.json"))
    }

    /// Load the file layer.
    ///
    /// An explicit `path` must exist. Without one, the per-user file is read
    /// if present and defaults are used otherwise.
    pub fn load_file_layer(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` in place of the environment.
    /// Empty values are treated as unset.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(API_URL_ENV) {
            self.api_url = url;
        }
        if let Some(theme) = get(THEME_ENV) {
            self.theme = theme.parse()?;
        }
        Ok(())
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, api_url: Option<String>, theme: Option<ThemeName>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        self
    }

    /// Check that the base URL is an absolute http(s) URL with a host.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidUrl(self.api_url.clone());
        let url = reqwest::Url::parse(&self.api_url).map_err(|_| invalid())?;
        let has_host = url.host_str().is_some_and(|host| !host.is_empty());
        match url.scheme() {
            "http" | "https" if has_host => Ok(()),
            _ => Err(invalid()),
        }
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Base URL is not an http(s) URL.
    #[error("Invalid API URL: {0:?} (expected http:// or https://)")]
    InvalidUrl(String),

    /// Unknown theme name.
    #[error("Unknown theme: {0:?} (expected \"light\" or \"dark\")")]
    InvalidTheme(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.assistant_name, "AI Chat Assistant");
        assert_eq!(config.theme, ThemeName::Light);
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(config.theme, ThemeName::Dark);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_load_printed_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let config = Config {
            api_url: "https://chat.example.com".into(),
            request_timeout_secs: Some(30),
            ..Config::default()
        };

        // Same output as `wachat config --json`.
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            Config::load_file_layer(Some(&missing)),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_from(env(&[
                (API_URL_ENV, "https://api.example.com"),
                (THEME_ENV, "Dark"),
            ]))
            .unwrap();
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.theme, ThemeName::Dark);
    }

    #[test]
    fn test_empty_env_value_is_unset() {
        let mut config = Config::default();
        config.apply_env_from(env(&[(API_URL_ENV, "")])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_theme_name_parse_and_display() {
        assert_eq!(" Dark ".parse::<ThemeName>().unwrap(), ThemeName::Dark);
        assert_eq!(ThemeName::Light.to_string(), "light");
        assert_eq!(ThemeName::Dark.to_string().parse::<ThemeName>().unwrap(), ThemeName::Dark);
    }

    #[test]
    fn test_bad_env_theme() {
        let mut config = Config::default();
        let err = config
            .apply_env_from(env(&[(THEME_ENV, "sepia")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTheme(t) if t == "sepia"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut config = Config::default();
        config
            .apply_env_from(env(&[(API_URL_ENV, "http://env:1")]))
            .unwrap();
        let config = config.with_overrides(Some("http://flag:2".into()), Some(ThemeName::Dark));
        assert_eq!(config.api_url, "http://flag:2");
        assert_eq!(config.theme, ThemeName::Dark);
    }

    #[test]
    fn test_validate_url() {
        let with_url = |url: &str| Config {
            api_url: url.into(),
            ..Config::default()
        };
        assert!(with_url("http://localhost:8000").validate().is_ok());
        assert!(with_url("https://example.com/base/").validate().is_ok());
        assert!(with_url("localhost:8000").validate().is_err());
        assert!(with_url("ftp://example.com").validate().is_err());
        assert!(with_url("http://").validate().is_err());
        assert!(with_url("http://exa mple").validate().is_err());
        assert!(with_url("not a url").validate().is_err());
        assert!(with_url("https://[::1]:8443").validate().is_ok());
    }
}
