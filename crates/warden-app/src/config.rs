//! Settings for .warden/config.toml
//!
//! One file, optional: every field has a default, a missing or malformed
//! file falls back to defaults with a warning.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use warden_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const WARDEN_DIR: &str = ".warden";

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const LOG_STREAM_PATH: &str = "logs";

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
}

/// Where the control service lives
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerSettings {
    /// Base URL for every REST request
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// WebSocket URL for the live log channel; derived from `base_url`
    /// when absent
    #[serde(default)]
    pub log_stream_url: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            log_stream_url: None,
        }
    }
}

impl Settings {
    /// The log channel endpoint: explicit when configured, otherwise the
    /// base URL with its scheme swapped to WebSocket and `/logs` appended.
    pub fn log_stream_url(&self) -> Result<String> {
        if let Some(url) = &self.server.log_stream_url {
            return Ok(url.clone());
        }
        derive_log_stream_url(&self.server.base_url)
    }
}

fn derive_log_stream_url(base_url: &str) -> Result<String> {
    let mut url = Url::parse(base_url).map_err(|e| Error::address(format!("{base_url}: {e}")))?;
    let scheme = match url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => {
            return Err(Error::address(format!(
                "cannot derive log stream URL from {other} scheme"
            )))
        }
    };
    url.set_scheme(scheme)
        .map_err(|_| Error::address(format!("cannot rewrite scheme of {base_url}")))?;
    // Url::join treats a non-slash-terminated path as a file and would
    // replace its last segment, so close the base path first.
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    let url = url
        .join(LOG_STREAM_PATH)
        .map_err(|e| Error::address(format!("{base_url}: {e}")))?;
    Ok(url.to_string())
}

/// Load settings from .warden/config.toml under the given directory.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = dir.join(WARDEN_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert_eq!(settings.server.base_url, DEFAULT_BASE_URL);
        assert!(settings.server.log_stream_url.is_none());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join(WARDEN_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(CONFIG_FILENAME),
            r#"
[server]
base_url = "https://game.example.net:8443"
"#,
        )
        .unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.server.base_url, "https://game.example.net:8443");
    }

    #[test]
    fn test_load_settings_invalid_toml_falls_back() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join(WARDEN_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILENAME), "[server\nbase_url=").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.server.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_log_stream_url_derived_from_base() {
        let mut settings = Settings::default();
        settings.server.base_url = "http://localhost:3000".to_string();
        assert_eq!(settings.log_stream_url().unwrap(), "ws://localhost:3000/logs");

        settings.server.base_url = "https://game.example.net".to_string();
        assert_eq!(
            settings.log_stream_url().unwrap(),
            "wss://game.example.net/logs"
        );
    }

    #[test]
    fn test_log_stream_url_keeps_base_path() {
        let mut settings = Settings::default();
        settings.server.base_url = "http://game.example.net/panel".to_string();
        assert_eq!(
            settings.log_stream_url().unwrap(),
            "ws://game.example.net/panel/logs"
        );

        settings.server.base_url = "http://game.example.net/panel/".to_string();
        assert_eq!(
            settings.log_stream_url().unwrap(),
            "ws://game.example.net/panel/logs"
        );
    }

    #[test]
    fn test_explicit_log_stream_url_wins() {
        let mut settings = Settings::default();
        settings.server.log_stream_url = Some("ws://elsewhere:9000/feed".to_string());
        assert_eq!(settings.log_stream_url().unwrap(), "ws://elsewhere:9000/feed");
    }
}
