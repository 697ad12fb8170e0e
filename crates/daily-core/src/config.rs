use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default endpoint for the quote viewer. The service serves a random
/// quote per request with no parameters or authentication.
pub const DEFAULT_QUOTE_URL: &str = "http://api.quotable.io/random";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default path for the task data file, used when neither the
    /// `--file` argument nor the env var is given.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Override for the quote service endpoint.
    #[serde(default)]
    pub quote_url: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/daily/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("daily/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("daily\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the config file if present; any read or parse failure falls
    /// back to defaults rather than erroring.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn effective_quote_url(&self) -> &str {
        self.quote_url.as_deref().unwrap_or(DEFAULT_QUOTE_URL)
    }

    pub fn effective_data_file(&self) -> Option<&PathBuf> {
        self.data_file.as_ref()
    }
}
