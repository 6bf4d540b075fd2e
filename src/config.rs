use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{JumuError, JumuResult};
use crate::i18n::Lang;

/// Environment variable that overrides the API base URL
pub const API_BASE_ENV: &str = "JUMU_API_BASE";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Classification service base, `/classify` is appended
    pub api_base: String,

    // Meta
    #[serde(default)]
    pub ui_language: Lang,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "INFO".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:5000/api".to_string(),
            ui_language: Lang::Ar,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from the default location, then apply the environment
    pub fn load() -> JumuResult<Self> {
        let mut config = Self::load_from(&config_path())?;
        config.apply_env(std::env::var(API_BASE_ENV).ok());
        Ok(config)
    }

    /// Load config from a file, or defaults if it is missing or corrupt
    pub fn load_from(path: &Path) -> JumuResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                // Backup corrupt file for debugging
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Override the API base with a non-empty environment value
    pub fn apply_env(&mut self, api_base: Option<String>) {
        if let Some(base) = api_base.map(|b| b.trim().to_string()) {
            if !base.is_empty() {
                tracing::debug!("Using {} from environment: {}", API_BASE_ENV, base);
                self.api_base = base;
            }
        }
    }

    /// Reject an API base that is not an http(s) URL
    pub fn validate(&self) -> JumuResult<()> {
        let base = self.api_base.trim();
        if base.starts_with("http://") || base.starts_with("https://") {
            Ok(())
        } else {
            Err(JumuError::Config(format!(
                "api_base must be an http(s) URL, got '{}'",
                self.api_base
            )))
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jumu")
        .join("config.json")
}
