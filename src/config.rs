//! Configuration handling for the TUI

use crate::i18n::Language;
use anyhow::Result;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Fallback backend address when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL
pub const BASE_URL_ENV: &str = "EXPORTDOC_API_BASE_URL";

/// Environment variable overriding the display language
pub const LANGUAGE_ENV: &str = "EXPORTDOC_LANG";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Backend base URL, e.g. `https://docs.example.com/api`
    pub api_base_url: Option<String>,
    /// Initial display language (`zh` or `en`)
    pub language: Option<String>,
    /// Where downloaded documents are written
    pub download_dir: Option<PathBuf>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "exportdoc", "exportdoc-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Backend base URL: environment, then config file, then the local default
    pub fn base_url(&self) -> String {
        self.base_url_with_env(std::env::var(BASE_URL_ENV).ok())
    }

    fn base_url_with_env(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| {
                self.api_base_url
                    .clone()
                    .filter(|v| !v.trim().is_empty())
            })
            .map(|v| normalize_base_url(&v))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Initial language: environment, then config file, then Chinese
    pub fn language(&self) -> Language {
        self.language_with_env(std::env::var(LANGUAGE_ENV).ok())
    }

    fn language_with_env(&self, env_value: Option<String>) -> Language {
        env_value
            .as_deref()
            .and_then(Language::parse)
            .or_else(|| self.language.as_deref().and_then(Language::parse))
            .unwrap_or_default()
    }

    /// Directory for downloaded documents
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(|| {
                UserDirs::new().and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()))
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Trim whitespace and trailing slashes so the route is appended exactly once
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
