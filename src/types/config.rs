//! Configuration for Glossa.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::GlossaResult;

/// Main configuration for Glossa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Remote translation API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API key used to authenticate requests.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the translation service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout (in seconds).
    #[serde(default = "default_api_timeout")]
    pub timeout_secs: u64,

    /// Maximum number of texts sent in a single request.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_api_timeout(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.glossa.dev".to_string()
}

fn default_api_timeout() -> u64 {
    30
}

fn default_max_batch_size() -> usize {
    200
}

/// Shared translation cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum cache capacity (number of entries).
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,

    /// Use the process-wide shared cache instead of a private one.
    #[serde(default = "default_true")]
    pub shared: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
            shared: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cache_capacity() -> usize {
    1000
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> GlossaResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> GlossaResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            api: ApiConfig::default(),
            cache: CacheConfig::default(),
        }
    }

    /// Tries to load configuration from the working directory, then from
    /// the user config directory, and falls back to defaults.
    pub fn load_or_default() -> Self {
        if let Ok(config) = Self::load("glossa.toml") {
            return config;
        }
        if let Some(path) = Self::user_config_path() {
            if let Ok(config) = Self::load(&path) {
                return config;
            }
        }
        Self::default_config()
    }

    /// Caminho do arquivo de configuração do usuário (`~/.config/glossa/glossa.toml`).
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("glossa").join("glossa.toml"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
