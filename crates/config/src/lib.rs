//! Configuration loading, validation, and management for Supperplan.
//!
//! Loads configuration from `~/.supperplan/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Access code used when neither the config file nor `BETA_ACCESS_CODE` sets one.
pub const DEFAULT_ACCESS_CODE: &str = "THAMES_CLUB_VIP";

/// Upper bound accepted for `anthropic.max_tokens`.
const MAX_TOKENS_LIMIT: u32 = 200_000;

/// The root configuration structure.
///
/// Maps directly to `~/.supperplan/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Anthropic API key. Usually supplied through `ANTHROPIC_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Shared passphrase that gates the generation endpoints
    #[serde(default = "default_access_code")]
    pub access_code: String,

    /// Model requested from the upstream API
    #[serde(default = "default_model")]
    pub model: String,

    /// Upstream API settings
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// Gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,
}

fn default_access_code() -> String {
    DEFAULT_ACCESS_CODE.into()
}
fn default_model() -> String {
    "claude-3-5-sonnet-20240620".into()
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("access_code", &"[REDACTED]")
            .field("model", &self.model)
            .field("anthropic", &self.anthropic)
            .field("gateway", &self.gateway)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    /// Base URL of the Messages API (override for proxies and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum tokens per reply
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Deadline for the single upstream call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.anthropic.com".into()
}
fn default_max_tokens() -> u32 {
    8192
}
fn default_timeout_secs() -> u64 {
    90
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Extra origins allowed by CORS. Empty = same-origin only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cors_origins: Vec<String>,
}

fn default_port() -> u16 {
    5000
}
fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            cors_origins: vec![],
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.supperplan/config.toml).
    ///
    /// Environment variables take priority over the file:
    /// - `ANTHROPIC_API_KEY`
    /// - `BETA_ACCESS_CODE`
    /// - `SUPPERPLAN_MODEL`
    /// - `HOST`, `PORT`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        Self::load_with_env(&config_path, |key| std::env::var(key).ok())
    }

    /// Load from `path`, then apply overrides from `env`, then validate.
    pub fn load_with_env(
        path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::read_file(path)?;
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(config)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(key) = env("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }

        if let Some(code) = env("BETA_ACCESS_CODE") {
            self.access_code = code;
        }

        if let Some(model) = env("SUPPERPLAN_MODEL") {
            self.model = model;
        }

        if let Some(host) = env("HOST") {
            self.gateway.host = host;
        }

        if let Some(port) = env("PORT") {
            self.gateway.port = port.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!("PORT must be a valid port number, got {port:?}"))
            })?;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".supperplan")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.access_code.is_empty() {
            return Err(ConfigError::ValidationError(
                "access_code must not be empty".into(),
            ));
        }

        if self.anthropic.max_tokens == 0 || self.anthropic.max_tokens > MAX_TOKENS_LIMIT {
            return Err(ConfigError::ValidationError(format!(
                "anthropic.max_tokens must be between 1 and {MAX_TOKENS_LIMIT}"
            )));
        }

        if self.anthropic.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "anthropic.timeout_secs must be greater than 0".into(),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::ValidationError("model must not be empty".into()));
        }

        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Socket address string the gateway binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.gateway.host, self.gateway.port)
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            access_code: default_access_code(),
            model: default_model(),
            anthropic: AnthropicConfig::default(),
            gateway: GatewayConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
