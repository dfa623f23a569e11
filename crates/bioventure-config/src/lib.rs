//! Configuration loading for BioVenture Nexus.
//! Reads bioventure.toml from the current directory or the path in the
//! BIOVENTURE_CONFIG env var. Every key has a default, so the file is
//! optional; the Gemini credential is the only value that must be supplied.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "BIOVENTURE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "bioventure.toml";
pub const BIND_ENV: &str = "BIOVENTURE_BIND";

/// Environment variables searched, in order, when `llm.api_key` is unset.
pub const API_KEY_ENV_VARS: [&str; 3] = ["BIOVENTURE_GEMINI_API_KEY", "GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Missing Gemini API key: set llm.api_key in {DEFAULT_CONFIG_PATH} or one of {vars}")]
    MissingCredential { vars: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:3000".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("server.bind {:?}: {e}", self.bind)))
    }
}

#[derive(Debug, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_thinking_budget")]
    pub thinking_budget: Option<u32>,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Cap on generated tokens; unset leaves the service default.
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_secret")]
    pub api_key: Option<SecretString>,
}

fn default_model()           -> String      { "gemini-3-pro-preview".to_string() }
fn default_base_url()        -> String      { "https://generativelanguage.googleapis.com".to_string() }
fn default_temperature()     -> f32         { 0.75 }
fn default_thinking_budget() -> Option<u32> { Some(2000) }
fn default_request_timeout() -> u64         { 120 }

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            thinking_budget: default_thinking_budget(),
            request_timeout_secs: default_request_timeout(),
            max_output_tokens: None,
            api_key: None,
        }
    }
}

impl LlmConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve the credential from the config file or the process environment.
    pub fn resolve_api_key(&self) -> Result<SecretString, ConfigError> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Same as `resolve_api_key` with an injectable environment lookup.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<SecretString, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = &self.api_key {
            let key = key.expose_secret().trim();
            if !key.is_empty() {
                return Ok(SecretString::from(key.to_string()));
            }
        }

        for name in API_KEY_ENV_VARS {
            if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
                tracing::debug!(source = name, "Gemini API key resolved from environment");
                return Ok(SecretString::from(value.trim().to_string()));
            }
        }

        Err(ConfigError::MissingCredential { vars: API_KEY_ENV_VARS.join(", ") })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Delay between cosmetic loading-message steps.
    #[serde(default = "default_loading_interval")]
    pub loading_message_interval_ms: u64,
}

fn default_loading_interval() -> u64 { 2500 }

impl Default for UiConfig {
    fn default() -> Self {
        Self { loading_message_interval_ms: default_loading_interval() }
    }
}

impl UiConfig {
    pub fn loading_message_interval(&self) -> Duration {
        Duration::from_millis(self.loading_message_interval_ms)
    }
}

impl Config {
    /// Load configuration from bioventure.toml.
    /// Checks BIOVENTURE_CONFIG env var first, then current directory.
    /// A missing file yields the defaults; BIOVENTURE_BIND overrides the
    /// bind address.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
            Self::from_toml_str(&content, &path)?
        } else {
            tracing::info!(path = %path, "no config file found, using defaults");
            Config::default()
        };

        if let Ok(bind) = std::env::var(BIND_ENV) {
            config.server.bind = bind;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document; `origin` names the source in error messages.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;

        if self.llm.model.trim().is_empty() {
            return Err(ConfigError::Invalid("llm.model must not be empty".into()));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::Invalid(format!(
                "llm.temperature must be within [0, 2], got {}",
                self.llm.temperature
            )));
        }
        if self.llm.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("llm.request_timeout_secs must be positive".into()));
        }
        if self.llm.max_output_tokens == Some(0) {
            return Err(ConfigError::Invalid("llm.max_output_tokens must be positive".into()));
        }
        if self.ui.loading_message_interval_ms == 0 {
            return Err(ConfigError::Invalid("ui.loading_message_interval_ms must be positive".into()));
        }
        Ok(())
    }
}
