//! Configuration management for the `TripAI` application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::TripAiError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripAI` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripAiConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Overpass API configuration
    #[serde(default)]
    pub overpass: OverpassConfig,
    /// Chat-completion provider configuration
    #[serde(default)]
    pub openai: OpenAiConfig,
    /// Request limit settings
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind on
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Overpass API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassConfig {
    /// Interpreter endpoint URL
    #[serde(default = "default_overpass_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_overpass_timeout")]
    pub timeout_seconds: u32,
}

/// Chat-completion provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API key; falls back to the `OPENAI_API_KEY` environment variable.
    /// A missing key is not a startup error, it surfaces as an
    /// authentication failure from the provider at call time.
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_openai_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_openai_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds
    #[serde(default = "default_openai_timeout")]
    pub timeout_seconds: u32,
}

/// Request limit settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum number of POIs collected per request
    #[serde(default = "default_poi_limit")]
    pub poi_limit: usize,
    /// Maximum number of POIs echoed back in the response
    #[serde(default = "default_response_pois")]
    pub response_pois: usize,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    3000
}

fn default_overpass_base_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

fn default_overpass_timeout() -> u32 {
    30
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_openai_temperature() -> f32 {
    0.7
}

fn default_openai_timeout() -> u32 {
    120
}

fn default_poi_limit() -> usize {
    15
}

fn default_response_pois() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: default_overpass_base_url(),
            timeout_seconds: default_overpass_timeout(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_openai_base_url(),
            model: default_openai_model(),
            temperature: default_openai_temperature(),
            timeout_seconds: default_openai_timeout(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            poi_limit: default_poi_limit(),
            response_pois: default_response_pois(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for TripAiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            overpass: OverpassConfig::default(),
            openai: OpenAiConfig::default(),
            limits: LimitsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TripAiConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TRIPAI_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRIPAI")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripAiConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Deployments supply the credential as OPENAI_API_KEY
        if config.openai.api_key.is_none() {
            config.openai.api_key = std::env::var("OPENAI_API_KEY").ok();
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    pub fn validate_api_keys(&self) -> Result<()> {
        if let Some(api_key) = &self.openai.api_key {
            if api_key.is_empty() {
                return Err(TripAiError::config(
                    "OpenAI API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.overpass.timeout_seconds == 0 || self.overpass.timeout_seconds > 300 {
            return Err(
                TripAiError::config("Overpass timeout must be between 1 and 300 seconds").into(),
            );
        }

        if self.openai.timeout_seconds == 0 || self.openai.timeout_seconds > 600 {
            return Err(
                TripAiError::config("OpenAI timeout must be between 1 and 600 seconds").into(),
            );
        }

        if !(0.0..=2.0).contains(&self.openai.temperature) {
            return Err(
                TripAiError::config("Sampling temperature must be between 0.0 and 2.0").into(),
            );
        }

        if self.limits.poi_limit == 0 || self.limits.poi_limit > 100 {
            return Err(TripAiError::config("POI limit must be between 1 and 100").into());
        }

        if self.limits.response_pois > self.limits.poi_limit {
            return Err(
                TripAiError::config("Response POI count cannot exceed the POI limit").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripAiError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripAiError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("Overpass", &self.overpass.base_url),
            ("OpenAI", &self.openai.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TripAiError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}
