//! Configuration management for the `TripAI` client
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripAiError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripAI` client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripAiConfig {
    /// Planning API configuration
    #[serde(default)]
    pub api: ApiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default trip parameter settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Planning API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the itinerary planning service
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. Unset means the client waits for as
    /// long as the backend takes to respond.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
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

/// Default trip parameter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Hotel class filter applied when the field is left empty
    #[serde(default = "default_hotel_class")]
    pub hotel_class: String,
    /// Days from today for the prefilled outbound/check-in date
    #[serde(default = "default_outbound_offset")]
    pub outbound_offset_days: i64,
    /// Days from today for the prefilled return/check-out date
    #[serde(default = "default_return_offset")]
    pub return_offset_days: i64,
}

// Default value functions
fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_hotel_class() -> String {
    "4,5".to_string()
}

fn default_outbound_offset() -> i64 {
    7
}

fn default_return_offset() -> i64 {
    12
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_seconds: None,
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

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            hotel_class: default_hotel_class(),
            outbound_offset_days: default_outbound_offset(),
            return_offset_days: default_return_offset(),
        }
    }
}

impl Default for TripAiConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
            defaults: DefaultsConfig::default(),
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

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TRIPAI_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRIPAI")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TripAiConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripai").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if let Some(timeout) = self.api.timeout_seconds {
            if timeout == 0 {
                return Err(TripAiError::config(
                    "API timeout must be at least 1 second when set; remove it to wait indefinitely",
                )
                .into());
            }
            if timeout > 300 {
                return Err(
                    TripAiError::config("API timeout cannot exceed 300 seconds").into(),
                );
            }
        }

        if self.defaults.outbound_offset_days < 0 {
            return Err(
                TripAiError::config("Outbound date offset cannot be negative").into(),
            );
        }

        if self.defaults.return_offset_days < 0 {
            return Err(TripAiError::config("Return date offset cannot be negative").into());
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

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(TripAiError::config(
                "Planning API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        if self.defaults.hotel_class.is_empty()
            || !self
                .defaults
                .hotel_class
                .chars()
                .all(|c| c.is_ascii_digit() || c == ',')
        {
            return Err(TripAiError::config(
                "Default hotel class must be a comma-separated list of star ratings, e.g. '4,5'",
            )
            .into());
        }

        Ok(())
    }
}
