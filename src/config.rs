//! Configuration management for the `TripSmith` planner
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings. Provider
//! endpoints and SMTP identity are injected through here; the planning
//! core never reads ambient state on its own.

use crate::TripSmithError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripSmith` planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSmithConfig {
    /// External provider configuration
    #[serde(default)]
    pub providers: ProviderConfig,
    /// Plan delivery configuration
    #[serde(default)]
    pub email: EmailConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// External information provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL for the encyclopedic summary provider
    #[serde(default = "default_wikipedia_base_url")]
    pub wikipedia_base_url: String,
    /// Base URL for the geocoding provider
    #[serde(default = "default_nominatim_base_url")]
    pub nominatim_base_url: String,
    /// Base URL for the general-answer provider
    #[serde(default = "default_duckduckgo_base_url")]
    pub duckduckgo_base_url: String,
    /// Per-call timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u32,
    /// User agent sent with every provider request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// SMTP delivery settings; sender credentials are optional so the planner
/// can run without any delivery configured
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_relay")]
    pub smtp_relay: String,
    pub sender_address: Option<String>,
    pub sender_password: Option<String>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_wikipedia_base_url() -> String {
    "https://en.wikipedia.org/api/rest_v1".to_string()
}

fn default_nominatim_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_duckduckgo_base_url() -> String {
    "https://api.duckduckgo.com".to_string()
}

fn default_provider_timeout() -> u32 {
    10
}

fn default_user_agent() -> String {
    "TripSmith/0.1 (travel planning; educational use)".to_string()
}

fn default_smtp_relay() -> String {
    "smtp.gmail.com".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            wikipedia_base_url: default_wikipedia_base_url(),
            nominatim_base_url: default_nominatim_base_url(),
            duckduckgo_base_url: default_duckduckgo_base_url(),
            timeout_seconds: default_provider_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_relay: default_smtp_relay(),
            sender_address: None,
            sender_password: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TripSmithConfig {
    fn default() -> Self {
        Self {
            providers: ProviderConfig::default(),
            email: EmailConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TripSmithConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

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

        // Add environment variable overrides with TRIPSMITH_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRIPSMITH")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripSmithConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripsmith").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.providers.wikipedia_base_url.is_empty() {
            self.providers.wikipedia_base_url = default_wikipedia_base_url();
        }
        if self.providers.nominatim_base_url.is_empty() {
            self.providers.nominatim_base_url = default_nominatim_base_url();
        }
        if self.providers.duckduckgo_base_url.is_empty() {
            self.providers.duckduckgo_base_url = default_duckduckgo_base_url();
        }
        if self.providers.timeout_seconds == 0 {
            self.providers.timeout_seconds = default_provider_timeout();
        }
        if self.providers.user_agent.is_empty() {
            self.providers.user_agent = default_user_agent();
        }
        if self.email.smtp_relay.is_empty() {
            self.email.smtp_relay = default_smtp_relay();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.providers.timeout_seconds > 300 {
            return Err(
                TripSmithError::config("Provider timeout cannot exceed 300 seconds").into(),
            );
        }

        for (name, url) in [
            ("Wikipedia", &self.providers.wikipedia_base_url),
            ("Nominatim", &self.providers.nominatim_base_url),
            ("DuckDuckGo", &self.providers.duckduckgo_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TripSmithError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripSmithError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        // A sender address without a password (or vice versa) cannot work
        if self.email.sender_address.is_some() != self.email.sender_password.is_some() {
            return Err(TripSmithError::config(
                "Email delivery needs both sender_address and sender_password, or neither",
            )
            .into());
        }

        Ok(())
    }

    /// Whether delivery credentials are fully configured
    #[must_use]
    pub fn delivery_configured(&self) -> bool {
        self.email.sender_address.is_some() && self.email.sender_password.is_some()
    }
}
