// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads the Places API key, HTTP client settings, and keyword table path from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration
//!
//! Configuration is environment-only. Every value has a default except the
//! Google Places API key, which is only needed for place lookups.

use super::error::ConfigError;
use crate::external::places_client::PlacesClientConfig;
use crate::intelligence::menu_analysis::DietaryKeywordTable;
use crate::utils::http_client::HttpClientSettings;
use anyhow::{anyhow, Context, Result};
use platewise_core::constants::{env_vars, google, http};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};
use url::Url;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Google Places API settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GooglePlacesConfig {
    /// API key; place lookups are unavailable without it
    pub api_key: Option<String>,
    /// Places web service base URL
    pub base_url: String,
}

/// Runtime configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Google Places API settings
    pub google_places: GooglePlacesConfig,
    /// Outgoing HTTP request settings
    pub http: HttpClientSettings,
    /// JSON dietary keyword table replacing the built-in one
    pub keyword_table_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric value does not parse or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            google_places: GooglePlacesConfig {
                api_key: env::var(env_vars::GOOGLE_PLACES_API_KEY)
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                base_url: env_var_or(
                    env_vars::GOOGLE_PLACES_BASE_URL,
                    google::PLACES_API_BASE_URL,
                ),
            },
            http: HttpClientSettings {
                timeout_secs: env_u64_or(
                    env_vars::HTTP_TIMEOUT_SECS,
                    http::DEFAULT_REQUEST_TIMEOUT_SECS,
                )?,
                connect_timeout_secs: env_u64_or(
                    env_vars::HTTP_CONNECT_TIMEOUT_SECS,
                    http::DEFAULT_CONNECT_TIMEOUT_SECS,
                )?,
                user_agent: env_var_or(env_vars::HTTP_USER_AGENT, http::DEFAULT_USER_AGENT),
            },
            keyword_table_path: env::var(env_vars::KEYWORD_TABLE_PATH)
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout is zero or the Places base URL is not a URL
    pub fn validate(&self) -> Result<()> {
        if self.http.timeout_secs == 0 || self.http.connect_timeout_secs == 0 {
            return Err(anyhow!("HTTP timeouts must be greater than zero"));
        }
        if self.http.connect_timeout_secs > self.http.timeout_secs {
            warn!(
                connect_timeout_secs = self.http.connect_timeout_secs,
                timeout_secs = self.http.timeout_secs,
                "Connect timeout exceeds request timeout"
            );
        }

        Url::parse(&self.google_places.base_url).with_context(|| {
            format!(
                "Invalid {} value: {}",
                env_vars::GOOGLE_PLACES_BASE_URL,
                self.google_places.base_url
            )
        })?;

        if self.google_places.api_key.is_none() {
            warn!(
                "{} not set, place lookups are unavailable",
                env_vars::GOOGLE_PLACES_API_KEY
            );
        }

        Ok(())
    }

    /// Places client configuration, if an API key is set
    #[must_use]
    pub fn places_client_config(&self) -> Option<PlacesClientConfig> {
        self.google_places
            .api_key
            .as_ref()
            .map(|api_key| PlacesClientConfig {
                api_key: api_key.clone(),
                base_url: self.google_places.base_url.clone(),
            })
    }

    /// Keyword table to score with: the configured file, or the built-in table
    ///
    /// # Errors
    ///
    /// Returns an error if the configured file cannot be read or is invalid
    pub fn load_keyword_table(&self) -> Result<DietaryKeywordTable, ConfigError> {
        let Some(path) = &self.keyword_table_path else {
            return Ok(DietaryKeywordTable::default());
        };

        let table = DietaryKeywordTable::from_file(path)?;
        info!(
            path = %path.display(),
            version = %table.version,
            rules = table.rules.len(),
            "Loaded dietary keyword table"
        );
        Ok(table)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Platewise Configuration:\n\
             - Environment: {}\n\
             - Google Places: {}\n\
             - Places Base URL: {}\n\
             - HTTP Timeout: {}s (connect {}s)\n\
             - Keyword Table: {}",
            self.environment,
            if self.google_places.api_key.is_some() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.google_places.base_url,
            self.http.timeout_secs,
            self.http.connect_timeout_secs,
            self.keyword_table_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string()),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a numeric environment variable, falling back to `default` when unset
fn env_u64_or(key: &str, default: u64) -> Result<u64> {
    env::var(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {value}"))
    })
}
