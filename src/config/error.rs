// ABOUTME: Configuration error types for scoring and keyword table validation
// ABOUTME: Defines error variants for invalid ranges, missing fields, and unreadable files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration error types for scoring and keyword table validation.

use platewise_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., threshold above 100)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required configuration field is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Environment variable access or parse error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File that was being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Two dietary rules share the same tag
    #[error("Duplicate dietary rule: {0}")]
    DuplicateRule(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::MissingField(_) | ConfigError::EnvVar(_) => ErrorCode::ConfigMissing,
            ConfigError::InvalidRange(_)
            | ConfigError::Parse(_)
            | ConfigError::DuplicateRule(_) => ErrorCode::ConfigInvalid,
            ConfigError::Read { .. } => ErrorCode::ConfigError,
        };
        Self::new(code, error.to_string())
    }
}
