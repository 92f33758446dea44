// ABOUTME: Configuration management module for environment settings and scoring parameters
// ABOUTME: Handles environment configs, scoring weights and thresholds, and their validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration module for Platewise
//!
//! - **Environment**: runtime configuration from environment variables
//! - **Scoring**: weights and category thresholds of the match scorer
//! - **Error**: configuration validation errors

/// Environment and runtime configuration
pub mod environment;
/// Configuration error types
pub mod error;
/// Menu match scoring weights and thresholds
pub mod scoring;

pub use environment::{Environment, GooglePlacesConfig, ServerConfig};
pub use error::ConfigError;
pub use scoring::{ScoringConfig, ScoringWeights};
