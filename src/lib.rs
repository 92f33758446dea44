// ABOUTME: Main library entry point for the Platewise menu matching platform
// ABOUTME: Scores restaurant menus against user preferences and resolves Google Maps links
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Platewise
//!
//! Personalized restaurant menu highlighting.
//!
//! ## Features
//!
//! - **Menu analysis**: rank menu items for one user's dietary restrictions
//!   and favorite proteins, cuisines and ingredients
//! - **Maps links**: extract a place id or coordinates from pasted Google
//!   Maps links, expanding shortened links
//! - **Place lookup**: fetch restaurant details from the Google Places API
//!
//! ## Architecture
//!
//! - **Intelligence**: the pure, synchronous match scorer
//! - **External**: Google Maps link parsing, link resolution, Places client
//! - **Config**: environment configuration and scoring weights
//! - **Models / Errors / Constants**: shared types re-exported from `platewise-core`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use platewise::config::environment::ServerConfig;
//! use platewise::intelligence::MenuMatchScorer;
//! use platewise::models::{MenuItem, UserPreferences};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let scorer = MenuMatchScorer::new(Default::default(), config.load_keyword_table()?);
//!
//!     let menu = vec![MenuItem::new("1", "Quinoa Buddha Bowl")];
//!     let preferences = UserPreferences {
//!         favorite_proteins: vec!["quinoa".into()],
//!         ..UserPreferences::default()
//!     };
//!     if let Some(ranked) = scorer.analyze_menu(&menu, Some(&preferences)) {
//!         println!("{}", serde_json::to_string_pretty(&ranked)?);
//!     }
//!     Ok(())
//! }
//! ```

pub use platewise_core::{constants, errors, models};

/// Environment configuration, scoring weights and configuration errors
pub mod config;

/// Google Maps link parsing and Google Places integration
pub mod external;

/// Menu analysis and personalization
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Shared utilities
pub mod utils;
