// ABOUTME: Platewise CLI - command-line front end for menu analysis and Google Maps link lookup
// ABOUTME: Ranks menus from JSON files, parses Maps links, and fetches restaurant details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Rank a menu for a user
//! platewise-cli analyze --menu menu.json --preferences preferences.json
//!
//! # Rank each section of a sectioned menu
//! platewise-cli analyze --menu sections.json --preferences preferences.json --sections
//!
//! # Extract a place id or coordinates from a Maps link
//! platewise-cli parse-url "https://www.google.com/maps/place/X/data=!1sChIJabc123!"
//!
//! # Expand a shortened link first
//! platewise-cli parse-url https://maps.app.goo.gl/AbC123 --resolve
//!
//! # Look up restaurant details (requires GOOGLE_PLACES_API_KEY)
//! platewise-cli place https://maps.app.goo.gl/AbC123
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use platewise::config::environment::ServerConfig;
use platewise::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "platewise-cli",
    about = "Platewise menu matching CLI",
    long_about = "Rank restaurant menus against dietary preferences and resolve Google Maps links to restaurants."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Rank menu items for a user's preferences
    Analyze {
        /// Menu JSON file: an array of items, or of sections with --sections
        #[arg(long)]
        menu: PathBuf,

        /// Preferences JSON file; without it the menu is returned unranked
        #[arg(long)]
        preferences: Option<PathBuf>,

        /// Treat the menu file as an array of sections and rank each one
        #[arg(long)]
        sections: bool,

        /// Scoring configuration JSON file (weights and thresholds)
        #[arg(long)]
        scoring: Option<PathBuf>,
    },

    /// Extract a place id or coordinates from a Google Maps link
    ParseUrl {
        /// Google Maps link
        url: String,

        /// Expand shortened links over the network
        #[arg(long)]
        resolve: bool,
    },

    /// Resolve a Google Maps link to a restaurant and print its details
    Place {
        /// Google Maps link
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let config = ServerConfig::from_env()?;
    debug!("{}", config.summary());

    match cli.command {
        Command::Analyze {
            menu,
            preferences,
            sections,
            scoring,
        } => {
            commands::analyze::run(
                &config,
                &menu,
                preferences.as_deref(),
                scoring.as_deref(),
                sections,
            )?;
        }
        Command::ParseUrl { url, resolve } => {
            commands::maps::parse_url(&config, &url, resolve).await?;
        }
        Command::Place { url } => {
            commands::maps::place(&config, &url).await?;
        }
    }

    Ok(())
}
