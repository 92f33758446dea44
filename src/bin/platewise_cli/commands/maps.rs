// ABOUTME: Google Maps commands for platewise-cli
// ABOUTME: Parses Maps links and resolves them to restaurant details through the Places API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::helpers::io::print_json;
use anyhow::Result;
use platewise::config::environment::ServerConfig;
use platewise::constants::env_vars;
use platewise::errors::AppError;
use platewise::external::maps_url::{parse_maps_url, resolve_maps_url};
use platewise::external::places_client::{resolve_place, PlacesClient};
use platewise::external::url_resolver::HttpUrlResolver;
use platewise::logging::AppLogger;
use platewise::utils::http_client::create_client;
use serde_json::json;
use std::time::Instant;

/// Parse a Maps link, optionally expanding shortened links
pub async fn parse_url(config: &ServerConfig, url: &str, resolve: bool) -> Result<()> {
    let parsed = if resolve {
        let resolver = HttpUrlResolver::new(&config.http);
        resolve_maps_url(url, &resolver).await?
    } else {
        parse_maps_url(url)?
    };
    print_json(&parsed)
}

/// Resolve a Maps link to a place and print the restaurant details
pub async fn place(config: &ServerConfig, url: &str) -> Result<()> {
    let places_config = config
        .places_client_config()
        .ok_or_else(|| AppError::config_missing(env_vars::GOOGLE_PLACES_API_KEY))?;
    let places = PlacesClient::with_client(places_config, create_client(&config.http));
    let resolver = HttpUrlResolver::new(&config.http);
    let started = Instant::now();

    let lookup = async {
        let resolved = resolve_place(url, &resolver, &places).await?;
        let details = places.place_details(&resolved.place_id).await?;
        Ok::<_, AppError>((resolved, details))
    }
    .await;

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let (resolved, details) = match lookup {
        Ok(found) => found,
        Err(e) => {
            AppLogger::log_place_lookup(url, None, false, elapsed_ms);
            return Err(e.into());
        }
    };
    AppLogger::log_place_lookup(url, Some(&resolved.place_id), true, elapsed_ms);

    print_json(&json!({ "place": resolved, "details": details }))
}
