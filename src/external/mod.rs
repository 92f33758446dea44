// ABOUTME: External integrations for Google Maps links and the Google Places API
// ABOUTME: URL parsing, shortened-link resolution, and restaurant lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! External API Clients
//!
//! Everything that talks to, or parses links from, Google Maps.

/// Google Maps URL parsing
pub mod maps_url;
/// Google Places lookup and details
pub mod places_client;
/// Shortened link resolution
pub mod url_resolver;

// Re-export commonly used types
pub use maps_url::{parse_maps_url, resolve_maps_url, Coordinates, MapsLocation, ParsedMapsUrl};
pub use places_client::{
    extract_search_query, is_canonical_place_id, resolve_place, PlacesClient, PlacesClientConfig,
    ResolvedPlace, RestaurantDetails,
};
pub use url_resolver::{HttpUrlResolver, UrlResolver};
