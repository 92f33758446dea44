// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for scoring, Google Maps integration, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Menu match scoring defaults and display texts
pub mod scoring;

/// Service identity
pub mod service_names {
    /// Service name used in logs
    pub const PLATEWISE: &str = "platewise";
    /// CLI binary name
    pub const PLATEWISE_CLI: &str = "platewise-cli";
}

/// Google Maps and Places API endpoints
pub mod google {
    /// Google Places web service base URL
    pub const PLACES_API_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";
    /// Fields requested from the place details endpoint
    pub const PLACE_DETAILS_FIELDS: &str = "place_id,name,rating,user_ratings_total,formatted_address,formatted_phone_number,opening_hours,website,price_level,photos,types";
    /// Maximum photo width requested for photo URLs
    pub const PHOTO_MAX_WIDTH: u32 = 800;
    /// Prefix carried by canonical place identifiers
    pub const CANONICAL_PLACE_ID_PREFIX: &str = "ChIJ";
    /// Hosts (with path prefix) used by shortened Google Maps links
    pub const SHORTENED_LINK_PREFIXES: &[&str] = &["goo.gl/maps", "maps.app.goo.gl", "g.co/kgs"];
}

/// HTTP client defaults
pub mod http {
    /// Browser-like user agent; link shorteners serve interstitials to unknown agents
    pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
    /// Request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Connect timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Maximum redirects followed when resolving shortened links
    pub const MAX_REDIRECTS: usize = 10;
}

/// Environment variable names
pub mod env_vars {
    /// Google Places API key
    pub const GOOGLE_PLACES_API_KEY: &str = "GOOGLE_PLACES_API_KEY";
    /// Override for the Places API base URL
    pub const GOOGLE_PLACES_BASE_URL: &str = "GOOGLE_PLACES_BASE_URL";
    /// Path to a JSON dietary keyword table
    pub const KEYWORD_TABLE_PATH: &str = "PLATEWISE_KEYWORD_TABLE";
    /// HTTP user agent override
    pub const HTTP_USER_AGENT: &str = "PLATEWISE_USER_AGENT";
    /// HTTP request timeout override (seconds)
    pub const HTTP_TIMEOUT_SECS: &str = "PLATEWISE_HTTP_TIMEOUT_SECS";
    /// HTTP connect timeout override (seconds)
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "PLATEWISE_HTTP_CONNECT_TIMEOUT_SECS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}
