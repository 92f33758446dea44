// ABOUTME: Google Maps URL parsing into a place identifier, coordinates, or a shortened link
// ABOUTME: Ordered extraction rules with shortened-link resolution through an injected resolver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Google Maps URL parsing
//!
//! Shared Google Maps links come in many shapes. Parsing tries an ordered
//! list of place identifier rules, then the `@lat,lng` coordinate pair, and
//! flags shortened links that need a redirect follow before anything useful
//! can be extracted.
//!
//! # Example
//! ```rust
//! use platewise::external::maps_url::parse_maps_url;
//!
//! let parsed = parse_maps_url(
//!     "https://www.google.com/maps/place/X/@40.7,-74.0,17z/data=!3m1!4b1!4m5!3m4!1sChIJabc123!",
//! )
//! .unwrap();
//! assert_eq!(parsed.place_id(), Some("ChIJabc123"));
//! ```

use super::url_resolver::UrlResolver;
use platewise_core::constants::google::SHORTENED_LINK_PREFIXES;
use platewise_core::errors::MapsUrlError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, instrument};
use url::Url;

static DATA_TOKEN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "!1sChIJabc123!"
    Regex::new(r"!1s([^!?&#]+)!").ok()
});

static DATA_TOKEN_TAIL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches a trailing token: "...!1sChIJabc123" or "...!1sChIJabc123?entry=ttc"
    Regex::new(r"!1s([^!?&#]+)(?:[!?&#]|$)").ok()
});

static HEX_FEATURE_ID: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "!1s0x89c25a3b:0x1234abcd"
    Regex::new(r"!1s(0x[0-9a-fA-F]+:(?:0x)?[0-9a-fA-F]+)").ok()
});

static COORDINATES: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "@40.7128,-74.0060"
    Regex::new(r"@(-?\d+\.\d+),(-?\d+\.\d+)").ok()
});

/// Latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinates {
    /// Whether both values are within valid degree ranges
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// What a Google Maps URL points at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapsLocation {
    /// A place identifier was found
    PlaceId {
        /// Extracted identifier, canonical (`ChIJ...`) or legacy
        #[serde(rename = "placeId")]
        place_id: String,
    },
    /// Only a coordinate pair was found
    Coordinates {
        /// Extracted coordinates
        coordinates: Coordinates,
    },
    /// Shortened link that was not (or could not be) expanded into anything recognizable
    Shortened,
    /// Recognized as a URL but in no known format
    Unknown,
}

/// Result of parsing a Google Maps URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMapsUrl {
    /// What the URL points at
    #[serde(flatten)]
    pub location: MapsLocation,
    /// The URL exactly as given
    #[serde(rename = "originalUrl")]
    pub original_url: String,
    /// Expanded URL when a shortened link was resolved
    #[serde(
        rename = "resolvedUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub resolved_url: Option<String>,
}

impl ParsedMapsUrl {
    /// Extracted place identifier, if any
    #[must_use]
    pub fn place_id(&self) -> Option<&str> {
        match &self.location {
            MapsLocation::PlaceId { place_id } => Some(place_id),
            _ => None,
        }
    }

    /// Extracted coordinates, if any
    #[must_use]
    pub const fn coordinates(&self) -> Option<Coordinates> {
        match self.location {
            MapsLocation::Coordinates { coordinates } => Some(coordinates),
            _ => None,
        }
    }
}

/// One place identifier extraction rule
///
/// Extractors get the parsed URL and the raw text: query parameter rules
/// read decoded pairs, pattern rules scan the raw text.
pub struct ExtractionRule {
    /// Rule name, reported in debug logs
    pub name: &'static str,
    extract: fn(&Url, &str) -> Option<String>,
}

impl ExtractionRule {
    /// Apply the rule
    #[must_use]
    pub fn extract(&self, url: &Url, raw: &str) -> Option<String> {
        (self.extract)(url, raw)
    }
}

/// Place identifier rules in priority order; the first match wins
pub static PLACE_ID_RULES: &[ExtractionRule] = &[
    ExtractionRule {
        name: "place_id_param",
        extract: |url, _| query_param(url, "place_id"),
    },
    ExtractionRule {
        name: "query_place_id",
        extract: |url, _| {
            query_param(url, "query").and_then(|query| {
                query
                    .strip_prefix("place_id:")
                    .filter(|id| !id.is_empty())
                    .map(str::to_owned)
            })
        },
    },
    ExtractionRule {
        name: "data_token",
        extract: |_, raw| capture(&DATA_TOKEN, raw),
    },
    ExtractionRule {
        name: "data_token_tail",
        extract: |_, raw| capture(&DATA_TOKEN_TAIL, raw),
    },
    ExtractionRule {
        name: "hex_feature_id",
        extract: |_, raw| capture(&HEX_FEATURE_ID, raw),
    },
    ExtractionRule {
        name: "ftid_param",
        extract: |url, _| query_param(url, "ftid"),
    },
];

fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, value)| key == name && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

fn capture(pattern: &LazyLock<Option<Regex>>, raw: &str) -> Option<String> {
    pattern
        .as_ref()?
        .captures(raw)?
        .get(1)
        .map(|m| m.as_str().to_owned())
}

/// First place identifier found by [`PLACE_ID_RULES`]
#[must_use]
pub fn extract_place_id(url: &Url, raw: &str) -> Option<String> {
    PLACE_ID_RULES.iter().find_map(|rule| {
        let place_id = rule.extract(url, raw)?;
        debug!(rule = rule.name, %place_id, "Place ID extracted");
        Some(place_id)
    })
}

/// Coordinate pair following `@`, if present and in range
#[must_use]
pub fn extract_coordinates(raw: &str) -> Option<Coordinates> {
    let captures = COORDINATES.as_ref()?.captures(raw)?;
    let coordinates = Coordinates {
        lat: captures.get(1)?.as_str().parse().ok()?,
        lng: captures.get(2)?.as_str().parse().ok()?,
    };
    coordinates.is_valid().then_some(coordinates)
}

/// Whether the URL is a shortened Google Maps link
///
/// The link must use http(s) and carry a non-empty path after one of the
/// shortener prefixes.
#[must_use]
pub fn is_shortened_url(url: &Url) -> bool {
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    let Some(host) = url.host_str() else {
        return false;
    };
    let location = format!("{host}{}", url.path()).to_lowercase();

    SHORTENED_LINK_PREFIXES.iter().any(|prefix| {
        location
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('/'))
            .is_some_and(|rest| !rest.is_empty())
    })
}

fn parse_url(raw: &str) -> Result<Url, MapsUrlError> {
    Url::parse(raw.trim()).map_err(|e| MapsUrlError::invalid_url(raw, e.to_string()))
}

/// Identifier first, coordinates second
fn locate(url: &Url, raw: &str) -> Option<MapsLocation> {
    if let Some(place_id) = extract_place_id(url, raw) {
        return Some(MapsLocation::PlaceId { place_id });
    }
    extract_coordinates(raw).map(|coordinates| MapsLocation::Coordinates { coordinates })
}

/// Parse a Google Maps URL without any network access
///
/// Shortened links are reported as [`MapsLocation::Shortened`] unless the
/// short URL itself already carries an identifier.
///
/// # Errors
///
/// Returns `MapsUrlError::InvalidUrl` if `raw` is not a parseable URL
pub fn parse_maps_url(raw: &str) -> Result<ParsedMapsUrl, MapsUrlError> {
    let url = parse_url(raw)?;
    let location = locate(&url, raw.trim()).unwrap_or_else(|| {
        if is_shortened_url(&url) {
            MapsLocation::Shortened
        } else {
            MapsLocation::Unknown
        }
    });

    Ok(ParsedMapsUrl {
        location,
        original_url: raw.to_owned(),
        resolved_url: None,
    })
}

/// Parse a Google Maps URL, expanding shortened links first
///
/// A shortened link that already yields a location is returned without a
/// network call. Any other shortened link is expanded through `resolver`
/// and the extraction rules run on the expanded URL. If the expanded URL still yields nothing the
/// result is [`MapsLocation::Shortened`].
///
/// # Errors
///
/// Returns `MapsUrlError::InvalidUrl` if `raw` is not a parseable URL and
/// `MapsUrlError::ResolutionFailed` if expanding a shortened link fails
#[instrument(skip(resolver), fields(url = %raw))]
pub async fn resolve_maps_url(
    raw: &str,
    resolver: &dyn UrlResolver,
) -> Result<ParsedMapsUrl, MapsUrlError> {
    let url = parse_url(raw)?;
    if !is_shortened_url(&url) {
        return parse_maps_url(raw);
    }
    if let Some(location) = locate(&url, raw.trim()) {
        debug!("Shortened link already carries a location, skipping resolution");
        return Ok(ParsedMapsUrl {
            location,
            original_url: raw.to_owned(),
            resolved_url: None,
        });
    }

    debug!("Shortened link detected, resolving");
    let resolved = resolver.resolve(url.as_str()).await?;
    let resolved_url =
        Url::parse(&resolved).map_err(|_| MapsUrlError::resolution_failed(url.as_str()))?;
    debug!(resolved = %resolved, "Shortened link resolved");

    Ok(ParsedMapsUrl {
        location: locate(&resolved_url, &resolved).unwrap_or(MapsLocation::Shortened),
        original_url: raw.to_owned(),
        resolved_url: Some(resolved),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn test_place_id_param_beats_data_token() {
        let raw = "https://www.google.com/maps/search/?api=1&place_id=ChIJparam!1sChIJdata!";
        assert_eq!(extract_place_id(&url(raw), raw).as_deref(), Some("ChIJparam"));
    }

    #[test]
    fn test_query_place_id() {
        let raw = "https://www.google.com/maps/search/?api=1&query=place_id:ChIJquery";
        assert_eq!(extract_place_id(&url(raw), raw).as_deref(), Some("ChIJquery"));

        let raw = "https://www.google.com/maps/search/?api=1&query=pizza";
        assert_eq!(extract_place_id(&url(raw), raw), None);
    }

    #[test]
    fn test_trailing_data_token() {
        let raw = "https://www.google.com/maps/place/X/data=!4m2!3m1!1sChIJtail";
        assert_eq!(extract_place_id(&url(raw), raw).as_deref(), Some("ChIJtail"));

        let raw = "https://www.google.com/maps/place/X/data=!4m2!3m1!1sChIJtail?entry=ttc";
        assert_eq!(extract_place_id(&url(raw), raw).as_deref(), Some("ChIJtail"));
    }

    #[test]
    fn test_hex_feature_id_is_extracted() {
        let raw = "https://www.google.com/maps/place/X/data=!3m1!1s0x89c25a3b:0x1234abcd!8m2";
        assert_eq!(
            extract_place_id(&url(raw), raw).as_deref(),
            Some("0x89c25a3b:0x1234abcd")
        );
        assert!(HEX_FEATURE_ID
            .as_ref()
            .is_some_and(|re| re.is_match(raw)));
    }

    #[test]
    fn test_ftid_param() {
        let raw = "https://maps.google.com/?ftid=0x0:0xabc";
        assert_eq!(extract_place_id(&url(raw), raw).as_deref(), Some("0x0:0xabc"));
    }

    #[test]
    fn test_coordinates_out_of_range_are_ignored() {
        assert_eq!(
            extract_coordinates("https://www.google.com/maps/@40.7,-74.0,17z"),
            Some(Coordinates { lat: 40.7, lng: -74.0 })
        );
        assert_eq!(extract_coordinates("https://www.google.com/maps/@95.0,10.0,17z"), None);
        assert_eq!(extract_coordinates("https://www.google.com/maps/@40,-74,17z"), None);
    }

    #[test]
    fn test_shortened_detection() {
        assert!(is_shortened_url(&url("https://maps.app.goo.gl/AbC123")));
        assert!(is_shortened_url(&url("http://goo.gl/maps/xyz")));
        assert!(is_shortened_url(&url("https://G.CO/kgs/abc")));
        assert!(!is_shortened_url(&url("https://maps.app.goo.gl/")));
        assert!(!is_shortened_url(&url("https://goo.gl/other/xyz")));
        assert!(!is_shortened_url(&url("ftp://maps.app.goo.gl/AbC123")));
    }
}
