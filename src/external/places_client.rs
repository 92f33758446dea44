// ABOUTME: Google Places API client for restaurant lookup and details retrieval
// ABOUTME: Finds place ids from text, maps details into display-ready RestaurantDetails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Google Places API Client
//!
//! Turns a shared Google Maps link into a restaurant record:
//! - `find_place_id`: text search (`findplacefromtext`) for a place id
//! - `place_details`: details lookup mapped into [`RestaurantDetails`]
//! - [`resolve_place`]: link parsing, shortened link expansion, and text
//!   search fallback for links without a canonical place id
//!
//! # API Reference
//! Google Places API: <https://developers.google.com/maps/documentation/places/web-service>

use super::maps_url::resolve_maps_url;
use super::url_resolver::UrlResolver;
use crate::utils::http_client::shared_client;
use platewise_core::constants::env_vars;
use platewise_core::constants::google::{
    CANONICAL_PLACE_ID_PREFIX, PHOTO_MAX_WIDTH, PLACES_API_BASE_URL, PLACE_DETAILS_FIELDS,
};
use platewise_core::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use url::Url;

const SERVICE_NAME: &str = "Google Places API";

const NAME_FALLBACK: &str = "Restaurant Name Not Available";
const ADDRESS_FALLBACK: &str = "Address Not Available";
const HOURS_FALLBACK: &str = "Hours not available";
const PHONE_FALLBACK: &str = "Phone Not Available";

/// Google Places client configuration
#[derive(Debug, Clone)]
pub struct PlacesClientConfig {
    /// Places API key
    pub api_key: String,
    /// Base URL of the Places web service (default: <https://maps.googleapis.com/maps/api/place>)
    pub base_url: String,
}

impl Default for PlacesClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: PLACES_API_BASE_URL.to_owned(),
        }
    }
}

/// Restaurant record ready for display
///
/// Missing fields carry display defaults rather than being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetails {
    /// Place id the details were fetched for
    pub id: String,
    /// Restaurant name
    pub name: String,
    /// Average rating, 0 when unrated
    pub rating: f64,
    /// Number of ratings
    pub reviews: u32,
    /// Formatted address
    pub address: String,
    /// First line of the weekly opening hours
    pub hours: String,
    /// Formatted phone number
    pub phone: String,
    /// Website, empty when unknown
    pub website: String,
    /// Photo URLs
    pub photos: Vec<String>,
    /// Price level 0-4
    pub price_level: u8,
    /// Place types reported by Google
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
}

/// Place id found for a shared link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPlace {
    /// Canonical place id
    pub place_id: String,
    /// Expanded URL, when the link had to be resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FindPlaceResponse {
    status: String,
    #[serde(default)]
    candidates: Vec<PlaceCandidate>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceCandidate {
    place_id: String,
}

#[derive(Debug, Deserialize)]
struct PlaceDetailsResponse {
    status: String,
    result: Option<PlaceResult>,
    error_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PlaceResult {
    name: Option<String>,
    rating: Option<f64>,
    user_ratings_total: Option<u32>,
    formatted_address: Option<String>,
    formatted_phone_number: Option<String>,
    opening_hours: Option<OpeningHours>,
    website: Option<String>,
    price_level: Option<u8>,
    #[serde(default)]
    photos: Vec<PlacePhoto>,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct OpeningHours {
    #[serde(default)]
    weekday_text: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PlacePhoto {
    photo_reference: String,
}

/// Whether `place_id` has the canonical `ChIJ...` form accepted by the details endpoint
#[must_use]
pub fn is_canonical_place_id(place_id: &str) -> bool {
    place_id.starts_with(CANONICAL_PLACE_ID_PREFIX)
}

/// Text to search for when a link carries no usable place id
///
/// Uses the `q` query parameter, otherwise the last path segment that is
/// neither a `@lat,lng` viewport nor a `data=` blob. Percent escapes are
/// decoded and `+` reads as a space.
#[must_use]
pub fn extract_search_query(resolved_url: &str) -> Option<String> {
    let url = Url::parse(resolved_url).ok()?;

    if let Some((_, q)) = url
        .query_pairs()
        .find(|(key, value)| key == "q" && !value.trim().is_empty())
    {
        return Some(q.trim().to_owned());
    }

    let segment = url
        .path_segments()?
        .rev()
        .find(|s| !s.is_empty() && !s.starts_with('@') && !s.starts_with("data="))?;
    let spaced = segment.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map_or_else(|_| spaced.clone(), |d| d.into_owned());
    let query = decoded.trim();

    (!query.is_empty()).then(|| query.to_owned())
}

fn api_error(status: &str, error_message: Option<String>) -> AppError {
    let message = error_message.map_or_else(|| status.to_owned(), |m| format!("{status}: {m}"));
    match status {
        "REQUEST_DENIED" => AppError::new(
            ErrorCode::ExternalAuthFailed,
            format!("{SERVICE_NAME} rejected the request: {message}"),
        ),
        "OVER_QUERY_LIMIT" | "UNKNOWN_ERROR" => AppError::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{SERVICE_NAME} unavailable: {message}"),
        ),
        _ => AppError::external_service(SERVICE_NAME, message),
    }
}

/// Google Places API client
#[derive(Debug, Clone)]
pub struct PlacesClient {
    config: PlacesClientConfig,
    http_client: reqwest::Client,
}

impl PlacesClient {
    /// Create a client using the shared HTTP client
    #[must_use]
    pub fn new(config: PlacesClientConfig) -> Self {
        Self::with_client(config, shared_client().clone())
    }

    /// Create a client with a specific HTTP client
    #[must_use]
    pub const fn with_client(config: PlacesClientConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn api_key(&self) -> AppResult<&str> {
        if self.config.api_key.is_empty() {
            return Err(AppError::config_missing(env_vars::GOOGLE_PLACES_API_KEY));
        }
        Ok(&self.config.api_key)
    }

    /// Photo URL for a photo reference
    #[must_use]
    pub fn photo_url(&self, photo_reference: &str) -> String {
        format!(
            "{}/photo?maxwidth={PHOTO_MAX_WIDTH}&photo_reference={}&key={}",
            self.config.base_url,
            urlencoding::encode(photo_reference),
            urlencoding::encode(&self.config.api_key),
        )
    }

    async fn get_json(&self, endpoint: &str, query: &[(&str, &str)]) -> AppResult<String> {
        let url = format!("{}/{endpoint}/json", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE_NAME, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, endpoint, "Places API request failed");
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("HTTP {status}: {body}"),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::external_service(SERVICE_NAME, e.to_string()))
    }

    /// Search for a place by free text and return the first candidate's id
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, the request fails, or the
    /// API reports a status other than `OK`/`ZERO_RESULTS`
    #[instrument(skip(self))]
    pub async fn find_place_id(&self, query: &str) -> AppResult<Option<String>> {
        if query.trim().is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }
        let key = self.api_key()?;

        let body = self
            .get_json(
                "findplacefromtext",
                &[
                    ("input", query),
                    ("inputtype", "textquery"),
                    ("fields", "place_id,name"),
                    ("key", key),
                ],
            )
            .await?;
        Self::parse_find_place_response(&body)
    }

    /// Fetch details for a canonical place id
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not canonical, the API key is missing,
    /// the request fails, or the API reports a status other than `OK`
    #[instrument(skip(self))]
    pub async fn place_details(&self, place_id: &str) -> AppResult<RestaurantDetails> {
        if !is_canonical_place_id(place_id) {
            return Err(AppError::invalid_input(format!(
                "Invalid place id format: {place_id}"
            )));
        }
        let key = self.api_key()?;

        let body = self
            .get_json(
                "details",
                &[
                    ("place_id", place_id),
                    ("fields", PLACE_DETAILS_FIELDS),
                    ("key", key),
                ],
            )
            .await?;
        let details = self.parse_details_response(place_id, &body)?;
        info!(place_id, name = %details.name, "Fetched place details");
        Ok(details)
    }

    /// First candidate id of a `findplacefromtext` response body
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON or an error status
    pub fn parse_find_place_response(body: &str) -> AppResult<Option<String>> {
        let response: FindPlaceResponse = serde_json::from_str(body).map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        match response.status.as_str() {
            "OK" => Ok(response
                .candidates
                .into_iter()
                .next()
                .map(|candidate| candidate.place_id)),
            "ZERO_RESULTS" => Ok(None),
            status => Err(api_error(status, response.error_message)),
        }
    }

    /// [`RestaurantDetails`] of a `details` response body
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, an error status, or a missing result
    pub fn parse_details_response(
        &self,
        place_id: &str,
        body: &str,
    ) -> AppResult<RestaurantDetails> {
        let response: PlaceDetailsResponse = serde_json::from_str(body).map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        match response.status.as_str() {
            "OK" => {}
            "NOT_FOUND" | "ZERO_RESULTS" => {
                return Err(AppError::not_found(format!("Place {place_id}")));
            }
            status => return Err(api_error(status, response.error_message)),
        }

        let result = response
            .result
            .ok_or_else(|| AppError::not_found(format!("Place {place_id}")))?;
        Ok(self.restaurant_details(place_id, result))
    }

    fn restaurant_details(&self, place_id: &str, result: PlaceResult) -> RestaurantDetails {
        RestaurantDetails {
            id: place_id.to_owned(),
            name: result.name.unwrap_or_else(|| NAME_FALLBACK.to_owned()),
            rating: result.rating.unwrap_or_default(),
            reviews: result.user_ratings_total.unwrap_or_default(),
            address: result
                .formatted_address
                .unwrap_or_else(|| ADDRESS_FALLBACK.to_owned()),
            hours: result
                .opening_hours
                .and_then(|hours| hours.weekday_text.into_iter().next())
                .unwrap_or_else(|| HOURS_FALLBACK.to_owned()),
            phone: result
                .formatted_phone_number
                .unwrap_or_else(|| PHONE_FALLBACK.to_owned()),
            website: result.website.unwrap_or_default(),
            photos: result
                .photos
                .iter()
                .map(|photo| self.photo_url(&photo.photo_reference))
                .collect(),
            price_level: result.price_level.unwrap_or_default(),
            types: result.types,
        }
    }
}

/// Find the canonical place id behind a shared Google Maps link
///
/// A canonical id in the link (after expanding shortened links) is returned
/// directly. Otherwise the link is expanded, a search query is taken from
/// it, and the first text search candidate is used.
///
/// # Errors
///
/// Returns an error if the link is not a URL, expansion fails, no search
/// query can be extracted, the search fails, or nothing is found
#[instrument(skip(resolver, places))]
pub async fn resolve_place(
    url: &str,
    resolver: &dyn UrlResolver,
    places: &PlacesClient,
) -> AppResult<ResolvedPlace> {
    let parsed = resolve_maps_url(url, resolver).await?;

    if let Some(place_id) = parsed.place_id().map(str::to_owned) {
        if is_canonical_place_id(&place_id) {
            debug!(%place_id, "Canonical place id found in link");
            return Ok(ResolvedPlace {
                place_id,
                resolved_url: parsed.resolved_url,
            });
        }
        debug!(%place_id, "Legacy place id in link, falling back to text search");
    }

    let resolved_url = match parsed.resolved_url {
        Some(resolved) => resolved,
        None => resolver.resolve(url).await?,
    };

    let query = extract_search_query(&resolved_url).ok_or_else(|| {
        warn!(%resolved_url, "No search query in resolved URL");
        AppError::invalid_input("Could not extract search query")
    })?;
    debug!(%query, "Searching for place");

    let place_id = places
        .find_place_id(&query)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Place matching '{query}'")))?;

    Ok(ResolvedPlace {
        place_id,
        resolved_url: Some(resolved_url),
    })
}
