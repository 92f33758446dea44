// ABOUTME: Integration tests for Google Maps link parsing and shortened-link resolution
// ABOUTME: Covers rule precedence, coordinates, shortened links, and resolver failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, MockUrlResolver};
use platewise::errors::{AppError, ErrorCode, MapsUrlError};
use platewise::external::maps_url::{
    parse_maps_url, resolve_maps_url, Coordinates, MapsLocation, PLACE_ID_RULES,
};

const PLACE_URL: &str =
    "https://www.google.com/maps/place/X/@40.7,-74.0,17z/data=!3m1!4b1!4m5!3m4!1sChIJabc123!";

// ============================================================================
// Synchronous Parsing
// ============================================================================

#[test]
fn test_place_url_yields_place_id() {
    let parsed = parse_maps_url(PLACE_URL).unwrap();

    assert_eq!(parsed.place_id(), Some("ChIJabc123"));
    assert_eq!(parsed.original_url, PLACE_URL);
    assert_eq!(parsed.resolved_url, None);
}

#[test]
fn test_place_id_is_preferred_over_coordinates() {
    let parsed = parse_maps_url(PLACE_URL).unwrap();
    assert!(parsed.coordinates().is_none());
}

#[test]
fn test_coordinates_only_url() {
    let parsed = parse_maps_url("https://www.google.com/maps/@-33.8688,151.2093,15z").unwrap();

    assert_eq!(
        parsed.location,
        MapsLocation::Coordinates {
            coordinates: Coordinates {
                lat: -33.8688,
                lng: 151.2093
            }
        }
    );
}

#[test]
fn test_place_id_query_parameter() {
    let parsed = parse_maps_url(
        "https://www.google.com/maps/search/?api=1&query=Pizza&place_id=ChIJparam123",
    )
    .unwrap();
    assert_eq!(parsed.place_id(), Some("ChIJparam123"));
}

#[test]
fn test_rules_run_in_priority_order() {
    let names: Vec<&str> = PLACE_ID_RULES.iter().map(|rule| rule.name).collect();
    assert_eq!(
        names,
        vec![
            "place_id_param",
            "query_place_id",
            "data_token",
            "data_token_tail",
            "hex_feature_id",
            "ftid_param"
        ]
    );
}

#[test]
fn test_unrecognized_url_is_unknown() {
    let raw = "https://www.example.com/restaurants/luigis";
    let parsed = parse_maps_url(raw).unwrap();

    assert_eq!(parsed.location, MapsLocation::Unknown);
    assert_eq!(parsed.original_url, raw);
}

#[test]
fn test_shortened_link_without_resolution() {
    let parsed = parse_maps_url("https://maps.app.goo.gl/AbC123xyz").unwrap();
    assert_eq!(parsed.location, MapsLocation::Shortened);
}

#[test]
fn test_invalid_input_is_an_error() {
    let error = parse_maps_url("not a url").unwrap_err();
    assert!(matches!(error, MapsUrlError::InvalidUrl { ref input, .. } if input == "not a url"));

    let app_error: AppError = error.into();
    assert_eq!(app_error.code, ErrorCode::InvalidFormat);
    assert_eq!(app_error.http_status(), 400);
}

#[test]
fn test_parse_result_serializes_as_tagged_object() {
    let json = serde_json::to_value(parse_maps_url(PLACE_URL).unwrap()).unwrap();

    assert_eq!(json["type"], "place_id");
    assert_eq!(json["placeId"], "ChIJabc123");
    assert_eq!(json["originalUrl"], PLACE_URL);
    assert!(json.get("resolvedUrl").is_none());
}

// ============================================================================
// Shortened Link Resolution
// ============================================================================

#[tokio::test]
async fn test_shortened_link_is_resolved_then_parsed() {
    init_test_logging();
    let resolver =
        MockUrlResolver::new().with_redirect("https://maps.app.goo.gl/AbC123", PLACE_URL);

    let parsed = resolve_maps_url("https://maps.app.goo.gl/AbC123", &resolver)
        .await
        .unwrap();

    assert_eq!(parsed.place_id(), Some("ChIJabc123"));
    assert_eq!(parsed.original_url, "https://maps.app.goo.gl/AbC123");
    assert_eq!(parsed.resolved_url.as_deref(), Some(PLACE_URL));
    assert_eq!(resolver.calls(), 1);
}

#[tokio::test]
async fn test_resolved_link_with_only_coordinates() {
    let resolver = MockUrlResolver::new().with_redirect(
        "https://goo.gl/maps/xyz",
        "https://www.google.com/maps/@51.5074,-0.1278,14z",
    );

    let parsed = resolve_maps_url("https://goo.gl/maps/xyz", &resolver)
        .await
        .unwrap();

    assert_eq!(
        parsed.coordinates(),
        Some(Coordinates {
            lat: 51.5074,
            lng: -0.1278
        })
    );
}

#[tokio::test]
async fn test_unrecognized_resolution_stays_shortened() {
    let resolver = MockUrlResolver::new()
        .with_redirect("https://g.co/kgs/abc", "https://www.google.com/search?q=pizza");

    let parsed = resolve_maps_url("https://g.co/kgs/abc", &resolver)
        .await
        .unwrap();

    assert_eq!(parsed.location, MapsLocation::Shortened);
    assert_eq!(
        parsed.resolved_url.as_deref(),
        Some("https://www.google.com/search?q=pizza")
    );
}

#[tokio::test]
async fn test_resolution_failure_propagates() {
    let resolver = MockUrlResolver::new();

    let error = resolve_maps_url("https://maps.app.goo.gl/Missing1", &resolver)
        .await
        .unwrap_err();

    assert_eq!(
        error,
        MapsUrlError::resolution_failed("https://maps.app.goo.gl/Missing1")
    );
    assert_eq!(resolver.calls(), 1);
}

#[tokio::test]
async fn test_regular_links_skip_the_resolver() {
    let resolver = MockUrlResolver::new();

    let parsed = resolve_maps_url(PLACE_URL, &resolver).await.unwrap();

    assert_eq!(parsed.place_id(), Some("ChIJabc123"));
    assert_eq!(resolver.calls(), 0);
}

#[tokio::test]
async fn test_short_link_carrying_a_place_id_skips_the_resolver() {
    let raw = "https://maps.app.goo.gl/AbC123?place_id=ChIJshort";
    let resolver = MockUrlResolver::new();

    let parsed = resolve_maps_url(raw, &resolver).await.unwrap();

    assert_eq!(parsed, parse_maps_url(raw).unwrap());
    assert_eq!(parsed.place_id(), Some("ChIJshort"));
    assert!(parsed.resolved_url.is_none());
    assert_eq!(resolver.calls(), 0);
}
