// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, menu and preference fixtures, and a mock URL resolver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `platewise`

use async_trait::async_trait;
use platewise::errors::MapsUrlError;
use platewise::external::url_resolver::UrlResolver;
use platewise::models::{MenuItem, UserPreferences};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Menu item with a description
pub fn item(id: &str, name: &str, description: &str) -> MenuItem {
    MenuItem::new(id, name).with_description(description)
}

/// Preferences with only dietary restrictions
pub fn restrictions(tags: &[&str]) -> UserPreferences {
    UserPreferences {
        dietary_restrictions: tags.iter().map(|&t| t.to_owned()).collect(),
        ..UserPreferences::default()
    }
}

/// A small mixed menu
pub fn sample_menu() -> Vec<MenuItem> {
    vec![
        item("1", "Grilled Chicken Caesar Salad", "Romaine, parmesan cheese, croutons"),
        item("2", "Quinoa Buddha Bowl", "Quinoa, chickpeas, avocado, tahini"),
        item("3", "Margherita Pizza", "Tomato, mozzarella, basil"),
        item("4", "Thai Green Curry", "Tofu, coconut milk, jasmine rice"),
        item("5", "Garden Salad", "Mixed greens, cucumber, lemon vinaigrette"),
    ]
}

/// [`UrlResolver`] answering from a fixed table
///
/// Unknown URLs fail with `ResolutionFailed`, as a network error would.
#[derive(Default)]
pub struct MockUrlResolver {
    redirects: HashMap<String, String>,
    calls: AtomicUsize,
}

impl MockUrlResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `from` to `to`
    pub fn with_redirect(mut self, from: &str, to: &str) -> Self {
        self.redirects.insert(from.to_owned(), to.to_owned());
        self
    }

    /// Number of resolve calls made
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UrlResolver for MockUrlResolver {
    async fn resolve(&self, url: &str) -> Result<String, MapsUrlError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.redirects
            .get(url)
            .cloned()
            .ok_or_else(|| MapsUrlError::resolution_failed(url))
    }
}
