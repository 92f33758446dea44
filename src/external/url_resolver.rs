// ABOUTME: Redirect-following resolution of shortened Google Maps links
// ABOUTME: UrlResolver trait seam with a reqwest implementation for production use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::utils::http_client::{create_custom_client, HttpClientSettings};
use async_trait::async_trait;
use platewise_core::constants::http::MAX_REDIRECTS;
use platewise_core::errors::MapsUrlError;
use reqwest::redirect::Policy;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Expands a URL by following its redirects
#[async_trait]
pub trait UrlResolver: Send + Sync {
    /// Final URL after all redirects
    ///
    /// # Errors
    ///
    /// Returns `MapsUrlError::ResolutionFailed` on any network failure
    async fn resolve(&self, url: &str) -> Result<String, MapsUrlError>;
}

/// [`UrlResolver`] issuing a GET and reporting the URL it landed on
#[derive(Debug, Clone)]
pub struct HttpUrlResolver {
    client: Client,
}

impl HttpUrlResolver {
    /// Create a resolver with the given client settings
    ///
    /// Redirects are followed up to a fixed limit.
    #[must_use]
    pub fn new(settings: &HttpClientSettings) -> Self {
        let client = create_custom_client(settings, |builder| {
            builder.redirect(Policy::limited(MAX_REDIRECTS))
        });
        Self { client }
    }

    /// Wrap an existing client; its redirect policy is used as is
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpUrlResolver {
    fn default() -> Self {
        Self::new(&HttpClientSettings::default())
    }
}

#[async_trait]
impl UrlResolver for HttpUrlResolver {
    #[instrument(skip(self))]
    async fn resolve(&self, url: &str) -> Result<String, MapsUrlError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(error = %e, "Failed to resolve URL");
            MapsUrlError::resolution_failed(url)
        })?;

        let resolved = response.url().to_string();
        debug!(status = %response.status(), %resolved, "URL resolved");
        Ok(resolved)
    }
}
