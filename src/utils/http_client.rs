// ABOUTME: Shared HTTP client utilities with connection pooling and timeout configuration
// ABOUTME: Provides a singleton client and builders applying configured timeouts and user agent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use platewise_core::constants::http::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Global shared HTTP client with default configuration
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Timeouts and identity applied to outgoing requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientSettings {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for HttpClientSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpClientSettings {
    fn apply(&self, builder: ClientBuilder) -> ClientBuilder {
        builder
            .timeout(Duration::from_secs(self.timeout_secs))
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .user_agent(self.user_agent.clone())
    }
}

/// Get or create the shared HTTP client with default settings
///
/// This client uses connection pooling and reasonable timeouts.
/// Prefer this over creating new clients for better performance.
#[must_use]
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| create_client(&HttpClientSettings::default()))
}

/// Create a new HTTP client with the given settings
///
/// Falls back to a default client if the builder fails.
#[must_use]
pub fn create_client(settings: &HttpClientSettings) -> Client {
    create_custom_client(settings, |builder| builder)
}

/// Create a new HTTP client with the given settings and extra configuration
///
/// # Arguments
/// * `settings` - Timeouts and user agent
/// * `config_fn` - Function to further configure the `ClientBuilder`
///
/// Falls back to a default client if the builder fails.
#[must_use]
pub fn create_custom_client<F>(settings: &HttpClientSettings, config_fn: F) -> Client
where
    F: FnOnce(ClientBuilder) -> ClientBuilder,
{
    let builder = settings.apply(ClientBuilder::new());
    config_fn(builder).build().unwrap_or_else(|_| Client::new())
}
