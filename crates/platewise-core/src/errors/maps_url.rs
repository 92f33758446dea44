// ABOUTME: Error types for Google Maps link parsing and shortened-link resolution
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Failures surfaced while turning a pasted link into a place reference.
///
/// Unrecognized link shapes are not errors; they parse to an `unknown`
/// result. Only input that is not a URL at all, or a network failure while
/// following a shortened link, ends up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapsUrlError {
    /// The input could not be parsed as a URL
    #[error("Not a valid URL: {input}")]
    InvalidUrl {
        /// Raw input as received
        input: String,
        /// Parser message
        reason: String,
    },

    /// Following the redirect chain of a shortened link failed
    #[error("Failed to resolve shortened URL: {url}")]
    ResolutionFailed {
        /// Link that was being resolved
        url: String,
    },
}

impl MapsUrlError {
    /// Create an "invalid URL" error
    #[must_use]
    pub fn invalid_url(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a "resolution failed" error
    #[must_use]
    pub fn resolution_failed(url: impl Into<String>) -> Self {
        Self::ResolutionFailed { url: url.into() }
    }

    /// Error code used when this error is surfaced as an [`AppError`]
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidUrl { .. } => ErrorCode::InvalidFormat,
            Self::ResolutionFailed { .. } => ErrorCode::UrlResolutionFailed,
        }
    }
}

impl From<MapsUrlError> for AppError {
    fn from(error: MapsUrlError) -> Self {
        let details = match &error {
            MapsUrlError::InvalidUrl { input, reason } => {
                serde_json::json!({ "input": input, "reason": reason })
            }
            MapsUrlError::ResolutionFailed { url } => serde_json::json!({ "url": url }),
        };
        Self::new(error.error_code(), error.to_string()).with_details(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_failure_maps_to_bad_gateway() {
        let app_error: AppError = MapsUrlError::resolution_failed("https://goo.gl/maps/x").into();
        assert_eq!(app_error.code, ErrorCode::UrlResolutionFailed);
        assert_eq!(app_error.http_status(), 502);
        assert_eq!(app_error.context.details["url"], "https://goo.gl/maps/x");
    }

    #[test]
    fn test_invalid_url_maps_to_bad_request() {
        let app_error: AppError =
            MapsUrlError::invalid_url("not a link", "relative URL without a base").into();
        assert_eq!(app_error.code, ErrorCode::InvalidFormat);
        assert_eq!(app_error.http_status(), 400);
    }
}
