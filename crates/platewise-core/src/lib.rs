// ABOUTME: Core types and constants for the Platewise menu matching platform
// ABOUTME: Foundation crate with error handling, menu and preference models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Platewise Core
//!
//! Foundation crate providing shared types and constants for the Platewise
//! menu matching platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Menu items, user preferences, and match results

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (menu items, preferences, match results)
pub mod models;
