// ABOUTME: Core data models shared between the scoring engine and its callers
// ABOUTME: Menu items and sections, user preferences, and per-item match results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Per-item match results and categories
pub mod match_result;
/// Menu items and sections
pub mod menu;
/// User taste and dietary preferences
pub mod preferences;

pub use match_result::{CategoryThresholds, MatchCategory, MatchResult, ScoredMenuItem};
pub use menu::{MenuItem, MenuSection};
pub use preferences::{normalize_restriction_tag, UserPreferences};
