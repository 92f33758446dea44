// ABOUTME: Intelligence module for personalized menu recommendations
// ABOUTME: Hosts the menu analysis engine that ranks dishes for a user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Intelligence Module
//!
//! Personalization logic. Everything here is pure and synchronous: callers
//! pass the menu and the user's preferences in explicitly.

/// Menu item scoring against dietary restrictions and favorites
pub mod menu_analysis;

pub use menu_analysis::{DietaryKeywordTable, MenuMatchScorer, ScoredMenu, ScoredSection};
