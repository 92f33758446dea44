// ABOUTME: Menu analysis module scoring dishes against dietary restrictions and favorites
// ABOUTME: Provides the match scorer, dietary keyword tables, and menu text cleanup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Menu Analysis Module
//!
//! Highlights recommended dishes on a restaurant menu for one user.
//!
//! ## Scoring
//!
//! Every item starts at 50. Active dietary restrictions are checked against
//! a [`DietaryKeywordTable`]: a banned keyword resets the score to 20 and
//! records a warning, while compliance with vegetarian or vegan adds 30.
//! Favorite proteins (+35, bonus +10), cuisines (+25, bonus +5) and
//! ingredients (+20, bonus +5) add on top; protein and ingredient matches
//! are ignored once a warning exists. The final score is capped at 100 and
//! bucketed into perfect (>= 90), good (>= 75), warning (< 40) or neutral.
//!
//! ## Example Usage
//!
//! ```rust
//! use platewise::intelligence::menu_analysis::MenuMatchScorer;
//! use platewise::models::{MatchCategory, MenuItem, UserPreferences};
//!
//! let scorer = MenuMatchScorer::default();
//! let preferences = UserPreferences {
//!     dietary_restrictions: vec!["vegetarian".into()],
//!     ..UserPreferences::default()
//! };
//! let result = scorer.score_item(&MenuItem::new("1", "Grilled Chicken Caesar Salad"), &preferences);
//! assert_eq!(result.score, 20);
//! assert_eq!(result.category, MatchCategory::Warning);
//! ```

/// Versioned dietary keyword tables
pub mod keywords;
/// Preference match scorer and menu ranking
pub mod scorer;
/// Menu item name and description cleanup
pub mod text;

pub use keywords::{DietaryKeywordTable, DietaryRule, DEFAULT_TABLE_VERSION};
pub use scorer::{MenuMatchScorer, ScoredMenu, ScoredSection};
pub use text::{clean_item_name, display_description, normalize_item};
