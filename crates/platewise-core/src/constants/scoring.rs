// ABOUTME: Menu match scoring defaults, category thresholds, and reason texts
// ABOUTME: Shared by the scoring engine, its configuration, and the dietary keyword table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Score every item starts from
pub const BASE_SCORE: u32 = 50;

/// Score an item is reset to when it violates a dietary restriction
pub const VIOLATION_SCORE: u32 = 20;

/// Score added when an item is compliant with a restriction that rewards compliance
pub const COMPLIANT_BONUS: u32 = 30;

/// Score added on a favorite protein match
pub const PROTEIN_MATCH_SCORE: u32 = 35;
/// Secondary bonus added on a favorite protein match
pub const PROTEIN_MATCH_BONUS: u32 = 10;

/// Score added on a favorite cuisine match
pub const CUISINE_MATCH_SCORE: u32 = 25;
/// Secondary bonus added on a favorite cuisine match
pub const CUISINE_MATCH_BONUS: u32 = 5;

/// Score added on a favorite ingredient match
pub const INGREDIENT_MATCH_SCORE: u32 = 20;
/// Secondary bonus added on a favorite ingredient match
pub const INGREDIENT_MATCH_BONUS: u32 = 5;

/// Upper bound of a final score
pub const MAX_SCORE: u32 = 100;

/// Minimum score for a `perfect` match
pub const PERFECT_THRESHOLD: u32 = 90;
/// Minimum score for a `good` match
pub const GOOD_THRESHOLD: u32 = 75;
/// Scores below this are a `warning`
pub const WARNING_BELOW: u32 = 40;

/// Reason used when nothing matched and nothing was violated
pub const STANDARD_OPTION_REASON: &str = "Standard menu option";

/// Badge text shown for warning matches when no generated message is available
pub const FALLBACK_WARNING_MESSAGE: &str = "Check ingredients ⚠️";
/// Badge text shown for other matches when no generated message is available
pub const FALLBACK_MATCH_MESSAGE: &str = "Possible match 🤔";

/// Dietary restriction tags understood by the default keyword table
pub mod tags {
    /// No meat or fish
    pub const VEGETARIAN: &str = "vegetarian";
    /// No animal products
    pub const VEGAN: &str = "vegan";
    /// No gluten-containing ingredients
    pub const GLUTEN_FREE: &str = "gluten-free";
    /// No dairy products
    pub const DAIRY_FREE: &str = "dairy-free";
    /// No nuts
    pub const NUT_FREE: &str = "nut-free";
}
