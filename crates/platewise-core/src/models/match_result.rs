// ABOUTME: Match result produced for each menu item and its coarse display category
// ABOUTME: Category is derived from the final score through fixed thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::menu::MenuItem;
use crate::constants::scoring;
use serde::{Deserialize, Serialize};

/// Coarse bucket of a match score used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchCategory {
    /// Score at or above the perfect threshold
    Perfect,
    /// Score at or above the good threshold
    Good,
    /// Anything between warning and good
    #[default]
    Neutral,
    /// Score below the warning threshold
    Warning,
}

impl MatchCategory {
    /// Category of a final score under the given thresholds
    ///
    /// Checks run perfect, good, then warning; a score that is neither high
    /// enough nor low enough is neutral.
    #[must_use]
    pub const fn from_score(score: u32, thresholds: &CategoryThresholds) -> Self {
        if score >= thresholds.perfect {
            Self::Perfect
        } else if score >= thresholds.good {
            Self::Good
        } else if score < thresholds.warning_below {
            Self::Warning
        } else {
            Self::Neutral
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect match",
            Self::Good => "Good match",
            Self::Neutral => "Neutral",
            Self::Warning => "Warning",
        }
    }

    /// Badge text used when no generated match message is available
    #[must_use]
    pub const fn fallback_message(&self) -> &'static str {
        match self {
            Self::Warning => scoring::FALLBACK_WARNING_MESSAGE,
            Self::Perfect | Self::Good | Self::Neutral => scoring::FALLBACK_MATCH_MESSAGE,
        }
    }
}

/// Score boundaries between match categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryThresholds {
    /// Minimum score for `perfect`
    pub perfect: u32,
    /// Minimum score for `good`
    pub good: u32,
    /// Scores strictly below this are `warning`
    pub warning_below: u32,
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            perfect: scoring::PERFECT_THRESHOLD,
            good: scoring::GOOD_THRESHOLD,
            warning_below: scoring::WARNING_BELOW,
        }
    }
}

/// How well one menu item fits one user's preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Final score in `0..=100`
    pub score: u8,
    /// Display bucket derived from `score`
    pub category: MatchCategory,
    /// First positive reason recorded, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// First dietary warning recorded, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl MatchResult {
    /// Note to show next to the item: the warning for warning matches,
    /// otherwise the reason
    #[must_use]
    pub fn highlight(&self) -> Option<&str> {
        match self.category {
            MatchCategory::Warning => self.warning.as_deref(),
            MatchCategory::Perfect | MatchCategory::Good | MatchCategory::Neutral => {
                self.reason.as_deref()
            }
        }
    }
}

/// A menu item paired with its match result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMenuItem {
    /// The scored item
    #[serde(flatten)]
    pub item: MenuItem,
    /// Its match result
    pub analysis: MatchResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        let thresholds = CategoryThresholds::default();
        assert_eq!(MatchCategory::from_score(100, &thresholds), MatchCategory::Perfect);
        assert_eq!(MatchCategory::from_score(90, &thresholds), MatchCategory::Perfect);
        assert_eq!(MatchCategory::from_score(89, &thresholds), MatchCategory::Good);
        assert_eq!(MatchCategory::from_score(75, &thresholds), MatchCategory::Good);
        assert_eq!(MatchCategory::from_score(74, &thresholds), MatchCategory::Neutral);
        assert_eq!(MatchCategory::from_score(40, &thresholds), MatchCategory::Neutral);
        assert_eq!(MatchCategory::from_score(39, &thresholds), MatchCategory::Warning);
        assert_eq!(MatchCategory::from_score(0, &thresholds), MatchCategory::Warning);
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(MatchCategory::Warning.fallback_message(), "Check ingredients ⚠️");
        assert_eq!(MatchCategory::Good.fallback_message(), "Possible match 🤔");
    }

    #[test]
    fn test_highlight_prefers_warning_for_warning_matches() {
        let result = MatchResult {
            score: 20,
            category: MatchCategory::Warning,
            reason: Some("Vegetarian-friendly option".into()),
            warning: Some("Contains gluten - not gluten-free".into()),
        };
        assert_eq!(result.highlight(), Some("Contains gluten - not gluten-free"));
    }

    #[test]
    fn test_scored_item_serializes_flat() {
        let scored = ScoredMenuItem {
            item: MenuItem::new("7", "Tofu Curry"),
            analysis: MatchResult {
                score: 50,
                category: MatchCategory::Neutral,
                reason: Some("Standard menu option".into()),
                warning: None,
            },
        };
        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["analysis"]["category"], "neutral");
        assert!(json["analysis"].get("warning").is_none());
    }
}
