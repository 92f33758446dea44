// ABOUTME: Versioned mapping from dietary restriction tag to banned keyword set
// ABOUTME: Default table covers vegetarian, vegan, gluten-free, dairy-free, and nut-free
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Dietary keyword tables
//!
//! A restriction is checked by scanning the item text for any of its banned
//! keywords. Rules run in table order, so the order of `rules` decides which
//! warning and which reason an item shows first. Tables can be loaded from
//! JSON to swap in fixtures or updated keyword lists without a release.

use crate::config::error::ConfigError;
use platewise_core::constants::scoring::tags;
use platewise_core::models::{normalize_restriction_tag, UserPreferences};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Version stamp of the built-in table
pub const DEFAULT_TABLE_VERSION: &str = "2025.1";

const MEAT_KEYWORDS: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "fish",
    "seafood",
    "lamb",
    "turkey",
    "bacon",
    "ham",
    "sausage",
    "prosciutto",
    "salami",
    "pepperoni",
];

const DAIRY_EGG_KEYWORDS: &[&str] = &["cheese", "cream", "milk", "egg", "butter", "yogurt", "mayo"];

const GLUTEN_KEYWORDS: &[&str] = &["bread", "pasta", "flour", "wheat", "breaded", "battered"];

const DAIRY_KEYWORDS: &[&str] = &["cheese", "cream", "milk", "butter", "yogurt", "ghee"];

const NUT_KEYWORDS: &[&str] = &[
    "peanut",
    "almond",
    "cashew",
    "walnut",
    "pecan",
    "pistachio",
    "hazelnut",
    "macadamia",
];

/// Keyword check for one dietary restriction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryRule {
    /// Restriction tag this rule applies to
    pub tag: String,
    /// Keywords whose presence violates the restriction
    pub banned_keywords: Vec<String>,
    /// Warning recorded on a violation
    pub violation_warning: String,
    /// Reason recorded when none of the keywords is present.
    /// Rules without one only ever penalize.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliant_reason: Option<String>,
}

impl DietaryRule {
    /// Create a violation-only rule
    #[must_use]
    pub fn new(tag: &str, banned_keywords: &[&str], violation_warning: &str) -> Self {
        Self {
            tag: normalize_restriction_tag(tag),
            banned_keywords: banned_keywords.iter().map(|k| k.to_lowercase()).collect(),
            violation_warning: violation_warning.to_owned(),
            compliant_reason: None,
        }
    }

    /// Reward compliant items with the given reason
    #[must_use]
    pub fn with_compliant_reason(mut self, reason: &str) -> Self {
        self.compliant_reason = Some(reason.to_owned());
        self
    }

    /// Whether compliant items earn the compliance bonus
    #[must_use]
    pub const fn rewards_compliance(&self) -> bool {
        self.compliant_reason.is_some()
    }

    /// First banned keyword found in `text`, which must already be lowercase
    #[must_use]
    pub fn find_violation(&self, text: &str) -> Option<&str> {
        self.banned_keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| !keyword.is_empty() && text.contains(&keyword.to_lowercase()))
    }

    fn applies_to(&self, preferences: &UserPreferences) -> bool {
        preferences.has_restriction(&self.tag)
    }
}

/// Named, versioned set of dietary rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryKeywordTable {
    /// Version stamp, reported with analysis results in logs
    pub version: String,
    /// Rules in evaluation order
    pub rules: Vec<DietaryRule>,
}

impl Default for DietaryKeywordTable {
    fn default() -> Self {
        Self {
            version: DEFAULT_TABLE_VERSION.to_owned(),
            rules: vec![
                DietaryRule::new(
                    tags::VEGETARIAN,
                    MEAT_KEYWORDS,
                    "Contains meat - not suitable for vegetarians",
                )
                .with_compliant_reason("Vegetarian-friendly option"),
                DietaryRule::new(
                    tags::VEGAN,
                    DAIRY_EGG_KEYWORDS,
                    "Contains dairy/eggs - not suitable for vegans",
                )
                .with_compliant_reason("Potentially vegan-friendly"),
                DietaryRule::new(
                    tags::GLUTEN_FREE,
                    GLUTEN_KEYWORDS,
                    "Contains gluten - not gluten-free",
                ),
                DietaryRule::new(
                    tags::DAIRY_FREE,
                    DAIRY_KEYWORDS,
                    "Contains dairy - not dairy-free",
                ),
                DietaryRule::new(tags::NUT_FREE, NUT_KEYWORDS, "Contains nuts - not nut-free"),
            ],
        }
    }
}

impl DietaryKeywordTable {
    /// Create a table from explicit rules
    #[must_use]
    pub fn new(version: impl Into<String>, rules: Vec<DietaryRule>) -> Self {
        Self {
            version: version.into(),
            rules,
        }
    }

    /// Look up the rule for a restriction tag
    #[must_use]
    pub fn rule(&self, tag: &str) -> Option<&DietaryRule> {
        let wanted = normalize_restriction_tag(tag);
        self.rules
            .iter()
            .find(|rule| normalize_restriction_tag(&rule.tag) == wanted)
    }

    /// Rules whose restriction is active in `preferences`, in table order
    pub fn active_rules<'a>(
        &'a self,
        preferences: &'a UserPreferences,
    ) -> impl Iterator<Item = &'a DietaryRule> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.applies_to(preferences))
    }

    /// Parse and validate a table from JSON
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and any error from [`Self::validate`]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let table: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    /// Read, parse and validate a table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read, otherwise as [`Self::from_json_str`]
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check the table is usable
    ///
    /// # Errors
    ///
    /// Returns an error when the version or a tag is empty, a rule has no
    /// keywords, a keyword is blank, or two rules share a tag
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::MissingField("version"));
        }

        let mut seen = HashSet::new();
        for rule in &self.rules {
            let tag = normalize_restriction_tag(&rule.tag);
            if tag.is_empty() {
                return Err(ConfigError::MissingField("rules[].tag"));
            }
            if rule.banned_keywords.is_empty() {
                return Err(ConfigError::MissingField("rules[].banned_keywords"));
            }
            if rule.banned_keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::Parse(format!(
                    "rule '{tag}' contains a blank keyword"
                )));
            }
            if !seen.insert(tag.clone()) {
                return Err(ConfigError::DuplicateRule(tag));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let table = DietaryKeywordTable::default();
        assert!(table.validate().is_ok());
        assert_eq!(table.version, DEFAULT_TABLE_VERSION);
        assert!(table.rule("Vegetarian").is_some());
        assert!(table.rule("gluten free").is_some());
        assert!(table.rule("halal").is_none());
    }

    #[test]
    fn test_only_plant_based_rules_reward_compliance() {
        let table = DietaryKeywordTable::default();
        assert!(table.rule(tags::VEGETARIAN).unwrap().rewards_compliance());
        assert!(table.rule(tags::VEGAN).unwrap().rewards_compliance());
        assert!(!table.rule(tags::GLUTEN_FREE).unwrap().rewards_compliance());
        assert!(!table.rule(tags::NUT_FREE).unwrap().rewards_compliance());
    }

    #[test]
    fn test_find_violation_returns_first_keyword() {
        let table = DietaryKeywordTable::default();
        let vegetarian = table.rule(tags::VEGETARIAN).unwrap();
        assert_eq!(
            vegetarian.find_violation("grilled chicken caesar salad"),
            Some("chicken")
        );
        assert_eq!(vegetarian.find_violation("quinoa buddha bowl"), None);
    }

    #[test]
    fn test_active_rules_follow_table_order() {
        let table = DietaryKeywordTable::default();
        let preferences = UserPreferences {
            dietary_restrictions: vec!["Gluten-Free".into(), "vegan".into()],
            ..UserPreferences::default()
        };
        let active: Vec<&str> = table
            .active_rules(&preferences)
            .map(|rule| rule.tag.as_str())
            .collect();
        assert_eq!(active, vec!["vegan", "gluten-free"]);
    }

    #[test]
    fn test_duplicate_tags_rejected() {
        let json = r#"{
            "version": "test",
            "rules": [
                {"tag": "vegan", "banned_keywords": ["milk"], "violation_warning": "w"},
                {"tag": "Vegan", "banned_keywords": ["egg"], "violation_warning": "w"}
            ]
        }"#;
        assert!(matches!(
            DietaryKeywordTable::from_json_str(json),
            Err(ConfigError::DuplicateRule(tag)) if tag == "vegan"
        ));
    }

    #[test]
    fn test_rule_without_keywords_rejected() {
        let json = r#"{"version":"t","rules":[{"tag":"keto","banned_keywords":[],"violation_warning":"w"}]}"#;
        assert!(matches!(
            DietaryKeywordTable::from_json_str(json),
            Err(ConfigError::MissingField(_))
        ));
    }
}
