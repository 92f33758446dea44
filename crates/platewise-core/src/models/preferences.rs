// ABOUTME: User preference record read by the preference match scorer
// ABOUTME: Tolerates missing and null fields by treating them as empty lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Deserializer, Serialize};

/// Dietary restrictions and favorites of one user
///
/// Stored rows carry more columns (owner, timestamps); unknown fields are
/// ignored. Missing or `null` lists, and `null` entries inside a list, are
/// read as absent so a partially filled profile never fails to load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Dietary restriction tags, e.g. `vegetarian`, `Gluten-Free`
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub dietary_restrictions: Vec<String>,
    /// Favorite proteins, most preferred first
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub favorite_proteins: Vec<String>,
    /// Favorite cuisines, most preferred first
    #[serde(
        default,
        alias = "cuisine_preferences",
        deserialize_with = "lenient_string_list"
    )]
    pub favorite_cuisines: Vec<String>,
    /// Favorite ingredients, most preferred first
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub favorite_ingredients: Vec<String>,
}

impl UserPreferences {
    /// Whether no restriction and no favorite is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dietary_restrictions.is_empty()
            && self.favorite_proteins.is_empty()
            && self.favorite_cuisines.is_empty()
            && self.favorite_ingredients.is_empty()
    }

    /// Whether the given restriction tag is active, comparing normalized tags
    #[must_use]
    pub fn has_restriction(&self, tag: &str) -> bool {
        let wanted = normalize_restriction_tag(tag);
        self.dietary_restrictions
            .iter()
            .any(|active| normalize_restriction_tag(active) == wanted)
    }
}

/// Canonical form of a restriction tag: trimmed, lowercase, words joined by `-`
///
/// `"Gluten-Free"`, `"gluten free"` and `"GLUTEN_FREE"` all become `"gluten-free"`.
#[must_use]
pub fn normalize_restriction_tag(tag: &str) -> String {
    tag.trim()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(values.unwrap_or_default().into_iter().flatten().collect())
}
