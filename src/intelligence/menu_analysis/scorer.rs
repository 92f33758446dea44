// ABOUTME: Preference match scorer ranking menu items against a user's preferences
// ABOUTME: Pure keyword heuristic with dietary checks, favorite bonuses, and stable ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::keywords::DietaryKeywordTable;
use crate::config::scoring::ScoringConfig;
use platewise_core::constants::scoring::{MAX_SCORE, STANDARD_OPTION_REASON};
use platewise_core::models::{
    MatchCategory, MatchResult, MenuItem, MenuSection, ScoredMenuItem, UserPreferences,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Scores menu items against user preferences
///
/// Scoring is a pure function of the item, the preferences, the weights and
/// the keyword table: the same inputs always give the same [`MatchResult`].
#[derive(Debug, Clone, Default)]
pub struct MenuMatchScorer {
    config: ScoringConfig,
    keywords: DietaryKeywordTable,
}

/// Ranked items of one menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMenu {
    /// Items ordered by descending score; ties keep menu order
    pub items: Vec<ScoredMenuItem>,
}

impl ScoredMenu {
    /// Match results keyed by item id
    #[must_use]
    pub fn details_by_id(&self) -> HashMap<&str, &MatchResult> {
        self.items
            .iter()
            .map(|scored| (scored.item.id.as_str(), &scored.analysis))
            .collect()
    }

    /// Number of ranked items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the menu had no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Ranked items of one menu section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSection {
    /// Section heading
    pub name: String,
    /// Items of the section, ranked within the section
    pub items: Vec<ScoredMenuItem>,
}

/// Running state of one scoring pass
struct MatchAccumulator {
    score: u32,
    bonus: u32,
    reason: Option<String>,
    warning: Option<String>,
}

impl MatchAccumulator {
    const fn new(base_score: u32) -> Self {
        Self {
            score: base_score,
            bonus: 0,
            reason: None,
            warning: None,
        }
    }

    const fn has_warning(&self) -> bool {
        self.warning.is_some()
    }

    /// Only the first reason is exposed
    fn note_reason(&mut self, reason: String) {
        if self.reason.is_none() {
            self.reason = Some(reason);
        }
    }

    /// Only the first warning is exposed
    fn note_warning(&mut self, warning: String) {
        if self.warning.is_none() {
            self.warning = Some(warning);
        }
    }

    fn add(&mut self, score: u32, bonus: u32) {
        self.score = self.score.saturating_add(score);
        self.bonus = self.bonus.saturating_add(bonus);
    }
}

/// First favorite mentioned in `text` (already lowercase), in list order
fn first_mentioned<'a>(text: &str, favorites: &'a [String]) -> Option<&'a str> {
    favorites
        .iter()
        .map(|favorite| favorite.trim())
        .find(|favorite| !favorite.is_empty() && text.contains(&favorite.to_lowercase()))
}

impl MenuMatchScorer {
    /// Create a scorer from a scoring configuration and a keyword table
    #[must_use]
    pub const fn new(config: ScoringConfig, keywords: DietaryKeywordTable) -> Self {
        Self { config, keywords }
    }

    /// Scoring configuration in use
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Keyword table in use
    #[must_use]
    pub const fn keywords(&self) -> &DietaryKeywordTable {
        &self.keywords
    }

    /// Score one item against one preference record
    ///
    /// Checks run in a fixed order: dietary rules (table order), favorite
    /// proteins, favorite cuisines, favorite ingredients. A dietary violation
    /// resets the running score to the violation score; compliance with a
    /// later rule still adds its bonus on top. Once a warning exists, protein
    /// and ingredient matches are skipped. Cuisine matches apply regardless.
    #[must_use]
    pub fn score_item(&self, item: &MenuItem, preferences: &UserPreferences) -> MatchResult {
        let weights = &self.config.weights;
        let text = item.searchable_text();
        let mut acc = MatchAccumulator::new(weights.base_score);

        for rule in self.keywords.active_rules(preferences) {
            if let Some(keyword) = rule.find_violation(&text) {
                debug!(item.id = %item.id, rule = %rule.tag, keyword, "Dietary violation");
                acc.score = weights.violation_score;
                acc.note_warning(rule.violation_warning.clone());
            } else if let Some(reason) = &rule.compliant_reason {
                acc.add(weights.compliant_bonus, 0);
                acc.note_reason(reason.clone());
            }
        }

        if !acc.has_warning() {
            if let Some(protein) = first_mentioned(&text, &preferences.favorite_proteins) {
                acc.add(weights.protein_score, weights.protein_bonus);
                acc.note_reason(format!("Features your preferred protein: {protein}"));
            }
        }

        if let Some(cuisine) = first_mentioned(&text, &preferences.favorite_cuisines) {
            acc.add(weights.cuisine_score, weights.cuisine_bonus);
            acc.note_reason(format!("Matches {cuisine} cuisine style"));
        }

        if !acc.has_warning() {
            if let Some(ingredient) = first_mentioned(&text, &preferences.favorite_ingredients) {
                acc.add(weights.ingredient_score, weights.ingredient_bonus);
                acc.note_reason(format!("Contains {ingredient} that you enjoy"));
            }
        }

        let final_score = acc.score.saturating_add(acc.bonus).min(MAX_SCORE);
        let category = MatchCategory::from_score(final_score, &self.config.thresholds);

        if acc.reason.is_none() && acc.warning.is_none() {
            acc.reason = Some(STANDARD_OPTION_REASON.to_owned());
        }

        debug!(
            item.id = %item.id,
            item.name = %item.name,
            score = final_score,
            category = ?category,
            "Scored menu item"
        );

        MatchResult {
            score: u8::try_from(final_score).unwrap_or(u8::MAX),
            category,
            reason: acc.reason,
            warning: acc.warning,
        }
    }

    /// Score every item and order by descending score
    ///
    /// The sort is stable: items with equal scores keep their menu order.
    #[must_use]
    pub fn rank_items(
        &self,
        items: &[MenuItem],
        preferences: &UserPreferences,
    ) -> Vec<ScoredMenuItem> {
        let mut scored: Vec<ScoredMenuItem> = items
            .iter()
            .map(|item| ScoredMenuItem {
                item: item.clone(),
                analysis: self.score_item(item, preferences),
            })
            .collect();
        scored.sort_by(|a, b| b.analysis.score.cmp(&a.analysis.score));
        scored
    }

    /// Rank a flat menu for a user
    ///
    /// Returns `None` when the user has no preference record: without
    /// preferences there is nothing to personalize, and scoring against an
    /// empty record would rate every dish as a standard option.
    #[instrument(
        skip(self, items, preferences),
        fields(items = items.len(), keyword_table = %self.keywords.version)
    )]
    pub fn analyze_menu(
        &self,
        items: &[MenuItem],
        preferences: Option<&UserPreferences>,
    ) -> Option<ScoredMenu> {
        let Some(preferences) = preferences else {
            debug!("No preferences available, skipping menu personalization");
            return None;
        };

        let ranked = ScoredMenu {
            items: self.rank_items(items, preferences),
        };

        info!(
            ranked = ranked.len(),
            top_score = ranked.items.first().map(|s| s.analysis.score),
            "Menu analysis complete"
        );
        Some(ranked)
    }

    /// Rank each menu section independently
    ///
    /// Returns `None` when the user has no preference record.
    #[instrument(
        skip(self, sections, preferences),
        fields(sections = sections.len(), keyword_table = %self.keywords.version)
    )]
    pub fn analyze_sections(
        &self,
        sections: &[MenuSection],
        preferences: Option<&UserPreferences>,
    ) -> Option<Vec<ScoredSection>> {
        let Some(preferences) = preferences else {
            debug!("No preferences available, skipping menu personalization");
            return None;
        };

        Some(
            sections
                .iter()
                .map(|section| ScoredSection {
                    name: section.name.clone(),
                    items: self.rank_items(&section.items, preferences),
                })
                .collect(),
        )
    }
}
