// ABOUTME: Menu analysis command for platewise-cli
// ABOUTME: Loads menu, preferences, and scoring files and prints the ranked menu as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::helpers::io::{print_json, read_json};
use anyhow::Result;
use platewise::config::environment::ServerConfig;
use platewise::config::scoring::ScoringConfig;
use platewise::intelligence::menu_analysis::{normalize_item, MenuMatchScorer};
use platewise::logging::AppLogger;
use platewise::models::{MenuItem, MenuSection, UserPreferences};
use serde_json::json;
use std::path::Path;
use std::time::Instant;
use tracing::info;

fn normalize_items(items: &[MenuItem]) -> Vec<MenuItem> {
    items.iter().map(normalize_item).collect()
}

fn build_scorer(config: &ServerConfig, scoring: Option<&Path>) -> Result<MenuMatchScorer> {
    let scoring = match scoring {
        Some(path) => {
            let scoring: ScoringConfig = read_json(path)?;
            scoring.validate()?;
            scoring
        }
        None => ScoringConfig::default(),
    };
    Ok(MenuMatchScorer::new(scoring, config.load_keyword_table()?))
}

/// Rank a menu file and print the result
pub fn run(
    config: &ServerConfig,
    menu: &Path,
    preferences: Option<&Path>,
    scoring: Option<&Path>,
    sections: bool,
) -> Result<()> {
    let scorer = build_scorer(config, scoring)?;
    let preferences = preferences
        .map(read_json::<UserPreferences>)
        .transpose()?;
    let started = Instant::now();

    let (output, item_count) = if sections {
        let sections: Vec<MenuSection> = read_json(menu)?;
        let sections: Vec<MenuSection> = sections
            .into_iter()
            .map(|section| MenuSection {
                items: normalize_items(&section.items),
                name: section.name,
            })
            .collect();
        let item_count = sections.iter().map(|s| s.items.len()).sum();

        let output = scorer
            .analyze_sections(&sections, preferences.as_ref())
            .map_or_else(
                || json!({ "personalized": false, "sections": sections }),
                |ranked| json!({ "personalized": true, "sections": ranked }),
            );
        (output, item_count)
    } else {
        let items = normalize_items(&read_json::<Vec<MenuItem>>(menu)?);
        let item_count = items.len();

        let output = scorer
            .analyze_menu(&items, preferences.as_ref())
            .map_or_else(
                || json!({ "personalized": false, "items": items }),
                |ranked| {
                    json!({
                        "personalized": true,
                        "details": ranked.details_by_id(),
                        "items": ranked.items,
                    })
                },
            );
        (output, item_count)
    };

    if preferences.is_none() {
        info!("No preferences given, menu left unranked");
    }
    AppLogger::log_menu_analysis(
        item_count,
        preferences.is_some(),
        &scorer.keywords().version,
        u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
    );

    print_json(&output)
}
