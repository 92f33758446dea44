// ABOUTME: Cleanup of menu item names produced by menu extraction
// ABOUTME: Strips list numbering and markdown bold, and splits inline descriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use platewise_core::models::MenuItem;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Separator between a dish name and an inline description
const INLINE_DESCRIPTION_SEPARATOR: &str = " - ";

/// Markdown bold marker left behind by menu extraction
const BOLD_MARKER: &str = "**";

static LIST_NUMBER_PREFIX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "1. ", "12.", "3.   "
    Regex::new(r"^\d+\.\s*").ok()
});

/// Display name of a dish
///
/// `"3. **Pad Thai** - rice noodles"` becomes `"Pad Thai"`.
#[must_use]
pub fn clean_item_name(name: &str) -> String {
    let unnumbered = LIST_NUMBER_PREFIX
        .as_ref()
        .map_or(Cow::Borrowed(name), |pattern| pattern.replace(name, ""));
    let unbolded = unnumbered.replace(BOLD_MARKER, "");

    unbolded
        .split(INLINE_DESCRIPTION_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim()
        .to_owned()
}

/// Description to display for an item
///
/// An inline description in the name wins over the item's own description.
#[must_use]
pub fn display_description(item: &MenuItem) -> Option<String> {
    item.name
        .split(INLINE_DESCRIPTION_SEPARATOR)
        .nth(1)
        .map(|inline| inline.replace(BOLD_MARKER, "").trim().to_owned())
        .or_else(|| item.description.clone())
}

/// Copy of `item` with a clean name and its display description
#[must_use]
pub fn normalize_item(item: &MenuItem) -> MenuItem {
    MenuItem {
        id: item.id.clone(),
        name: clean_item_name(&item.name),
        description: display_description(item),
        category: item.category.clone(),
    }
}
