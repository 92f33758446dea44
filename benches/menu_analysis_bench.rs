// ABOUTME: Criterion benchmarks for menu match scoring and Maps link parsing
// ABOUTME: Measures per-item scoring, whole-menu ranking, and place id extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Criterion benchmarks for menu analysis.
//!
//! Measures the scorer on generated menus of increasing size and the
//! Maps link parser on each supported link shape.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use platewise::external::maps_url::parse_maps_url;
use platewise::intelligence::MenuMatchScorer;
use platewise::models::{MenuItem, MenuSection, UserPreferences};

const DISHES: &[(&str, &str)] = &[
    ("Chicken Caesar Salad", "Romaine, parmesan, croutons, grilled chicken"),
    ("Quinoa Buddha Bowl", "Quinoa, chickpeas, avocado, tahini"),
    ("Margherita Pizza", "Tomato, mozzarella, basil, wheat crust"),
    ("Thai Green Curry", "Coconut milk, tofu, bamboo shoots, jasmine rice"),
    ("Beef Bulgogi", "Marinated beef, rice, kimchi"),
    ("Pad Thai", "Rice noodles, egg, peanuts, shrimp"),
    ("Garden Salad", "Mixed greens, cucumber, tomato"),
    ("Salmon Teriyaki", "Glazed salmon, steamed rice, broccoli"),
];

/// Menu sizes to benchmark
const MENU_SIZES: &[usize] = &[10, 100, 1_000];

fn generate_menu(count: usize) -> Vec<MenuItem> {
    (0..count)
        .map(|index| {
            let (name, description) = DISHES[index % DISHES.len()];
            MenuItem::new(index.to_string(), name).with_description(description)
        })
        .collect()
}

fn sample_preferences() -> UserPreferences {
    UserPreferences {
        dietary_restrictions: vec!["vegetarian".into(), "nut-free".into()],
        favorite_proteins: vec!["tofu".into(), "quinoa".into()],
        favorite_cuisines: vec!["thai".into()],
        favorite_ingredients: vec!["avocado".into(), "basil".into()],
    }
}

fn bench_score_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_item");
    let scorer = MenuMatchScorer::default();
    let preferences = sample_preferences();

    for (name, description) in DISHES.iter().take(4) {
        let item = MenuItem::new("1", *name).with_description(*description);
        group.bench_with_input(BenchmarkId::from_parameter(name), &item, |b, item| {
            b.iter(|| scorer.score_item(black_box(item), black_box(&preferences)));
        });
    }

    group.finish();
}

fn bench_rank_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_items");
    let scorer = MenuMatchScorer::default();
    let preferences = sample_preferences();

    for &count in MENU_SIZES {
        let menu = generate_menu(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &menu, |b, menu| {
            b.iter(|| scorer.rank_items(black_box(menu), black_box(&preferences)));
        });
    }

    group.finish();
}

fn bench_analyze_sections(c: &mut Criterion) {
    let scorer = MenuMatchScorer::default();
    let preferences = sample_preferences();
    let sections: Vec<MenuSection> = ["Starters", "Mains", "Desserts", "Drinks"]
        .iter()
        .map(|name| MenuSection {
            name: (*name).to_owned(),
            items: generate_menu(25),
        })
        .collect();

    c.bench_function("analyze_sections_4x25", |b| {
        b.iter(|| scorer.analyze_sections(black_box(&sections), Some(black_box(&preferences))));
    });
}

fn bench_parse_maps_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_maps_url");
    let links = [
        (
            "place_id_param",
            "https://www.google.com/maps/place/?q=place_id:ChIJN1t_tDeuEmsRUsoyG83frY4",
        ),
        (
            "data_token",
            "https://www.google.com/maps/place/Joe%27s+Pizza/@40.73,-73.99,17z/data=!4m6!3m5!1sChIJifIePKtZwokRVZ-UdRGkZzs!8m2",
        ),
        (
            "coordinates",
            "https://www.google.com/maps/@37.7749295,-122.4194155,14z",
        ),
        ("shortened", "https://maps.app.goo.gl/abc123XYZ"),
    ];

    for (name, link) in links {
        group.bench_with_input(BenchmarkId::from_parameter(name), link, |b, link| {
            b.iter(|| parse_maps_url(black_box(link)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_score_item,
    bench_rank_items,
    bench_analyze_sections,
    bench_parse_maps_url
);
criterion_main!(benches);
