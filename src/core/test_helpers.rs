//! Shared test utilities for core module tests
//!
//! Provides common test helpers to avoid duplication across test suites.
//! This module is only compiled in test mode.

use crate::core::catalog::{Catalog, MenuItem};

/// Creates a test item with customizable category and price.
pub fn create_test_item(title: &str, category: &str, price: f64) -> MenuItem {
    MenuItem::new(category, title, format!("House {}", title.to_lowercase()), price)
}

/// Creates a test item with dietary tags and a popularity score.
pub fn create_tagged_item(
    title: &str,
    category: &str,
    price: f64,
    tags: &[&str],
    popularity: u32,
) -> MenuItem {
    create_test_item(title, category, price)
        .with_dietary_tags(tags.iter().map(ToString::to_string).collect())
        .with_popularity(popularity)
}

/// Creates the canonical test catalog used across engine tests.
///
/// Six items spanning three categories, with overlapping prices so sort
/// stability is observable, and a mix of dietary tags.
pub fn create_test_catalog() -> Catalog {
    Catalog::new(vec![
        create_tagged_item("Bruschetta", "appetizer", 8.5, &["vegan"], 40),
        create_tagged_item("Caesar Salad", "appetizer", 12.0, &["gluten-free"], 55),
        create_tagged_item("Margherita Pizza", "main", 16.0, &["vegetarian"], 80),
        create_tagged_item("Grilled Salmon", "main", 24.0, &["gluten-free"], 63),
        create_tagged_item("Ribeye Steak", "main", 38.0, &[], 72),
        create_tagged_item("Tiramisu", "dessert", 9.0, &["vegetarian"], 67),
    ])
}

/// Titles of the given items, in order. Keeps assertions readable.
pub fn titles(items: &[&MenuItem]) -> Vec<String> {
    items.iter().map(|item| item.title.clone()).collect()
}
