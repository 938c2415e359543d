//! Menu item data structures and snapshot ingestion
//!
//! This module defines the core data structures for representing a page's menu
//! catalog. The view layer extracts currently-rendered items into [`MenuItem`]
//! records (directly, or via a serialized [`Catalog`] snapshot) and hands them
//! to the filter engine in [`crate::core::filter`].
//!
//! # Item Structure
//!
//! A [`MenuItem`] carries:
//! - A category tag for exact-match filtering ("appetizer", "main", ...)
//! - Title and description text for substring search
//! - A price, `None` when the source value could not be parsed
//! - Dietary tags ("vegan", "gluten-free", ...), possibly empty
//! - A popularity score, 0 when the source omits one
//!
//! # Example
//!
//! ```
//! use menuboard::core::catalog::MenuItem;
//!
//! let item = MenuItem::new("appetizer", "Bruschetta", "Grilled bread, tomato, basil", 8.5)
//!     .with_dietary_tags(vec!["vegan".to_string()])
//!     .with_popularity(42);
//! assert_eq!(item.price, Some(8.5));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// Ordering applied to the visible subset of the catalog.
///
/// Wire values match the sort dropdown options the view layer emits.
/// `Copy` trait allows efficient passing by value for this small enum.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum SortKey {
    /// Keep catalog order
    #[default]
    #[strum(serialize = "none")]
    None,
    /// Cheapest first
    #[strum(serialize = "price-low")]
    PriceAscending,
    /// Most expensive first
    #[strum(serialize = "price-high")]
    PriceDescending,
    /// Alphabetical by title, case-folded
    #[strum(serialize = "name")]
    Name,
    /// Highest popularity score first
    #[strum(serialize = "popular")]
    PopularityDescending,
}

impl SortKey {
    /// Parses a sort dropdown value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSortKey`] for values outside the known set.
    pub fn parse(value: &str) -> Result<Self> {
        value
            .parse()
            .map_err(|_| Error::UnknownSortKey(value.to_string()))
    }

    /// Returns the wire value as a static string.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::PriceAscending => "price-low",
            SortKey::PriceDescending => "price-high",
            SortKey::Name => "name",
            SortKey::PopularityDescending => "popular",
        }
    }
}

/// A read-only snapshot of one rendered menu item.
///
/// Supplied by the view layer per filter pass. The numeric `price` is the
/// primary input; view layers that only have display text can go through
/// [`parse_price_text`], which fails closed (`None`) on garbage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Category tag, compared exactly against the selected filter
    pub category: String,
    /// Display title, searched case-insensitively
    pub title: String,
    /// Display description, searched case-insensitively
    pub description: String,
    /// Non-negative price; `None` marks an unparseable source value and
    /// fails price filtering closed
    pub price: Option<f64>,
    /// Dietary tags; an empty list matches no dietary requirement
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    /// Popularity score, 0 when the source omits one
    #[serde(default)]
    pub popularity: u32,

    // Cached fields (populated by rebuild_caches())
    #[serde(skip)]
    pub title_lowercase: String,
    #[serde(skip)]
    pub description_lowercase: String,
}

impl MenuItem {
    /// Creates an item with a known numeric price.
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        let mut item = Self {
            category: category.into(),
            title: title.into(),
            description: description.into(),
            price: Some(price),
            dietary_tags: Vec::new(),
            popularity: 0,
            title_lowercase: String::new(),
            description_lowercase: String::new(),
        };
        item.rebuild_caches();
        item
    }

    /// Creates an item whose price comes from rendered display text.
    ///
    /// Unparseable text leaves the price `None`, so the item is excluded by
    /// any price bound rather than raising.
    pub fn with_price_text(
        category: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        price_text: &str,
    ) -> Self {
        let mut item = Self::new(category, title, description, 0.0);
        item.price = parse_price_text(price_text);
        if item.price.is_none() {
            tracing::debug!("unparseable price text {price_text:?}");
        }
        item
    }

    pub fn with_dietary_tags(mut self, tags: Vec<String>) -> Self {
        self.dietary_tags = tags;
        self
    }

    pub fn with_popularity(mut self, popularity: u32) -> Self {
        self.popularity = popularity;
        self
    }

    /// Rebuilds the lowercase search caches.
    ///
    /// Must be called after mutating `title` or `description` directly;
    /// constructors and [`Catalog`] ingestion call it for you.
    pub fn rebuild_caches(&mut self) {
        self.title_lowercase = self.title.to_lowercase();
        self.description_lowercase = self.description.to_lowercase();
    }
}

/// The full unfiltered set of menu items for the current page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog, rebuilding each item's search caches.
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut catalog = Self { items };
        catalog.rebuild_caches();
        catalog
    }

    /// Ingests a serialized snapshot from the view layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Snapshot`] when the JSON does not describe a catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut catalog: Self = serde_json::from_str(json)?;
        catalog.rebuild_caches();
        tracing::debug!("catalog snapshot ingested with {} items", catalog.len());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rebuild_caches(&mut self) {
        for item in &mut self.items {
            item.rebuild_caches();
        }
    }
}

/// Extracts a numeric price from rendered display text.
///
/// Strips every character outside `[0-9.]`, then parses the remainder.
/// `"$12.50"` becomes `12.5`; text with no usable number becomes `None`.
pub fn parse_price_text(text: &str) -> Option<f64> {
    let numeric: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse::<f64>().ok().filter(|price| price.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_text_currency() {
        assert_eq!(parse_price_text("$12.50"), Some(12.5));
        assert_eq!(parse_price_text("USD 8"), Some(8.0));
        assert_eq!(parse_price_text("1,250.75"), Some(1250.75));
    }

    #[test]
    fn test_parse_price_text_garbage() {
        assert_eq!(parse_price_text("market price"), None);
        assert_eq!(parse_price_text(""), None);
        // Two decimal points survive the character strip but not the parse
        assert_eq!(parse_price_text("12.50.99"), None);
    }

    #[test]
    fn test_with_price_text_fails_closed() {
        let item = MenuItem::with_price_text("main", "Catch of the Day", "Ask your server", "TBD");
        assert_eq!(item.price, None);
    }

    #[test]
    fn test_rebuild_caches_tracks_title_edits() {
        let mut item = MenuItem::new("dessert", "Tiramisu", "Espresso-soaked ladyfingers", 9.0);
        item.title = "TIRAMISU CLASSICO".to_string();
        item.rebuild_caches();
        assert_eq!(item.title_lowercase, "tiramisu classico");
    }

    #[test]
    fn test_catalog_from_json_populates_caches() {
        let json = r#"{"items":[{"category":"main","title":"Grilled Salmon","description":"With lemon butter","price":24.0}]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items[0].title_lowercase, "grilled salmon");
        assert_eq!(catalog.items[0].popularity, 0);
        assert!(catalog.items[0].dietary_tags.is_empty());
    }

    #[test]
    fn test_catalog_from_json_rejects_malformed() {
        assert!(Catalog::from_json("not json").is_err());
    }

    #[test]
    fn test_sort_key_wire_values() {
        assert_eq!(SortKey::parse("price-low").unwrap(), SortKey::PriceAscending);
        assert_eq!(SortKey::parse("popular").unwrap(), SortKey::PopularityDescending);
        assert_eq!(SortKey::PriceDescending.as_str(), "price-high");
        assert_eq!(SortKey::default(), SortKey::None);
    }

    #[test]
    fn test_sort_key_unknown_value() {
        let err = SortKey::parse("newest").unwrap_err();
        assert!(err.to_string().contains("newest"));
    }
}
