//! Menu catalog filtering and sorting
//!
//! The engine behind the menu page: given the catalog snapshot and the
//! current [`FilterState`], [`evaluate`] decides which items are visible and
//! [`sort_items`] orders the visible subset. Both are pure functions; the
//! view layer owns rendering, the adapter in [`crate::app`] owns event wiring.
//!
//! An item is visible iff it passes every active predicate: category match,
//! search-term match on title or description, inclusive price bound, and
//! dietary-tag intersection. Sorting never changes membership.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::catalog::{MenuItem, SortKey};

/// Category sentinel meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Price bound sentinel meaning "no price filter".
pub const UNBOUNDED_PRICE: f64 = f64::MAX;

/// The complete filter configuration for one page session.
///
/// Created once at page load with defaults, mutated in place by the adapter
/// layer (one mutation per user interaction), discarded on navigation. Every
/// field has a well-defined default, so "no filters applied" is always
/// representable and shows the full catalog. Mutating one field never
/// invalidates another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    /// Selected category, or [`ALL_CATEGORIES`]
    pub category: String,
    /// Normalized (lower-cased, trimmed) search query; empty means no search
    pub search_term: String,
    /// Inclusive upper price bound
    pub max_price: f64,
    /// An item must carry at least one of these tags; empty means no constraint
    pub required_dietary: BTreeSet<String>,
    /// Ordering applied to the visible subset
    pub sort_key: SortKey,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
            max_price: UNBOUNDED_PRICE,
            required_dietary: BTreeSet::new(),
            sort_key: SortKey::None,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
    }

    /// Stores the search query in normalized form.
    pub fn set_search_term(&mut self, raw: &str) {
        self.search_term = normalize_search_term(raw);
    }

    /// Sets the inclusive price bound. NaN (an empty slider) reads as unbounded.
    pub fn set_max_price(&mut self, max_price: f64) {
        self.max_price = if max_price.is_nan() {
            UNBOUNDED_PRICE
        } else {
            max_price
        };
    }

    /// Adds or removes one dietary requirement, mirroring a checkbox change.
    pub fn toggle_dietary(&mut self, tag: &str, required: bool) {
        if required {
            self.required_dietary.insert(tag.to_string());
        } else {
            self.required_dietary.remove(tag);
        }
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
    }

    /// Resets every field to its default; a subsequent [`evaluate`] returns
    /// the full catalog.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Normalizes a raw search query: trimmed and lower-cased.
pub fn normalize_search_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Decides whether one item passes every active predicate.
fn matches(item: &MenuItem, state: &FilterState) -> bool {
    if state.category != ALL_CATEGORIES && item.category != state.category {
        return false;
    }

    if !state.search_term.is_empty()
        && !item.title_lowercase.contains(&state.search_term)
        && !item.description_lowercase.contains(&state.search_term)
    {
        return false;
    }

    // An unparseable price fails closed rather than raising; NaN is treated
    // the same way.
    let Some(price) = item.price else {
        return false;
    };
    if price.is_nan() || price > state.max_price {
        return false;
    }

    // OR across required tags: one match is enough.
    if !state.required_dietary.is_empty()
        && !item
            .dietary_tags
            .iter()
            .any(|tag| state.required_dietary.contains(tag))
    {
        return false;
    }

    true
}

/// Returns the visible subset of `items` in catalog order.
///
/// Pure over its inputs; the caller renders visibility, updates the results
/// counter, and shows the empty-state indicator when the result is empty.
pub fn evaluate<'a>(items: &'a [MenuItem], state: &FilterState) -> Vec<&'a MenuItem> {
    items.iter().filter(|item| matches(item, state)).collect()
}

/// Stable-sorts the visible subset in place.
///
/// Membership never changes; ties keep catalog order. [`SortKey::None`] is
/// the identity.
pub fn sort_items(visible: &mut [&MenuItem], sort_key: SortKey) {
    match sort_key {
        SortKey::None => {}
        SortKey::PriceAscending => {
            visible.sort_by(|a, b| sort_price(a).total_cmp(&sort_price(b)));
        }
        SortKey::PriceDescending => {
            visible.sort_by(|a, b| sort_price(b).total_cmp(&sort_price(a)));
        }
        SortKey::Name => visible.sort_by(|a, b| a.title_lowercase.cmp(&b.title_lowercase)),
        SortKey::PopularityDescending => {
            visible.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        }
    }
}

// Unpriced items sink to the end of any price ordering.
fn sort_price(item: &MenuItem) -> f64 {
    item.price.unwrap_or(f64::MAX)
}
