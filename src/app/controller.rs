//! Menu page event adapter
//!
//! [`MenuController`] is the seam between the view layer and the filter
//! engine. The view layer translates user input (button click, text input,
//! checkbox change, dropdown selection) into one method call each; every call
//! mutates exactly one [`FilterState`] field and returns a fresh
//! [`FilterOutcome`] for re-rendering. The controller never reaches into a
//! document-like structure: item snapshots and events come in, outcomes go
//! out.
//!
//! Search input is the one debounced path: `search_input` schedules the raw
//! query and `poll` applies it once the quiet period elapses, so `evaluate`
//! runs at most once per burst of keystrokes.

use std::time::Instant;

use crate::app::debounce::{Debouncer, SEARCH_QUIET_PERIOD};
use crate::app::helpers::formatting::results_count_label;
use crate::core::catalog::{Catalog, MenuItem, SortKey};
use crate::core::filter::{self, FilterState};

/// The visibility/ordering decision handed back to the view layer.
///
/// Carries everything a render pass needs: the ordered visible items, their
/// count, the results-counter text, and the empty-state flag.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    pub visible: Vec<&'a MenuItem>,
    pub visible_count: usize,
    pub results_label: String,
    pub show_empty_state: bool,
}

/// Owns the catalog snapshot, the filter state, and the search debouncer for
/// one page session.
#[derive(Debug)]
pub struct MenuController {
    catalog: Catalog,
    state: FilterState,
    search_debounce: Debouncer<String>,
}

impl MenuController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: FilterState::new(),
            search_debounce: Debouncer::new(SEARCH_QUIET_PERIOD),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Category button click.
    pub fn select_category(&mut self, category: &str) -> FilterOutcome<'_> {
        tracing::debug!("category filter set to {category:?}");
        self.state.set_category(category);
        self.refresh()
    }

    /// Search keystroke: schedules the query, superseding any pending one.
    /// The new term takes effect on the [`poll`](Self::poll) after the quiet
    /// period.
    pub fn search_input(&mut self, raw: &str, now: Instant) {
        self.search_debounce.schedule(raw.to_string(), now);
    }

    /// Explicit search submit: bypasses the debounce.
    pub fn submit_search(&mut self, raw: &str) -> FilterOutcome<'_> {
        self.search_debounce.cancel();
        self.state.set_search_term(raw);
        tracing::debug!("search term set to {:?}", self.state.search_term);
        self.refresh()
    }

    /// Applies a due debounced search, if any. Call from the event loop with
    /// the current clock reading.
    pub fn poll(&mut self, now: Instant) -> Option<FilterOutcome<'_>> {
        let raw = self.search_debounce.poll(now)?;
        self.state.set_search_term(&raw);
        tracing::debug!("debounced search term set to {:?}", self.state.search_term);
        Some(self.refresh())
    }

    /// Next instant `poll` could produce an outcome, for event loops that
    /// sleep between inputs.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.search_debounce.next_deadline()
    }

    /// Price slider change.
    pub fn set_max_price(&mut self, max_price: f64) -> FilterOutcome<'_> {
        tracing::debug!("price ceiling set to {max_price}");
        self.state.set_max_price(max_price);
        self.refresh()
    }

    /// Dietary checkbox change.
    pub fn toggle_dietary(&mut self, tag: &str, required: bool) -> FilterOutcome<'_> {
        tracing::debug!("dietary tag {tag:?} required={required}");
        self.state.toggle_dietary(tag, required);
        self.refresh()
    }

    /// Sort dropdown change.
    pub fn set_sort_key(&mut self, sort_key: SortKey) -> FilterOutcome<'_> {
        tracing::debug!("sort key set to {sort_key}");
        self.state.set_sort_key(sort_key);
        self.refresh()
    }

    /// Reset-filters affordance: every field back to its default, pending
    /// search discarded.
    pub fn clear_filters(&mut self) -> FilterOutcome<'_> {
        tracing::info!("filters cleared");
        self.search_debounce.cancel();
        self.state.clear();
        self.refresh()
    }

    /// Replaces the catalog snapshot, keeping the current filters.
    pub fn replace_catalog(&mut self, catalog: Catalog) -> FilterOutcome<'_> {
        tracing::info!("catalog snapshot replaced with {} items", catalog.len());
        self.catalog = catalog;
        self.refresh()
    }

    /// Re-evaluates the current state without mutating anything.
    pub fn refresh(&self) -> FilterOutcome<'_> {
        let mut visible = filter::evaluate(&self.catalog.items, &self.state);
        filter::sort_items(&mut visible, self.state.sort_key);
        let visible_count = visible.len();
        FilterOutcome {
            visible,
            visible_count,
            results_label: results_count_label(visible_count),
            show_empty_state: visible_count == 0,
        }
    }
}
