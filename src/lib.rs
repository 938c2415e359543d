//! menuboard - restaurant menu page interactivity core
//!
//! The logic behind a restaurant marketing site's menu page, extracted from
//! the view layer: deciding which items are visible and in what order,
//! validating form fields, coalescing rapid search input, and deriving
//! scroll-dependent navigation state.
//!
//! # Architecture
//!
//! - [`core`] - Catalog data model and the filter/sort engine
//! - [`validators`] - Single-field validation with deterministic messages
//! - [`app`] - The view adapter: event handling, debounce, forms, formatting
//!
//! The view layer extracts rendered items into [`MenuItem`] snapshots, feeds
//! user events into a [`app::MenuController`], and re-renders from the
//! [`app::FilterOutcome`] it gets back. Nothing here reaches into a
//! document-like structure, performs I/O, or spawns threads: every operation
//! runs to completion on the calling thread, and the only temporal concern
//! (search debouncing) is a poll-driven deadline the event loop drives.

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod app;
pub mod core;
pub mod validators;

// Re-export commonly used types
pub use crate::core::catalog::{Catalog, MenuItem, SortKey};
pub use crate::core::error::{Error, Result};
pub use crate::core::filter::{evaluate, sort_items, FilterState};
