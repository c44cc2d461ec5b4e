//! Core traits and types for the voice shopping assistant
//!
//! This crate provides foundational types used across all other crates:
//! - The structured [`Command`] produced by the interpreter
//! - Shopping list, catalog and search types
//! - Store, clock and transcript-source traits for pluggable backends
//! - Error types

pub mod catalog;
pub mod command;
pub mod error;
pub mod shopping_list;
pub mod traits;

pub use catalog::{capitalize_first, default_catalog, sort_products, Product, SearchQuery};
pub use command::{Command, Intent, SortOrder};
pub use error::{Error, Result};
pub use shopping_list::{category_for, ShoppingListEntry, DEFAULT_CATEGORY};

pub use traits::{Clock, FixedClock, ShoppingStore, SystemClock, TranscriptSource};
