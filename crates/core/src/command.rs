//! Structured command produced from a spoken transcript

use serde::{Deserialize, Serialize};
use std::fmt;

/// Action category of a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    Add,
    Remove,
    Search,
    #[default]
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Add => "ADD",
            Intent::Remove => "REMOVE",
            Intent::Search => "SEARCH",
            Intent::Unknown => "UNKNOWN",
        }
    }

    /// ADD and REMOVE mutate the list, so recommendations must be re-derived after them
    pub fn mutates_list(&self) -> bool {
        matches!(self, Intent::Add | Intent::Remove)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering requested for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    /// Ascending by price
    PriceAsc,
}

/// Interpreted shopping command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub intent: Intent,
    /// Residual item name; empty means there is nothing to act on
    pub item: String,
    /// Always at least 1
    pub quantity: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

impl Command {
    /// Whether the command names an item to act on
    pub fn has_item(&self) -> bool {
        !self.item.is_empty()
    }
}

impl Default for Command {
    fn default() -> Self {
        Self {
            intent: Intent::Unknown,
            item: String::new(),
            quantity: 1,
            brand: None,
            max_price: None,
            sort: None,
        }
    }
}
