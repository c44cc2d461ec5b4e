//! Shopping list entries and category lookup

use serde::{Deserialize, Serialize};

/// Category used when an item has no entry in the lookup
pub const DEFAULT_CATEGORY: &str = "Other";

const CATEGORIES: &[(&str, &str)] = &[
    ("milk", "Dairy"),
    ("bread", "Bakery"),
    ("apple", "Produce"),
    ("banana", "Produce"),
    ("toothpaste", "Personal Care"),
    ("shampoo", "Personal Care"),
    ("chips", "Snacks"),
    ("rice", "Grains"),
];

/// Resolve the category of an item name (case-insensitive)
pub fn category_for(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    CATEGORIES
        .iter()
        .find(|(item, _)| *item == lower)
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Single line on the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListEntry {
    pub name: String,
    pub quantity: u64,
    pub category: String,
}

impl ShoppingListEntry {
    /// Build an entry, resolving its category. A quantity of 0 becomes 1.
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        let name = name.into();
        let category = category_for(&name).to_string();
        Self {
            name,
            quantity: quantity.max(1),
            category,
        }
    }

    /// Case-insensitive exact name comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
