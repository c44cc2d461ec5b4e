//! Product catalog and search filtering

use serde::{Deserialize, Serialize};

use crate::command::{Command, SortOrder};

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub brand: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, brand: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            price,
        }
    }

    /// Copy of the product with the brand rendered for display
    pub fn for_display(&self) -> Self {
        Self {
            brand: capitalize_first(&self.brand),
            ..self.clone()
        }
    }
}

/// Catalog shipped with the service when no catalog file is configured
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product::new("toothpaste", "Colgate", 4.5),
        Product::new("toothpaste", "Dove", 5.5),
        Product::new("soap", "Dove", 3.0),
        Product::new("milk", "Amul", 2.8),
        Product::new("butter", "Amul", 6.0),
        Product::new("shampoo", "Dove", 9.5),
        Product::new("curd", "Amul", 3.5),
        Product::new("toothbrush", "Colgate", 2.5),
    ]
}

/// Upper-case the first character and lower-case the rest
///
/// ```
/// use voice_cart_core::capitalize_first;
/// assert_eq!(capitalize_first("cOLGATE"), "Colgate");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Catalog filter
///
/// Every present criterion must hold. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Case-insensitive substring of the product name
    #[serde(default)]
    pub item: Option<String>,
    /// Case-insensitive exact brand
    #[serde(default)]
    pub brand: Option<String>,
    /// Inclusive price ceiling
    #[serde(default)]
    pub max_price: Option<f64>,
}

impl SearchQuery {
    pub fn from_command(command: &Command) -> Self {
        Self {
            item: Some(command.item.clone()),
            brand: command.brand.clone(),
            max_price: command.max_price,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(item) = self.item.as_deref().filter(|s| !s.is_empty()) {
            if !product.name.to_lowercase().contains(&item.to_lowercase()) {
                return false;
            }
        }

        if let Some(brand) = self.brand.as_deref().filter(|s| !s.is_empty()) {
            if product.brand.to_lowercase() != brand.to_lowercase() {
                return false;
            }
        }

        if let Some(limit) = self.max_price.filter(|p| !p.is_nan()) {
            if product.price > limit {
                return false;
            }
        }

        true
    }

    /// Filter a catalog, keeping catalog order
    pub fn apply(&self, catalog: &[Product]) -> Vec<Product> {
        catalog.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

/// Stable sort of search results
pub fn sort_products(products: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
    }
}
