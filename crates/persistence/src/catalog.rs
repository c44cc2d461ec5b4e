//! Catalog loading

use std::path::Path;

use voice_cart_core::{default_catalog, Product};

use crate::PersistenceError;

/// Load a catalog from a JSON array of `{name, brand, price}` objects
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Product>, PersistenceError> {
    let path = path.as_ref();
    let path_label = path.display().to_string();

    let raw = std::fs::read_to_string(path).map_err(|source| PersistenceError::CatalogRead {
        path: path_label.clone(),
        source,
    })?;

    let products: Vec<Product> =
        serde_json::from_str(&raw).map_err(|source| PersistenceError::CatalogFormat {
            path: path_label.clone(),
            source,
        })?;

    for product in &products {
        if product.name.trim().is_empty() {
            return Err(PersistenceError::InvalidProduct(
                "product name must not be empty".to_string(),
            ));
        }
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(PersistenceError::InvalidProduct(format!(
                "{} has price {}",
                product.name, product.price
            )));
        }
    }

    tracing::debug!(path = %path_label, products = products.len(), "Loaded catalog");
    Ok(products)
}

/// Load the configured catalog, or the built-in one when no path is set
pub fn load_catalog_or_default(path: Option<&str>) -> Result<Vec<Product>, PersistenceError> {
    match path {
        Some(path) => load_catalog(path),
        None => Ok(default_catalog()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"name": "rice", "brand": "daawat", "price": 12.0},
                {"name": "chips", "brand": "lays", "price": 1.5}]"#,
        )
        .unwrap();

        let products = load_catalog(&path).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0], Product::new("rice", "daawat", 12.0));
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, PersistenceError::CatalogRead { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"{"name": "rice"}"#).unwrap();
        assert!(matches!(
            load_catalog(&path).unwrap_err(),
            PersistenceError::CatalogFormat { .. }
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"[{"name": "rice", "brand": "x", "price": -1}]"#).unwrap();
        assert!(matches!(
            load_catalog(&path).unwrap_err(),
            PersistenceError::InvalidProduct(_)
        ));
    }

    #[test]
    fn test_default_when_unset() {
        assert_eq!(load_catalog_or_default(None).unwrap(), default_catalog());
    }
}
