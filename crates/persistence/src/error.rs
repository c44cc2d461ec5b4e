//! Persistence error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog {path}: {source}")]
    CatalogFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid product in catalog: {0}")]
    InvalidProduct(String),
}

impl From<PersistenceError> for voice_cart_core::Error {
    fn from(err: PersistenceError) -> Self {
        voice_cart_core::Error::store(err.to_string())
    }
}
