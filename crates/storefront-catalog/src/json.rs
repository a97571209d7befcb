//! # JSON File Catalog
//!
//! Reads a product list stored in the public catalog API's schema:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
//!     "price": 109.95,
//!     "description": "Your perfect pack for everyday use...",
//!     "category": "men's clothing",
//!     "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
//!     "rating": { "rate": 3.9, "count": 120 }
//!   }
//! ]
//! ```
//!
//! ## Loading Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  top level not an array      ──► CatalogError::Malformed (whole file)  │
//! │  record fails to deserialize ──► warn!, record skipped                 │
//! │  record fails validation     ──► warn!, record skipped                 │
//! │  duplicate id                ──► warn!, later record skipped           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The file is re-read on every fetch.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use storefront_core::validation::validate_product;
use storefront_core::{Product, ProductId};
use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::source::CatalogSource;

/// Parses a JSON catalog document, skipping records that cannot be used.
pub fn parse_catalog(json: &str) -> CatalogResult<Vec<Product>> {
    let records: Vec<Value> = serde_json::from_str(json)?;
    let mut products: Vec<Product> = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let product: Product = match serde_json::from_value(record) {
            Ok(product) => product,
            Err(e) => {
                warn!(index, error = %e, "Skipping unreadable catalog record");
                continue;
            }
        };

        if let Err(e) = validate_product(&product) {
            warn!(index, error = %e, "Skipping invalid catalog record");
            continue;
        }

        if products.iter().any(|p| p.id == product.id) {
            warn!(index, id = %product.id, "Skipping duplicate catalog id");
            continue;
        }

        products.push(product);
    }

    Ok(products)
}

/// Catalog backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileCatalog { path: path.into() }
    }

    async fn load(&self) -> CatalogResult<Vec<Product>> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::io(&self.path, e))?;

        let products = parse_catalog(&json)?;
        debug!(path = %self.path.display(), count = products.len(), "Loaded JSON catalog");
        Ok(products)
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn fetch_all(&self) -> CatalogResult<Vec<Product>> {
        self.load().await
    }

    async fn fetch_by_id(&self, id: ProductId) -> CatalogResult<Product> {
        self.load()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    fn describe(&self) -> String {
        format!("JSON catalog at {}", self.path.display())
    }
}
