//! # Catalog Source
//!
//! The read-only interface the app uses to obtain products.
//!
//! ## Contract
//! - `fetch_all` returns the catalog in catalog order (the "default" sort)
//! - `fetch_by_id` returns `CatalogError::NotFound` for unknown ids
//! - No retries, no caching, no de-duplication of concurrent calls

use async_trait::async_trait;
use storefront_core::{Product, ProductId};

use crate::error::CatalogResult;

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Every product, in catalog order.
    async fn fetch_all(&self) -> CatalogResult<Vec<Product>>;

    /// One product by id.
    async fn fetch_by_id(&self, id: ProductId) -> CatalogResult<Product>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}
