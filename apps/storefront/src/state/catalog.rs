//! # Catalog State
//!
//! Holds the catalog source and the most recently loaded product list.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog State                                        │
//! │                                                                         │
//! │  refresh() ────► source.fetch_all() ────► products (catalog order)      │
//! │                                                                         │
//! │  resolve(id) ──► products (cached) ──┬──► Product                       │
//! │                                      └──► source.fetch_by_id(id)        │
//! │                                                                         │
//! │  fetch_product(id) ──► source.fetch_by_id(id) ──► Option<Product>       │
//! │                        (every failure becomes None, logged)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use storefront_catalog::{CatalogResult, CatalogSource};
use storefront_core::{categories, max_price, Money, Product, ProductId, ALL_CATEGORIES};
use tracing::{debug, info, warn};

use crate::error::ApiError;

pub struct CatalogState {
    source: Arc<dyn CatalogSource>,
    products: Vec<Product>,
}

impl CatalogState {
    /// Wraps a source. Nothing is fetched until [`refresh`](Self::refresh).
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        CatalogState {
            source,
            products: Vec::new(),
        }
    }

    /// Reloads the product list from the source.
    ///
    /// On failure the previous list is kept.
    pub async fn refresh(&mut self) -> CatalogResult<usize> {
        let products = self.source.fetch_all().await?;
        info!(
            source = %self.source.describe(),
            count = products.len(),
            "Catalog loaded"
        );
        self.products = products;
        Ok(self.products.len())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loaded(&self) -> bool {
        !self.products.is_empty()
    }

    /// Looks up a product in the loaded list.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Category selector options: `"all"` followed by each category in
    /// first-seen order.
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(categories(&self.products))
            .collect()
    }

    /// Highest price in the loaded catalog.
    pub fn max_price(&self) -> Money {
        max_price(&self.products)
    }

    /// Resolves an id to a product, from the loaded list when possible and
    /// from the source otherwise.
    pub async fn resolve(&self, id: ProductId) -> Result<Product, ApiError> {
        if let Some(product) = self.find(id) {
            return Ok(product.clone());
        }
        debug!(%id, "Product not in loaded catalog, asking source");
        Ok(self.source.fetch_by_id(id).await?)
    }

    /// Fetches a single product for the details view.
    ///
    /// Every failure is reported as `None`; the cause is logged.
    pub async fn fetch_product(&self, id: ProductId) -> Option<Product> {
        match self.source.fetch_by_id(id).await {
            Ok(product) => Some(product),
            Err(e) if e.is_not_found() => {
                debug!(%id, "Product not found");
                None
            }
            Err(e) => {
                warn!(%id, error = %e, "Error fetching product");
                None
            }
        }
    }
}

impl std::fmt::Debug for CatalogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogState")
            .field("source", &self.source.describe())
            .field("products", &self.products.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use storefront_catalog::{CatalogError, InMemoryCatalog};

    use crate::error::ErrorCode;

    fn product(id: u64, category: &str, cents: i64) -> Product {
        Product::new(ProductId::new(id), format!("Product {}", id), Money::from_cents(cents), category)
    }

    fn state() -> CatalogState {
        CatalogState::new(Arc::new(InMemoryCatalog::new(vec![
            product(1, "electronics", 6400),
            product(2, "jewelery", 999),
            product(3, "electronics", 10900),
        ])))
    }

    struct BrokenCatalog;

    #[async_trait]
    impl CatalogSource for BrokenCatalog {
        async fn fetch_all(&self) -> CatalogResult<Vec<Product>> {
            Err(CatalogError::Unavailable("offline".into()))
        }

        async fn fetch_by_id(&self, _id: ProductId) -> CatalogResult<Product> {
            Err(CatalogError::Unavailable("offline".into()))
        }

        fn describe(&self) -> String {
            "broken".into()
        }
    }

    #[tokio::test]
    async fn test_refresh_and_facets() {
        let mut state = state();
        assert!(!state.is_loaded());
        assert_eq!(state.category_options(), vec!["all"]);
        assert_eq!(state.max_price(), Money::zero());

        assert_eq!(state.refresh().await.unwrap(), 3);
        assert!(state.is_loaded());
        assert_eq!(state.category_options(), vec!["all", "electronics", "jewelery"]);
        assert_eq!(state.max_price(), Money::from_cents(10900));
        assert_eq!(state.find(ProductId::new(2)).unwrap().category, "jewelery");
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_source() {
        let state = state();
        let product = state.resolve(ProductId::new(3)).await.unwrap();
        assert_eq!(product.price, Money::from_cents(10900));

        let err = state.resolve(ProductId::new(99)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_fetch_product_maps_failures_to_none() {
        let state = state();
        assert!(state.fetch_product(ProductId::new(1)).await.is_some());
        assert!(state.fetch_product(ProductId::new(42)).await.is_none());

        let broken = CatalogState::new(Arc::new(BrokenCatalog));
        assert!(broken.fetch_product(ProductId::new(1)).await.is_none());
    }

    #[tokio::test]
    async fn test_failed_refresh_is_reported() {
        let mut broken = CatalogState::new(Arc::new(BrokenCatalog));
        assert!(broken.refresh().await.is_err());
        assert!(broken.products().is_empty());
    }
}
