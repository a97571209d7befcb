//! # In-Memory Catalog
//!
//! A fixed product list held in memory. Used for the built-in sample
//! catalog and in tests.

use async_trait::async_trait;
use storefront_core::{Product, ProductId};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::source::CatalogSource;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Wraps `products`, keeping their order as the catalog order.
    pub fn new(products: Vec<Product>) -> Self {
        InMemoryCatalog { products }
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        Self::new(crate::fixtures::sample_products())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn fetch_all(&self) -> CatalogResult<Vec<Product>> {
        debug!(count = self.products.len(), "Serving in-memory catalog");
        Ok(self.products.clone())
    }

    async fn fetch_by_id(&self, id: ProductId) -> CatalogResult<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    fn describe(&self) -> String {
        format!("in-memory catalog ({} products)", self.products.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Money;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            Product::new(ProductId::new(2), "Ring", Money::from_cents(999), "jewelery"),
            Product::new(ProductId::new(1), "Drive", Money::from_cents(6400), "electronics"),
        ])
    }

    #[tokio::test]
    async fn test_fetch_all_keeps_order() {
        let products = catalog().fetch_all().await.unwrap();
        let ids: Vec<u64> = products.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_fetch_by_id() {
        let catalog = catalog();
        let product = catalog.fetch_by_id(ProductId::new(1)).await.unwrap();
        assert_eq!(product.title, "Drive");

        let err = catalog.fetch_by_id(ProductId::new(3)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_sample_catalog_is_served() {
        let catalog = InMemoryCatalog::sample();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.fetch_all().await.unwrap().len(), catalog.len());
        assert!(catalog.describe().contains("in-memory"));
    }
}
