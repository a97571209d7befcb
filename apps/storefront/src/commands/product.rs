//! # Product Commands
//!
//! Catalog loading, the product list page and the product details page.
//!
//! ## Product List Page
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Filters              │  12 products              [Sort by Default ▾]  │
//! │  ─────────            │  ┌────────┐ ┌────────┐ ┌────────┐             │
//! │  Category [all ▾]     │  │ Pack   │ │ Shirt  │ │ Jacket │             │
//! │  Price  $0 - $1000    │  │ $109.95│ │ $22.30 │ │ $55.99 │             │
//! │  Rating  0+ stars     │  └────────┘ └────────┘ └────────┘             │
//! │  [Clear Filters]      │                                                │
//! │                                                                         │
//! │  list_products() → { products, count, total, categories, maxPrice }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use storefront_core::{money, CategoryFilter, Money, Product, ProductId, SortKey};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CatalogState, DetailStatus, ProductDetailsState, ProductListState};

/// Result of (re)loading the catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub count: usize,
    pub categories: Vec<String>,
    #[serde(with = "money::decimal")]
    pub max_price: Money,
}

/// One entry of the sort dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct SortOption {
    pub value: SortKey,
    pub label: &'static str,
}

/// The visible product list plus everything the filter panel needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<Product>,

    /// Visible products
    pub count: usize,

    /// Products in the catalog
    pub total: usize,

    /// `"all"` followed by each catalog category
    pub categories: Vec<String>,

    /// Price slider bound
    #[serde(with = "money::decimal")]
    pub max_price: Money,

    pub sort_options: Vec<SortOption>,

    pub state: ProductListState,
}

/// Partial update of the list controls. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListUpdate {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    /// Long (`price-ascending`) or short (`price-low`) sort name
    pub sort: Option<String>,
}

/// Loads (or reloads) the catalog from its source.
pub async fn load_catalog(catalog: &mut CatalogState) -> Result<CatalogResponse, ApiError> {
    debug!("load_catalog command");
    let count = catalog.refresh().await?;
    Ok(CatalogResponse {
        count,
        categories: catalog.category_options(),
        max_price: catalog.max_price(),
    })
}

/// Gets the visible product list for the current controls.
pub fn list_products(catalog: &CatalogState, list: &ProductListState) -> ProductListResponse {
    debug!("list_products command");
    let products: Vec<Product> = list
        .visible(catalog.products())
        .into_iter()
        .cloned()
        .collect();

    ProductListResponse {
        count: products.len(),
        products,
        total: catalog.products().len(),
        categories: catalog.category_options(),
        max_price: catalog.max_price(),
        sort_options: SortKey::ALL
            .iter()
            .map(|&key| SortOption {
                value: key,
                label: key.label(),
            })
            .collect(),
        state: list.clone(),
    }
}

/// Applies a partial update to the list controls.
///
/// ## Errors
/// - `VALIDATION_ERROR` for an unknown sort name or a non-finite price.
///   Nothing is changed in that case.
pub fn update_product_list(
    catalog: &CatalogState,
    list: &mut ProductListState,
    update: ListUpdate,
) -> Result<ProductListResponse, ApiError> {
    debug!(?update, "update_product_list command");

    let sort = update.sort.as_deref().map(str::parse::<SortKey>).transpose()?;
    let min_price = update.min_price.map(parse_price).transpose()?;
    let max_price = update.max_price.map(parse_price).transpose()?;

    if let Some(category) = update.category {
        list.set_category(CategoryFilter::from(category));
    }
    if let Some(min_price) = min_price {
        list.set_min_price(min_price);
    }
    if let Some(max_price) = max_price {
        list.set_max_price(max_price);
    }
    if let Some(min_rating) = update.min_rating {
        list.set_min_rating(min_rating);
    }
    if let Some(sort) = sort {
        list.set_sort(sort);
    }

    Ok(list_products(catalog, list))
}

/// "Clear Filters" button.
pub fn clear_filters(catalog: &CatalogState, list: &mut ProductListState) -> ProductListResponse {
    debug!("clear_filters command");
    list.clear_filters(catalog.max_price());
    list_products(catalog, list)
}

/// Opens the details page for `product_id` and waits for the catalog.
///
/// Fetch failures show the "Product not found" state rather than an error.
/// A response that arrives after another product was opened is discarded.
pub async fn open_product_details(
    catalog: &CatalogState,
    details: &mut ProductDetailsState,
    product_id: u64,
) -> DetailStatus {
    let id = ProductId::new(product_id);
    debug!(%id, "open_product_details command");

    let ticket = details.begin(id);
    let product = catalog.fetch_product(id).await;
    details.resolve(ticket, product);
    details.status().clone()
}

fn parse_price(amount: f64) -> Result<Money, ApiError> {
    Money::try_from_decimal(amount)
        .ok_or_else(|| ApiError::validation(format!("Invalid price: {}", amount)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storefront_catalog::InMemoryCatalog;
    use storefront_core::Rating;

    use crate::error::ErrorCode;

    fn catalog() -> CatalogState {
        CatalogState::new(Arc::new(InMemoryCatalog::new(vec![
            Product::new(ProductId::new(1), "Backpack", Money::from_cents(10995), "men's clothing")
                .with_rating(Rating::new(3.9, 120)),
            Product::new(ProductId::new(2), "SSD", Money::from_cents(10900), "electronics")
                .with_rating(Rating::new(4.8, 470)),
            Product::new(ProductId::new(3), "Ring", Money::from_cents(999), "jewelery")
                .with_rating(Rating::new(3.0, 400)),
        ])))
    }

    #[tokio::test]
    async fn test_load_catalog() {
        let mut catalog = catalog();
        let response = load_catalog(&mut catalog).await.unwrap();
        assert_eq!(response.count, 3);
        assert_eq!(
            response.categories,
            vec!["all", "men's clothing", "electronics", "jewelery"]
        );
        assert_eq!(response.max_price, Money::from_cents(10995));
    }

    #[tokio::test]
    async fn test_list_products() {
        let mut catalog = catalog();
        load_catalog(&mut catalog).await.unwrap();

        let mut list = ProductListState::default();
        list.set_sort(SortKey::PriceAscending);

        let response = list_products(&catalog, &list);
        let ids: Vec<u64> = response.products.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(response.count, 3);
        assert_eq!(response.total, 3);
        assert_eq!(response.sort_options.len(), 5);
        assert_eq!(response.sort_options[1].label, "Price: Low to High");
    }

    #[tokio::test]
    async fn test_update_product_list() {
        let mut catalog = catalog();
        load_catalog(&mut catalog).await.unwrap();
        let mut list = ProductListState::default();

        let response = update_product_list(
            &catalog,
            &mut list,
            ListUpdate {
                sort: Some("rating".to_string()),
                max_price: Some(109.0),
                ..ListUpdate::default()
            },
        )
        .unwrap();

        let ids: Vec<u64> = response.products.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(list.query.sort, SortKey::RatingDescending);
    }

    #[tokio::test]
    async fn test_update_rejects_unknown_sort() {
        let catalog = catalog();
        let mut list = ProductListState::default();
        let before = list.clone();

        let err = update_product_list(
            &catalog,
            &mut list,
            ListUpdate {
                category: Some("electronics".to_string()),
                sort: Some("cheapest".to_string()),
                ..ListUpdate::default()
            },
        )
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(list, before);
    }

    #[test]
    fn test_list_update_parses_camel_case() {
        let update: ListUpdate =
            serde_json::from_str(r#"{"category":"jewelery","minRating":4,"sort":"newest"}"#)
                .unwrap();
        assert_eq!(update.category.as_deref(), Some("jewelery"));
        assert_eq!(update.min_rating, Some(4.0));
        assert!(update.max_price.is_none());
    }

    #[tokio::test]
    async fn test_clear_filters_uses_catalog_max() {
        let mut catalog = catalog();
        load_catalog(&mut catalog).await.unwrap();
        let mut list = ProductListState::default();
        list.set_category("jewelery");

        let response = clear_filters(&catalog, &mut list);
        assert_eq!(response.count, 3);
        assert_eq!(list.query.filters.max_price, Money::from_cents(10995));
    }

    #[tokio::test]
    async fn test_open_product_details() {
        let catalog = catalog();
        let mut details = ProductDetailsState::new();

        let status = open_product_details(&catalog, &mut details, 2).await;
        assert!(matches!(status, DetailStatus::Loaded(ref p) if p.title == "SSD"));

        let status = open_product_details(&catalog, &mut details, 99).await;
        assert_eq!(status, DetailStatus::NotFound);
    }
}
