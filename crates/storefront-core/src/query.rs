//! # Catalog Query Engine
//!
//! Turns the full product list into the visible, ordered product list.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product List Pipeline                                │
//! │                                                                         │
//! │  products (catalog order)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. SEARCH   trimmed, case-insensitive substring of                    │
//! │              title OR description OR category                          │
//! │              (blank query matches everything)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. FILTER   category (unless "all") AND                               │
//! │              min_price ≤ price ≤ max_price AND                         │
//! │              rating ≥ min_rating                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. SORT     stable; ties keep catalog order                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<&Product> (input slice untouched)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{FilterState, Product, SortKey};

/// Runs search, filter and sort over `products`.
///
/// Never fails and never mutates `products`. Inverted price bounds produce
/// an empty result.
///
/// ## Example
/// ```rust
/// use storefront_core::{query, FilterState, Money, Product, ProductId, SortKey};
///
/// let catalog = vec![
///     Product::new(ProductId::new(1), "Backpack", Money::from_cents(3000), "bags"),
///     Product::new(ProductId::new(2), "Tote", Money::from_cents(1000), "bags"),
///     Product::new(ProductId::new(3), "Duffel", Money::from_cents(2000), "bags"),
/// ];
///
/// let sorted = query(&catalog, "", &FilterState::default(), SortKey::PriceAscending);
/// let prices: Vec<i64> = sorted.iter().map(|p| p.price.cents()).collect();
/// assert_eq!(prices, vec![1000, 2000, 3000]);
/// ```
pub fn query<'a>(
    products: &'a [Product],
    search: &str,
    filters: &FilterState,
    sort: SortKey,
) -> Vec<&'a Product> {
    let needle = search.trim().to_lowercase();

    let mut visible: Vec<&Product> = products
        .iter()
        .filter(|p| matches_search(p, &needle))
        .filter(|p| filters.matches(p))
        .collect();

    // sort_by is stable, which keeps ties in catalog order
    if sort != SortKey::Default {
        visible.sort_by(|a, b| sort.compare(a, b));
    }

    visible
}

/// `needle` must already be trimmed and lowercased.
fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.title.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// Everything the product list page needs to ask for a result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductQuery {
    pub search: String,
    pub filters: FilterState,
    pub sort: SortKey,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn run<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        query(products, &self.search, &self.filters, self.sort)
    }
}

/// Distinct categories in first-seen order, for the category selector.
///
/// Does not include the `"all"` sentinel; callers prepend it.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.iter().any(|c| *c == product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// Highest price in the catalog (price slider bound), zero when empty.
pub fn max_price(products: &[Product]) -> Money {
    products
        .iter()
        .map(|p| p.price)
        .max()
        .unwrap_or_else(Money::zero)
}

// =============================================================================
// Unit Tests
// =============================================================================
