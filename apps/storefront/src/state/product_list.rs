//! # Product List State
//!
//! The listing page's controls: applied search text, filter panel, sort
//! dropdown and layout toggle. Changing a control never touches the
//! catalog; the visible list is recomputed from [`ProductQuery`] on read.

use serde::{Deserialize, Serialize};
use storefront_core::{CategoryFilter, FilterState, Money, Product, ProductQuery, SortKey};

/// Grid or list layout of the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListState {
    pub query: ProductQuery,
    pub view_mode: ViewMode,
    pub filters_open: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self::new(FilterState::default().max_price)
    }
}

impl ProductListState {
    /// Starts with default filters capped at `default_max_price`.
    pub fn new(default_max_price: Money) -> Self {
        let filters = FilterState::default().with_price_range(Money::zero(), default_max_price);
        ProductListState {
            query: ProductQuery::new().filters(filters),
            view_mode: ViewMode::Grid,
            filters_open: false,
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.query.filters.category = category.into();
    }

    pub fn set_min_price(&mut self, min_price: Money) {
        self.query.filters.min_price = min_price;
    }

    pub fn set_max_price(&mut self, max_price: Money) {
        self.query.filters.max_price = max_price;
    }

    pub fn set_min_rating(&mut self, min_rating: f64) {
        self.query.filters.min_rating = min_rating;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn toggle_filters(&mut self) -> bool {
        self.filters_open = !self.filters_open;
        self.filters_open
    }

    /// "Clear Filters": resets category, price range and rating, with the
    /// price range opened up to the catalog's highest price. Search text and
    /// sort order are left alone.
    pub fn clear_filters(&mut self, catalog_max_price: Money) {
        self.query.filters = FilterState::cleared(catalog_max_price);
    }

    pub fn visible<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        self.query.run(products)
    }
}
