//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  FilterState    │   │    SortKey      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  category       │   │  Default        │       │
//! │  │  title          │   │  min_price      │   │  PriceAscending │       │
//! │  │  price (Money)  │   │  max_price      │   │  PriceDescending│       │
//! │  │  category       │   │  min_rating     │   │  RatingDesc...  │       │
//! │  │  rating         │   └─────────────────┘   │  NewestFirst    │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    Rating       │   │    TaxRate      │                              │
//! │  │  rate (0-5)     │   │  bps (u32)      │                              │
//! │  │  count          │   │  800 = 8%       │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! `Product` (de)serializes exactly like a catalog API record:
//! `{ id, title, price, category, description, image, rating: { rate, count } }`
//! with `price` as a decimal number.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::{self, Money};
use crate::{ALL_CATEGORIES, DEFAULT_MAX_PRICE_CENTS};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 800 bps = 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for configuration input).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::from_bps(crate::DEFAULT_TAX_RATE_BPS)
    }
}

// =============================================================================
// Product
// =============================================================================

/// Catalog identifier of a product.
///
/// Identifiers are assigned by the catalog in creation order, which is why
/// "newest first" sorts by identifier descending.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(#[ts(type = "number")] u64);

impl ProductId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

/// Average review score plus the number of reviews behind it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average score, 0 to 5.
    pub rate: f64,
    /// Number of reviews.
    pub count: u32,
}

impl Rating {
    pub const fn new(rate: f64, count: u32) -> Self {
        Rating { rate, count }
    }
}

/// A product as published by the catalog.
///
/// Engines only ever read products; the catalog owns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,

    /// Display title.
    pub title: String,

    /// Unit price. Carried as cents, exchanged as a decimal number.
    #[serde(with = "money::decimal")]
    #[ts(type = "number")]
    pub price: Money,

    /// Category name, e.g. "electronics".
    pub category: String,

    /// Long description shown on the details page.
    #[serde(default)]
    pub description: String,

    /// Image URI.
    #[serde(default)]
    pub image: String,

    /// Review summary.
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Creates a product with empty description/image and no reviews.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id,
            title: title.into(),
            price,
            category: category.into(),
            description: String::new(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// Category selector of the product list.
///
/// Serialized as a plain string: `"all"` or the category name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// The `"all"` sentinel: no category restriction.
    #[default]
    All,
    /// Only products whose category equals this string exactly.
    Only(String),
}

impl CategoryFilter {
    /// Returns true if a product in `category` passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::from(value.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(category) => category,
        }
    }
}

/// Filters applied to the product list.
///
/// ## Bounds
/// `min_price..=max_price` and `min_rating` are inclusive. They are NOT
/// validated: an inverted price range simply matches nothing, and a
/// `min_rating` above 5 hides every product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FilterState {
    #[ts(type = "string")]
    pub category: CategoryFilter,

    #[serde(with = "money::decimal")]
    #[ts(type = "number")]
    pub min_price: Money,

    #[serde(with = "money::decimal")]
    #[ts(type = "number")]
    pub max_price: Money,

    pub min_rating: f64,
}

impl Default for FilterState {
    /// All categories, $0 to $1000, any rating.
    fn default() -> Self {
        FilterState {
            category: CategoryFilter::All,
            min_price: Money::zero(),
            max_price: Money::from_cents(DEFAULT_MAX_PRICE_CENTS),
            min_rating: 0.0,
        }
    }
}

impl FilterState {
    /// The "Clear Filters" state: every category, the full catalog price
    /// range up to `max_price`, any rating.
    pub fn cleared(max_price: Money) -> Self {
        FilterState {
            max_price,
            ..FilterState::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_price_range(mut self, min_price: Money, max_price: Money) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Category AND price AND rating.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(&product.category)
            && product.price >= self.min_price
            && product.price <= self.max_price
            && product.rating.rate >= self.min_rating
    }
}

// =============================================================================
// Sort Key
// =============================================================================

/// Ordering of the product list.
///
/// Accepts both the long names (`price-ascending`) and the storefront's
/// short option values (`price-low`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Default,
    #[serde(alias = "price-low")]
    PriceAscending,
    #[serde(alias = "price-high")]
    PriceDescending,
    #[serde(alias = "rating")]
    RatingDescending,
    /// Identifier descending; the catalog has no creation timestamp.
    #[serde(alias = "newest")]
    NewestFirst,
}

impl SortKey {
    /// Every key, in the order the sort dropdown lists them.
    pub const ALL: [SortKey; 5] = [
        SortKey::Default,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
        SortKey::RatingDescending,
        SortKey::NewestFirst,
    ];

    /// Canonical wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAscending => "price-ascending",
            SortKey::PriceDescending => "price-descending",
            SortKey::RatingDescending => "rating-descending",
            SortKey::NewestFirst => "newest-first",
        }
    }

    /// Dropdown label.
    pub const fn label(&self) -> &'static str {
        match self {
            SortKey::Default => "Sort by Default",
            SortKey::PriceAscending => "Price: Low to High",
            SortKey::PriceDescending => "Price: High to Low",
            SortKey::RatingDescending => "Highest Rated",
            SortKey::NewestFirst => "Newest First",
        }
    }

    /// Compares two products under this key.
    ///
    /// `Default` reports every pair as equal so that a stable sort keeps
    /// catalog order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Default => Ordering::Equal,
            SortKey::PriceAscending => a.price.cmp(&b.price),
            SortKey::PriceDescending => b.price.cmp(&a.price),
            SortKey::RatingDescending => b.rating.rate.total_cmp(&a.rating.rate),
            SortKey::NewestFirst => b.id.cmp(&a.id),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "default" => Ok(SortKey::Default),
            "price-ascending" | "price-low" => Ok(SortKey::PriceAscending),
            "price-descending" | "price-high" => Ok(SortKey::PriceDescending),
            "rating-descending" | "rating" => Ok(SortKey::RatingDescending),
            "newest-first" | "newest" => Ok(SortKey::NewestFirst),
            _ => Err(ValidationError::NotAllowed {
                field: "sort".to_string(),
                allowed: SortKey::ALL.iter().map(|k| k.as_str().to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const API_RECORD: &str = r#"{
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(8.0);
        assert_eq!(rate.bps(), 800);
        assert!((rate.percentage() - 8.0).abs() < 0.001);
        assert_eq!(TaxRate::default(), rate);
    }

    #[test]
    fn test_product_parses_api_record() {
        let product: Product = serde_json::from_str(API_RECORD).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price.cents(), 10995);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating, Rating::new(3.9, 120));
    }

    #[test]
    fn test_product_missing_optional_fields() {
        let product: Product =
            serde_json::from_str(r#"{"id":7,"title":"Mug","price":4.5,"category":"home"}"#)
                .unwrap();
        assert!(product.description.is_empty());
        assert_eq!(product.rating.count, 0);
        assert_eq!(product.price.cents(), 450);
    }

    #[test]
    fn test_category_filter_sentinel() {
        assert_eq!(CategoryFilter::from("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("electronics"),
            CategoryFilter::Only("electronics".to_string())
        );
        assert!(CategoryFilter::All.matches("jewelery"));
        assert!(!CategoryFilter::from("electronics").matches("Electronics"));
    }

    #[test]
    fn test_filter_state_wire_shape() {
        let filters = FilterState::default().with_category("electronics");
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json["category"], "electronics");
        assert_eq!(json["maxPrice"], 1000.0);
        assert_eq!(json["minRating"], 0.0);

        let parsed: FilterState = serde_json::from_str(
            r#"{"category":"all","minPrice":10,"maxPrice":50.5,"minRating":4}"#,
        )
        .unwrap();
        assert_eq!(parsed.category, CategoryFilter::All);
        assert_eq!(parsed.max_price.cents(), 5050);
    }

    #[test]
    fn test_filter_state_cleared_uses_catalog_max() {
        let filters = FilterState::default()
            .with_category("jewelery")
            .with_min_rating(4.5)
            .with_price_range(Money::from_cents(500), Money::from_cents(900));

        let cleared = FilterState::cleared(Money::from_cents(99_999));
        assert_ne!(filters, cleared);
        assert_eq!(cleared.category, CategoryFilter::All);
        assert_eq!(cleared.min_price, Money::zero());
        assert_eq!(cleared.max_price.cents(), 99_999);
        assert_eq!(cleared.min_rating, 0.0);
    }

    #[test]
    fn test_sort_key_parses_long_and_short_names() {
        assert_eq!("price-low".parse::<SortKey>().unwrap(), SortKey::PriceAscending);
        assert_eq!(
            "price-descending".parse::<SortKey>().unwrap(),
            SortKey::PriceDescending
        );
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::RatingDescending);
        assert_eq!("newest".parse::<SortKey>().unwrap(), SortKey::NewestFirst);
        assert!("cheapest".parse::<SortKey>().is_err());

        let key: SortKey = serde_json::from_str(r#""price-high""#).unwrap();
        assert_eq!(key, SortKey::PriceDescending);
        assert_eq!(
            serde_json::to_string(&SortKey::NewestFirst).unwrap(),
            r#""newest-first""#
        );
    }

    #[test]
    fn test_sort_key_labels_cover_all_keys() {
        for key in SortKey::ALL {
            assert!(!key.label().is_empty());
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }
}
