//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate holds the three engines behind the storefront UI. Everything
//! here is a pure, synchronous function of its inputs.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (web UI)                        │   │
//! │  │   Product List ──► Product Details ──► Cart ──► Wishlist        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │ wishlist  │  │   query   │  │   money   │  │   │
//! │  │   │   Cart    │  │ Wishlist  │  │  search   │  │   Money   │  │   │
//! │  │   │ CartItem  │  │           │  │  filter   │  │  TaxRate  │  │   │
//! │  │   │           │  │           │  │  sort     │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │              storefront-catalog (Catalog Sources)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, FilterState, SortKey, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart Engine
//! - [`wishlist`] - Wishlist Engine
//! - [`query`] - Catalog Query Engine
//! - [`error`] - Domain error types
//! - [`validation`] - Product record validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{query, Cart, FilterState, Money, Product, ProductId, Rating, SortKey};
//!
//! let shirt = Product::new(ProductId::new(1), "Blue Shirt", Money::from_cents(1999), "clothing")
//!     .with_rating(Rating::new(4.1, 120));
//!
//! let mut cart = Cart::new();
//! cart.add(&shirt);
//! cart.add(&shirt);
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total().cents(), 3998);
//!
//! let catalog = vec![shirt];
//! let visible = query(&catalog, "shirt", &FilterState::default(), SortKey::Default);
//! assert_eq!(visible.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod query;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, OrderSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use query::{categories, max_price, query, ProductQuery};
pub use types::*;
pub use wishlist::Wishlist;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sentinel category value meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "all";

/// Highest possible product rating.
pub const MAX_RATING: f64 = 5.0;

/// Default upper bound of the price filter, in cents ($1000.00).
pub const DEFAULT_MAX_PRICE_CENTS: i64 = 100_000;

/// Default order tax rate in basis points (8%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;
