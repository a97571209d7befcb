//! # storefront-catalog: Catalog Sources for the Storefront
//!
//! Everything that produces [`Product`](storefront_core::Product) records
//! lives behind the [`CatalogSource`] trait.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Data Flow                             │
//! │                                                                         │
//! │  App command (load_catalog / open_product)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-catalog (THIS CRATE)                 │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ CatalogSource │    │ JsonFile      │    │ InMemory     │  │   │
//! │  │   │  (trait)      │◄───│ Catalog       │    │ Catalog      │  │   │
//! │  │   │ fetch_all     │    │ (API schema)  │    │ (fixtures)   │  │   │
//! │  │   │ fetch_by_id   │◄───┴───────────────┘    └──────────────┘  │   │
//! │  │   └───────────────┘                                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  storefront-core query engine                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`source`] - The `CatalogSource` trait
//! - [`json`] - JSON file catalog in the public REST schema
//! - [`memory`] - In-memory catalog
//! - [`fixtures`] - Built-in sample catalog
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use storefront_catalog::{CatalogSource, JsonFileCatalog};
//!
//! # async fn demo() -> storefront_catalog::error::CatalogResult<()> {
//! let catalog = JsonFileCatalog::new("data/products.json");
//! let products = catalog.fetch_all().await?;
//! println!("{} products", products.len());
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fixtures;
pub mod json;
pub mod memory;
pub mod source;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use fixtures::sample_products;
pub use json::{parse_catalog, JsonFileCatalog};
pub use memory::InMemoryCatalog;
pub use source::CatalogSource;
