//! # Storefront Application Library
//!
//! Composes the engines and the catalog source into one storefront session.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (Storefront, tracing setup)
//! ├── state/
//! │   ├── mod.rs           ◄─── State type exports
//! │   ├── config.rs        ◄─── Configuration state
//! │   ├── catalog.rs       ◄─── Catalog source + loaded products
//! │   ├── product_list.rs  ◄─── Search/filter/sort controls
//! │   ├── details.rs       ◄─── Product details page (ticketed fetch)
//! │   └── search.rs        ◄─── Debounced search box
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog/list/details commands
//! │   ├── cart.rs     ◄─── Cart commands
//! │   ├── wishlist.rs ◄─── Wishlist commands
//! │   ├── navbar.rs   ◄─── Badges and search
//! │   └── config.rs   ◄─── Config retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Session                                   │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │   CatalogState   │ │  Cart, Wishlist  │ │    ConfigState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Source        │ │  • Lines / saved │ │  • Store name        │   │
//! │  │  • Products      │ │    products      │ │  • Tax rate          │   │
//! │  │                  │ │                  │ │  • Debounce          │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  Plus the view state: ProductListState, ProductDetailsState, SearchBox │
//! │                                                                         │
//! │  The session owns everything. Commands borrow individual fields, so    │
//! │  there is no global state and no locking.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_app::{commands, state::ConfigState, Storefront};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), storefront_app::error::ApiError> {
//! let mut app = Storefront::start(ConfigState::default()).await?;
//!
//! let cart = commands::cart::add_to_cart(&app.catalog, &mut app.cart, &app.config, 1, None).await?;
//! assert_eq!(cart.summary.item_count, 1);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;

use storefront_catalog::{CatalogSource, InMemoryCatalog, JsonFileCatalog};
use storefront_core::{Cart, Wishlist};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use error::ApiError;
use state::{CatalogState, ConfigState, ProductDetailsState, ProductListState, SearchBox};

/// One storefront session.
#[derive(Debug)]
pub struct Storefront {
    pub config: ConfigState,
    pub catalog: CatalogState,
    pub cart: Cart,
    pub wishlist: Wishlist,
    pub list: ProductListState,
    pub details: ProductDetailsState,
    pub search: SearchBox,
}

impl Storefront {
    /// Creates a session over the catalog named by `config`: the JSON file
    /// at `catalog_path`, or the built-in sample catalog when unset.
    pub fn new(config: ConfigState) -> Self {
        let source = catalog_source(&config);
        Self::with_source(config, source)
    }

    /// Creates a session over an explicit catalog source.
    pub fn with_source(config: ConfigState, source: Arc<dyn CatalogSource>) -> Self {
        Storefront {
            catalog: CatalogState::new(source),
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            list: ProductListState::new(config.default_max_price),
            details: ProductDetailsState::new(),
            search: SearchBox::new(config.search_debounce()),
            config,
        }
    }

    /// Creates a session and loads the catalog.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  1. Pick catalog source ─── catalog_path set? JSON file : sample       │
    /// │  2. Initialize state ────── empty cart, wishlist, default filters      │
    /// │  3. Load catalog ────────── fetch_all (failure aborts startup)         │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub async fn start(config: ConfigState) -> Result<Self, ApiError> {
        let mut app = Self::new(config);
        commands::product::load_catalog(&mut app.catalog).await?;
        info!(
            store = %app.config.store_name,
            products = app.catalog.products().len(),
            "Storefront ready"
        );
        Ok(app)
    }
}

fn catalog_source(config: &ConfigState) -> Arc<dyn CatalogSource> {
    match &config.catalog_path {
        Some(path) => {
            info!(?path, "Using JSON catalog");
            Arc::new(JsonFileCatalog::new(path))
        }
        None => {
            info!("No catalog_path configured, using sample catalog");
            Arc::new(InMemoryCatalog::sample())
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_catalog=trace` - Trace the catalog crate only
/// - Default: INFO, DEBUG for storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
