//! # State Module
//!
//! Application state for the storefront, one type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Storefront (lib.rs)                        │   │
//! │  │  owns every value below; commands borrow what they need         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌──────────────┬─────────┴────┬──────────────┬──────────────┐      │
//! │     ▼              ▼              ▼              ▼              ▼      │
//! │  ┌────────┐  ┌──────────┐  ┌────────────┐  ┌──────────┐  ┌─────────┐  │
//! │  │Config  │  │Catalog   │  │ProductList │  │Product   │  │Search   │  │
//! │  │State   │  │State     │  │State       │  │Details   │  │Box      │  │
//! │  │        │  │          │  │            │  │State     │  │         │  │
//! │  │store,  │  │source +  │  │search,     │  │ticketed  │  │debounce │  │
//! │  │tax,    │  │loaded    │  │filters,    │  │fetch,    │  │         │  │
//! │  │debounce│  │products  │  │sort        │  │quantity  │  │         │  │
//! │  └────────┘  └──────────┘  └────────────┘  └──────────┘  └─────────┘  │
//! │                                                                         │
//! │  Cart and Wishlist are the engines from storefront-core, held as       │
//! │  plain values next to these.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod details;
mod product_list;
mod search;

pub use catalog::CatalogState;
pub use config::ConfigState;
pub use details::{DetailStatus, DetailTicket, ProductDetailsState};
pub use product_list::{ProductListState, ViewMode};
pub use search::SearchBox;
