//! # Commands Module
//!
//! Every operation the presentation layer can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Catalog loading, product list, details page
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── wishlist.rs  ◄─── Wishlist manipulation, move to cart
//! ├── navbar.rs    ◄─── Badge counts, debounced search
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command borrows only the state it needs, and only mutably when it
//! changes it:
//! ```rust,ignore
//! // Read only
//! fn get_cart(cart: &Cart, config: &ConfigState) -> CartResponse
//!
//! // Mutates the cart, resolves the id through the catalog
//! async fn add_to_cart(catalog: &CatalogState, cart: &mut Cart, ...)
//!
//! // Mutates two collections at once
//! fn move_to_cart(wishlist: &mut Wishlist, cart: &mut Cart, ...)
//! ```
//!
//! Responses are `Serialize` with camelCase keys; failures are
//! [`ApiError`](crate::error::ApiError).

pub mod cart;
pub mod config;
pub mod navbar;
pub mod product;
pub mod wishlist;
