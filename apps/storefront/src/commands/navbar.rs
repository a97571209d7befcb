//! # Navbar Commands
//!
//! Badge counts and the debounced search box.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [ShopHub]   [ Search products...        ]        ♥ 2      🛒 5        │
//! │                      │                             │        │          │
//! │             search_input / poll_search    wishlistCount  cartCount    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{Cart, Wishlist};
use tracing::debug;

use crate::state::{ConfigState, ProductListState, SearchBox};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarResponse {
    pub store_name: String,

    /// Σ quantity over cart lines
    pub cart_count: u64,

    pub wishlist_count: usize,
}

pub fn get_navbar(config: &ConfigState, cart: &Cart, wishlist: &Wishlist) -> NavbarResponse {
    NavbarResponse {
        store_name: config.store_name.clone(),
        cart_count: cart.item_count(),
        wishlist_count: wishlist.len(),
    }
}

/// Records a keystroke in the search box. Nothing reaches the product list
/// until [`poll_search`] releases it.
pub fn search_input(search: &mut SearchBox, text: impl Into<String>) {
    search.edit(text);
}

/// Applies the pending search text to the product list once the debounce
/// period has passed. Returns the applied text, if any.
pub fn poll_search(search: &mut SearchBox, list: &mut ProductListState) -> Option<String> {
    let released = search.poll()?;
    debug!(search = %released, "Applying search");
    list.set_search(released.clone());
    Some(released)
}

/// Form submit: applies the current text immediately.
pub fn submit_search(search: &mut SearchBox, list: &mut ProductListState) -> String {
    let text = search.submit();
    debug!(search = %text, "Search submitted");
    list.set_search(text.clone());
    text
}
