//! # Wishlist Commands
//!
//! Saving products for later, the details-page heart button, and moving a
//! saved product into the cart.

use serde::Serialize;
use storefront_core::{Cart, Product, ProductId, Wishlist};
use tracing::debug;

use crate::commands::cart::CartResponse;
use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub items: Vec<Product>,
    pub count: usize,
}

impl From<&Wishlist> for WishlistResponse {
    fn from(wishlist: &Wishlist) -> Self {
        WishlistResponse {
            items: wishlist.items().to_vec(),
            count: wishlist.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    /// Membership after the toggle
    pub in_wishlist: bool,
    pub wishlist: WishlistResponse,
}

/// Both collections after a move.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveToCartResponse {
    pub cart: CartResponse,
    pub wishlist: WishlistResponse,
}

pub fn get_wishlist(wishlist: &Wishlist) -> WishlistResponse {
    debug!("get_wishlist command");
    WishlistResponse::from(wishlist)
}

/// Saves a product. Saving one already in the wishlist changes nothing.
pub async fn add_to_wishlist(
    catalog: &CatalogState,
    wishlist: &mut Wishlist,
    product_id: u64,
) -> Result<WishlistResponse, ApiError> {
    debug!(product_id, "add_to_wishlist command");
    let product = catalog.resolve(ProductId::new(product_id)).await?;
    wishlist.add(&product);
    Ok(WishlistResponse::from(&*wishlist))
}

pub fn remove_from_wishlist(wishlist: &mut Wishlist, product_id: u64) -> WishlistResponse {
    debug!(product_id, "remove_from_wishlist command");
    wishlist.remove(ProductId::new(product_id));
    WishlistResponse::from(&*wishlist)
}

/// Heart button. Removing a saved product never needs the catalog.
pub async fn toggle_wishlist(
    catalog: &CatalogState,
    wishlist: &mut Wishlist,
    product_id: u64,
) -> Result<ToggleResponse, ApiError> {
    let id = ProductId::new(product_id);
    debug!(%id, "toggle_wishlist command");

    let in_wishlist = if wishlist.remove(id) {
        false
    } else {
        let product = catalog.resolve(id).await?;
        wishlist.toggle(&product)
    };

    Ok(ToggleResponse {
        in_wishlist,
        wishlist: WishlistResponse::from(&*wishlist),
    })
}

pub fn is_in_wishlist(wishlist: &Wishlist, product_id: u64) -> bool {
    wishlist.contains(ProductId::new(product_id))
}

/// "Add to Cart" on the wishlist page: adds one unit to the cart and drops
/// the product from the wishlist.
///
/// ## Errors
/// - `NOT_FOUND` when the product is not in the wishlist
pub fn move_to_cart(
    wishlist: &mut Wishlist,
    cart: &mut Cart,
    config: &ConfigState,
    product_id: u64,
) -> Result<MoveToCartResponse, ApiError> {
    let id = ProductId::new(product_id);
    debug!(%id, "move_to_cart command");

    let product = wishlist
        .items()
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Wishlist item", id))?;

    cart.add(&product);
    wishlist.remove(id);

    Ok(MoveToCartResponse {
        cart: CartResponse::new(cart, config),
        wishlist: WishlistResponse::from(&*wishlist),
    })
}
