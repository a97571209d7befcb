//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Page
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopping Cart                                 [Clear Cart]            │
//! │  ┌────────────────────────────────────────────┐  ┌──────────────────┐  │
//! │  │  Backpack        [-] 2 [+]   $219.90  [x]  │  │  Order Summary   │  │
//! │  │  SSD             [-] 1 [+]   $109.00  [x]  │  │  Items (3) $328.90│ │
//! │  └────────────────────────────────────────────┘  │  Shipping   Free │  │
//! │                                                  │  Tax      $26.31 │  │
//! │                                                  │  Total   $355.21 │  │
//! │                                                  └──────────────────┘  │
//! │                                                                         │
//! │  get_cart() → { items: [...], summary: {...} }                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity and removal commands never fail: unknown ids leave the cart as
//! it was. Only adding by id can fail, when the id resolves to no product.

use serde::Serialize;
use storefront_core::{Cart, CartItem, OrderSummary, ProductId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState, ProductDetailsState};

/// Cart response including items and the order summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub summary: OrderSummary,

    /// `summary.total` formatted with the configured currency
    pub formatted_total: String,
}

impl CartResponse {
    pub fn new(cart: &Cart, config: &ConfigState) -> Self {
        let summary = cart.summary(config.tax_rate());
        CartResponse {
            items: cart.items().to_vec(),
            formatted_total: config.format_currency(summary.total),
            summary,
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &Cart, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::new(cart, config)
}

/// Adds a product to the cart by id.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added as a new line
/// - `quantity` defaults to 1; 0 leaves the cart unchanged
///
/// ## Errors
/// - `NOT_FOUND` when the id resolves to no product
pub async fn add_to_cart(
    catalog: &CatalogState,
    cart: &mut Cart,
    config: &ConfigState,
    product_id: u64,
    quantity: Option<u32>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id, quantity, "add_to_cart command");

    let product = catalog.resolve(ProductId::new(product_id)).await?;
    cart.add_quantity(&product, quantity);

    Ok(CartResponse::new(cart, config))
}

/// "Add to Cart" on the details page: adds the product being shown, as
/// many times as the quantity selector says.
///
/// ## Errors
/// - `NOT_FOUND` when no product is loaded on the details page
pub fn add_selected_to_cart(
    details: &ProductDetailsState,
    cart: &mut Cart,
    config: &ConfigState,
) -> Result<CartResponse, ApiError> {
    let product = details.product().ok_or_else(|| {
        ApiError::not_found(
            "Product",
            details
                .requested()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "none".to_string()),
        )
    })?;
    debug!(id = %product.id, quantity = details.quantity(), "add_selected_to_cart command");

    cart.add_quantity(product, details.quantity());
    Ok(CartResponse::new(cart, config))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity ≤ 0: removes the line
/// - Unknown product: no change
pub fn update_cart_item(
    cart: &mut Cart,
    config: &ConfigState,
    product_id: u64,
    quantity: i64,
) -> CartResponse {
    debug!(product_id, quantity, "update_cart_item command");
    cart.update_quantity(ProductId::new(product_id), quantity);
    CartResponse::new(cart, config)
}

/// Removes a line from the cart.
pub fn remove_from_cart(cart: &mut Cart, config: &ConfigState, product_id: u64) -> CartResponse {
    debug!(product_id, "remove_from_cart command");
    cart.remove(ProductId::new(product_id));
    CartResponse::new(cart, config)
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &mut Cart, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");
    cart.clear();
    CartResponse::new(cart, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storefront_catalog::InMemoryCatalog;
    use storefront_core::{Money, Product};

    use crate::error::ErrorCode;

    fn catalog() -> CatalogState {
        CatalogState::new(Arc::new(InMemoryCatalog::new(vec![
            Product::new(ProductId::new(1), "Backpack", Money::from_cents(5000), "bags"),
            Product::new(ProductId::new(2), "Tote", Money::from_cents(2500), "bags"),
        ])))
    }

    #[tokio::test]
    async fn test_add_to_cart_and_summary() {
        let catalog = catalog();
        let config = ConfigState::default();
        let mut cart = Cart::new();

        add_to_cart(&catalog, &mut cart, &config, 1, None).await.unwrap();
        add_to_cart(&catalog, &mut cart, &config, 2, Some(2)).await.unwrap();
        let response = add_to_cart(&catalog, &mut cart, &config, 1, None).await.unwrap();

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].quantity, 2);
        assert_eq!(response.items[1].quantity, 2);
        assert_eq!(response.summary.item_count, 4);
        assert_eq!(response.summary.subtotal, Money::from_cents(15000));
        assert_eq!(response.summary.shipping, Money::zero());
        assert_eq!(response.summary.tax, Money::from_cents(1200));
        assert_eq!(response.summary.total, Money::from_cents(16200));
        assert_eq!(response.formatted_total, "$162.00");
    }

    #[tokio::test]
    async fn test_add_unknown_product_is_not_found() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let err = add_to_cart(&catalog, &mut cart, &ConfigState::default(), 42, None)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_add_selected_quantity_from_details() {
        let catalog = catalog();
        let config = ConfigState::default();
        let mut cart = Cart::new();
        let mut details = ProductDetailsState::new();

        assert!(add_selected_to_cart(&details, &mut cart, &config).is_err());

        let ticket = details.begin(ProductId::new(2));
        details.resolve(ticket, catalog.fetch_product(ProductId::new(2)).await);
        details.set_quantity(3);

        let response = add_selected_to_cart(&details, &mut cart, &config).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 3);
        assert_eq!(response.summary.subtotal, Money::from_cents(7500));
    }

    #[tokio::test]
    async fn test_update_remove_clear() {
        let catalog = catalog();
        let config = ConfigState::default();
        let mut cart = Cart::new();
        add_to_cart(&catalog, &mut cart, &config, 1, None).await.unwrap();
        add_to_cart(&catalog, &mut cart, &config, 2, None).await.unwrap();

        let response = update_cart_item(&mut cart, &config, 1, 5);
        assert_eq!(response.summary.item_count, 6);

        let response = update_cart_item(&mut cart, &config, 1, 0);
        assert_eq!(response.items.len(), 1);

        let response = update_cart_item(&mut cart, &config, 99, 3);
        assert_eq!(response.summary.item_count, 1);

        let response = remove_from_cart(&mut cart, &config, 2);
        assert!(response.items.is_empty());

        add_to_cart(&catalog, &mut cart, &config, 1, None).await.unwrap();
        let response = clear_cart(&mut cart, &config);
        assert!(response.items.is_empty());
        assert_eq!(response.summary.total, Money::zero());
    }

    #[test]
    fn test_cart_response_shape() {
        let response = get_cart(&Cart::new(), &ConfigState::default());
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["items"].as_array().unwrap().is_empty());
        assert_eq!(json["summary"]["itemCount"], 0);
        assert_eq!(json["formattedTotal"], "$0.00");
    }
}
