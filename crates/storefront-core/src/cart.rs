//! # Cart Engine
//!
//! The shopper's cart: an insertion-ordered list of line items, unique by
//! product id, with totals derived on every read.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action                Engine Call              State Change         │
//! │  ─────────                ───────────              ────────────         │
//! │                                                                         │
//! │  "Add to Cart" ─────────► add(product) ──────────► qty += 1 or push    │
//! │                                                                         │
//! │  − / + buttons ─────────► update_quantity(id, n) ► qty = n (≤0 removes)│
//! │                                                                         │
//! │  Trash icon ────────────► remove(id) ────────────► items.retain(..)    │
//! │                                                                         │
//! │  "Clear Cart" ──────────► clear() ───────────────► items.clear()       │
//! │                                                                         │
//! │  Order summary ─────────► total(), item_count() ─► (read only)         │
//! │                                                                         │
//! │  NOTE: every operation is total. Unknown ids are silently ignored.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id
//! - Every line has quantity ≥ 1
//! - `total()` and `item_count()` are computed from `items`, never stored

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{self, Money};
use crate::types::{Product, ProductId, TaxRate};

/// A line in the cart.
///
/// Holds a snapshot of the product as it was when first added, so the cart
/// keeps rendering even if the catalog entry changes or disappears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    pub product: Product,

    /// Always ≥ 1 while the item is in a cart.
    pub quantity: u32,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    fn new(product: &Product, quantity: u32) -> Self {
        CartItem {
            product: product.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Ownership
/// A `Cart` is an ordinary value owned by whoever composes the session. It
/// is mutated only through the methods below; there is no interior
/// mutability and no global instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1
    /// - Product not in cart: appended with quantity 1
    pub fn add(&mut self, product: &Product) {
        self.add_quantity(product, 1);
    }

    /// Adds `quantity` units of `product` at once (the details page
    /// quantity selector). Same result as calling [`Cart::add`] `quantity`
    /// times; `0` does nothing.
    pub fn add_quantity(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(item) = self.find_mut(product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(CartItem::new(product, quantity));
    }

    /// Removes the line for `id`.
    ///
    /// Returns whether a line was removed; an unknown id is a no-op.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id() != id);
        self.items.len() != initial_len
    }

    /// Sets the quantity of the line for `id` exactly.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`Cart::remove`]
    /// - Product not in cart: no-op
    ///
    /// Returns whether the cart changed.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.find_mut(id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Lines in the order they were first added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Quantity of `id` in the cart, 0 if absent.
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, |i| i.quantity)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Σ price × quantity.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Σ quantity (the badge number in the navbar).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Order summary with free shipping and `tax_rate` applied to the subtotal.
    pub fn summary(&self, tax_rate: TaxRate) -> OrderSummary {
        let subtotal = self.total();
        let shipping = Money::zero();
        let tax = subtotal.calculate_tax(tax_rate);

        OrderSummary {
            item_count: self.item_count(),
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    fn find_mut(&mut self, id: ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| i.id() == id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// The "Order Summary" panel of the cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderSummary {
    #[ts(type = "number")]
    pub item_count: u64,

    #[serde(with = "money::decimal")]
    #[ts(type = "number")]
    pub subtotal: Money,

    #[serde(with = "money::decimal")]
    #[ts(type = "number")]
    pub shipping: Money,

    #[serde(with = "money::decimal")]
    #[ts(type = "number")]
    pub tax: Money,

    #[serde(with = "money::decimal")]
    #[ts(type = "number")]
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn test_product(id: u64, price_cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {}", id),
            Money::from_cents(price_cents),
            "electronics",
        )
        .with_rating(Rating::new(4.0, 10))
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        cart.add(&product);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total().cents(), 999);
        assert_eq!(cart.items()[0].product, product);
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        for _ in 0..5 {
            cart.add(&product);
        }

        assert_eq!(cart.len(), 1); // Still one line
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.quantity_of(product.id), 5);
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&test_product(3, 100));
        cart.add(&test_product(1, 100));
        cart.add(&test_product(2, 100));
        cart.add(&test_product(3, 100));

        let ids: Vec<u64> = cart.items().iter().map(|i| i.id().get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_cart_totals_scenario() {
        let mut cart = Cart::new();
        let first = test_product(1, 1000);
        let second = test_product(2, 500);

        cart.add(&first);
        cart.add(&first);
        cart.add(&second);

        assert_eq!(cart.total().cents(), 2500);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_quantity_matches_repeated_add() {
        let product = test_product(4, 1999);

        let mut bulk = Cart::new();
        bulk.add_quantity(&product, 3);

        let mut single = Cart::new();
        single.add(&product);
        single.add(&product);
        single.add(&product);

        assert_eq!(bulk.quantity_of(product.id), single.quantity_of(product.id));
        assert_eq!(bulk.total(), single.total());

        bulk.add_quantity(&product, 0);
        assert_eq!(bulk.item_count(), 3);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 999));
        cart.add(&test_product(2, 100));

        assert!(cart.remove(ProductId::new(1)));
        let after_first = cart.clone();

        assert!(!cart.remove(ProductId::new(1)));
        assert_eq!(cart, after_first);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_quantity_sets_exact_value() {
        let mut cart = Cart::new();
        let product = test_product(1, 250);
        cart.add(&product);
        cart.add(&product);

        assert!(cart.update_quantity(product.id, 7));
        assert_eq!(cart.quantity_of(product.id), 7);
        assert_eq!(cart.total().cents(), 1750);

        // Same value again changes nothing
        assert!(!cart.update_quantity(product.id, 7));
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let product = test_product(1, 250);
        let other = test_product(2, 300);

        let mut updated = Cart::new();
        updated.add(&product);
        updated.add(&other);
        let mut removed = updated.clone();

        assert!(updated.update_quantity(product.id, 0));
        assert!(removed.remove(product.id));
        assert_eq!(updated, removed);

        // Negative quantities remove too
        assert!(updated.update_quantity(other.id, -3));
        assert!(updated.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 250));
        let before = cart.clone();

        assert!(!cart.update_quantity(ProductId::new(99), 4));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = Cart::new();
        let product = test_product(1, 1);

        cart.update_quantity(product.id, 1); // absent: no-op
        cart.add(&product);
        cart.update_quantity(product.id, i64::MAX);
        cart.add(&product);

        assert_eq!(cart.quantity_of(product.id), u32::MAX);
    }

    #[test]
    fn test_huge_prices_and_quantities_saturate() {
        // 1e17 dollars, as parsed from a catalog record
        let yacht = test_product(1, i64::MAX);
        let mut cart = Cart::new();
        cart.add(&yacht);
        cart.add(&yacht);
        assert_eq!(cart.total().cents(), i64::MAX);

        let mut cart = Cart::new();
        cart.add(&test_product(2, 2_500_000_000)); // $25M
        cart.update_quantity(ProductId::new(2), i64::MAX);
        cart.add(&test_product(3, 100));

        let summary = cart.summary(TaxRate::from_bps(800));
        assert_eq!(summary.subtotal.cents(), i64::MAX);
        assert_eq!(summary.total.cents(), i64::MAX);
        assert_eq!(summary.item_count, u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 999));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_order_summary() {
        let mut cart = Cart::new();
        cart.add_quantity(&test_product(1, 2500), 4); // $100.00

        let summary = cart.summary(TaxRate::from_bps(800));
        assert_eq!(summary.item_count, 4);
        assert_eq!(summary.subtotal.cents(), 10000);
        assert!(summary.shipping.is_zero());
        assert_eq!(summary.tax.cents(), 800);
        assert_eq!(summary.total.cents(), 10800);
    }

    #[test]
    fn test_order_summary_wire_shape() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 1999));

        let json = serde_json::to_value(cart.summary(TaxRate::default())).unwrap();
        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["subtotal"], 19.99);
        assert_eq!(json["tax"], 1.6);
        assert_eq!(json["total"], 21.59);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u64),
            AddQuantity(u64, u32),
            Remove(u64),
            Update(u64, i64),
            Clear,
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                4 => (1u64..6).prop_map(Op::Add),
                2 => (1u64..6, 0u32..5).prop_map(|(id, n)| Op::AddQuantity(id, n)),
                2 => (1u64..8).prop_map(Op::Remove),
                2 => (1u64..8, -2i64..10).prop_map(|(id, n)| Op::Update(id, n)),
                1 => Just(Op::Clear),
            ]
        }

        proptest! {
            /// Property: totals always equal a from-scratch recomputation and lines stay unique.
            #[test]
            fn totals_never_drift(ops in prop::collection::vec(arb_op(), 0..60)) {
                let mut cart = Cart::new();
                for op in ops {
                    match op {
                        Op::Add(id) => cart.add(&test_product(id, id as i64 * 137)),
                        Op::AddQuantity(id, n) => cart.add_quantity(&test_product(id, id as i64 * 137), n),
                        Op::Remove(id) => { cart.remove(ProductId::new(id)); }
                        Op::Update(id, n) => { cart.update_quantity(ProductId::new(id), n); }
                        Op::Clear => cart.clear(),
                    }

                    let expected: i64 = cart
                        .items()
                        .iter()
                        .map(|i| i.product.price.cents() * i64::from(i.quantity))
                        .sum();
                    prop_assert_eq!(cart.total().cents(), expected);

                    let count: u64 = cart.items().iter().map(|i| u64::from(i.quantity)).sum();
                    prop_assert_eq!(cart.item_count(), count);

                    prop_assert!(cart.items().iter().all(|i| i.quantity >= 1));
                    let mut ids: Vec<ProductId> = cart.items().iter().map(CartItem::id).collect();
                    ids.sort();
                    ids.dedup();
                    prop_assert_eq!(ids.len(), cart.len());
                }
            }

            /// Property: n adds of one product give one line with quantity n.
            #[test]
            fn repeated_add_counts(n in 1usize..50) {
                let mut cart = Cart::new();
                let product = test_product(1, 499);
                for _ in 0..n {
                    cart.add(&product);
                }
                prop_assert_eq!(cart.len(), 1);
                prop_assert_eq!(cart.item_count(), n as u64);
            }
        }
    }
}
