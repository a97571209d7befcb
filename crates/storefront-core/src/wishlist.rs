//! # Wishlist Engine
//!
//! Saved products, unique by id, in the order they were saved. No quantities.

use serde::{Deserialize, Serialize};

use crate::types::{Product, ProductId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves `product` unless a product with the same id is already saved.
    ///
    /// Returns whether it was inserted.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(product.id) {
            return false;
        }
        self.items.push(product.clone());
        true
    }

    /// Drops the product with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|p| p.id != id);
        self.items.len() != initial_len
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Heart button on the details page: removes if saved, saves otherwise.
    ///
    /// Returns the new membership.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.remove(product.id) {
            false
        } else {
            self.add(product)
        }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
