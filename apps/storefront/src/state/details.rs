//! # Product Details State
//!
//! The details page for one product: fetch status, quantity selector.
//!
//! ## Stale Responses
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ticketed Detail Requests                             │
//! │                                                                         │
//! │  begin(#1) ──► ticket 1 ───────────── fetch #1 ─────────────┐          │
//! │  begin(#2) ──► ticket 2 ──── fetch #2 ──┐                   │          │
//! │                                         ▼                   ▼          │
//! │                                resolve(t2) ✓ shown   resolve(t1) ✗     │
//! │                                                      (discarded)       │
//! │                                                                         │
//! │  Only the response carrying the latest ticket is applied.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{Product, ProductId};
use tracing::debug;

/// Identifies one detail request. Issued by [`ProductDetailsState::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DetailTicket(u64);

/// What the details page is showing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "product", rename_all = "camelCase")]
pub enum DetailStatus {
    /// No product opened.
    Idle,
    /// Waiting for the catalog.
    Loading,
    Loaded(Product),
    /// The catalog had no such product, or the fetch failed.
    NotFound,
}

#[derive(Debug, Clone)]
pub struct ProductDetailsState {
    generation: u64,
    requested: Option<ProductId>,
    status: DetailStatus,
    quantity: u32,
}

impl Default for ProductDetailsState {
    fn default() -> Self {
        ProductDetailsState {
            generation: 0,
            requested: None,
            status: DetailStatus::Idle,
            quantity: 1,
        }
    }
}

impl ProductDetailsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `id`: shows the loading state, resets the quantity selector to
    /// one and returns the ticket the response must carry.
    pub fn begin(&mut self, id: ProductId) -> DetailTicket {
        self.generation += 1;
        self.requested = Some(id);
        self.status = DetailStatus::Loading;
        self.quantity = 1;
        DetailTicket(self.generation)
    }

    /// Applies a fetch result. Returns false (and changes nothing) when a
    /// newer request has been issued since `ticket`.
    pub fn resolve(&mut self, ticket: DetailTicket, product: Option<Product>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "Discarding stale product details response"
            );
            return false;
        }

        self.status = match product {
            Some(product) => DetailStatus::Loaded(product),
            None => DetailStatus::NotFound,
        };
        true
    }

    /// Leaves the page. Responses still in flight are discarded.
    pub fn close(&mut self) {
        self.generation += 1;
        self.requested = None;
        self.status = DetailStatus::Idle;
        self.quantity = 1;
    }

    pub fn status(&self) -> &DetailStatus {
        &self.status
    }

    pub fn product(&self) -> Option<&Product> {
        match &self.status {
            DetailStatus::Loaded(product) => Some(product),
            _ => None,
        }
    }

    pub fn requested(&self) -> Option<ProductId> {
        self.requested
    }

    pub fn is_loading(&self) -> bool {
        self.status == DetailStatus::Loading
    }

    // =========================================================================
    // Quantity Selector
    // =========================================================================

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn increment_quantity(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_add(1);
        self.quantity
    }

    /// Never goes below one.
    pub fn decrement_quantity(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_sub(1).max(1);
        self.quantity
    }

    /// Sets the selector, clamping to at least one.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }
}
