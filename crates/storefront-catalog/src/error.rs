//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds context and categorization          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in the app) ← Serialized for the presentation layer         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Details page shows "Product not found"                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use storefront_core::ProductId;
use thiserror::Error;

/// Catalog source errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with this id.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Reading the catalog file failed.
    ///
    /// ## When This Occurs
    /// - File does not exist
    /// - Permissions issue
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not a product list in the expected schema.
    #[error("Malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Source could not be reached.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

impl CatalogError {
    /// Creates an Io error carrying the path that failed.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the product simply does not exist, as opposed to the source
    /// failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
