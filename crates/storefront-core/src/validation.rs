//! # Validation Module
//!
//! Checks applied to product records as they enter the system.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Happens                           │
//! │                                                                         │
//! │  Catalog source (JSON / API)                                           │
//! │  ├── Type validation (serde deserialization)                           │
//! │  └── THIS MODULE: product invariants                                   │
//! │           │   title present, price ≥ 0, rating in 0..=5                │
//! │           ▼                                                             │
//! │  Engines (cart / wishlist / query)                                     │
//! │  └── Trust their input; every operation is total                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filter bounds are deliberately NOT validated here: an inverted price range
//! yields an empty product list rather than an error.
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_product, validate_title};
//! use storefront_core::{Money, Product, ProductId};
//!
//! assert!(validate_title("Mens Cotton Jacket").is_ok());
//! assert!(validate_title("   ").is_err());
//!
//! let product = Product::new(ProductId::new(1), "Jacket", Money::from_cents(5599), "clothing");
//! assert!(validate_product(&product).is_ok());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Product, Rating};
use crate::MAX_RATING;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product title.
pub const MAX_TITLE_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_TITLE_LEN`] characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

/// Validates a category name. Any non-blank string is accepted.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative (free items are allowed)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a review summary.
///
/// ## Rules
/// - `rate` must be a number between 0 and 5 inclusive
pub fn validate_rating(rating: &Rating) -> ValidationResult<()> {
    if !(0.0..=MAX_RATING).contains(&rating.rate) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: "0".to_string(),
            max: MAX_RATING.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validator
// =============================================================================

/// Validates a whole product record, reporting the first broken rule.
pub fn validate_product(product: &Product) -> CoreResult<()> {
    let wrap = |source| CoreError::InvalidProduct {
        id: product.id,
        source,
    };

    validate_title(&product.title).map_err(wrap)?;
    validate_category(&product.category).map_err(wrap)?;
    validate_price(product.price).map_err(wrap)?;
    validate_rating(&product.rating).map_err(wrap)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
