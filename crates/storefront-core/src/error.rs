//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  └── CoreError  - validation and business rule failures                │
//! │                                                                         │
//! │  Presentation layer (external caller)                                  │
//! │  └── catches CoreError and renders a message; the engine itself        │
//! │      never prints or logs                                              │
//! │                                                                         │
//! │  Flow: CoreError → caller → user-facing message                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, quantities)
//! 3. Errors are enum variants, never String
//! 4. A failed mutation never commits the invalid state

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule and validation failures raised by the engine.
///
/// Every fallible engine operation returns one of these. The caller is
/// expected to translate variants into user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product name was empty (or whitespace only).
    #[error("product name cannot be empty")]
    InvalidName,

    /// A price was negative.
    ///
    /// Raised at construction and by `set_price`; the prior price is left
    /// intact on failure.
    #[error("product price cannot be negative: {price}")]
    InvalidPrice { price: Money },

    /// A quantity was out of range.
    ///
    /// ## When This Occurs
    /// - Constructing a product with negative stock
    /// - `set_quantity` with a negative value
    /// - `buy` with a zero or negative purchase quantity
    /// - Constructing an order-capped product with a non-positive maximum
    #[error("invalid quantity: {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// Not enough stock to satisfy a purchase.
    ///
    /// Stock is left untouched when this is raised.
    #[error("insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A single purchase of an order-capped product exceeded its maximum.
    ///
    /// The cap applies per `buy` call, not across a product's history.
    #[error("only {max_per_order} of {name} allowed per order, requested {requested}")]
    ExceedsOrderLimit {
        name: String,
        max_per_order: i64,
        requested: i64,
    },

    /// The operation is not supported by this product variant.
    ///
    /// Raised by `set_quantity` on non-stocked products, whose quantity is
    /// permanently fixed.
    #[error("quantity of non-stocked product {name} cannot be changed")]
    UnsupportedOperation { name: String },

    /// No product with the given id exists in the store.
    #[error("product not found: {0}")]
    NotFound(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Google Pixel 7".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for Google Pixel 7: available 3, requested 5"
        );

        let err = CoreError::ExceedsOrderLimit {
            name: "Shipping".to_string(),
            max_per_order: 1,
            requested: 2,
        };
        assert_eq!(
            err.to_string(),
            "only 1 of Shipping allowed per order, requested 2"
        );
    }

    #[test]
    fn test_invalid_price_message_renders_money() {
        let err = CoreError::InvalidPrice {
            price: Money::from_cents(-1000),
        };
        assert_eq!(err.to_string(), "product price cannot be negative: -$10.00");
    }
}
