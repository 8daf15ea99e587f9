//! # Validation Module
//!
//! Input validation for catalog construction and mutation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (external caller)                               │
//! │  ├── input parsing, immediate user feedback                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── every constructor and setter revalidates, so an invalid value     │
//! │  │   can never be committed no matter what the caller does             │
//! │  └── a failed mutation leaves the prior value intact                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_name;
///
/// assert!(validate_name("MacBook Air M2").is_ok());
/// assert!(validate_name("").is_err());
/// ```
pub fn validate_name(name: &str) -> CoreResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::InvalidName);
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items)
pub fn validate_price(price: Money) -> CoreResult<()> {
    if price.is_negative() {
        return Err(CoreError::InvalidPrice { price });
    }

    Ok(())
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: sold-out product)
pub fn validate_quantity(quantity: i64) -> CoreResult<()> {
    if quantity < 0 {
        return Err(CoreError::InvalidQuantity { quantity });
    }

    Ok(())
}

/// Validates a purchase quantity.
///
/// ## Rules
/// - Must be strictly positive; a purchase of zero items is not an order
pub fn validate_purchase_quantity(quantity: i64) -> CoreResult<()> {
    if quantity <= 0 {
        return Err(CoreError::InvalidQuantity { quantity });
    }

    Ok(())
}

/// Validates a per-order maximum for order-capped products.
///
/// ## Rules
/// - Must be strictly positive; a cap of zero would make the product
///   unpurchasable
pub fn validate_max_per_order(max_per_order: i64) -> CoreResult<()> {
    if max_per_order <= 0 {
        return Err(CoreError::InvalidQuantity {
            quantity: max_per_order,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Bose QuietComfort Earbuds").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(0)).is_ok());
        assert!(validate_price(Money::from_cents(1450)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(500).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_purchase_quantity() {
        assert!(validate_purchase_quantity(1).is_ok());
        assert!(validate_purchase_quantity(0).is_err());
        assert!(validate_purchase_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_max_per_order() {
        assert!(validate_max_per_order(1).is_ok());
        assert!(validate_max_per_order(0).is_err());
        assert!(validate_max_per_order(-2).is_err());
    }
}
