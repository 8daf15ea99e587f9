//! # Promotion Strategies
//!
//! Stateless pricing strategies applied in place of linear unit-price
//! multiplication.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Where Promotions Apply                              │
//! │                                                                         │
//! │  Store::order ──► Product::buy ──► Promotion::apply ──► line price     │
//! │                        │                                                │
//! │                        └── no promotion ──► unit_price × quantity      │
//! │                                                                         │
//! │  apply() is a pure function of (unit price, quantity, configuration).  │
//! │  It never inspects stock and never mutates anything, so a single       │
//! │  Promotion can be shared (Arc) across many products.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Per-Call Scoping
//! Tiered promotions group units within ONE `buy` call only. Two separate
//! purchases of quantity 1 each are priced independently at full price;
//! they are never paired retroactively. `Store::order` consolidates a
//! shopping list per product before buying precisely so that split lines
//! in one order still reach the promotion as a single quantity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Promotion Kind
// =============================================================================

/// The fixed set of promotion strategies.
///
/// A closed enumeration: adding a strategy means adding a variant and an
/// arm in [`Promotion::apply`], which the compiler checks exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionKind {
    /// Flat percentage off the whole line, in basis points (3000 = 30%).
    ///
    /// Expected in 0-10000 bps but not enforced above; over-100% discounts
    /// produce negative prices.
    PercentDiscount { bps: u32 },
    /// Every second unit in the call is half price.
    SecondHalfPrice,
    /// Every third unit in the call is free.
    ThirdOneFree,
}

// =============================================================================
// Promotion
// =============================================================================

/// A named, stateless pricing strategy.
///
/// Carries no mutable state beyond its configuration; safe to share across
/// many products via `Arc<Promotion>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    name: String,
    kind: PromotionKind,
}

impl Promotion {
    /// Creates a percentage discount promotion.
    ///
    /// `percent` is expected in 0-100 but the upper bound is not enforced.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Promotion};
    ///
    /// let promo = Promotion::percent_discount("30% off!", 30.0);
    /// let price = promo.apply(Money::from_cents(1000), 2);
    /// assert_eq!(price.cents(), 1400);
    /// ```
    pub fn percent_discount(name: impl Into<String>, percent: f64) -> Self {
        Promotion {
            name: name.into(),
            kind: PromotionKind::PercentDiscount {
                bps: (percent * 100.0).round() as u32,
            },
        }
    }

    /// Creates a "second item at half price" promotion.
    pub fn second_half_price(name: impl Into<String>) -> Self {
        Promotion {
            name: name.into(),
            kind: PromotionKind::SecondHalfPrice,
        }
    }

    /// Creates a "buy 2, get 1 free" promotion.
    pub fn third_one_free(name: impl Into<String>) -> Self {
        Promotion {
            name: name.into(),
            kind: PromotionKind::ThirdOneFree,
        }
    }

    /// Returns the display name of the promotion.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the strategy configuration.
    #[inline]
    pub fn kind(&self) -> PromotionKind {
        self.kind
    }

    /// Prices `quantity` units at `unit_price` under this strategy.
    ///
    /// Pure: same inputs always produce the same price. `quantity` is the
    /// already-consolidated amount for one buy call; tier pairing never
    /// spans calls.
    ///
    /// ## Strategy Math
    /// ```text
    /// PercentDiscount  price = unit × qty − round(unit × qty × bps/10000)
    /// SecondHalfPrice  full = ⌈qty/2⌉, half = ⌊qty/2⌋
    ///                  price = full × unit + half × round_up(unit/2)
    /// ThirdOneFree     price = (qty − ⌊qty/3⌋) × unit
    /// ```
    pub fn apply(&self, unit_price: Money, quantity: i64) -> Money {
        match self.kind {
            PromotionKind::PercentDiscount { bps } => {
                (unit_price * quantity).apply_percent_discount(bps)
            }
            PromotionKind::SecondHalfPrice => {
                let half_items = quantity / 2;
                let full_items = quantity - half_items;
                unit_price * full_items + unit_price.half_rounded_up() * half_items
            }
            PromotionKind::ThirdOneFree => {
                let payable_items = quantity - quantity / 3;
                unit_price * payable_items
            }
        }
    }
}

/// Display shows the promotion name, as listings render it.
impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
