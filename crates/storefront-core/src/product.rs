//! # Products
//!
//! Catalog entries and their purchase behavior.
//!
//! ## Variant Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Product Variants                                 │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Standard     │   │   NonStocked    │   │     Limited     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  stock tracked  │   │  unlimited      │   │  stock tracked  │       │
//! │  │  deactivates    │   │  quantity fixed │   │  + per-order    │       │
//! │  │  at 0 stock     │   │  at 0 forever   │   │    maximum      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  One Product struct, one `buy`, one `set_quantity`; the variant kind   │
//! │  is a tagged enum so every per-variant rule is an exhaustive match     │
//! │  arm instead of an override chain.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Machine
//! ```text
//! active ──(stock reaches exactly 0)──► inactive      Standard/Limited only
//! inactive ──(explicit activate())────► active
//! ```
//! NonStocked products are exempt from the automatic transition: their
//! quantity is pinned at 0 and they stay active regardless.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::promotion::Promotion;
use crate::validation;

// =============================================================================
// Product Kind
// =============================================================================

/// Stock semantics for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// Ordinary stocked good.
    Standard,
    /// Unlimited availability (e.g. a software license). Quantity is fixed
    /// at 0 forever and never gates a purchase.
    NonStocked,
    /// Stocked good with a cap per single purchase call (e.g. a shipping
    /// fee that may appear at most once per order).
    Limited { max_per_order: i64 },
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// ## Dual-Key Identity
/// - `id`: UUID v4, immutable, how stores and order lines address the
///   product
/// - `name`: human-readable, immutable after creation, shown in listings
///
/// ## Invariants
/// - `price` and `quantity` are never negative; every mutation revalidates
/// - `quantity` changes flow through a single setter path that owns the
///   deactivate-at-zero rule
/// - the promotion is shared, not owned: replacing it on one product never
///   affects others holding the same `Arc`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    id: String,

    /// Display name shown in listings; non-empty.
    name: String,

    /// Unit price in cents.
    price: Money,

    /// Current stock level. Pinned at 0 for NonStocked.
    quantity: i64,

    /// Whether the product appears in listings and totals.
    active: bool,

    /// Optional pricing strategy; `None` means identity pricing.
    promotion: Option<Arc<Promotion>>,

    /// Stock semantics variant.
    kind: ProductKind,

    /// When the product was created.
    created_at: DateTime<Utc>,

    /// When the product was last mutated.
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates an ordinary stocked product.
    ///
    /// ## Errors
    /// - `InvalidName` for an empty name
    /// - `InvalidPrice` for a negative price
    /// - `InvalidQuantity` for a negative quantity
    ///
    /// A product created with quantity 0 starts inactive, exactly as if it
    /// had just sold out.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Product};
    ///
    /// let laptop = Product::new("MacBook Air M2", Money::from_cents(145000), 100).unwrap();
    /// assert_eq!(laptop.quantity(), 100);
    /// assert!(laptop.is_active());
    /// ```
    pub fn new(name: impl Into<String>, price: Money, quantity: i64) -> CoreResult<Self> {
        Self::build(name.into(), price, quantity, ProductKind::Standard)
    }

    /// Creates an unlimited-stock product.
    ///
    /// Its quantity is fixed at 0 forever; `set_quantity` always fails and
    /// `buy` never checks stock.
    pub fn non_stocked(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        Self::build(name.into(), price, 0, ProductKind::NonStocked)
    }

    /// Creates an order-capped product.
    ///
    /// In addition to the standard rules, a single `buy` call may request
    /// at most `max_per_order` units; `InvalidQuantity` is raised here for
    /// a non-positive cap.
    pub fn limited(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        max_per_order: i64,
    ) -> CoreResult<Self> {
        validation::validate_max_per_order(max_per_order)?;
        Self::build(name.into(), price, quantity, ProductKind::Limited { max_per_order })
    }

    fn build(name: String, price: Money, quantity: i64, kind: ProductKind) -> CoreResult<Self> {
        validation::validate_name(&name)?;
        validation::validate_price(price)?;
        validation::validate_quantity(quantity)?;

        let now = Utc::now();
        Ok(Product {
            id: Uuid::new_v4().to_string(),
            name,
            price,
            quantity,
            // NonStocked stays active despite its pinned 0 quantity
            active: quantity > 0 || matches!(kind, ProductKind::NonStocked),
            promotion: None,
            kind,
            created_at: now,
            updated_at: now,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the immutable product id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the product name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns the current stock level (always 0 for NonStocked).
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Returns whether the product appears in listings and totals.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the assigned promotion, if any.
    #[inline]
    pub fn promotion(&self) -> Option<&Arc<Promotion>> {
        self.promotion.as_ref()
    }

    /// Returns the stock semantics variant.
    #[inline]
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Returns when the product was created.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the product was last mutated.
    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replaces or clears the assigned promotion.
    ///
    /// The promotion is shared (`Arc`) and read-only from the product's
    /// perspective; assigning it here never affects other products holding
    /// the same strategy.
    pub fn set_promotion(&mut self, promotion: Option<Arc<Promotion>>) {
        self.promotion = promotion;
        self.updated_at = Utc::now();
    }

    /// Updates the unit price.
    ///
    /// ## Errors
    /// `InvalidPrice` for a negative price; the prior price stays intact.
    pub fn set_price(&mut self, price: Money) -> CoreResult<()> {
        validation::validate_price(price)?;
        self.price = price;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Updates the stock level.
    ///
    /// ## Errors
    /// - `UnsupportedOperation` for NonStocked products, regardless of the
    ///   value: their quantity is permanently fixed
    /// - `InvalidQuantity` for a negative value
    ///
    /// Setting stock to exactly 0 deactivates the product; restocking does
    /// NOT reactivate it by itself (use [`Product::activate`]).
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        if matches!(self.kind, ProductKind::NonStocked) {
            return Err(CoreError::UnsupportedOperation {
                name: self.name.clone(),
            });
        }
        validation::validate_quantity(quantity)?;
        self.commit_quantity(quantity);
        Ok(())
    }

    /// Makes the product eligible for listings and totals again.
    pub fn activate(&mut self) {
        self.active = true;
        self.updated_at = Utc::now();
    }

    /// Removes the product from listings and totals without deleting it.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }

    /// Processes a purchase: prices `quantity` units and decrements stock.
    ///
    /// ## Behavior Per Variant
    /// ```text
    /// all         quantity <= 0            → InvalidQuantity
    /// NonStocked  never checks stock       → price, stock untouched
    /// Limited     quantity > max_per_order → ExceedsOrderLimit (stock untouched)
    /// Std/Limited quantity > stock         → InsufficientStock (stock untouched)
    /// Std/Limited success                  → price, stock -= quantity,
    ///                                        deactivates if stock hits 0
    /// ```
    ///
    /// Pricing goes through the assigned promotion when present, otherwise
    /// `unit_price × quantity`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Product};
    ///
    /// let mut phone = Product::new("Google Pixel 7", Money::from_cents(50000), 250).unwrap();
    /// let total = phone.buy(2).unwrap();
    /// assert_eq!(total, Money::from_cents(100000));
    /// assert_eq!(phone.quantity(), 248);
    /// ```
    pub fn buy(&mut self, quantity: i64) -> CoreResult<Money> {
        validation::validate_purchase_quantity(quantity)?;

        match self.kind {
            ProductKind::NonStocked => Ok(self.price_for(quantity)),
            ProductKind::Limited { max_per_order } if quantity > max_per_order => {
                Err(CoreError::ExceedsOrderLimit {
                    name: self.name.clone(),
                    max_per_order,
                    requested: quantity,
                })
            }
            ProductKind::Standard | ProductKind::Limited { .. } => {
                if quantity > self.quantity {
                    return Err(CoreError::InsufficientStock {
                        name: self.name.clone(),
                        available: self.quantity,
                        requested: quantity,
                    });
                }

                let total = self.price_for(quantity);
                self.commit_quantity(self.quantity - quantity);
                Ok(total)
            }
        }
    }

    /// Compares two products by price, for display sorting.
    ///
    /// Deliberately a named method rather than `Ord`: price order is not an
    /// identity or equality relation between products.
    #[inline]
    pub fn cmp_by_price(&self, other: &Product) -> Ordering {
        self.price.cmp(&other.price)
    }

    /// Prices a purchase through the promotion, or linearly without one.
    fn price_for(&self, quantity: i64) -> Money {
        match &self.promotion {
            Some(promotion) => promotion.apply(self.price, quantity),
            None => self.price * quantity,
        }
    }

    /// The single quantity setter path; owns the deactivate-at-zero rule.
    fn commit_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        if quantity == 0 {
            self.active = false;
        }
        self.updated_at = Utc::now();
    }
}

// =============================================================================
// Display
// =============================================================================

/// Human-readable summary, as the listing view renders it.
///
/// NonStocked shows `Quantity: Unlimited`; Limited shows its per-order cap
/// instead of a stock count.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let promotion = self
            .promotion
            .as_deref()
            .map(Promotion::name)
            .unwrap_or("None");

        match self.kind {
            ProductKind::Standard => write!(
                f,
                "{}, Price: {}, Quantity: {}, Promotion: {}",
                self.name, self.price, self.quantity, promotion
            ),
            ProductKind::NonStocked => write!(
                f,
                "{}, Price: {}, Quantity: Unlimited, Promotion: {}",
                self.name, self.price, promotion
            ),
            ProductKind::Limited { max_per_order } => write!(
                f,
                "{}, Price: {}, Limited to {} per order!, Promotion: {}",
                self.name, self.price, max_per_order, promotion
            ),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product::new("Laptop", Money::from_cents(1000), 10).unwrap()
    }

    #[test]
    fn test_product_creation() {
        let product = laptop();
        assert_eq!(product.name(), "Laptop");
        assert_eq!(product.price(), Money::from_cents(1000));
        assert_eq!(product.quantity(), 10);
        assert!(product.is_active());
        assert!(product.promotion().is_none());
        assert!(!product.id().is_empty());
    }

    #[test]
    fn test_creation_invalid_details() {
        assert!(matches!(
            Product::new("", Money::from_cents(1450), 100),
            Err(CoreError::InvalidName)
        ));
        assert!(matches!(
            Product::new("MacBook Air M2", Money::from_cents(-10), 100),
            Err(CoreError::InvalidPrice { .. })
        ));
        assert!(matches!(
            Product::new("MacBook Air M2", Money::from_cents(1450), -1),
            Err(CoreError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_created_with_zero_stock_starts_inactive() {
        let product = Product::new("Sold Out", Money::from_cents(100), 0).unwrap();
        assert!(!product.is_active());
    }

    #[test]
    fn test_purchase_decrements_stock_and_prices_linearly() {
        let mut product = Product::new("Headphones", Money::from_cents(300), 5).unwrap();
        let total = product.buy(3).unwrap();
        assert_eq!(total, Money::from_cents(900));
        assert_eq!(product.quantity(), 2);
        assert!(product.is_active());
    }

    #[test]
    fn test_buy_too_much_leaves_stock_unchanged() {
        let mut product = Product::new("Smartphone", Money::from_cents(800), 2).unwrap();
        let err = product.buy(5).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 2,
                requested: 5,
                ..
            }
        ));
        assert_eq!(product.quantity(), 2);
        assert!(product.is_active());
    }

    #[test]
    fn test_buy_non_positive_quantity_fails() {
        let mut product = laptop();
        assert!(matches!(
            product.buy(0),
            Err(CoreError::InvalidQuantity { quantity: 0 })
        ));
        assert!(matches!(
            product.buy(-2),
            Err(CoreError::InvalidQuantity { quantity: -2 })
        ));
        assert_eq!(product.quantity(), 10);
    }

    #[test]
    fn test_buying_out_deactivates() {
        let mut product = Product::new("Smartphone", Money::from_cents(800), 1).unwrap();
        product.buy(1).unwrap();
        assert_eq!(product.quantity(), 0);
        assert!(!product.is_active());
    }

    #[test]
    fn test_set_quantity_to_zero_deactivates() {
        let mut product = Product::new("Smartphone", Money::from_cents(800), 1).unwrap();
        product.set_quantity(0).unwrap();
        assert_eq!(product.quantity(), 0);
        assert!(!product.is_active());
    }

    #[test]
    fn test_explicit_reactivation() {
        let mut product = Product::new("Smartphone", Money::from_cents(800), 1).unwrap();
        product.set_quantity(0).unwrap();
        assert!(!product.is_active());

        // Restocking alone does not reactivate
        product.set_quantity(5).unwrap();
        assert!(!product.is_active());

        product.activate();
        assert!(product.is_active());
    }

    #[test]
    fn test_set_price_validation_keeps_prior_price() {
        let mut product = laptop();
        assert!(matches!(
            product.set_price(Money::from_cents(-500)),
            Err(CoreError::InvalidPrice { .. })
        ));
        assert_eq!(product.price(), Money::from_cents(1000));

        product.set_price(Money::from_cents(1200)).unwrap();
        assert_eq!(product.price(), Money::from_cents(1200));
    }

    #[test]
    fn test_buy_applies_promotion() {
        let mut product = Product::new("MacBook Air M2", Money::from_cents(1450), 100).unwrap();
        product.set_promotion(Some(Arc::new(Promotion::second_half_price(
            "Second Half price!",
        ))));

        let total = product.buy(2).unwrap();
        assert_eq!(total, Money::from_cents(2175));
        assert_eq!(product.quantity(), 98);
    }

    #[test]
    fn test_promotion_replace_and_clear() {
        let mut product = laptop();
        let promo = Arc::new(Promotion::third_one_free("Third One Free!"));
        product.set_promotion(Some(Arc::clone(&promo)));
        assert_eq!(product.promotion().unwrap().name(), "Third One Free!");

        product.set_promotion(None);
        assert!(product.promotion().is_none());
    }

    #[test]
    fn test_shared_promotion_across_products() {
        let promo = Arc::new(Promotion::percent_discount("30% off!", 30.0));
        let mut a = Product::new("A", Money::from_cents(1000), 10).unwrap();
        let mut b = Product::new("B", Money::from_cents(2000), 10).unwrap();
        a.set_promotion(Some(Arc::clone(&promo)));
        b.set_promotion(Some(Arc::clone(&promo)));

        assert_eq!(a.buy(1).unwrap(), Money::from_cents(700));
        assert_eq!(b.buy(1).unwrap(), Money::from_cents(1400));
    }

    #[test]
    fn test_non_stocked_quantity_is_pinned() {
        let mut product =
            Product::non_stocked("Windows License", Money::from_cents(12500)).unwrap();
        assert_eq!(product.quantity(), 0);
        assert!(product.is_active());

        assert!(matches!(
            product.set_quantity(10),
            Err(CoreError::UnsupportedOperation { .. })
        ));
        assert!(matches!(
            product.set_quantity(0),
            Err(CoreError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn test_non_stocked_buy_never_checks_stock() {
        let mut product =
            Product::non_stocked("Windows License", Money::from_cents(12500)).unwrap();
        let total = product.buy(40).unwrap();
        assert_eq!(total, Money::from_cents(500000));
        assert_eq!(product.quantity(), 0);
        assert!(product.is_active());
    }

    #[test]
    fn test_limited_cap_per_call() {
        let mut product =
            Product::limited("Shipping", Money::from_cents(1000), 250, 1).unwrap();

        let err = product.buy(2).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ExceedsOrderLimit {
                max_per_order: 1,
                requested: 2,
                ..
            }
        ));
        assert_eq!(product.quantity(), 250);

        // Within the cap, standard rules apply
        assert_eq!(product.buy(1).unwrap(), Money::from_cents(1000));
        assert_eq!(product.quantity(), 249);
    }

    #[test]
    fn test_limited_still_checks_stock() {
        let mut product = Product::limited("Shipping", Money::from_cents(1000), 2, 5).unwrap();
        assert!(matches!(
            product.buy(3),
            Err(CoreError::InsufficientStock { .. })
        ));
    }

    #[test]
    fn test_limited_rejects_non_positive_cap() {
        assert!(matches!(
            Product::limited("Shipping", Money::from_cents(1000), 250, 0),
            Err(CoreError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_display_formats() {
        let mut laptop = Product::new("MacBook Air M2", Money::from_cents(145000), 100).unwrap();
        assert_eq!(
            laptop.to_string(),
            "MacBook Air M2, Price: $1450.00, Quantity: 100, Promotion: None"
        );

        laptop.set_promotion(Some(Arc::new(Promotion::second_half_price(
            "Second Half price!",
        ))));
        assert_eq!(
            laptop.to_string(),
            "MacBook Air M2, Price: $1450.00, Quantity: 100, Promotion: Second Half price!"
        );

        let license = Product::non_stocked("Windows License", Money::from_cents(12500)).unwrap();
        assert_eq!(
            license.to_string(),
            "Windows License, Price: $125.00, Quantity: Unlimited, Promotion: None"
        );

        let shipping = Product::limited("Shipping", Money::from_cents(1000), 250, 1).unwrap();
        assert_eq!(
            shipping.to_string(),
            "Shipping, Price: $10.00, Limited to 1 per order!, Promotion: None"
        );
    }

    #[test]
    fn test_cmp_by_price() {
        let cheap = Product::new("Earbuds", Money::from_cents(25000), 5).unwrap();
        let pricey = Product::new("MacBook", Money::from_cents(145000), 5).unwrap();
        assert_eq!(cheap.cmp_by_price(&pricey), Ordering::Less);
        assert_eq!(pricey.cmp_by_price(&cheap), Ordering::Greater);
        assert_eq!(cheap.cmp_by_price(&cheap), Ordering::Equal);
    }
}
