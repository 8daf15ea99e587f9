//! # Store
//!
//! An ordered product collection with aggregate queries and multi-line
//! order execution.
//!
//! ## Order Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store::order Pipeline                              │
//! │                                                                         │
//! │  shopping list      consolidate          buy once per product          │
//! │  (id, qty) lines ──► sum per id ───────► Product::buy(total_qty) ──┐   │
//! │  [(X,1),(X,1)]       [(X,2)]             promotion sees qty=2      │   │
//! │                                                                     ▼   │
//! │                                                          Σ line prices  │
//! │                                                                         │
//! │  Consolidation is a correctness requirement, not an optimization:      │
//! │  tiered promotions (second-half-price) must see the combined           │
//! │  quantity, so [(X,1),(X,1)] prices identically to [(X,2)].             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Any failing line aborts the order with no total. Stock already
//! decremented for products processed earlier in the same call is NOT
//! rolled back; this preserves the reference behavior and is covered by a
//! regression test below.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::{Product, ProductKind};

/// Product handle used in order lines and store lookups.
pub type ProductId = String;

// =============================================================================
// Store
// =============================================================================

/// A store holding an ordered sequence of products.
///
/// Insertion order is preserved and significant only for display, never
/// for pricing. Products are constructed by the caller and moved in; the
/// store never constructs them. An inactive product stays in the
/// collection, merely excluded from listings and totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Creates a store from an initial product collection.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Product, Store};
    ///
    /// let store = Store::new(vec![
    ///     Product::new("MacBook Air M2", Money::from_cents(145000), 100).unwrap(),
    ///     Product::new("Google Pixel 7", Money::from_cents(50000), 250).unwrap(),
    /// ]);
    /// assert_eq!(store.products().len(), 2);
    /// ```
    pub fn new(products: Vec<Product>) -> Self {
        Store { products }
    }

    /// Adds a product to the end of the collection.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes a product by id and returns it.
    ///
    /// ## Errors
    /// `NotFound` when no product has the given id. Failing loudly (rather
    /// than a silent no-op) is the documented choice here: a stale handle
    /// is a caller bug worth surfacing.
    pub fn remove_product(&mut self, id: &str) -> CoreResult<Product> {
        match self.products.iter().position(|p| p.id() == id) {
            Some(index) => Ok(self.products.remove(index)),
            None => Err(CoreError::NotFound(id.to_string())),
        }
    }

    /// Returns the full collection, inactive products included.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    #[inline]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Looks up a product by id for mutation (promotion assignment,
    /// restocking, price updates).
    #[inline]
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// Sums stock over active products.
    pub fn total_quantity(&self) -> i64 {
        self.products
            .iter()
            .filter(|p| p.is_active())
            .map(Product::quantity)
            .sum()
    }

    /// Returns the purchasable listing, in insertion order.
    ///
    /// A product is listed when it is active AND (has stock OR is
    /// non-stocked); non-stocked products always appear despite their
    /// pinned 0 quantity.
    pub fn active_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| {
                p.is_active() && (p.quantity() > 0 || p.kind() == ProductKind::NonStocked)
            })
            .collect()
    }

    /// Executes a multi-line order and returns the total price.
    ///
    /// Lines naming the same product are consolidated (quantities summed,
    /// first-occurrence order) before `buy` runs once per distinct
    /// product, so tiered promotions always see the combined quantity.
    ///
    /// ## Errors
    /// - `NotFound` for an id not in the store
    /// - any `Product::buy` error (`InvalidQuantity`, `InsufficientStock`,
    ///   `ExceedsOrderLimit`)
    ///
    /// A failure aborts the order; stock already decremented for
    /// earlier-processed products is not rolled back.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Product, Store};
    ///
    /// let mut store = Store::new(vec![
    ///     Product::new("Bose QuietComfort Earbuds", Money::from_cents(25000), 500).unwrap(),
    /// ]);
    /// let id = store.products()[0].id().to_string();
    ///
    /// let total = store.order(&[(id, 2)]).unwrap();
    /// assert_eq!(total, Money::from_cents(50000));
    /// ```
    pub fn order(&mut self, shopping_list: &[(ProductId, i64)]) -> CoreResult<Money> {
        // Consolidate quantities for the same product, keeping the order
        // in which each product first appears
        let mut consolidated: Vec<(&str, i64)> = Vec::new();
        for (id, quantity) in shopping_list {
            match consolidated.iter_mut().find(|entry| entry.0 == id.as_str()) {
                Some(entry) => entry.1 += *quantity,
                None => consolidated.push((id.as_str(), *quantity)),
            }
        }

        let mut total_price = Money::zero();
        for (id, quantity) in consolidated {
            let product = self
                .products
                .iter_mut()
                .find(|p| p.id() == id)
                .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
            total_price += product.buy(quantity)?;
        }

        Ok(total_price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
