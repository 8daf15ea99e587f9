//! # storefront-core: Pure Business Logic for Storefront
//!
//! This crate is the **heart** of Storefront. It models a small retail
//! inventory — products, promotional pricing, and multi-line orders — as
//! pure in-memory logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation Layer (external caller)               │   │
//! │  │     menu loop ──► input parsing ──► rendering engine errors    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ promotion │  │  product  │  │   store   │  │   money   │  │   │
//! │  │   │ Promotion │  │  Product  │  │   Store   │  │   Money   │  │   │
//! │  │   │  apply()  │  │   buy()   │  │  order()  │  │   cents   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO PERSISTENCE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`promotion`] - stateless pricing strategies (percent off, second half
//!   price, third one free)
//! - [`product`] - product variants (standard, non-stocked, order-capped)
//!   and the `buy` state machine
//! - [`store`] - ordered catalog, aggregate queries, order consolidation
//! - [`error`] - typed domain errors
//! - [`validation`] - input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: promotion pricing depends only on (unit price,
//!    quantity, configuration)
//! 2. **No I/O**: the engine never prints, logs, or persists; the
//!    presentation layer renders errors
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Explicit Errors**: all failures are typed enum variants, never
//!    strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_core::{Money, Product, Promotion, Store};
//!
//! // Caller builds the catalog; the store never constructs products
//! let mut earbuds =
//!     Product::new("Bose QuietComfort Earbuds", Money::from_cents(25000), 500).unwrap();
//! earbuds.set_promotion(Some(Arc::new(Promotion::third_one_free("Third One Free!"))));
//!
//! let mut store = Store::new(vec![earbuds]);
//! let id = store.products()[0].id().to_string();
//!
//! // Buy 3, pay for 2
//! let total = store.order(&[(id, 3)]).unwrap();
//! assert_eq!(total, Money::from_cents(50000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod product;
pub mod promotion;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Product` instead of
// `use storefront_core::product::Product`

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use product::{Product, ProductKind};
pub use promotion::{Promotion, PromotionKind};
pub use store::{ProductId, Store};
