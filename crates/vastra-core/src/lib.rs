//! # vastra-core: Pure Business Logic for Vastra Billing
//!
//! This crate is the **heart** of Vastra Billing. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Vastra Billing Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Front End (CLI / browser)                   │   │
//! │  │    Catalog ──► Cart ──► Rates ──► Invoice preview              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vastra-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  billing  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ Breakdown │  │   │
//! │  │   │  Customer │  │   Rate    │  │ CartLine  │  │  pipeline │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │   words   │  │ validation│                                 │   │
//! │  │   │ RUPEES …  │  │   rules   │                                 │   │
//! │  │   │  ONLY     │  │   checks  │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │       vastra-import (CSV) · vastra-invoice (text rendering)     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Customer, CompanyProfile, etc.)
//! - [`money`] - Money and Rate types with decimal (f64) arithmetic
//! - [`cart`] - Immutable cart value with functional updates
//! - [`billing`] - The subtotal → discount → GST → grand total pipeline
//! - [`words`] - Amount-in-words renderer (Indian numbering system)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File, network, terminal access is FORBIDDEN here
//! 3. **Unrounded Pipeline**: Monetary values stay exact between pipeline
//!    steps; rounding to two decimals happens only at the display layer
//! 4. **Total Arithmetic**: The calculator never rejects inputs - NaN in,
//!    NaN out; validation is a separate, caller-side concern
//!
//! ## Example Usage
//!
//! ```rust
//! use vastra_core::{BillRates, Cart, Money, Product, Rate};
//! use vastra_core::words::rupees_in_words;
//!
//! let saree = Product {
//!     id: "s1".into(),
//!     name: "Kanchipuram Silk".into(),
//!     category: "Silk".into(),
//!     unit_price: Money::from_rupees(1000.0),
//!     hsn: None,
//! };
//!
//! let cart = Cart::new().with_product(&saree, 2);
//! let rates = BillRates {
//!     cgst: Rate::from_percent(2.5),
//!     sgst: Rate::from_percent(2.5),
//!     ..BillRates::default()
//! };
//!
//! let breakdown = cart.breakdown(&rates);
//! assert_eq!(breakdown.grand_total, Money::from_rupees(2100.0));
//! assert_eq!(
//!     rupees_in_words(breakdown.grand_total),
//!     "RUPEES TWO THOUSAND ONE HUNDRED ONLY"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vastra_core::Money` instead of
// `use vastra_core::money::Money`

pub use billing::{BillBreakdown, BillRates};
pub use cart::{Cart, CartLine};
pub use error::{CoreError, ValidationError};
pub use money::{Money, Rate};
pub use types::*;
pub use words::rupees_in_words;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and keeps a bill printable on one invoice page.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line in a cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
