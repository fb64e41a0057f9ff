//! # Cart Module
//!
//! The cart is an **immutable value**: every operation consumes the cart and
//! returns a new one, and callers replace their copy wholesale. There is no
//! shared mutable cart anywhere in the system.
//!
//! ## Functional Update Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Update Flow                                   │
//! │                                                                         │
//! │  Front-end action              Cart operation          Result           │
//! │  ────────────────              ──────────────          ──────           │
//! │  Pick product, qty 2 ────────► with_product(p, 2) ───► new Cart value   │
//! │  Change qty to 3 ────────────► with_quantity(id, 3) ─► new Cart value   │
//! │  Negotiate the price ────────► with_unit_price(…) ───► new Cart value   │
//! │  Set qty to 0 / remove ──────► with_quantity(id, 0) ─► line removed     │
//! │                                                                         │
//! │  Each new value keeps insertion order and is keyed by product id.       │
//! │  The calculator takes a snapshot: cart.lines() → &[CartLine].           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariant
//! `line_total == unit_price × quantity` holds for every line after every
//! operation; totals are recomputed whenever price or quantity changes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::billing::{BillBreakdown, BillRates};
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// One line of the cart: a product snapshot plus quantity and line total.
///
/// The snapshot freezes name, HSN and (initially) the listed price; the
/// unit price may then be overridden per sale without touching the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub hsn: Option<String>,
    pub unit_price: Money,
    pub quantity: i64,
    /// Always `unit_price × quantity`; maintained by every cart operation.
    pub line_total: Money,
}

impl CartLine {
    fn new(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            hsn: product.hsn.clone(),
            unit_price: product.unit_price,
            quantity,
            line_total: product.unit_price * quantity,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// An immutable cart keyed by product id, preserving insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// The snapshot sequence the calculator consumes.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the line for a product id, if present.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Sets the quantity for a product, adding a line if needed.
    ///
    /// ## Behavior
    /// - `quantity ≤ 0`: the line is removed (a zero-quantity item is
    ///   logically absent from the cart)
    /// - product already in cart: quantity is replaced and the line keeps
    ///   its current, possibly overridden, unit price
    /// - otherwise: a new line is appended at the listed price
    #[must_use]
    pub fn with_product(mut self, product: &Product, quantity: i64) -> Cart {
        if quantity <= 0 {
            self.lines.retain(|l| l.product_id != product.id);
            return self;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = quantity;
            line.line_total = line.unit_price * quantity;
        } else {
            self.lines.push(CartLine::new(product, quantity));
        }
        self
    }

    /// Sets the quantity of an existing line.
    ///
    /// `quantity ≤ 0` removes the line; an unknown product id leaves the
    /// cart unchanged.
    #[must_use]
    pub fn with_quantity(mut self, product_id: &str, quantity: i64) -> Cart {
        if quantity <= 0 {
            self.lines.retain(|l| l.product_id != product_id);
            return self;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
            line.line_total = line.unit_price * quantity;
        }
        self
    }

    /// Overrides the unit price of an existing line, clamped to ≥ 0.
    ///
    /// An unknown product id leaves the cart unchanged.
    #[must_use]
    pub fn with_unit_price(mut self, product_id: &str, unit_price: Money) -> Cart {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.unit_price = Money::from_rupees(unit_price.rupees().max(0.0));
            line.line_total = line.unit_price * line.quantity;
        }
        self
    }

    /// Removes a line by product id.
    #[must_use]
    pub fn without(mut self, product_id: &str) -> Cart {
        self.lines.retain(|l| l.product_id != product_id);
        self
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Computes the full bill breakdown for this cart under the given rates.
    pub fn breakdown(&self, rates: &BillRates) -> BillBreakdown {
        BillBreakdown::compute(&self.lines, rates)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
