//! # Billing Module
//!
//! The deterministic pipeline that turns cart lines plus rate parameters
//! into a fully reconciled bill breakdown.
//!
//! ## The Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Billing Pipeline (exact order)                     │
//! │                                                                         │
//! │  1. raw_subtotal            = Σ unit_price × quantity                   │
//! │  2. discount_amount         = raw_subtotal × discount% / 100            │
//! │  3. subtotal_after_discount = raw_subtotal − discount_amount            │
//! │  4. cgst/sgst/igst_amount   = subtotal_after_discount × rate% / 100     │
//! │  5. total_tax               = cgst + sgst + igst                        │
//! │  6. grand_total             = subtotal_after_discount + total_tax       │
//! │                               + other_charges                           │
//! │                                                                         │
//! │  Every step feeds the next at FULL precision. Nothing is rounded        │
//! │  until the display layer formats the result.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totality
//! `compute` is total arithmetic: no errors, no clamping, no exceptions.
//! Negative charges act as credits, NaN inputs yield NaN outputs, and a
//! zero-quantity line simply contributes zero. Rejecting out-of-range
//! input is the job of [`crate::validation`], before this pipeline runs.
//!
//! ## Tax Model
//! CGST, SGST and IGST are three independent, additive percentages of the
//! taxable value. Intra-state sales use CGST+SGST, inter-state sales use
//! IGST; the pipeline applies whatever combination the caller supplies and
//! enforces no mutual exclusivity.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::money::{Money, Rate};

// =============================================================================
// Rate Parameters
// =============================================================================

/// The per-invoice rate parameters, immutable for one calculation call.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillRates {
    /// Discount applied to the raw subtotal.
    pub discount: Rate,
    /// Central GST on the taxable value.
    pub cgst: Rate,
    /// State GST on the taxable value.
    pub sgst: Rate,
    /// Integrated GST on the taxable value.
    pub igst: Rate,
    /// Flat charges added after tax. May be negative (credit/adjustment).
    pub other_charges: Money,
}

// =============================================================================
// Bill Breakdown
// =============================================================================

/// The full reconciled breakdown of one bill.
///
/// Not stored anywhere: recomputed on demand from the cart and rates on
/// every change, which is cheap (O(n) in lines) and keeps a single source
/// of truth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillBreakdown {
    /// Gross total before discount: Σ unit_price × quantity.
    pub raw_subtotal: Money,
    pub discount_amount: Money,
    /// The taxable value: raw subtotal less discount.
    pub subtotal_after_discount: Money,
    pub cgst_amount: Money,
    pub sgst_amount: Money,
    pub igst_amount: Money,
    pub total_tax: Money,
    pub other_charges: Money,
    pub grand_total: Money,
}

impl BillBreakdown {
    /// Runs the billing pipeline over a snapshot of cart lines.
    ///
    /// ## Example
    /// ```rust
    /// use vastra_core::{BillBreakdown, BillRates, Cart, Money, Product, Rate};
    ///
    /// let saree = Product {
    ///     id: "s1".into(),
    ///     name: "Soft Silk".into(),
    ///     category: "Silk".into(),
    ///     unit_price: Money::from_rupees(500.0),
    ///     hsn: None,
    /// };
    /// let cart = Cart::new().with_product(&saree, 1);
    /// let rates = BillRates {
    ///     discount: Rate::from_percent(10.0),
    ///     igst: Rate::from_percent(5.0),
    ///     other_charges: Money::from_rupees(25.0),
    ///     ..BillRates::default()
    /// };
    ///
    /// let breakdown = BillBreakdown::compute(cart.lines(), &rates);
    /// assert_eq!(breakdown.grand_total, Money::from_rupees(497.5));
    /// ```
    pub fn compute(lines: &[CartLine], rates: &BillRates) -> BillBreakdown {
        // Step 1: gross subtotal from price × quantity, not the cached
        // line totals, so a stray zero-quantity line contributes zero
        let raw_subtotal: Money = lines.iter().map(|l| l.unit_price * l.quantity).sum();

        // Steps 2-3: discount, then the taxable value
        let discount_amount = raw_subtotal.apply_rate(rates.discount);
        let subtotal_after_discount = raw_subtotal - discount_amount;

        // Step 4: three independent GST components on the taxable value
        let cgst_amount = subtotal_after_discount.apply_rate(rates.cgst);
        let sgst_amount = subtotal_after_discount.apply_rate(rates.sgst);
        let igst_amount = subtotal_after_discount.apply_rate(rates.igst);

        // Steps 5-6: tax total, then the grand total
        let total_tax = cgst_amount + sgst_amount + igst_amount;
        let grand_total = subtotal_after_discount + total_tax + rates.other_charges;

        BillBreakdown {
            raw_subtotal,
            discount_amount,
            subtotal_after_discount,
            cgst_amount,
            sgst_amount,
            igst_amount,
            total_tax,
            other_charges: rates.other_charges,
            grand_total,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::types::Product;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Saree {}", id),
            category: "Silk".to_string(),
            unit_price: Money::from_rupees(price),
            hsn: None,
        }
    }

    fn line(price: f64, quantity: i64) -> CartLine {
        let p = product("x", price);
        Cart::new().with_product(&p, quantity).lines()[0].clone()
    }

    #[test]
    fn test_intra_state_sale() {
        // 2 × ₹1000 at CGST 2.5% + SGST 2.5%
        let cart = Cart::new().with_product(&product("1", 1000.0), 2);
        let rates = BillRates {
            cgst: Rate::from_percent(2.5),
            sgst: Rate::from_percent(2.5),
            ..BillRates::default()
        };

        let b = cart.breakdown(&rates);
        assert_eq!(b.raw_subtotal.rupees(), 2000.0);
        assert_eq!(b.discount_amount.rupees(), 0.0);
        assert_eq!(b.subtotal_after_discount.rupees(), 2000.0);
        assert_eq!(b.cgst_amount.rupees(), 50.0);
        assert_eq!(b.sgst_amount.rupees(), 50.0);
        assert_eq!(b.igst_amount.rupees(), 0.0);
        assert_eq!(b.total_tax.rupees(), 100.0);
        assert_eq!(b.grand_total.rupees(), 2100.0);
    }

    #[test]
    fn test_inter_state_sale_with_discount_and_charges() {
        // ₹500 at 10% discount, IGST 5%, ₹25 other charges
        let cart = Cart::new().with_product(&product("1", 500.0), 1);
        let rates = BillRates {
            discount: Rate::from_percent(10.0),
            igst: Rate::from_percent(5.0),
            other_charges: Money::from_rupees(25.0),
            ..BillRates::default()
        };

        let b = cart.breakdown(&rates);
        assert_eq!(b.raw_subtotal.rupees(), 500.0);
        assert_eq!(b.discount_amount.rupees(), 50.0);
        assert_eq!(b.subtotal_after_discount.rupees(), 450.0);
        assert_eq!(b.igst_amount.rupees(), 22.5);
        assert_eq!(b.grand_total.rupees(), 497.5);
    }

    #[test]
    fn test_zero_rates_are_identity() {
        let cart = Cart::new()
            .with_product(&product("1", 1250.0), 2)
            .with_product(&product("2", 499.5), 3);

        let b = cart.breakdown(&BillRates::default());
        assert_eq!(b.grand_total.rupees(), b.raw_subtotal.rupees());
        assert_eq!(b.raw_subtotal.rupees(), 1250.0 * 2.0 + 499.5 * 3.0);
    }

    #[test]
    fn test_breakdown_chain_reconciles() {
        let cart = Cart::new()
            .with_product(&product("1", 333.33), 3)
            .with_product(&product("2", 120.0), 7);
        let rates = BillRates {
            discount: Rate::from_percent(7.5),
            cgst: Rate::from_percent(2.5),
            sgst: Rate::from_percent(2.5),
            igst: Rate::from_percent(1.0),
            other_charges: Money::from_rupees(-20.0),
        };

        let b = cart.breakdown(&rates);
        assert_eq!(
            b.subtotal_after_discount.rupees(),
            b.raw_subtotal.rupees() - b.discount_amount.rupees()
        );
        assert_eq!(
            b.total_tax.rupees(),
            b.cgst_amount.rupees() + b.sgst_amount.rupees() + b.igst_amount.rupees()
        );
        assert_eq!(
            b.grand_total.rupees(),
            b.subtotal_after_discount.rupees() + b.total_tax.rupees() + b.other_charges.rupees()
        );
    }

    #[test]
    fn test_negative_other_charges_is_a_credit() {
        let cart = Cart::new().with_product(&product("1", 100.0), 1);
        let rates = BillRates {
            other_charges: Money::from_rupees(-20.0),
            ..BillRates::default()
        };

        assert_eq!(cart.breakdown(&rates).grand_total.rupees(), 80.0);
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let b = BillBreakdown::compute(&[], &BillRates::default());
        assert!(b.raw_subtotal.is_zero());
        assert!(b.grand_total.is_zero());
    }

    #[test]
    fn test_zero_quantity_line_contributes_nothing() {
        // Callers remove zero-quantity lines, but one slipping through
        // must still add zero to the subtotal
        let mut stray = line(750.0, 1);
        stray.quantity = 0;
        let lines = vec![line(100.0, 2), stray];

        let b = BillBreakdown::compute(&lines, &BillRates::default());
        assert_eq!(b.raw_subtotal.rupees(), 200.0);
    }

    #[test]
    fn test_nan_propagates_not_coerced_to_zero() {
        let lines = vec![line(f64::NAN, 2)];
        let rates = BillRates {
            cgst: Rate::from_percent(2.5),
            ..BillRates::default()
        };

        let b = BillBreakdown::compute(&lines, &rates);
        assert!(b.raw_subtotal.is_nan());
        assert!(b.subtotal_after_discount.is_nan());
        assert!(b.cgst_amount.is_nan());
        assert!(b.grand_total.is_nan());
    }

    #[test]
    fn test_nan_rate_propagates() {
        let lines = vec![line(100.0, 1)];
        let rates = BillRates {
            discount: Rate::from_percent(f64::NAN),
            ..BillRates::default()
        };

        let b = BillBreakdown::compute(&lines, &rates);
        assert_eq!(b.raw_subtotal.rupees(), 100.0);
        assert!(b.discount_amount.is_nan());
        assert!(b.grand_total.is_nan());
    }

    #[test]
    fn test_simultaneous_cgst_sgst_and_igst_permitted() {
        // Not meaningful under tax law, but the arithmetic is additive and
        // the pipeline does not police the combination
        let lines = vec![line(1000.0, 1)];
        let rates = BillRates {
            cgst: Rate::from_percent(9.0),
            sgst: Rate::from_percent(9.0),
            igst: Rate::from_percent(18.0),
            ..BillRates::default()
        };

        let b = BillBreakdown::compute(&lines, &rates);
        assert_eq!(b.total_tax.rupees(), 360.0);
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let b = BillBreakdown::compute(&[line(500.0, 1)], &BillRates::default());
        let json = serde_json::to_value(b).unwrap();
        assert_eq!(json["rawSubtotal"], 500.0);
        assert_eq!(json["grandTotal"], 500.0);
    }
}
