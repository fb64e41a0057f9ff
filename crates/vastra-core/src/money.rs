//! # Money Module
//!
//! Provides the `Money` and `Rate` types used by the billing pipeline.
//!
//! ## Why Decimal (f64) Money Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE UNROUNDED PIPELINE RULE                                            │
//! │                                                                         │
//! │  The billing chain must carry EXACT intermediate values:                │
//! │                                                                         │
//! │    450.00 × 5% IGST = 22.50   (kept as 22.5, not rounded)              │
//! │    450.00 + 22.50 + 25 = 497.50                                         │
//! │                                                                         │
//! │  Rounding between steps would let per-step paise drift accumulate       │
//! │  into a grand total that no longer reconciles against its parts.        │
//! │  Two-decimal rounding happens ONCE, at the display layer.               │
//! │                                                                         │
//! │  Malformed input follows IEEE semantics: NaN in → NaN out. The          │
//! │  calculator never coerces garbage to zero; the validation module        │
//! │  is where garbage gets rejected.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vastra_core::money::{Money, Rate};
//!
//! let price = Money::from_rupees(1000.0);
//!
//! // Line total for 2 pieces
//! let line = price * 2;                       // ₹2000.00
//!
//! // 2.5% CGST on the taxable value, unrounded
//! let cgst = line.apply_rate(Rate::from_percent(2.5));
//! assert_eq!(cgst, Money::from_rupees(50.0));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A rupee amount carried at full precision through the billing pipeline.
///
/// ## Design Decisions
/// - **f64 (decimal)**: The pipeline carries real-number amounts with no
///   intermediate rounding, and NaN must propagate rather than fail
/// - **Single field tuple struct**: Zero-cost abstraction over f64
/// - **Total arithmetic**: No constructor or operation can fail or panic
///
/// ## Where Money Flows
/// ```text
/// Product.unit_price ──► CartLine.unit_price ──► CartLine.line_total
///                                                      │
///                         raw subtotal ◄──────────────┘
///                              │
///                              ▼
///          discount ──► taxable value ──► CGST/SGST/IGST ──► grand total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(f64);

impl Money {
    /// Creates a Money value from a rupee amount.
    ///
    /// ## Example
    /// ```rust
    /// use vastra_core::money::Money;
    ///
    /// let price = Money::from_rupees(1099.50);
    /// assert_eq!(price.rupees(), 1099.50);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: f64) -> Self {
        Money(rupees)
    }

    /// Returns the amount in rupees.
    #[inline]
    pub const fn rupees(&self) -> f64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Checks if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is negative (credits, adjustments).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Checks if the value is NaN (malformed input propagated through
    /// the pipeline).
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// Checks if the value is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Applies a percentage rate and returns the resulting portion,
    /// unrounded.
    ///
    /// This is the single formula behind discount and all three GST
    /// components: `amount × percent / 100`.
    ///
    /// ## Example
    /// ```rust
    /// use vastra_core::money::{Money, Rate};
    ///
    /// let taxable = Money::from_rupees(450.0);
    /// let igst = taxable.apply_rate(Rate::from_percent(5.0));
    /// assert_eq!(igst.rupees(), 22.5); // exact, no rounding
    /// ```
    #[inline]
    pub fn apply_rate(&self, rate: Rate) -> Money {
        Money(self.0 * rate.fraction())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money rounded to two decimals.
///
/// ## Note
/// This is for debugging and logs. Invoice rendering applies its own
/// formatting (Indian digit grouping) in the display layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0.0 {
            write!(f, "-₹{:.2}", -self.0)
        } else {
            write!(f, "₹{:.2}", self.0)
        }
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer quantity (line total calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty as f64)
    }
}

/// Summation (subtotal folds).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Rate Type
// =============================================================================

/// A percentage rate (discount, CGST, SGST, IGST).
///
/// ## Why a Plain Percentage?
/// Merchants enter rates as decimals ("2.5" for 2.5%) and the pipeline must
/// apply exactly what was entered. The rate is stored as given; negative or
/// NaN rates are a validation concern, not clamped here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(f64);

impl Rate {
    /// Creates a rate from a percentage value (2.5 means 2.5%).
    #[inline]
    pub const fn from_percent(pct: f64) -> Self {
        Rate(pct)
    }

    /// Returns the rate as a percentage (for display).
    #[inline]
    pub const fn percent(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a fraction (2.5% → 0.025), the multiplier the
    /// pipeline uses.
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0.0)
    }

    /// Checks if the rate is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees() {
        let money = Money::from_rupees(1099.5);
        assert_eq!(money.rupees(), 1099.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_rupees(1099.5)), "₹1099.50");
        assert_eq!(format!("{}", Money::from_rupees(5.0)), "₹5.00");
        assert_eq!(format!("{}", Money::from_rupees(-5.5)), "-₹5.50");
        assert_eq!(format!("{}", Money::from_rupees(0.0)), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(10.0);
        let b = Money::from_rupees(5.0);

        assert_eq!((a + b).rupees(), 15.0);
        assert_eq!((a - b).rupees(), 5.0);
        assert_eq!((a * 3).rupees(), 30.0);
    }

    #[test]
    fn test_apply_rate_is_unrounded() {
        // 450 × 5% = 22.5 exactly; no paise rounding between steps
        let taxable = Money::from_rupees(450.0);
        let igst = taxable.apply_rate(Rate::from_percent(5.0));
        assert_eq!(igst.rupees(), 22.5);

        // 1000 × 2.5% = 25 exactly
        let cgst = Money::from_rupees(1000.0).apply_rate(Rate::from_percent(2.5));
        assert_eq!(cgst.rupees(), 25.0);
    }

    #[test]
    fn test_nan_propagates() {
        let bad = Money::from_rupees(f64::NAN);
        assert!(bad.is_nan());
        assert!((bad + Money::from_rupees(1.0)).is_nan());
        assert!(bad.apply_rate(Rate::from_percent(5.0)).is_nan());
        assert!((bad * 3).is_nan());
    }

    #[test]
    fn test_sum() {
        let total: Money = [10.0, 20.0, 12.5]
            .iter()
            .map(|r| Money::from_rupees(*r))
            .sum();
        assert_eq!(total.rupees(), 42.5);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let credit = Money::from_rupees(-20.0);
        assert!(credit.is_negative());
        assert_eq!(credit.abs().rupees(), 20.0);
    }

    #[test]
    fn test_rate_conversions() {
        let rate = Rate::from_percent(2.5);
        assert_eq!(rate.percent(), 2.5);
        assert_eq!(rate.fraction(), 0.025);
        assert!(!rate.is_zero());
        assert!(Rate::default().is_zero());
    }
}
