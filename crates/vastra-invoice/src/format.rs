//! # Display Formatting
//!
//! The display layer is the ONE place where monetary values get rounded:
//! everything upstream carries full precision, and these helpers apply
//! two-decimal rounding, Indian digit grouping and dd/mm/yyyy dates at
//! the moment of printing.

use chrono::NaiveDate;

use vastra_core::{Money, Rate};

// =============================================================================
// Amounts
// =============================================================================

/// Formats an amount with two decimals and Indian digit grouping:
/// `1234567.891` → `"12,34,567.89"`.
///
/// The last three integer digits form one group, every group above them
/// has two digits. Non-finite values print as-is so a malformed pipeline
/// result is visible rather than disguised.
pub fn format_inr(amount: Money) -> String {
    let value = amount.rupees();
    if !value.is_finite() {
        return format!("{value:.2}");
    }

    let negative = value < 0.0;
    let paise_total = (value.abs() * 100.0).round() as u128;
    let rupees = paise_total / 100;
    let paise = paise_total % 100;

    format!(
        "{}{}.{:02}",
        if negative { "-" } else { "" },
        group_indian(rupees),
        paise
    )
}

/// Indian grouping of a whole-rupee amount: `1234567` → `"12,34,567"`.
fn group_indian(rupees: u128) -> String {
    let digits = rupees.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);

    // Two-digit groups, collected from the right of the head
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

// =============================================================================
// Rates
// =============================================================================

/// Formats a percentage rate the way the bill prints it: whole-number
/// rates without decimals (`5` → `"5"`), fractional rates with two
/// (`2.5` → `"2.50"`).
pub fn format_rate(rate: Rate) -> String {
    let pct = rate.percent();
    if pct.fract() == 0.0 {
        format!("{pct:.0}")
    } else {
        format!("{pct:.2}")
    }
}

// =============================================================================
// Dates
// =============================================================================

/// Formats a date as dd/mm/yyyy, the layout the printed bill uses.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn inr(value: f64) -> String {
        format_inr(Money::from_rupees(value))
    }

    #[test]
    fn test_two_decimal_rounding_happens_here() {
        assert_eq!(inr(497.5), "497.50");
        assert_eq!(inr(22.506), "22.51");
        assert_eq!(inr(0.125), "0.13");
        assert_eq!(inr(0.0), "0.00");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(inr(100.0), "100.00");
        assert_eq!(inr(1000.0), "1,000.00");
        assert_eq!(inr(100000.0), "1,00,000.00");
        assert_eq!(inr(123456.5), "1,23,456.50");
        assert_eq!(inr(1234567.89), "12,34,567.89");
        assert_eq!(inr(123456789.0), "12,34,56,789.00");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(inr(-20.0), "-20.00");
        assert_eq!(inr(-123456.0), "-1,23,456.00");
    }

    #[test]
    fn test_non_finite_is_visible() {
        assert_eq!(inr(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(Rate::from_percent(5.0)), "5");
        assert_eq!(format_rate(Rate::from_percent(0.0)), "0");
        assert_eq!(format_rate(Rate::from_percent(2.5)), "2.50");
        assert_eq!(format_rate(Rate::from_percent(12.75)), "12.75");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(format_date(date), "05/08/2026");
    }
}
