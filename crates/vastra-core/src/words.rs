//! # Amount-in-Words Module
//!
//! Renders a rupee amount as the uppercase legal phrase printed on a tax
//! invoice, using the Indian numbering system (thousand, lakh, crore).
//!
//! ## How an Amount Decomposes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ₹1,23,45,678.50                                                        │
//! │                                                                         │
//! │   12345678 ÷ 1,00,00,000 → 1   "One Crore"                              │
//! │    2345678 ÷   1,00,000  → 23  "Twenty Three Lakh"                      │
//! │      45678 ÷     1,000   → 45  "Forty Five Thousand"                    │
//! │        678 ÷       100   → 6   "Six Hundred"                            │
//! │         78                     "Seventy Eight"                          │
//! │        .50                     "and Fifty Paisa"                        │
//! │                                                                         │
//! │  → "RUPEES ONE CRORE TWENTY THREE LAKH FORTY FIVE THOUSAND              │
//! │     SIX HUNDRED SEVENTY EIGHT AND FIFTY PAISA ONLY"                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No "and" joins magnitude groups (Indian commercial convention); "and"
//! appears only between the rupee phrase and a non-zero paisa phrase.

use crate::money::Money;

// =============================================================================
// Word Tables
// =============================================================================

/// Irregular English forms for 0-19. Index 0 is empty: a zero remainder
/// emits no words of its own.
const ONES: [&str; 20] = [
    "",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

/// Multiples of ten from 20 to 90. Indices 0 and 1 are never used: values
/// below 20 come from the ONES table.
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Magnitude groups of the Indian numbering system, processed in
/// descending order by successive integer division.
const SCALES: [(u64, &str); 4] = [
    (10_000_000, "Crore"),
    (100_000, "Lakh"),
    (1_000, "Thousand"),
    (100, "Hundred"),
];

// =============================================================================
// Conversion
// =============================================================================

/// Words for 0-99 ("Forty Seven"). Returns an empty string for 0.
fn under_hundred(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}

/// Words for a whole rupee amount. Returns an empty string for 0.
///
/// A crore coefficient of 100 or more recurses through the scale list, so
/// ₹250,00,00,000 reads "Two Hundred Fifty Crore".
fn integer_words(n: u64) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut rem = n;

    for (divisor, label) in SCALES {
        let coefficient = rem / divisor;
        rem %= divisor;
        if coefficient > 0 {
            let words = if coefficient < 100 {
                under_hundred(coefficient)
            } else {
                integer_words(coefficient)
            };
            parts.push(format!("{} {}", words, label));
        }
    }

    if rem > 0 {
        parts.push(under_hundred(rem));
    }

    parts.join(" ")
}

/// Renders a non-negative amount as `"RUPEES … ONLY"`.
///
/// ## Shape of the Result
/// - both parts zero → `"RUPEES ZERO ONLY"`
/// - whole rupees only → `"RUPEES {rupees} ONLY"`
/// - paisa only → `"RUPEES {paisa} PAISA ONLY"`
/// - both → `"RUPEES {rupees} AND {paisa} PAISA ONLY"`
///
/// Paisa is the amount's fractional part rounded to two decimals; when
/// that rounds up to a full rupee (0.999 → 100 paisa), the rupee carries
/// and the paisa clause disappears.
///
/// Callers pass validated, non-negative amounts; anything else (negative,
/// NaN) renders as zero rather than producing nonsense prose.
///
/// ## Example
/// ```rust
/// use vastra_core::money::Money;
/// use vastra_core::words::rupees_in_words;
///
/// assert_eq!(
///     rupees_in_words(Money::from_rupees(1234.50)),
///     "RUPEES ONE THOUSAND TWO HUNDRED THIRTY FOUR AND FIFTY PAISA ONLY"
/// );
/// ```
pub fn rupees_in_words(amount: Money) -> String {
    let value = amount.rupees();

    // Float-to-int casts saturate, so negative or NaN input lands on zero
    let mut rupees = value.floor() as u64;
    let mut paise = ((value - value.floor()) * 100.0).round() as u64;

    // Fractional parts that round to a full rupee carry over
    if paise >= 100 {
        rupees += 1;
        paise = 0;
    }

    let rupee_words = integer_words(rupees);

    let phrase = match (rupee_words.is_empty(), paise) {
        (true, 0) => "Rupees Zero Only".to_string(),
        (true, p) => format!("Rupees {} Paisa Only", under_hundred(p)),
        (false, 0) => format!("Rupees {} Only", rupee_words),
        (false, p) => format!("Rupees {} and {} Paisa Only", rupee_words, under_hundred(p)),
    };

    phrase.to_uppercase()
}

// =============================================================================
// Unit Tests
// =============================================================================
