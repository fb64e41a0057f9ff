//! # Validation Module
//!
//! Input validation for the form/import layer around the billing core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (form fields / CLI arguments)                      │
//! │  ├── Basic format checks (empty, parseable)                            │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  ├── Rates finite and non-negative                                     │
//! │  ├── Quantities and prices inside limits                               │
//! │  └── Required invoice/customer fields present                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: The billing pipeline                                         │
//! │  └── Total arithmetic, assumes clean input, never rejects              │
//! │                                                                         │
//! │  Keeping rejection OUT of the pipeline keeps it trivially testable.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a percentage rate (discount, CGST, SGST, IGST).
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative; zero is a perfectly normal rate
///
/// ## Example
/// ```rust
/// use vastra_core::validation::validate_rate_percent;
///
/// assert!(validate_rate_percent("CGST rate", 2.5).is_ok());
/// assert!(validate_rate_percent("CGST rate", 0.0).is_ok());
/// assert!(validate_rate_percent("CGST rate", -1.0).is_err());
/// assert!(validate_rate_percent("CGST rate", f64::NAN).is_err());
/// ```
pub fn validate_rate_percent(field: &str, pct: f64) -> ValidationResult<()> {
    if !pct.is_finite() {
        return Err(ValidationError::NotANumber {
            field: field.to_string(),
        });
    }

    if pct < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates the flat other-charges amount.
///
/// ## Rules
/// - Must be a finite number
/// - Any sign is allowed: negative charges are credits/adjustments
pub fn validate_other_charges(value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field: "other charges".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price in rupees.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative; zero is allowed (free items)
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotANumber {
            field: "unit price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "unit price".to_string(),
        });
    }

    Ok(())
}

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (zero-quantity lines are removed, not kept)
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

fn required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a product name (non-empty, at most 200 characters).
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    required_text("product name", name, 200)
}

/// Validates a product category (non-empty, at most 100 characters).
pub fn validate_category(category: &str) -> ValidationResult<()> {
    required_text("category", category, 100)
}

/// Validates the customer name printed in the M/s. block.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    required_text("customer name", name, 200)
}

/// Validates the customer address printed in the M/s. block.
pub fn validate_customer_address(address: &str) -> ValidationResult<()> {
    required_text("customer address", address, 300)
}

/// Validates the hand-assigned invoice number.
pub fn validate_bill_number(bill_number: &str) -> ValidationResult<()> {
    required_text("invoice number", bill_number, 50)
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates cart size (number of distinct lines).
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items > MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
