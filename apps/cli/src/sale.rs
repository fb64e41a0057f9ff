//! # Sale File Format
//!
//! One sale is described by a small JSON file: invoice identity, buyer,
//! rate parameters and the picked items. The CLI resolves it against the
//! loaded catalog and customer directory.
//!
//! ```json
//! {
//!   "billNumber": "INV-042",
//!   "date": "2026-08-05",
//!   "gstin": "33AABCU9603R1ZM",
//!   "rates": { "discountPercent": 10, "igstPercent": 5, "otherCharges": 25 },
//!   "items": [
//!     { "product": "Soft Silk", "quantity": 1 },
//!     { "product": "Kanchipuram Silk", "quantity": 2, "unitPrice": 11999 }
//!   ]
//! }
//! ```
//!
//! The buyer comes either inline (`customer`) or as a `gstin` looked up
//! in the customer directory, the same autofill the billing screen does.

use chrono::NaiveDate;
use serde::Deserialize;

use vastra_core::Customer;

/// The parsed sale description.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleFile {
    pub bill_number: String,
    /// ISO (yyyy-mm-dd) or bill-style (dd/mm/yyyy).
    pub date: String,
    /// Inline buyer details; takes precedence over `gstin`.
    #[serde(default)]
    pub customer: Option<CustomerSpec>,
    /// GSTIN resolved against the loaded customer directory.
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default)]
    pub rates: RatesSpec,
    pub items: Vec<ItemSpec>,
}

/// Inline buyer details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSpec {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub gstin: Option<String>,
}

impl From<CustomerSpec> for Customer {
    fn from(spec: CustomerSpec) -> Customer {
        Customer {
            name: spec.name,
            address: spec.address,
            gstin: spec.gstin,
        }
    }
}

/// Rate parameters as entered; all default to zero.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesSpec {
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub cgst_percent: f64,
    #[serde(default)]
    pub sgst_percent: f64,
    #[serde(default)]
    pub igst_percent: f64,
    #[serde(default)]
    pub other_charges: f64,
}

/// One picked item: a catalog product by id or exact name, a quantity,
/// and an optional negotiated price.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSpec {
    pub product: String,
    pub quantity: i64,
    #[serde(default)]
    pub unit_price: Option<f64>,
}

/// Parses the bill date, accepting both the ISO form and the printed
/// dd/mm/yyyy form.
pub fn parse_bill_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%d/%m/%Y"))
        .ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
