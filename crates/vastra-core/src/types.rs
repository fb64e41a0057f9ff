//! # Domain Types
//!
//! Core domain types used throughout Vastra Billing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Customer     │   │ CompanyProfile  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  name           │   │  name, address  │       │
//! │  │  name           │   │  address        │   │  gstin, phone   │       │
//! │  │  category       │   │  gstin?         │   │  hsn_code       │       │
//! │  │  unit_price     │   └─────────────────┘   │  bank?          │       │
//! │  │  hsn?           │                         └─────────────────┘       │
//! │  └─────────────────┘   ┌─────────────────┐   ┌─────────────────┐       │
//! │                        │CustomerDirectory│   │  InvoiceMeta    │       │
//! │                        │  GSTIN lookup   │   │  bill_number    │       │
//! │                        └─────────────────┘   │  date           │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalog item available for sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier within one loaded catalog.
    pub id: String,

    /// Display name shown in the cart and on the invoice.
    pub name: String,

    /// Category used to group the catalog for browsing.
    pub category: String,

    /// Listed unit price. Cart lines may override this per sale.
    pub unit_price: Money,

    /// HSN code, if the catalog carries one per item. When absent the
    /// company-wide code is printed instead.
    pub hsn: Option<String>,
}

/// Returns the distinct categories of a catalog, sorted.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut cats: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    cats.sort();
    cats.dedup();
    cats
}

// =============================================================================
// Customer
// =============================================================================

/// A buyer as printed in the "M/s." block of the invoice.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Customer {
    pub name: String,
    pub address: String,
    /// GSTIN of a registered buyer; unregistered buyers have none.
    pub gstin: Option<String>,
}

/// A loaded list of known customers, searchable by GSTIN.
///
/// Typing a known GSTIN autofills name and address on the bill, so the
/// lookup ignores case and surrounding whitespace.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    pub fn new(customers: Vec<Customer>) -> Self {
        CustomerDirectory { customers }
    }

    /// Looks up a customer by GSTIN, ignoring case and surrounding
    /// whitespace on both sides of the comparison.
    pub fn find_by_gstin(&self, gstin: &str) -> Option<&Customer> {
        let wanted = gstin.trim();
        if wanted.is_empty() {
            return None;
        }
        self.customers.iter().find(|c| {
            c.gstin
                .as_deref()
                .is_some_and(|g| g.trim().eq_ignore_ascii_case(wanted))
        })
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

// =============================================================================
// Company Profile
// =============================================================================

/// Bank account details printed at the foot of the invoice.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BankAccount {
    pub account_name: String,
    pub account_number: String,
    pub bank_name: String,
    pub branch_name: String,
    pub ifsc_code: String,
}

/// The selling merchant's identity, printed in the invoice header.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompanyProfile {
    pub name: String,
    /// Proprietor name, printed as "(Prop: …)" under the company name.
    pub proprietor: Option<String>,
    pub address: String,
    pub address_line2: Option<String>,
    /// Short devotional or slogan line printed above the header.
    pub tagline: Option<String>,
    pub email: Option<String>,
    /// One or more phone numbers, comma separated.
    pub phone: Option<String>,
    pub gstin: Option<String>,
    /// Company-wide HSN code applied to every invoice line that has no
    /// per-item code.
    pub hsn_code: String,
    pub bank: Option<BankAccount>,
}

// =============================================================================
// Invoice Metadata
// =============================================================================

/// Per-invoice identity: the hand-assigned bill number and the bill date.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceMeta {
    pub bill_number: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
}

// =============================================================================
// Unit Tests
// =============================================================================
