//! # vastra-invoice: Plain-Text Tax Invoice Rendering
//!
//! Turns a computed [`vastra_core::BillBreakdown`] plus its surrounding
//! context (company, customer, cart lines, rates) into the fixed-width
//! text of a printable tax invoice.
//!
//! ## Page Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GSTIN: …                                              Phone: …         │
//! │                          CASH / CREDIT                                  │
//! │                           TAX INVOICE                                   │
//! │                        <COMPANY NAME>                                   │
//! │                        <address lines>                                  │
//! │  ════════════════════════════════════════════════════════════════════  │
//! │  M/s. <customer>                              Invoice No: …             │
//! │       <address>                               Date: dd/mm/yyyy          │
//! │  ──────────────────────────────────────────────────────────────────     │
//! │  Sno  Particulars            HSN    Qty     Rate (₹)    Amount (₹)      │
//! │  …    (padded to a 16-row minimum)                                      │
//! │  ──────────────────────────────────────────────────────────────────     │
//! │                                          Taxable Value:      …          │
//! │                                          CGST (…%):          …          │
//! │                                          Grand Total:        …          │
//! │  Amount in Words: RUPEES … ONLY                                         │
//! │  Bank Details: …                                                        │
//! │  Receiver's Signature & Seal            Proprietor Signature            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod document;
pub mod format;
pub mod layout;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use document::{Invoice, MIN_TABLE_ROWS, PAGE_WIDTH};
pub use format::{format_date, format_inr, format_rate};
pub use layout::Page;
