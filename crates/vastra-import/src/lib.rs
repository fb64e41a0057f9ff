//! # vastra-import: CSV Ingestion for Vastra Billing
//!
//! Loads the product catalog and the customer list from CSV sheets into
//! the in-memory types of `vastra-core`. Nothing is persisted: data is
//! loaded fresh at the start of a session, exactly as the billing screen
//! loads a spreadsheet.
//!
//! ## Ingestion Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ingestion Flow                                   │
//! │                                                                         │
//! │  products.csv                          customers.csv                    │
//! │  name,price,category                   gstin,name,address               │
//! │       │                                     │                           │
//! │       ▼                                     ▼                           │
//! │  resolve headers (case-insensitive)    resolve headers                  │
//! │       │                                     │                           │
//! │       ▼                                     ▼                           │
//! │  per row: trim, parse price,           per row: all three fields        │
//! │  mint uuid id                          required                         │
//! │       │                                     │                           │
//! │       ├── bad row → skip + warn             ├── bad row → skip + warn   │
//! │       ▼                                     ▼                           │
//! │  Vec<Product> (≥1 required)            CustomerDirectory (may be empty) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod customers;
pub mod error;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{read_catalog, read_catalog_from_path, CatalogImport};
pub use customers::{read_customers, read_customers_from_path, CustomerImport};
pub use error::{ImportError, ImportResult};

/// Finds a column index by header name, ignoring case and surrounding
/// whitespace, the way hand-edited sheets need.
pub(crate) fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}
