//! # Import Error Types
//!
//! Error types for CSV ingestion.
//!
//! ## Error Philosophy
//! Structural problems (unreadable file, missing column, a catalog with no
//! usable rows) are hard errors; a single bad data row is not. Bad rows
//! are skipped, counted, and logged so the merchant can fix the sheet
//! without being locked out of billing.

use thiserror::Error;

/// CSV ingestion errors.
#[derive(Debug, Error)]
pub enum ImportError {
    /// File could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV itself is malformed (bad quoting, invalid UTF-8).
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required header is absent from the sheet.
    ///
    /// ## When This Occurs
    /// - Header row misspelled or missing entirely
    /// - Wrong file passed for the sheet
    #[error("{sheet} sheet is missing required column: {column}")]
    MissingColumn {
        sheet: &'static str,
        column: &'static str,
    },

    /// Every data row was invalid, or there were none.
    ///
    /// Raised for the product catalog only: billing cannot start without
    /// at least one sellable product. An empty customer list is fine.
    #[error("{sheet} sheet has no valid data rows")]
    NoValidRows { sheet: &'static str },
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
