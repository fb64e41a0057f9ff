//! # Customer List Ingestion
//!
//! Reads the known-customer list from a CSV sheet with `gstin`, `name`
//! and `address` columns. The list powers GSTIN autofill on the billing
//! screen; it is optional, and an empty result is not an error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{ImportError, ImportResult};
use crate::find_column;
use vastra_core::{Customer, CustomerDirectory};

const SHEET: &str = "customer";

/// The result of one customer list ingestion pass.
#[derive(Debug, Clone)]
pub struct CustomerImport {
    /// The loaded directory, possibly empty.
    pub directory: CustomerDirectory,
    /// Number of loaded customers.
    pub loaded: usize,
    /// Number of data rows that were skipped as incomplete.
    pub skipped: usize,
}

/// Reads a customer list from any reader.
///
/// All three fields are required per row; rows missing any of them are
/// skipped and counted.
pub fn read_customers<R: Read>(reader: R) -> ImportResult<CustomerImport> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let gstin_idx = find_column(&headers, "gstin").ok_or(ImportError::MissingColumn {
        sheet: SHEET,
        column: "gstin",
    })?;
    let name_idx = find_column(&headers, "name").ok_or(ImportError::MissingColumn {
        sheet: SHEET,
        column: "name",
    })?;
    let address_idx = find_column(&headers, "address").ok_or(ImportError::MissingColumn {
        sheet: SHEET,
        column: "address",
    })?;

    let mut customers = Vec::new();
    let mut skipped = 0usize;

    for (row_number, record) in rdr.records().enumerate() {
        let record = record?;

        let gstin = record.get(gstin_idx).unwrap_or("").trim();
        let name = record.get(name_idx).unwrap_or("").trim();
        let address = record.get(address_idx).unwrap_or("").trim();

        if gstin.is_empty() || name.is_empty() || address.is_empty() {
            skipped += 1;
            warn!(row = row_number + 2, "Skipping incomplete customer row");
            continue;
        }

        customers.push(Customer {
            name: name.to_string(),
            address: address.to_string(),
            gstin: Some(gstin.to_string()),
        });
    }

    let loaded = customers.len();
    debug!(loaded = loaded, skipped = skipped, "Customer ingestion complete");

    Ok(CustomerImport {
        directory: CustomerDirectory::new(customers),
        loaded,
        skipped,
    })
}

/// Reads a customer list from a file path.
pub fn read_customers_from_path(path: impl AsRef<Path>) -> ImportResult<CustomerImport> {
    read_customers(File::open(path)?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_customers() {
        let sheet = "gstin,name,address\n\
                     33AABCU9603R1ZM,Meena Textiles,12 Bazaar St\n\
                     29AAACB2230M1Z2,Kaveri Stores,4 Fort Rd\n";

        let import = read_customers(sheet.as_bytes()).unwrap();
        assert_eq!(import.loaded, 2);
        assert_eq!(import.skipped, 0);

        let found = import.directory.find_by_gstin("33aabcu9603r1zm").unwrap();
        assert_eq!(found.name, "Meena Textiles");
    }

    #[test]
    fn test_incomplete_rows_are_skipped() {
        let sheet = "gstin,name,address\n\
                     ,No Gstin,Somewhere\n\
                     33AABCU9603R1ZM,,Somewhere\n\
                     29AAACB2230M1Z2,Kaveri Stores,4 Fort Rd\n";

        let import = read_customers(sheet.as_bytes()).unwrap();
        assert_eq!(import.loaded, 1);
        assert_eq!(import.skipped, 2);
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        let import = read_customers("gstin,name,address\n".as_bytes()).unwrap();
        assert!(import.directory.is_empty());
        assert_eq!(import.loaded, 0);
    }

    #[test]
    fn test_missing_header_is_named() {
        let err = read_customers("name,address\nA,B\n".as_bytes()).unwrap_err();
        match err {
            ImportError::MissingColumn { column, .. } => assert_eq!(column, "gstin"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
