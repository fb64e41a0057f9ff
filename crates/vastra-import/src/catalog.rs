//! # Catalog Ingestion
//!
//! Reads the product catalog from a CSV sheet with `name`, `price` and
//! `category` columns (any order, any casing, extra columns ignored).
//!
//! ## Row Rules
//! - `name` and `category` must be non-empty after trimming
//! - `price` must parse as a non-negative number
//! - Anything else: the row is skipped, counted, and logged at warn level
//! - Zero valid rows is a hard error: there is nothing to sell

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{ImportError, ImportResult};
use crate::find_column;
use vastra_core::{Money, Product};

const SHEET: &str = "product";

/// The result of one catalog ingestion pass.
#[derive(Debug, Clone)]
pub struct CatalogImport {
    /// Valid products, in sheet order, with freshly minted ids.
    pub products: Vec<Product>,
    /// Number of data rows that were skipped as invalid.
    pub skipped: usize,
}

/// Reads a product catalog from any reader.
///
/// ## Example
/// ```rust
/// use vastra_import::read_catalog;
///
/// let sheet = "Name,Price,Category\n\
///              Kanchipuram Silk,12500,Silk\n\
///              Chettinad Cotton,1450.50,Cotton\n";
///
/// let import = read_catalog(sheet.as_bytes()).unwrap();
/// assert_eq!(import.products.len(), 2);
/// assert_eq!(import.skipped, 0);
/// ```
pub fn read_catalog<R: Read>(reader: R) -> ImportResult<CatalogImport> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let name_idx = find_column(&headers, "name").ok_or(ImportError::MissingColumn {
        sheet: SHEET,
        column: "name",
    })?;
    let price_idx = find_column(&headers, "price").ok_or(ImportError::MissingColumn {
        sheet: SHEET,
        column: "price",
    })?;
    let category_idx = find_column(&headers, "category").ok_or(ImportError::MissingColumn {
        sheet: SHEET,
        column: "category",
    })?;

    let mut products = Vec::new();
    let mut skipped = 0usize;

    for (row_number, record) in rdr.records().enumerate() {
        let record = record?;

        let name = record.get(name_idx).unwrap_or("").trim();
        let price_field = record.get(price_idx).unwrap_or("").trim();
        let category = record.get(category_idx).unwrap_or("").trim();

        let price = price_field.parse::<f64>().ok();
        let valid = !name.is_empty()
            && !category.is_empty()
            && price.is_some_and(|p| p.is_finite() && p >= 0.0);

        if !valid {
            skipped += 1;
            warn!(row = row_number + 2, name = %name, "Skipping invalid product row");
            continue;
        }

        products.push(Product {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            category: category.to_string(),
            unit_price: Money::from_rupees(price.unwrap_or(0.0)),
            hsn: None,
        });
    }

    if products.is_empty() {
        return Err(ImportError::NoValidRows { sheet: SHEET });
    }

    debug!(
        loaded = products.len(),
        skipped = skipped,
        "Catalog ingestion complete"
    );
    Ok(CatalogImport { products, skipped })
}

/// Reads a product catalog from a file path.
pub fn read_catalog_from_path(path: impl AsRef<Path>) -> ImportResult<CatalogImport> {
    read_catalog(File::open(path)?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_products_in_sheet_order() {
        let sheet = "name,price,category\n\
                     Kanchipuram Silk,12500,Silk\n\
                     Chettinad Cotton,1450.50,Cotton\n";

        let import = read_catalog(sheet.as_bytes()).unwrap();
        assert_eq!(import.products.len(), 2);
        assert_eq!(import.skipped, 0);

        let first = &import.products[0];
        assert_eq!(first.name, "Kanchipuram Silk");
        assert_eq!(first.category, "Silk");
        assert_eq!(first.unit_price.rupees(), 12500.0);
        assert!(!first.id.is_empty());
    }

    #[test]
    fn test_headers_are_case_insensitive_and_reorderable() {
        let sheet = " CATEGORY , Name , PRICE \n\
                     Silk,Mysore Silk,2500\n";

        let import = read_catalog(sheet.as_bytes()).unwrap();
        assert_eq!(import.products[0].name, "Mysore Silk");
        assert_eq!(import.products[0].unit_price.rupees(), 2500.0);
    }

    #[test]
    fn test_bad_rows_are_skipped_not_fatal() {
        let sheet = "name,price,category\n\
                     ,100,Silk\n\
                     Good Saree,abc,Silk\n\
                     Cheap Saree,-5,Silk\n\
                     Valid Saree,999.99,Cotton\n";

        let import = read_catalog(sheet.as_bytes()).unwrap();
        assert_eq!(import.products.len(), 1);
        assert_eq!(import.skipped, 3);
        assert_eq!(import.products[0].name, "Valid Saree");
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let sheet = "name,price,category\n\
                     Lone Field\n\
                     Valid Saree,100,Cotton\n";

        let import = read_catalog(sheet.as_bytes()).unwrap();
        assert_eq!(import.products.len(), 1);
        assert_eq!(import.skipped, 1);
    }

    #[test]
    fn test_missing_column_is_named() {
        let sheet = "name,category\nA,Silk\n";

        let err = read_catalog(sheet.as_bytes()).unwrap_err();
        match err {
            ImportError::MissingColumn { column, .. } => assert_eq!(column, "price"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_no_valid_rows_is_an_error() {
        let headers_only = "name,price,category\n";
        assert!(matches!(
            read_catalog(headers_only.as_bytes()).unwrap_err(),
            ImportError::NoValidRows { .. }
        ));

        let all_bad = "name,price,category\n,100,Silk\nX,notanumber,Silk\n";
        assert!(matches!(
            read_catalog(all_bad.as_bytes()).unwrap_err(),
            ImportError::NoValidRows { .. }
        ));
    }

    #[test]
    fn test_each_product_gets_a_distinct_id() {
        let sheet = "name,price,category\nA,1,Silk\nB,2,Silk\n";
        let import = read_catalog(sheet.as_bytes()).unwrap();
        assert_ne!(import.products[0].id, import.products[1].id);
    }
}
