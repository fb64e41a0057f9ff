//! # Vastra Billing Command-Line Front End
//!
//! This is the orchestration layer: it owns no business rules, it wires
//! the library crates together for one billing run.
//!
//! ## Billing Run
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        One Billing Run                                  │
//! │                                                                         │
//! │  1. Parse arguments, initialize tracing                                │
//! │  2. Load products.csv            (vastra-import, required)             │
//! │  3. Load customers.csv           (vastra-import, optional autofill)    │
//! │  4. Load company.json, sale.json (serde_json)                          │
//! │  5. Resolve the buyer            (inline, or GSTIN → directory)        │
//! │  6. Validate everything          (vastra-core::validation)             │
//! │  7. Build the cart functionally  (vastra-core::Cart)                   │
//! │  8. Compute the breakdown        (vastra-core::BillBreakdown)          │
//! │  9. Render the invoice           (vastra-invoice)                      │
//! │  10. Write to stdout or --output                                       │
//! │                                                                         │
//! │  Steps 6-8 never touch a file; a bad sheet row was already skipped     │
//! │  at step 2, and bad sale input fails here with a named field.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod sale;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sale::{parse_bill_date, SaleFile};
use vastra_core::{
    validation, BillRates, Cart, CompanyProfile, CoreError, Customer, CustomerDirectory,
    InvoiceMeta, Money, Product, Rate,
};
use vastra_import::{read_catalog_from_path, read_customers_from_path, ImportError};
use vastra_invoice::Invoice;

/// Generate a tax invoice for a small textile merchant.
#[derive(Parser, Debug)]
#[command(name = "vastra", version, about)]
struct Cli {
    /// Product catalog CSV with name, price and category columns
    #[arg(long)]
    products: PathBuf,

    /// Known-customer CSV (gstin, name, address) enabling GSTIN autofill
    #[arg(long)]
    customers: Option<PathBuf>,

    /// Company profile JSON printed in the invoice header
    #[arg(long)]
    company: PathBuf,

    /// Sale description JSON (bill number, date, buyer, rates, items)
    #[arg(long)]
    sale: PathBuf,

    /// Write the invoice to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = read_catalog_from_path(&cli.products)
        .with_context(|| format!("loading product catalog {}", cli.products.display()))?;
    info!(
        loaded = catalog.products.len(),
        skipped = catalog.skipped,
        "Catalog loaded"
    );

    let directory = load_directory(cli.customers.as_deref())?;

    let company: CompanyProfile = read_json(&cli.company).context("loading company profile")?;
    let sale: SaleFile = read_json(&cli.sale).context("loading sale file")?;

    let text = build_invoice(&catalog.products, &directory, &company, &sale)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("writing invoice to {}", path.display()))?;
            info!(path = %path.display(), "Invoice written");
        }
        None => print!("{text}"),
    }

    Ok(())
}

/// Loads the optional customer directory.
///
/// A sheet with bad headers disables autofill with a warning instead of
/// aborting the billing run; a file that cannot be read at all is still
/// a hard error.
fn load_directory(path: Option<&Path>) -> Result<CustomerDirectory> {
    let Some(path) = path else {
        return Ok(CustomerDirectory::default());
    };

    match read_customers_from_path(path) {
        Ok(import) => {
            info!(
                loaded = import.loaded,
                skipped = import.skipped,
                "Customer directory loaded"
            );
            Ok(import.directory)
        }
        Err(err @ ImportError::MissingColumn { .. }) => {
            warn!(%err, "Customer sheet unusable, GSTIN autofill disabled");
            Ok(CustomerDirectory::default())
        }
        Err(err) => {
            Err(err).with_context(|| format!("loading customer list {}", path.display()))
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Resolves, validates and renders one sale into invoice text.
fn build_invoice(
    products: &[Product],
    directory: &CustomerDirectory,
    company: &CompanyProfile,
    sale: &SaleFile,
) -> Result<String> {
    // Invoice identity
    validation::validate_bill_number(&sale.bill_number)?;
    let Some(date) = parse_bill_date(&sale.date) else {
        bail!(
            "invalid bill date {:?}, expected yyyy-mm-dd or dd/mm/yyyy",
            sale.date
        );
    };
    let meta = InvoiceMeta {
        bill_number: sale.bill_number.trim().to_string(),
        date,
    };

    // Buyer: inline details win, otherwise GSTIN autofill
    let customer: Customer = match (&sale.customer, &sale.gstin) {
        (Some(spec), _) => spec.clone().into(),
        (None, Some(gstin)) => directory
            .find_by_gstin(gstin)
            .cloned()
            .with_context(|| format!("GSTIN {gstin} not found in the customer directory"))?,
        (None, None) => bail!("sale file needs either a customer block or a gstin"),
    };
    validation::validate_customer_name(&customer.name)?;
    validation::validate_customer_address(&customer.address)?;

    // Rates
    validation::validate_rate_percent("discount", sale.rates.discount_percent)?;
    validation::validate_rate_percent("CGST rate", sale.rates.cgst_percent)?;
    validation::validate_rate_percent("SGST rate", sale.rates.sgst_percent)?;
    validation::validate_rate_percent("IGST rate", sale.rates.igst_percent)?;
    validation::validate_other_charges(sale.rates.other_charges)?;
    let rates = BillRates {
        discount: Rate::from_percent(sale.rates.discount_percent),
        cgst: Rate::from_percent(sale.rates.cgst_percent),
        sgst: Rate::from_percent(sale.rates.sgst_percent),
        igst: Rate::from_percent(sale.rates.igst_percent),
        other_charges: Money::from_rupees(sale.rates.other_charges),
    };

    // Cart
    let mut cart = Cart::new();
    for item in &sale.items {
        let product = products
            .iter()
            .find(|p| p.id == item.product || p.name == item.product)
            .with_context(|| format!("product {:?} not found in the catalog", item.product))?;

        validation::validate_quantity(item.quantity)?;
        cart = cart.with_product(product, item.quantity);

        if let Some(price) = item.unit_price {
            validation::validate_unit_price(price)?;
            cart = cart.with_unit_price(&product.id, Money::from_rupees(price));
        }
    }
    if cart.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }
    validation::validate_cart_size(cart.item_count())?;

    // Compute, then render
    let breakdown = cart.breakdown(&rates);
    info!(grand_total = %breakdown.grand_total, "Breakdown computed");

    let invoice = Invoice {
        company,
        customer: &customer,
        meta: &meta,
        lines: cart.lines(),
        rates: &rates,
        breakdown: &breakdown,
    };
    Ok(invoice.render())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: "p-1".into(),
                name: "Soft Silk".into(),
                category: "Silk".into(),
                unit_price: Money::from_rupees(500.0),
                hsn: None,
            },
            Product {
                id: "p-2".into(),
                name: "Chettinad Cotton".into(),
                category: "Cotton".into(),
                unit_price: Money::from_rupees(1450.5),
                hsn: None,
            },
        ]
    }

    fn company() -> CompanyProfile {
        CompanyProfile {
            name: "Annai Silks".into(),
            proprietor: None,
            address: "45 Weavers Lane, Kanchipuram".into(),
            address_line2: None,
            tagline: None,
            email: None,
            phone: None,
            gstin: None,
            hsn_code: "5007".into(),
            bank: None,
        }
    }

    fn sale_json(items: &str) -> SaleFile {
        let json = format!(
            r#"{{
                "billNumber": "INV-042",
                "date": "2026-08-05",
                "customer": {{ "name": "Meena Textiles", "address": "12 Bazaar St" }},
                "rates": {{ "discountPercent": 10, "igstPercent": 5, "otherCharges": 25 }},
                "items": {items}
            }}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_build_invoice_end_to_end() {
        let sale = sale_json(r#"[ { "product": "Soft Silk", "quantity": 1 } ]"#);
        let text =
            build_invoice(&catalog(), &CustomerDirectory::default(), &company(), &sale).unwrap();

        assert!(text.contains("Invoice No: INV-042"));
        assert!(text.contains("₹497.50"));
        assert!(text.contains("RUPEES FOUR HUNDRED NINETY SEVEN AND FIFTY PAISA ONLY"));
    }

    #[test]
    fn test_items_resolve_by_id_or_name() {
        let sale = sale_json(r#"[ { "product": "p-2", "quantity": 2 } ]"#);
        let text =
            build_invoice(&catalog(), &CustomerDirectory::default(), &company(), &sale).unwrap();
        assert!(text.contains("Chettinad Cotton"));
    }

    #[test]
    fn test_unknown_product_fails_with_name() {
        let sale = sale_json(r#"[ { "product": "Velvet", "quantity": 1 } ]"#);
        let err = build_invoice(&catalog(), &CustomerDirectory::default(), &company(), &sale)
            .unwrap_err();
        assert!(err.to_string().contains("Velvet"));
    }

    #[test]
    fn test_empty_items_is_rejected() {
        let sale = sale_json("[]");
        let err = build_invoice(&catalog(), &CustomerDirectory::default(), &company(), &sale)
            .unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let mut sale = sale_json(r#"[ { "product": "Soft Silk", "quantity": 1 } ]"#);
        sale.rates.cgst_percent = -1.0;
        let err = build_invoice(&catalog(), &CustomerDirectory::default(), &company(), &sale)
            .unwrap_err();
        assert!(err.to_string().contains("CGST"));
    }

    #[test]
    fn test_gstin_autofill_resolves_buyer() {
        let directory = CustomerDirectory::new(vec![Customer {
            name: "Kaveri Stores".into(),
            address: "4 Fort Road".into(),
            gstin: Some("29AAACB2230M1Z2".into()),
        }]);

        let json = r#"{
            "billNumber": "INV-043",
            "date": "05/08/2026",
            "gstin": "29aaacb2230m1z2",
            "items": [ { "product": "Soft Silk", "quantity": 1 } ]
        }"#;
        let sale: SaleFile = serde_json::from_str(json).unwrap();

        let text = build_invoice(&catalog(), &directory, &company(), &sale).unwrap();
        assert!(text.contains("M/s. Kaveri Stores"));
    }
}
