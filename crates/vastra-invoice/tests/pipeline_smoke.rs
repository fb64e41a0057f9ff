//! End-to-end smoke test: CSV catalog in, printed tax invoice out.
//!
//! Exercises the whole stack the way a billing session does: ingest the
//! catalog and customer sheets, build a cart with overrides, compute the
//! breakdown, render the page.

use chrono::NaiveDate;
use vastra_core::{BillRates, Cart, CompanyProfile, InvoiceMeta, Money, Rate};
use vastra_import::{read_catalog, read_customers};
use vastra_invoice::Invoice;

const PRODUCTS_CSV: &str = "\
name,price,category
Kanchipuram Silk,12500,Silk
Soft Silk,500,Silk
Chettinad Cotton,1450.50,Cotton
Broken Row,notaprice,Cotton
";

const CUSTOMERS_CSV: &str = "\
gstin,name,address
33AABCU9603R1ZM,Meena Textiles,12 Bazaar Street Chennai
29AAACB2230M1Z2,Kaveri Stores,4 Fort Road Mysuru
";

fn company() -> CompanyProfile {
    CompanyProfile {
        name: "Annai Silks".into(),
        proprietor: None,
        address: "45 Weavers Lane, Kanchipuram".into(),
        address_line2: None,
        tagline: None,
        email: None,
        phone: None,
        gstin: Some("33AABCA1234F1Z5".into()),
        hsn_code: "5007".into(),
        bank: None,
    }
}

#[test]
fn bill_from_csv_to_printed_invoice() {
    // Ingest: one malformed row must not stop the session
    let catalog = read_catalog(PRODUCTS_CSV.as_bytes()).unwrap();
    assert_eq!(catalog.products.len(), 3);
    assert_eq!(catalog.skipped, 1);

    let customers = read_customers(CUSTOMERS_CSV.as_bytes()).unwrap();
    let buyer = customers
        .directory
        .find_by_gstin("  33aabcu9603r1zm ")
        .expect("GSTIN autofill must tolerate case and whitespace")
        .clone();

    // Cart: pick the soft silk, try the cotton, then drop the cotton again
    let soft_silk = catalog
        .products
        .iter()
        .find(|p| p.name == "Soft Silk")
        .unwrap();
    let cotton = catalog
        .products
        .iter()
        .find(|p| p.name == "Chettinad Cotton")
        .unwrap();

    let cart = Cart::new()
        .with_product(soft_silk, 1)
        .with_product(cotton, 2)
        .with_quantity(&cotton.id, 0);
    assert_eq!(cart.item_count(), 1);

    // Rates: 10% off, inter-state sale, ₹25 packing
    let rates = BillRates {
        discount: Rate::from_percent(10.0),
        igst: Rate::from_percent(5.0),
        other_charges: Money::from_rupees(25.0),
        ..BillRates::default()
    };

    let breakdown = cart.breakdown(&rates);
    assert_eq!(breakdown.raw_subtotal.rupees(), 500.0);
    assert_eq!(breakdown.discount_amount.rupees(), 50.0);
    assert_eq!(breakdown.subtotal_after_discount.rupees(), 450.0);
    assert_eq!(breakdown.igst_amount.rupees(), 22.5);
    assert_eq!(breakdown.grand_total.rupees(), 497.5);

    // Render
    let company = company();
    let meta = InvoiceMeta {
        bill_number: "INV-001".into(),
        date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
    };
    let text = Invoice {
        company: &company,
        customer: &buyer,
        meta: &meta,
        lines: cart.lines(),
        rates: &rates,
        breakdown: &breakdown,
    }
    .render();

    assert!(text.contains("TAX INVOICE"));
    assert!(text.contains("M/s. Meena Textiles"));
    assert!(text.contains("Soft Silk"));
    assert!(!text.contains("Chettinad Cotton"));
    assert!(text.contains("IGST (5%):"));
    assert!(text.contains("₹497.50"));
    assert!(text.contains("RUPEES FOUR HUNDRED NINETY SEVEN AND FIFTY PAISA ONLY"));
}
