//! # Invoice Document
//!
//! Assembles one bill into the fixed-width text of a printable tax
//! invoice: company header, buyer block, item table, totals, the amount
//! in words, bank details and signature lines.
//!
//! The renderer is pure: it computes nothing, it only formats what the
//! billing pipeline already produced.

use vastra_core::words::rupees_in_words;
use vastra_core::{BillBreakdown, BillRates, CartLine, CompanyProfile, Customer, InvoiceMeta};

use crate::format::{format_date, format_inr, format_rate};
use crate::layout::Page;

// =============================================================================
// Layout Constants
// =============================================================================

/// Default page width in characters.
pub const PAGE_WIDTH: usize = 80;

/// The item table is padded with blank rows up to this count so short
/// bills still fill a full invoice page.
pub const MIN_TABLE_ROWS: usize = 16;

const SNO_WIDTH: usize = 4;
const HSN_WIDTH: usize = 8;
const QTY_WIDTH: usize = 5;
const RATE_WIDTH: usize = 12;
const AMOUNT_WIDTH: usize = 13;
const COLUMN_GAPS: usize = 10;

const TOTAL_LABEL_WIDTH: usize = 22;
const TOTAL_VALUE_WIDTH: usize = 15;

// =============================================================================
// Invoice
// =============================================================================

/// Everything one rendered invoice needs, borrowed from the caller.
#[derive(Debug, Clone)]
pub struct Invoice<'a> {
    pub company: &'a CompanyProfile,
    pub customer: &'a Customer,
    pub meta: &'a InvoiceMeta,
    pub lines: &'a [CartLine],
    pub rates: &'a BillRates,
    pub breakdown: &'a BillBreakdown,
}

impl Invoice<'_> {
    /// Renders the invoice at the default page width.
    pub fn render(&self) -> String {
        self.render_width(PAGE_WIDTH)
    }

    /// Renders the invoice at a custom page width.
    pub fn render_width(&self, width: usize) -> String {
        let mut page = Page::new(width);

        self.header(&mut page);
        self.buyer_block(&mut page);
        self.item_table(&mut page, width);
        self.totals(&mut page);
        self.words_and_bank(&mut page);
        self.signatures(&mut page);

        page.into_string()
    }

    // -------------------------------------------------------------------------
    // Sections
    // -------------------------------------------------------------------------

    fn header(&self, page: &mut Page) {
        let company = self.company;

        let gstin = company
            .gstin
            .as_deref()
            .map(|g| format!("GSTIN: {}", g))
            .unwrap_or_default();
        let phones: Vec<String> = company
            .phone
            .as_deref()
            .map(|p| p.split(',').map(|n| n.trim().to_string()).collect())
            .unwrap_or_default();

        let first_phone = phones
            .first()
            .map(|p| format!("Phone: {}", p))
            .unwrap_or_default();
        page.split(&gstin, &first_phone);
        for extra in phones.iter().skip(1) {
            page.split("", extra);
        }

        if let Some(tagline) = &company.tagline {
            page.center(tagline);
        }
        page.center("CASH / CREDIT");
        page.center("TAX INVOICE");
        page.center(&company.name);
        if let Some(proprietor) = &company.proprietor {
            page.center(&format!("(Prop: {})", proprietor));
        }
        page.center(&company.address);
        if let Some(line2) = &company.address_line2 {
            page.center(line2);
        }

        page.double_rule();
    }

    fn buyer_block(&self, page: &mut Page) {
        let customer = self.customer;

        page.split(
            &format!("M/s. {}", customer.name),
            &format!("Invoice No: {}", self.meta.bill_number),
        );
        page.split(
            &format!("     {}", customer.address),
            &format!("Date: {}", format_date(self.meta.date)),
        );
        if let Some(gstin) = &customer.gstin {
            page.split(&format!("     GSTIN: {}", gstin), "");
        }
    }

    fn item_table(&self, page: &mut Page, width: usize) {
        let fixed = SNO_WIDTH + HSN_WIDTH + QTY_WIDTH + RATE_WIDTH + AMOUNT_WIDTH + COLUMN_GAPS;
        let particulars_width = width.saturating_sub(fixed).max(10);

        page.rule();
        page.line(&table_row(
            particulars_width,
            "Sno",
            "Particulars",
            "HSN",
            "Qty",
            "Rate (₹)",
            "Amount (₹)",
        ));
        page.rule();

        for (index, line) in self.lines.iter().enumerate() {
            let hsn = line.hsn.as_deref().unwrap_or(&self.company.hsn_code);
            page.line(&table_row(
                particulars_width,
                &(index + 1).to_string(),
                &fit(&line.name, particulars_width),
                hsn,
                &line.quantity.to_string(),
                &format_inr(line.unit_price),
                &format_inr(line.line_total),
            ));
        }
        for _ in self.lines.len()..MIN_TABLE_ROWS {
            page.line(&table_row(particulars_width, "", "", "", "", "", ""));
        }

        page.rule();
    }

    fn totals(&self, page: &mut Page) {
        let b = self.breakdown;

        // Gross and discount lines appear only when a discount is in play
        if self.rates.discount.percent() > 0.0 {
            total_row(page, "Gross Total:", &format!("₹{}", format_inr(b.raw_subtotal)));
            total_row(
                page,
                &format!("Discount ({}%):", format_rate(self.rates.discount)),
                &format!("- ₹{}", format_inr(b.discount_amount)),
            );
        }

        total_row(
            page,
            "Taxable Value:",
            &format!("₹{}", format_inr(b.subtotal_after_discount)),
        );
        total_row(
            page,
            &format!("CGST ({}%):", format_rate(self.rates.cgst)),
            &format!("₹{}", format_inr(b.cgst_amount)),
        );
        total_row(
            page,
            &format!("SGST ({}%):", format_rate(self.rates.sgst)),
            &format!("₹{}", format_inr(b.sgst_amount)),
        );
        total_row(
            page,
            &format!("IGST ({}%):", format_rate(self.rates.igst)),
            &format!("₹{}", format_inr(b.igst_amount)),
        );
        total_row(page, "Others:", &format!("₹{}", format_inr(b.other_charges)));

        page.rule();
        total_row(page, "Grand Total:", &format!("₹{}", format_inr(b.grand_total)));
        page.double_rule();
    }

    fn words_and_bank(&self, page: &mut Page) {
        page.line("Amount in Words:");
        page.wrapped(&rupees_in_words(self.breakdown.grand_total));

        if let Some(bank) = &self.company.bank {
            page.blank();
            page.line("Bank Details:");
            page.line(&bank.bank_name);
            page.line(&bank.branch_name);
            page.line(&format!("A/c No: {}", bank.account_number));
            page.line(&format!("IFSC Code: {}", bank.ifsc_code));
        }
    }

    fn signatures(&self, page: &mut Page) {
        page.blank();
        page.split("", &format!("For {}", self.company.name));
        page.blank();
        page.split("Receiver's Signature & Seal", "Proprietor Signature");
    }
}

// -------------------------------------------------------------------------
// Row Helpers
// -------------------------------------------------------------------------

fn table_row(
    particulars_width: usize,
    sno: &str,
    particulars: &str,
    hsn: &str,
    qty: &str,
    rate: &str,
    amount: &str,
) -> String {
    format!(
        "{sno:>SNO_WIDTH$}  {particulars:<particulars_width$}  {hsn:^HSN_WIDTH$}  \
         {qty:>QTY_WIDTH$}  {rate:>RATE_WIDTH$}  {amount:>AMOUNT_WIDTH$}"
    )
}

fn total_row(page: &mut Page, label: &str, value: &str) {
    let block = format!("{label:<TOTAL_LABEL_WIDTH$}{value:>TOTAL_VALUE_WIDTH$}");
    page.split("", &block);
}

/// Truncates text to a column width, counted in characters.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        text.chars().take(width).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
