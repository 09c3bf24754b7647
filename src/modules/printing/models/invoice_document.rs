use serde::Serialize;

use crate::config::BankDetails;
use crate::modules::invoices::models::PaymentStatus;

/// Print-ready view of a saved invoice.
///
/// Every amount is already formatted; the renderer only lays it out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDocument {
    pub title: String,
    pub header: DocumentHeader,
    pub customer: CustomerBlock,
    pub rows: Vec<DocumentRow>,
    pub items_total: String,
    pub totals: Vec<SummaryLine>,
    pub gst: Vec<SummaryLine>,
    pub grand_total: String,
    pub amount_in_words: String,
    pub received: String,
    pub balance_due: Option<String>,
    pub you_saved: Option<String>,
    pub payment_status: PaymentStatus,
    pub payment_method: String,
    pub bank: Option<BankDetails>,
    pub terms: String,
    pub footer: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentHeader {
    pub business_name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gst_number: Option<String>,
    pub pan_number: Option<String>,
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerBlock {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub gst_number: Option<String>,
    pub state_of_supply: Option<String>,
}

/// One numbered row of the items table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRow {
    pub serial: usize,
    pub name: String,
    pub hsn_code: String,
    pub purity: Option<String>,
    pub weight: Option<String>,
    pub quantity: i32,
    pub unit: String,
    pub unit_price: String,
    pub amount: String,
}

/// A label/amount pair in the summary box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub amount: String,
}

impl SummaryLine {
    pub fn new(label: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            amount: amount.into(),
        }
    }
}
