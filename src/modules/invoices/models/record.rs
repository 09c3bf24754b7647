// The record handed to the persistence layer on save and read back on edit.
// Totals and the GST split are stored for listing and reporting, but they are
// a snapshot: loading a record always re-derives them from items + pricing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use super::pricing::{PaymentMethod, PricingConfig};
use super::totals::{InvoiceTotals, PaymentStatus};
use crate::modules::taxes::GstBreakdown;

/// Customer details copied onto the invoice at billing time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub gst_number: Option<String>,
}

/// Everything on an invoice that does not feed the totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceMeta {
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub customer: CustomerSnapshot,
    pub state_of_supply: Option<String>,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
    pub cancelled: bool,
}

impl InvoiceMeta {
    pub fn new(invoice_number: impl Into<String>, invoice_date: NaiveDate) -> Self {
        Self {
            invoice_number: invoice_number.into(),
            invoice_date,
            due_date: None,
            customer: CustomerSnapshot::default(),
            state_of_supply: None,
            payment_method: PaymentMethod::Cash,
            notes: None,
            cancelled: false,
        }
    }
}

/// Saved invoice: metadata, inputs and the derived values in one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub customer: CustomerSnapshot,
    #[serde(default)]
    pub state_of_supply: Option<String>,
    pub items: Vec<LineItem>,
    pub pricing: PricingConfig,
    pub totals: InvoiceTotals,
    pub gst: GstBreakdown,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl InvoiceRecord {
    /// Status to show: the derived status unless the invoice was cancelled
    pub fn effective_status(&self) -> PaymentStatus {
        PaymentStatus::effective(self.totals.payment_status, self.cancelled)
    }

    /// Split the record back into its metadata
    pub fn meta(&self) -> InvoiceMeta {
        InvoiceMeta {
            invoice_number: self.invoice_number.clone(),
            invoice_date: self.invoice_date,
            due_date: self.due_date,
            customer: self.customer.clone(),
            state_of_supply: self.state_of_supply.clone(),
            payment_method: self.payment_method,
            notes: self.notes.clone(),
            cancelled: self.cancelled,
        }
    }
}
