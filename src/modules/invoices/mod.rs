// Invoices module: line items, pricing, the totals engine and the draft that
// keeps them reconciled

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{InvoiceRecord, InvoiceTotals, LineItem, PaymentStatus, PricingConfig};
pub use services::{compute_totals, InvoiceDraft, InvoiceService};
