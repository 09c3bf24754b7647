pub mod invoice_draft;
pub mod invoice_number;
pub mod invoice_service;
pub mod totals_engine;

pub use invoice_draft::InvoiceDraft;
pub use invoice_number::{format_invoice_number, generate_invoice_number};
pub use invoice_service::InvoiceService;
pub use totals_engine::compute_totals;
