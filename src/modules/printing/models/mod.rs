mod invoice_document;

pub use invoice_document::{
    CustomerBlock, DocumentHeader, DocumentRow, InvoiceDocument, SummaryLine,
};
