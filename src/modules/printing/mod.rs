// Printing module: print-ready view of a saved invoice

pub mod models;
pub mod services;

pub use models::InvoiceDocument;
pub use services::{amount_in_words, format_weight};
