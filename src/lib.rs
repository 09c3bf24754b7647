//! JewelBill invoice totals service
//!
//! Turns line items and pricing options into reconciled invoice totals with
//! Indian GST, and serves them to the billing UI over HTTP.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::invoices;
pub use modules::printing;
pub use modules::taxes;

use actix_web::web;

/// Register every route of the service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(modules::health::controllers::configure)
        .configure(modules::invoices::controllers::configure);
}
