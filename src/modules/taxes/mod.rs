pub mod models;
pub mod services;

pub use models::{gst_rate_options, GstBreakdown, GstRateOption, SupplyType};
pub use services::TaxCalculator;
