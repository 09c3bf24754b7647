mod gst;

pub use gst::{gst_rate_options, GstBreakdown, GstRateOption, SupplyType};
