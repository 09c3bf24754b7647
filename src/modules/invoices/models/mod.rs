mod line_item;
mod pricing;
mod record;
mod requests;
mod totals;

pub use line_item::{CatalogProduct, LineItem, DEFAULT_HSN_CODE};
pub(crate) use line_item::compute_line_total;
pub use pricing::{DiscountType, PaymentMethod, PaymentMode, PricingConfig};
pub use record::{CustomerSnapshot, InvoiceMeta, InvoiceRecord};
pub use requests::{
    build_line_items, validate_pricing, AmountInput, DefaultsResponse, InvoiceInput,
    LineItemInput, PricingInput, TotalsRequest, TotalsResponse,
};
pub use totals::{InvoiceTotals, PaymentStatus};
