use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether the sale stays within the shop's home state.
///
/// Intra-state sales split GST evenly into CGST and SGST; inter-state sales
/// carry the whole amount as IGST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyType {
    #[default]
    IntraState,
    InterState,
}

/// GST components of an invoice's tax amount.
///
/// `cgst + sgst + igst` always equals the tax amount it was split from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstBreakdown {
    pub supply_type: SupplyType,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
}

impl GstBreakdown {
    pub fn total(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }
}

/// A selectable GST slab for the invoice editor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GstRateOption {
    pub value: Decimal,
    pub label: String,
}

/// Slabs offered for jewellery billing, in display order.
pub fn gst_rate_options() -> Vec<GstRateOption> {
    [
        (Decimal::ZERO, "No Tax"),
        (Decimal::new(25, 2), "GST 0.25%"),
        (Decimal::from(3), "GST 3%"),
        (Decimal::from(5), "GST 5%"),
        (Decimal::from(12), "GST 12%"),
        (Decimal::from(18), "GST 18%"),
        (Decimal::from(28), "GST 28%"),
    ]
    .into_iter()
    .map(|(value, label)| GstRateOption {
        value,
        label: label.to_string(),
    })
    .collect()
}
