// Request DTOs for the invoice endpoints.
//
// Browser forms send numbers, numeric strings, or empty strings for the same
// field. Everything is normalised here into `LineItem` / `PricingConfig`
// before the totals engine sees it. Unknown fields (a client-computed
// `line_total`, for instance) are rejected outright.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use super::pricing::{DiscountType, PaymentMethod, PaymentMode, PricingConfig};
use super::record::{CustomerSnapshot, InvoiceMeta};
use super::totals::InvoiceTotals;
use crate::config::{BusinessProfile, InvoiceDefaults};
use crate::core::{AppError, Inr, Result, TotalsError};
use crate::modules::taxes::{GstBreakdown, GstRateOption, TaxCalculator};

/// A money or percentage field as typed into a form
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Convert to a decimal. Blank text is 0; NaN, infinities and
    /// unparseable text are `InvalidInput`.
    pub fn to_decimal(&self, field: &str) -> std::result::Result<Decimal, TotalsError> {
        match self {
            AmountInput::Number(value) => Inr::from_f64(*value, field),
            AmountInput::Text(text) => Inr::parse(text, field),
        }
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        AmountInput::Text(value.to_string())
    }
}

fn optional_amount(
    input: &Option<AmountInput>,
    field: &str,
) -> std::result::Result<Option<Decimal>, TotalsError> {
    input.as_ref().map(|v| v.to_decimal(field)).transpose()
}

/// One row of the invoice form
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineItemInput {
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default, alias = "product_name")]
    pub name: String,
    #[serde(default)]
    pub hsn_code: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub metal_type: Option<String>,
    #[serde(default)]
    pub purity: Option<String>,
    #[serde(default, alias = "weight")]
    pub weight_grams: Option<AmountInput>,
    #[serde(default)]
    pub making_charges: Option<AmountInput>,
    pub quantity: i64,
    pub unit_price: AmountInput,
}

impl LineItemInput {
    /// Build a validated line item. `position` is 1-based and only used in
    /// error messages.
    pub fn into_line_item(self, position: usize, defaults: &InvoiceDefaults) -> Result<LineItem> {
        let field = |name: &str| format!("items[{}].{}", position, name);

        let quantity = i32::try_from(self.quantity).map_err(|_| {
            AppError::validation(format!("Line item {}: quantity is too large", position))
        })?;
        LineItem::validate_quantity(quantity)
            .map_err(|e| AppError::validation(format!("Line item {}: {}", position, strip(&e))))?;

        let unit_price = self.unit_price.to_decimal(&field("unit_price"))?;
        LineItem::validate_unit_price(unit_price)
            .map_err(|e| AppError::validation(format!("Line item {}: {}", position, strip(&e))))?;

        let weight_grams =
            optional_amount(&self.weight_grams, &field("weight_grams"))?.unwrap_or_default();
        let making_charges =
            optional_amount(&self.making_charges, &field("making_charges"))?.unwrap_or_default();

        let mut item = LineItem::new(self.name.trim(), quantity, unit_price)?;
        item.product_id = self.product_id;
        item.hsn_code = self
            .hsn_code
            .filter(|code| !code.trim().is_empty())
            .unwrap_or_else(|| defaults.default_hsn_code.clone());
        item.unit = self
            .unit
            .filter(|unit| !unit.trim().is_empty())
            .unwrap_or_else(|| defaults.default_unit.clone());
        item.category = self.category.filter(|v| !v.trim().is_empty());
        item.metal_type = self.metal_type.filter(|v| !v.trim().is_empty());
        item.purity = self.purity.filter(|v| !v.trim().is_empty());
        item.weight_grams = weight_grams;
        item.making_charges = making_charges;

        if item.weight_grams < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Line item {}: weight cannot be negative",
                position
            )));
        }

        Ok(item)
    }
}

// "Validation error: X" -> "X", for nesting inside a positional message
fn strip(err: &AppError) -> String {
    match err {
        AppError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    }
}

/// Pricing section of the invoice form. Missing fields fall back to the
/// configured invoice defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingInput {
    #[serde(default)]
    pub discount_type: Option<DiscountType>,
    #[serde(default)]
    pub discount_value: Option<AmountInput>,
    #[serde(default, alias = "tax_rate")]
    pub tax_rate_percent: Option<AmountInput>,
    #[serde(default, alias = "round_off")]
    pub round_off_enabled: Option<bool>,
    #[serde(default, alias = "invoice_type")]
    pub payment_mode: Option<PaymentMode>,
    #[serde(default)]
    pub amount_paid: Option<AmountInput>,
}

impl PricingInput {
    pub fn into_pricing(self, defaults: &InvoiceDefaults) -> Result<PricingConfig> {
        let mut pricing = PricingConfig::from_defaults(defaults);

        if let Some(discount_type) = self.discount_type {
            pricing.discount_type = discount_type;
        }
        if let Some(value) = optional_amount(&self.discount_value, "pricing.discount_value")? {
            pricing.discount_value = value;
        }
        if let Some(rate) = optional_amount(&self.tax_rate_percent, "pricing.tax_rate_percent")? {
            pricing.tax_rate_percent = rate;
        }
        if let Some(round_off) = self.round_off_enabled {
            pricing.round_off_enabled = round_off;
        }
        if let Some(mode) = self.payment_mode {
            pricing.payment_mode = mode;
        }
        if let Some(paid) = optional_amount(&self.amount_paid, "pricing.amount_paid")? {
            pricing.amount_paid = paid;
        }

        validate_pricing(&pricing)?;
        Ok(pricing)
    }
}

/// Business rules on pricing values
pub fn validate_pricing(pricing: &PricingConfig) -> Result<()> {
    Inr::validate_amount(pricing.discount_value, "Discount").map_err(AppError::Validation)?;

    if pricing.discount_type == DiscountType::Percent
        && pricing.discount_value > Decimal::ONE_HUNDRED
    {
        return Err(AppError::validation("Discount percent cannot exceed 100"));
    }

    TaxCalculator::new().validate_tax_rate(pricing.tax_rate_percent)?;

    Inr::validate_amount(pricing.amount_paid, "Amount paid").map_err(AppError::Validation)?;

    Ok(())
}

/// POST /api/invoices/totals
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TotalsRequest {
    #[serde(default)]
    pub items: Vec<LineItemInput>,
    #[serde(default)]
    pub pricing: PricingInput,
    #[serde(default)]
    pub state_of_supply: Option<String>,
}

/// Full invoice form, for preview and finalize
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvoiceInput {
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    #[serde(default)]
    pub customer_gst: Option<String>,
    #[serde(default)]
    pub state_of_supply: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItemInput>,
    #[serde(default)]
    pub pricing: PricingInput,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, alias = "description")]
    pub notes: Option<String>,
}

impl InvoiceInput {
    /// Split off the metadata, filling a missing number and date from the
    /// supplied fallbacks.
    pub fn meta(&self, fallback_number: impl FnOnce() -> String, today: NaiveDate) -> InvoiceMeta {
        let non_blank = |v: &Option<String>| {
            v.as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        InvoiceMeta {
            invoice_number: non_blank(&self.invoice_number).unwrap_or_else(fallback_number),
            invoice_date: self.invoice_date.unwrap_or(today),
            due_date: self.due_date,
            customer: CustomerSnapshot {
                customer_id: self.customer_id,
                name: non_blank(&self.customer_name).unwrap_or_default(),
                phone: non_blank(&self.customer_phone),
                address: non_blank(&self.customer_address),
                gst_number: non_blank(&self.customer_gst),
            },
            state_of_supply: non_blank(&self.state_of_supply),
            payment_method: self.payment_method.unwrap_or(match self.pricing.payment_mode {
                Some(PaymentMode::Credit) => PaymentMethod::Credit,
                _ => PaymentMethod::Cash,
            }),
            notes: non_blank(&self.notes),
            cancelled: false,
        }
    }
}

/// Convert every row, stopping at the first invalid one
pub fn build_line_items(
    inputs: Vec<LineItemInput>,
    defaults: &InvoiceDefaults,
) -> Result<Vec<LineItem>> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| input.into_line_item(index + 1, defaults))
        .collect()
}

/// Response for POST /api/invoices/totals
#[derive(Debug, Clone, Serialize)]
pub struct TotalsResponse {
    pub items: Vec<LineItem>,
    pub totals: InvoiceTotals,
    pub gst: GstBreakdown,
}

/// Response for GET /api/invoices/defaults: everything a new invoice form
/// needs to start from
#[derive(Debug, Clone, Serialize)]
pub struct DefaultsResponse {
    pub defaults: InvoiceDefaults,
    pub pricing: PricingConfig,
    pub gst_rates: Vec<GstRateOption>,
    pub suggested_invoice_number: String,
    pub business: BusinessProfile,
}
