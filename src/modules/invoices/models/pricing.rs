use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::InvoiceDefaults;

/// How `discount_value` is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Percentage of the subtotal
    #[default]
    Percent,
    /// Flat rupee amount
    Amount,
}

/// Invoice mode: settle now, or allow a balance to remain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    /// Paid in full at invoice time
    #[default]
    Cash,
    /// Partial or deferred payment tracked through the balance due
    Credit,
}

/// How the customer paid. Informational only; totals never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Upi,
    BankTransfer,
    Cheque,
    Credit,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Cheque => "Cheque",
            PaymentMethod::Credit => "Credit (Pay Later)",
        }
    }
}

/// Per-invoice pricing options, edited by the user until the invoice is saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub tax_rate_percent: Decimal,
    pub round_off_enabled: bool,
    pub payment_mode: PaymentMode,
    /// Only meaningful in Credit mode; Cash forces it to the total
    pub amount_paid: Decimal,
}

impl PricingConfig {
    /// New-invoice pricing: no discount, default GST, Cash
    pub fn from_defaults(defaults: &InvoiceDefaults) -> Self {
        Self {
            discount_type: DiscountType::Percent,
            discount_value: Decimal::ZERO,
            tax_rate_percent: defaults.tax_rate_percent,
            round_off_enabled: defaults.round_off_enabled,
            payment_mode: PaymentMode::Cash,
            amount_paid: Decimal::ZERO,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::from_defaults(&InvoiceDefaults::default())
    }
}
