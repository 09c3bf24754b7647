use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{AppError, Inr, Result};
use crate::modules::taxes::TaxCalculator;

use super::{env_opt, env_or, env_parse};

/// Defaults applied to every new invoice.
///
/// Passed explicitly into the invoice flow instead of living in global state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDefaults {
    /// GST percentage pre-selected on a new invoice
    pub tax_rate_percent: Decimal,
    /// Prefix for generated invoice numbers (`INV-2610-0042`)
    pub invoice_prefix: String,
    pub round_off_enabled: bool,
    /// HSN code for a blank row (7113: articles of jewellery)
    pub default_hsn_code: String,
    pub default_unit: String,
}

impl Default for InvoiceDefaults {
    fn default() -> Self {
        Self {
            tax_rate_percent: Decimal::from(3),
            invoice_prefix: "INV".to_string(),
            round_off_enabled: true,
            default_hsn_code: "7113".to_string(),
            default_unit: "pcs".to_string(),
        }
    }
}

impl InvoiceDefaults {
    pub fn from_env() -> Result<Self> {
        let tax_rate_percent = match env_opt("DEFAULT_TAX_RATE") {
            Some(raw) => Inr::parse(&raw, "DEFAULT_TAX_RATE")
                .map_err(|_| AppError::configuration("Invalid DEFAULT_TAX_RATE"))?,
            None => Decimal::from(3),
        };

        Ok(Self {
            tax_rate_percent,
            invoice_prefix: env_or("INVOICE_PREFIX", "INV").trim().to_string(),
            round_off_enabled: env_parse("DEFAULT_ROUND_OFF", "true")?,
            default_hsn_code: env_or("DEFAULT_HSN_CODE", "7113"),
            default_unit: env_or("DEFAULT_UNIT", "pcs"),
        })
    }

    pub fn validate(&self) -> Result<()> {
        TaxCalculator::new()
            .validate_tax_rate(self.tax_rate_percent)
            .map_err(|e| AppError::configuration(format!("DEFAULT_TAX_RATE: {}", e)))?;

        if self.invoice_prefix.is_empty() {
            return Err(AppError::configuration("INVOICE_PREFIX cannot be empty"));
        }

        if !self
            .invoice_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '/' || c == '_')
        {
            return Err(AppError::configuration(
                "INVOICE_PREFIX may only contain letters, digits, '/' and '_'",
            ));
        }

        Ok(())
    }
}
