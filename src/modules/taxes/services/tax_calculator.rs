use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{AppError, Inr, TotalsError};
use crate::modules::taxes::models::{GstBreakdown, SupplyType};

/// TaxCalculator handles the single flat GST rate applied after discount
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate GST on the discounted amount
    ///
    /// tax_amount = base × rate_percent / 100, rounded to paise
    pub fn calculate_tax(
        &self,
        base: Decimal,
        rate_percent: Decimal,
    ) -> Result<Decimal, TotalsError> {
        let raw = base
            .checked_mul(rate_percent)
            .ok_or_else(|| TotalsError::out_of_range("tax_amount"))?
            / Decimal::ONE_HUNDRED;

        Ok(Inr::round(raw))
    }

    /// Validate tax rate is a percentage between 0 and 100 with at most 2 decimal places
    pub fn validate_tax_rate(&self, rate_percent: Decimal) -> Result<(), AppError> {
        if rate_percent < Decimal::ZERO {
            return Err(AppError::Validation(
                "Tax rate cannot be negative".to_string(),
            ));
        }

        if rate_percent > Decimal::ONE_HUNDRED {
            return Err(AppError::Validation(
                "Tax rate cannot exceed 100%".to_string(),
            ));
        }

        if rate_percent.normalize().scale() > 2 {
            return Err(AppError::Validation(
                "Tax rate cannot have more than 2 decimal places".to_string(),
            ));
        }

        Ok(())
    }

    /// Split a tax amount into CGST/SGST (intra-state) or IGST (inter-state)
    ///
    /// The halves are cut at the paisa; an odd paisa goes to SGST so the
    /// parts always add back up to `tax_amount`.
    pub fn split(&self, tax_amount: Decimal, supply_type: SupplyType) -> GstBreakdown {
        let tax_amount = Inr::round(tax_amount);

        match supply_type {
            SupplyType::IntraState => {
                let mut cgst = (tax_amount / Decimal::TWO)
                    .round_dp_with_strategy(Inr::SCALE, RoundingStrategy::ToZero);
                cgst.rescale(Inr::SCALE);
                let sgst = tax_amount - cgst;

                GstBreakdown {
                    supply_type,
                    cgst,
                    sgst,
                    igst: Inr::zero(),
                }
            }
            SupplyType::InterState => GstBreakdown {
                supply_type,
                cgst: Inr::zero(),
                sgst: Inr::zero(),
                igst: tax_amount,
            },
        }
    }

    /// Decide the supply type from the shop's home state and the invoice's
    /// state of supply. Unknown on either side is treated as intra-state.
    pub fn supply_type(
        &self,
        business_state: Option<&str>,
        state_of_supply: Option<&str>,
    ) -> SupplyType {
        match (business_state, state_of_supply) {
            (Some(home), Some(supply)) if !home.trim().is_empty() && !supply.trim().is_empty() => {
                if home.trim().eq_ignore_ascii_case(supply.trim()) {
                    SupplyType::IntraState
                } else {
                    SupplyType::InterState
                }
            }
            _ => SupplyType::IntraState,
        }
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
