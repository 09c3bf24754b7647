use rust_decimal::Decimal;

use crate::core::{Inr, TotalsError};
use crate::modules::invoices::models::{
    compute_line_total, DiscountType, InvoiceTotals, LineItem, PaymentMode, PaymentStatus,
    PricingConfig,
};
use crate::modules::taxes::TaxCalculator;

/// Derive the full totals record for an invoice.
///
/// Pipeline: subtotal, discount (clamped to the subtotal), GST on the
/// discounted amount, optional round-off to the nearest rupee, then the
/// payment split. Line totals are recomputed from quantity and price here
/// rather than read from the items.
///
/// Pure and deterministic; runs on every edit of the invoice form.
pub fn compute_totals(
    items: &[LineItem],
    pricing: &PricingConfig,
) -> Result<InvoiceTotals, TotalsError> {
    if items.is_empty() {
        return Ok(InvoiceTotals::empty());
    }

    let subtotal = items.iter().try_fold(Decimal::ZERO, |acc, item| {
        let line_total = compute_line_total(item.quantity(), item.unit_price())?;
        acc.checked_add(line_total)
            .ok_or_else(|| TotalsError::out_of_range("subtotal"))
    })?;
    let subtotal = Inr::round(subtotal);

    let discount_amount = discount_amount(subtotal, pricing)?;
    let after_discount = subtotal
        .checked_sub(discount_amount)
        .map(Inr::round)
        .ok_or_else(|| TotalsError::out_of_range("after_discount"))?;

    let tax_amount =
        TaxCalculator::new().calculate_tax(after_discount, pricing.tax_rate_percent)?;

    let pre_round_total = after_discount
        .checked_add(tax_amount)
        .map(Inr::round)
        .ok_or_else(|| TotalsError::out_of_range("pre_round_total"))?;

    let round_off = if pricing.round_off_enabled {
        Inr::round_to_rupee(pre_round_total)
            .checked_sub(pre_round_total)
            .map(Inr::round)
            .ok_or_else(|| TotalsError::out_of_range("round_off"))?
    } else {
        Inr::zero()
    };
    let total_amount = pre_round_total
        .checked_add(round_off)
        .map(Inr::round)
        .ok_or_else(|| TotalsError::out_of_range("total_amount"))?;

    let amount_paid = match pricing.payment_mode {
        PaymentMode::Cash => total_amount,
        PaymentMode::Credit => Inr::round(pricing.amount_paid.min(total_amount)),
    };
    let balance_due = total_amount
        .checked_sub(amount_paid)
        .map(Inr::round)
        .ok_or_else(|| TotalsError::out_of_range("balance_due"))?;
    let payment_status = PaymentStatus::classify(total_amount, balance_due);

    tracing::debug!(
        items = items.len(),
        subtotal = %subtotal,
        total_amount = %total_amount,
        balance_due = %balance_due,
        status = %payment_status,
        "Computed invoice totals"
    );

    Ok(InvoiceTotals {
        subtotal,
        discount_amount,
        after_discount,
        tax_amount,
        pre_round_total,
        round_off,
        total_amount,
        amount_paid,
        balance_due,
        payment_status,
    })
}

fn discount_amount(subtotal: Decimal, pricing: &PricingConfig) -> Result<Decimal, TotalsError> {
    let raw = match pricing.discount_type {
        DiscountType::Amount => pricing.discount_value,
        DiscountType::Percent => {
            subtotal
                .checked_mul(pricing.discount_value)
                .ok_or_else(|| TotalsError::out_of_range("discount_amount"))?
                / Decimal::ONE_HUNDRED
        }
    };

    // A negative subtotal gets no discount and flows through unchanged
    Ok(Inr::round(raw.max(Decimal::ZERO).min(subtotal.max(Decimal::ZERO))))
}
