use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::amount_in_words::amount_in_words;
use crate::config::BusinessProfile;
use crate::core::Inr;
use crate::modules::invoices::models::{DiscountType, InvoiceRecord};
use crate::modules::printing::models::{
    CustomerBlock, DocumentHeader, DocumentRow, InvoiceDocument, SummaryLine,
};
use crate::modules::taxes::SupplyType;

const WALK_IN_CUSTOMER: &str = "Walk-in Customer";
const DEFAULT_TERMS: &str = "Thanks for doing business with us!";

/// `12.50g`, or `1.25kg` from a kilogram up
pub fn format_weight(grams: Decimal) -> String {
    let kilo = Decimal::from(1000);
    if grams >= kilo {
        format!("{}kg", Inr::round(grams / kilo))
    } else {
        format!("{}g", Inr::round(grams))
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

fn format_percent(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}

impl InvoiceDocument {
    /// Lay out a saved invoice for printing.
    ///
    /// Reads the totals and GST split off the record as they are; nothing is
    /// recomputed here.
    pub fn build(record: &InvoiceRecord, business: &BusinessProfile) -> Self {
        let totals = &record.totals;
        let pricing = &record.pricing;

        let rows = record
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| DocumentRow {
                serial: index + 1,
                name: item.name.clone(),
                hsn_code: item.hsn_code.clone(),
                purity: item.purity.clone(),
                weight: (item.weight_grams > Decimal::ZERO)
                    .then(|| format_weight(item.weight_grams)),
                quantity: item.quantity(),
                unit: item.unit.to_uppercase(),
                unit_price: Inr::format_amount(item.unit_price()),
                amount: Inr::format_amount(item.line_total()),
            })
            .collect();

        let mut summary = vec![SummaryLine::new("Sub Total", Inr::format_amount(totals.subtotal))];

        if !totals.discount_amount.is_zero() {
            let label = match pricing.discount_type {
                DiscountType::Percent => {
                    format!("Discount ({})", format_percent(pricing.discount_value))
                }
                DiscountType::Amount => "Discount".to_string(),
            };
            summary.push(SummaryLine::new(
                label,
                format!("-{}", Inr::format_amount(totals.discount_amount)),
            ));
        }

        if !totals.tax_amount.is_zero() {
            summary.push(SummaryLine::new(
                format!("GST ({})", format_percent(pricing.tax_rate_percent)),
                format!("+{}", Inr::format_amount(totals.tax_amount)),
            ));
        }

        if !totals.round_off.is_zero() {
            summary.push(SummaryLine::new("Round Off", Inr::format_signed(totals.round_off)));
        }

        let mut gst = Vec::new();
        if !totals.tax_amount.is_zero() {
            match record.gst.supply_type {
                SupplyType::IntraState => {
                    let half = format_percent(pricing.tax_rate_percent / Decimal::TWO);
                    gst.push(SummaryLine::new(
                        format!("CGST ({})", half),
                        Inr::format_amount(record.gst.cgst),
                    ));
                    gst.push(SummaryLine::new(
                        format!("SGST ({})", half),
                        Inr::format_amount(record.gst.sgst),
                    ));
                }
                SupplyType::InterState => {
                    gst.push(SummaryLine::new(
                        format!("IGST ({})", format_percent(pricing.tax_rate_percent)),
                        Inr::format_amount(record.gst.igst),
                    ));
                }
            }
        }

        let customer = &record.customer;

        InvoiceDocument {
            title: if totals.tax_amount.is_zero() {
                "Invoice".to_string()
            } else {
                "Tax Invoice".to_string()
            },
            header: DocumentHeader {
                business_name: business.name.clone(),
                address: business.address.clone(),
                phone: business.phone.clone(),
                email: business.email.clone(),
                gst_number: business.gst_number.clone(),
                pan_number: business.pan_number.clone(),
                invoice_number: record.invoice_number.clone(),
                invoice_date: format_date(record.invoice_date),
                due_date: record.due_date.map(format_date),
            },
            customer: CustomerBlock {
                name: if customer.name.trim().is_empty() {
                    WALK_IN_CUSTOMER.to_string()
                } else {
                    customer.name.clone()
                },
                phone: customer.phone.clone(),
                address: customer.address.clone(),
                gst_number: customer.gst_number.clone(),
                state_of_supply: record.state_of_supply.clone(),
            },
            rows,
            items_total: Inr::format_amount(totals.subtotal),
            totals: summary,
            gst,
            grand_total: Inr::format_amount(totals.total_amount),
            amount_in_words: amount_in_words(totals.total_amount),
            received: Inr::format_amount(totals.amount_paid),
            balance_due: (totals.balance_due > Decimal::ZERO)
                .then(|| Inr::format_amount(totals.balance_due)),
            you_saved: (totals.discount_amount > Decimal::ZERO)
                .then(|| Inr::format_amount(totals.discount_amount)),
            payment_status: record.effective_status(),
            payment_method: record.payment_method.label().to_string(),
            bank: business.bank.clone(),
            terms: business
                .terms
                .clone()
                .unwrap_or_else(|| DEFAULT_TERMS.to_string()),
            footer: business.footer.clone(),
            notes: record.notes.clone(),
        }
    }
}
