use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Inr;

/// Payment status of an invoice.
///
/// `Paid`, `Partial` and `Pending` are derived from the totals on every
/// recomputation. `Cancelled` is set administratively and never derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Partial,
    Pending,
    Cancelled,
}

impl PaymentStatus {
    /// Classify from the balance still owed against the invoice total
    pub fn classify(total_amount: Decimal, balance_due: Decimal) -> Self {
        if balance_due <= Decimal::ZERO {
            PaymentStatus::Paid
        } else if balance_due < total_amount {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Pending
        }
    }

    /// Apply the administrative cancellation override
    pub fn effective(classified: PaymentStatus, cancelled: bool) -> Self {
        if cancelled {
            PaymentStatus::Cancelled
        } else {
            classified
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Partial => write!(f, "partial"),
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "paid" => Ok(PaymentStatus::Paid),
            "partial" => Ok(PaymentStatus::Partial),
            "pending" => Ok(PaymentStatus::Pending),
            "cancelled" => Ok(PaymentStatus::Cancelled),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }
}

/// Fully reconciled invoice totals.
///
/// Always produced in one piece by `compute_totals`; never edited field by
/// field. All money values carry two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub after_discount: Decimal,
    pub tax_amount: Decimal,
    pub pre_round_total: Decimal,
    /// Signed adjustment to the nearest rupee
    pub round_off: Decimal,
    pub total_amount: Decimal,
    pub amount_paid: Decimal,
    pub balance_due: Decimal,
    pub payment_status: PaymentStatus,
}

impl InvoiceTotals {
    /// Totals of an invoice with no line items
    pub fn empty() -> Self {
        Self {
            subtotal: Inr::zero(),
            discount_amount: Inr::zero(),
            after_discount: Inr::zero(),
            tax_amount: Inr::zero(),
            pre_round_total: Inr::zero(),
            round_off: Inr::zero(),
            total_amount: Inr::zero(),
            amount_paid: Inr::zero(),
            balance_due: Inr::zero(),
            payment_status: PaymentStatus::classify(Decimal::ZERO, Decimal::ZERO),
        }
    }
}
