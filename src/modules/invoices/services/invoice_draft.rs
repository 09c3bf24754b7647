// The invoice being edited. Every mutation goes through `apply`, which edits
// copies of the items and pricing, recomputes the totals and only then
// commits, so a failed edit leaves the draft exactly as it was and the totals
// are never stale.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::totals_engine::compute_totals;
use crate::config::{BusinessProfile, InvoiceDefaults};
use crate::core::{AppError, Result};
use crate::modules::invoices::models::{
    validate_pricing, CatalogProduct, DiscountType, InvoiceMeta, InvoiceRecord, InvoiceTotals,
    LineItem, PaymentMode, PricingConfig,
};
use crate::modules::taxes::TaxCalculator;

#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    defaults: InvoiceDefaults,
    items: Vec<LineItem>,
    pricing: PricingConfig,
    totals: InvoiceTotals,
}

impl InvoiceDraft {
    /// Empty invoice with the configured default pricing
    pub fn new(defaults: &InvoiceDefaults) -> Self {
        Self {
            defaults: defaults.clone(),
            items: Vec::new(),
            pricing: PricingConfig::from_defaults(defaults),
            totals: InvoiceTotals::empty(),
        }
    }

    /// Draft seeded with already-validated items and pricing
    pub fn with_parts(
        defaults: &InvoiceDefaults,
        items: Vec<LineItem>,
        pricing: PricingConfig,
    ) -> Result<Self> {
        let mut draft = Self::new(defaults);
        draft.apply(|draft_items, draft_pricing| {
            *draft_items = items;
            *draft_pricing = pricing;
            Ok(())
        })?;
        Ok(draft)
    }

    /// Rebuild a draft from a saved record.
    ///
    /// Only the items and pricing are read; the stored totals are a snapshot
    /// and are replaced by freshly derived ones.
    pub fn from_record(record: &InvoiceRecord, defaults: &InvoiceDefaults) -> Result<Self> {
        let draft = Self::with_parts(defaults, record.items.clone(), record.pricing.clone())?;

        if draft.totals != record.totals {
            warn!(
                invoice_number = %record.invoice_number,
                stored_total = %record.totals.total_amount,
                derived_total = %draft.totals.total_amount,
                "Stored invoice totals differ from derived totals, discarding snapshot"
            );
        }

        Ok(draft)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    pub fn totals(&self) -> &InvoiceTotals {
        &self.totals
    }

    /// Add a catalog product as a new row (quantity 1). Returns its index.
    pub fn add_product(&mut self, product: &CatalogProduct) -> Result<usize> {
        let item = LineItem::from_product(product, &self.defaults)?;
        LineItem::validate_unit_price(item.unit_price())?;

        self.apply(|items, _| {
            items.push(item);
            Ok(())
        })?;
        Ok(self.items.len() - 1)
    }

    /// Add an empty row for manual entry. Returns its index.
    pub fn add_blank_row(&mut self) -> Result<usize> {
        let item = LineItem::blank(&self.defaults);
        self.apply(|items, _| {
            items.push(item);
            Ok(())
        })?;
        Ok(self.items.len() - 1)
    }

    pub fn update_quantity(&mut self, index: usize, quantity: i32) -> Result<()> {
        LineItem::validate_quantity(quantity)?;
        self.apply(|items, _| {
            item_at(items, index)?.set_quantity(quantity)?;
            Ok(())
        })
    }

    pub fn update_unit_price(&mut self, index: usize, unit_price: Decimal) -> Result<()> {
        LineItem::validate_unit_price(unit_price)?;
        self.apply(|items, _| {
            item_at(items, index)?.set_unit_price(unit_price)?;
            Ok(())
        })
    }

    /// Edit the descriptive fields of a row (name, HSN, weight, ...).
    ///
    /// Quantity and price are only reachable through their setters, so the
    /// line total stays consistent whatever `edit` does.
    pub fn update_details<F>(&mut self, index: usize, edit: F) -> Result<()>
    where
        F: FnOnce(&mut LineItem),
    {
        self.apply(|items, _| {
            edit(item_at(items, index)?);
            Ok(())
        })
    }

    pub fn remove_item(&mut self, index: usize) -> Result<LineItem> {
        let mut removed = None;
        self.apply(|items, _| {
            item_at(items, index)?;
            removed = Some(items.remove(index));
            Ok(())
        })?;
        removed.ok_or_else(|| AppError::internal("line item removal did not run"))
    }

    pub fn set_discount(&mut self, discount_type: DiscountType, value: Decimal) -> Result<()> {
        self.apply(|_, pricing| {
            pricing.discount_type = discount_type;
            pricing.discount_value = value;
            Ok(())
        })
    }

    pub fn set_tax_rate(&mut self, rate_percent: Decimal) -> Result<()> {
        self.apply(|_, pricing| {
            pricing.tax_rate_percent = rate_percent;
            Ok(())
        })
    }

    pub fn set_round_off(&mut self, enabled: bool) -> Result<()> {
        self.apply(|_, pricing| {
            pricing.round_off_enabled = enabled;
            Ok(())
        })
    }

    /// Switch between Cash and Credit.
    ///
    /// Cash always settles in full. Switching to Credit keeps the amount
    /// last paid (the Cash total), so the invoice stays Paid until the
    /// amount paid is lowered.
    pub fn set_payment_mode(&mut self, mode: PaymentMode) -> Result<()> {
        self.apply(|_, pricing| {
            pricing.payment_mode = mode;
            Ok(())
        })
    }

    /// Amount received so far. Ignored in Cash mode; clamped to the total
    /// in Credit mode.
    pub fn set_amount_paid(&mut self, amount: Decimal) -> Result<()> {
        self.apply(|_, pricing| {
            pricing.amount_paid = amount;
            Ok(())
        })
    }

    /// Produce the record handed to the persistence layer on save
    pub fn to_record(
        &self,
        meta: InvoiceMeta,
        business: &BusinessProfile,
    ) -> Result<InvoiceRecord> {
        if self.items.is_empty() {
            return Err(AppError::validation("Add at least one item before saving"));
        }

        if meta.invoice_number.trim().is_empty() {
            return Err(AppError::validation("Invoice number cannot be empty"));
        }

        for (position, item) in self.items.iter().enumerate() {
            item.validate().map_err(|e| match e {
                AppError::Validation(msg) => {
                    AppError::validation(format!("Line item {}: {}", position + 1, msg))
                }
                other => other,
            })?;
        }

        if let Some(due_date) = meta.due_date {
            if due_date < meta.invoice_date {
                return Err(AppError::validation(
                    "Due date cannot be before the invoice date",
                ));
            }
        }

        let calculator = TaxCalculator::new();
        let supply_type =
            calculator.supply_type(business.state.as_deref(), meta.state_of_supply.as_deref());
        let gst = calculator.split(self.totals.tax_amount, supply_type);

        Ok(InvoiceRecord {
            invoice_number: meta.invoice_number.trim().to_string(),
            invoice_date: meta.invoice_date,
            due_date: meta.due_date,
            customer: meta.customer,
            state_of_supply: meta.state_of_supply,
            items: self.items.clone(),
            pricing: self.pricing.clone(),
            totals: self.totals.clone(),
            gst,
            payment_method: meta.payment_method,
            cancelled: meta.cancelled,
            notes: meta.notes,
        })
    }

    fn apply<F>(&mut self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<LineItem>, &mut PricingConfig) -> Result<()>,
    {
        let mut items = self.items.clone();
        let mut pricing = self.pricing.clone();

        edit(&mut items, &mut pricing)?;
        validate_pricing(&pricing)?;

        let totals = compute_totals(&items, &pricing)?;
        pricing.amount_paid = totals.amount_paid;

        debug!(
            items = items.len(),
            total_amount = %totals.total_amount,
            status = %totals.payment_status,
            "Invoice draft recomputed"
        );

        self.items = items;
        self.pricing = pricing;
        self.totals = totals;
        Ok(())
    }
}

fn item_at(items: &mut [LineItem], index: usize) -> Result<&mut LineItem> {
    items
        .get_mut(index)
        .ok_or_else(|| AppError::validation(format!("No line item at position {}", index + 1)))
}
