use chrono::{Local, NaiveDate};
use tracing::info;

use super::invoice_draft::InvoiceDraft;
use super::invoice_number::generate_invoice_number;
use crate::config::{BusinessProfile, InvoiceDefaults};
use crate::core::Result;
use crate::modules::invoices::models::{
    build_line_items, DefaultsResponse, InvoiceInput, InvoiceRecord, PricingConfig,
    TotalsRequest, TotalsResponse,
};
use crate::modules::printing::InvoiceDocument;
use crate::modules::taxes::{gst_rate_options, TaxCalculator};

/// Service for invoice business logic.
///
/// Stateless apart from the configured defaults and shop profile; every call
/// builds its own draft, so one instance is shared across workers.
pub struct InvoiceService {
    defaults: InvoiceDefaults,
    business: BusinessProfile,
}

impl InvoiceService {
    pub fn new(defaults: InvoiceDefaults, business: BusinessProfile) -> Self {
        Self { defaults, business }
    }

    pub fn defaults(&self) -> &InvoiceDefaults {
        &self.defaults
    }

    pub fn business(&self) -> &BusinessProfile {
        &self.business
    }

    /// Starting point for a new invoice form
    pub fn defaults_view(&self, today: NaiveDate) -> DefaultsResponse {
        DefaultsResponse {
            defaults: self.defaults.clone(),
            pricing: PricingConfig::from_defaults(&self.defaults),
            gst_rates: gst_rate_options(),
            suggested_invoice_number: generate_invoice_number(&self.defaults.invoice_prefix, today),
            business: self.business.clone(),
        }
    }

    /// Live totals for the invoice editor
    pub fn calculate(&self, request: TotalsRequest) -> Result<TotalsResponse> {
        let items = build_line_items(request.items, &self.defaults)?;
        let pricing = request.pricing.into_pricing(&self.defaults)?;
        let draft = InvoiceDraft::with_parts(&self.defaults, items, pricing)?;

        let calculator = TaxCalculator::new();
        let supply_type = calculator.supply_type(
            self.business.state.as_deref(),
            request.state_of_supply.as_deref(),
        );
        let gst = calculator.split(draft.totals().tax_amount, supply_type);

        Ok(TotalsResponse {
            items: draft.items().to_vec(),
            totals: draft.totals().clone(),
            gst,
        })
    }

    /// Print view of an invoice that has not been saved yet
    pub fn preview(&self, input: InvoiceInput, today: NaiveDate) -> Result<InvoiceDocument> {
        let record = self.build_record(input, today)?;
        Ok(InvoiceDocument::build(&record, &self.business))
    }

    /// Validate an invoice and produce the record to persist
    pub fn finalize(&self, input: InvoiceInput, today: NaiveDate) -> Result<InvoiceRecord> {
        let record = self.build_record(input, today)?;

        info!(
            invoice_number = %record.invoice_number,
            total_amount = %record.totals.total_amount,
            status = %record.totals.payment_status,
            "Invoice finalized"
        );

        Ok(record)
    }

    /// Re-derive a stored record from its items and pricing
    pub fn recalculate(&self, record: InvoiceRecord) -> Result<InvoiceRecord> {
        let draft = InvoiceDraft::from_record(&record, &self.defaults)?;
        draft.to_record(record.meta(), &self.business)
    }

    fn build_record(&self, input: InvoiceInput, today: NaiveDate) -> Result<InvoiceRecord> {
        let prefix = self.defaults.invoice_prefix.clone();
        let meta = input.meta(|| generate_invoice_number(&prefix, today), today);

        let items = build_line_items(input.items, &self.defaults)?;
        let pricing = input.pricing.into_pricing(&self.defaults)?;
        let draft = InvoiceDraft::with_parts(&self.defaults, items, pricing)?;

        draft.to_record(meta, &self.business)
    }
}

/// Today's date in the shop's local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
