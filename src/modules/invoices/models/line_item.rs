// A line item is one piece of jewellery (or a service such as repair) on an
// invoice. Its total is always quantity × unit_price, rounded to paise, and is
// recomputed by every setter; there is no way to set it directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::InvoiceDefaults;
use crate::core::{AppError, Inr, Result, TotalsError};

/// HSN 7113: articles of jewellery and parts thereof
pub const DEFAULT_HSN_CODE: &str = "7113";

/// A product as supplied by the item store when it is added to an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub metal_type: Option<String>,
    #[serde(default)]
    pub purity: Option<String>,
    #[serde(default)]
    pub weight_grams: Decimal,
    pub selling_price: Decimal,
    #[serde(default)]
    pub making_charges: Decimal,
    #[serde(default)]
    pub hsn_code: Option<String>,
}

/// Represents a single line item in an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredLineItem")]
pub struct LineItem {
    /// Catalog product this row was created from, if any
    pub product_id: Option<i64>,
    pub name: String,
    pub hsn_code: String,
    pub unit: String,
    pub category: Option<String>,
    pub metal_type: Option<String>,
    pub purity: Option<String>,
    pub weight_grams: Decimal,
    /// Carried for the printout; already part of the unit price
    pub making_charges: Decimal,

    quantity: i32,
    unit_price: Decimal,
    line_total: Decimal,
}

impl LineItem {
    /// Create a line item and compute its total.
    ///
    /// No business validation happens here; see [`LineItem::validate`].
    pub fn new(
        name: impl Into<String>,
        quantity: i32,
        unit_price: Decimal,
    ) -> std::result::Result<Self, TotalsError> {
        let line_total = compute_line_total(quantity, unit_price)?;

        Ok(Self {
            product_id: None,
            name: name.into(),
            hsn_code: DEFAULT_HSN_CODE.to_string(),
            unit: "pcs".to_string(),
            category: None,
            metal_type: None,
            purity: None,
            weight_grams: Decimal::ZERO,
            making_charges: Decimal::ZERO,
            quantity,
            unit_price,
            line_total,
        })
    }

    /// An empty row the user fills in by hand: quantity 1, price 0
    pub fn blank(defaults: &InvoiceDefaults) -> Self {
        Self {
            product_id: None,
            name: String::new(),
            hsn_code: defaults.default_hsn_code.clone(),
            unit: defaults.default_unit.clone(),
            category: None,
            metal_type: None,
            purity: None,
            weight_grams: Decimal::ZERO,
            making_charges: Decimal::ZERO,
            quantity: 1,
            unit_price: Decimal::ZERO,
            line_total: Inr::zero(),
        }
    }

    /// A row seeded from a catalog product: quantity 1 at the selling price
    pub fn from_product(
        product: &CatalogProduct,
        defaults: &InvoiceDefaults,
    ) -> std::result::Result<Self, TotalsError> {
        let mut item = Self::new(product.name.clone(), 1, product.selling_price)?;
        item.product_id = Some(product.id);
        item.hsn_code = product
            .hsn_code
            .clone()
            .filter(|code| !code.trim().is_empty())
            .unwrap_or_else(|| defaults.default_hsn_code.clone());
        item.unit = defaults.default_unit.clone();
        item.category = product.category.clone();
        item.metal_type = product.metal_type.clone();
        item.purity = product.purity.clone();
        item.weight_grams = product.weight_grams;
        item.making_charges = product.making_charges;
        Ok(item)
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn line_total(&self) -> Decimal {
        self.line_total
    }

    /// Change the quantity; the line total follows. Unchanged on error.
    pub fn set_quantity(&mut self, quantity: i32) -> std::result::Result<(), TotalsError> {
        self.line_total = compute_line_total(quantity, self.unit_price)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Change the unit price; the line total follows. Unchanged on error.
    pub fn set_unit_price(&mut self, unit_price: Decimal) -> std::result::Result<(), TotalsError> {
        self.line_total = compute_line_total(self.quantity, unit_price)?;
        self.unit_price = unit_price;
        Ok(())
    }

    /// Business rules a row must satisfy before an invoice is saved
    pub fn validate(&self) -> Result<()> {
        Self::validate_quantity(self.quantity)?;
        Self::validate_unit_price(self.unit_price)?;

        if self.name.trim().is_empty() {
            return Err(AppError::validation("Line item name cannot be empty"));
        }

        if self.name.len() > 255 {
            return Err(AppError::validation(
                "Line item name cannot exceed 255 characters",
            ));
        }

        if self.weight_grams < Decimal::ZERO {
            return Err(AppError::validation("Weight cannot be negative"));
        }

        Ok(())
    }

    /// Validate quantity (must be at least 1)
    pub fn validate_quantity(quantity: i32) -> Result<()> {
        if quantity < 1 {
            return Err(AppError::validation(format!(
                "Quantity must be at least 1, got: {}",
                quantity
            )));
        }

        Ok(())
    }

    /// Validate unit price (must be non-negative)
    pub fn validate_unit_price(unit_price: Decimal) -> Result<()> {
        Inr::validate_amount(unit_price, "Unit price").map_err(AppError::Validation)
    }
}

/// quantity × unit_price, rounded to paise
pub(crate) fn compute_line_total(
    quantity: i32,
    unit_price: Decimal,
) -> std::result::Result<Decimal, TotalsError> {
    Decimal::from(quantity)
        .checked_mul(unit_price)
        .map(Inr::round)
        .ok_or_else(|| TotalsError::out_of_range("line_total"))
}

/// Wire shape of a stored row. A stored `line_total` is read but never
/// trusted; the total is always recomputed from quantity and price.
#[derive(Deserialize)]
struct StoredLineItem {
    #[serde(default)]
    product_id: Option<i64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    hsn_code: Option<String>,
    #[serde(default)]
    unit: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    metal_type: Option<String>,
    #[serde(default)]
    purity: Option<String>,
    #[serde(default)]
    weight_grams: Decimal,
    #[serde(default)]
    making_charges: Decimal,
    quantity: i32,
    unit_price: Decimal,
    #[serde(default)]
    #[allow(dead_code)]
    line_total: Option<Decimal>,
}

impl TryFrom<StoredLineItem> for LineItem {
    type Error = TotalsError;

    fn try_from(stored: StoredLineItem) -> std::result::Result<Self, Self::Error> {
        let mut item = LineItem::new(stored.name, stored.quantity, stored.unit_price)?;
        item.product_id = stored.product_id;
        if let Some(code) = stored.hsn_code {
            item.hsn_code = code;
        }
        if let Some(unit) = stored.unit {
            item.unit = unit;
        }
        item.category = stored.category;
        item.metal_type = stored.metal_type;
        item.purity = stored.purity;
        item.weight_grams = stored.weight_grams;
        item.making_charges = stored.making_charges;
        Ok(item)
    }
}
