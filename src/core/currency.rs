use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::error::TotalsError;

/// Indian Rupee money rules: two fraction digits (paise), half-away-from-zero
/// rounding, Indian digit grouping for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inr;

impl Inr {
    /// Paise precision
    pub const SCALE: u32 = 2;

    /// Round to paise and pin the scale to 2 so values serialize as `123.40`.
    pub fn round(amount: Decimal) -> Decimal {
        let mut rounded =
            amount.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::SCALE);
        rounded
    }

    /// Round to the nearest whole rupee (half away from zero), keeping scale 2.
    pub fn round_to_rupee(amount: Decimal) -> Decimal {
        let mut rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::SCALE);
        rounded
    }

    /// Zero with the money scale applied
    pub fn zero() -> Decimal {
        Self::round(Decimal::ZERO)
    }

    /// Validates that a caller-supplied amount is not negative
    pub fn validate_amount(amount: Decimal, field: &str) -> Result<(), String> {
        if amount < Decimal::ZERO {
            return Err(format!("{} cannot be negative, got: {}", field, amount));
        }

        Ok(())
    }

    /// Converts a floating point form value into a decimal.
    ///
    /// NaN and infinities are rejected, as are finite values outside the
    /// decimal range.
    pub fn from_f64(value: f64, field: &str) -> Result<Decimal, TotalsError> {
        if !value.is_finite() {
            return Err(TotalsError::invalid_input(field, "not a finite number"));
        }

        Decimal::from_f64(value).ok_or_else(|| TotalsError::out_of_range(field))
    }

    /// Parses a numeric string from a form field. Blank input is treated as 0.
    pub fn parse(text: &str, field: &str) -> Result<Decimal, TotalsError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Decimal::ZERO);
        }

        let lowered = trimmed.to_ascii_lowercase();
        if lowered.contains("nan") || lowered.contains("inf") {
            return Err(TotalsError::invalid_input(field, "not a finite number"));
        }

        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| {
                TotalsError::invalid_input(field, format!("'{}' is not a number", trimmed))
            })
    }

    /// Formats an amount as `₹5,66,500.00`
    pub fn format_amount(amount: Decimal) -> String {
        let rounded = Self::round(amount);
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        format!("{}₹{}", sign, Self::group_digits(rounded.abs()))
    }

    /// Formats a signed adjustment such as a round-off: `+0.40`, `-0.40`
    pub fn format_signed(amount: Decimal) -> String {
        let rounded = Self::round(amount);
        if rounded < Decimal::ZERO {
            format!("-{}", rounded.abs())
        } else {
            format!("+{}", rounded.abs())
        }
    }

    /// Indian grouping: last three integer digits, then pairs (12,34,56,789.00)
    fn group_digits(amount: Decimal) -> String {
        let text = amount.to_string();
        let (integer, fraction) = match text.split_once('.') {
            Some((i, f)) => (i, f),
            None => (text.as_str(), "00"),
        };

        if integer.len() <= 3 {
            return format!("{}.{}", integer, fraction);
        }

        let (head, tail) = integer.split_at(integer.len() - 3);
        let mut groups = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (left, pair) = rest.split_at(rest.len() - 2);
            groups.push(pair);
            rest = left;
        }
        if !rest.is_empty() {
            groups.push(rest);
        }
        groups.reverse();

        format!("{},{}.{}", groups.join(","), tail, fraction)
    }
}
