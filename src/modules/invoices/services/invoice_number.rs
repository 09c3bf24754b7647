use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Highest serial that fits the 4-digit slot
pub const MAX_SERIAL: u16 = 9999;

/// `{prefix}-{YY}{MM}-{serial}`, e.g. `INV-2610-0042`
pub fn format_invoice_number(prefix: &str, date: NaiveDate, serial: u16) -> String {
    format!(
        "{}-{:02}{:02}-{:04}",
        prefix,
        date.year().rem_euclid(100),
        date.month(),
        serial.min(MAX_SERIAL)
    )
}

/// Suggest an invoice number with a random serial.
///
/// Not guaranteed unique; the persistence layer rejects duplicates.
pub fn generate_invoice_number(prefix: &str, date: NaiveDate) -> String {
    let serial = rand::thread_rng().gen_range(0..=MAX_SERIAL);
    format_invoice_number(prefix, date, serial)
}
