use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const HUNDRED: u128 = 100;
const THOUSAND: u128 = 1_000;
const LAKH: u128 = 1_00_000;
const CRORE: u128 = 1_00_00_000;

/// Spell out a rupee amount for the printed invoice.
///
/// `56650` → `"Fifty Six Thousand Six Hundred Fifty Rupees only"`,
/// `12.50` → `"Twelve Rupees and Fifty Paisa only"`. Uses the Indian scale
/// (Thousand, Lakh, Crore); negative amounts are prefixed with `"Minus "`.
pub fn amount_in_words(amount: Decimal) -> String {
    let magnitude = amount.abs();
    let rupees = magnitude.trunc();
    let paise = ((magnitude - rupees) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    // 0.995 rounds up to a full rupee
    let (rupees, paise) = match (rupees.to_u128(), paise.to_u128()) {
        (Some(r), Some(100)) => (r + 1, 0),
        (Some(r), Some(p)) => (r, p),
        _ => (0, 0),
    };

    let mut words = String::new();
    if amount.is_sign_negative() && (rupees > 0 || paise > 0) {
        words.push_str("Minus ");
    }
    words.push_str(&number_to_words(rupees));
    words.push_str(" Rupees");
    if paise > 0 {
        words.push_str(" and ");
        words.push_str(&number_to_words(paise));
        words.push_str(" Paisa");
    }
    words.push_str(" only");
    words
}

/// Whole number in words, Indian scale
pub fn number_to_words(n: u128) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    match n {
        1..=19 => ONES[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                unit => format!("{} {}", tens, ONES[unit as usize]),
            }
        }
        _ if n < THOUSAND => scaled(n, HUNDRED, "Hundred"),
        _ if n < LAKH => scaled(n, THOUSAND, "Thousand"),
        _ if n < CRORE => scaled(n, LAKH, "Lakh"),
        _ => scaled(n, CRORE, "Crore"),
    }
}

fn scaled(n: u128, unit: u128, name: &str) -> String {
    let head = format!("{} {}", number_to_words(n / unit), name);
    match n % unit {
        0 => head,
        rest => format!("{} {}", head, number_to_words(rest)),
    }
}
