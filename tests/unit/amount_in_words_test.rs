// Tests for the printed amount in words and the rupee formatting helpers

use jewelbill::core::Inr;
use jewelbill::printing::services::number_to_words;
use jewelbill::printing::{amount_in_words, format_weight};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

proptest! {
    #[test]
    fn test_words_always_end_with_only(paise in 0i64..100_000_000_000) {
        let words = amount_in_words(Decimal::new(paise, 2));
        prop_assert!(words.ends_with(" only"));
        prop_assert!(words.contains("Rupees"));
        prop_assert!(!words.contains("  "), "double space in {:?}", words);
    }

    #[test]
    fn test_paisa_shown_only_when_present(rupees in 0i64..10_000_000, paise in 0i64..100) {
        let words = amount_in_words(Decimal::new(rupees * 100 + paise, 2));
        prop_assert_eq!(words.contains("Paisa"), paise > 0);
    }

    #[test]
    fn test_grouping_keeps_digits(paise in 0i64..100_000_000_000) {
        let amount = Decimal::new(paise, 2);
        let formatted = Inr::format_amount(amount);
        let digits: String = formatted
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        prop_assert_eq!(digits, Inr::round(amount).to_string());
    }
}

#[test]
fn test_invoice_totals_in_words() {
    assert_eq!(
        amount_in_words(dec!(56650)),
        "Fifty Six Thousand Six Hundred Fifty Rupees only"
    );
    assert_eq!(
        amount_in_words(dec!(566500)),
        "Five Lakh Sixty Six Thousand Five Hundred Rupees only"
    );
    assert_eq!(
        amount_in_words(dec!(12345678.90)),
        "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight Rupees and Ninety Paisa only"
    );
    assert_eq!(amount_in_words(dec!(0)), "Zero Rupees only");
    assert_eq!(amount_in_words(dec!(-12.50)), "Minus Twelve Rupees and Fifty Paisa only");
}

#[test]
fn test_number_to_words_edges() {
    assert_eq!(number_to_words(0), "Zero");
    assert_eq!(number_to_words(100), "One Hundred");
    assert_eq!(number_to_words(1_000), "One Thousand");
    assert_eq!(number_to_words(1_00_000), "One Lakh");
    assert_eq!(
        number_to_words(99_99_999),
        "Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine"
    );
}

#[test]
fn test_indian_currency_format() {
    assert_eq!(Inr::format_amount(dec!(566500)), "₹5,66,500.00");
    assert_eq!(Inr::format_amount(dec!(999.5)), "₹999.50");
    assert_eq!(Inr::format_amount(dec!(12345678.9)), "₹1,23,45,678.90");
    assert_eq!(Inr::format_signed(dec!(-0.4)), "-0.40");
    assert_eq!(Inr::format_signed(dec!(0.5)), "+0.50");
}

#[test]
fn test_weight_format() {
    assert_eq!(format_weight(dec!(8.5)), "8.50g");
    assert_eq!(format_weight(dec!(1500)), "1.50kg");
}
