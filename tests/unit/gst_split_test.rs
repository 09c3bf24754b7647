// Property-based tests for GST: the tax amount and its CGST/SGST/IGST split
//
// - CGST + SGST + IGST always equals the tax amount, to the paisa
// - intra-state halves differ by at most one paisa
// - inter-state sales carry everything as IGST

use jewelbill::taxes::{SupplyType, TaxCalculator};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

proptest! {
    #[test]
    fn test_split_adds_back_up(tax_paise in 0i64..10_000_000_000, inter in prop::bool::ANY) {
        let calc = TaxCalculator::new();
        let tax = Decimal::new(tax_paise, 2);
        let supply = if inter { SupplyType::InterState } else { SupplyType::IntraState };

        let gst = calc.split(tax, supply);
        prop_assert_eq!(gst.total(), tax);
        prop_assert!(gst.cgst >= Decimal::ZERO);
        prop_assert!(gst.sgst >= Decimal::ZERO);
        prop_assert!(gst.igst >= Decimal::ZERO);
    }

    #[test]
    fn test_intra_state_halves_are_even(tax_paise in 0i64..10_000_000_000) {
        let gst = TaxCalculator::new().split(Decimal::new(tax_paise, 2), SupplyType::IntraState);

        prop_assert_eq!(gst.igst, Decimal::ZERO);
        let gap = gst.sgst - gst.cgst;
        prop_assert!(gap == Decimal::ZERO || gap == dec!(0.01), "gap was {}", gap);
    }

    #[test]
    fn test_tax_is_bounded_by_rate(base_paise in 0i64..10_000_000_000, rate in 0i64..=10_000) {
        let calc = TaxCalculator::new();
        let base = Decimal::new(base_paise, 2);
        let rate = Decimal::new(rate, 2);

        let tax = calc.calculate_tax(base, rate).unwrap();
        prop_assert!(tax >= Decimal::ZERO);
        prop_assert!(tax <= base);
        prop_assert_eq!(tax.scale(), 2);
    }

    #[test]
    fn test_rates_with_two_decimals_are_accepted(rate in 0i64..=10_000) {
        prop_assert!(TaxCalculator::new().validate_tax_rate(Decimal::new(rate, 2)).is_ok());
    }
}

#[test]
fn test_jewellery_rate_split() {
    let calc = TaxCalculator::new();
    let tax = calc.calculate_tax(dec!(52250), dec!(3)).unwrap();
    assert_eq!(tax, dec!(1567.50));

    let local = calc.split(tax, SupplyType::IntraState);
    assert_eq!(local.cgst, dec!(783.75));
    assert_eq!(local.sgst, dec!(783.75));

    let interstate = calc.split(tax, SupplyType::InterState);
    assert_eq!(interstate.igst, dec!(1567.50));
}

#[test]
fn test_out_of_range_rates_rejected() {
    let calc = TaxCalculator::new();
    assert!(calc.validate_tax_rate(dec!(-0.01)).is_err());
    assert!(calc.validate_tax_rate(dec!(100.01)).is_err());
    assert!(calc.validate_tax_rate(dec!(3.125)).is_err());
}
