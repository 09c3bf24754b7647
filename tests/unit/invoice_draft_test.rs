// Tests for the invoice draft: every edit leaves the totals consistent with
// the current items and pricing, and the Cash/Credit switch behaves the way
// the counter staff expect.

use jewelbill::config::{BusinessProfile, InvoiceDefaults};
use jewelbill::invoices::models::{
    CatalogProduct, DiscountType, InvoiceMeta, PaymentMode, PaymentStatus,
};
use jewelbill::invoices::{compute_totals, InvoiceDraft};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn product(id: i64, price: Decimal) -> CatalogProduct {
    CatalogProduct {
        id,
        name: format!("Design {}", id),
        sku: Some(format!("SKU-{}", id)),
        category: Some("Rings".to_string()),
        metal_type: Some("gold".to_string()),
        purity: Some("22K".to_string()),
        weight_grams: dec!(6.25),
        selling_price: price,
        making_charges: dec!(1200),
        hsn_code: Some("7113".to_string()),
    }
}

#[derive(Debug, Clone)]
enum Edit {
    AddProduct(i64),
    AddBlank,
    Quantity(usize, i32),
    Price(usize, i64),
    Remove(usize),
    Discount(bool, i64),
    Tax(i64),
    RoundOff(bool),
    Mode(bool),
    Paid(i64),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (1i64..10_000_000).prop_map(Edit::AddProduct),
        Just(Edit::AddBlank),
        (0usize..6, -2i32..10).prop_map(|(i, q)| Edit::Quantity(i, q)),
        (0usize..6, -100i64..10_000_000).prop_map(|(i, p)| Edit::Price(i, p)),
        (0usize..6).prop_map(Edit::Remove),
        (prop::bool::ANY, 0i64..15_000).prop_map(|(p, v)| Edit::Discount(p, v)),
        (0i64..3_000).prop_map(Edit::Tax),
        prop::bool::ANY.prop_map(Edit::RoundOff),
        prop::bool::ANY.prop_map(Edit::Mode),
        (0i64..10_000_000).prop_map(Edit::Paid),
    ]
}

fn apply(draft: &mut InvoiceDraft, edit: &Edit) {
    // Rejected edits are part of the sequence; the draft must survive them
    let _ = match edit {
        Edit::AddProduct(paise) => draft
            .add_product(&product(1, Decimal::new(*paise, 2)))
            .map(|_| ()),
        Edit::AddBlank => draft.add_blank_row().map(|_| ()),
        Edit::Quantity(i, q) => draft.update_quantity(*i, *q),
        Edit::Price(i, p) => draft.update_unit_price(*i, Decimal::new(*p, 2)),
        Edit::Remove(i) => draft.remove_item(*i).map(|_| ()),
        Edit::Discount(percent, v) => {
            let kind = if *percent { DiscountType::Percent } else { DiscountType::Amount };
            draft.set_discount(kind, Decimal::new(*v, 2))
        }
        Edit::Tax(v) => draft.set_tax_rate(Decimal::new(*v, 2)),
        Edit::RoundOff(on) => draft.set_round_off(*on),
        Edit::Mode(credit) => {
            draft.set_payment_mode(if *credit { PaymentMode::Credit } else { PaymentMode::Cash })
        }
        Edit::Paid(v) => draft.set_amount_paid(Decimal::new(*v, 2)),
    };
}

proptest! {
    #[test]
    fn test_totals_never_stale(edits in prop::collection::vec(edit_strategy(), 0..30)) {
        let mut draft = InvoiceDraft::new(&InvoiceDefaults::default());

        for edit in &edits {
            apply(&mut draft, edit);

            let fresh = compute_totals(draft.items(), draft.pricing()).unwrap();
            prop_assert_eq!(draft.totals(), &fresh);
            prop_assert_eq!(draft.pricing().amount_paid, fresh.amount_paid);
            for item in draft.items() {
                let expected = Decimal::from(item.quantity()) * item.unit_price();
                prop_assert_eq!(item.line_total(), expected);
            }
        }
    }

    #[test]
    fn test_cash_is_always_settled(edits in prop::collection::vec(edit_strategy(), 0..30)) {
        let mut draft = InvoiceDraft::new(&InvoiceDefaults::default());
        for edit in &edits {
            apply(&mut draft, edit);
        }

        draft.set_payment_mode(PaymentMode::Cash).unwrap();
        prop_assert_eq!(draft.totals().balance_due, Decimal::ZERO);
        prop_assert_eq!(draft.totals().payment_status, PaymentStatus::Paid);
    }
}

#[test]
fn test_counter_flow() {
    let mut draft = InvoiceDraft::new(&InvoiceDefaults::default());
    draft.add_product(&product(1, dec!(30000))).unwrap();
    draft.add_product(&product(2, dec!(25000))).unwrap();
    draft.set_discount(DiscountType::Percent, dec!(5)).unwrap();
    draft.set_round_off(false).unwrap();

    draft.set_payment_mode(PaymentMode::Credit).unwrap();
    assert_eq!(draft.totals().payment_status, PaymentStatus::Paid);

    draft.set_amount_paid(dec!(20000)).unwrap();
    assert_eq!(draft.totals().total_amount, dec!(53817.50));
    assert_eq!(draft.totals().balance_due, dec!(33817.50));
    assert_eq!(draft.totals().payment_status, PaymentStatus::Partial);

    let date = chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let meta = InvoiceMeta::new("INV-2610-0001", date);
    let record = draft.to_record(meta, &BusinessProfile::default()).unwrap();
    assert_eq!(record.totals, *draft.totals());
    assert_eq!(record.gst.total(), record.totals.tax_amount);
    assert_eq!(record.items.len(), 2);
}

#[test]
fn test_removing_last_item_resets_totals() {
    let mut draft = InvoiceDraft::new(&InvoiceDefaults::default());
    draft.add_product(&product(1, dec!(1000))).unwrap();
    draft.remove_item(0).unwrap();

    assert!(draft.items().is_empty());
    assert_eq!(draft.totals().total_amount, Decimal::ZERO);
    assert_eq!(draft.totals().payment_status, PaymentStatus::Paid);
    assert!(draft.remove_item(0).is_err());
}
