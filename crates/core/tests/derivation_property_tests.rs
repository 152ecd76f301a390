//! Property-based tests for cross-rate derivation.

use proptest::prelude::*;
use xrates_core::rates::{derive, Presentation, QuoteSet, RateCell};
use xrates_core::Symbol;

// =============================================================================
// Generators
// =============================================================================

fn arb_anchor() -> impl Strategy<Value = Symbol> {
    proptest::sample::select(Symbol::ALL.to_vec())
}

fn arb_presentation() -> impl Strategy<Value = Presentation> {
    prop_oneof![
        Just(Presentation::FiatAsBase),
        Just(Presentation::CryptoAsBase)
    ]
}

/// A valid quote set with strictly positive rates spanning typical magnitudes.
fn arb_quote_set() -> impl Strategy<Value = QuoteSet> {
    (arb_anchor(), proptest::array::uniform6(1e-6f64..1e6)).prop_map(|(anchor, mut rates)| {
        rates[anchor.index()] = 1.0;
        QuoteSet::new(anchor, Symbol::ALL.iter().copied().zip(rates)).unwrap()
    })
}

/// Like `arb_quote_set` but any non-anchor rate may be zero.
fn arb_quote_set_with_zeros() -> impl Strategy<Value = QuoteSet> {
    (
        arb_anchor(),
        proptest::array::uniform6(prop_oneof![Just(0.0f64), 1e-6f64..1e6]),
    )
        .prop_map(|(anchor, mut rates)| {
            rates[anchor.index()] = 1.0;
            QuoteSet::new(anchor, Symbol::ALL.iter().copied().zip(rates)).unwrap()
        })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn fiat_and_crypto_presentations_are_reciprocal(q in arb_quote_set()) {
        let fiat = derive(&q, Presentation::FiatAsBase);
        let crypto = derive(&q, Presentation::CryptoAsBase);

        for row in Symbol::FIAT {
            for col in Symbol::CRYPTO {
                let a = fiat.cell(row, col).and_then(|c| c.value()).unwrap();
                let b = crypto.cell(col, row).and_then(|c| c.value()).unwrap();
                prop_assert!(close(a, 1.0 / b), "{}/{}: {} vs 1/{}", col, row, a, b);
            }
        }
    }

    #[test]
    fn derivation_is_idempotent(q in arb_quote_set_with_zeros(), p in arb_presentation()) {
        let first = derive(&q, p);
        let second = derive(&q, p);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn matrix_does_not_depend_on_anchor(q in arb_quote_set(), target in arb_anchor(), p in arb_presentation()) {
        let rebased = q.rebase(target).unwrap();
        let a = derive(&q, p);
        let b = derive(&rebased, p);
        for ((_, ra), (_, rb)) in a.rows().zip(b.rows()) {
            for (ca, cb) in ra.iter().zip(rb.iter()) {
                prop_assert!(close(ca.value().unwrap(), cb.value().unwrap()));
            }
        }
    }

    #[test]
    fn rendered_cells_are_never_non_numeric(q in arb_quote_set_with_zeros(), p in arb_presentation()) {
        let matrix = derive(&q, p);
        for (row, cells) in matrix.rows() {
            for cell in cells {
                match cell {
                    RateCell::Rate(v) => prop_assert!(v.is_finite()),
                    RateCell::Degenerate => prop_assert_eq!(q.rate(row), 0.0),
                }
            }
        }
        let json = serde_json::to_string(&matrix).unwrap();
        prop_assert!(!json.contains("inf") && !json.contains("NaN"));
    }
}

// =============================================================================
// Scenarios
// =============================================================================

fn all_ones() -> QuoteSet {
    QuoteSet::new(Symbol::Usd, Symbol::ALL.iter().map(|s| (*s, 1.0))).unwrap()
}

#[test]
fn all_ones_fiat_as_base_is_all_ones() {
    let json = serde_json::to_value(derive(&all_ones(), Presentation::FiatAsBase)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "USD": {"BTC": "1.000000", "DOGE": "1.000000", "ETH": "1.000000"},
            "SGD": {"BTC": "1.000000", "DOGE": "1.000000", "ETH": "1.000000"},
            "EUR": {"BTC": "1.000000", "DOGE": "1.000000", "ETH": "1.000000"},
        })
    );
}

#[test]
fn all_ones_crypto_as_base_is_all_ones() {
    let json = serde_json::to_value(derive(&all_ones(), Presentation::CryptoAsBase)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "BTC": {"USD": "1.000000", "SGD": "1.000000", "EUR": "1.000000"},
            "DOGE": {"USD": "1.000000", "SGD": "1.000000", "EUR": "1.000000"},
            "ETH": {"USD": "1.000000", "SGD": "1.000000", "EUR": "1.000000"},
        })
    );
}
