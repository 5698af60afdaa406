//! Property-based tests for the ST engine.
//!
//! Run with: `cargo test --test proptest_tests`

use icms_st::core::*;
use icms_st::mva::{is_special_ncm, resolve, resolve_mva};
use icms_st::segment::{FALLBACK_SEGMENT, segment_for};
use icms_st::st::{aggregate, calculate, calculate_all};
use proptest::prelude::*;
use rust_decimal::Decimal;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Amount in centavos, 0.00 to 99999.99.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Declared rate with two decimals, 0.00 to 25.00.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (0i64..=2500i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// NCMs that exercise every rule, plus random codes.
fn arb_ncm() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("45049000".to_string()),
        Just("84133010".to_string()),
        Just("19021100".to_string()),
        Just("19052010".to_string()),
        Just("12074090".to_string()),
        Just("22011000".to_string()),
        "[0-9]{8}",
    ]
}

fn arb_cest() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("0100100".to_string()),
        Just("1000100".to_string()),
        Just("1705200".to_string()),
        "[0-9]{7}",
    ]
}

fn arb_origin() -> impl Strategy<Value = Option<ProductOrigin>> {
    prop_oneof![
        Just(None),
        Just(Some(ProductOrigin::Signataria)),
        Just(Some(ProductOrigin::NaoSignatariaSulSudeste)),
        Just(Some(ProductOrigin::NaoSignatariaOutros)),
        Just(Some(ProductOrigin::Exterior)),
    ]
}

prop_compose! {
    fn arb_product()(
        ncm in arb_ncm(),
        cest in arb_cest(),
        cfop in prop_oneof![Just("5102"), Just("6102"), Just("6403")],
        amounts in prop::array::uniform5(arb_amount()),
        rate in arb_rate(),
        declared in arb_amount(),
        origin in arb_origin(),
        normal in any::<bool>(),
        panettone in any::<bool>(),
    ) -> Product {
        let name = if panettone { "Panettone" } else { "Produto" };
        let [gross, ipi, freight, other, discount] = amounts;
        let mut builder = ProductBuilder::new(name, ncm)
            .cest(cest)
            .cfop(cfop)
            .gross_value(gross)
            .ipi(ipi)
            .freight(freight)
            .other_expenses(other)
            .discount(discount)
            .declared_icms(rate, declared)
            .tax_regime(if normal { "normal" } else { "outro" });
        if let Some(origin) = origin {
            builder = builder.origin(origin);
        }
        builder.build()
    }
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn base_and_tax_never_negative(p in arb_product()) {
        let r = calculate(&p);
        prop_assert!(r.base >= Decimal::ZERO);
        prop_assert!(r.tax >= Decimal::ZERO);
    }

    #[test]
    fn resolve_is_idempotent(p in arb_product()) {
        prop_assert_eq!(resolve(&p), resolve(&p));
        prop_assert_eq!(calculate(&p), calculate(&p));
    }

    #[test]
    fn mva_is_never_negative(p in arb_product()) {
        prop_assert!(resolve_mva(&p) >= Decimal::ZERO);
    }

    #[test]
    fn group_sums_match_total(products in prop::collection::vec(arb_product(), 0..40)) {
        let mut products: Vec<Product> = products
            .into_iter()
            .filter(|p| !(is_special_ncm(&p.ncm) && p.origin.is_none()))
            .collect();
        calculate_all(&mut products).unwrap();
        let totals = aggregate(&products);
        let by_mva: Decimal = totals.tax_by_mva.values().copied().sum();
        let by_cfop: Decimal = totals.gross_by_cfop.values().copied().sum();
        // Gross-up taxes carry full Decimal precision; summation order may
        // round the last digits differently.
        prop_assert!((by_mva - totals.st_tax).abs() < Decimal::new(1, 10));
        prop_assert_eq!(by_cfop, totals.gross_value);
        prop_assert_eq!(totals.calculated, products.len());
    }

    #[test]
    fn gross_up_only_for_zero_mva(p in arb_product()) {
        let r = calculate(&p);
        if r.gross_up {
            prop_assert!(r.mva_applied.is_zero());
            prop_assert_eq!(p.tax_regime.as_str(), "normal");
        }
    }

    #[test]
    fn short_codes_fall_back(code in "\\PC{0,1}") {
        prop_assert_eq!(segment_for(&code), FALLBACK_SEGMENT);
    }

    #[test]
    fn segment_lookup_never_panics(code in "\\PC{0,12}") {
        let _ = segment_for(&code);
    }

    #[test]
    fn unmapped_prefixes_fall_back(
        prefix in prop_oneof![Just("00"), Just("15"), Just("18"), Just("27"), Just("29"), Just("99")],
        rest in "[0-9]{5}",
    ) {
        prop_assert_eq!(segment_for(&format!("{prefix}{rest}")), FALLBACK_SEGMENT);
    }
}
