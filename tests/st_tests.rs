use icms_st::core::*;
use icms_st::st::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn line(name: &str, ncm: &str, gross: Decimal, rate: Decimal, declared: Decimal) -> ProductBuilder {
    ProductBuilder::new(name, ncm)
        .cfop("6102")
        .gross_value(gross)
        .declared_icms(rate, declared)
}

// ---------------------------------------------------------------------------
// Single product
// ---------------------------------------------------------------------------

#[test]
fn gross_up_scenario() {
    let p = line("Item sem MVA", "99999999", dec!(100), dec!(18), dec!(18)).build();
    let r = calculate(&p);
    assert_eq!(r.mva_applied, Decimal::ZERO);
    assert_eq!(r.internal_rate_applied, dec!(20.50));
    assert_eq!(r.base.round_dp(2), dec!(103.14));
    assert_eq!(r.tax.round_dp(2), dec!(3.14));
}

#[test]
fn panettone_scenario() {
    let p = line("Panettone Premium", "19052010", dec!(200), dec!(12), dec!(24))
        .cest("1705200")
        .origin(ProductOrigin::Signataria)
        .build();
    let r = calculate(&p);
    assert_eq!(r.mva_applied, dec!(35));
    assert_eq!(r.internal_rate_applied, dec!(12.00));
    assert_eq!(r.base, dec!(270));
    assert_eq!(r.tax, dec!(8.4));
}

#[test]
fn panettone_name_is_case_insensitive() {
    let p = line("MINI PANETTONE frutas", "19052010", dec!(10), dec!(12), dec!(1.2))
        .cest("1705200")
        .build();
    assert!(is_panettone_exception(&p));
}

#[test]
fn starting_value_includes_charges() {
    let p = line("Bomba", "84133010", dec!(1000), dec!(12), dec!(120))
        .ipi(dec!(50))
        .freight(dec!(30))
        .other_expenses(dec!(20))
        .discount(dec!(100))
        .build();
    assert_eq!(p.starting_value(), dec!(1000));
    let r = calculate(&p);
    assert_eq!(r.mva_applied, dec!(90.15));
    assert_eq!(r.base, dec!(1901.5));
    // 1901.5 * 0.205 - 120
    assert_eq!(r.tax, dec!(269.8075));
}

#[test]
fn gross_up_subtracts_declared_before_dividing() {
    let p = line("Sem MVA", "00000000", dec!(795), dec!(0), dec!(0)).build();
    let r = calculate(&p);
    assert!(r.gross_up);
    assert_eq!(r.base, dec!(1000));
    assert_eq!(r.tax, dec!(205));
}

#[test]
fn gross_up_negative_clamps() {
    let p = line("Sem MVA", "00000000", dec!(10), dec!(18), dec!(50)).build();
    let r = calculate(&p);
    assert_eq!(r.base, Decimal::ZERO);
    assert_eq!(r.tax, Decimal::ZERO);
}

#[test]
fn settings_from_json() {
    let settings: CalculationSettings =
        serde_json::from_str(r#"{ "default_internal_rate": "18" }"#).unwrap();
    assert_eq!(settings.default_internal_rate, dec!(18));
    assert_eq!(settings.gross_up_divisor, GROSS_UP_DIVISOR);
    assert_eq!(settings.normal_regime, REGIME_NORMAL);

    let p = line("Óleo", "12074090", dec!(100), dec!(12), dec!(12)).build();
    assert_eq!(calculate_with(&p, &settings).internal_rate_applied, dec!(18));
}

// ---------------------------------------------------------------------------
// Batch and totals
// ---------------------------------------------------------------------------

fn mixed_batch() -> Vec<Product> {
    vec![
        line("Óleo", "12074090", dec!(100), dec!(12), dec!(12)).build(),
        line("Macarrão", "19021100", dec!(50), dec!(12), dec!(6))
            .origin(ProductOrigin::Signataria)
            .build(),
        line("Torrada", "19059020", dec!(80), dec!(7), dec!(5.6))
            .cfop("6403")
            .origin(ProductOrigin::Exterior)
            .build(),
        line("Avulso", "99999999", dec!(100), dec!(18), dec!(18)).build(),
    ]
}

#[test]
fn batch_totals() {
    let mut products = mixed_batch();
    calculate_all(&mut products).unwrap();
    assert!(is_calculated(&products));

    let totals = aggregate(&products);
    assert_eq!(totals.calculated, 4);
    assert_eq!(totals.gross_value, dec!(330));
    assert_eq!(totals.tax_by_mva.len(), 3);
    assert_eq!(totals.tax_by_mva[&dec!(60.5)], dec!(20.9025));
    // 50*1.35*0.205-6 + 80*1.35*0.205-5.6
    assert_eq!(totals.tax_by_mva[&dec!(35)], dec!(7.8375) + dec!(16.54));
    assert_eq!(totals.gross_by_cfop["6102"], dec!(250));
    assert_eq!(totals.gross_by_cfop["6403"], dec!(80));

    let group_sum: Decimal = totals.tax_by_mva.values().copied().sum();
    assert_eq!(group_sum, totals.st_tax);
}

#[test]
fn batch_keeps_order() {
    let mut products = mixed_batch();
    calculate_all(&mut products).unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Óleo", "Macarrão", "Torrada", "Avulso"]);
}

#[test]
fn batch_rejected_before_any_calculation() {
    let mut products = mixed_batch();
    products[2].origin = None;
    let err = calculate_all(&mut products).unwrap_err();
    match err {
        IcmsStError::MissingOrigin { product, ncm } => {
            assert_eq!(product, "Torrada");
            assert_eq!(ncm, "19059020");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(products.iter().all(|p| p.st.is_none()));
    assert_eq!(aggregate(&products), Totals::default());
}

#[test]
fn cfop_totals_before_calculation() {
    let products = mixed_batch();
    let by_cfop = cfop_totals(&products);
    assert_eq!(by_cfop["6102"], dec!(250));
    assert_eq!(by_cfop["6403"], dec!(80));
    assert!(aggregate(&products).gross_by_cfop.is_empty());
}

#[test]
fn recalculation_replaces_results() {
    let mut products = mixed_batch();
    calculate_all(&mut products).unwrap();
    products[0].tax_regime = "SIMPLES".into();
    products[3].tax_regime = "SIMPLES".into();
    calculate_all(&mut products).unwrap();
    let r = products[3].st.as_ref().unwrap();
    assert!(!r.gross_up);
    assert_eq!(r.base, dec!(100));
}

#[test]
fn totals_serialize() {
    let mut products = mixed_batch();
    calculate_all(&mut products).unwrap();
    let json = serde_json::to_string(&aggregate(&products)).unwrap();
    assert!(json.contains("\"tax_by_mva\""));
    assert!(json.contains("\"6403\""));
}
