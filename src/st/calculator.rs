//! ICMS-ST base and tax for a single product, and batch calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::settings::CalculationSettings;
use crate::core::{CalculationResult, IcmsStError, Product, check_origins};
use crate::mva::resolve_mva;

/// NCM of the panettone exception.
pub const PANETTONE_NCM: &str = "19052010";
/// CEST of the panettone exception.
pub const PANETTONE_CEST: &str = "1705200";

const PANETTONE_DECLARED_RATE: Decimal = dec!(12);
const PANETTONE_MVA: Decimal = dec!(35);
const PANETTONE_INTERNAL_RATE: Decimal = dec!(12.00);

/// Calculate ICMS-ST for `product` with default settings.
///
/// ```
/// use icms_st::core::ProductBuilder;
/// use icms_st::st::calculate;
/// use rust_decimal_macros::dec;
///
/// let p = ProductBuilder::new("Óleo de girassol", "12074090")
///     .gross_value(dec!(100))
///     .declared_icms(dec!(12), dec!(12))
///     .build();
/// let r = calculate(&p);
/// assert_eq!(r.mva_applied, dec!(60.5));
/// assert_eq!(r.base, dec!(160.5));
/// assert_eq!(r.tax, dec!(20.9025));
/// ```
pub fn calculate(product: &Product) -> CalculationResult {
    calculate_with(product, &CalculationSettings::default())
}

/// Calculate ICMS-ST for `product`.
///
/// # Steps
///
/// 1. MVA and internal rate: the panettone exception forces MVA 35% and
///    internal rate 12%; otherwise the internal rate is the configured default
///    and the MVA comes from [`resolve_mva`].
/// 2. `start = gross + excise + freight + other - discount` (may be negative).
/// 3. Base: with MVA exactly zero and the normal regime marker,
///    `(start - declared ICMS) / divisor`; otherwise `start * (1 + MVA/100)`.
/// 4. Tax: `base * rate/100 - declared ICMS`.
/// 5. Base and tax are floored at zero.
///
/// Never fails. Arithmetic overflow or a zero divisor yields zero.
pub fn calculate_with(product: &Product, settings: &CalculationSettings) -> CalculationResult {
    let panettone_exception = is_panettone_exception(product);
    let (mva, internal_rate) = if panettone_exception {
        (PANETTONE_MVA, PANETTONE_INTERNAL_RATE)
    } else {
        (resolve_mva(product), settings.default_internal_rate)
    };

    let declared = product.icms.amount;
    let start = product.checked_starting_value();
    let gross_up = mva.is_zero() && settings.is_normal_regime(&product.tax_regime);

    let base = if gross_up {
        start
            .and_then(|s| s.checked_sub(declared))
            .and_then(|s| s.checked_div(settings.gross_up_divisor))
    } else {
        let factor = mva
            .checked_div(dec!(100))
            .and_then(|m| Decimal::ONE.checked_add(m));
        start.zip(factor).and_then(|(s, f)| s.checked_mul(f))
    };

    let tax = base
        .zip(internal_rate.checked_div(dec!(100)))
        .and_then(|(b, r)| b.checked_mul(r))
        .and_then(|t| t.checked_sub(declared));

    let base = floor_zero(base);
    let tax = floor_zero(tax);

    tracing::trace!(
        id = product.id,
        ncm = %product.ncm,
        start = ?start,
        %mva,
        %internal_rate,
        gross_up,
        %base,
        %tax,
        "ICMS-ST calculated"
    );

    CalculationResult {
        base,
        tax,
        mva_applied: mva,
        internal_rate_applied: internal_rate,
        panettone_exception,
        gross_up,
    }
}

/// Run the calculator over a batch and store each result on its product.
///
/// The batch is first checked for special food NCMs without a declared
/// origin. If one is found nothing is calculated and
/// [`IcmsStError::MissingOrigin`] names the first offender.
pub fn calculate_all(products: &mut [Product]) -> Result<(), IcmsStError> {
    calculate_all_with(products, &CalculationSettings::default())
}

/// [`calculate_all`] with explicit settings.
pub fn calculate_all_with(
    products: &mut [Product],
    settings: &CalculationSettings,
) -> Result<(), IcmsStError> {
    check_origins(products)?;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        products
            .par_iter_mut()
            .for_each(|p| p.st = Some(calculate_with(p, settings)));
    }

    #[cfg(not(feature = "parallel"))]
    for p in products.iter_mut() {
        p.st = Some(calculate_with(p, settings));
    }

    tracing::debug!(products = products.len(), "batch ICMS-ST calculation done");
    Ok(())
}

/// Whether the panettone exception applies: NCM 1905.20.10, CEST 17.052.00,
/// declared rate exactly 12% and "panettone" in the name (any case).
pub fn is_panettone_exception(product: &Product) -> bool {
    product.ncm == PANETTONE_NCM
        && product.cest == PANETTONE_CEST
        && product.icms.rate == PANETTONE_DECLARED_RATE
        && product.name.to_lowercase().contains("panettone")
}

fn floor_zero(value: Option<Decimal>) -> Decimal {
    value
        .filter(|v| v.is_sign_positive() && !v.is_zero())
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ProductBuilder, ProductOrigin};

    fn product(ncm: &str, gross: Decimal, rate: Decimal, declared: Decimal) -> Product {
        ProductBuilder::new("item", ncm)
            .gross_value(gross)
            .declared_icms(rate, declared)
            .build()
    }

    #[test]
    fn standard_markup() {
        let r = calculate(&product("12074090", dec!(100), dec!(12), dec!(12)));
        assert_eq!(r.mva_applied, dec!(60.5));
        assert_eq!(r.internal_rate_applied, dec!(20.5));
        assert_eq!(r.base, dec!(160.5));
        assert_eq!(r.tax, dec!(20.9025));
        assert!(!r.gross_up);
        assert!(!r.panettone_exception);
    }

    #[test]
    fn gross_up_for_zero_mva_normal_regime() {
        let r = calculate(&product("99999999", dec!(100), dec!(18), dec!(18)));
        assert!(r.gross_up);
        assert_eq!(r.mva_applied, Decimal::ZERO);
        assert_eq!(r.base.round_dp(2), dec!(103.14));
        assert_eq!(r.tax.round_dp(2), dec!(3.14));
    }

    #[test]
    fn zero_mva_other_regime_uses_markup() {
        let mut p = product("99999999", dec!(100), dec!(18), dec!(18));
        p.tax_regime = "SIMPLES".into();
        let r = calculate(&p);
        assert!(!r.gross_up);
        assert_eq!(r.base, dec!(100));
        assert_eq!(r.tax, dec!(2.5));
    }

    #[test]
    fn lowercase_normal_regime() {
        let mut p = product("99999999", dec!(100), dec!(18), dec!(18));
        p.tax_regime = "normal".into();
        assert!(calculate(&p).gross_up);
    }

    #[test]
    fn panettone_exception() {
        let p = ProductBuilder::new("Panettone Premium", PANETTONE_NCM)
            .cest(PANETTONE_CEST)
            .gross_value(dec!(100))
            .declared_icms(dec!(12), dec!(12))
            .origin(ProductOrigin::NaoSignatariaSulSudeste)
            .build();
        let r = calculate(&p);
        assert!(r.panettone_exception);
        assert_eq!(r.mva_applied, dec!(35));
        assert_eq!(r.internal_rate_applied, dec!(12));
        assert_eq!(r.base, dec!(135));
        assert_eq!(r.tax, dec!(4.2));
    }

    #[test]
    fn panettone_needs_every_condition() {
        let base = || {
            ProductBuilder::new("PANETTONE gotas", PANETTONE_NCM)
                .cest(PANETTONE_CEST)
                .gross_value(dec!(100))
                .declared_icms(dec!(12), dec!(12))
        };
        assert!(is_panettone_exception(&base().build()));
        assert!(!is_panettone_exception(&base().cest("1705300").build()));
        assert!(!is_panettone_exception(&base().declared_icms(dec!(11.6), dec!(12)).build()));

        let mut p = base().build();
        p.name = "Chocotone".into();
        assert!(!is_panettone_exception(&p));
        // Without the exception the general table applies (12% bracket)
        assert_eq!(calculate(&p).mva_applied, dec!(43.9));
    }

    #[test]
    fn discount_beyond_value_clamps() {
        let mut p = product("12074090", dec!(100), dec!(12), dec!(12));
        p.discount = dec!(500);
        let r = calculate(&p);
        assert_eq!(r.base, Decimal::ZERO);
        assert_eq!(r.tax, Decimal::ZERO);
        assert_eq!(r.mva_applied, dec!(60.5));
    }

    #[test]
    fn declared_icms_above_st_clamps_tax() {
        let r = calculate(&product("12074090", dec!(100), dec!(12), dec!(90)));
        assert_eq!(r.base, dec!(160.5));
        assert_eq!(r.tax, Decimal::ZERO);
    }

    #[test]
    fn zero_divisor_degrades_to_zero() {
        let settings = CalculationSettings {
            gross_up_divisor: Decimal::ZERO,
            ..Default::default()
        };
        let r = calculate_with(&product("99999999", dec!(100), dec!(18), dec!(18)), &settings);
        assert_eq!(r.base, Decimal::ZERO);
        assert_eq!(r.tax, Decimal::ZERO);
    }

    #[test]
    fn overflow_degrades_to_zero() {
        let mut p = product("12074090", Decimal::MAX, dec!(12), Decimal::ZERO);
        p.ipi = Decimal::MAX;
        let r = calculate(&p);
        assert_eq!(r.base, Decimal::ZERO);
        assert_eq!(r.tax, Decimal::ZERO);
    }

    #[test]
    fn custom_internal_rate() {
        let settings = CalculationSettings {
            default_internal_rate: dec!(18),
            ..Default::default()
        };
        let r = calculate_with(&product("12074090", dec!(100), dec!(12), dec!(12)), &settings);
        assert_eq!(r.internal_rate_applied, dec!(18));
        assert_eq!(r.tax, dec!(16.89));
    }

    #[test]
    fn batch_stores_results() {
        let mut products = vec![
            product("12074090", dec!(100), dec!(12), dec!(12)),
            product("99999999", dec!(50), dec!(0), dec!(0)),
        ];
        calculate_all(&mut products).unwrap();
        assert!(products.iter().all(|p| p.is_calculated()));
        assert_eq!(products[0].st.as_ref().unwrap().tax, dec!(20.9025));
    }

    #[test]
    fn batch_rejects_missing_origin() {
        let mut products = vec![
            product("12074090", dec!(100), dec!(12), dec!(12)),
            product("19021100", dec!(100), dec!(12), dec!(12)),
        ];
        let err = calculate_all(&mut products).unwrap_err();
        assert!(matches!(err, IcmsStError::MissingOrigin { ref ncm, .. } if ncm == "19021100"));
        assert!(products.iter().all(|p| !p.is_calculated()));
    }
}
