#![no_main]

use icms_st::core::ProductBuilder;
use icms_st::st::{aggregate, calculate, calculate_all};
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

const AMOUNT_LEN: usize = 14;

/// Full-range amount: 96-bit mantissa, sign and scale.
fn amount(bytes: &[u8]) -> Decimal {
    let word = |i: usize| u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
    Decimal::from_parts(word(0), word(4), word(8), bytes[12] & 1 == 1, u32::from(bytes[13] % 29))
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 * AMOUNT_LEN {
        return;
    }
    let (amounts, text) = data.split_at(6 * AMOUNT_LEN);
    let field = |i: usize| amount(&amounts[i * AMOUNT_LEN..(i + 1) * AMOUNT_LEN]);
    let text = String::from_utf8_lossy(text);
    let (ncm, cest) = text.split_at(text.char_indices().nth(8).map_or(text.len(), |(i, _)| i));

    let p = ProductBuilder::new("fuzz", ncm)
        .cest(cest)
        .gross_value(field(0))
        .ipi(field(1))
        .freight(field(2))
        .discount(field(3))
        .declared_icms(field(4), field(5))
        .build();

    // Never panics, never negative.
    let r = calculate(&p);
    assert!(r.base >= Decimal::ZERO);
    assert!(r.tax >= Decimal::ZERO);

    let mut products = vec![p.clone(), p.clone(), p];
    if calculate_all(&mut products).is_ok() {
        let totals = aggregate(&products);
        assert!(totals.st_base >= Decimal::ZERO);
        assert!(totals.st_tax >= Decimal::ZERO);
    }
});
