//! Summary totals over a calculated product list.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Product;

/// Totals across the calculated products of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of ST bases.
    pub st_base: Decimal,
    /// Sum of ST taxes.
    pub st_tax: Decimal,
    /// Sum of gross product values.
    pub gross_value: Decimal,
    /// Sum of excise tax.
    pub ipi: Decimal,
    /// Sum of freight.
    pub freight: Decimal,
    /// Sum of other expenses.
    pub other_expenses: Decimal,
    /// Sum of discounts.
    pub discount: Decimal,
    /// Sum of per-product starting values.
    pub starting_value: Decimal,
    /// ST tax grouped by applied MVA, ascending.
    pub tax_by_mva: BTreeMap<Decimal, Decimal>,
    /// Gross value grouped by CFOP, ascending.
    pub gross_by_cfop: BTreeMap<String, Decimal>,
    /// Number of products that contributed.
    pub calculated: usize,
}

/// Fold calculated products into [`Totals`].
///
/// Products without a calculation result are skipped, so an uncalculated
/// list yields all-zero sums and empty groups. MVA groups key on the exact
/// applied percentage; `Decimal` equality is by value, so `35` and `35.00`
/// share a group. Sums saturate at `Decimal::MAX` instead of overflowing.
pub fn aggregate(products: &[Product]) -> Totals {
    products
        .iter()
        .filter_map(|p| p.st.as_ref().map(|st| (p, st)))
        .fold(Totals::default(), |mut acc, (p, st)| {
            add(&mut acc.st_base, st.base);
            add(&mut acc.st_tax, st.tax);
            add(&mut acc.gross_value, p.gross_value);
            add(&mut acc.ipi, p.ipi);
            add(&mut acc.freight, p.freight);
            add(&mut acc.other_expenses, p.other_expenses);
            add(&mut acc.discount, p.discount);
            add(&mut acc.starting_value, p.starting_value());
            add(acc.tax_by_mva.entry(st.mva_applied).or_default(), st.tax);
            add(acc.gross_by_cfop.entry(p.cfop.clone()).or_default(), p.gross_value);
            acc.calculated += 1;
            acc
        })
}

/// Gross value grouped by CFOP over every product, calculated or not.
pub fn cfop_totals(products: &[Product]) -> BTreeMap<String, Decimal> {
    let mut totals = BTreeMap::new();
    for p in products {
        add(totals.entry(p.cfop.clone()).or_default(), p.gross_value);
    }
    totals
}

fn add(sum: &mut Decimal, value: Decimal) {
    *sum = sum.saturating_add(value);
}

/// True when the list is non-empty and every product has a result.
pub fn is_calculated(products: &[Product]) -> bool {
    !products.is_empty() && products.iter().all(Product::is_calculated)
}
