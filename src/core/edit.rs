//! User edits on a loaded document and the document-level entry points.

use super::error::IcmsStError;
use super::types::*;
use crate::st::{self, CalculationSettings, Totals};

/// Set `origin` on the product at `index` and on every other product with the
/// same NCM, CEST and declared ICMS rate. Returns how many products changed.
///
/// Existing calculation results are kept; recalculate to refresh them.
pub fn propagate_origin(
    products: &mut [Product],
    index: usize,
    origin: ProductOrigin,
) -> Result<usize, IcmsStError> {
    let target = products.get(index).ok_or(IcmsStError::ProductIndex(index))?;
    let (ncm, cest, rate) = (target.ncm.clone(), target.cest.clone(), target.icms.rate);

    let mut changed = 0;
    for p in products
        .iter_mut()
        .filter(|p| p.ncm == ncm && p.cest == cest && p.icms.rate == rate)
    {
        p.origin = Some(origin);
        changed += 1;
    }
    Ok(changed)
}

impl Invoice {
    /// See [`propagate_origin`].
    pub fn set_origin(&mut self, index: usize, origin: ProductOrigin) -> Result<usize, IcmsStError> {
        propagate_origin(&mut self.products, index, origin)
    }

    /// Replace the regime marker of a single product.
    pub fn set_tax_regime(
        &mut self,
        index: usize,
        regime: impl Into<String>,
    ) -> Result<(), IcmsStError> {
        let product = self
            .products
            .get_mut(index)
            .ok_or(IcmsStError::ProductIndex(index))?;
        product.tax_regime = regime.into();
        Ok(())
    }

    /// Calculate ICMS-ST for every product. See [`st::calculate_all`].
    pub fn calculate(&mut self) -> Result<(), IcmsStError> {
        st::calculate_all(&mut self.products)
    }

    /// [`Invoice::calculate`] with explicit settings.
    pub fn calculate_with(&mut self, settings: &CalculationSettings) -> Result<(), IcmsStError> {
        st::calculate_all_with(&mut self.products, settings)
    }

    /// Whether every product has been calculated.
    pub fn is_calculated(&self) -> bool {
        st::is_calculated(&self.products)
    }

    /// Totals over the calculated products. See [`st::aggregate`].
    pub fn st_totals(&self) -> Totals {
        st::aggregate(&self.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InvoiceBuilder, ProductBuilder};
    use rust_decimal_macros::dec;

    fn invoice() -> Invoice {
        InvoiceBuilder::new("1001")
            .add_product(
                ProductBuilder::new("Torrada A", "19059020")
                    .declared_icms(dec!(12), dec!(1.2))
                    .gross_value(dec!(10))
                    .build(),
            )
            .add_product(
                ProductBuilder::new("Torrada B", "19059020")
                    .declared_icms(dec!(12.00), dec!(2.4))
                    .gross_value(dec!(20))
                    .build(),
            )
            .add_product(
                ProductBuilder::new("Torrada C", "19059020")
                    .declared_icms(dec!(7), dec!(0.7))
                    .gross_value(dec!(10))
                    .build(),
            )
            .add_product(
                ProductBuilder::new("Torrada D", "19059020")
                    .cest("1706200")
                    .declared_icms(dec!(12), dec!(1.2))
                    .gross_value(dec!(10))
                    .build(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn origin_spreads_to_matching_products() {
        let mut inv = invoice();
        let changed = inv.set_origin(1, ProductOrigin::Exterior).unwrap();
        assert_eq!(changed, 2);
        assert_eq!(inv.products[0].origin, Some(ProductOrigin::Exterior));
        assert_eq!(inv.products[1].origin, Some(ProductOrigin::Exterior));
        assert_eq!(inv.products[2].origin, None);
        assert_eq!(inv.products[3].origin, None);
    }

    #[test]
    fn origin_out_of_range() {
        let mut inv = invoice();
        assert!(matches!(
            inv.set_origin(9, ProductOrigin::Signataria),
            Err(IcmsStError::ProductIndex(9))
        ));
    }

    #[test]
    fn regime_edit_is_local() {
        let mut inv = invoice();
        inv.set_tax_regime(0, "SIMPLES").unwrap();
        assert_eq!(inv.products[0].tax_regime, "SIMPLES");
        assert_eq!(inv.products[1].tax_regime, "NORMAL");
        assert!(inv.set_tax_regime(4, "x").is_err());
    }

    #[test]
    fn calculate_requires_all_origins() {
        let mut inv = invoice();
        inv.set_origin(0, ProductOrigin::Signataria).unwrap();
        assert!(inv.calculate().is_err());
        assert!(!inv.is_calculated());

        inv.set_origin(2, ProductOrigin::NaoSignatariaOutros).unwrap();
        inv.set_origin(3, ProductOrigin::NaoSignatariaSulSudeste).unwrap();
        inv.calculate().unwrap();
        assert!(inv.is_calculated());

        let totals = inv.st_totals();
        assert_eq!(totals.calculated, 4);
        assert_eq!(totals.tax_by_mva.len(), 3);
        assert_eq!(totals.gross_value, dec!(50));
    }
}
