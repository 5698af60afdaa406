use rust_decimal::Decimal;

use super::error::{IcmsStError, ValidationError};
use super::types::*;
use crate::mva::is_special_ncm;

/// Precondition of batch calculation: every product with a special food NCM
/// must carry an origin. Returns the first offender.
pub fn check_origins(products: &[Product]) -> Result<(), IcmsStError> {
    match products
        .iter()
        .find(|p| p.origin.is_none() && is_special_ncm(&p.ncm))
    {
        Some(p) => {
            tracing::warn!(id = p.id, ncm = %p.ncm, "product needs a declared origin");
            Err(IcmsStError::MissingOrigin {
                product: p.name.clone(),
                ncm: p.ncm.clone(),
            })
        }
        None => Ok(()),
    }
}

/// Advisory checks on a product list. Returns every finding.
///
/// The calculator accepts all of these inputs; this is for callers that
/// want to flag suspicious document data before calculating.
pub fn lint_products(products: &[Product]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, product) in products.iter().enumerate() {
        lint_product(product, i, &mut errors);
    }
    errors
}

fn lint_product(product: &Product, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("products[{index}]");

    if !is_digits(&product.ncm, 8) {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.ncm"),
            format!("NCM '{}' must have 8 digits", product.ncm),
            "ST-NCM",
        ));
    }

    if !product.cest.is_empty() && !is_digits(&product.cest, 7) {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.cest"),
            format!("CEST '{}' must be empty or have 7 digits", product.cest),
            "ST-CEST",
        ));
    }

    if product.origin.is_none() && is_special_ncm(&product.ncm) {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.origin"),
            format!(
                "product \"{}\" (NCM {}) requires a declared origin",
                product.name, product.ncm
            ),
            "ST-ORIGIN",
        ));
    }

    let amounts = [
        ("gross_value", product.gross_value),
        ("ipi", product.ipi),
        ("freight", product.freight),
        ("other_expenses", product.other_expenses),
        ("discount", product.discount),
        ("icms.amount", product.icms.amount),
        ("icms.rate", product.icms.rate),
    ];
    for (field, value) in amounts {
        if value < Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("{prefix}.{field}"),
                format!("must not be negative, got {value}"),
            ));
        }
    }

    if product.starting_value() < Decimal::ZERO {
        errors.push(ValidationError::new(
            prefix,
            "discount exceeds product value plus charges",
        ));
    }
}

fn is_digits(code: &str, len: usize) -> bool {
    code.len() == len && code.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProductBuilder;
    use rust_decimal_macros::dec;

    #[test]
    fn origins_present() {
        let products = vec![
            ProductBuilder::new("Macarrão", "19021100")
                .origin(ProductOrigin::Signataria)
                .build(),
            ProductBuilder::new("Óleo", "12074090").build(),
        ];
        assert!(check_origins(&products).is_ok());
        assert!(check_origins(&[]).is_ok());
    }

    #[test]
    fn first_missing_origin_reported() {
        let products = vec![
            ProductBuilder::new("Óleo", "12074090").build(),
            ProductBuilder::new("Torrada", "19054000").build(),
            ProductBuilder::new("Biscoito", "19053100").build(),
            ProductBuilder::new("Macarrão", "19021100").build(),
        ];
        let err = check_origins(&products).unwrap_err();
        assert_eq!(
            err.to_string(),
            "select the goods origin for product \"Biscoito\" (NCM: 19053100)"
        );
    }

    #[test]
    fn clean_product_has_no_findings() {
        let p = ProductBuilder::new("Óleo", "12074090")
            .cest("1700100")
            .gross_value(dec!(10))
            .build();
        assert!(lint_products(&[p]).is_empty());
    }

    #[test]
    fn malformed_codes() {
        let p = ProductBuilder::new("x", "1207409A").cest("17001").build();
        let errors = lint_products(&[p]);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].rule.as_deref(), Some("ST-NCM"));
        assert_eq!(errors[1].field, "products[0].cest");
    }

    #[test]
    fn negative_amounts() {
        let p = ProductBuilder::new("x", "12074090")
            .gross_value(dec!(10))
            .discount(dec!(-1))
            .build();
        let errors = lint_products(&[p]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "products[0].discount");
        assert_eq!(
            errors[0].to_string(),
            "products[0].discount: must not be negative, got -1"
        );
    }

    #[test]
    fn discount_beyond_value() {
        let p = ProductBuilder::new("x", "12074090")
            .gross_value(dec!(10))
            .discount(dec!(11))
            .build();
        let errors = lint_products(&[p]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "products[0]");
    }

    #[test]
    fn missing_origin_finding() {
        let p = ProductBuilder::new("Pão", "19059010").build();
        let errors = lint_products(&[p]);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "[ST-ORIGIN] products[0].origin: product \"Pão\" (NCM 19059010) requires a declared origin"
        );
    }
}
