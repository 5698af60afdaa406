//! Food products whose MVA depends on the declared origin of the goods
//! (Decreto 27.987/2005, Art. 7) rather than on the declared rate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::ProductOrigin;

/// NCMs subject to the origin-based MVA. Sorted for binary search.
static SPECIAL_NCMS: &[&str] = &[
    "19021100", "19021900", "19023000", "19052010", "19053100", "19059010", "19059020", "19059090",
];

/// Whether `ncm` belongs to the origin-based food set.
///
/// Products with such an NCM need a declared origin before batch calculation.
pub fn is_special_ncm(ncm: &str) -> bool {
    SPECIAL_NCMS.binary_search(&ncm).is_ok()
}

/// MVA for a food product of the given origin.
pub fn origin_mva(origin: ProductOrigin) -> Decimal {
    match origin {
        ProductOrigin::Signataria => dec!(35),
        ProductOrigin::NaoSignatariaSulSudeste => dec!(45),
        ProductOrigin::NaoSignatariaOutros => dec!(30),
        ProductOrigin::Exterior => dec!(35),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_set_membership() {
        for ncm in SPECIAL_NCMS {
            assert!(is_special_ncm(ncm));
        }
        assert!(!is_special_ncm("19053200"));
        assert!(!is_special_ncm("1902110"));
        assert!(!is_special_ncm(""));
    }

    #[test]
    fn set_is_sorted() {
        for window in SPECIAL_NCMS.windows(2) {
            assert!(window[0] < window[1]);
        }
        assert_eq!(SPECIAL_NCMS.len(), 8);
    }

    #[test]
    fn origin_values() {
        assert_eq!(origin_mva(ProductOrigin::Signataria), dec!(35));
        assert_eq!(origin_mva(ProductOrigin::NaoSignatariaSulSudeste), dec!(45));
        assert_eq!(origin_mva(ProductOrigin::NaoSignatariaOutros), dec!(30));
        assert_eq!(origin_mva(ProductOrigin::Exterior), dec!(35));
    }
}
