//! Pick the MVA for a product.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::origin::{is_special_ncm, origin_mva};
use super::table::{AUTOPECAS, MATERIAIS_CONSTRUCAO, RateBracket, lookup_ncm};
use crate::core::{Product, ProductOrigin};

/// Which rule produced an MVA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MvaRule {
    /// Auto parts segment: CEST 01, NCM 8413.xx.xx or NCM 4504.90.00.
    Autopecas(RateBracket),
    /// Construction materials segment: CEST 10.
    MateriaisConstrucao(RateBracket),
    /// Origin-based food products.
    AlimenticiosOrigem(ProductOrigin),
    /// General per-NCM table.
    TabelaNcm(RateBracket),
    /// Nothing matched; MVA is zero.
    SemRegra,
}

/// MVA together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MvaResolution {
    pub rule: MvaRule,
    pub mva: Decimal,
}

/// Resolve the MVA for `product`.
///
/// # Rules
///
/// Evaluated in order; the first match wins.
///
/// 1. Auto parts: CEST starts with `01`, NCM starts with `8413`, or NCM is
///    `45049000` → segment brackets.
/// 2. Construction materials: CEST starts with `10` → segment brackets.
/// 3. Food products in the origin set with a declared origin → origin MVA,
///    whatever the declared rate.
/// 4. NCM listed in the general table → its bracket.
/// 5. Otherwise → `0`.
///
/// A special food NCM without origin skips rule 3 and falls through.
pub fn resolve(product: &Product) -> MvaResolution {
    let bracket = RateBracket::for_rate(product.icms.rate);

    let resolution = if is_autopecas(product) {
        MvaResolution {
            rule: MvaRule::Autopecas(bracket),
            mva: AUTOPECAS.get(bracket),
        }
    } else if product.cest.starts_with("10") {
        MvaResolution {
            rule: MvaRule::MateriaisConstrucao(bracket),
            mva: MATERIAIS_CONSTRUCAO.get(bracket),
        }
    } else if let Some(origin) = product.origin.filter(|_| is_special_ncm(&product.ncm)) {
        MvaResolution {
            rule: MvaRule::AlimenticiosOrigem(origin),
            mva: origin_mva(origin),
        }
    } else if let Some(entry) = lookup_ncm(&product.ncm) {
        MvaResolution {
            rule: MvaRule::TabelaNcm(bracket),
            mva: entry.get(bracket),
        }
    } else {
        tracing::debug!(ncm = %product.ncm, cest = %product.cest, "no MVA rule matched, using zero");
        return MvaResolution {
            rule: MvaRule::SemRegra,
            mva: Decimal::ZERO,
        };
    };

    tracing::debug!(
        ncm = %product.ncm,
        cest = %product.cest,
        rule = ?resolution.rule,
        mva = %resolution.mva,
        "MVA resolved"
    );
    resolution
}

/// MVA percentage for `product`. See [`resolve`] for the rules.
pub fn resolve_mva(product: &Product) -> Decimal {
    resolve(product).mva
}

fn is_autopecas(product: &Product) -> bool {
    product.cest.starts_with("01") || product.ncm.starts_with("8413") || product.ncm == "45049000"
}
