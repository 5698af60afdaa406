use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Regime marker that enables the gross-up formula for zero-MVA products.
pub const REGIME_NORMAL: &str = "NORMAL";

/// Internal ICMS rate applied when no exception overrides it (20.5%).
pub const DEFAULT_INTERNAL_RATE: Decimal = dec!(20.50);

/// Divisor of the gross-up formula: `base = (start - declared ICMS) / 0.795`.
pub const GROSS_UP_DIVISOR: Decimal = dec!(0.795);

/// Tunable parameters of the ST calculation.
///
/// Missing fields take their defaults when deserialized, so a partial
/// document (e.g. only `default_internal_rate`) is enough to override one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationSettings {
    /// Internal rate in percent.
    pub default_internal_rate: Decimal,
    /// Divisor of the gross-up formula.
    pub gross_up_divisor: Decimal,
    /// Regime marker compared case-insensitively against the product's.
    pub normal_regime: String,
}

impl Default for CalculationSettings {
    fn default() -> Self {
        Self {
            default_internal_rate: DEFAULT_INTERNAL_RATE,
            gross_up_divisor: GROSS_UP_DIVISOR,
            normal_regime: REGIME_NORMAL.to_string(),
        }
    }
}

impl CalculationSettings {
    /// Whether `regime` is the normal regime marker, ignoring case.
    pub fn is_normal_regime(&self, regime: &str) -> bool {
        regime.to_uppercase() == self.normal_regime.to_uppercase()
    }
}
