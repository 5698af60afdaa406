//! ICMS-ST calculation and totals.
//!
//! [`calculate`] turns one product into a [`CalculationResult`](crate::core::CalculationResult);
//! [`calculate_all`] runs a whole document after checking the origin
//! precondition; [`aggregate`] folds the results into [`Totals`].
//!
//! With the `parallel` feature, batch calculation runs on rayon.

mod calculator;
mod settings;
mod totals;

pub use calculator::{
    PANETTONE_CEST, PANETTONE_NCM, calculate, calculate_all, calculate_all_with, calculate_with,
    is_panettone_exception,
};
pub use settings::{CalculationSettings, DEFAULT_INTERNAL_RATE, GROSS_UP_DIVISOR, REGIME_NORMAL};
pub use totals::{Totals, aggregate, cfop_totals, is_calculated};
