//! # icms-st
//!
//! ICMS-ST (substituição tributária) engine for NF-e line items: resolves
//! the MVA that applies to each product, computes the ST base and the tax
//! owed, and summarizes a document.
//!
//! All monetary values and percentages use [`rust_decimal::Decimal`], never
//! floating point. Document parsing, presentation and persistence are left
//! to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use icms_st::*;
//! use rust_decimal_macros::dec;
//!
//! let mut invoice = InvoiceBuilder::new("4512")
//!     .emitter(Party::new("Distribuidora Sul Ltda", "12345678000190", "SP"))
//!     .recipient(Party::new("Mercado Central", "98765432000110", "PE"))
//!     .add_product(
//!         ProductBuilder::new("Óleo de girassol 900ml", "12074090")
//!             .cfop("6102")
//!             .gross_value(dec!(100))
//!             .declared_icms(dec!(12), dec!(12))
//!             .build(),
//!     )
//!     .add_product(
//!         ProductBuilder::new("Macarrão espaguete", "19021100")
//!             .cfop("6102")
//!             .gross_value(dec!(50))
//!             .declared_icms(dec!(12), dec!(6))
//!             .origin(ProductOrigin::Signataria)
//!             .build(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! invoice.calculate().unwrap();
//! let totals = invoice.st_totals();
//! assert_eq!(totals.tax_by_mva[&dec!(60.5)], dec!(20.9025));
//! assert_eq!(totals.tax_by_mva[&dec!(35)], dec!(7.8375));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`core`] | Product and document types, builders, errors, origin checks |
//! | [`segment`] | Market segment by CEST prefix |
//! | [`mva`] | MVA tables and rule resolution |
//! | [`st`] | ST base/tax calculation, settings, totals |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `parallel` | Batch calculation on rayon |
//! | `all` | Everything |

pub mod core;
pub mod mva;
pub mod segment;
pub mod st;

// Re-export core types at crate root for convenience
pub use crate::core::*;
