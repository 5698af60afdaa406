//! MVA (Margem de Valor Agregado) resolution.
//!
//! Maps a product's NCM, CEST, declared ICMS rate and, for some food
//! products, its declared origin to the markup used to build the ST base.
//!
//! # Example
//!
//! ```
//! use icms_st::core::ProductBuilder;
//! use icms_st::mva::resolve_mva;
//! use rust_decimal_macros::dec;
//!
//! let pump = ProductBuilder::new("Bomba d'água", "84133010")
//!     .declared_icms(dec!(12), dec!(12))
//!     .build();
//! assert_eq!(resolve_mva(&pump), dec!(90.15));
//! ```

mod origin;
mod resolver;
mod table;

pub use origin::{is_special_ncm, origin_mva};
pub use resolver::{MvaResolution, MvaRule, resolve, resolve_mva};
pub use table::{AUTOPECAS, MATERIAIS_CONSTRUCAO, MvaBrackets, RateBracket, lookup_ncm, table_len};
