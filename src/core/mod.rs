//! Core domain types, builders, errors and validation.
//!
//! This module provides the NF-e line item model consumed by the ST engine,
//! the document container, and the precondition checks run before a batch
//! calculation.

mod builder;
mod edit;
mod error;
mod types;
mod validation;

pub use builder::*;
pub use edit::propagate_origin;
pub use error::*;
pub use types::*;
pub use validation::*;
