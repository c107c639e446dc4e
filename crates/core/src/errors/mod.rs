//! Error types for environment lookups and conversions

mod builders;
mod types;

pub use types::{Cause, ConversionError, Operation, Result};
