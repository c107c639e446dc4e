//! Read environment variables as typed values.
//!
//! Four operations look a variable up and, where asked, convert it:
//! [`get_string`], [`get_bool`], [`get_int`] and [`get_float`]. They read the
//! process environment; [`EnvAccessor`] offers the same operations over any
//! [`ReadEnv`] source, optionally under a key prefix.
//!
//! A variable set to the empty string is treated as unset.
//!
//! Failures are [`ConversionError`]s. Branch on [`ConversionError::cause`]:
//!
//! ```
//! use envy::Cause;
//!
//! match envy::get_int("ENVY_DOC_WORKERS", 10, 16) {
//!     Ok(workers) => println!("running {workers} workers"),
//!     Err(err) if err.cause() == Cause::NotFound => println!("using default workers"),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

mod accessor;
pub mod source;

pub use accessor::EnvAccessor;
pub use envy_core::{parse, Cause, ConversionError, Operation, Result};
pub use source::{MemoryEnv, ReadEnv, SystemEnv};

/// Return the raw value of `key` from the process environment.
///
/// # Errors
///
/// [`Cause::NotFound`] if `key` is unset or empty, [`Cause::NotUnicode`] if its
/// value is not valid UTF-8.
pub fn get_string(key: &str) -> Result<String> {
    EnvAccessor::system().get_string(key)
}

/// Parse `key` from the process environment as a boolean.
///
/// # Errors
///
/// [`Cause::NotFound`] if `key` is unset or empty, [`Cause::Syntax`] if the
/// value is not a boolean literal.
pub fn get_bool(key: &str) -> Result<bool> {
    EnvAccessor::system().get_bool(key)
}

/// Parse `key` from the process environment as a signed integer of
/// `bit_size` bits (0 means 64) in `base` (0 detects the radix from the
/// literal's prefix).
///
/// # Errors
///
/// [`Cause::NotFound`], [`Cause::Syntax`], [`Cause::Range`],
/// [`Cause::InvalidBase`] or [`Cause::InvalidBitSize`].
pub fn get_int(key: &str, base: u32, bit_size: u32) -> Result<i64> {
    EnvAccessor::system().get_int(key, base, bit_size)
}

/// Parse `key` from the process environment as a float rounded to
/// `bit_size` (32 or 64) bits of precision.
///
/// # Errors
///
/// [`Cause::NotFound`], [`Cause::Syntax`], [`Cause::Range`] or
/// [`Cause::InvalidBitSize`].
pub fn get_float(key: &str, bit_size: u32) -> Result<f64> {
    EnvAccessor::system().get_float(key, bit_size)
}
