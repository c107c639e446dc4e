//! Core error types and literal parsers for `envy`.
//!
//! ## Key Components
//!
//! - **`errors`**: the closed [`Cause`] set, the [`Operation`] that failed, and
//!   the structured [`ConversionError`] tying both to an environment key.
//! - **`parse`**: pure `&str` parsers for boolean, integer and float literals.
//!   They know nothing about the environment and report a bare [`Cause`].

pub mod errors;
pub mod parse;

pub use self::{
    errors::{Cause, ConversionError, Operation, Result},
    parse::{parse_bool, parse_float, parse_int},
};
