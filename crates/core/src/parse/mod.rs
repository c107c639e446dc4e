//! Literal parsers shared by the environment accessors.
//!
//! Each parser works on a borrowed `&str` and reports failures as a bare
//! [`Cause`](crate::Cause). Empty input is a syntax error here; mapping an
//! empty variable to `NotFound` is the accessor's job.

mod boolean;
mod float;
mod int;
mod separators;

pub use self::boolean::parse_bool;
pub use self::float::parse_float;
pub use self::int::{parse_int, INT_BIT_SIZES};

/// Result of parsing a single literal
pub type ParseResult<T> = std::result::Result<T, crate::Cause>;
