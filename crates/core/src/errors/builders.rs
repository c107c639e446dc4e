//! Builder methods for creating conversion errors

use super::types::{Cause, ConversionError, Operation};

impl ConversionError {
    /// Create an error for `key` with an explicit cause
    #[must_use]
    pub fn new(operation: Operation, key: impl Into<String>, cause: Cause) -> Self {
        ConversionError {
            operation,
            key: key.into(),
            cause,
        }
    }

    /// Create an error for a variable that is unset or empty
    #[must_use]
    pub fn not_found(operation: Operation, key: impl Into<String>) -> Self {
        Self::new(operation, key, Cause::NotFound)
    }

    /// Create an error for a malformed literal
    #[must_use]
    pub fn syntax(operation: Operation, key: impl Into<String>) -> Self {
        Self::new(operation, key, Cause::Syntax)
    }

    /// Create an error for a literal that does not fit the requested width
    #[must_use]
    pub fn range(operation: Operation, key: impl Into<String>) -> Self {
        Self::new(operation, key, Cause::Range)
    }

    /// Create an error for an unsupported radix
    #[must_use]
    pub fn invalid_base(operation: Operation, key: impl Into<String>, base: u32) -> Self {
        Self::new(operation, key, Cause::InvalidBase(base))
    }

    /// Create an error for an unsupported bit size
    #[must_use]
    pub fn invalid_bit_size(operation: Operation, key: impl Into<String>, bit_size: u32) -> Self {
        Self::new(operation, key, Cause::InvalidBitSize(bit_size))
    }

    /// Create an error for a value that is not valid UTF-8
    #[must_use]
    pub fn not_unicode(operation: Operation, key: impl Into<String>) -> Self {
        Self::new(operation, key, Cause::NotUnicode)
    }
}
