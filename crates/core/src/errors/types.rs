//! Core error type definitions

use std::fmt;

/// Result type alias for environment accessor operations
pub type Result<T> = std::result::Result<T, ConversionError>;

/// The classified reason a lookup or conversion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Cause {
    /// The variable is unset or set to the empty string
    #[error("environment variable does not exist")]
    NotFound,

    /// The value is not a valid literal of the requested type
    #[error("invalid syntax")]
    Syntax,

    /// The literal is well formed but does not fit the requested width
    #[error("value out of range")]
    Range,

    /// The caller asked for a radix outside `0` and `2..=36`
    #[error("invalid base {0}")]
    InvalidBase(u32),

    /// The caller asked for a width the parser does not support
    #[error("invalid bit size {0}")]
    InvalidBitSize(u32),

    /// The value exists but is not valid UTF-8
    #[error("value is not valid unicode")]
    NotUnicode,
}

impl Cause {
    /// Returns true for causes that stem from bad caller arguments rather than
    /// from the environment's content.
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Cause::InvalidBase(_) | Cause::InvalidBitSize(_))
    }
}

/// The accessor that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Raw string lookup
    GetString,
    /// Boolean conversion
    GetBool,
    /// Signed integer conversion
    GetInt,
    /// Floating point conversion
    GetFloat,
}

impl Operation {
    /// The operation's function name, as used in rendered errors
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::GetString => "get_string",
            Operation::GetBool => "get_bool",
            Operation::GetInt => "get_int",
            Operation::GetFloat => "get_float",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed lookup or conversion of a single environment variable.
///
/// Renders as `<operation>: parsing "<key>": <cause>`. Callers should branch on
/// [`ConversionError::cause`] rather than on the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation}: parsing {key:?}: {cause}")]
pub struct ConversionError {
    pub(crate) operation: Operation,
    pub(crate) key: String,
    #[source]
    pub(crate) cause: Cause,
}

impl ConversionError {
    /// The accessor that failed
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The environment key that was looked up
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying cause
    #[must_use]
    pub fn cause(&self) -> Cause {
        self.cause
    }

    /// Unwrap to the underlying cause, discarding operation and key
    #[must_use]
    pub fn into_cause(self) -> Cause {
        self.cause
    }

    /// The variable was unset or empty
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.cause == Cause::NotFound
    }

    /// The value is not a literal of the requested type
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        self.cause == Cause::Syntax
    }

    /// The value does not fit the requested width
    #[must_use]
    pub fn is_range(&self) -> bool {
        self.cause == Cause::Range
    }

    /// The base or bit size passed by the caller was rejected
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        self.cause.is_invalid_parameter()
    }
}

impl From<ConversionError> for Cause {
    fn from(error: ConversionError) -> Self {
        error.cause
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_quotes_key() {
        let err = ConversionError::new(Operation::GetInt, "PORT", Cause::Syntax);
        assert_eq!(err.to_string(), r#"get_int: parsing "PORT": invalid syntax"#);
    }

    #[test]
    fn test_display_escapes_key() {
        let err = ConversionError::not_found(Operation::GetString, "A\"B\n");
        assert_eq!(
            err.to_string(),
            r#"get_string: parsing "A\"B\n": environment variable does not exist"#
        );
    }

    #[test]
    fn test_display_parameter_causes() {
        assert_eq!(Cause::InvalidBase(37).to_string(), "invalid base 37");
        assert_eq!(
            Cause::InvalidBitSize(4_294_967_295).to_string(),
            "invalid bit size 4294967295"
        );
    }

    #[test]
    fn test_source_is_cause() {
        let err = ConversionError::range(Operation::GetInt, "LIMIT");
        let source = err.source().expect("conversion errors carry a source");
        assert_eq!(source.downcast_ref::<Cause>(), Some(&Cause::Range));
    }

    #[test]
    fn test_cause_accessors() {
        let err = ConversionError::invalid_bit_size(Operation::GetFloat, "RATIO", 16);
        assert_eq!(err.operation(), Operation::GetFloat);
        assert_eq!(err.key(), "RATIO");
        assert!(err.is_invalid_parameter());
        assert!(!err.is_syntax());
        assert!(!err.is_range());
        assert!(!err.is_not_found());
        assert_eq!(Cause::from(err), Cause::InvalidBitSize(16));
    }

    #[test]
    fn test_invalid_parameter_classification() {
        assert!(Cause::InvalidBase(1).is_invalid_parameter());
        assert!(Cause::InvalidBitSize(7).is_invalid_parameter());
        assert!(!Cause::Syntax.is_invalid_parameter());
        assert!(!Cause::Range.is_invalid_parameter());
        assert!(!Cause::NotFound.is_invalid_parameter());
        assert!(!Cause::NotUnicode.is_invalid_parameter());
    }
}
