use super::ParseResult;
use crate::Cause;

/// Parse a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`, `FALSE`,
/// `false`, `False`. Other spellings such as `yes` or `tRUE` are rejected.
pub fn parse_bool(s: &str) -> ParseResult<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Cause::Syntax),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_literals() {
        for literal in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(literal), Ok(true), "literal {literal:?}");
        }
    }

    #[test]
    fn test_falsy_literals() {
        for literal in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(literal), Ok(false), "literal {literal:?}");
        }
    }

    #[test]
    fn test_rejected_literals() {
        for literal in ["", "22", "a", "yes", "no", "tRUE", " true", "true ", "2"] {
            assert_eq!(parse_bool(literal), Err(Cause::Syntax), "literal {literal:?}");
        }
    }
}
