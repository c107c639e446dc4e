//! Placement rule for `_` digit separators.

#[derive(Clone, Copy, PartialEq, Eq)]
enum Last {
    Digit,
    Underscore,
    Other,
}

/// Every `_` must sit between two digits, or between a base prefix and a
/// digit. After a `0x` prefix the letters `a..=f` count as digits.
///
/// `s` must not carry a leading sign.
pub(crate) fn underscores_well_placed(s: &[u8]) -> bool {
    let (mut last, hex, rest) = match s {
        [b'0', prefix, rest @ ..] if matches!(prefix.to_ascii_lowercase(), b'b' | b'o' | b'x') => {
            (Last::Digit, prefix.eq_ignore_ascii_case(&b'x'), rest)
        }
        _ => (Last::Other, false, s),
    };

    for &byte in rest {
        last = if byte.is_ascii_digit() || (hex && byte.is_ascii_hexdigit()) {
            Last::Digit
        } else if byte == b'_' {
            if last != Last::Digit {
                return false;
            }
            Last::Underscore
        } else {
            if last == Last::Underscore {
                return false;
            }
            Last::Other
        };
    }
    last != Last::Underscore
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_placements() {
        for literal in ["1_000", "0x_ff", "0b1_0", "0_7", "1_000.5", "1e1_0", "0x1_fp-2"] {
            assert!(underscores_well_placed(literal.as_bytes()), "literal {literal:?}");
        }
    }

    #[test]
    fn test_rejected_placements() {
        for literal in ["_1", "1_", "1__0", "0x_", "1_.5", "1._5", "1_e5", "1e_5", "in_f"] {
            assert!(!underscores_well_placed(literal.as_bytes()), "literal {literal:?}");
        }
    }
}
