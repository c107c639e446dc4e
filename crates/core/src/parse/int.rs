use super::separators::underscores_well_placed;
use super::ParseResult;
use crate::Cause;

/// Widths accepted by [`parse_int`]; `0` is shorthand for 64
pub const INT_BIT_SIZES: [u32; 5] = [0, 8, 16, 32, 64];

/// Parse a signed integer literal in the given `base`, bounded by `bit_size`.
///
/// `base` is either `2..=36` or `0`. With `0` the radix comes from the
/// literal's prefix: `0x` is hexadecimal, `0o` and a bare leading `0` are
/// octal, `0b` is binary, anything else is decimal. Only in that mode may `_`
/// separate digits.
///
/// The result must fit a signed integer of `bit_size` bits and is returned
/// widened to `i64`.
///
/// # Errors
///
/// - [`Cause::Syntax`] for an empty literal or one with a non-digit
/// - [`Cause::InvalidBase`] / [`Cause::InvalidBitSize`] for unsupported arguments
/// - [`Cause::Range`] for a well formed literal that does not fit `bit_size`
pub fn parse_int(s: &str, base: u32, bit_size: u32) -> ParseResult<i64> {
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    };

    let magnitude = parse_magnitude(unsigned, base, bit_size)?;
    let cutoff = 1_u64 << (effective_bit_size(bit_size) - 1);
    if (!negative && magnitude >= cutoff) || (negative && magnitude > cutoff) {
        return Err(Cause::Range);
    }

    if negative {
        Ok(0_i64.wrapping_sub_unsigned(magnitude))
    } else {
        i64::try_from(magnitude).map_err(|_| Cause::Range)
    }
}

fn effective_bit_size(bit_size: u32) -> u32 {
    if bit_size == 0 {
        64
    } else {
        bit_size
    }
}

/// Parse the unsigned digits of a literal, bounded by the unsigned range of
/// `bit_size`. Argument checks come after the empty check and before any
/// digit is read.
fn parse_magnitude(s: &str, base: u32, bit_size: u32) -> ParseResult<u64> {
    if s.is_empty() {
        return Err(Cause::Syntax);
    }

    let (radix, digits) = match base {
        0 => detect_radix(s),
        2..=36 => (base, s),
        other => return Err(Cause::InvalidBase(other)),
    };

    if !INT_BIT_SIZES.contains(&bit_size) {
        return Err(Cause::InvalidBitSize(bit_size));
    }
    let bits = effective_bit_size(bit_size);
    let max = if bits == 64 {
        u64::MAX
    } else {
        (1_u64 << bits) - 1
    };

    let mut value = 0_u64;
    let mut saw_underscore = false;
    for byte in digits.bytes() {
        if byte == b'_' && base == 0 {
            saw_underscore = true;
            continue;
        }

        let digit = char::from(byte).to_digit(radix).ok_or(Cause::Syntax)?;
        value = value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
            .filter(|v| *v <= max)
            .ok_or(Cause::Range)?;
    }

    if saw_underscore && !underscores_well_placed(s.as_bytes()) {
        return Err(Cause::Syntax);
    }
    Ok(value)
}

/// Pick the radix for base `0` and return the digits after the prefix.
fn detect_radix(s: &str) -> (u32, &str) {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'0') {
        return (10, s);
    }
    if bytes.len() >= 3 {
        match bytes[1].to_ascii_lowercase() {
            b'x' => return (16, &s[2..]),
            b'o' => return (8, &s[2..]),
            b'b' => return (2, &s[2..]),
            _ => {}
        }
    }
    (8, &s[1..])
}
