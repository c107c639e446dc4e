use std::borrow::Cow;

use super::separators::underscores_well_placed;
use super::ParseResult;
use crate::Cause;

/// Target precision for rounding a parsed literal
#[derive(Clone, Copy)]
struct Format {
    precision: i64,
    min_exponent: i64,
    max_exponent: i64,
}

const SINGLE: Format = Format {
    precision: 24,
    min_exponent: -126,
    max_exponent: 127,
};

const DOUBLE: Format = Format {
    precision: 53,
    min_exponent: -1022,
    max_exponent: 1023,
};

/// Hex digits past this count only feed the sticky bit
const MAX_HEX_DIGITS: usize = 16;

/// Decimal exponents saturate here; anything larger over- or underflows anyway
const MAX_DECIMAL_EXPONENT: i64 = 10_000;

/// Parse a floating point literal, rounding to `bit_size` bits of precision.
///
/// The value is always returned as `f64`; with `bit_size == 32` it is first
/// rounded to the nearest `f32`. Accepted forms:
///
/// - decimal and scientific notation (`1.5`, `.5`, `2.5E-3`)
/// - hexadecimal mantissas with a mandatory binary exponent (`0x1.8p1`)
/// - `_` separators between digits (`1_000.5`, `0x_1p0`)
/// - `inf` and `infinity` in any case with an optional sign
/// - `nan` in any case, without a sign
///
/// A finite literal that overflows the requested precision is a range error.
pub fn parse_float(s: &str, bit_size: u32) -> ParseResult<f64> {
    let format = match bit_size {
        32 => SINGLE,
        64 => DOUBLE,
        other => return Err(Cause::InvalidBitSize(other)),
    };

    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    };
    if unsigned.len() != s.len() && unsigned.eq_ignore_ascii_case("nan") {
        return Err(Cause::Syntax);
    }

    let unsigned = if unsigned.contains('_') {
        if !underscores_well_placed(unsigned.as_bytes()) {
            return Err(Cause::Syntax);
        }
        Cow::Owned(unsigned.replace('_', ""))
    } else {
        Cow::Borrowed(unsigned)
    };

    let magnitude = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => parse_hex(hex, format)?,
        None => parse_decimal(&unsigned, format)?,
    };
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse an unsigned decimal literal, or one of the `inf`/`nan` spellings.
fn parse_decimal(s: &str, format: Format) -> ParseResult<f64> {
    if matches!(s.as_bytes().first(), Some(b'+' | b'-')) {
        return Err(Cause::Syntax);
    }

    let value = if format.precision == SINGLE.precision {
        s.parse::<f32>().map(f64::from)
    } else {
        s.parse::<f64>()
    }
    .map_err(|_| Cause::Syntax)?;

    if value.is_infinite() && !is_infinity_literal(s) {
        return Err(Cause::Range);
    }
    Ok(value)
}

fn is_infinity_literal(s: &str) -> bool {
    s.eq_ignore_ascii_case("inf") || s.eq_ignore_ascii_case("infinity")
}

/// Parse the part of a hexadecimal literal after `0x`: hex digits with at
/// most one `.`, then `p` and a signed decimal exponent of two.
fn parse_hex(s: &str, format: Format) -> ParseResult<f64> {
    let mut mantissa = 0_u64;
    let mut digits = 0_usize;
    let mut exponent = 0_i64;
    let mut sticky = false;
    let mut saw_digit = false;
    let mut saw_point = false;

    let mut end = s.len();
    for (i, byte) in s.bytes().enumerate() {
        if byte == b'.' {
            if saw_point {
                return Err(Cause::Syntax);
            }
            saw_point = true;
            continue;
        }
        let Some(digit) = char::from(byte).to_digit(16) else {
            end = i;
            break;
        };
        saw_digit = true;

        if mantissa == 0 && digit == 0 {
            if saw_point {
                exponent -= 4;
            }
        } else if digits < MAX_HEX_DIGITS {
            mantissa = (mantissa << 4) | u64::from(digit);
            digits += 1;
            if saw_point {
                exponent -= 4;
            }
        } else {
            sticky |= digit != 0;
            if !saw_point {
                exponent += 4;
            }
        }
    }
    if !saw_digit {
        return Err(Cause::Syntax);
    }

    let binary_exponent = s[end..]
        .strip_prefix(|c: char| c == 'p' || c == 'P')
        .ok_or(Cause::Syntax)?;
    exponent += parse_exponent(binary_exponent)?;

    round_to_format(mantissa, exponent, sticky, format)
}

/// Parse an optionally signed run of decimal digits, saturating large values.
fn parse_exponent(s: &str) -> ParseResult<i64> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Cause::Syntax);
    }

    let magnitude = digits.bytes().fold(0_i64, |acc, b| {
        if acc < MAX_DECIMAL_EXPONENT {
            acc * 10 + i64::from(b - b'0')
        } else {
            acc
        }
    });
    Ok(if negative { -magnitude } else { magnitude })
}

/// Round `mantissa * 2^exponent` to the nearest value of `format`, ties to
/// even. `sticky` marks nonzero digits that were dropped below the mantissa.
fn round_to_format(mantissa: u64, exponent: i64, sticky: bool, format: Format) -> ParseResult<f64> {
    if mantissa == 0 {
        return Ok(0.0);
    }

    let top_bit = 63 - i64::from(mantissa.leading_zeros());
    let value_exponent = top_bit + exponent;
    let keep = if value_exponent >= format.min_exponent {
        format.precision
    } else {
        format.precision - (format.min_exponent - value_exponent)
    };
    if keep < 0 {
        return Ok(0.0);
    }

    let mut kept = u128::from(mantissa);
    let mut scale = exponent;
    let shift = top_bit + 1 - keep;
    if shift > 0 {
        let wide = u128::from(mantissa);
        let half = 1_u128 << (shift - 1);
        let remainder = wide & ((1_u128 << shift) - 1);
        kept = wide >> shift;
        if remainder > half || (remainder == half && (sticky || kept & 1 == 1)) {
            kept += 1;
        }
        scale += shift;
    }
    if kept == 0 {
        return Ok(0.0);
    }

    let result_exponent = 127 - i64::from(kept.leading_zeros()) + scale;
    if result_exponent > format.max_exponent {
        return Err(Cause::Range);
    }
    // `kept` holds at most `precision` bits, so the conversion is exact.
    Ok(scale_by_power_of_two(kept as f64, scale))
}

/// Multiply by `2^exponent` in steps that stay inside the normal range, so a
/// representable result is exact.
fn scale_by_power_of_two(mut value: f64, mut exponent: i64) -> f64 {
    const STEP: i64 = 1000;
    while exponent > STEP {
        value *= power_of_two(STEP);
        exponent -= STEP;
    }
    while exponent < -STEP {
        value *= power_of_two(-STEP);
        exponent += STEP;
    }
    value * power_of_two(exponent)
}

/// `2^exponent` for `exponent` in `-1022..=1023`
fn power_of_two(exponent: i64) -> f64 {
    let biased = u64::try_from(exponent + 1023).unwrap_or(0);
    f64::from_bits(biased << 52)
}
