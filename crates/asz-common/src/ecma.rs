//! ECMAScript (ECMA-262, 3rd edition) value conversion algorithms.
//!
//! Constant coercion must reproduce the language runtime exactly, so these
//! never rely on Rust's `as` casts for out-of-range values: `f64 as i32`
//! saturates, while `ToInt32` wraps modulo 2^32.

const TWO_32: f64 = 4_294_967_296.0;
const TWO_31: f64 = 2_147_483_648.0;

/// `ToInteger`: NaN becomes +0, infinities and zeros are kept, everything
/// else is truncated toward zero.
#[must_use]
pub fn to_integer(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    if value == 0.0 || value.is_infinite() {
        return value;
    }
    value.signum() * value.abs().floor()
}

/// Reduce `value` modulo 2^32 into `[0, 2^32)`, with non-finite values mapping to 0.
fn modulo_two_32(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return 0.0;
    }
    let int = value.signum() * value.abs().floor();
    let m = int % TWO_32;
    if m < 0.0 { m + TWO_32 } else { m }
}

/// `ToInt32`: truncate and wrap into `[-2^31, 2^31 - 1]`.
#[must_use]
pub fn to_int32(value: f64) -> i32 {
    let m = modulo_two_32(value);
    let wrapped = if m >= TWO_31 { m - TWO_32 } else { m };
    // In range by construction.
    wrapped as i32
}

/// `ToUint32`: truncate and wrap into `[0, 2^32 - 1]`.
#[must_use]
pub fn to_uint32(value: f64) -> u32 {
    modulo_two_32(value) as u32
}

/// `ToBoolean` for a number: false for ±0 and NaN.
#[must_use]
pub fn number_to_boolean(value: f64) -> bool {
    !(value == 0.0 || value.is_nan())
}

/// `ToBoolean` for a string: false only for the empty string.
#[must_use]
pub fn string_to_boolean(value: &str) -> bool {
    !value.is_empty()
}

/// `ToNumber` for a boolean.
#[must_use]
pub const fn boolean_to_number(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

fn is_ecma_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{FEFF}'
            | '\u{000A}'
            | '\u{000D}'
            | '\u{2028}'
            | '\u{2029}'
    ) || c.is_whitespace()
}

/// `ToNumber` applied to a string (the `StringNumericLiteral` grammar).
///
/// Leading and trailing whitespace is ignored, the empty string is 0,
/// `0x` prefixes are hexadecimal, and anything that is not a decimal
/// literal or `Infinity` becomes NaN.
#[must_use]
pub fn string_to_number(value: &str) -> f64 {
    let trimmed = value.trim_matches(is_ecma_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return f64::NAN;
        }
        return hex
            .chars()
            .filter_map(|c| c.to_digit(16))
            .fold(0.0, |acc, d| acc * 16.0 + f64::from(d));
    }

    let (sign, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (-1.0, &trimmed[1..]),
        b'+' => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }

    // Rust accepts "inf" and "nan" spellings that ECMAScript does not.
    let is_decimal_literal = !unsigned.is_empty()
        && unsigned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        && unsigned.chars().next().is_some_and(|c| c.is_ascii_digit() || c == '.');

    if !is_decimal_literal {
        return f64::NAN;
    }

    match unsigned.parse::<f64>() {
        Ok(parsed) => sign * parsed,
        Err(_) => f64::NAN,
    }
}

/// `ToString` applied to a number (ECMA-262 9.8.1).
///
/// Uses the shortest digit string that round-trips, switching to exponent
/// notation outside `[1e-6, 1e21)`.
#[must_use]
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value < 0.0 {
        return format!("-{}", number_to_string(-value));
    }

    // `{:e}` yields the shortest round-trip digits as "d.ddde[-]n".
    let formatted = format!("{value:e}");
    let (mantissa, exponent) = match formatted.split_once('e') {
        Some(parts) => parts,
        None => return formatted,
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let k = digits.len() as i32;
    // Position of the decimal point relative to the digit string.
    let n = exponent + 1;

    if k <= n && n <= 21 {
        let mut out = digits;
        out.extend(std::iter::repeat_n('0', (n - k) as usize));
        out
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let exp = (n - 1).abs();
        if k == 1 {
            format!("{digits}e{sign}{exp}")
        } else {
            format!("{}.{}e{sign}{exp}", &digits[..1], &digits[1..])
        }
    }
}

/// `ToString` applied to a boolean.
#[must_use]
pub const fn boolean_to_string(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
