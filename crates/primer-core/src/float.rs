//! Float locking and canonical float text
//!
//! Floating point results drift away from the exact values they represent
//! (`sin(π)` is about `1.2e-16`, not zero). Locking snaps such results back
//! onto the canonical value when they agree at single precision.
//!
//! Canonical float text uses 15 significant digits where they suffice and
//! the shortest exact digits otherwise, an upper case exponent without
//! leading zeros, and named constants for the transcendentals.

use std::f64::consts::{E, PI, TAU};

/// The golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Magnitudes at or below this lock to zero (the error in `sin(π)`).
pub const ZERO_LOCK: f64 = 1.224_646_799_147_351_5e-16;

/// Significant digits preferred when formatting floats.
pub const SOURCE_PRECISION: usize = 15;

/// Snap a component onto `0`, `-1` or `1` when it matches at single precision.
pub fn lock_float(value: f64) -> f64 {
    let value32 = value as f32;
    if (value.abs() as f32) <= ZERO_LOCK as f32 {
        0.0
    } else if value32 == -1.0 {
        -1.0
    } else if value32 == 1.0 {
        1.0
    } else if value.is_infinite() {
        f64::INFINITY
    } else {
        value
    }
}

/// Snap an angle onto `0`, `π/2`, `π` or `3π/2` when it matches at single
/// precision.
pub fn lock_angle(value: f64) -> f64 {
    let value32 = value as f32;
    if (value.abs() as f32) <= ZERO_LOCK as f32 {
        0.0
    } else if value32 == (0.5 * PI) as f32 {
        0.5 * PI
    } else if value32 == PI as f32 {
        PI
    } else if value32 == (1.5 * PI) as f32 {
        1.5 * PI
    } else {
        value
    }
}

/// IEEE 754 remainder: `x - n*y` where `n` is `x/y` rounded half to even.
pub fn remainder(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() || x.is_infinite() || y == 0.0 {
        return f64::NAN;
    }
    if y.is_infinite() {
        return x;
    }
    let quotient = x / y;
    let mut n = quotient.round();
    if (quotient - quotient.trunc()).abs() == 0.5 && n % 2.0 != 0.0 {
        n -= quotient.signum();
    }
    x - n * y
}

// Lay out the digits of `{:e}` style text for `value`.
fn layout(value: f64, scientific: &str, positional: bool) -> String {
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific.to_string(),
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut text = String::new();
    if value < 0.0 {
        text.push('-');
    }
    if !positional && (exponent < -4 || exponent >= SOURCE_PRECISION as i32) {
        text.push_str(&digits[..1]);
        if digits.len() > 1 {
            text.push('.');
            text.push_str(&digits[1..]);
        }
        text.push('E');
        text.push(if exponent < 0 { '-' } else { '+' });
        text.push_str(&exponent.unsigned_abs().to_string());
    } else if exponent < 0 {
        text.push_str("0.");
        text.push_str(&"0".repeat((-exponent - 1) as usize));
        text.push_str(digits);
    } else {
        let whole = exponent as usize + 1;
        if digits.len() <= whole {
            text.push_str(digits);
            text.push_str(&"0".repeat(whole - digits.len()));
        } else {
            text.push_str(&digits[..whole]);
            text.push('.');
            text.push_str(&digits[whole..]);
        }
    }
    text
}

fn rounded(value: f64, positional: bool) -> String {
    layout(value, &format!("{:.*e}", SOURCE_PRECISION - 1, value.abs()), positional)
}

// Rounded text when it reads back exactly, otherwise the shortest text that
// does.
fn exact(value: f64, positional: bool) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let text = rounded(value, positional);
    if text.parse::<f64>() == Ok(value) {
        text
    } else {
        layout(value, &format!("{:e}", value.abs()), positional)
    }
}

/// Format a float so that it parses back to the same value.
///
/// Values that fit in `SOURCE_PRECISION` significant digits use them, others
/// get as many digits as they need. Small and large exponents use
/// scientific notation (`1.23456789E+100`), everything else is written
/// positionally. Trailing zeros are dropped.
pub fn format_float(value: f64) -> String {
    exact(value, false)
}

/// Like `format_float` but never uses scientific notation.
pub fn format_positional(value: f64) -> String {
    exact(value, true)
}

/// Format a float rounded to `SOURCE_PRECISION` significant digits.
pub fn format_rounded(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    rounded(value, false)
}

fn masked(value: f64) -> u64 {
    value.to_bits() & !1
}

fn named_source(value: f64) -> Option<String> {
    let bits = masked(value);
    let named = [(E, "e"), (PI, "π"), (TAU, "τ"), (PHI, "φ")];
    for (constant, name) in named {
        if bits == masked(constant) {
            return Some(name.to_string());
        }
        if bits == masked(-constant) {
            return Some(format!("-{name}"));
        }
    }
    if value.is_nan() {
        Some("undefined".to_string())
    } else if value == f64::INFINITY {
        Some("∞".to_string())
    } else if value == f64::NEG_INFINITY {
        Some("-∞".to_string())
    } else {
        None
    }
}

/// Canonical text for a real value.
///
/// The transcendentals are recognized ignoring the least significant bit so
/// that platform rounding in their computation does not matter.
pub fn source_from_float(value: f64) -> String {
    named_source(value).unwrap_or_else(|| format_float(value))
}

/// Text for a real value rounded to `SOURCE_PRECISION` significant digits,
/// for values that are approximate anyway.
pub fn rounded_source_from_float(value: f64) -> String {
    named_source(value).unwrap_or_else(|| format_rounded(value))
}

/// Parse a real token accepted by the `REAL` grammar fragment.
pub fn float_from_source(source: &str) -> Option<f64> {
    let (negative, unsigned) = match source.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, source.strip_prefix('+').unwrap_or(source)),
    };
    let magnitude = match unsigned {
        "e" => E,
        "pi" | "π" => PI,
        "tau" | "τ" => TAU,
        "phi" | "φ" => PHI,
        "infinity" | "∞" => f64::INFINITY,
        "undefined" => return Some(f64::NAN),
        _ => return source.parse().ok(),
    };
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_float() {
        assert_eq!(lock_float(PI.sin()), 0.0);
        assert_eq!(lock_float(-PI.sin()), 0.0);
        assert_eq!(lock_float((0.5 * PI).cos()), 0.0);
        assert_eq!(lock_float(0.999_999_999_999_9), 1.0);
        assert_eq!(lock_float(-1.000_000_000_000_1), -1.0);
        assert_eq!(lock_float(0.25), 0.25);
    }

    #[test]
    fn test_lock_angle() {
        assert_eq!(lock_angle(1e-17), 0.0);
        assert_eq!(lock_angle(PI + 1e-15), PI);
        assert_eq!(lock_angle(4.712_388_980_384_69), 1.5 * PI);
        assert_eq!(lock_angle(1.0), 1.0);
    }

    #[test]
    fn test_remainder_rounds_to_even() {
        assert_eq!(remainder(5.0, 2.0), 1.0);
        assert_eq!(remainder(7.0, 2.0), -1.0);
        assert_eq!(remainder(TAU, TAU), 0.0);
        assert!(remainder(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1.23456789e100), "1.23456789E+100");
        assert_eq!(format_float(1.23456789e-10), "1.23456789E-10");
        assert_eq!(format_float(-1.2), "-1.2");
        assert_eq!(format_float(5.0), "5");
        assert_eq!(format_float(1500.0), "1500");
        assert_eq!(format_float(0.001), "0.001");
        assert_eq!(format_float(1e15), "1E+15");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_float(f64::MAX), "1.7976931348623157E+308");
    }

    #[test]
    fn test_format_float_reads_back() {
        for value in [1.0 / 3.0, 0.1 + 0.2, PI / 7.0, 1e-300 / 3.0, 123_456_789.123_456_78] {
            assert_eq!(format_float(value).parse::<f64>(), Ok(value));
        }
    }

    #[test]
    fn test_format_positional_and_rounded() {
        assert_eq!(format_positional(1.5e-5), "0.000015");
        assert_eq!(format_positional(0.5), "0.5");
        assert_eq!(format_positional(1.0), "1");
        assert_eq!(format_rounded(1.0 / 3.0), "0.333333333333333");
        assert_eq!(format_rounded(1.5 * PI), "4.71238898038469");
        assert_eq!(rounded_source_from_float(PI), "π");
        assert_eq!(rounded_source_from_float(5.000_000_000_000_001), "5");
    }

    #[test]
    fn test_source_from_float() {
        assert_eq!(source_from_float(E), "e");
        assert_eq!(source_from_float(-PI), "-π");
        assert_eq!(source_from_float(TAU), "τ");
        assert_eq!(source_from_float(PHI), "φ");
        assert_eq!(source_from_float(f64::INFINITY), "∞");
        assert_eq!(source_from_float(f64::NEG_INFINITY), "-∞");
        assert_eq!(source_from_float(f64::NAN), "undefined");
        assert_eq!(source_from_float(1.7), "1.7");
    }

    #[test]
    fn test_float_from_source() {
        assert_eq!(float_from_source("-π"), Some(-PI));
        assert_eq!(float_from_source("+tau"), Some(TAU));
        assert_eq!(float_from_source("infinity"), Some(f64::INFINITY));
        assert_eq!(float_from_source("-∞"), Some(f64::NEG_INFINITY));
        assert_eq!(float_from_source("1.5E+3"), Some(1500.0));
        assert!(float_from_source("undefined").map_or(false, f64::is_nan));
    }
}
