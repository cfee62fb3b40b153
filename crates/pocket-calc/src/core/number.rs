//! Number text conventions
//!
//! Results are shown the way a browser prints a number: shortest
//! round-trip digits, exponent form outside `[1e-6, 1e21)`, and
//! `Infinity`/`NaN` for non-finite values. Parsing accepts the longest
//! leading decimal literal, so partially edited input such as `"5."` or
//! `"1e+"` still yields a value.

/// Lower bound (inclusive) of magnitudes printed in positional notation
const POSITIONAL_MIN: f64 = 1e-6;
/// Upper bound (exclusive) of magnitudes printed in positional notation
const POSITIONAL_MAX: f64 = 1e21;

/// Formats a value as display text
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (POSITIONAL_MIN..POSITIONAL_MAX).contains(&magnitude) {
        return format!("{value}");
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Parses the longest leading decimal literal of `text`
///
/// Returns NaN when `text` does not start with a number.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let integer_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - integer_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction_end = skip_digits(bytes, end + 1);
        digits += fraction_end - (end + 1);
        if digits > 0 {
            end = fraction_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_end = skip_digits(bytes, cursor);
        if exponent_end > cursor {
            end = exponent_end;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

/// Parses `text` and keeps the value only when it is finite
#[must_use]
pub fn parse_finite(text: &str) -> Option<f64> {
    Some(parse_number(text)).filter(|value| value.is_finite())
}

fn skip_digits(bytes: &[u8], mut index: usize) -> usize {
    while bytes.get(index).is_some_and(u8::is_ascii_digit) {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== format_number =====

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(-8.0), "-8");
        assert_eq!(format_number(1024.0), "1024");
    }

    #[test]
    fn test_format_zero_and_negative_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_decimals() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-2.25), "-2.25");
    }

    #[test]
    fn test_format_large_values_use_exponent() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e300), "1.5e+300");
        assert_eq!(format_number(-2e25), "-2e+25");
    }

    #[test]
    fn test_format_small_values_use_exponent() {
        assert_eq!(format_number(0.000_001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    // ===== parse_number =====

    #[test]
    fn test_parse_plain_literals() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("0.5"), 0.5);
        assert_eq!(parse_number("-8"), -8.0);
        assert_eq!(parse_number(".25"), 0.25);
    }

    #[test]
    fn test_parse_trailing_dot() {
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("0."), 0.0);
    }

    #[test]
    fn test_parse_exponent_forms() {
        assert_eq!(parse_number("1e+21"), 1e21);
        assert_eq!(parse_number("1.5e-7"), 1.5e-7);
        assert_eq!(parse_number("1e+"), 1.0);
        assert_eq!(parse_number("2e"), 2.0);
    }

    #[test]
    fn test_parse_prefix_only() {
        assert_eq!(parse_number("12abc"), 12.0);
        assert_eq!(parse_number("  7"), 7.0);
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("Infinit").is_nan());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_number("").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number(".").is_nan());
        assert!(parse_number("NaN").is_nan());
    }

    #[test]
    fn test_parse_finite() {
        assert_eq!(parse_finite("3"), Some(3.0));
        assert_eq!(parse_finite("Infinity"), None);
        assert_eq!(parse_finite("-"), None);
        assert_eq!(parse_finite("1e400"), None);
    }

    #[test]
    fn test_format_then_parse_is_stable() {
        for value in [0.1, 1e21, 1.5e-7, -123.456, 7.0] {
            assert_eq!(parse_number(&format_number(value)), value);
        }
    }
}
