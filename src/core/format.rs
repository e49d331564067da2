//! Number formatting for dashboard widgets

use serde_json::Value;

const MAX_FRACTION_DIGITS: usize = 3;

/// Loosely converts a JSON value to a number.
///
/// Null and empty strings become `0`, booleans become `0`/`1`, numeric strings
/// are parsed after trimming. Anything else is `NaN`.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// Formats a number with `,` thousands separators and up to three fraction
/// digits, trailing zeros dropped.
///
/// Non-finite values render as `NaN`, `∞` or `-∞`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let grouped = group_thousands(int_part);
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Formats a fraction as a percentage with one decimal, e.g. `0.734` to `73.4%`.
pub fn format_share(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(50_000.0), "50,000");
        assert_eq!(format_number(1_000_000.0), "1,000,000");
        assert_eq!(format_number(-1_000_000.0), "-1,000,000");
        assert_eq!(format_number(123_456_789.0), "123,456,789");
    }

    #[test]
    fn test_format_number_fraction_digits() {
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(0.125), "0.125");
        assert_eq!(format_number(2.0004), "2");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(-12.25), "-12.25");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(0.734), "73.4%");
        assert_eq!(format_share(1.0), "100.0%");
        assert_eq!(format_share(0.0), "0.0%");
        assert_eq!(format_share(0.5), "50.0%");
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(42)), 42.0);
        assert_eq!(coerce_number(&json!(-1.5)), -1.5);
        assert_eq!(coerce_number(&json!(" 1200 ")), 1200.0);
        assert_eq!(coerce_number(&json!("")), 0.0);
        assert_eq!(coerce_number(&json!(null)), 0.0);
        assert_eq!(coerce_number(&json!(true)), 1.0);
        assert_eq!(coerce_number(&json!(false)), 0.0);
        assert!(coerce_number(&json!("n/a")).is_nan());
        assert!(coerce_number(&json!([1])).is_nan());
        assert!(coerce_number(&json!({"v": 1})).is_nan());
    }
}
