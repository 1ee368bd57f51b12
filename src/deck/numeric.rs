//! Leading-number extraction from formatted figures.
//!
//! Chart data arrives as display strings (`"55%"`, `"₹6L"`, `"1,500"`). The
//! scan skips any prefix that is not part of a number, then reads digits,
//! comma thousands separators and at most one decimal point, and stops at the
//! first other character.

/// Extract the leading number of a formatted string.
///
/// A `-` directly before the first digit makes the result negative. Returns
/// `None` when the string holds no digit at all.
///
/// # Examples
///
/// ```
/// use scaleup_deck::deck::numeric::extract_number;
///
/// assert_eq!(extract_number("55%"), Some(55.0));
/// assert_eq!(extract_number("₹6L"), Some(6.0));
/// assert_eq!(extract_number("1,500"), Some(1500.0));
/// assert_eq!(extract_number("₹2.5Cr"), Some(2.5));
/// assert_eq!(extract_number("n/a"), None);
/// ```
pub fn extract_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let first_digit = bytes.iter().position(u8::is_ascii_digit)?;
    // ".5" style values start at the point
    let start = if first_digit > 0 && bytes[first_digit - 1] == b'.' {
        first_digit - 1
    } else {
        first_digit
    };

    let negative = start > 0 && bytes[start - 1] == b'-';

    let mut digits = String::with_capacity(bytes.len() - start + 2);
    if negative {
        digits.push('-');
    }
    if bytes[start] == b'.' {
        digits.push('0');
    }
    let mut seen_point = false;
    for &b in &bytes[start..] {
        match b {
            b'0'..=b'9' => digits.push(b as char),
            b',' => {},
            b'.' if !seen_point => {
                seen_point = true;
                digits.push('.');
            },
            _ => break,
        }
    }
    // "12." parses as 12
    if digits.ends_with('.') {
        digits.pop();
    }

    fast_float2::parse::<f64, _>(&digits).ok()
}

/// Extract the leading number, or `0.0` when there is none.
#[inline]
pub fn extract_number_or_zero(text: &str) -> f64 {
    extract_number(text).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_formatted_figures() {
        assert_eq!(extract_number("55%"), Some(55.0));
        assert_eq!(extract_number("₹6L"), Some(6.0));
        assert_eq!(extract_number("1,500"), Some(1500.0));
        assert_eq!(extract_number("₹2.5Cr"), Some(2.5));
        assert_eq!(extract_number("~60%"), Some(60.0));
        assert_eq!(extract_number("  ₹1,720 blended"), Some(1720.0));
        assert_eq!(extract_number("5.2x"), Some(5.2));
        assert_eq!(extract_number(".5"), Some(0.5));
        assert_eq!(extract_number("12."), Some(12.0));
    }

    #[test]
    fn test_stops_at_second_point() {
        assert_eq!(extract_number("1.2.3"), Some(1.2));
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(extract_number("-12%"), Some(-12.0));
        assert_eq!(extract_number("₹-3L"), Some(-3.0));
        // A dash separated from the digits is not a sign
        assert_eq!(extract_number("- 3"), Some(3.0));
    }

    #[test]
    fn test_no_number() {
        assert_eq!(extract_number(""), None);
        assert_eq!(extract_number("n/a"), None);
        assert_eq!(extract_number("₹"), None);
        assert_eq!(extract_number_or_zero("Free"), 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_integer_with_prefix_and_suffix(
            value in 0u32..10_000_000,
            prefix in prop::sample::select(vec!["", "₹", "$", "~", " "]),
            suffix in prop::sample::select(vec!["", "%", "L", "Cr", "x", " users"]),
        ) {
            let text = format!("{prefix}{value}{suffix}");
            prop_assert_eq!(extract_number(&text), Some(value as f64));
        }

        #[test]
        fn prop_thousands_separators_are_ignored(value in 1_000u64..1_000_000_000) {
            let plain = value.to_string();
            let mut grouped = String::new();
            for (i, ch) in plain.chars().enumerate() {
                if i > 0 && (plain.len() - i) % 3 == 0 {
                    grouped.push(',');
                }
                grouped.push(ch);
            }
            prop_assert_eq!(extract_number(&grouped), Some(value as f64));
        }

        #[test]
        fn prop_never_panics(text in ".*") {
            let _ = extract_number(&text);
        }
    }
}
