//! Price text normalization.
//!
//! Menu and option prices are edited as free text. These functions gate
//! each keystroke: a keystroke that would make the field unparsable is
//! rejected by returning the previous value, so callers never need to
//! special-case bad input.

/// Normalizes raw price input against the previously accepted value.
///
/// Rules, in order:
/// - a decimal comma becomes a decimal point
/// - an empty field or a bare point is accepted as an in-progress value
/// - fractional digits past the second are truncated
/// - anything that still does not parse as a finite number rejects the
///   keystroke and returns `previous` unchanged
///
/// Idempotent over already-normalized values.
pub fn normalize_price_input(previous: &str, raw: &str) -> String {
    let candidate = raw.replace(',', ".");
    if candidate.is_empty() || candidate == "." {
        return candidate;
    }

    let candidate = match candidate.split_once('.') {
        Some((whole, frac)) if frac.chars().count() > 2 => {
            let frac: String = frac.chars().take(2).collect();
            format!("{}.{}", whole, frac)
        }
        _ => candidate,
    };

    match candidate.parse::<f64>() {
        Ok(value) if value.is_finite() => candidate,
        _ => previous.to_string(),
    }
}

/// Parses normalized price text into a finite number.
///
/// Returns None for in-progress values ("", ".") and anything non-finite.
pub fn parse_price(text: &str) -> Option<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_becomes_point() {
        assert_eq!(normalize_price_input("", "12,5"), "12.5");
        assert_eq!(normalize_price_input("", "2,50"), "2.50");
    }

    #[test]
    fn test_in_progress_values_accepted() {
        assert_eq!(normalize_price_input("12", ""), "");
        assert_eq!(normalize_price_input("12", "."), ".");
        assert_eq!(normalize_price_input("12", ","), ".");
    }

    #[test]
    fn test_fraction_truncated_to_two_digits() {
        assert_eq!(normalize_price_input("", "3.14159"), "3.14");
        assert_eq!(normalize_price_input("", "0,999"), "0.99");
    }

    #[test]
    fn test_garbage_rejected_keeps_previous() {
        assert_eq!(normalize_price_input("12.3", "12.3.4"), "12.3");
        assert_eq!(normalize_price_input("5", "abc"), "5");
        assert_eq!(normalize_price_input("", "1e999"), "");
    }

    #[test]
    fn test_idempotent_on_normalized_values() {
        for s in ["", ".", "0", "12.5", "2.50", "0.99", "100"] {
            assert_eq!(normalize_price_input(s, s), s);
        }
    }

    #[test]
    fn test_leading_point_parses() {
        assert_eq!(normalize_price_input("", ".5"), ".5");
        assert_eq!(normalize_price_input("", "5."), "5.");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.5"), Some(12.5));
        assert_eq!(parse_price("0"), Some(0.0));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("."), None);
        assert_eq!(parse_price("12.3.4"), None);
    }
}
