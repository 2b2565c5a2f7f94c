use crate::error::{Result, SalesSummaryError};

/// Magnitude suffixes in scaling order. A value that would need more
/// divisions than the ladder has rungs stays at the largest unit and prints
/// an oversized figure; the ladder never overflows.
pub const UNIT_LADDER: [&str; 3] = ["", "thousand", "million"];

/// Renders a magnitude as `"[prefix ]<value> <unit>"`, dividing by 1000 until
/// the value drops below 1000 or the unit ladder runs out, with exactly two
/// decimal digits.
///
/// `format_magnitude(0.0, "")` is `"0.00 "`, `format_magnitude(1500.0, "")`
/// is `"1.50 thousand"`, `format_magnitude(2_500_000.0, "R$")` is
/// `"R$ 2.50 million"`. Negative or non-finite input is a domain error.
pub fn format_magnitude(value: f64, prefix: &str) -> Result<String> {
    if !value.is_finite() || value < 0.0 {
        return Err(SalesSummaryError::UnformattableValue(value));
    }

    let mut scaled = value;
    let mut steps = 0;
    while scaled >= 1000.0 && steps + 1 < UNIT_LADDER.len() {
        scaled /= 1000.0;
        steps += 1;
    }

    let rendered = format!("{:.2} {}", scaled, UNIT_LADDER[steps]);
    if prefix.is_empty() {
        Ok(rendered)
    } else {
        Ok(format!("{} {}", prefix, rendered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_below_one_thousand_get_no_unit() {
        assert_eq!(format_magnitude(0.0, "").unwrap(), "0.00 ");
        assert_eq!(format_magnitude(999.0, "").unwrap(), "999.00 ");
        assert_eq!(format_magnitude(42.5, "").unwrap(), "42.50 ");
    }

    #[test]
    fn test_one_scale_step() {
        assert_eq!(format_magnitude(1500.0, "").unwrap(), "1.50 thousand");
        assert_eq!(format_magnitude(1000.0, "").unwrap(), "1.00 thousand");
    }

    #[test]
    fn test_two_scale_steps() {
        assert_eq!(format_magnitude(2_500_000.0, "").unwrap(), "2.50 million");
    }

    #[test]
    fn test_ladder_caps_at_largest_unit() {
        assert_eq!(
            format_magnitude(7_200_000_000.0, "").unwrap(),
            "7200.00 million"
        );
    }

    #[test]
    fn test_prefix_is_prepended_with_a_space() {
        assert_eq!(
            format_magnitude(2_500_000.0, "R$").unwrap(),
            "R$ 2.50 million"
        );
        assert_eq!(format_magnitude(0.0, "R$").unwrap(), "R$ 0.00 ");
    }

    #[test]
    fn test_out_of_domain_values_are_errors() {
        assert!(format_magnitude(-1.0, "").is_err());
        assert!(format_magnitude(f64::NAN, "").is_err());
        assert!(format_magnitude(f64::INFINITY, "").is_err());
    }
}
