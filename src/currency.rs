//! Lakh/crore digit grouping for rupee amounts.

/// Currency sign prefixed by [`display`]
pub const RUPEE: &str = "₹";

/// Group the integer magnitude of `amount` in the lakh/crore convention.
///
/// The sign and fractional part are dropped. Up to three digits are left
/// alone; beyond that the last three digits form one group, the two before
/// them (lakh) and the two before those (crore) form pairs, and any digits
/// ahead of the crore pair stay together as a single prefix.
///
/// `format(12345678) == "1,23,45,678"`
pub fn format(amount: f64) -> String {
    // Saturating cast: NaN maps to 0, huge values clamp to u128::MAX
    let magnitude = amount.abs().trunc() as u128;
    group_digits(&magnitude.to_string())
}

/// Render an amount for display, e.g. `₹ 1,23,456`
pub fn display(amount: f64) -> String {
    format!("{} {}", RUPEE, format(amount))
}

fn group_digits(s: &str) -> String {
    let l = s.len();
    if l > 7 {
        let (crores, rest) = s.split_at(l - 7);
        format!("{},{},{},{}", crores, &rest[..2], &rest[2..4], &rest[4..])
    } else if l > 5 {
        let (lakhs, rest) = s.split_at(l - 5);
        format!("{},{},{}", lakhs, &rest[..2], &rest[2..])
    } else if l > 3 {
        let (head, tail) = s.split_at(l - 3);
        format!("{},{}", head, tail)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_outputs() {
        assert_eq!(format(999.0), "999");
        assert_eq!(format(1234.0), "1,234");
        assert_eq!(format(123456.0), "1,23,456");
        assert_eq!(format(12345678.0), "1,23,45,678");
    }

    #[test]
    fn test_every_length_boundary() {
        assert_eq!(format(0.0), "0");
        assert_eq!(format(7.0), "7");
        assert_eq!(format(100.0), "100");
        assert_eq!(format(1000.0), "1,000");
        assert_eq!(format(99999.0), "99,999");
        assert_eq!(format(100000.0), "1,00,000");
        assert_eq!(format(1234567.0), "12,34,567");
        assert_eq!(format(9999999.0), "99,99,999");
        assert_eq!(format(10000000.0), "1,00,00,000");
        assert_eq!(format(99999999.0), "9,99,99,999");
    }

    #[test]
    fn test_crore_prefix_is_not_regrouped() {
        assert_eq!(format(123456789.0), "12,34,56,789");
        assert_eq!(format(1234567890.0), "123,45,67,890");
        assert_eq!(format(123456789012.0), "12345,67,89,012");
    }

    #[test]
    fn test_sign_and_fraction_dropped() {
        assert_eq!(format(-1234.9), "1,234");
        assert_eq!(format(999.999), "999");
        assert_eq!(format(-0.5), "0");
        assert_eq!(format(123456.78), "1,23,456");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format(f64::NAN), "0");
        assert_eq!(format(f64::INFINITY), format(u128::MAX as f64));
    }

    #[test]
    fn test_display() {
        assert_eq!(display(15_500_000.0), "₹ 1,55,00,000");
        assert_eq!(display(-42.0), "₹ 42");
    }
}
